pub(crate) mod client;
pub(crate) mod error;

pub use client::{Client, FETCH_FAILED_MESSAGE};
pub use error::{ClientError, Result as ClientResult};
