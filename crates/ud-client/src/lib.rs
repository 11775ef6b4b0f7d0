//! ud-client library
//!
//! HTTP client for the public user directory.

pub(crate) mod client;


pub use client::{Client, ClientError, ClientResult, FETCH_FAILED_MESSAGE};
