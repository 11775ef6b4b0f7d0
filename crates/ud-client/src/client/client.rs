use crate::{ClientError, ClientResult};

use ud_core::{RemoteUser, User};

use log::{debug, warn};
use reqwest::Client as ReqwestClient;

/// Message surfaced when the directory answers with a non-success status
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch users";

/// HTTP client for the public user directory.
///
/// One unauthenticated GET per call; no retries, paging or timeouts.
pub struct Client {
    pub url: String,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `url` - Full users endpoint (e.g., "https://jsonplaceholder.typicode.com/users")
    pub fn new(url: &str) -> Self {
        Self {
            url: url.trim_end_matches('/').to_string(),
            client: ReqwestClient::new(),
        }
    }

    /// Fetch the full directory listing.
    pub async fn fetch_users(&self) -> ClientResult<Vec<User>> {
        debug!("GET {}", self.url);
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();

        if !status.is_success() {
            warn!("Directory returned {} for {}", status, self.url);
            return Err(ClientError::status(status.as_u16(), FETCH_FAILED_MESSAGE));
        }

        let body = response.bytes().await?;
        let users: Vec<RemoteUser> = serde_json::from_slice(&body)?;
        debug!("Directory returned {} users", users.len());

        Ok(users.into_iter().map(User::from).collect())
    }
}
