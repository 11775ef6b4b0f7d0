use ud_client::{Client, ClientResult};
use ud_core::User;

use async_trait::async_trait;

/// Source of remote-origin users.
///
/// `ud_client::Client` is the production implementation; tests substitute
/// canned listings.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn fetch_users(&self) -> ClientResult<Vec<User>>;
}

#[async_trait]
impl UserDirectory for Client {
    async fn fetch_users(&self) -> ClientResult<Vec<User>> {
        Client::fetch_users(self).await
    }
}
