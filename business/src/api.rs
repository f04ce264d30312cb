//! Users endpoint client.

use log::info;
use thiserror::Error;

use crate::http::Client;
use crate::{DirectoryConfig, Record, UsersResponse};

/// Every way the initial read can fail. The UI shows the message as is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Failed to fetch users: server returned status {0}")]
    Status(u16),
    #[error("Failed to fetch users: {0}")]
    Transport(String),
    #[error("Failed to read users: {0}")]
    Parse(String),
}

/// `GET {api_base_url}/users?limit={user_limit}`, mapped into records.
pub async fn fetch_users(config: &DirectoryConfig) -> Result<Vec<Record>, FetchError> {
    let url = config.users_url();
    info!("Fetching users from {url}");

    let response = Client::get(url)
        .header("accept", "application/json")
        .send()
        .await
        .map_err(|e| FetchError::Transport(e.message))?;

    if !response.is_success() {
        return Err(FetchError::Status(response.status));
    }

    let payload: UsersResponse = response
        .json()
        .map_err(|e| FetchError::Parse(e.to_string()))?;

    Ok(payload.into_records(config.status_policy, config.record_limit()))
}
