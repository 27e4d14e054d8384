use thiserror::Error;

/// Failure of a call made to the Discord API on behalf of a user.
#[derive(Error, Debug)]
pub enum DiscordApiError {
    /// Discord answered 401 Unauthorized, the access token is expired or revoked.
    #[error("Discord rejected the delegated access token")]
    Unauthorized,

    /// Discord answered with any other non-success status.
    #[error("Discord API request to {path} failed with status {status}")]
    UnexpectedStatus {
        path: String,
        status: reqwest::StatusCode,
    },

    /// Transport or decoding failure.
    #[error(transparent)]
    Request(#[from] reqwest::Error),
}
