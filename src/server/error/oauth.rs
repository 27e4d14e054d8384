//! Errors of the delegated OAuth credential lifecycle.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Failure to obtain or keep a usable delegated credential for a user.
///
/// Every variant is scoped to a single user and none is retryable within the same
/// call: by the time one is returned the stored credential has already been purged
/// (or never existed), so the only remedy is a fresh authorization by the user.
#[derive(Error, Debug)]
pub enum OAuthError {
    /// No credential is stored for the user.
    #[error("No authorization found for user {user_id}")]
    NotAuthorized { user_id: u64 },

    /// The provider rejected or failed the refresh exchange; the credential was deleted.
    #[error("Failed to refresh access token for user {user_id}")]
    RefreshFailed {
        user_id: u64,
        #[source]
        source: ExchangeError,
    },

    /// The refresh succeeded but dropped previously granted scopes; the credential was deleted.
    #[error("Missing scopes in refreshed token for user {user_id}: {}", missing.join(", "))]
    ScopeNarrowed { user_id: u64, missing: Vec<String> },

    /// Discord rejected the token during a delegated call; the credential was deleted.
    #[error("Authorization expired for user {user_id}")]
    Revoked { user_id: u64 },
}

impl OAuthError {
    /// The user whose credential is missing or was invalidated.
    pub fn user_id(&self) -> u64 {
        match self {
            Self::NotAuthorized { user_id }
            | Self::RefreshFailed { user_id, .. }
            | Self::ScopeNarrowed { user_id, .. }
            | Self::Revoked { user_id } => *user_id,
        }
    }
}

/// Failure of a token endpoint exchange (authorization code, refresh or revocation).
#[derive(Error, Debug)]
pub enum ExchangeError {
    /// The token endpoint could not be reached or answered with an error.
    #[error("Token endpoint request failed: {0}")]
    Provider(String),

    /// The token endpoint answered without a field this application relies on.
    #[error("Token response is missing {0}")]
    IncompleteResponse(&'static str),
}

/// Converts OAuth errors into HTTP responses.
///
/// All variants result in 401 Unauthorized so the frontend can send the user back
/// through `/login/discord`.
impl IntoResponse for OAuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                error: "Please authorize with Discord to continue.".to_string(),
            }),
        )
            .into_response()
    }
}
