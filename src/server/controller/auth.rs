use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::server::{
    error::AppError,
    middleware::{
        auth::AuthGuard,
        session::{AuthSession, CsrfSession},
    },
    service::auth::DiscordAuthService,
    state::AppState,
};

/// Query parameters for the OAuth callback endpoint.
#[derive(Deserialize)]
pub struct CallbackParams {
    /// CSRF state token to be validated against the session value.
    pub state: String,
    /// Authorization code from Discord for token exchange.
    pub code: String,
}

/// GET /login/discord - Start authorizing the application with Discord
///
/// Users already logged in with a stored credential are sent back home. Everyone else
/// is redirected to Discord's consent page; the CSRF state is kept in the session.
///
/// # Returns
/// - `307 Temporary Redirect`: To Discord, or to `/` when already authorized
pub async fn login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = DiscordAuthService::new(
        &state.db,
        &state.oauth_client,
        &state.token_exchange,
        &state.client_factory,
    );

    if let Some(user_id) = AuthSession::new(&session).get_user_id().await? {
        if auth_service.is_authorized(user_id).await? {
            return Ok(Redirect::temporary("/"));
        }
    }

    let (url, csrf_token) = auth_service.login_url();

    CsrfSession::new(&session)
        .set_token(csrf_token.secret().clone())
        .await?;

    Ok(Redirect::temporary(url.as_str()))
}

/// GET /auth/discord - OAuth redirect target
///
/// Validates the CSRF state, stores the user's credential and logs them in.
///
/// # Returns
/// - `200 OK`: JSON UserDto of the user who authorized
/// - `400 Bad Request`: CSRF mismatch or Discord rejected the code
/// - `502 Bad Gateway`: The new token could not read the user
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    params: Query<CallbackParams>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = DiscordAuthService::new(
        &state.db,
        &state.oauth_client,
        &state.token_exchange,
        &state.client_factory,
    );

    CsrfSession::new(&session).validate(&params.0.state).await?;

    let user = auth_service.callback(params.0.code).await?;

    AuthSession::new(&session).set_user_id(user.id.get()).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// GET /api/auth/logout - Clear the session
///
/// The stored credential is kept, the bot can still act for the user.
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok(StatusCode::OK)
}

/// POST /api/auth/disconnect - Revoke and delete the user's Discord credential
///
/// Revocation at Discord is best effort; the credential is deleted either way and
/// the session is cleared.
///
/// # Returns
/// - `204 No Content`: Credential removed, or there was none
/// - `404 Not Found`: No user in session
pub async fn disconnect(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user_id = AuthGuard::new(&session).require().await?;

    state.token_service().disconnect(user_id).await?;
    AuthSession::new(&session).clear().await;

    Ok(StatusCode::NO_CONTENT)
}
