use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::server::{
    error::AppError, middleware::auth::AuthGuard, service::steam::SteamService, state::AppState,
};

/// GET /api/steam/connections - Steam accounts of the current user
///
/// Reads the user's Discord connections with their delegated token and marks each
/// Steam account with whether it is linked.
///
/// # Returns
/// - `200 OK`: JSON array of SteamConnectionDto ordered by Steam ID
/// - `401 Unauthorized`: The user must authorize with Discord again
/// - `404 Not Found`: No user in session
pub async fn get_connections(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user_id = AuthGuard::new(&session).require().await?;

    let steam_service = SteamService::new(&state.db, state.token_service());
    let connections = steam_service.list_connections(user_id).await?;

    let connections_dto: Vec<_> = connections.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(connections_dto)))
}
