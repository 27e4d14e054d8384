use axum::{
    routing::{get, post},
    Router,
};

use crate::server::{
    controller::{
        auth::{callback, disconnect, login, logout},
        steam::get_connections,
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login/discord", get(login))
        .route("/auth/discord", get(callback))
        .route("/api/auth/logout", get(logout))
        .route("/api/auth/disconnect", post(disconnect))
        .route("/api/steam/connections", get(get_connections))
}
