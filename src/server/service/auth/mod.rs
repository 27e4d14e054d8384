//! OAuth2 login with Discord
//!
//! The login flow is also how a user grants the delegated credential: the token
//! obtained from the authorization code is stored and later used by `TokenService`.

use sea_orm::DatabaseConnection;

use crate::server::state::OAuth2Client;

pub mod callback;
pub mod login;

/// Scopes requested at login. Refreshes must keep all of them.
pub const LOGIN_SCOPES: [&str; 2] = ["identify", "connections"];

pub struct DiscordAuthService<'a, E, F> {
    pub db: &'a DatabaseConnection,
    pub oauth_client: &'a OAuth2Client,
    pub exchange: &'a E,
    pub client_factory: &'a F,
}

impl<'a, E, F> DiscordAuthService<'a, E, F> {
    pub fn new(
        db: &'a DatabaseConnection,
        oauth_client: &'a OAuth2Client,
        exchange: &'a E,
        client_factory: &'a F,
    ) -> Self {
        Self {
            db,
            oauth_client,
            exchange,
            client_factory,
        }
    }
}
