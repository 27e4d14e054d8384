//! Application state shared across all request handlers.
//!
//! Initialized once in the web binary and cloned into each handler through Axum's
//! state extraction. Every field is cheap to clone: the database and HTTP clients are
//! pools, and `RefreshLocks` shares its map.

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;

use crate::server::service::oauth::{
    client::DiscordRestFactory, exchange::DiscordTokenExchange, lock::RefreshLocks, TokenService,
};

/// OAuth2 client for Discord with authorization, token and revocation endpoints set.
pub type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
    EndpointSet,
>;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,

    /// Login flow client, used to build the consent URL.
    pub oauth_client: OAuth2Client,

    /// Token endpoint for code exchange, refresh and revocation.
    pub token_exchange: DiscordTokenExchange,

    /// Builds REST clients bound to a user's access token.
    pub client_factory: DiscordRestFactory,

    /// Serializes refreshes per user within this process.
    pub refresh_locks: RefreshLocks,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        oauth_client: OAuth2Client,
        token_exchange: DiscordTokenExchange,
        client_factory: DiscordRestFactory,
        refresh_locks: RefreshLocks,
    ) -> Self {
        Self {
            db,
            oauth_client,
            token_exchange,
            client_factory,
            refresh_locks,
        }
    }

    /// Token lifecycle operations backed by this state.
    pub fn token_service(&self) -> TokenService<'_, DiscordTokenExchange, DiscordRestFactory> {
        TokenService::new(
            &self.db,
            &self.token_exchange,
            &self.client_factory,
            &self.refresh_locks,
        )
    }
}
