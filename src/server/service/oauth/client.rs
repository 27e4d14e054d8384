//! Discord API clients acting on behalf of a user.

use async_trait::async_trait;
use reqwest::{header::AUTHORIZATION, StatusCode};
use serde::de::DeserializeOwned;

use crate::server::{
    error::discord::DiscordApiError,
    model::discord::{Connection, CurrentUser},
};

/// Discord API endpoints used with a delegated token.
///
/// Implementations must report a 401 response as `DiscordApiError::Unauthorized`;
/// that is the signal used to invalidate the credential.
#[async_trait]
pub trait DiscordApi: Send + Sync {
    /// `GET /users/@me`, requires the `identify` scope.
    async fn fetch_current_user(&self) -> Result<CurrentUser, DiscordApiError>;

    /// `GET /users/@me/connections`, requires the `connections` scope.
    async fn fetch_connections(&self) -> Result<Vec<Connection>, DiscordApiError>;
}

/// Builds API clients bound to one access token.
pub trait DelegatedClientFactory: Send + Sync {
    type Client: DiscordApi;

    fn create(&self, access_token: &str, token_type: &str) -> Self::Client;
}

/// Produces `DiscordRestClient`s sharing one connection pool.
#[derive(Clone)]
pub struct DiscordRestFactory {
    http_client: reqwest::Client,
    api_base_url: String,
}

impl DiscordRestFactory {
    /// # Arguments
    /// - `http_client` - Shared HTTP client
    /// - `api_base_url` - API root without trailing slash, e.g. `https://discord.com/api/v10`
    pub fn new(http_client: reqwest::Client, api_base_url: impl Into<String>) -> Self {
        Self {
            http_client,
            api_base_url: api_base_url.into(),
        }
    }
}

impl DelegatedClientFactory for DiscordRestFactory {
    type Client = DiscordRestClient;

    fn create(&self, access_token: &str, token_type: &str) -> DiscordRestClient {
        DiscordRestClient {
            http_client: self.http_client.clone(),
            api_base_url: self.api_base_url.clone(),
            authorization: format!("{} {}", token_type, access_token),
        }
    }
}

/// REST client authenticated with a user's access token.
pub struct DiscordRestClient {
    http_client: reqwest::Client,
    api_base_url: String,
    /// Full `Authorization` header value.
    authorization: String,
}

impl DiscordRestClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, DiscordApiError> {
        let response = self
            .http_client
            .get(format!("{}{}", self.api_base_url, path))
            .header(AUTHORIZATION, &self.authorization)
            .send()
            .await?;

        match response.status() {
            StatusCode::UNAUTHORIZED => Err(DiscordApiError::Unauthorized),
            status if !status.is_success() => Err(DiscordApiError::UnexpectedStatus {
                path: path.to_string(),
                status,
            }),
            _ => Ok(response.json::<T>().await?),
        }
    }
}

#[async_trait]
impl DiscordApi for DiscordRestClient {
    async fn fetch_current_user(&self) -> Result<CurrentUser, DiscordApiError> {
        self.get("/users/@me").await
    }

    async fn fetch_connections(&self) -> Result<Vec<Connection>, DiscordApiError> {
        self.get("/users/@me/connections").await
    }
}
