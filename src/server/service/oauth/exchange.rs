//! Token endpoint exchanges.

use async_trait::async_trait;
use oauth2::{
    basic::BasicTokenType, AccessToken, AuthorizationCode, EmptyExtraTokenFields, RefreshToken,
    StandardRevocableToken, StandardTokenResponse, TokenResponse,
};

use crate::server::{
    error::oauth::ExchangeError,
    model::oauth::{ScopeSet, TokenGrant},
    state::OAuth2Client,
};

/// OAuth provider token endpoint.
#[async_trait]
pub trait TokenExchange: Send + Sync {
    /// Redeems an authorization code from the consent redirect.
    async fn exchange_code(&self, code: String) -> Result<TokenGrant, ExchangeError>;

    /// Exchanges a refresh token for a new token pair. The refresh token is consumed
    /// whether or not the exchange succeeds.
    async fn refresh(&self, refresh_token: &str) -> Result<TokenGrant, ExchangeError>;

    /// Revokes an access token together with its refresh token.
    async fn revoke(&self, access_token: &str) -> Result<(), ExchangeError>;
}

/// `TokenExchange` against Discord's OAuth2 endpoints.
#[derive(Clone)]
pub struct DiscordTokenExchange {
    oauth_client: OAuth2Client,
    http_client: reqwest::Client,
}

impl DiscordTokenExchange {
    /// # Arguments
    /// - `oauth_client` - Client with token and revocation URLs and credentials set
    /// - `http_client` - Client used for the requests, must not follow redirects
    pub fn new(oauth_client: OAuth2Client, http_client: reqwest::Client) -> Self {
        Self {
            oauth_client,
            http_client,
        }
    }
}

#[async_trait]
impl TokenExchange for DiscordTokenExchange {
    async fn exchange_code(&self, code: String) -> Result<TokenGrant, ExchangeError> {
        let token = self
            .oauth_client
            .exchange_code(AuthorizationCode::new(code))
            .request_async(&self.http_client)
            .await
            .map_err(|e| ExchangeError::Provider(e.to_string()))?;

        into_grant(token)
    }

    async fn refresh(&self, refresh_token: &str) -> Result<TokenGrant, ExchangeError> {
        let refresh_token = RefreshToken::new(refresh_token.to_string());

        let token = self
            .oauth_client
            .exchange_refresh_token(&refresh_token)
            .request_async(&self.http_client)
            .await
            .map_err(|e| ExchangeError::Provider(e.to_string()))?;

        into_grant(token)
    }

    async fn revoke(&self, access_token: &str) -> Result<(), ExchangeError> {
        let token = StandardRevocableToken::AccessToken(AccessToken::new(access_token.to_string()));

        self.oauth_client
            .revoke_token(token)
            .map_err(|e| ExchangeError::Provider(e.to_string()))?
            .request_async(&self.http_client)
            .await
            .map_err(|e| ExchangeError::Provider(e.to_string()))
    }
}

/// Converts a token response, rejecting responses this application cannot store.
///
/// A missing `expires_in` or `refresh_token` is an error; a missing `scope` is read
/// as no scopes granted.
fn into_grant(
    token: StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
) -> Result<TokenGrant, ExchangeError> {
    let expires_in = token
        .expires_in()
        .ok_or(ExchangeError::IncompleteResponse("expires_in"))?;
    let expires_in = chrono::Duration::from_std(expires_in)
        .map_err(|_| ExchangeError::IncompleteResponse("a representable expires_in"))?;

    let refresh_token = token
        .refresh_token()
        .ok_or(ExchangeError::IncompleteResponse("refresh_token"))?
        .secret()
        .clone();

    let scope = token
        .scopes()
        .map(|scopes| scopes.iter().map(|s| s.as_str().to_string()).collect())
        .unwrap_or_default();

    Ok(TokenGrant {
        access_token: token.access_token().secret().clone(),
        token_type: token_type_name(token.token_type()).to_string(),
        expires_in,
        refresh_token,
        scope,
    })
}

/// Scheme name sent in the `Authorization` header.
fn token_type_name(token_type: &BasicTokenType) -> &str {
    match token_type {
        BasicTokenType::Bearer => "Bearer",
        BasicTokenType::Mac => "MAC",
        BasicTokenType::Extension(name) => name.as_str(),
    }
}
