use std::future::Future;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::oauth::DiscordOAuthRepository,
    error::{discord::DiscordApiError, oauth::OAuthError, AppError},
    service::oauth::{
        client::DelegatedClientFactory, exchange::TokenExchange, invalidate::delete_credential,
        TokenService,
    },
};

impl<'a, E: TokenExchange, F: DelegatedClientFactory> TokenService<'a, E, F> {
    /// Gets an API client bound to a fresh access token of the user.
    ///
    /// # Returns
    /// - `Ok(DelegatedClient)` - Client ready for use; it is released when dropped
    /// - `Err(OAuthError::NotAuthorized)` - No credential stored, nothing was called
    /// - `Err(..)` - Any failure of `ensure_fresh`, unchanged
    pub async fn acquire(&self, user_id: u64) -> Result<DelegatedClient<'a, F::Client>, AppError> {
        let credential = DiscordOAuthRepository::new(self.db)
            .get(user_id)
            .await?
            .ok_or(OAuthError::NotAuthorized { user_id })?;

        let credential = self.ensure_fresh(credential).await?;

        let client = self
            .client_factory
            .create(&credential.access_token, &credential.token_type);

        Ok(DelegatedClient {
            db: self.db,
            user_id,
            client,
        })
    }

    /// Acquires a client and runs one operation with it.
    ///
    /// ```rust,ignore
    /// let connections = token_service
    ///     .with_client(user_id, |client| async move { client.fetch_connections().await })
    ///     .await?;
    /// ```
    pub async fn with_client<T, Op, Fut>(&self, user_id: u64, op: Op) -> Result<T, AppError>
    where
        Op: FnOnce(F::Client) -> Fut,
        Fut: Future<Output = Result<T, DiscordApiError>>,
    {
        self.acquire(user_id).await?.run(op).await
    }
}

/// API client bound to one user's access token.
///
/// A 401 from Discord during any call deletes the user's credential and surfaces as
/// `OAuthError::Revoked`. With several clients in flight for the same user, a 401
/// caused by something other than the token still invalidates the user; the user
/// then has to authorize again.
///
/// Clients are owned by one task and never stored; dropping one releases it on every
/// exit path, including cancellation.
pub struct DelegatedClient<'a, C> {
    db: &'a DatabaseConnection,
    user_id: u64,
    client: C,
}

impl<'a, C> DelegatedClient<'a, C> {
    pub fn user_id(&self) -> u64 {
        self.user_id
    }

    /// Runs an operation borrowing the client; the client can be reused afterwards.
    pub async fn call<'c, T, Op, Fut>(&'c self, op: Op) -> Result<T, AppError>
    where
        Op: FnOnce(&'c C) -> Fut,
        Fut: Future<Output = Result<T, DiscordApiError>> + 'c,
    {
        let result = op(&self.client).await;

        propagate(self.db, self.user_id, result).await
    }

    /// Runs an operation consuming the client.
    pub async fn run<T, Op, Fut>(self, op: Op) -> Result<T, AppError>
    where
        Op: FnOnce(C) -> Fut,
        Fut: Future<Output = Result<T, DiscordApiError>>,
    {
        let DelegatedClient {
            db,
            user_id,
            client,
        } = self;

        let result = op(client).await;

        propagate(db, user_id, result).await
    }
}

/// Invalidates the credential when Discord rejected the token.
async fn propagate<T>(
    db: &DatabaseConnection,
    user_id: u64,
    result: Result<T, DiscordApiError>,
) -> Result<T, AppError> {
    match result {
        Ok(value) => Ok(value),
        Err(DiscordApiError::Unauthorized) => {
            delete_credential(db, user_id).await?;
            Err(OAuthError::Revoked { user_id }.into())
        }
        Err(e) => Err(e.into()),
    }
}
