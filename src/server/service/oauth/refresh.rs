use chrono::Utc;

use crate::server::{
    data::oauth::DiscordOAuthRepository,
    error::{
        oauth::{ExchangeError, OAuthError},
        AppError,
    },
    model::oauth::Credential,
    service::oauth::{exchange::TokenExchange, invalidate::delete_credential, TokenService},
};

impl<'a, E: TokenExchange, F> TokenService<'a, E, F> {
    /// Returns a credential usable for at least the refresh margin, refreshing if needed.
    ///
    /// A credential with more than 60 seconds left is returned as is without touching
    /// the network or the store. Otherwise the user's refresh lock is taken and the
    /// store re-read: if another task already rotated the credential it is returned,
    /// else the stored refresh token is exchanged once.
    ///
    /// # Returns
    /// - `Ok(Credential)` - Fresh credential; after a refresh it holds the newly issued
    ///   refresh token and is already persisted
    /// - `Err(OAuthError::RefreshFailed)` - Exchange failed, credential deleted
    /// - `Err(OAuthError::ScopeNarrowed)` - Exchange dropped a granted scope, credential deleted
    /// - `Err(OAuthError::NotAuthorized)` - Credential was deleted while waiting for the lock
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn ensure_fresh(&self, credential: Credential) -> Result<Credential, AppError> {
        if credential.is_fresh_at(Utc::now()) {
            return Ok(credential);
        }

        let user_id = credential.user_id;
        let _guard = self.refresh_locks.lock(user_id).await;

        let Some(current) = DiscordOAuthRepository::new(self.db).get(user_id).await? else {
            return Err(OAuthError::NotAuthorized { user_id }.into());
        };

        if current.is_fresh_at(Utc::now()) {
            tracing::debug!("Credential of user {} was refreshed concurrently", user_id);
            return Ok(current);
        }

        self.refresh(current).await
    }

    /// Exchanges the refresh token and persists the result.
    ///
    /// Must be called with the user's refresh lock held.
    async fn refresh(&self, credential: Credential) -> Result<Credential, AppError> {
        let user_id = credential.user_id;
        tracing::debug!("Refreshing Discord access token of user {}", user_id);

        let grant = match self.exchange.refresh(&credential.refresh_token).await {
            Ok(grant) => grant,
            Err(source) => return Err(self.refresh_failed(user_id, source).await),
        };

        let missing = credential.scope.missing_from(&grant.scope);
        if !missing.is_empty() {
            delete_credential(self.db, user_id).await?;
            return Err(OAuthError::ScopeNarrowed { user_id, missing }.into());
        }

        let refreshed = match grant.into_credential(user_id, Utc::now()) {
            Ok(refreshed) => refreshed,
            Err(source) => return Err(self.refresh_failed(user_id, source).await),
        };
        let stored = DiscordOAuthRepository::new(self.db).upsert(&refreshed).await?;

        Ok(stored)
    }

    /// Deletes the credential whose refresh token was consumed by a failed refresh.
    async fn refresh_failed(&self, user_id: u64, source: ExchangeError) -> AppError {
        if let Err(e) = delete_credential(self.db, user_id).await {
            return e.into();
        }

        OAuthError::RefreshFailed { user_id, source }.into()
    }
}
