use chrono::Utc;

use crate::server::{
    data::oauth::DiscordOAuthRepository,
    error::{auth::AuthError, AppError},
    model::discord::CurrentUser,
    service::{
        auth::DiscordAuthService,
        oauth::{
            client::{DelegatedClientFactory, DiscordApi},
            exchange::TokenExchange,
        },
    },
};

impl<'a, E: TokenExchange, F: DelegatedClientFactory> DiscordAuthService<'a, E, F> {
    /// Completes the login: redeems the code, identifies the user and stores the credential.
    ///
    /// # Arguments
    /// - `authorization_code` - Code from Discord's redirect, CSRF state already validated
    ///
    /// # Returns
    /// - `Ok(CurrentUser)` - The user who authorized, with the credential stored
    /// - `Err(AppError::AuthErr(CodeExchange))` - Discord rejected the code or sent an
    ///   unusable token
    /// - `Err(AppError::DiscordApiErr)` - Fetching the user failed, nothing stored
    /// - `Err(AppError::DbErr)` - Failed to store the credential
    pub async fn callback(&self, authorization_code: String) -> Result<CurrentUser, AppError> {
        let grant = self
            .exchange
            .exchange_code(authorization_code)
            .await
            .map_err(AuthError::from)?;

        let client = self
            .client_factory
            .create(&grant.access_token, &grant.token_type);
        let user = client.fetch_current_user().await?;

        let credential = grant
            .into_credential(user.id.get(), Utc::now())
            .map_err(AuthError::from)?;
        DiscordOAuthRepository::new(self.db)
            .upsert(&credential)
            .await?;

        tracing::info!("User {} ({}) authorized", user.username, user.id);

        Ok(user)
    }
}
