//! Credential invalidation.
//!
//! Deleting the stored credential is the only way a credential stops being used;
//! there is no "expired" state. Deletion is idempotent, so the refresher, the
//! delegated client and user-initiated disconnects may all race on it.

use sea_orm::{DatabaseConnection, DbErr};

use crate::server::{
    data::oauth::DiscordOAuthRepository, error::AppError,
    service::oauth::{exchange::TokenExchange, TokenService},
};

/// Deletes the credential of a user, if any.
///
/// Shared by `TokenService` and `DelegatedClient`, which only holds a database handle.
pub(super) async fn delete_credential(db: &DatabaseConnection, user_id: u64) -> Result<(), DbErr> {
    if DiscordOAuthRepository::new(db).delete(user_id).await? {
        tracing::info!("Invalidated Discord credential of user {}", user_id);
    }

    Ok(())
}

impl<'a, E, F> TokenService<'a, E, F> {
    /// Deletes the credential of a user.
    ///
    /// Calling this for a user without a credential is a no-op.
    pub async fn invalidate(&self, user_id: u64) -> Result<(), AppError> {
        delete_credential(self.db, user_id).await?;

        Ok(())
    }
}

impl<'a, E: TokenExchange, F> TokenService<'a, E, F> {
    /// Disconnects a user on request: revokes the token at Discord, then deletes it.
    ///
    /// Revocation is best effort; the credential is deleted even if Discord cannot be
    /// reached.
    ///
    /// # Returns
    /// - `Ok(true)` - A credential was stored and has been deleted
    /// - `Ok(false)` - The user had no credential
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn disconnect(&self, user_id: u64) -> Result<bool, AppError> {
        let repo = DiscordOAuthRepository::new(self.db);

        let Some(credential) = repo.get(user_id).await? else {
            return Ok(false);
        };

        if let Err(e) = self.exchange.revoke(&credential.access_token).await {
            tracing::warn!("Failed to revoke token of user {}: {}", user_id, e);
        }

        delete_credential(self.db, user_id).await?;

        Ok(true)
    }
}
