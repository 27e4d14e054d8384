//! Credential factory for creating stored Discord OAuth tokens.

use crate::factory::{discord_user::ensure_discord_user, helpers::next_id};
use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for stored credentials with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::discord_oauth::DiscordOauthFactory;
///
/// let credential = DiscordOauthFactory::new(&db)
///     .user_id("123456789")
///     .expires_in_seconds(30)
///     .scope("connections identify")
///     .build()
///     .await?;
/// ```
pub struct DiscordOauthFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: String,
    access_token: String,
    refresh_token: String,
    expires_in_seconds: i64,
    scope: String,
}

impl<'a> DiscordOauthFactory<'a> {
    /// Creates a new factory with default values.
    ///
    /// Defaults:
    /// - user_id: fresh unique ID
    /// - access_token: `"access-{id}"`, refresh_token: `"refresh-{id}"`
    /// - expires in one hour
    /// - scope: `"connections identify"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            user_id: id.to_string(),
            access_token: format!("access-{}", id),
            refresh_token: format!("refresh-{}", id),
            expires_in_seconds: 3600,
            scope: "connections identify".to_string(),
        }
    }

    /// Sets the owning Discord user ID.
    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    /// Sets the stored access token.
    pub fn access_token(mut self, access_token: impl Into<String>) -> Self {
        self.access_token = access_token.into();
        self
    }

    /// Sets the stored refresh token.
    pub fn refresh_token(mut self, refresh_token: impl Into<String>) -> Self {
        self.refresh_token = refresh_token.into();
        self
    }

    /// Sets the expiry relative to now; negative values create an expired credential.
    pub fn expires_in_seconds(mut self, seconds: i64) -> Self {
        self.expires_in_seconds = seconds;
        self
    }

    /// Sets the space-delimited scope string exactly as stored.
    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = scope.into();
        self
    }

    /// Inserts the Discord user (if missing) and the credential row.
    ///
    /// # Returns
    /// - `Ok(entity::discord_oauth::Model)` - Created credential entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::discord_oauth::Model, DbErr> {
        ensure_discord_user(self.db, self.user_id.clone()).await?;

        entity::discord_oauth::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            access_token: ActiveValue::Set(self.access_token),
            token_type: ActiveValue::Set("Bearer".to_string()),
            expires_at: ActiveValue::Set(Utc::now() + Duration::seconds(self.expires_in_seconds)),
            refresh_token: ActiveValue::Set(self.refresh_token),
            scope: ActiveValue::Set(self.scope),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a credential with default values, valid for one hour.
pub async fn create_credential(
    db: &DatabaseConnection,
) -> Result<entity::discord_oauth::Model, DbErr> {
    DiscordOauthFactory::new(db).build().await
}
