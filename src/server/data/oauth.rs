//! Credential store for delegated Discord OAuth tokens.

use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    TransactionTrait,
};

use crate::server::model::oauth::Credential;

/// Repository for the `discord_oauth` table, one row per Discord user.
///
/// Reads always hit the database, nothing is cached, so the bot and the web
/// process observe each other's writes immediately.
pub struct DiscordOAuthRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DiscordOAuthRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the stored credential of a user.
    ///
    /// # Arguments
    /// - `user_id` - Discord ID of the user
    ///
    /// # Returns
    /// - `Ok(Some(Credential))` - Credential found
    /// - `Ok(None)` - The user has not authorized or the credential was invalidated
    /// - `Err(DbErr)` - Database error or unparsable stored user_id
    pub async fn get(&self, user_id: u64) -> Result<Option<Credential>, DbErr> {
        let entity = entity::prelude::DiscordOauth::find_by_id(user_id.to_string())
            .one(self.db)
            .await?;

        entity.map(Credential::from_entity).transpose()
    }

    /// Inserts or replaces the credential of a user.
    ///
    /// Creates the owning `discord_user` row first if it is missing. Both writes run
    /// in one transaction; all token columns are replaced together on conflict.
    ///
    /// # Arguments
    /// - `credential` - Credential to store, keyed by its `user_id`
    ///
    /// # Returns
    /// - `Ok(Credential)` - The stored credential as read back from the database
    /// - `Err(DbErr)` - Database error; nothing was written
    pub async fn upsert(&self, credential: &Credential) -> Result<Credential, DbErr> {
        let user_id = credential.user_id.to_string();
        let txn = self.db.begin().await?;

        entity::prelude::DiscordUser::insert(entity::discord_user::ActiveModel {
            user_id: ActiveValue::Set(user_id.clone()),
        })
        .on_conflict(
            OnConflict::column(entity::discord_user::Column::UserId)
                .do_nothing()
                .to_owned(),
        )
        .do_nothing()
        .exec(&txn)
        .await?;

        let entity = entity::prelude::DiscordOauth::insert(entity::discord_oauth::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            access_token: ActiveValue::Set(credential.access_token.clone()),
            token_type: ActiveValue::Set(credential.token_type.clone()),
            expires_at: ActiveValue::Set(credential.expires_at),
            refresh_token: ActiveValue::Set(credential.refresh_token.clone()),
            scope: ActiveValue::Set(credential.scope.to_string()),
        })
        .on_conflict(
            OnConflict::column(entity::discord_oauth::Column::UserId)
                .update_columns([
                    entity::discord_oauth::Column::AccessToken,
                    entity::discord_oauth::Column::TokenType,
                    entity::discord_oauth::Column::ExpiresAt,
                    entity::discord_oauth::Column::RefreshToken,
                    entity::discord_oauth::Column::Scope,
                ])
                .to_owned(),
        )
        .exec_with_returning(&txn)
        .await?;

        txn.commit().await?;

        Credential::from_entity(entity)
    }

    /// Deletes the credential of a user.
    ///
    /// # Returns
    /// - `Ok(true)` - A credential was deleted
    /// - `Ok(false)` - No credential was stored
    /// - `Err(DbErr)` - Database error during deletion
    pub async fn delete(&self, user_id: u64) -> Result<bool, DbErr> {
        let result = entity::prelude::DiscordOauth::delete_many()
            .filter(entity::discord_oauth::Column::UserId.eq(user_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
