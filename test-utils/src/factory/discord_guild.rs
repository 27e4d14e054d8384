//! Discord guild and channel factories.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a Discord guild with a fresh unique ID.
///
/// # Returns
/// - `Ok(entity::discord_guild::Model)` - Created guild entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_guild(db: &DatabaseConnection) -> Result<entity::discord_guild::Model, DbErr> {
    create_guild_with_id(db, next_id().to_string()).await
}

/// Creates a Discord guild with a specific ID.
pub async fn create_guild_with_id(
    db: &DatabaseConnection,
    guild_id: impl Into<String>,
) -> Result<entity::discord_guild::Model, DbErr> {
    entity::discord_guild::ActiveModel {
        guild_id: ActiveValue::Set(guild_id.into()),
    }
    .insert(db)
    .await
}

/// Creates a channel, optionally attached to a guild.
///
/// # Arguments
/// - `db` - Database connection
/// - `guild_id` - Guild the channel belongs to, `None` for a private channel
pub async fn create_channel(
    db: &DatabaseConnection,
    guild_id: Option<&str>,
) -> Result<entity::discord_channel::Model, DbErr> {
    entity::discord_channel::ActiveModel {
        channel_id: ActiveValue::Set(next_id().to_string()),
        guild_id: ActiveValue::Set(guild_id.map(str::to_string)),
    }
    .insert(db)
    .await
}
