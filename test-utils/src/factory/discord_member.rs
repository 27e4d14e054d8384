//! Discord guild member factory.

use crate::factory::{discord_guild::create_guild, discord_user::create_discord_user};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a member row for an existing guild and user.
///
/// # Returns
/// - `Ok(entity::discord_member::Model)` - Created member entity
/// - `Err(DbErr)` - Database error, e.g. a missing guild or user row
pub async fn create_member_in(
    db: &DatabaseConnection,
    guild_id: &str,
    user_id: &str,
) -> Result<entity::discord_member::Model, DbErr> {
    entity::discord_member::ActiveModel {
        guild_id: ActiveValue::Set(guild_id.to_string()),
        user_id: ActiveValue::Set(user_id.to_string()),
    }
    .insert(db)
    .await
}

/// Creates a guild, a user and the member row joining them.
///
/// # Returns
/// - `Ok((guild, user, member))` - All created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_member(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::discord_guild::Model,
        entity::discord_user::Model,
        entity::discord_member::Model,
    ),
    DbErr,
> {
    let guild = create_guild(db).await?;
    let user = create_discord_user(db).await?;
    let member = create_member_in(db, &guild.guild_id, &user.user_id).await?;

    Ok((guild, user, member))
}
