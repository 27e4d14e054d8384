//! Steam user and Steam link factories.

use crate::factory::{discord_user::ensure_discord_user, helpers::next_id};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a Steam user with a fresh unique ID.
pub async fn create_steam_user(
    db: &DatabaseConnection,
) -> Result<entity::steam_user::Model, DbErr> {
    create_steam_user_with_id(db, next_id().to_string()).await
}

/// Creates a Steam user with a specific ID.
pub async fn create_steam_user_with_id(
    db: &DatabaseConnection,
    steam_id: impl Into<String>,
) -> Result<entity::steam_user::Model, DbErr> {
    entity::steam_user::ActiveModel {
        user_id: ActiveValue::Set(steam_id.into()),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}

/// Creates a Steam user and links it to the given Discord user.
///
/// The Discord user row is created if it does not exist yet.
///
/// # Returns
/// - `Ok((steam_user, link))` - The Steam user and the Discord link
/// - `Err(DbErr)` - Database error during creation
pub async fn link_steam_user(
    db: &DatabaseConnection,
    user_id: &str,
) -> Result<
    (
        entity::steam_user::Model,
        entity::discord_user_steam::Model,
    ),
    DbErr,
> {
    ensure_discord_user(db, user_id).await?;
    let steam_user = create_steam_user(db).await?;

    let link = entity::discord_user_steam::ActiveModel {
        user_id: ActiveValue::Set(user_id.to_string()),
        steam_id: ActiveValue::Set(steam_user.user_id.clone()),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await?;

    Ok((steam_user, link))
}
