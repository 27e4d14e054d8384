//! Discord user factory.

use crate::factory::helpers::next_id;
use sea_orm::{
    sea_query::OnConflict, ActiveValue, DatabaseConnection, DbErr, EntityTrait,
};

/// Inserts a Discord user row, ignoring an already existing row.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Discord user ID as string
///
/// # Returns
/// - `Ok(entity::discord_user::Model)` - The user row
/// - `Err(DbErr)` - Database error during insert
pub async fn ensure_discord_user(
    db: &DatabaseConnection,
    user_id: impl Into<String>,
) -> Result<entity::discord_user::Model, DbErr> {
    let user_id = user_id.into();

    entity::prelude::DiscordUser::insert(entity::discord_user::ActiveModel {
        user_id: ActiveValue::Set(user_id.clone()),
    })
    .on_conflict(
        OnConflict::column(entity::discord_user::Column::UserId)
            .do_nothing()
            .to_owned(),
    )
    .do_nothing()
    .exec(db)
    .await?;

    Ok(entity::discord_user::Model { user_id })
}

/// Creates a Discord user with a fresh unique ID.
///
/// # Example
///
/// ```rust,ignore
/// let user = create_discord_user(&db).await?;
/// ```
pub async fn create_discord_user(
    db: &DatabaseConnection,
) -> Result<entity::discord_user::Model, DbErr> {
    ensure_discord_user(db, next_id().to_string()).await
}
