use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

/// Repository for guild membership records.
pub struct DiscordMemberRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DiscordMemberRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a guild member, doing nothing if the membership is already known.
    ///
    /// Both the guild and the user must already be stored.
    pub async fn add(&self, guild_id: u64, user_id: u64) -> Result<(), DbErr> {
        entity::prelude::DiscordMember::insert(entity::discord_member::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            user_id: ActiveValue::Set(user_id.to_string()),
        })
        .on_conflict(
            OnConflict::columns([
                entity::discord_member::Column::GuildId,
                entity::discord_member::Column::UserId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .do_nothing()
        .exec(self.db)
        .await?;

        Ok(())
    }

    /// Deletes a guild membership along with the Steam accounts shown in that guild.
    ///
    /// # Returns
    /// - `Ok(())` - Membership deleted successfully (or didn't exist)
    /// - `Err(DbErr)` - Database error during deletion
    pub async fn delete(&self, guild_id: u64, user_id: u64) -> Result<(), DbErr> {
        entity::prelude::DiscordMember::delete_many()
            .filter(entity::discord_member::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::discord_member::Column::UserId.eq(user_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
