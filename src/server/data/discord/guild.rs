use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QuerySelect,
};

/// Repository for guilds the bot has seen.
///
/// Guild rows are kept when the bot leaves a guild and only removed by the weekly
/// cleanup, so an accidental kick does not lose member links.
pub struct DiscordGuildRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DiscordGuildRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a guild, doing nothing if it is already known.
    pub async fn add(&self, guild_id: u64) -> Result<(), DbErr> {
        entity::prelude::DiscordGuild::insert(entity::discord_guild::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
        })
        .on_conflict(
            OnConflict::column(entity::discord_guild::Column::GuildId)
                .do_nothing()
                .to_owned(),
        )
        .do_nothing()
        .exec(self.db)
        .await?;

        Ok(())
    }

    /// Gets the IDs of all stored guilds.
    ///
    /// # Returns
    /// - `Ok(Vec<u64>)` - Stored guild IDs, empty if none
    /// - `Err(DbErr::Custom)` - A stored guild_id could not be parsed as u64
    pub async fn get_all_ids(&self) -> Result<Vec<u64>, DbErr> {
        let ids: Vec<String> = entity::prelude::DiscordGuild::find()
            .select_only()
            .column(entity::discord_guild::Column::GuildId)
            .into_tuple()
            .all(self.db)
            .await?;

        ids.into_iter()
            .map(|id| {
                id.parse::<u64>()
                    .map_err(|e| DbErr::Custom(format!("Failed to parse guild_id: {}", e)))
            })
            .collect()
    }

    /// Deletes a guild along with its channels, members and member Steam links.
    ///
    /// # Returns
    /// - `Ok(true)` - The guild was deleted
    /// - `Ok(false)` - The guild was not stored
    /// - `Err(DbErr)` - Database error during deletion
    pub async fn delete(&self, guild_id: u64) -> Result<bool, DbErr> {
        let result = entity::prelude::DiscordGuild::delete_many()
            .filter(entity::discord_guild::Column::GuildId.eq(guild_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
