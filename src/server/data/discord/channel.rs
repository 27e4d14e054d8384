use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

/// Repository for Discord channel and thread records.
pub struct DiscordChannelRepository<'a> {
    /// Database connection for executing queries.
    db: &'a DatabaseConnection,
}

impl<'a> DiscordChannelRepository<'a> {
    /// Creates a new repository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection reference
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a channel, doing nothing if it is already known.
    ///
    /// # Arguments
    /// - `channel_id` - Discord's unique identifier for the channel
    /// - `guild_id` - Guild owning the channel, `None` for private channels
    ///
    /// # Returns
    /// - `Ok(())` - Channel recorded (or already present)
    /// - `Err(DbErr)` - Database error, e.g. the guild is not stored
    pub async fn add(&self, channel_id: u64, guild_id: Option<u64>) -> Result<(), DbErr> {
        entity::prelude::DiscordChannel::insert(entity::discord_channel::ActiveModel {
            channel_id: ActiveValue::Set(channel_id.to_string()),
            guild_id: ActiveValue::Set(guild_id.map(|id| id.to_string())),
        })
        .on_conflict(
            OnConflict::column(entity::discord_channel::Column::ChannelId)
                .do_nothing()
                .to_owned(),
        )
        .do_nothing()
        .exec(self.db)
        .await?;

        Ok(())
    }

    /// Deletes a channel or thread by its Discord channel ID.
    ///
    /// # Arguments
    /// - `channel_id` - Discord's unique identifier for the channel
    ///
    /// # Returns
    /// - `Ok(())` - Channel deleted successfully (or didn't exist)
    /// - `Err(DbErr)` - Database error during deletion
    pub async fn delete(&self, channel_id: u64) -> Result<(), DbErr> {
        entity::prelude::DiscordChannel::delete_many()
            .filter(entity::discord_channel::Column::ChannelId.eq(channel_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
