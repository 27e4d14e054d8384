//! Removal of stale guild records.

use std::collections::HashSet;

use sea_orm::DatabaseConnection;

use crate::server::{data::discord::DiscordGuildRepository, error::AppError};

/// Deletes guilds the bot has left.
///
/// Guild removals are not handled as they happen, so a bot kicked by mistake keeps
/// its data until the next cleanup.
pub struct GuildCleanupService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildCleanupService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Deletes every stored guild not in `current_guilds`, cascading to its channels,
    /// members and member Steam links.
    ///
    /// # Arguments
    /// - `current_guilds` - IDs of all guilds the bot is currently in
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of guilds deleted
    /// - `Err(AppError::DbErr)` - Database error; guilds deleted so far stay deleted
    pub async fn cleanup_guilds(&self, current_guilds: &HashSet<u64>) -> Result<usize, AppError> {
        let guild_repo = DiscordGuildRepository::new(self.db);

        let mut deleted = 0;
        for guild_id in guild_repo.get_all_ids().await? {
            if current_guilds.contains(&guild_id) {
                continue;
            }

            if guild_repo.delete(guild_id).await? {
                deleted += 1;
            }
        }

        tracing::info!("{} guilds cleaned up", deleted);

        Ok(deleted)
    }
}
