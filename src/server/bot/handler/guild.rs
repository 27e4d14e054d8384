//! Guild event handler.
//!
//! `guild_create` fires on startup for every guild the bot is in and when it joins a
//! new one. The guild and its channels are recorded so later member and Steam links
//! have rows to reference. Guilds the bot left are removed by the weekly cleanup job.

use sea_orm::DatabaseConnection;
use serenity::all::{Context, Guild};

use crate::server::data::discord::{DiscordChannelRepository, DiscordGuildRepository};

/// Handles the guild_create event when a guild becomes available or the bot joins a new guild.
///
/// # Arguments
/// - `db` - Database connection for storing guild data
/// - `_ctx` - Discord context (unused, required by event handler signature)
/// - `guild` - Guild data from Discord including its channels
/// - `_is_new` - Whether this is a new guild join (unused)
pub async fn handle_guild_create(
    db: &DatabaseConnection,
    _ctx: Context,
    guild: Guild,
    _is_new: Option<bool>,
) {
    let guild_id = guild.id.get();

    tracing::debug!("Guild create event: {} ({})", guild.name, guild_id);

    if let Err(e) = DiscordGuildRepository::new(db).add(guild_id).await {
        tracing::error!("Failed to add guild {} ({}): {:?}", guild_id, guild.name, e);
        return;
    }

    let channel_repo = DiscordChannelRepository::new(db);
    for channel_id in guild.channels.keys() {
        if let Err(e) = channel_repo.add(channel_id.get(), Some(guild_id)).await {
            tracing::error!(
                "Failed to add channel {} of guild {}: {:?}",
                channel_id,
                guild_id,
                e
            );
        }
    }

    tracing::debug!(
        "Recorded guild {} with {} channels",
        guild_id,
        guild.channels.len()
    );
}
