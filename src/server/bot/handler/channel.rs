//! Channel and thread deletion handlers.

use sea_orm::DatabaseConnection;
use serenity::all::{Context, GuildChannel, Message, PartialGuildChannel};

use crate::server::data::discord::DiscordChannelRepository;

/// Handles the channel_delete event when a channel is deleted from a guild.
///
/// # Arguments
/// - `db` - Database connection for deleting the channel record
/// - `_ctx` - Discord context (unused, required by event handler signature)
/// - `channel` - The deleted guild channel from Discord
/// - `_messages` - Messages that were in the channel if available (unused)
pub async fn handle_channel_delete(
    db: &DatabaseConnection,
    _ctx: Context,
    channel: GuildChannel,
    _messages: Option<Vec<Message>>,
) {
    delete_channel(db, channel.id.get(), channel.guild_id.get()).await;
}

/// Handles the thread_delete event; threads are stored like channels.
pub async fn handle_thread_delete(
    db: &DatabaseConnection,
    _ctx: Context,
    thread: PartialGuildChannel,
    _full_thread_data: Option<GuildChannel>,
) {
    delete_channel(db, thread.id.get(), thread.guild_id.get()).await;
}

async fn delete_channel(db: &DatabaseConnection, channel_id: u64, guild_id: u64) {
    if let Err(e) = DiscordChannelRepository::new(db).delete(channel_id).await {
        tracing::error!(
            "Failed to delete channel {} from guild {}: {:?}",
            channel_id,
            guild_id,
            e
        );
    } else {
        tracing::debug!("Deleted channel {} from guild {}", channel_id, guild_id);
    }
}
