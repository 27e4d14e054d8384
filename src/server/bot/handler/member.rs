use sea_orm::DatabaseConnection;
use serenity::all::{Context, GuildId, Member, User};

use crate::server::data::discord::DiscordMemberRepository;

/// Handles the guild_member_removal event when a member leaves a guild.
///
/// Deleting the member also hides every Steam account they showed in the guild.
pub async fn handle_guild_member_removal(
    db: &DatabaseConnection,
    _ctx: Context,
    guild_id: GuildId,
    user: User,
    _member_data_if_available: Option<Member>,
) {
    let guild_id = guild_id.get();
    let user_id = user.id.get();

    if let Err(e) = DiscordMemberRepository::new(db)
        .delete(guild_id, user_id)
        .await
    {
        tracing::error!(
            "Failed to delete member {} of guild {}: {:?}",
            user_id,
            guild_id,
            e
        );
    } else {
        tracing::debug!("User {} left guild {}", user_id, guild_id);
    }
}
