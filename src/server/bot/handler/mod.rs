use sea_orm::DatabaseConnection;
use serenity::all::{
    Context, EventHandler, Guild, GuildChannel, GuildId, Interaction, Member, Message,
    PartialGuildChannel, Ready, User,
};
use serenity::async_trait;

use crate::server::service::oauth::{
    client::DiscordRestFactory, exchange::DiscordTokenExchange, lock::RefreshLocks, TokenService,
};

pub mod channel;
pub mod guild;
pub mod interaction;
pub mod member;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub db: DatabaseConnection,
    pub token_exchange: DiscordTokenExchange,
    pub client_factory: DiscordRestFactory,
    /// Refresh locks of the bot process; the web process has its own.
    pub refresh_locks: RefreshLocks,
    /// Sent to users who need to (re-)authorize.
    pub authorize_url: String,
    /// Include error details in failed command replies.
    pub debug: bool,
}

impl Handler {
    pub fn token_service(&self) -> TokenService<'_, DiscordTokenExchange, DiscordRestFactory> {
        TokenService::new(
            &self.db,
            &self.token_exchange,
            &self.client_factory,
            &self.refresh_locks,
        )
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }

    /// Called when a guild becomes available or the bot joins a new guild
    async fn guild_create(&self, ctx: Context, guild: Guild, is_new: Option<bool>) {
        guild::handle_guild_create(&self.db, ctx, guild, is_new).await;
    }

    /// Called when a member leaves a guild
    async fn guild_member_removal(
        &self,
        ctx: Context,
        guild_id: GuildId,
        user: User,
        member_data_if_available: Option<Member>,
    ) {
        member::handle_guild_member_removal(&self.db, ctx, guild_id, user, member_data_if_available)
            .await;
    }

    /// Called when a channel is deleted from a guild
    async fn channel_delete(
        &self,
        ctx: Context,
        channel: GuildChannel,
        messages: Option<Vec<Message>>,
    ) {
        channel::handle_channel_delete(&self.db, ctx, channel, messages).await;
    }

    /// Called when a thread is deleted
    async fn thread_delete(
        &self,
        ctx: Context,
        thread: PartialGuildChannel,
        full_thread_data: Option<GuildChannel>,
    ) {
        channel::handle_thread_delete(&self.db, ctx, thread, full_thread_data).await;
    }

    /// Called for slash commands and other interactions
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction_create(self, ctx, interaction).await;
    }
}
