use sea_orm::DatabaseConnection;
use serenity::all::{Client, GatewayIntents};

use crate::server::{
    bot::handler::Handler,
    config::Config,
    error::AppError,
    service::oauth::{
        client::DiscordRestFactory, exchange::DiscordTokenExchange, lock::RefreshLocks,
    },
};

/// Builds the bot client without connecting.
///
/// The client is returned before starting so the caller can hand its cache to the
/// guild cleanup scheduler.
///
/// # Arguments
/// - `config` - Application configuration, the bot token must be set
/// - `db` - Database connection for event handlers and commands
/// - `token_exchange` - Token endpoint used to refresh delegated credentials
/// - `client_factory` - Builds Discord REST clients bound to a user's token
///
/// # Returns
/// - `Ok(Client)` - Configured client ready to start
/// - `Err(AppError::ConfigErr)` - `DISCORD_BOT_TOKEN` is not set
/// - `Err(AppError::DiscordErr)` - Client construction failed
pub async fn init_bot(
    config: &Config,
    db: DatabaseConnection,
    token_exchange: DiscordTokenExchange,
    client_factory: DiscordRestFactory,
) -> Result<Client, AppError> {
    let intents = GatewayIntents::GUILDS | GatewayIntents::GUILD_MEMBERS;

    let handler = Handler {
        db,
        token_exchange,
        client_factory,
        refresh_locks: RefreshLocks::new(),
        authorize_url: config.authorize_url(),
        debug: config.debug,
    };

    let client = Client::builder(config.require_bot_token()?, intents)
        .event_handler(handler)
        .await?;

    Ok(client)
}

/// Connects to the gateway and processes events until shutdown.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot");

    client.start().await?;

    Ok(())
}
