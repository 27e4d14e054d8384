//! Discord bot process: gateway events, slash commands and the weekly guild cleanup.

use steambot::server::{
    bot,
    config::Config,
    error::AppError,
    scheduler,
    service::oauth::{client::DiscordRestFactory, exchange::DiscordTokenExchange},
    startup,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_reqwest_client()?;
    let oauth_client = startup::setup_oauth_client(&config)?;

    let token_exchange = DiscordTokenExchange::new(oauth_client, http_client.clone());
    let client_factory = DiscordRestFactory::new(http_client, config.discord_api_base_url.clone());

    let client = bot::start::init_bot(&config, db.clone(), token_exchange, client_factory).await?;

    let _scheduler = scheduler::cleanup::start_scheduler(db, client.cache.clone()).await?;

    bot::start::start_bot(client).await
}
