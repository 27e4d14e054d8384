//! Web process: Discord login and the Steam connections API.

use steambot::server::{
    config::Config,
    error::AppError,
    router,
    service::oauth::{
        client::DiscordRestFactory, exchange::DiscordTokenExchange, lock::RefreshLocks,
    },
    startup,
    state::AppState,
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
    let session = startup::connect_to_session(&db).await?;
    let http_client = startup::setup_reqwest_client()?;
    let oauth_client = startup::setup_oauth_client(&config)?;

    let token_exchange = DiscordTokenExchange::new(oauth_client.clone(), http_client.clone());
    let client_factory = DiscordRestFactory::new(http_client, config.discord_api_base_url.clone());

    let state = AppState::new(
        db,
        oauth_client,
        token_exchange,
        client_factory,
        RefreshLocks::new(),
    );

    let app = router::router().with_state(state).layer(session);

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
