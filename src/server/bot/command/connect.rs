//! `/connect discord` and `/connect steam`.

use serenity::all::{CommandInteraction, CommandOptionType, CreateCommand, CreateCommandOption};

use crate::server::{
    bot::{
        command::{subcommand, CommandReply},
        handler::Handler,
    },
    error::AppError,
    service::{
        oauth::{client::DelegatedClientFactory, exchange::TokenExchange, TokenService},
        steam::SteamService,
    },
};

pub fn register() -> CreateCommand {
    CreateCommand::new("connect")
        .description("Connect your accounts")
        .add_option(CreateCommandOption::new(
            CommandOptionType::SubCommand,
            "discord",
            "Authorize the bot to read your Discord connections",
        ))
        .add_option(CreateCommandOption::new(
            CommandOptionType::SubCommand,
            "steam",
            "List the Steam accounts in your Discord connections",
        ))
}

pub async fn run(
    handler: &Handler,
    command: &CommandInteraction,
) -> Result<CommandReply, AppError> {
    let options = command.data.options();
    let (name, _) = subcommand(&options)?;
    let user_id = command.user.id.get();
    let tokens = handler.token_service();

    match name {
        "discord" => discord(&tokens, user_id).await,
        "steam" => steam(tokens, user_id).await,
        _ => Err(AppError::BadRequest(format!("Unknown subcommand {}", name))),
    }
}

/// Probes the user's credential by acquiring a client and releasing it unused.
pub async fn discord<E: TokenExchange, F: DelegatedClientFactory>(
    tokens: &TokenService<'_, E, F>,
    user_id: u64,
) -> Result<CommandReply, AppError> {
    let client = tokens.acquire(user_id).await?;
    drop(client);

    Ok(CommandReply::text("Your Discord account is already connected."))
}

/// Lists the user's Steam connections and whether each is linked.
pub async fn steam<'a, E: TokenExchange, F: DelegatedClientFactory>(
    tokens: TokenService<'a, E, F>,
    user_id: u64,
) -> Result<CommandReply, AppError> {
    let db = tokens.db;
    let connections = SteamService::new(db, tokens)
        .list_connections(user_id)
        .await?;

    if connections.is_empty() {
        return Ok(CommandReply::text(
            "No Steam accounts found in your Discord connections.",
        ));
    }

    let lines: Vec<String> = connections
        .iter()
        .map(|connection| {
            let status = if connection.linked_at.is_some() {
                "linked"
            } else {
                "not linked"
            };
            format!("{} ({}): {}", connection.name, connection.steam_id, status)
        })
        .collect();

    Ok(CommandReply::text(lines.join("\n")))
}
