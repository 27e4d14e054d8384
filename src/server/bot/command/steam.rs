//! `/steam link|unlink|show|hide <steam_id>`.

use serenity::all::{CommandInteraction, CommandOptionType, CreateCommand, CreateCommandOption};

use crate::server::{
    bot::{
        command::{steam_id_option, subcommand, CommandReply},
        handler::Handler,
    },
    error::AppError,
    service::{
        oauth::{client::DelegatedClientFactory, exchange::TokenExchange},
        steam::SteamService,
    },
};

/// What to do with the given Steam account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SteamAction {
    Link,
    Unlink,
    Show,
    Hide,
}

impl SteamAction {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "link" => Some(Self::Link),
            "unlink" => Some(Self::Unlink),
            "show" => Some(Self::Show),
            "hide" => Some(Self::Hide),
            _ => None,
        }
    }
}

fn steam_id_subcommand(name: &str, description: &str) -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::SubCommand, name, description).add_sub_option(
        CreateCommandOption::new(CommandOptionType::String, "steam_id", "SteamID64 of the account")
            .required(true),
    )
}

pub fn register() -> CreateCommand {
    CreateCommand::new("steam")
        .description("Manage your linked Steam accounts")
        .add_option(steam_id_subcommand(
            "link",
            "Link a Steam account from your Discord connections",
        ))
        .add_option(steam_id_subcommand("unlink", "Unlink a Steam account"))
        .add_option(steam_id_subcommand(
            "show",
            "Show a linked Steam account in this server",
        ))
        .add_option(steam_id_subcommand(
            "hide",
            "Hide a Steam account in this server",
        ))
}

pub async fn run(
    handler: &Handler,
    command: &CommandInteraction,
) -> Result<CommandReply, AppError> {
    let options = command.data.options();
    let (name, args) = subcommand(&options)?;
    let action = SteamAction::from_name(name)
        .ok_or_else(|| AppError::BadRequest(format!("Unknown subcommand {}", name)))?;
    let steam_id = steam_id_option(args)?;

    let steam_service = SteamService::new(&handler.db, handler.token_service());

    execute(
        &steam_service,
        action,
        command.guild_id.map(|id| id.get()),
        command.user.id.get(),
        steam_id,
    )
    .await
}

/// Runs one action for the invoking user.
///
/// # Arguments
/// - `guild_id` - Guild the command was used in, `None` in direct messages
///
/// # Returns
/// - `Ok(CommandReply)` - Confirmation for the user
/// - `Err(AppError::BadRequest)` - Show or hide used outside a server, or a duplicate
/// - `Err(AppError::NotFound)` - The account is not connected, linked or shown
/// - `Err(AppError::OAuthErr)` - Linking needs the user to authorize
pub async fn execute<E: TokenExchange, F: DelegatedClientFactory>(
    steam_service: &SteamService<'_, E, F>,
    action: SteamAction,
    guild_id: Option<u64>,
    user_id: u64,
    steam_id: u64,
) -> Result<CommandReply, AppError> {
    let require_guild = || {
        guild_id.ok_or_else(|| {
            AppError::BadRequest("This command can only be used in a server.".to_string())
        })
    };

    let content = match action {
        SteamAction::Link => {
            steam_service.link(user_id, steam_id).await?;
            format!("Linked Steam account {}.", steam_id)
        }
        SteamAction::Unlink => {
            steam_service.unlink(user_id, steam_id).await?;
            format!("Unlinked Steam account {}.", steam_id)
        }
        SteamAction::Show => {
            steam_service
                .show_in_guild(require_guild()?, user_id, steam_id)
                .await?;
            format!("Steam account {} is now shown in this server.", steam_id)
        }
        SteamAction::Hide => {
            steam_service
                .hide_in_guild(require_guild()?, user_id, steam_id)
                .await?;
            format!("Steam account {} is now hidden in this server.", steam_id)
        }
    };

    Ok(CommandReply::text(content))
}
