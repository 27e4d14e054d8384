//! Slash commands.
//!
//! Each command runs against a `TokenService` and answers with a `CommandReply`.
//! Every reply is ephemeral, the interaction is deferred before any delegated
//! call since a token refresh can exceed Discord's three second response window.

use serenity::all::{
    CreateActionRow, CreateButton, CreateCommand, EditInteractionResponse, ResolvedOption,
    ResolvedValue,
};

use crate::server::error::AppError;

pub mod connect;
pub mod steam;

#[cfg(test)]
mod test;

/// Definitions registered with Discord on ready.
pub fn all() -> Vec<CreateCommand> {
    vec![connect::register(), steam::register()]
}

/// Text reply to a command, optionally with a button linking to the authorize page.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandReply {
    pub content: String,
    pub authorize_link: Option<String>,
}

impl CommandReply {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            authorize_link: None,
        }
    }

    /// Reply to a failed command.
    ///
    /// Any OAuth error asks the user to authorize. User errors are shown as they are;
    /// anything else is logged and answered generically unless `debug` is set.
    pub fn from_error(err: &AppError, authorize_url: &str, debug: bool) -> Self {
        match err {
            AppError::OAuthErr(e) => {
                tracing::debug!("User {} needs to authorize: {}", e.user_id(), e);
                Self {
                    content: "Please authorize with Discord to continue.".to_string(),
                    authorize_link: Some(authorize_url.to_string()),
                }
            }
            AppError::NotFound(message) | AppError::BadRequest(message) => {
                Self::text(message.clone())
            }
            err => {
                tracing::error!("Command failed: {}", err);
                if debug {
                    Self::text(format!("Something went wrong: {}", err))
                } else {
                    Self::text("Something went wrong, please try again later.")
                }
            }
        }
    }

    pub fn into_response(self) -> EditInteractionResponse {
        let response = EditInteractionResponse::new().content(self.content);

        match self.authorize_link {
            Some(url) => response.components(vec![CreateActionRow::Buttons(vec![
                CreateButton::new_link(url).label("Authorize"),
            ])]),
            None => response,
        }
    }
}

/// The invoked subcommand and its options.
pub(crate) fn subcommand<'a>(
    options: &'a [ResolvedOption<'a>],
) -> Result<(&'a str, &'a [ResolvedOption<'a>]), AppError> {
    match options.first() {
        Some(ResolvedOption {
            name,
            value: ResolvedValue::SubCommand(args),
            ..
        }) => Ok((*name, args.as_slice())),
        _ => Err(AppError::BadRequest("Unknown command".to_string())),
    }
}

/// Parses the required `steam_id` option.
pub(crate) fn steam_id_option(args: &[ResolvedOption<'_>]) -> Result<u64, AppError> {
    let value = args
        .iter()
        .find(|option| option.name == "steam_id")
        .and_then(|option| match option.value {
            ResolvedValue::String(value) => Some(value),
            _ => None,
        })
        .ok_or_else(|| AppError::BadRequest("Missing Steam ID".to_string()))?;

    parse_steam_id(value)
}

pub(crate) fn parse_steam_id(value: &str) -> Result<u64, AppError> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|_| AppError::BadRequest(format!("{} is not a valid Steam ID", value)))
}
