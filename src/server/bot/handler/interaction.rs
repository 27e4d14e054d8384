//! Slash command dispatch.

use serenity::all::{CommandInteraction, Context, Interaction};

use crate::server::{
    bot::{
        command::{self, CommandReply},
        handler::Handler,
    },
    error::AppError,
};

/// Handles interaction_create, answering slash commands.
///
/// Other interaction kinds are ignored.
pub async fn handle_interaction_create(handler: &Handler, ctx: Context, interaction: Interaction) {
    let Interaction::Command(command) = interaction else {
        return;
    };

    if let Err(e) = command.defer_ephemeral(&ctx).await {
        tracing::error!("Failed to defer /{}: {:?}", command.data.name, e);
        return;
    }

    let reply = match dispatch(handler, &command).await {
        Ok(reply) => reply,
        Err(e) => CommandReply::from_error(&e, &handler.authorize_url, handler.debug),
    };

    if let Err(e) = command.edit_response(&ctx, reply.into_response()).await {
        tracing::error!("Failed to reply to /{}: {:?}", command.data.name, e);
    }
}

async fn dispatch(
    handler: &Handler,
    command: &CommandInteraction,
) -> Result<CommandReply, AppError> {
    tracing::debug!("User {} used /{}", command.user.id, command.data.name);

    match command.data.name.as_str() {
        "connect" => command::connect::run(handler, command).await,
        "steam" => command::steam::run(handler, command).await,
        name => Err(AppError::BadRequest(format!("Unknown command /{}", name))),
    }
}
