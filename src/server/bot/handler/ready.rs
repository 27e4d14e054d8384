//! Ready event handler.
//!
//! Fired once per gateway connection after the handshake. Slash commands are
//! registered globally here; Discord keeps the existing registration when the
//! definitions did not change.

use serenity::all::{Command, Context, Ready};

use crate::server::bot::command;

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `ctx` - Discord context used to register commands
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    match Command::set_global_commands(&ctx, command::all()).await {
        Ok(commands) => tracing::debug!("Registered {} slash commands", commands.len()),
        Err(e) => tracing::error!("Failed to register slash commands: {:?}", e),
    }
}
