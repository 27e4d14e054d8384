//! Discord bot process.
//!
//! Keeps the guild, channel and member tables in step with Discord and serves the
//! `/connect` and `/steam` slash commands. Commands that read a user's Discord
//! connections go through the same `TokenService` as the web process, sharing
//! credentials only through the database.
//!
//! # Gateway Intents
//!
//! - `GUILDS` - Guild and channel lifecycle events
//! - `GUILD_MEMBERS` - Member removal (privileged intent, enable it in the Developer Portal)

pub mod command;
pub mod handler;
pub mod start;
