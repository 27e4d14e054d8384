//! SeaORM entity models shared by the bot and web processes.

pub mod prelude;

pub mod discord_channel;
pub mod discord_guild;
pub mod discord_member;
pub mod discord_member_steam;
pub mod discord_oauth;
pub mod discord_user;
pub mod discord_user_steam;
pub mod steam_user;
