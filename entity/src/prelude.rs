pub use super::discord_channel::Entity as DiscordChannel;
pub use super::discord_guild::Entity as DiscordGuild;
pub use super::discord_member::Entity as DiscordMember;
pub use super::discord_member_steam::Entity as DiscordMemberSteam;
pub use super::discord_oauth::Entity as DiscordOauth;
pub use super::discord_user::Entity as DiscordUser;
pub use super::discord_user_steam::Entity as DiscordUserSteam;
pub use super::steam_user::Entity as SteamUser;
