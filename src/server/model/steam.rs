//! Steam account links.
//!
//! A Discord user links Steam accounts they own globally (`UserSteam`) and may
//! then show any linked account in individual guilds (`MemberSteam`).

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::model::steam::SteamConnectionDto;

fn parse_id(value: &str, column: &str) -> Result<u64, DbErr> {
    value
        .parse::<u64>()
        .map_err(|e| DbErr::Custom(format!("Failed to parse {}: {}", column, e)))
}

/// Steam account linked to a Discord user.
#[derive(Debug, Clone, PartialEq)]
pub struct UserSteam {
    pub user_id: u64,
    pub steam_id: u64,
    pub created_at: DateTime<Utc>,
}

impl UserSteam {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(UserSteam)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - Failed to parse user_id or steam_id as u64
    pub fn from_entity(entity: entity::discord_user_steam::Model) -> Result<Self, DbErr> {
        Ok(Self {
            user_id: parse_id(&entity.user_id, "user_id")?,
            steam_id: parse_id(&entity.steam_id, "steam_id")?,
            created_at: entity.created_at,
        })
    }
}

/// Linked Steam account shown in a guild.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberSteam {
    pub guild_id: u64,
    pub user_id: u64,
    pub steam_id: u64,
    pub created_at: DateTime<Utc>,
}

impl MemberSteam {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(MemberSteam)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - Failed to parse one of the IDs as u64
    pub fn from_entity(entity: entity::discord_member_steam::Model) -> Result<Self, DbErr> {
        Ok(Self {
            guild_id: parse_id(&entity.guild_id, "guild_id")?,
            user_id: parse_id(&entity.user_id, "user_id")?,
            steam_id: parse_id(&entity.steam_id, "steam_id")?,
            created_at: entity.created_at,
        })
    }
}

/// Steam account from a user's Discord connections, with its local link state.
#[derive(Debug, Clone, PartialEq)]
pub struct SteamConnection {
    pub steam_id: u64,
    pub name: String,
    pub public: bool,
    pub linked_at: Option<DateTime<Utc>>,
}

impl SteamConnection {
    pub fn into_dto(self) -> SteamConnectionDto {
        SteamConnectionDto {
            steam_id: self.steam_id,
            name: self.name,
            public: self.public,
            linked_at: self.linked_at,
        }
    }
}
