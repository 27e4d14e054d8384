//! Discord API payloads read through a delegated client.

use serde::Deserialize;
use serenity::all::UserId;

use crate::model::user::UserDto;

/// Discord `GET /users/@me` as seen with the `identify` scope.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CurrentUser {
    pub id: UserId,
    pub username: String,
}

impl CurrentUser {
    pub fn into_dto(self) -> UserDto {
        UserDto {
            discord_id: self.id.get(),
            name: self.username,
        }
    }
}

/// One entry of Discord `GET /users/@me/connections`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Connection {
    /// Account ID on the connected service, the SteamID64 for Steam.
    pub id: String,
    /// Account name on the connected service.
    pub name: String,
    /// Service name, e.g. `steam`.
    #[serde(rename = "type")]
    pub kind: String,
    /// 1 when shown on the user's profile, 0 otherwise.
    #[serde(default)]
    pub visibility: u8,
}

impl Connection {
    pub fn is_steam(&self) -> bool {
        self.kind == "steam"
    }

    pub fn is_public(&self) -> bool {
        self.visibility == 1
    }
}
