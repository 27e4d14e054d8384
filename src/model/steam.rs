use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::discord::{deserialize_u64_from_string, serialize_u64_as_string};

/// A Steam account from the user's Discord connections.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SteamConnectionDto {
    #[serde(
        serialize_with = "serialize_u64_as_string",
        deserialize_with = "deserialize_u64_from_string"
    )]
    pub steam_id: u64,
    pub name: String,
    /// Whether the connection is visible on the user's Discord profile.
    pub public: bool,
    /// When the account was linked with us, `None` if it is not linked.
    pub linked_at: Option<DateTime<Utc>>,
}
