use serde::{Deserialize, Serialize};

use crate::model::discord::{deserialize_u64_from_string, serialize_u64_as_string};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct UserDto {
    #[serde(
        serialize_with = "serialize_u64_as_string",
        deserialize_with = "deserialize_u64_from_string"
    )]
    pub discord_id: u64,
    pub name: String,
}
