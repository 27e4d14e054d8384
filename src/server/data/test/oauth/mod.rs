use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::oauth::DiscordOAuthRepository,
    model::oauth::{Credential, ScopeSet},
};

mod delete;
mod get;
mod upsert;

fn credential(user_id: u64, suffix: &str) -> Credential {
    Credential {
        user_id,
        access_token: format!("access-{}", suffix),
        token_type: "Bearer".to_string(),
        expires_at: Utc::now() + Duration::seconds(3600),
        refresh_token: format!("refresh-{}", suffix),
        scope: ScopeSet::parse("identify connections"),
    }
}
