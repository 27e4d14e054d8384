use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory::discord_oauth::DiscordOauthFactory};

use crate::server::{
    data::oauth::DiscordOAuthRepository,
    error::{
        oauth::{ExchangeError, OAuthError},
        AppError,
    },
    model::oauth::Credential,
    service::{
        oauth::{client::DiscordApi, lock::RefreshLocks, TokenService},
        test::fake::{oauth_error, FakeApi, FakeExchange, FakeFactory},
    },
};

mod acquire;
mod ensure_fresh;
mod invalidate;

const USER_ID: u64 = 123456789;

/// Stores a credential for `USER_ID` expiring in `expires_in` seconds.
async fn store_credential(
    db: &sea_orm::DatabaseConnection,
    expires_in: i64,
) -> Result<Credential, DbErr> {
    let entity = DiscordOauthFactory::new(db)
        .user_id(USER_ID.to_string())
        .access_token("old-access")
        .refresh_token("old-refresh")
        .expires_in_seconds(expires_in)
        .scope("connections identify")
        .build()
        .await?;

    Credential::from_entity(entity)
}

async fn credential_count(db: &sea_orm::DatabaseConnection) -> Result<u64, DbErr> {
    entity::prelude::DiscordOauth::find().count(db).await
}
