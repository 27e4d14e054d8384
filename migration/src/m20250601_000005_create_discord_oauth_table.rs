use sea_orm_migration::{prelude::*, schema::*};

use super::m20250601_000001_create_discord_user_table::DiscordUser;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DiscordOauth::Table)
                    .if_not_exists()
                    .col(string(DiscordOauth::UserId).primary_key())
                    .col(string(DiscordOauth::AccessToken))
                    .col(string(DiscordOauth::TokenType))
                    .col(timestamp_with_time_zone(DiscordOauth::ExpiresAt))
                    .col(string(DiscordOauth::RefreshToken))
                    .col(string(DiscordOauth::Scope))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_discord_oauth_user_id")
                            .from(DiscordOauth::Table, DiscordOauth::UserId)
                            .to(DiscordUser::Table, DiscordUser::UserId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DiscordOauth::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DiscordOauth {
    Table,
    UserId,
    AccessToken,
    TokenType,
    ExpiresAt,
    RefreshToken,
    Scope,
}
