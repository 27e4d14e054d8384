use sea_orm_migration::{prelude::*, schema::*};

use super::m20250601_000001_create_discord_user_table::DiscordUser;
use super::m20250601_000006_create_steam_user_table::SteamUser;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DiscordUserSteam::Table)
                    .if_not_exists()
                    .col(string(DiscordUserSteam::UserId))
                    .col(string(DiscordUserSteam::SteamId))
                    .col(
                        timestamp_with_time_zone(DiscordUserSteam::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .primary_key(
                        Index::create()
                            .col(DiscordUserSteam::UserId)
                            .col(DiscordUserSteam::SteamId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_discord_user_steam_user_id")
                            .from(DiscordUserSteam::Table, DiscordUserSteam::UserId)
                            .to(DiscordUser::Table, DiscordUser::UserId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_discord_user_steam_steam_id")
                            .from(DiscordUserSteam::Table, DiscordUserSteam::SteamId)
                            .to(SteamUser::Table, SteamUser::UserId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DiscordUserSteam::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DiscordUserSteam {
    Table,
    UserId,
    SteamId,
    CreatedAt,
}
