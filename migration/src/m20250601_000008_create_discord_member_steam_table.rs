use sea_orm_migration::{prelude::*, schema::*};

use super::m20250601_000004_create_discord_member_table::DiscordMember;
use super::m20250601_000007_create_discord_user_steam_table::DiscordUserSteam;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DiscordMemberSteam::Table)
                    .if_not_exists()
                    .col(string(DiscordMemberSteam::GuildId))
                    .col(string(DiscordMemberSteam::UserId))
                    .col(string(DiscordMemberSteam::SteamId))
                    .col(
                        timestamp_with_time_zone(DiscordMemberSteam::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .primary_key(
                        Index::create()
                            .col(DiscordMemberSteam::GuildId)
                            .col(DiscordMemberSteam::UserId)
                            .col(DiscordMemberSteam::SteamId),
                    )
                    // Unlinking a Steam account or leaving a guild hides it everywhere
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_discord_member_steam_member")
                            .from(
                                DiscordMemberSteam::Table,
                                (DiscordMemberSteam::GuildId, DiscordMemberSteam::UserId),
                            )
                            .to(
                                DiscordMember::Table,
                                (DiscordMember::GuildId, DiscordMember::UserId),
                            )
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_discord_member_steam_user_steam")
                            .from(
                                DiscordMemberSteam::Table,
                                (DiscordMemberSteam::UserId, DiscordMemberSteam::SteamId),
                            )
                            .to(
                                DiscordUserSteam::Table,
                                (DiscordUserSteam::UserId, DiscordUserSteam::SteamId),
                            )
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DiscordMemberSteam::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DiscordMemberSteam {
    Table,
    GuildId,
    UserId,
    SteamId,
    CreatedAt,
}
