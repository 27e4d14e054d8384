use sea_orm_migration::{prelude::*, schema::*};

use super::m20250601_000001_create_discord_user_table::DiscordUser;
use super::m20250601_000002_create_discord_guild_table::DiscordGuild;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DiscordMember::Table)
                    .if_not_exists()
                    .col(string(DiscordMember::GuildId))
                    .col(string(DiscordMember::UserId))
                    .primary_key(
                        Index::create()
                            .col(DiscordMember::GuildId)
                            .col(DiscordMember::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_discord_member_guild_id")
                            .from(DiscordMember::Table, DiscordMember::GuildId)
                            .to(DiscordGuild::Table, DiscordGuild::GuildId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_discord_member_user_id")
                            .from(DiscordMember::Table, DiscordMember::UserId)
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
            .drop_table(Table::drop().table(DiscordMember::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DiscordMember {
    Table,
    GuildId,
    UserId,
}
