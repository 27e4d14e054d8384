use sea_orm_migration::{prelude::*, schema::*};

use super::m20250601_000002_create_discord_guild_table::DiscordGuild;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DiscordChannel::Table)
                    .if_not_exists()
                    .col(string(DiscordChannel::ChannelId).primary_key())
                    .col(string_null(DiscordChannel::GuildId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_discord_channel_guild_id")
                            .from(DiscordChannel::Table, DiscordChannel::GuildId)
                            .to(DiscordGuild::Table, DiscordGuild::GuildId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DiscordChannel::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DiscordChannel {
    Table,
    ChannelId,
    GuildId,
}
