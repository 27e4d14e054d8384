use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SteamUser::Table)
                    .if_not_exists()
                    .col(string(SteamUser::UserId).primary_key())
                    .col(
                        timestamp_with_time_zone(SteamUser::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SteamUser::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SteamUser {
    Table,
    UserId,
    CreatedAt,
}
