pub use sea_orm_migration::prelude::*;

mod m20250601_000001_create_discord_user_table;
mod m20250601_000002_create_discord_guild_table;
mod m20250601_000003_create_discord_channel_table;
mod m20250601_000004_create_discord_member_table;
mod m20250601_000005_create_discord_oauth_table;
mod m20250601_000006_create_steam_user_table;
mod m20250601_000007_create_discord_user_steam_table;
mod m20250601_000008_create_discord_member_steam_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_discord_user_table::Migration),
            Box::new(m20250601_000002_create_discord_guild_table::Migration),
            Box::new(m20250601_000003_create_discord_channel_table::Migration),
            Box::new(m20250601_000004_create_discord_member_table::Migration),
            Box::new(m20250601_000005_create_discord_oauth_table::Migration),
            Box::new(m20250601_000006_create_steam_user_table::Migration),
            Box::new(m20250601_000007_create_discord_user_steam_table::Migration),
            Box::new(m20250601_000008_create_discord_member_steam_table::Migration),
        ]
    }
}
