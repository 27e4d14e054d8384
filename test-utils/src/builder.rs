use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{DiscordUser, DiscordOauth};
///
/// let test = TestBuilder::new()
///     .with_table(DiscordUser)
///     .with_table(DiscordOauth)
///     .build()
///     .await?;
/// ```
#[derive(Default)]
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign
    /// keys after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables backing the credential store.
    ///
    /// Adds, in dependency order:
    /// - DiscordUser
    /// - DiscordOauth
    pub fn with_oauth_tables(self) -> Self {
        self.with_table(DiscordUser).with_table(DiscordOauth)
    }

    /// Adds the Discord guild, channel and member tables.
    ///
    /// Adds, in dependency order:
    /// - DiscordUser
    /// - DiscordGuild
    /// - DiscordChannel
    /// - DiscordMember
    pub fn with_discord_tables(self) -> Self {
        self.with_table(DiscordUser)
            .with_table(DiscordGuild)
            .with_table(DiscordChannel)
            .with_table(DiscordMember)
    }

    /// Adds every table, including Steam links and the credential store.
    ///
    /// Use this when testing Steam account linking, which touches users, members,
    /// Steam users, both link tables and, through delegated calls, credentials.
    pub fn with_steam_tables(self) -> Self {
        self.with_discord_tables()
            .with_table(DiscordOauth)
            .with_table(SteamUser)
            .with_table(DiscordUserSteam)
            .with_table(DiscordMemberSteam)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all CREATE TABLE
    /// statements that were added via `with_table()`.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
