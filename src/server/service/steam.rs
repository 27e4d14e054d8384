//! Steam account linking.
//!
//! Steam accounts are discovered through the user's Discord connections, read with
//! their delegated token. Linking records the account for the user; showing adds the
//! link to one guild so other members can see it there.

use std::collections::HashMap;

use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::server::{
    data::{
        discord::{DiscordGuildRepository, DiscordMemberRepository, DiscordUserRepository},
        steam::{DiscordMemberSteamRepository, DiscordUserSteamRepository, SteamUserRepository},
    },
    error::AppError,
    model::{
        discord::Connection,
        steam::{MemberSteam, SteamConnection, UserSteam},
    },
    service::oauth::{
        client::{DelegatedClientFactory, DiscordApi},
        exchange::TokenExchange,
        TokenService,
    },
    util::parse::parse_u64_from_string,
};

pub struct SteamService<'a, E, F> {
    db: &'a DatabaseConnection,
    tokens: TokenService<'a, E, F>,
}

impl<'a, E: TokenExchange, F: DelegatedClientFactory> SteamService<'a, E, F> {
    pub fn new(db: &'a DatabaseConnection, tokens: TokenService<'a, E, F>) -> Self {
        Self { db, tokens }
    }

    /// Lists Steam accounts from the user's Discord connections and the accounts
    /// linked with us, merged by Steam ID.
    ///
    /// Linked accounts no longer present in the connections are listed under their
    /// Steam ID so the user can still unlink them.
    ///
    /// # Returns
    /// - `Ok(Vec<SteamConnection>)` - Connections ordered by Steam ID, empty if none
    /// - `Err(AppError::OAuthErr)` - The user must (re-)authorize first
    pub async fn list_connections(&self, user_id: u64) -> Result<Vec<SteamConnection>, AppError> {
        let connections = self.fetch_steam_connections(user_id).await?;
        let linked = DiscordUserSteamRepository::new(self.db)
            .get_by_user(user_id)
            .await?;

        let mut merged: HashMap<u64, SteamConnection> = HashMap::new();
        for (steam_id, connection) in connections {
            let public = connection.is_public();
            merged.insert(
                steam_id,
                SteamConnection {
                    steam_id,
                    name: connection.name,
                    public,
                    linked_at: None,
                },
            );
        }
        for link in linked {
            merged
                .entry(link.steam_id)
                .or_insert_with(|| SteamConnection {
                    steam_id: link.steam_id,
                    name: link.steam_id.to_string(),
                    public: false,
                    linked_at: None,
                })
                .linked_at = Some(link.created_at);
        }

        let mut merged: Vec<SteamConnection> = merged.into_values().collect();
        merged.sort_by_key(|connection| connection.steam_id);

        Ok(merged)
    }

    /// Links a Steam account from the user's Discord connections.
    ///
    /// # Returns
    /// - `Ok(UserSteam)` - The new link
    /// - `Err(AppError::NotFound)` - The account is not among the user's connections
    /// - `Err(AppError::BadRequest)` - The account is already linked, to this or another user
    /// - `Err(AppError::OAuthErr)` - The user must (re-)authorize first
    pub async fn link(&self, user_id: u64, steam_id: u64) -> Result<UserSteam, AppError> {
        let owned = self
            .fetch_steam_connections(user_id)
            .await?
            .into_iter()
            .any(|(id, _)| id == steam_id);
        if !owned {
            return Err(AppError::NotFound(format!(
                "Steam account {} is not connected to your Discord account",
                steam_id
            )));
        }

        DiscordUserRepository::new(self.db).add(user_id).await?;
        SteamUserRepository::new(self.db)
            .add(steam_id)
            .await
            .map_err(|e| already_linked(e, steam_id))?;

        let link = DiscordUserSteamRepository::new(self.db)
            .add(user_id, steam_id)
            .await
            .map_err(|e| already_linked(e, steam_id))?;

        tracing::info!("User {} linked Steam account {}", user_id, steam_id);

        Ok(link)
    }

    /// Unlinks a Steam account, deleting it together with all its guild links.
    ///
    /// # Returns
    /// - `Ok(())` - The account was unlinked
    /// - `Err(AppError::NotFound)` - The user has not linked this account
    pub async fn unlink(&self, user_id: u64, steam_id: u64) -> Result<(), AppError> {
        let link = DiscordUserSteamRepository::new(self.db)
            .get_one(user_id, steam_id)
            .await?;
        if link.is_none() {
            return Err(not_linked(steam_id));
        }

        SteamUserRepository::new(self.db).delete(steam_id).await?;

        tracing::info!("User {} unlinked Steam account {}", user_id, steam_id);

        Ok(())
    }

    /// Shows a linked Steam account in a guild.
    ///
    /// Records the guild and membership first since events may have been missed.
    ///
    /// # Returns
    /// - `Ok(MemberSteam)` - The account is now shown in the guild
    /// - `Err(AppError::NotFound)` - The user has not linked this account
    /// - `Err(AppError::BadRequest)` - The account is already shown in the guild
    pub async fn show_in_guild(
        &self,
        guild_id: u64,
        user_id: u64,
        steam_id: u64,
    ) -> Result<MemberSteam, AppError> {
        let link = DiscordUserSteamRepository::new(self.db)
            .get_one(user_id, steam_id)
            .await?;
        if link.is_none() {
            return Err(not_linked(steam_id));
        }

        DiscordGuildRepository::new(self.db).add(guild_id).await?;
        DiscordMemberRepository::new(self.db)
            .add(guild_id, user_id)
            .await?;

        let shown = DiscordMemberSteamRepository::new(self.db)
            .add(guild_id, user_id, steam_id)
            .await
            .map_err(|e| match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => AppError::BadRequest(format!(
                    "Steam account {} is already shown in this server",
                    steam_id
                )),
                _ => e.into(),
            })?;

        Ok(shown)
    }

    /// Hides a Steam account in a guild.
    ///
    /// # Returns
    /// - `Ok(())` - The account is no longer shown in the guild
    /// - `Err(AppError::NotFound)` - The account was not shown in the guild
    pub async fn hide_in_guild(
        &self,
        guild_id: u64,
        user_id: u64,
        steam_id: u64,
    ) -> Result<(), AppError> {
        let deleted = DiscordMemberSteamRepository::new(self.db)
            .delete(guild_id, user_id, steam_id)
            .await?;
        if !deleted {
            return Err(AppError::NotFound(format!(
                "Steam account {} is not shown in this server",
                steam_id
            )));
        }

        Ok(())
    }

    /// Reads the user's Steam connections through their delegated client.
    async fn fetch_steam_connections(
        &self,
        user_id: u64,
    ) -> Result<Vec<(u64, Connection)>, AppError> {
        let connections = self
            .tokens
            .with_client(user_id, |client| async move { client.fetch_connections().await })
            .await?;

        connections
            .into_iter()
            .filter(Connection::is_steam)
            .map(|connection| -> Result<(u64, Connection), AppError> {
                let steam_id = parse_u64_from_string(connection.id.clone())?;
                Ok((steam_id, connection))
            })
            .collect()
    }
}

fn not_linked(steam_id: u64) -> AppError {
    AppError::NotFound(format!("Steam account {} is not linked", steam_id))
}

fn already_linked(err: DbErr, steam_id: u64) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            AppError::BadRequest(format!("Steam account {} is already linked", steam_id))
        }
        _ => err.into(),
    }
}
