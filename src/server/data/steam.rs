//! Steam account and Steam link repositories.
//!
//! Inserts here are explicit user actions and are not conflict-tolerant: linking a
//! Steam account that is already linked fails with a unique constraint error.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::steam::{MemberSteam, UserSteam};

pub struct SteamUserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SteamUserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a Steam account.
    ///
    /// # Returns
    /// - `Ok(())` - Steam account recorded
    /// - `Err(DbErr)` - The account already exists or another database error
    pub async fn add(&self, steam_id: u64) -> Result<(), DbErr> {
        entity::steam_user::ActiveModel {
            user_id: ActiveValue::Set(steam_id.to_string()),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Deletes a Steam account together with every Discord link and guild link to it.
    ///
    /// # Returns
    /// - `Ok(true)` - The account was deleted
    /// - `Ok(false)` - The account was not stored
    /// - `Err(DbErr)` - Database error during deletion
    pub async fn delete(&self, steam_id: u64) -> Result<bool, DbErr> {
        let result = entity::prelude::SteamUser::delete_many()
            .filter(entity::steam_user::Column::UserId.eq(steam_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

/// Repository for Steam accounts linked to Discord users.
pub struct DiscordUserSteamRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DiscordUserSteamRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Links a stored Steam account to a stored Discord user.
    ///
    /// # Returns
    /// - `Ok(UserSteam)` - The created link
    /// - `Err(DbErr)` - The link already exists, a referenced row is missing, or
    ///   another database error
    pub async fn add(&self, user_id: u64, steam_id: u64) -> Result<UserSteam, DbErr> {
        let entity = entity::discord_user_steam::ActiveModel {
            user_id: ActiveValue::Set(user_id.to_string()),
            steam_id: ActiveValue::Set(steam_id.to_string()),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        UserSteam::from_entity(entity)
    }

    /// Gets every Steam account linked to a Discord user, oldest link first.
    pub async fn get_by_user(&self, user_id: u64) -> Result<Vec<UserSteam>, DbErr> {
        entity::prelude::DiscordUserSteam::find()
            .filter(entity::discord_user_steam::Column::UserId.eq(user_id.to_string()))
            .order_by_asc(entity::discord_user_steam::Column::CreatedAt)
            .all(self.db)
            .await?
            .into_iter()
            .map(UserSteam::from_entity)
            .collect()
    }

    /// Gets a single link between a Discord user and a Steam account.
    ///
    /// # Returns
    /// - `Ok(Some(UserSteam))` - The Discord user has linked this Steam account
    /// - `Ok(None)` - No such link
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_one(&self, user_id: u64, steam_id: u64) -> Result<Option<UserSteam>, DbErr> {
        entity::prelude::DiscordUserSteam::find_by_id((user_id.to_string(), steam_id.to_string()))
            .one(self.db)
            .await?
            .map(UserSteam::from_entity)
            .transpose()
    }
}

/// Repository for linked Steam accounts shown in individual guilds.
pub struct DiscordMemberSteamRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DiscordMemberSteamRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Shows a linked Steam account in a guild the user is a member of.
    ///
    /// # Returns
    /// - `Ok(MemberSteam)` - The created guild link
    /// - `Err(DbErr)` - Already shown, the membership or user link is missing, or
    ///   another database error
    pub async fn add(
        &self,
        guild_id: u64,
        user_id: u64,
        steam_id: u64,
    ) -> Result<MemberSteam, DbErr> {
        let entity = entity::discord_member_steam::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            user_id: ActiveValue::Set(user_id.to_string()),
            steam_id: ActiveValue::Set(steam_id.to_string()),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        MemberSteam::from_entity(entity)
    }

    /// Gets the Steam accounts a member shows in a guild, oldest first.
    pub async fn get_by_member(
        &self,
        guild_id: u64,
        user_id: u64,
    ) -> Result<Vec<MemberSteam>, DbErr> {
        entity::prelude::DiscordMemberSteam::find()
            .filter(entity::discord_member_steam::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::discord_member_steam::Column::UserId.eq(user_id.to_string()))
            .order_by_asc(entity::discord_member_steam::Column::CreatedAt)
            .all(self.db)
            .await?
            .into_iter()
            .map(MemberSteam::from_entity)
            .collect()
    }

    /// Gets a single guild link of a member's Steam account.
    pub async fn get_one(
        &self,
        guild_id: u64,
        user_id: u64,
        steam_id: u64,
    ) -> Result<Option<MemberSteam>, DbErr> {
        entity::prelude::DiscordMemberSteam::find_by_id((
            guild_id.to_string(),
            user_id.to_string(),
            steam_id.to_string(),
        ))
        .one(self.db)
        .await?
        .map(MemberSteam::from_entity)
        .transpose()
    }

    /// Hides a Steam account in a guild.
    ///
    /// # Returns
    /// - `Ok(true)` - The guild link was deleted
    /// - `Ok(false)` - The account was not shown in that guild
    /// - `Err(DbErr)` - Database error during deletion
    pub async fn delete(&self, guild_id: u64, user_id: u64, steam_id: u64) -> Result<bool, DbErr> {
        let result = entity::prelude::DiscordMemberSteam::delete_many()
            .filter(entity::discord_member_steam::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::discord_member_steam::Column::UserId.eq(user_id.to_string()))
            .filter(entity::discord_member_steam::Column::SteamId.eq(steam_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
