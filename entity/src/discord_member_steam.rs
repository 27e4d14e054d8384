use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "discord_member_steam")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub guild_id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub steam_id: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::discord_member::Entity",
        from = "(Column::GuildId, Column::UserId)",
        to = "(super::discord_member::Column::GuildId, super::discord_member::Column::UserId)",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    DiscordMember,
    #[sea_orm(
        belongs_to = "super::discord_user_steam::Entity",
        from = "(Column::UserId, Column::SteamId)",
        to = "(super::discord_user_steam::Column::UserId, super::discord_user_steam::Column::SteamId)",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    DiscordUserSteam,
}

impl Related<super::discord_member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DiscordMember.def()
    }
}

impl Related<super::discord_user_steam::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DiscordUserSteam.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
