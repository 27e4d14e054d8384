use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "discord_user")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::discord_oauth::Entity")]
    DiscordOauth,
    #[sea_orm(has_many = "super::discord_member::Entity")]
    DiscordMember,
    #[sea_orm(has_many = "super::discord_user_steam::Entity")]
    DiscordUserSteam,
}

impl Related<super::discord_oauth::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DiscordOauth.def()
    }
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
