use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "steam_user")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::discord_user_steam::Entity")]
    DiscordUserSteam,
}

impl Related<super::discord_user_steam::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DiscordUserSteam.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
