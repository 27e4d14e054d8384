use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "discord_guild")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub guild_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::discord_channel::Entity")]
    DiscordChannel,
    #[sea_orm(has_many = "super::discord_member::Entity")]
    DiscordMember,
}

impl Related<super::discord_channel::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DiscordChannel.def()
    }
}

impl Related<super::discord_member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DiscordMember.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
