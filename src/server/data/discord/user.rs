use migration::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

pub struct DiscordUserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DiscordUserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a Discord user, doing nothing if the user is already known.
    pub async fn add(&self, user_id: u64) -> Result<(), DbErr> {
        entity::prelude::DiscordUser::insert(entity::discord_user::ActiveModel {
            user_id: ActiveValue::Set(user_id.to_string()),
        })
        .on_conflict(
            OnConflict::column(entity::discord_user::Column::UserId)
                .do_nothing()
                .to_owned(),
        )
        .do_nothing()
        .exec(self.db)
        .await?;

        Ok(())
    }
}
