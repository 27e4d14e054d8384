use super::*;

/// Tests that adding a known user again is ignored.
///
/// Expected: Ok on both calls with a single row stored
#[tokio::test]
async fn add_ignores_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_discord_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DiscordUserRepository::new(db);
    repo.add(123456789).await?;
    repo.add(123456789).await?;

    assert_eq!(entity::prelude::DiscordUser::find().count(db).await?, 1);

    Ok(())
}
