use super::*;

/// Tests that adding the same Steam account twice fails.
///
/// Expected: Ok on the first call, Err on the second
#[tokio::test]
async fn add_rejects_existing_account() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_steam_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SteamUserRepository::new(db);
    repo.add(76561197960287930).await?;

    assert!(repo.add(76561197960287930).await.is_err());

    Ok(())
}

/// Tests that deleting a Steam account removes every link to it.
///
/// Expected: Ok(true) with user and guild links removed by cascade
#[tokio::test]
async fn delete_cascades_to_links() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_steam_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (guild, user, _member) = factory::create_member(db).await?;
    let (steam_user, _link) = factory::link_steam_user(db, &user.user_id).await?;
    let guild_id: u64 = guild.guild_id.parse().unwrap();
    let user_id: u64 = user.user_id.parse().unwrap();
    let steam_id: u64 = steam_user.user_id.parse().unwrap();

    DiscordMemberSteamRepository::new(db)
        .add(guild_id, user_id, steam_id)
        .await?;

    let repo = SteamUserRepository::new(db);
    assert!(repo.delete(steam_id).await?);

    assert_eq!(entity::prelude::DiscordUserSteam::find().count(db).await?, 0);
    assert_eq!(entity::prelude::DiscordMemberSteam::find().count(db).await?, 0);
    assert_eq!(entity::prelude::DiscordMember::find().count(db).await?, 1);

    Ok(())
}
