use super::*;

/// Tests linking a Steam account and reading the link back.
///
/// Expected: Ok with the link returned by both queries
#[tokio::test]
async fn add_then_get() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_steam_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_discord_user(db).await?;
    let steam_user = factory::create_steam_user(db).await?;
    let user_id: u64 = user.user_id.parse().unwrap();
    let steam_id: u64 = steam_user.user_id.parse().unwrap();

    let repo = DiscordUserSteamRepository::new(db);
    let link = repo.add(user_id, steam_id).await?;

    assert_eq!(link.user_id, user_id);
    assert_eq!(link.steam_id, steam_id);
    assert_eq!(repo.get_by_user(user_id).await?, vec![link.clone()]);
    assert_eq!(repo.get_one(user_id, steam_id).await?, Some(link));

    Ok(())
}

/// Tests linking the same account twice.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn add_rejects_duplicate_link() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_steam_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_discord_user(db).await?;
    let (steam_user, _link) = factory::link_steam_user(db, &user.user_id).await?;

    let repo = DiscordUserSteamRepository::new(db);
    let result = repo
        .add(
            user.user_id.parse().unwrap(),
            steam_user.user_id.parse().unwrap(),
        )
        .await;

    assert!(result.is_err());

    Ok(())
}

/// Tests queries for a user without links.
///
/// Expected: Ok with an empty list and None
#[tokio::test]
async fn get_returns_nothing_for_unlinked_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_steam_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_discord_user(db).await?;
    let user_id: u64 = user.user_id.parse().unwrap();

    let repo = DiscordUserSteamRepository::new(db);

    assert!(repo.get_by_user(user_id).await?.is_empty());
    assert!(repo.get_one(user_id, 76561197960287930).await?.is_none());

    Ok(())
}
