use super::*;

/// Tests showing a linked account in a guild and hiding it again.
///
/// Expected: Ok with the guild link present after add and gone after delete
#[tokio::test]
async fn add_get_and_delete() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_steam_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (guild, user, _member) = factory::create_member(db).await?;
    let (steam_user, _link) = factory::link_steam_user(db, &user.user_id).await?;
    let guild_id: u64 = guild.guild_id.parse().unwrap();
    let user_id: u64 = user.user_id.parse().unwrap();
    let steam_id: u64 = steam_user.user_id.parse().unwrap();

    let repo = DiscordMemberSteamRepository::new(db);
    let shown = repo.add(guild_id, user_id, steam_id).await?;

    assert_eq!(repo.get_by_member(guild_id, user_id).await?, vec![shown.clone()]);
    assert_eq!(repo.get_one(guild_id, user_id, steam_id).await?, Some(shown));

    assert!(repo.delete(guild_id, user_id, steam_id).await?);
    assert!(!repo.delete(guild_id, user_id, steam_id).await?);
    assert!(repo.get_one(guild_id, user_id, steam_id).await?.is_none());

    Ok(())
}

/// Tests showing an account the user never linked.
///
/// Expected: Err from the foreign key on the user link
#[tokio::test]
async fn add_requires_user_link() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_steam_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (guild, user, _member) = factory::create_member(db).await?;
    let steam_user = factory::create_steam_user(db).await?;

    let repo = DiscordMemberSteamRepository::new(db);
    let result = repo
        .add(
            guild.guild_id.parse().unwrap(),
            user.user_id.parse().unwrap(),
            steam_user.user_id.parse().unwrap(),
        )
        .await;

    assert!(result.is_err());

    Ok(())
}

/// Tests that removing the member hides their accounts in that guild.
///
/// Expected: guild link removed by cascade, user link kept
#[tokio::test]
async fn cascades_from_member() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_steam_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (guild, user, _member) = factory::create_member(db).await?;
    let (steam_user, _link) = factory::link_steam_user(db, &user.user_id).await?;
    let guild_id: u64 = guild.guild_id.parse().unwrap();
    let user_id: u64 = user.user_id.parse().unwrap();

    let repo = DiscordMemberSteamRepository::new(db);
    repo.add(guild_id, user_id, steam_user.user_id.parse().unwrap())
        .await?;

    crate::server::data::discord::DiscordMemberRepository::new(db)
        .delete(guild_id, user_id)
        .await?;

    assert_eq!(entity::prelude::DiscordMemberSteam::find().count(db).await?, 0);
    assert_eq!(entity::prelude::DiscordUserSteam::find().count(db).await?, 1);

    Ok(())
}
