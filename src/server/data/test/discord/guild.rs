use super::*;

/// Tests that adding a known guild again is ignored.
///
/// Expected: Ok with a single row stored
#[tokio::test]
async fn add_ignores_existing_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_discord_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DiscordGuildRepository::new(db);
    repo.add(987654321).await?;
    repo.add(987654321).await?;

    assert_eq!(repo.get_all_ids().await?, vec![987654321]);

    Ok(())
}

/// Tests listing every stored guild ID.
///
/// Expected: Ok with all guild IDs parsed to u64
#[tokio::test]
async fn get_all_ids_returns_every_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_discord_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_guild(db).await?;
    let second = factory::create_guild(db).await?;

    let repo = DiscordGuildRepository::new(db);
    let mut ids = repo.get_all_ids().await?;
    ids.sort_unstable();

    let mut expected: Vec<u64> = vec![
        first.guild_id.parse().unwrap(),
        second.guild_id.parse().unwrap(),
    ];
    expected.sort_unstable();

    assert_eq!(ids, expected);

    Ok(())
}

/// Tests that deleting a guild removes its channels and members.
///
/// Expected: Ok(true) with dependent rows removed by cascade, users kept
#[tokio::test]
async fn delete_cascades_to_channels_and_members() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_discord_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (guild, _user, _member) = factory::create_member(db).await?;
    factory::discord_guild::create_channel(db, Some(&guild.guild_id)).await?;

    let repo = DiscordGuildRepository::new(db);
    assert!(repo.delete(guild.guild_id.parse().unwrap()).await?);

    assert_eq!(entity::prelude::DiscordChannel::find().count(db).await?, 0);
    assert_eq!(entity::prelude::DiscordMember::find().count(db).await?, 0);
    assert_eq!(entity::prelude::DiscordUser::find().count(db).await?, 1);

    Ok(())
}

/// Tests deleting a guild that is not stored.
///
/// Expected: Ok(false)
#[tokio::test]
async fn delete_unknown_guild_returns_false() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_discord_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DiscordGuildRepository::new(db);

    assert!(!repo.delete(987654321).await?);

    Ok(())
}
