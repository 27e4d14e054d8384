use super::*;

/// Tests recording guild and private channels.
///
/// Expected: Ok with both channels stored, duplicates ignored
#[tokio::test]
async fn add_stores_guild_and_private_channels() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_discord_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let guild_id: u64 = guild.guild_id.parse().unwrap();

    let repo = DiscordChannelRepository::new(db);
    repo.add(1, Some(guild_id)).await?;
    repo.add(1, Some(guild_id)).await?;
    repo.add(2, None).await?;

    let private = entity::prelude::DiscordChannel::find_by_id("2".to_string())
        .one(db)
        .await?
        .unwrap();

    assert_eq!(entity::prelude::DiscordChannel::find().count(db).await?, 2);
    assert!(private.guild_id.is_none());

    Ok(())
}

/// Tests deleting a channel, then deleting it again.
///
/// Expected: Ok on both calls with the row removed
#[tokio::test]
async fn delete_removes_channel() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_discord_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let channel = factory::discord_guild::create_channel(db, None).await?;
    let channel_id: u64 = channel.channel_id.parse().unwrap();

    let repo = DiscordChannelRepository::new(db);
    repo.delete(channel_id).await?;
    repo.delete(channel_id).await?;

    assert_eq!(entity::prelude::DiscordChannel::find().count(db).await?, 0);

    Ok(())
}
