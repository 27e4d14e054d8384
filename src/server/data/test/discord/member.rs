use super::*;

/// Tests recording a membership twice.
///
/// Expected: Ok with a single member row
#[tokio::test]
async fn add_ignores_existing_member() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_discord_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let user = factory::create_discord_user(db).await?;
    let guild_id: u64 = guild.guild_id.parse().unwrap();
    let user_id: u64 = user.user_id.parse().unwrap();

    let repo = DiscordMemberRepository::new(db);
    repo.add(guild_id, user_id).await?;
    repo.add(guild_id, user_id).await?;

    assert_eq!(entity::prelude::DiscordMember::find().count(db).await?, 1);

    Ok(())
}

/// Tests removing a membership.
///
/// Expected: Ok with the member row gone and guild and user kept
#[tokio::test]
async fn delete_removes_only_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_discord_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (guild, user, _member) = factory::create_member(db).await?;

    let repo = DiscordMemberRepository::new(db);
    repo.delete(guild.guild_id.parse().unwrap(), user.user_id.parse().unwrap())
        .await?;

    assert_eq!(entity::prelude::DiscordMember::find().count(db).await?, 0);
    assert_eq!(entity::prelude::DiscordGuild::find().count(db).await?, 1);
    assert_eq!(entity::prelude::DiscordUser::find().count(db).await?, 1);

    Ok(())
}
