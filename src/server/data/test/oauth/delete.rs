use super::*;

/// Tests deleting a stored credential.
///
/// Expected: Ok(true), credential gone, the Discord user row kept
#[tokio::test]
async fn deletes_credential() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_oauth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::create_credential(db).await?;
    let user_id: u64 = stored.user_id.parse().unwrap();

    let repo = DiscordOAuthRepository::new(db);

    assert!(repo.delete(user_id).await?);
    assert!(repo.get(user_id).await?.is_none());
    assert!(entity::prelude::DiscordUser::find_by_id(stored.user_id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}

/// Tests deleting twice.
///
/// Expected: Ok(false) on the second call, no error
#[tokio::test]
async fn second_delete_is_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_oauth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::create_credential(db).await?;
    let user_id: u64 = stored.user_id.parse().unwrap();

    let repo = DiscordOAuthRepository::new(db);

    assert!(repo.delete(user_id).await?);
    assert!(!repo.delete(user_id).await?);

    Ok(())
}

/// Tests that deleting the Discord user removes the credential.
///
/// Expected: credential removed by cascade
#[tokio::test]
async fn cascades_from_discord_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_oauth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::create_credential(db).await?;
    let user_id: u64 = stored.user_id.parse().unwrap();

    entity::prelude::DiscordUser::delete_by_id(stored.user_id)
        .exec(db)
        .await?;

    let repo = DiscordOAuthRepository::new(db);
    assert!(repo.get(user_id).await?.is_none());

    Ok(())
}
