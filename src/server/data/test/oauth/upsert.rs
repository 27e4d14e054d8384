use super::*;

/// Tests storing a credential for a user without a `discord_user` row.
///
/// Expected: Ok with credential stored and the user row created
#[tokio::test]
async fn creates_credential_and_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_oauth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DiscordOAuthRepository::new(db);
    let stored = repo.upsert(&credential(42, "first")).await?;

    assert_eq!(stored.user_id, 42);
    assert_eq!(stored.access_token, "access-first");
    assert!(entity::prelude::DiscordUser::find_by_id("42".to_string())
        .one(db)
        .await?
        .is_some());

    Ok(())
}

/// Tests that a second upsert replaces every token column.
///
/// Expected: Ok with one row holding the second credential
#[tokio::test]
async fn replaces_existing_credential() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_oauth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DiscordOAuthRepository::new(db);
    repo.upsert(&credential(42, "first")).await?;

    let mut second = credential(42, "second");
    second.scope = ScopeSet::parse("identify email connections");
    repo.upsert(&second).await?;

    let rows = entity::prelude::DiscordOauth::find().all(db).await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].access_token, "access-second");
    assert_eq!(rows[0].refresh_token, "refresh-second");
    assert_eq!(rows[0].scope, "connections email identify");

    Ok(())
}
