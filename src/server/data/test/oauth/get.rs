use super::*;

/// Tests reading a stored credential.
///
/// Expected: Ok(Some) with tokens and scope as stored
#[tokio::test]
async fn returns_stored_credential() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_oauth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::discord_oauth::DiscordOauthFactory::new(db)
        .user_id("123456789")
        .access_token("access")
        .refresh_token("refresh")
        .scope("connections identify")
        .build()
        .await?;

    let repo = DiscordOAuthRepository::new(db);
    let credential = repo.get(123456789).await?.unwrap();

    assert_eq!(credential.user_id, 123456789);
    assert_eq!(credential.access_token, "access");
    assert_eq!(credential.refresh_token, "refresh");
    assert_eq!(credential.expires_at, stored.expires_at);
    assert!(credential.scope.contains("identify"));
    assert!(credential.scope.contains("connections"));

    Ok(())
}

/// Tests reading a credential for a user who never authorized.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_oauth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DiscordOAuthRepository::new(db);

    assert!(repo.get(123456789).await?.is_none());

    Ok(())
}
