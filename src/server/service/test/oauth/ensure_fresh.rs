use super::*;

/// Tests that a credential valid for well over a minute is reused.
///
/// Expected: Ok with the input unchanged and no exchange
#[tokio::test]
async fn returns_fresh_credential_unchanged() -> Result<(), AppError> {
    let test = TestBuilder::new().with_oauth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let exchange = FakeExchange::granting("connections identify", 3600);
    let factory = FakeFactory::new(USER_ID);
    let locks = RefreshLocks::new();

    let credential = store_credential(db, 3600).await?;

    let service = TokenService::new(db, &exchange, &factory, &locks);
    let result = service.ensure_fresh(credential.clone()).await?;

    assert_eq!(result, credential);
    assert_eq!(exchange.refresh_calls(), 0);

    Ok(())
}

/// Tests that a credential expiring within the margin is refreshed.
///
/// Expected: Ok with exactly one exchange of the stored refresh token and the new
/// pair persisted
#[tokio::test]
async fn refreshes_credential_expiring_within_margin() -> Result<(), AppError> {
    let test = TestBuilder::new().with_oauth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let exchange = FakeExchange::granting("connections identify", 3600);
    let factory = FakeFactory::new(USER_ID);
    let locks = RefreshLocks::new();

    let credential = store_credential(db, 30).await?;

    let service = TokenService::new(db, &exchange, &factory, &locks);
    let result = service.ensure_fresh(credential).await?;

    assert_eq!(exchange.refresh_calls(), 1);
    assert_eq!(exchange.refreshed_tokens(), vec!["old-refresh".to_string()]);
    assert_eq!(result.access_token, "new-access-1");
    assert_eq!(result.refresh_token, "new-refresh-1");

    let stored = DiscordOAuthRepository::new(db).get(USER_ID).await?.unwrap();
    assert_eq!(stored, result);
    assert!(locks.is_empty());

    Ok(())
}

/// Tests that an already expired credential is refreshed.
///
/// Expected: Ok after exactly one exchange
#[tokio::test]
async fn refreshes_expired_credential() -> Result<(), AppError> {
    let test = TestBuilder::new().with_oauth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let exchange = FakeExchange::granting("connections identify", 3600);
    let factory = FakeFactory::new(USER_ID);
    let locks = RefreshLocks::new();

    let credential = store_credential(db, -600).await?;

    let service = TokenService::new(db, &exchange, &factory, &locks);
    let result = service.ensure_fresh(credential).await?;

    assert_eq!(exchange.refresh_calls(), 1);
    assert!(result.is_fresh_at(Utc::now()));

    Ok(())
}

/// Tests a refresh that adds a scope.
///
/// Expected: expiry about an hour from now and the widened scope stored sorted
#[tokio::test]
async fn stores_widened_scope_sorted() -> Result<(), AppError> {
    let test = TestBuilder::new().with_oauth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let exchange = FakeExchange::granting("identify connections email", 3600);
    let factory = FakeFactory::new(USER_ID);
    let locks = RefreshLocks::new();

    let credential = store_credential(db, 30).await?;

    let service = TokenService::new(db, &exchange, &factory, &locks);
    service.ensure_fresh(credential).await?;

    let row = entity::prelude::DiscordOauth::find_by_id(USER_ID.to_string())
        .one(db)
        .await?
        .unwrap();
    let expected_expiry = Utc::now() + Duration::seconds(3600);

    assert_eq!(row.scope, "connections email identify");
    assert!((row.expires_at - expected_expiry).num_seconds().abs() <= 5);

    Ok(())
}

/// Tests a refresh that drops a granted scope.
///
/// Expected: Err(ScopeNarrowed) and the credential deleted
#[tokio::test]
async fn deletes_credential_when_scope_narrowed() -> Result<(), AppError> {
    let test = TestBuilder::new().with_oauth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let exchange = FakeExchange::granting("identify", 3600);
    let factory = FakeFactory::new(USER_ID);
    let locks = RefreshLocks::new();

    let credential = store_credential(db, 30).await?;

    let service = TokenService::new(db, &exchange, &factory, &locks);
    let err = oauth_error(service.ensure_fresh(credential).await);

    match err {
        OAuthError::ScopeNarrowed { user_id, missing } => {
            assert_eq!(user_id, USER_ID);
            assert_eq!(missing, vec!["connections".to_string()]);
        }
        other => panic!("expected ScopeNarrowed, got {}", other),
    }
    assert_eq!(credential_count(db).await?, 0);

    Ok(())
}

/// Tests a refresh that drops one scope and adds another.
///
/// Expected: Err(ScopeNarrowed) regardless of the added scope
#[tokio::test]
async fn added_scope_does_not_offset_missing_scope() -> Result<(), AppError> {
    let test = TestBuilder::new().with_oauth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let exchange = FakeExchange::granting("identify email guilds", 3600);
    let factory = FakeFactory::new(USER_ID);
    let locks = RefreshLocks::new();

    let credential = store_credential(db, 30).await?;

    let service = TokenService::new(db, &exchange, &factory, &locks);
    let err = oauth_error(service.ensure_fresh(credential).await);

    assert!(matches!(err, OAuthError::ScopeNarrowed { .. }));
    assert_eq!(credential_count(db).await?, 0);

    Ok(())
}

/// Tests a refresh rejected by the provider.
///
/// Expected: Err(RefreshFailed), credential deleted, next acquire not authorized
#[tokio::test]
async fn deletes_credential_when_refresh_fails() -> Result<(), AppError> {
    let test = TestBuilder::new().with_oauth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let exchange = FakeExchange::failing();
    let factory = FakeFactory::new(USER_ID);
    let locks = RefreshLocks::new();

    let credential = store_credential(db, 30).await?;

    let service = TokenService::new(db, &exchange, &factory, &locks);
    let err = oauth_error(service.ensure_fresh(credential).await);

    assert!(matches!(err, OAuthError::RefreshFailed { user_id, .. } if user_id == USER_ID));
    assert_eq!(credential_count(db).await?, 0);

    let err = oauth_error(service.acquire(USER_ID).await);
    assert!(matches!(err, OAuthError::NotAuthorized { .. }));
    assert_eq!(exchange.refresh_calls(), 1);

    Ok(())
}

/// Tests a refresh whose `expires_in` pushes the expiry past the representable range.
///
/// Expected: Err(RefreshFailed) instead of a panic, credential deleted
#[tokio::test]
async fn deletes_credential_when_refreshed_expiry_overflows() -> Result<(), AppError> {
    let test = TestBuilder::new().with_oauth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let exchange = FakeExchange::granting("connections identify", 10_000_000_000_000);
    let factory = FakeFactory::new(USER_ID);
    let locks = RefreshLocks::new();

    let credential = store_credential(db, 30).await?;

    let service = TokenService::new(db, &exchange, &factory, &locks);
    let err = oauth_error(service.ensure_fresh(credential).await);

    assert!(matches!(
        err,
        OAuthError::RefreshFailed {
            source: ExchangeError::IncompleteResponse(_),
            ..
        }
    ));
    assert_eq!(credential_count(db).await?, 0);

    let err = oauth_error(service.acquire(USER_ID).await);
    assert!(matches!(err, OAuthError::NotAuthorized { .. }));

    Ok(())
}

/// Tests two concurrent callers holding the same expiring credential.
///
/// Expected: one exchange; both callers get the rotated credential
#[tokio::test]
async fn concurrent_callers_share_one_refresh() -> Result<(), AppError> {
    let test = TestBuilder::new().with_oauth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let exchange = FakeExchange::granting("connections identify", 3600)
        .with_delay(std::time::Duration::from_millis(50));
    let factory = FakeFactory::new(USER_ID);
    let locks = RefreshLocks::new();

    let credential = store_credential(db, 30).await?;

    let service = TokenService::new(db, &exchange, &factory, &locks);
    let (first, second) = tokio::join!(
        service.ensure_fresh(credential.clone()),
        service.ensure_fresh(credential)
    );

    let first = first?;
    let second = second?;

    assert_eq!(exchange.refresh_calls(), 1);
    assert_eq!(first.refresh_token, "new-refresh-1");
    assert_eq!(second.refresh_token, "new-refresh-1");
    assert!(locks.is_empty());

    Ok(())
}

/// Tests a caller holding a credential that was deleted before the refresh.
///
/// Expected: Err(NotAuthorized) without an exchange
#[tokio::test]
async fn deleted_while_stale_is_not_authorized() -> Result<(), AppError> {
    let test = TestBuilder::new().with_oauth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let exchange = FakeExchange::granting("connections identify", 3600);
    let factory = FakeFactory::new(USER_ID);
    let locks = RefreshLocks::new();

    let credential = store_credential(db, 30).await?;
    DiscordOAuthRepository::new(db).delete(USER_ID).await?;

    let service = TokenService::new(db, &exchange, &factory, &locks);
    let err = oauth_error(service.ensure_fresh(credential).await);

    assert!(matches!(err, OAuthError::NotAuthorized { .. }));
    assert_eq!(exchange.refresh_calls(), 0);

    Ok(())
}
