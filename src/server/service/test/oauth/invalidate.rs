use super::*;

/// Tests invalidating twice.
///
/// Expected: Ok on both calls with no credential left
#[tokio::test]
async fn invalidate_is_idempotent() -> Result<(), AppError> {
    let test = TestBuilder::new().with_oauth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let exchange = FakeExchange::granting("connections identify", 3600);
    let factory = FakeFactory::new(USER_ID);
    let locks = RefreshLocks::new();

    store_credential(db, 3600).await?;

    let service = TokenService::new(db, &exchange, &factory, &locks);
    service.invalidate(USER_ID).await?;
    service.invalidate(USER_ID).await?;

    assert_eq!(credential_count(db).await?, 0);

    Ok(())
}

/// Tests invalidating a user who never authorized.
///
/// Expected: Ok
#[tokio::test]
async fn invalidate_without_credential_is_noop() -> Result<(), AppError> {
    let test = TestBuilder::new().with_oauth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let exchange = FakeExchange::granting("connections identify", 3600);
    let factory = FakeFactory::new(USER_ID);
    let locks = RefreshLocks::new();

    let service = TokenService::new(db, &exchange, &factory, &locks);

    assert!(service.invalidate(USER_ID).await.is_ok());

    Ok(())
}

/// Tests a user-initiated disconnect.
///
/// Expected: Ok(true) with one revocation and the credential deleted; Ok(false)
/// without revocation afterwards
#[tokio::test]
async fn disconnect_revokes_and_deletes() -> Result<(), AppError> {
    let test = TestBuilder::new().with_oauth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let exchange = FakeExchange::granting("connections identify", 3600);
    let factory = FakeFactory::new(USER_ID);
    let locks = RefreshLocks::new();

    store_credential(db, 3600).await?;

    let service = TokenService::new(db, &exchange, &factory, &locks);

    assert!(service.disconnect(USER_ID).await?);
    assert_eq!(exchange.revoke_calls(), 1);
    assert_eq!(credential_count(db).await?, 0);

    assert!(!service.disconnect(USER_ID).await?);
    assert_eq!(exchange.revoke_calls(), 1);

    Ok(())
}

/// Tests disconnecting while Discord cannot revoke the token.
///
/// Expected: Ok(true) with the credential deleted anyway
#[tokio::test]
async fn disconnect_deletes_when_revoke_fails() -> Result<(), AppError> {
    let test = TestBuilder::new().with_oauth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let exchange = FakeExchange::granting("connections identify", 3600).with_failing_revoke();
    let factory = FakeFactory::new(USER_ID);
    let locks = RefreshLocks::new();

    store_credential(db, 3600).await?;

    let service = TokenService::new(db, &exchange, &factory, &locks);

    assert!(service.disconnect(USER_ID).await?);
    assert_eq!(credential_count(db).await?, 0);

    Ok(())
}
