use super::*;

/// Tests acquiring for a user who never authorized.
///
/// Expected: Err(NotAuthorized) with no exchange, no client and no rows written
#[tokio::test]
async fn fails_without_credential() -> Result<(), AppError> {
    let test = TestBuilder::new().with_oauth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let exchange = FakeExchange::granting("connections identify", 3600);
    let factory = FakeFactory::new(USER_ID);
    let locks = RefreshLocks::new();

    let service = TokenService::new(db, &exchange, &factory, &locks);
    let err = oauth_error(service.acquire(USER_ID).await);

    assert!(matches!(err, OAuthError::NotAuthorized { user_id } if user_id == USER_ID));
    assert_eq!(exchange.refresh_calls(), 0);
    assert!(factory.created().is_empty());
    assert_eq!(credential_count(db).await?, 0);
    assert_eq!(entity::prelude::DiscordUser::find().count(db).await?, 0);

    Ok(())
}

/// Tests acquiring with a fresh credential.
///
/// Expected: client bound to the stored token, no exchange
#[tokio::test]
async fn binds_client_to_stored_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_oauth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let exchange = FakeExchange::granting("connections identify", 3600);
    let factory = FakeFactory::new(USER_ID);
    let locks = RefreshLocks::new();

    store_credential(db, 3600).await?;

    let service = TokenService::new(db, &exchange, &factory, &locks);
    let client = service.acquire(USER_ID).await?;

    assert_eq!(client.user_id(), USER_ID);
    assert_eq!(factory.created(), vec!["Bearer old-access".to_string()]);
    assert_eq!(exchange.refresh_calls(), 0);

    Ok(())
}

/// Tests acquiring with an expiring credential.
///
/// Expected: client bound to the refreshed token
#[tokio::test]
async fn binds_client_to_refreshed_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_oauth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let exchange = FakeExchange::granting("connections identify", 3600);
    let factory = FakeFactory::new(USER_ID);
    let locks = RefreshLocks::new();

    store_credential(db, 10).await?;

    let service = TokenService::new(db, &exchange, &factory, &locks);
    service.acquire(USER_ID).await?;

    assert_eq!(factory.created(), vec!["Bearer new-access-1".to_string()]);
    assert_eq!(exchange.refresh_calls(), 1);

    Ok(())
}

/// Tests that a refresh failure reaches the caller of acquire unchanged.
///
/// Expected: Err(RefreshFailed) and no client created
#[tokio::test]
async fn propagates_refresh_failure() -> Result<(), AppError> {
    let test = TestBuilder::new().with_oauth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let exchange = FakeExchange::failing();
    let factory = FakeFactory::new(USER_ID);
    let locks = RefreshLocks::new();

    store_credential(db, 10).await?;

    let service = TokenService::new(db, &exchange, &factory, &locks);
    let err = oauth_error(service.acquire(USER_ID).await);

    assert!(matches!(err, OAuthError::RefreshFailed { .. }));
    assert!(factory.created().is_empty());

    Ok(())
}

/// Tests a delegated call answered with 401.
///
/// Expected: Err(Revoked), credential deleted, next acquire not authorized
#[tokio::test]
async fn unauthorized_call_revokes_credential() -> Result<(), AppError> {
    let test = TestBuilder::new().with_oauth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let exchange = FakeExchange::granting("connections identify", 3600);
    let factory = FakeFactory::new(USER_ID).answering(FakeApi::Unauthorized);
    let locks = RefreshLocks::new();

    store_credential(db, 3600).await?;

    let service = TokenService::new(db, &exchange, &factory, &locks);
    let client = service.acquire(USER_ID).await?;
    let err = oauth_error(client.call(|c| c.fetch_current_user()).await);

    assert!(matches!(err, OAuthError::Revoked { user_id } if user_id == USER_ID));
    assert_eq!(credential_count(db).await?, 0);

    let err = oauth_error(service.acquire(USER_ID).await);
    assert!(matches!(err, OAuthError::NotAuthorized { .. }));

    Ok(())
}

/// Tests a delegated call failing for a reason other than authorization.
///
/// Expected: Err(DiscordApiErr) with the credential kept
#[tokio::test]
async fn other_failures_keep_credential() -> Result<(), AppError> {
    let test = TestBuilder::new().with_oauth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let exchange = FakeExchange::granting("connections identify", 3600);
    let factory = FakeFactory::new(USER_ID).answering(FakeApi::ServerError);
    let locks = RefreshLocks::new();

    store_credential(db, 3600).await?;

    let service = TokenService::new(db, &exchange, &factory, &locks);
    let result = service
        .with_client(USER_ID, |client| async move { client.fetch_connections().await })
        .await;

    assert!(matches!(result, Err(AppError::DiscordApiErr(_))));
    assert_eq!(credential_count(db).await?, 1);

    Ok(())
}

/// Tests reusing one client for several calls.
///
/// Expected: both calls succeed with a single client created
#[tokio::test]
async fn client_serves_several_calls() -> Result<(), AppError> {
    let test = TestBuilder::new().with_oauth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let exchange = FakeExchange::granting("connections identify", 3600);
    let factory = FakeFactory::new(USER_ID);
    let locks = RefreshLocks::new();

    store_credential(db, 3600).await?;

    let service = TokenService::new(db, &exchange, &factory, &locks);
    let client = service.acquire(USER_ID).await?;

    let user = client.call(|c| c.fetch_current_user()).await?;
    let connections = client.call(|c| c.fetch_connections()).await?;

    assert_eq!(user.id.get(), USER_ID);
    assert!(connections.is_empty());
    assert_eq!(factory.created().len(), 1);

    Ok(())
}
