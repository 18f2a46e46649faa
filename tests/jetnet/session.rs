//! Tests for SessionManager session lifecycle behavior.
//!
//! Covers TTL-driven revalidation through the account-info probe, re-login on
//! probe failure, and rejected-credential handling.

use chrono::Utc;
use habrok::error::auth::AuthError;
use habrok::jetnet::SessionStore;
use habrok::Error;
use habrok_test_utils::prelude::*;

/// A session past the 50-minute TTL is revalidated with the lightweight probe;
/// a confirming probe stamps the session without replacing the token pair.
///
/// Expected: Ok with the original tokens and a reset TTL, no login call
#[tokio::test]
async fn stale_session_is_revalidated_by_probe() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_session_age_minutes(55).build().await?;

    let probe = test
        .jetnet()
        .create_account_info_endpoint(TEST_API_TOKEN, factory::account_info_body(), 1);
    let login = test.jetnet().create_login_endpoint(
        factory::login_body(TEST_BEARER_TOKEN, TEST_API_TOKEN_RENEWED),
        0,
    );

    let session = test.session().await?;
    test.manager.ensure_valid(&session).await?;

    let guard = session.read().await;
    assert_eq!(guard.api_token, TEST_API_TOKEN);
    assert!(!guard.age_exceeds_ttl(Utc::now()));
    drop(guard);

    probe.assert();
    login.assert();

    Ok(())
}

/// A probe that reports an invalidated token forces a full re-login, replacing
/// both tokens atomically.
///
/// Expected: Ok with the renewed token pair installed
#[tokio::test]
async fn failed_probe_triggers_relogin() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_session_age_minutes(55).build().await?;

    let probe = test
        .jetnet()
        .create_account_info_endpoint(TEST_API_TOKEN, factory::invalid_token_body(), 1);
    let login = test.jetnet().create_login_endpoint(
        factory::login_body(TEST_BEARER_TOKEN, TEST_API_TOKEN_RENEWED),
        1,
    );

    let session = test.session().await?;
    test.manager.ensure_valid(&session).await?;

    let guard = session.read().await;
    assert_eq!(guard.api_token, TEST_API_TOKEN_RENEWED);
    assert_eq!(guard.bearer_token, TEST_BEARER_TOKEN);
    drop(guard);

    probe.assert();
    login.assert();

    Ok(())
}

/// A session within its TTL goes back out untouched.
///
/// Expected: Ok with no upstream traffic at all
#[tokio::test]
async fn fresh_session_skips_validation() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;

    let probe = test
        .jetnet()
        .create_account_info_endpoint(TEST_API_TOKEN, factory::account_info_body(), 0);
    let login = test
        .jetnet()
        .create_login_endpoint(factory::login_body(TEST_BEARER_TOKEN, TEST_API_TOKEN), 0);

    let session = test.session().await?;
    test.manager.ensure_valid(&session).await?;

    probe.assert();
    login.assert();

    Ok(())
}

/// A deleted session key is forgotten; later lookups against it fail.
///
/// Expected: Err(AuthError::SessionNotFound) after the delete
#[tokio::test]
async fn deleted_sessions_are_forgotten() -> Result<(), TestError> {
    let test = TestSetup::new().await?;

    let key = test.store.put(factory::mock_session()).await?;
    assert!(test.store.get(&key).await.is_ok());

    test.store.delete(&key).await?;
    let result = test.store.get(&key).await;

    assert!(matches!(
        result,
        Err(Error::AuthError(AuthError::SessionNotFound))
    ));

    Ok(())
}

/// Declined credentials are fatal; the error carries JETNET's status string and
/// no retry happens.
///
/// Expected: Err(AuthError::LoginRejected)
#[tokio::test]
async fn rejected_credentials_surface_as_login_rejected() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;

    let login = test
        .jetnet()
        .create_login_endpoint(factory::failed_login_body(), 1);

    let result = test.manager.login().await;

    assert!(matches!(
        result,
        Err(Error::AuthError(AuthError::LoginRejected { .. }))
    ));
    login.assert();

    Ok(())
}

/// A login response missing either token is rejected rather than installed as a
/// half-valid session.
///
/// Expected: Err(AuthError::IncompleteTokenPair)
#[tokio::test]
async fn incomplete_token_pair_is_rejected() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;

    let login = test
        .jetnet()
        .create_login_endpoint(factory::login_body(TEST_BEARER_TOKEN, ""), 1);

    let result = test.manager.login().await;

    assert!(matches!(
        result,
        Err(Error::AuthError(AuthError::IncompleteTokenPair(_)))
    ));
    login.assert();

    Ok(())
}
