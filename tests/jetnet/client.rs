//! Tests for JetnetClient request handling.
//!
//! Covers the bounded invalid-token retry (re-login and retry exactly once),
//! non-retryable error classes, and paged endpoint traversal.

use habrok::error::upstream::UpstreamError;
use habrok::jetnet::api::REG_NUMBER_PATH;
use habrok::Error;
use habrok_test_utils::prelude::*;

/// An invalid-token envelope on the first attempt is worth exactly one re-login;
/// the retry goes out under the renewed token pair and succeeds.
///
/// Expected: Ok with one login and one request per token
#[tokio::test]
async fn invalid_token_retries_once_with_fresh_tokens() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;

    let first_attempt = test.jetnet().create_reg_number_endpoint(
        TEST_API_TOKEN,
        TEST_REGISTRATION,
        factory::invalid_token_body(),
        1,
    );
    let login = test.jetnet().create_login_endpoint(
        factory::login_body(TEST_BEARER_TOKEN, TEST_API_TOKEN_RENEWED),
        1,
    );
    let retry = test.jetnet().create_reg_number_endpoint(
        TEST_API_TOKEN_RENEWED,
        TEST_REGISTRATION,
        factory::reg_number_body(),
        1,
    );

    let session = test.session().await?;
    let profile = test
        .client
        .get_aircraft_by_registration(&session, TEST_REGISTRATION)
        .await?;

    assert_eq!(profile.aircraft_id, TEST_AIRCRAFT_ID);
    assert_eq!(session.read().await.api_token, TEST_API_TOKEN_RENEWED);

    first_attempt.assert();
    login.assert();
    retry.assert();

    Ok(())
}

/// A second invalid-token response after the re-login surfaces; one retry per
/// logical call, never a loop.
///
/// Expected: Err(UpstreamError::InvalidToken) after exactly one re-login
#[tokio::test]
async fn persistent_invalid_token_surfaces_after_one_retry() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;

    let first_attempt = test.jetnet().create_reg_number_endpoint(
        TEST_API_TOKEN,
        TEST_REGISTRATION,
        factory::invalid_token_body(),
        1,
    );
    let login = test.jetnet().create_login_endpoint(
        factory::login_body(TEST_BEARER_TOKEN, TEST_API_TOKEN_RENEWED),
        1,
    );
    let retry = test.jetnet().create_reg_number_endpoint(
        TEST_API_TOKEN_RENEWED,
        TEST_REGISTRATION,
        factory::invalid_token_body(),
        1,
    );

    let session = test.session().await?;
    let result = test
        .client
        .get_aircraft_by_registration(&session, TEST_REGISTRATION)
        .await;

    assert!(matches!(
        result,
        Err(Error::UpstreamError(UpstreamError::InvalidToken { .. }))
    ));

    first_attempt.assert();
    login.assert();
    retry.assert();

    Ok(())
}

/// An RFC 7807 problem document inside a 200 response classifies as an
/// invalid-token failure and goes through the same single re-login cycle.
///
/// Expected: Ok after exactly one re-login
#[tokio::test]
async fn problem_documents_drive_the_token_retry() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;

    let first_attempt = test.jetnet().create_reg_number_endpoint(
        TEST_API_TOKEN,
        TEST_REGISTRATION,
        factory::problem_body(401, "Unauthorized"),
        1,
    );
    let login = test.jetnet().create_login_endpoint(
        factory::login_body(TEST_BEARER_TOKEN, TEST_API_TOKEN_RENEWED),
        1,
    );
    let retry = test.jetnet().create_reg_number_endpoint(
        TEST_API_TOKEN_RENEWED,
        TEST_REGISTRATION,
        factory::reg_number_body(),
        1,
    );

    let session = test.session().await?;
    let profile = test
        .client
        .get_aircraft_by_registration(&session, TEST_REGISTRATION)
        .await?;

    assert_eq!(profile.aircraft_id, TEST_AIRCRAFT_ID);

    first_attempt.assert();
    login.assert();
    retry.assert();

    Ok(())
}

/// Transport-level HTTP failures are never retried and never trigger a
/// re-login.
///
/// Expected: Err(UpstreamError::Http) with no login call
#[tokio::test]
async fn http_errors_are_never_retried() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;

    let path = format!("{REG_NUMBER_PATH}/{TEST_API_TOKEN}/{TEST_REGISTRATION}");
    let endpoint = test.jetnet().create_http_error_endpoint("GET", path, 500, 1);
    let login = test
        .jetnet()
        .create_login_endpoint(factory::login_body(TEST_BEARER_TOKEN, TEST_API_TOKEN), 0);

    let session = test.session().await?;
    let result = test
        .client
        .get_aircraft_by_registration(&session, TEST_REGISTRATION)
        .await;

    assert!(matches!(
        result,
        Err(Error::UpstreamError(UpstreamError::Http { status: 500, .. }))
    ));

    endpoint.assert();
    login.assert();

    Ok(())
}

/// Non-token application errors inside a 200 response surface immediately.
///
/// Expected: Err(UpstreamError::Api) with no login call
#[tokio::test]
async fn api_errors_surface_without_retry() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;

    let endpoint = test.jetnet().create_reg_number_endpoint(
        TEST_API_TOKEN,
        TEST_REGISTRATION,
        factory::error_body("ERROR: no records found"),
        1,
    );
    let login = test
        .jetnet()
        .create_login_endpoint(factory::login_body(TEST_BEARER_TOKEN, TEST_API_TOKEN), 0);

    let session = test.session().await?;
    let result = test
        .client
        .get_aircraft_by_registration(&session, TEST_REGISTRATION)
        .await;

    assert!(matches!(
        result,
        Err(Error::UpstreamError(UpstreamError::Api { .. }))
    ));

    endpoint.assert();
    login.assert();

    Ok(())
}

/// The paged flight-data walk follows `pagecount`, concatenating records from
/// each page in order.
///
/// Expected: Ok with one request per reported page
#[tokio::test]
async fn paged_flight_data_walks_every_page() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;

    let rows = factory::default_flight_rows();
    let endpoint = test.jetnet().create_flight_data_endpoint(
        TEST_API_TOKEN,
        factory::flight_data_page(rows.clone(), 2),
        2,
    );

    let session = test.session().await?;
    let records = test
        .client
        .get_recent_flights(&session, TEST_AIRCRAFT_ID)
        .await?;

    assert_eq!(records.len(), rows.len() * 2);

    endpoint.assert();

    Ok(())
}
