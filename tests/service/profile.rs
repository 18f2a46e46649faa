//! Tests for ProfileService profile assembly.
//!
//! Covers the happy-path five-way fan-out, per-source degradation with derived
//! scores still computed, the hard failure cases, and on-demand flight
//! analytics.

use habrok::error::{auth::AuthError, upstream::UpstreamError};
use habrok::jetnet::api::PICTURES_PATH;
use habrok::jetnet::SessionKey;
use habrok::Error;
use habrok_test_utils::prelude::*;

/// All five enrichment sources succeed; the merged profile carries every field
/// plus both derived scores.
///
/// Expected: Ok with fully-populated profile
#[tokio::test]
async fn builds_a_fully_enriched_profile() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;

    let mocks = test.jetnet().create_profile_endpoints(TEST_API_TOKEN);
    test.mocks.extend(mocks);

    let profile = test
        .service
        .build_profile(&test.session_key, TEST_REGISTRATION)
        .await?;

    assert_eq!(profile.registration, TEST_REGISTRATION);
    assert_eq!(profile.aircraft_id, TEST_AIRCRAFT_ID);
    assert_eq!(profile.make.as_deref(), Some("Gulfstream"));
    assert_eq!(profile.pictures.len(), 1);
    assert_eq!(profile.relationships.len(), 4);
    assert_eq!(profile.history.len(), 1);
    assert!(profile.model_trends.is_some());

    let utilization = profile.utilization.expect("flight data succeeded");
    assert_eq!(utilization.total_flights, 8);

    assert!(profile.hot_not.is_some());
    assert!(profile.owner_intel.is_some());

    test.assert_mocks();

    Ok(())
}

/// Failed enrichment sources degrade only their own field; the profile still
/// builds and still scores on the documented baselines.
///
/// Expected: Ok with empty pictures, no utilization, and a computed score
#[tokio::test]
async fn degraded_sources_still_produce_a_scored_profile() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;

    let reg = test.jetnet().create_reg_number_endpoint(
        TEST_API_TOKEN,
        TEST_REGISTRATION,
        factory::reg_number_body(),
        1,
    );
    let pictures_path = format!("{PICTURES_PATH}/{TEST_API_TOKEN}/{TEST_AIRCRAFT_ID}");
    let pictures = test
        .jetnet()
        .create_http_error_endpoint("GET", pictures_path, 500, 1);
    let flights = test.jetnet().create_flight_data_endpoint(
        TEST_API_TOKEN,
        factory::error_body("ERROR: no records found"),
        1,
    );
    let relationships = test.jetnet().create_relationships_endpoint(
        TEST_API_TOKEN,
        TEST_AIRCRAFT_ID,
        factory::relationships_body(),
        1,
    );
    let history = test
        .jetnet()
        .create_history_endpoint(TEST_API_TOKEN, factory::history_body(), 1);
    let trends = test.jetnet().create_model_trends_endpoint(
        TEST_API_TOKEN,
        TEST_MODEL_ID,
        factory::model_trends_body(TEST_MODEL_ID),
        1,
    );

    let profile = test
        .service
        .build_profile(&test.session_key, TEST_REGISTRATION)
        .await?;

    assert!(profile.pictures.is_empty());
    assert!(profile.utilization.is_none());
    assert_eq!(profile.relationships.len(), 4);
    assert!(profile.model_trends.is_some());

    let score = profile.hot_not.expect("degraded profile still scores");
    let completeness = score
        .factors
        .iter()
        .find(|f| f.name == "Data completeness")
        .expect("completeness factor present");
    assert_eq!(completeness.value, 0.6);

    reg.assert();
    pictures.assert();
    flights.assert();
    relationships.assert();
    history.assert();
    trends.assert();

    Ok(())
}

/// A registration resolving to no aircraft is the one non-auth hard failure.
///
/// Expected: Err(AircraftNotFound) before any enrichment call
#[tokio::test]
async fn unknown_registration_fails_the_build() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;

    let reg = test.jetnet().create_reg_number_endpoint(
        TEST_API_TOKEN,
        "N404XX",
        factory::reg_number_not_found_body(),
        1,
    );

    let result = test.service.build_profile(&test.session_key, "N404XX").await;

    assert!(matches!(result, Err(Error::AircraftNotFound(_))));
    reg.assert();

    Ok(())
}

/// An unrecognized session key is rejected before any upstream traffic.
///
/// Expected: Err(AuthError::SessionNotFound)
#[tokio::test]
async fn unknown_session_key_is_rejected() -> Result<(), TestError> {
    let test = TestSetup::new().await?;

    let result = test
        .service
        .build_profile(&SessionKey::generate(), TEST_REGISTRATION)
        .await;

    assert!(matches!(
        result,
        Err(Error::AuthError(AuthError::SessionNotFound))
    ));

    Ok(())
}

/// On-demand flight analytics over the default window.
///
/// Expected: Ok with the home base identified from visit counts
#[tokio::test]
async fn flight_intelligence_analyzes_the_recent_window() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;

    let flights = test.jetnet().create_flight_data_endpoint(
        TEST_API_TOKEN,
        factory::flight_data_body(factory::default_flight_rows()),
        1,
    );

    let intelligence = test
        .service
        .flight_intelligence(&test.session_key, TEST_AIRCRAFT_ID)
        .await?;

    assert_eq!(intelligence.total_flights, 8);
    assert_eq!(intelligence.primary_base.as_deref(), Some("KTEB"));

    flights.assert();

    Ok(())
}

/// Unlike the profile fan-out, a failed fetch here is the caller's problem.
///
/// Expected: Err(UpstreamError::Api) surfaced, not degraded
#[tokio::test]
async fn flight_intelligence_surfaces_fetch_failures() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;

    let flights = test.jetnet().create_flight_data_endpoint(
        TEST_API_TOKEN,
        factory::error_body("ERROR: service unavailable"),
        1,
    );

    let result = test
        .service
        .flight_intelligence(&test.session_key, TEST_AIRCRAFT_ID)
        .await;

    assert!(matches!(
        result,
        Err(Error::UpstreamError(UpstreamError::Api { .. }))
    ));

    flights.assert();

    Ok(())
}
