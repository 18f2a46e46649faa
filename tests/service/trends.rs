//! Tests for the model trend cache as exercised through profile builds.
//!
//! The cache sits between the aggregator and the model-trends endpoint; call
//! counts on the mock endpoint are the observable behavior.

use std::time::Duration;

use habrok_test_utils::prelude::*;

fn create_enrichment_endpoints(test: &mut TestSetup, builds: usize) {
    let mocks = vec![
        test.jetnet().create_reg_number_endpoint(
            TEST_API_TOKEN,
            TEST_REGISTRATION,
            factory::reg_number_body(),
            builds,
        ),
        test.jetnet().create_pictures_endpoint(
            TEST_API_TOKEN,
            TEST_AIRCRAFT_ID,
            factory::pictures_body(),
            builds,
        ),
        test.jetnet().create_relationships_endpoint(
            TEST_API_TOKEN,
            TEST_AIRCRAFT_ID,
            factory::relationships_body(),
            builds,
        ),
        test.jetnet().create_flight_data_endpoint(
            TEST_API_TOKEN,
            factory::flight_data_body(factory::default_flight_rows()),
            builds,
        ),
        test.jetnet()
            .create_history_endpoint(TEST_API_TOKEN, factory::history_body(), builds),
    ];
    test.mocks.extend(mocks);
}

/// Two builds of the same model inside the TTL hit upstream once; the second
/// serves trends from cache.
///
/// Expected: one model-trends request across two builds
#[tokio::test]
async fn model_trends_are_cached_within_ttl() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;

    create_enrichment_endpoints(&mut test, 2);
    let trends = test.jetnet().create_model_trends_endpoint(
        TEST_API_TOKEN,
        TEST_MODEL_ID,
        factory::model_trends_body(TEST_MODEL_ID),
        1,
    );

    let first = test
        .service
        .build_profile(&test.session_key, TEST_REGISTRATION)
        .await?;
    let second = test
        .service
        .build_profile(&test.session_key, TEST_REGISTRATION)
        .await?;

    assert_eq!(first.model_trends, second.model_trends);
    assert!(second.model_trends.is_some());

    trends.assert();
    test.assert_mocks();

    Ok(())
}

/// With the TTL elapsed, the next build refetches and replaces the entry.
///
/// Expected: one model-trends request per build
#[tokio::test]
async fn expired_trend_entries_are_refetched() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_trend_cache_ttl(Duration::ZERO)
        .build()
        .await?;

    create_enrichment_endpoints(&mut test, 2);
    let trends = test.jetnet().create_model_trends_endpoint(
        TEST_API_TOKEN,
        TEST_MODEL_ID,
        factory::model_trends_body(TEST_MODEL_ID),
        2,
    );

    test.service
        .build_profile(&test.session_key, TEST_REGISTRATION)
        .await?;
    test.service
        .build_profile(&test.session_key, TEST_REGISTRATION)
        .await?;

    trends.assert();
    test.assert_mocks();

    Ok(())
}
