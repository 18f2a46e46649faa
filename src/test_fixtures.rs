//! Typed model factories for this crate's unit tests.
//!
//! These mirror `habrok_test_utils::fixtures::jetnet::factory` verbatim. Unit
//! tests compiled into the library cannot use the helper crate's typed
//! factories: the helper links the library as an external dependency, so its
//! model types are a distinct crate from the `cfg(test)` build under test.
//! Integration tests (`tests/`) keep using the helper crate directly.

use chrono::NaiveDate;

use crate::model::{
    AircraftProfile, CompanyNode, ContactNode, HistoryEntry, HistoryKind, Location,
    MarketSignals, ModelTrendSignals, Picture, RelationshipEdge, TrendDirection,
    UtilizationSummary,
};

/// Registration used by default fixtures.
pub static TEST_REGISTRATION: &str = "N123HB";

/// Aircraft id the default registration resolves to.
pub const TEST_AIRCRAFT_ID: i64 = 123;

/// Model id carried by the default aircraft fixture.
pub const TEST_MODEL_ID: i64 = 42;

/// A fully-populated profile: every enrichment source present, listed for sale,
/// one prior sale in 2021, and a healthy resale market for its model.
pub fn mock_profile() -> AircraftProfile {
    AircraftProfile {
        registration: TEST_REGISTRATION.to_string(),
        aircraft_id: TEST_AIRCRAFT_ID,
        model_id: Some(TEST_MODEL_ID),
        make: Some("Gulfstream".to_string()),
        model: Some("G450".to_string()),
        series: None,
        year_manufactured: Some(2015),
        serial_number: Some("4201".to_string()),
        weight_class: Some("Large".to_string()),
        category: Some("Business Jet".to_string()),
        base_location: Some(Location {
            city: Some("Teterboro".to_string()),
            state: Some("NJ".to_string()),
            country: Some("US".to_string()),
            airport_code: Some("KTEB".to_string()),
        }),
        relationships: mock_relationship_edges(TEST_AIRCRAFT_ID),
        pictures: vec![Picture {
            url: "https://img.example.com/N123HB-1.jpg".to_string(),
            caption: Some("Exterior".to_string()),
            taken_at: NaiveDate::from_ymd_opt(2023, 9, 1),
        }],
        utilization: Some(UtilizationSummary {
            window_months: 12,
            total_flights: 96,
            total_hours: Some(150.0),
            avg_monthly_flights: 8.0,
            last_flight_date: NaiveDate::from_ymd_opt(2024, 5, 20),
            trend: TrendDirection::Stable,
        }),
        market: MarketSignals {
            for_sale: true,
            asking_price: Some(4_750_000.0),
            days_on_market: Some(45),
            listed_date: NaiveDate::from_ymd_opt(2024, 4, 16),
        },
        model_trends: Some(mock_trend_signals(TEST_MODEL_ID)),
        history: vec![HistoryEntry {
            date: NaiveDate::from_ymd_opt(2021, 6, 1),
            kind: HistoryKind::Sale,
            buyer: Some("Skyline Holdings LLC".to_string()),
            seller: Some("Legacy Air LLC".to_string()),
            price: Some(4_100_000.0),
        }],
        hot_not: None,
        owner_intel: None,
    }
}

/// Identity only: registration and aircraft id with every enrichment source
/// absent, simulating total upstream degradation.
pub fn mock_bare_profile() -> AircraftProfile {
    AircraftProfile {
        registration: TEST_REGISTRATION.to_string(),
        aircraft_id: TEST_AIRCRAFT_ID,
        model_id: None,
        make: None,
        model: None,
        series: None,
        year_manufactured: None,
        serial_number: None,
        weight_class: None,
        category: None,
        base_location: None,
        relationships: Vec::new(),
        pictures: Vec::new(),
        utilization: None,
        market: MarketSignals::default(),
        model_trends: None,
        history: Vec::new(),
        hot_not: None,
        owner_intel: None,
    }
}

/// Relationship edges covering the standard cast: a sole owner contact with
/// email and mobile phone, a chief pilot, a director of maintenance, and a
/// previous-owner edge for a different company.
pub fn mock_relationship_edges(aircraft_id: i64) -> Vec<RelationshipEdge> {
    let skyline = CompanyNode {
        company_id: Some(1),
        name: Some("Skyline Holdings LLC".to_string()),
        city: Some("Teterboro".to_string()),
        state: Some("NJ".to_string()),
        country: Some("US".to_string()),
    };
    let legacy = CompanyNode {
        company_id: Some(2),
        name: Some("Legacy Air LLC".to_string()),
        city: Some("Wilmington".to_string()),
        state: Some("DE".to_string()),
        country: Some("US".to_string()),
    };

    vec![
        RelationshipEdge {
            aircraft_id,
            company: skyline.clone(),
            contact: Some(ContactNode {
                contact_id: Some(5),
                first_name: Some("Jo".to_string()),
                last_name: Some("Vance".to_string()),
                title: Some("President".to_string()),
                email: Some("jo.vance@skyline.example.com".to_string()),
                phone_mobile: Some("555-0105".to_string()),
                phone_office: Some("555-0100".to_string()),
            }),
            relationship_type: "Owner".to_string(),
        },
        RelationshipEdge {
            aircraft_id,
            company: skyline.clone(),
            contact: Some(ContactNode {
                contact_id: Some(6),
                first_name: Some("Lee".to_string()),
                last_name: Some("Park".to_string()),
                title: Some("Chief Pilot".to_string()),
                email: Some("lee.park@skyline.example.com".to_string()),
                phone_mobile: None,
                phone_office: Some("555-0101".to_string()),
            }),
            relationship_type: "Flight Department Contact".to_string(),
        },
        RelationshipEdge {
            aircraft_id,
            company: skyline,
            contact: Some(ContactNode {
                contact_id: Some(7),
                first_name: Some("Pat".to_string()),
                last_name: Some("Quinn".to_string()),
                title: Some("Director of Maintenance".to_string()),
                email: Some("pat.quinn@skyline.example.com".to_string()),
                phone_mobile: None,
                phone_office: None,
            }),
            relationship_type: "Maintenance Contact".to_string(),
        },
        RelationshipEdge {
            aircraft_id,
            company: legacy,
            contact: Some(ContactNode {
                contact_id: Some(8),
                first_name: Some("Kim".to_string()),
                last_name: Some("Hale".to_string()),
                title: None,
                email: None,
                phone_mobile: None,
                phone_office: None,
            }),
            relationship_type: "Previous Owner".to_string(),
        },
    ]
}

/// Trend signals for a liquid model: 10 active listings against 24 sales a year
/// gives five months of supply.
pub fn mock_trend_signals(model_id: i64) -> ModelTrendSignals {
    ModelTrendSignals {
        model_id,
        fleet_size: Some(500),
        active_listings: Some(10),
        sold_last_12_months: Some(24),
        avg_days_on_market: Some(80),
        asking_price_trend_pct: Some(1.5),
    }
}
