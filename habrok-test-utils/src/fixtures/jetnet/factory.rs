//! Data factories for JETNET test fixtures.
//!
//! Two layers live here: typed model factories (`mock_profile`, `mock_session`,
//! ...) for exercising the analytics engines directly, and JSON body builders
//! (`login_body`, `reg_number_body`, ...) emitting the upstream field spellings
//! the schema layer accepts, for use with the mockito endpoints.

use chrono::{Duration, NaiveDate, Utc};
use habrok::jetnet::Session;
use habrok::model::{
    AircraftProfile, CompanyNode, ContactNode, HistoryEntry, HistoryKind, Location,
    MarketSignals, ModelTrendSignals, Picture, RelationshipEdge, TrendDirection,
    UtilizationSummary,
};
use serde_json::{json, Value};

use crate::constant::{
    TEST_AIRCRAFT_ID, TEST_API_TOKEN, TEST_BEARER_TOKEN, TEST_MODEL_ID, TEST_REGISTRATION,
};

/// A session created just now, well within its TTL.
pub fn mock_session() -> Session {
    mock_session_aged(0)
}

/// A session created `minutes` ago. Ages of 50 or more are stale and drive the
/// revalidation path.
pub fn mock_session_aged(minutes: i64) -> Session {
    let created_at = Utc::now() - Duration::minutes(minutes);
    Session {
        bearer_token: TEST_BEARER_TOKEN.to_string(),
        api_token: TEST_API_TOKEN.to_string(),
        created_at,
        last_validated: created_at,
    }
}

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

// JSON response bodies, spelled the way JETNET spells them.

/// Successful login envelope issuing the given token pair.
pub fn login_body(bearer_token: &str, api_token: &str) -> Value {
    json!({
        "responsestatus": "SUCCESS: Authorized",
        "bearerToken": bearer_token,
        "apiToken": api_token,
    })
}

/// Login envelope for declined credentials.
pub fn failed_login_body() -> Value {
    json!({ "responsestatus": "ERROR: Invalid email address and password combination" })
}

/// Account-info probe success envelope.
pub fn account_info_body() -> Value {
    json!({
        "responsestatus": "SUCCESS",
        "emailaddress": crate::constant::TEST_EMAIL,
    })
}

/// Upstream-declared error envelope with an arbitrary status string.
pub fn error_body(status: &str) -> Value {
    json!({ "responsestatus": status })
}

/// The envelope JETNET returns when the API token in the path has been
/// invalidated, classified as an invalid-token failure.
pub fn invalid_token_body() -> Value {
    error_body("ERROR: Invalid or expired apiToken")
}

/// RFC 7807 problem document, the alternate error shape some deployments emit.
pub fn problem_body(status: u16, title: &str) -> Value {
    json!({ "title": title, "status": status })
}

/// Registration lookup body matching [`mock_profile`]'s identity and market
/// fields.
pub fn reg_number_body() -> Value {
    json!({
        "responsestatus": "SUCCESS",
        "aircraftid": TEST_AIRCRAFT_ID,
        "modelid": TEST_MODEL_ID,
        "make": "Gulfstream",
        "model": "G450",
        "yearmfr": 2015,
        "sernbr": "4201",
        "weightclass": "Large",
        "category": "Business Jet",
        "basecity": "Teterboro",
        "basestate": "NJ",
        "basecountry": "US",
        "baseairport": "KTEB",
        "forsale": "Y",
        "askingprice": 4_750_000.0,
        "daysonmarket": 45,
        "listdate": "04/16/2024",
    })
}

/// Registration lookup body for an unknown tail number.
pub fn reg_number_not_found_body() -> Value {
    json!({
        "responsestatus": "SUCCESS",
        "aircraftid": 0,
    })
}

/// Pictures body with one exterior shot, matching [`mock_profile`].
pub fn pictures_body() -> Value {
    json!({
        "responsestatus": "SUCCESS",
        "aircraftpictures": [
            {
                "pictureurl": "https://img.example.com/N123HB-1.jpg",
                "picturedescription": "Exterior",
                "datetaken": "09/01/2023",
            }
        ],
    })
}

/// Relationship rows matching [`mock_relationship_edges`].
pub fn relationships_body() -> Value {
    json!({
        "responsestatus": "SUCCESS",
        "companyrelationships": [
            {
                "companyid": 1,
                "companyname": "Skyline Holdings LLC",
                "companycity": "Teterboro",
                "companystate": "NJ",
                "companycountry": "US",
                "contactid": 5,
                "contactfirstname": "Jo",
                "contactlastname": "Vance",
                "contacttitle": "President",
                "contactemail": "jo.vance@skyline.example.com",
                "contactmobilephone": "555-0105",
                "contactofficephone": "555-0100",
                "relationtype": "Owner",
            },
            {
                "companyid": 1,
                "companyname": "Skyline Holdings LLC",
                "contactid": 6,
                "contactfirstname": "Lee",
                "contactlastname": "Park",
                "contacttitle": "Chief Pilot",
                "contactemail": "lee.park@skyline.example.com",
                "contactofficephone": "555-0101",
                "relationtype": "Flight Department Contact",
            },
            {
                "companyid": 1,
                "companyname": "Skyline Holdings LLC",
                "contactid": 7,
                "contactfirstname": "Pat",
                "contactlastname": "Quinn",
                "contacttitle": "Director of Maintenance",
                "contactemail": "pat.quinn@skyline.example.com",
                "relationtype": "Maintenance Contact",
            },
            {
                "companyid": 2,
                "companyname": "Legacy Air LLC",
                "companycity": "Wilmington",
                "companystate": "DE",
                "companycountry": "US",
                "contactid": 8,
                "contactfirstname": "Kim",
                "contactlastname": "Hale",
                "relationtype": "Previous Owner",
            },
        ],
    })
}

/// One flight-data row in upstream spelling. Dates use `MM/DD/YYYY`.
pub fn flight_row(date: &str, origin: &str, destination: &str, hours: f64) -> Value {
    json!({
        "flightdate": date,
        "departairport": origin,
        "arriveairport": destination,
        "flighthours": hours,
    })
}

/// Single-page flight-data body.
pub fn flight_data_body(rows: Vec<Value>) -> Value {
    flight_data_page(rows, 1)
}

/// One page of a multi-page flight-data response.
pub fn flight_data_page(rows: Vec<Value>, page_count: u32) -> Value {
    json!({
        "responsestatus": "SUCCESS",
        "pagecount": page_count,
        "flightdata": rows,
    })
}

/// A steady month of flying: eight legs between the fixture's home base and two
/// destinations, spread over May 2024.
pub fn default_flight_rows() -> Vec<Value> {
    vec![
        flight_row("05/02/2024", "KTEB", "KPBI", 2.6),
        flight_row("05/04/2024", "KPBI", "KTEB", 2.5),
        flight_row("05/09/2024", "KTEB", "KBCT", 2.7),
        flight_row("05/11/2024", "KBCT", "KTEB", 2.6),
        flight_row("05/16/2024", "KTEB", "KPBI", 2.6),
        flight_row("05/18/2024", "KPBI", "KTEB", 2.5),
        flight_row("05/23/2024", "KTEB", "KPBI", 2.6),
        flight_row("05/25/2024", "KPBI", "KTEB", 2.5),
    ]
}

/// History body with the single 2021 sale [`mock_profile`] carries.
pub fn history_body() -> Value {
    json!({
        "responsestatus": "SUCCESS",
        "pagecount": 1,
        "historylist": [
            {
                "transdate": "06/01/2021",
                "transtype": "Full Sale",
                "purchaser": "Skyline Holdings LLC",
                "sellername": "Legacy Air LLC",
                "soldprice": 4_100_000.0,
            }
        ],
    })
}

/// Model trends body matching [`mock_trend_signals`].
pub fn model_trends_body(model_id: i64) -> Value {
    json!({
        "responsestatus": "SUCCESS",
        "modelid": model_id,
        "fleetsize": 500,
        "forsalecount": 10,
        "soldlast12months": 24,
        "avgdaysonmarket": 80,
        "askingpricetrendpct": 1.5,
    })
}
