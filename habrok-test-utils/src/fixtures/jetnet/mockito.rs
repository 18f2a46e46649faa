//! JETNET HTTP mock endpoint creation utilities.
//!
//! Methods here register mock endpoints on the test's mockito server, shaped the
//! way JETNET shapes them: the API token embedded in the request path, bodies in
//! upstream field spellings. Each mock verifies it was called the expected number
//! of times.

use habrok::jetnet::api::{
    FLIGHT_DATA_PATH, HISTORY_PATH, MODEL_TRENDS_PATH, PICTURES_PATH, REG_NUMBER_PATH,
    RELATIONSHIPS_PATH,
};
use habrok::jetnet::session::{ACCOUNT_INFO_PATH, LOGIN_PATH};
use mockito::Mock;
use serde_json::Value;

use crate::fixtures::jetnet::{factory, JetnetFixtures};

impl<'a> JetnetFixtures<'a> {
    /// Create a mock login endpoint returning the given envelope.
    ///
    /// # Arguments
    /// - `body` - Response envelope, e.g. [`factory::login_body`]
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_login_endpoint(&mut self, body: Value, expected_requests: usize) -> Mock {
        self.create_json_endpoint("POST", LOGIN_PATH.to_string(), body, expected_requests)
    }

    /// Create a mock account-info probe endpoint for the given API token.
    pub fn create_account_info_endpoint(
        &mut self,
        api_token: &str,
        body: Value,
        expected_requests: usize,
    ) -> Mock {
        let path = format!("{ACCOUNT_INFO_PATH}/{api_token}");
        self.create_json_endpoint("GET", path, body, expected_requests)
    }

    /// Create a mock registration lookup endpoint.
    ///
    /// # Arguments
    /// - `api_token` - Token expected in the request path
    /// - `registration` - Tail number segment of the path
    /// - `body` - Response envelope, e.g. [`factory::reg_number_body`]
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_reg_number_endpoint(
        &mut self,
        api_token: &str,
        registration: &str,
        body: Value,
        expected_requests: usize,
    ) -> Mock {
        let path = format!("{REG_NUMBER_PATH}/{api_token}/{registration}");
        self.create_json_endpoint("GET", path, body, expected_requests)
    }

    /// Create a mock pictures endpoint for the given aircraft.
    pub fn create_pictures_endpoint(
        &mut self,
        api_token: &str,
        aircraft_id: i64,
        body: Value,
        expected_requests: usize,
    ) -> Mock {
        let path = format!("{PICTURES_PATH}/{api_token}/{aircraft_id}");
        self.create_json_endpoint("GET", path, body, expected_requests)
    }

    /// Create a mock company-relationships endpoint for the given aircraft.
    pub fn create_relationships_endpoint(
        &mut self,
        api_token: &str,
        aircraft_id: i64,
        body: Value,
        expected_requests: usize,
    ) -> Mock {
        let path = format!("{RELATIONSHIPS_PATH}/{api_token}/{aircraft_id}");
        self.create_json_endpoint("GET", path, body, expected_requests)
    }

    /// Create a mock flight-data endpoint. The endpoint is a POST whose window and
    /// page number travel in the request body, so the path carries only the token.
    pub fn create_flight_data_endpoint(
        &mut self,
        api_token: &str,
        body: Value,
        expected_requests: usize,
    ) -> Mock {
        let path = format!("{FLIGHT_DATA_PATH}/{api_token}");
        self.create_json_endpoint("POST", path, body, expected_requests)
    }

    /// Create a mock transaction-history endpoint.
    pub fn create_history_endpoint(
        &mut self,
        api_token: &str,
        body: Value,
        expected_requests: usize,
    ) -> Mock {
        let path = format!("{HISTORY_PATH}/{api_token}");
        self.create_json_endpoint("POST", path, body, expected_requests)
    }

    /// Create a mock model-market-trends endpoint.
    pub fn create_model_trends_endpoint(
        &mut self,
        api_token: &str,
        model_id: i64,
        body: Value,
        expected_requests: usize,
    ) -> Mock {
        let path = format!("{MODEL_TRENDS_PATH}/{api_token}/{model_id}");
        self.create_json_endpoint("GET", path, body, expected_requests)
    }

    /// Register the full set of endpoints a profile build touches, each expected
    /// exactly once, with the standard factory bodies.
    pub fn create_profile_endpoints(&mut self, api_token: &str) -> Vec<Mock> {
        use crate::constant::{TEST_AIRCRAFT_ID, TEST_MODEL_ID, TEST_REGISTRATION};

        vec![
            self.create_reg_number_endpoint(
                api_token,
                TEST_REGISTRATION,
                factory::reg_number_body(),
                1,
            ),
            self.create_pictures_endpoint(api_token, TEST_AIRCRAFT_ID, factory::pictures_body(), 1),
            self.create_relationships_endpoint(
                api_token,
                TEST_AIRCRAFT_ID,
                factory::relationships_body(),
                1,
            ),
            self.create_flight_data_endpoint(
                api_token,
                factory::flight_data_body(factory::default_flight_rows()),
                1,
            ),
            self.create_history_endpoint(api_token, factory::history_body(), 1),
            self.create_model_trends_endpoint(
                api_token,
                TEST_MODEL_ID,
                factory::model_trends_body(TEST_MODEL_ID),
                1,
            ),
        ]
    }

    /// Create a mock endpoint answering with a bare HTTP status and empty body,
    /// for transport-level failure paths.
    pub fn create_http_error_endpoint(
        &mut self,
        method: &str,
        path: String,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock(method, path.as_str())
            .with_status(status)
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint answering 200 with the given JSON body.
    pub fn create_json_endpoint(
        &mut self,
        method: &str,
        path: String,
        body: Value,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock(method, path.as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }
}
