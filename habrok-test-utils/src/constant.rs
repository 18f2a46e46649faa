//! Standard constant values shared across all habrok tests. These are placeholder
//! values, not real credentials.

/// Login email presented to the mock JETNET server.
pub static TEST_EMAIL: &str = "test@example.com";

/// Login password presented to the mock JETNET server. Not a real credential.
pub static TEST_PASSWORD: &str = "test-password";

/// Bearer token the mock login endpoint issues.
pub static TEST_BEARER_TOKEN: &str = "test-bearer-token";

/// API token the mock login endpoint issues; substituted into request paths.
pub static TEST_API_TOKEN: &str = "test-api-token";

/// Replacement API token issued by re-login during invalid-token retry tests.
pub static TEST_API_TOKEN_RENEWED: &str = "test-api-token-renewed";

/// Registration used by default fixtures.
pub static TEST_REGISTRATION: &str = "N123HB";

/// Aircraft id the default registration resolves to.
pub const TEST_AIRCRAFT_ID: i64 = 123;

/// Model id carried by the default aircraft fixture.
pub const TEST_MODEL_ID: i64 = 42;
