//! Declarative test builder.
//!
//! Configures the wired test stack before execution: trend-cache TTL and the age
//! of the seeded session. All construction happens in the final `build()` call.

use std::time::Duration;

use habrok::jetnet::{Credentials, InMemorySessionStore, JetnetClient, SessionManager, SessionStore};
use habrok::service::{ProfileService, TrendCache};
use mockito::Server;

use crate::{
    constant::{TEST_EMAIL, TEST_PASSWORD},
    error::TestError,
    fixtures::jetnet::factory,
    setup::TestSetup,
};

pub struct TestBuilder {
    trend_cache_ttl: Duration,
    session_age_minutes: i64,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            trend_cache_ttl: Duration::from_secs(21_600),
            session_age_minutes: 0,
        }
    }

    /// Override the trend-cache TTL, e.g. to drive expiry in cache tests.
    pub fn with_trend_cache_ttl(mut self, ttl: Duration) -> Self {
        self.trend_cache_ttl = ttl;
        self
    }

    /// Seed the session as created this many minutes ago. Ages of 50 minutes or
    /// more make the session stale, driving the revalidation path.
    pub fn with_session_age_minutes(mut self, minutes: i64) -> Self {
        self.session_age_minutes = minutes;
        self
    }

    pub async fn build(self) -> Result<TestSetup, TestError> {
        let server = Server::new_async().await;
        let base_url = server.url();

        let http = reqwest::Client::new();
        let credentials = Credentials::new(TEST_EMAIL, TEST_PASSWORD).map_err(habrok::Error::from)?;
        let manager = SessionManager::new(http.clone(), base_url.clone(), credentials);
        let store = InMemorySessionStore::new(manager.clone());
        let client = JetnetClient::new(http, base_url, manager.clone());

        let service = ProfileService::new(
            client.clone(),
            store.clone(),
            TrendCache::new(self.trend_cache_ttl),
        );

        let session = factory::mock_session_aged(self.session_age_minutes);
        let session_key = store.put(session).await?;

        Ok(TestSetup {
            server,
            manager,
            client,
            store,
            service,
            session_key,
            mocks: Vec::new(),
        })
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
