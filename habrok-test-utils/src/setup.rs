use habrok::jetnet::{
    InMemorySessionStore, JetnetClient, SessionKey, SessionManager, SessionStore, SharedSession,
};
use habrok::service::ProfileService;
use mockito::{Mock, ServerGuard};

use crate::error::TestError;

/// A fully wired habrok stack pointed at a mockito server, with one seeded
/// session ready to use. Construct through [`crate::TestBuilder`] (or
/// [`TestSetup::new`] for the defaults).
pub struct TestSetup {
    pub server: ServerGuard,
    pub manager: SessionManager,
    pub client: JetnetClient,
    pub store: InMemorySessionStore,
    pub service: ProfileService<InMemorySessionStore>,
    pub session_key: SessionKey,
    pub mocks: Vec<Mock>,
}

impl TestSetup {
    pub async fn new() -> Result<Self, TestError> {
        crate::TestBuilder::new().build().await
    }

    /// The seeded session behind [`Self::session_key`].
    pub async fn session(&self) -> Result<SharedSession, TestError> {
        Ok(self.store.get(&self.session_key).await?)
    }

    /// Assert all mock endpoints were called the expected number of times.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
