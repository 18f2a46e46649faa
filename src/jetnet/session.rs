//! JETNET session lifecycle: credential exchange, token TTL, re-authentication.
//!
//! A [`Session`] holds exactly one live token pair. All mutation happens behind a
//! tokio `RwLock` write guard so a reader can never observe a bearer token from one
//! login alongside an API token from another. Sessions are handed to callers as
//! opaque [`SessionKey`]s through a [`SessionStore`], keeping the session registry
//! an injected dependency rather than hidden global state.

use std::{collections::HashMap, sync::Arc};

use chrono::{DateTime, Duration, Utc};
use rand::{distr::Alphanumeric, Rng};
use serde_json::json;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::{
    error::{auth::AuthError, upstream::UpstreamError},
    jetnet::{client::classify_envelope, schema::LoginResponse},
    Error,
};

/// JETNET declares issued tokens valid for an hour; refreshing at 50 minutes keeps
/// a margin so an in-flight request never straddles the expiry.
pub const SESSION_TTL_MINUTES: i64 = 50;

pub const LOGIN_PATH: &str = "/api/Admin/APILogin";
pub const ACCOUNT_INFO_PATH: &str = "/api/Admin/getAccountInfo";

#[derive(Clone, Debug)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Result<Self, AuthError> {
        let email = email.into();
        let password = password.into();
        if email.is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }
        Ok(Self { email, password })
    }
}

/// One authenticated JETNET session: a bearer token for the `Authorization` header
/// and an API token substituted into request paths.
#[derive(Clone, Debug)]
pub struct Session {
    pub bearer_token: String,
    pub api_token: String,
    pub created_at: DateTime<Utc>,
    pub last_validated: DateTime<Utc>,
}

impl Session {
    pub fn age_exceeds_ttl(&self, now: DateTime<Utc>) -> bool {
        now - self.created_at >= Duration::minutes(SESSION_TTL_MINUTES)
    }

    /// Snapshot the token pair. Callers take both tokens from a single read guard
    /// so the pair always originates from the same login.
    pub fn token_pair(&self) -> (String, String) {
        (self.bearer_token.clone(), self.api_token.clone())
    }
}

/// A session shared across the concurrent calls of one profile build (and across
/// overlapping builds using the same caller session).
pub type SharedSession = Arc<RwLock<Session>>;

/// Opaque app-issued handle to a stored session.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SessionKey(String);

impl SessionKey {
    pub fn generate() -> Self {
        let key: String = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(32)
            .map(char::from)
            .collect();
        Self(key)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Owns the upstream credential exchange and token replacement.
#[derive(Clone)]
pub struct SessionManager {
    http: reqwest::Client,
    base_url: String,
    credentials: Credentials,
}

impl SessionManager {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>, credentials: Credentials) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            credentials,
        }
    }

    /// Exchange credentials for a fresh token pair.
    ///
    /// # Errors
    /// - [`AuthError::LoginRejected`] when JETNET declines the credentials — fatal,
    ///   never retried
    /// - [`AuthError::IncompleteTokenPair`] when the login succeeds but a token is
    ///   missing from the response
    /// - [`UpstreamError::Http`] / [`UpstreamError::Transport`] on transport failure
    pub async fn login(&self) -> Result<Session, Error> {
        let url = format!("{}{}", self.base_url, LOGIN_PATH);
        let response = self
            .http
            .post(&url)
            .json(&json!({
                "emailaddress": self.credentials.email,
                "password": self.credentials.password,
            }))
            .send()
            .await
            .map_err(UpstreamError::from)?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Http {
                status: status.as_u16(),
                endpoint: LOGIN_PATH.to_string(),
            }
            .into());
        }

        let body: LoginResponse = response.json().await.map_err(UpstreamError::from)?;

        if let Some(raw_status) = &body.response_status {
            let upper = raw_status.trim().to_uppercase();
            if upper.starts_with("ERROR") || upper.starts_with("INVALID") {
                return Err(AuthError::LoginRejected {
                    status: raw_status.clone(),
                }
                .into());
            }
        }

        let bearer_token = body
            .bearer_token
            .filter(|t| !t.is_empty())
            .ok_or(AuthError::IncompleteTokenPair("bearer"))?;
        let api_token = body
            .api_token
            .filter(|t| !t.is_empty())
            .ok_or(AuthError::IncompleteTokenPair("API"))?;

        let now = Utc::now();
        debug!("JETNET login succeeded");

        Ok(Session {
            bearer_token,
            api_token,
            created_at: now,
            last_validated: now,
        })
    }

    /// Revalidate a session that may have aged past its TTL.
    ///
    /// A session younger than the TTL is returned untouched. Otherwise the
    /// lightweight account-info probe runs under the write lock; if it confirms the
    /// token pair the session is stamped, and if it reports any upstream-declared
    /// error or transport failure a full re-login replaces the pair atomically. The
    /// age is re-checked after acquiring the write lock so a refresh completed by a
    /// concurrent task is not repeated.
    pub async fn ensure_valid(&self, session: &SharedSession) -> Result<(), Error> {
        let now = Utc::now();
        if !session.read().await.age_exceeds_ttl(now) {
            return Ok(());
        }

        let mut guard = session.write().await;
        let now = Utc::now();
        if !guard.age_exceeds_ttl(now) {
            return Ok(());
        }

        match self.probe(&guard.bearer_token, &guard.api_token).await {
            Ok(()) => {
                guard.last_validated = now;
                // Probe success proves the tokens still work; push the TTL out
                // rather than re-logging-in on every call past the 50-minute mark.
                guard.created_at = now;
                Ok(())
            }
            Err(error) => {
                warn!(?error, "JETNET session validation failed, re-logging in");
                *guard = self.login().await?;
                Ok(())
            }
        }
    }

    /// Forced re-login used by the client's invalid-token path.
    ///
    /// `observed_api_token` is the token the failing request was sent with. If the
    /// stored session no longer carries it, another task already replaced the pair
    /// and this refresh is skipped — at most one of N concurrently-failing calls
    /// performs the re-login.
    pub async fn refresh(
        &self,
        session: &SharedSession,
        observed_api_token: &str,
    ) -> Result<(), Error> {
        let mut guard = session.write().await;
        if guard.api_token != observed_api_token {
            debug!("session already refreshed by a concurrent task, skipping re-login");
            return Ok(());
        }

        *guard = self.login().await?;
        Ok(())
    }

    /// Lightweight validation call against the account-info endpoint.
    async fn probe(&self, bearer_token: &str, api_token: &str) -> Result<(), Error> {
        let url = format!("{}{}/{}", self.base_url, ACCOUNT_INFO_PATH, api_token);
        let response = self
            .http
            .get(&url)
            .bearer_auth(bearer_token)
            .send()
            .await
            .map_err(UpstreamError::from)?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Http {
                status: status.as_u16(),
                endpoint: ACCOUNT_INFO_PATH.to_string(),
            }
            .into());
        }

        let body: serde_json::Value = response.json().await.map_err(UpstreamError::from)?;
        classify_envelope(&body)?;

        Ok(())
    }
}

/// Registry of live sessions keyed by app-issued token.
///
/// Injected into the profile service so production can swap in an externally
/// backed store and unit tests a fake.
#[trait_variant::make(SessionStore: Send)]
pub trait LocalSessionStore {
    /// Look up a stored session.
    async fn get(&self, key: &SessionKey) -> Result<SharedSession, Error>;

    /// Store a session and mint the key callers will present for it.
    async fn put(&self, session: Session) -> Result<SessionKey, Error>;

    /// Drop a stored session.
    async fn delete(&self, key: &SessionKey) -> Result<(), Error>;

    /// Re-login the stored session in place (see [`SessionManager::refresh`]).
    async fn refresh(&self, key: &SessionKey, observed_api_token: &str) -> Result<(), Error>;
}

/// Production single-process [`SessionStore`].
#[derive(Clone)]
pub struct InMemorySessionStore {
    manager: SessionManager,
    sessions: Arc<RwLock<HashMap<SessionKey, SharedSession>>>,
}

impl InMemorySessionStore {
    pub fn new(manager: SessionManager) -> Self {
        Self {
            manager,
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Log in against JETNET and register the resulting session.
    pub async fn login(&self) -> Result<SessionKey, Error> {
        let session = self.manager.login().await?;
        SessionStore::put(self, session).await
    }
}

impl SessionStore for InMemorySessionStore {
    async fn get(&self, key: &SessionKey) -> Result<SharedSession, Error> {
        let sessions = self.sessions.read().await;
        sessions
            .get(key)
            .cloned()
            .ok_or_else(|| AuthError::SessionNotFound.into())
    }

    async fn put(&self, session: Session) -> Result<SessionKey, Error> {
        let key = SessionKey::generate();
        let mut sessions = self.sessions.write().await;
        sessions.insert(key.clone(), Arc::new(RwLock::new(session)));
        Ok(key)
    }

    async fn delete(&self, key: &SessionKey) -> Result<(), Error> {
        let mut sessions = self.sessions.write().await;
        sessions.remove(key);
        Ok(())
    }

    async fn refresh(&self, key: &SessionKey, observed_api_token: &str) -> Result<(), Error> {
        let session = SessionStore::get(self, key).await?;
        self.manager.refresh(&session, observed_api_token).await
    }
}
