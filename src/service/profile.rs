//! Profile aggregator.
//!
//! Resolves a registration to an aircraft identity (the one lookup that can fail
//! the build), then fans out the five enrichment calls concurrently. Each call's
//! outcome is captured independently: a failed source degrades only its own field
//! to the empty or `None` form and the merged profile still computes its derived
//! scores on the documented baselines.

use std::time::Duration;

use tracing::warn;

use crate::{
    config::Config,
    error::upstream::UpstreamError,
    jetnet::{
        client::JetnetClient,
        session::{
            Credentials, InMemorySessionStore, SessionKey, SessionManager, SessionStore,
            SharedSession,
        },
    },
    model::{
        flight::{FlightIntelligence, FlightRecord},
        market::ModelTrendSignals,
        profile::{AircraftProfile, UtilizationSummary},
    },
    service::{disposition, flights, scoring, trends::TrendCache},
    Error,
};

pub struct ProfileService<S: SessionStore> {
    client: JetnetClient,
    sessions: S,
    trends: TrendCache,
}

impl ProfileService<InMemorySessionStore> {
    /// Wire the production service: shared HTTP client with the configured
    /// total-request timeout, in-memory session registry, and trend cache.
    pub fn from_config(config: &Config) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()
            .map_err(UpstreamError::from)?;

        let credentials = Credentials::new(
            config.jetnet_email.clone(),
            config.jetnet_password.clone(),
        )?;
        let manager = SessionManager::new(http.clone(), config.jetnet_base_url.clone(), credentials);
        let sessions = InMemorySessionStore::new(manager.clone());
        let client = JetnetClient::new(http, config.jetnet_base_url.clone(), manager);
        let trends = TrendCache::new(Duration::from_secs(config.trend_cache_ttl_secs));

        Ok(Self::new(client, sessions, trends))
    }

    /// Log in against JETNET and register the session, returning the opaque key
    /// callers present on subsequent requests.
    pub async fn login(&self) -> Result<SessionKey, Error> {
        self.sessions.login().await
    }
}

impl<S: SessionStore> ProfileService<S> {
    pub fn new(client: JetnetClient, sessions: S, trends: TrendCache) -> Self {
        Self {
            client,
            sessions,
            trends,
        }
    }

    pub fn sessions(&self) -> &S {
        &self.sessions
    }

    /// Build the merged aircraft profile for a registration.
    ///
    /// Hard failures: an unknown session key, an impossible authentication, or a
    /// registration that resolves to no aircraft. Everything else degrades.
    pub async fn build_profile(
        &self,
        key: &SessionKey,
        registration: &str,
    ) -> Result<AircraftProfile, Error> {
        let session = self.sessions.get(key).await?;
        self.client.manager().ensure_valid(&session).await?;

        let mut profile = self
            .client
            .get_aircraft_by_registration(&session, registration)
            .await?;
        let aircraft_id = profile.aircraft_id;

        let (pictures, relationships, flight_records, history, model_trends) = tokio::join!(
            self.client.get_pictures(&session, aircraft_id),
            self.client.get_relationships(&session, aircraft_id),
            self.client.get_recent_flights(&session, aircraft_id),
            self.client.get_history(&session, aircraft_id),
            self.fetch_model_trends(&session, profile.model_id),
        );

        profile.pictures = degrade("pictures", pictures).unwrap_or_default();
        profile.relationships = degrade("relationships", relationships).unwrap_or_default();
        profile.history = degrade("history", history).unwrap_or_default();
        profile.model_trends = degrade("model trends", model_trends).flatten();
        profile.utilization =
            degrade("flight data", flight_records).map(|records| derive_utilization(&records));

        profile.hot_not = Some(scoring::score(&profile));
        profile.owner_intel = disposition::assess(&profile);

        Ok(profile)
    }

    /// On-demand flight analytics over the default trailing window. Unlike the
    /// enrichment calls inside a profile build, a failed fetch here is surfaced:
    /// the flight data is the point of the call.
    pub async fn flight_intelligence(
        &self,
        key: &SessionKey,
        aircraft_id: i64,
    ) -> Result<FlightIntelligence, Error> {
        let session = self.sessions.get(key).await?;
        self.client.manager().ensure_valid(&session).await?;

        let records = self.client.get_recent_flights(&session, aircraft_id).await?;
        Ok(flights::analyze(&records))
    }

    async fn fetch_model_trends(
        &self,
        session: &SharedSession,
        model_id: Option<i64>,
    ) -> Result<Option<ModelTrendSignals>, Error> {
        match model_id {
            Some(model_id) => {
                let signals = self
                    .trends
                    .get_or_fetch(&self.client, session, model_id)
                    .await?;
                Ok(Some(signals))
            }
            None => Ok(None),
        }
    }
}

/// Collapse an enrichment outcome: failures log and degrade to `None` instead of
/// aborting the build.
fn degrade<T>(source: &'static str, result: Result<T, Error>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(error) => {
            warn!(source, ?error, "enrichment source failed, degrading to empty");
            None
        }
    }
}

/// Utilization summary over the trailing 12-month fetch. An empty-but-successful
/// fetch still yields a summary: zero recorded flying is data, not absence.
fn derive_utilization(records: &[FlightRecord]) -> UtilizationSummary {
    let window_months = crate::jetnet::api::FLIGHT_WINDOW_MONTHS;
    let total_flights = records.len() as u32;

    let hours: Vec<f64> = records.iter().filter_map(|r| r.hours).collect();
    let total_hours = (!hours.is_empty()).then(|| hours.iter().sum());

    let last_flight_date = records.iter().map(|r| r.date).max();
    let intelligence = flights::analyze(records);

    UtilizationSummary {
        window_months,
        total_flights,
        total_hours,
        avg_monthly_flights: f64::from(total_flights) / f64::from(window_months),
        last_flight_date,
        trend: intelligence.trend,
    }
}
