//! TTL-bounded cache of per-model market trend signals.
//!
//! Plain check-then-set: a hit inside the TTL serves the cached entry, a miss or
//! expired entry triggers an upstream fetch and a wholesale replacement. Two tasks
//! missing the same key concurrently may both fetch; the last write wins, which is
//! benign because entries are replaced whole and never partially updated.

use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::debug;

use crate::{
    jetnet::{client::JetnetClient, session::SharedSession},
    model::market::ModelTrendSignals,
    Error,
};

struct CacheEntry {
    signals: ModelTrendSignals,
    expires_at: Instant,
}

pub struct TrendCache {
    ttl: Duration,
    entries: RwLock<HashMap<i64, CacheEntry>>,
}

impl TrendCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Serve the model's trend signals from cache, fetching on a miss or an
    /// expired entry.
    pub async fn get_or_fetch(
        &self,
        client: &JetnetClient,
        session: &SharedSession,
        model_id: i64,
    ) -> Result<ModelTrendSignals, Error> {
        let now = Instant::now();
        {
            let entries = self.entries.read().await;
            if let Some(entry) = entries.get(&model_id) {
                if entry.expires_at > now {
                    debug!(model_id, "model trend cache hit");
                    return Ok(entry.signals.clone());
                }
            }
        }

        debug!(model_id, "model trend cache miss, fetching");
        let signals = client.get_model_trends(session, model_id).await?;

        let mut entries = self.entries.write().await;
        entries.insert(
            model_id,
            CacheEntry {
                signals: signals.clone(),
                expires_at: now + self.ttl,
            },
        );

        Ok(signals)
    }
}
