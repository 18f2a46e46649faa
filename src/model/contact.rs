use serde::{Deserialize, Serialize};

/// Outreach prioritization bucket for a ranked contact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContactTier {
    Primary,
    AviationOps,
    FinanceAdmin,
    Secondary,
    Historical,
}

/// The ranked, deduplicated, persona-scored projection of the relationship graph
/// exposed to downstream consumers. Request-scoped; recomputed per call and never
/// persisted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BrokerContact {
    pub contact_id: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub title: Option<String>,
    pub company_name: Option<String>,
    pub company_id: Option<i64>,
    pub emails: Vec<String>,
    pub phone_mobile: Option<String>,
    pub phone_office: Option<String>,
    pub score: u32,
    pub tier: ContactTier,
    pub match_reasons: Vec<String>,
    pub preferred_channels: Vec<String>,
}
