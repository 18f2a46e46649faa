use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::{
    disposition::OwnerIntelligence,
    flight::TrendDirection,
    market::{HistoryEntry, MarketSignals, ModelTrendSignals},
    relationship::RelationshipEdge,
    scoring::HotNotScore,
};

/// The merged per-aircraft view combining identity, relationships, enrichment, and
/// derived scores.
///
/// Only `registration` and `aircraft_id` are guaranteed present; every other field
/// degrades to its empty or `None` form when the upstream source that provides it
/// fails or omits data. Profiles are rebuilt from upstream on every request and are
/// never persisted.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AircraftProfile {
    pub registration: String,
    pub aircraft_id: i64,
    pub model_id: Option<i64>,
    pub make: Option<String>,
    pub model: Option<String>,
    pub series: Option<String>,
    pub year_manufactured: Option<i32>,
    pub serial_number: Option<String>,
    pub weight_class: Option<String>,
    pub category: Option<String>,
    pub base_location: Option<Location>,
    pub relationships: Vec<RelationshipEdge>,
    pub pictures: Vec<Picture>,
    pub utilization: Option<UtilizationSummary>,
    pub market: MarketSignals,
    pub model_trends: Option<ModelTrendSignals>,
    pub history: Vec<HistoryEntry>,
    pub hot_not: Option<HotNotScore>,
    pub owner_intel: Option<OwnerIntelligence>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub airport_code: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Picture {
    pub url: String,
    pub caption: Option<String>,
    pub taken_at: Option<NaiveDate>,
}

/// Utilization over the trailing flight-data window, derived by the aggregator from
/// the same fetch that feeds the flight analytics engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UtilizationSummary {
    pub window_months: u32,
    pub total_flights: u32,
    pub total_hours: Option<f64>,
    pub avg_monthly_flights: f64,
    pub last_flight_date: Option<NaiveDate>,
    pub trend: TrendDirection,
}
