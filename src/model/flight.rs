use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A normalized flight leg from the JETNET flight-data endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlightRecord {
    pub date: NaiveDate,
    pub origin: String,
    pub destination: String,
    pub hours: Option<f64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendDirection {
    Increasing,
    Stable,
    Declining,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CharterLikelihood {
    Low,
    Medium,
    High,
}

/// Visit count for a single airport, counting both departure and arrival legs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AirportVisits {
    pub airport: String,
    pub visits: u32,
}

/// Frequency of an unordered airport pair, rendered `AAA-BBB` alphabetically.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteFrequency {
    pub route: String,
    pub count: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MonthlyFlightCount {
    pub year: i32,
    pub month: u32,
    pub flights: u32,
}

/// A gap of at least 30 days between consecutive flights.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DowntimePeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub days: i64,
}

/// Deterministic analytics over an ordered flight list. Holds no identity of its
/// own and is recomputed on every call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlightIntelligence {
    pub total_flights: u32,
    pub airport_visits: Vec<AirportVisits>,
    pub primary_base: Option<String>,
    pub top_routes: Vec<RouteFrequency>,
    pub route_repetition_score: u32,
    pub monthly_counts: Vec<MonthlyFlightCount>,
    pub trend: TrendDirection,
    pub seasonality: Option<String>,
    pub downtime_periods: Vec<DowntimePeriod>,
    pub charter_likelihood: CharterLikelihood,
    pub pre_sale_signals: Vec<String>,
}

impl FlightIntelligence {
    /// The documented result for an empty flight list.
    pub fn empty() -> Self {
        Self {
            total_flights: 0,
            airport_visits: Vec::new(),
            primary_base: None,
            top_routes: Vec::new(),
            route_repetition_score: 0,
            monthly_counts: Vec::new(),
            trend: TrendDirection::Stable,
            seasonality: None,
            downtime_periods: Vec::new(),
            charter_likelihood: CharterLikelihood::Low,
            pre_sale_signals: Vec::new(),
        }
    }
}
