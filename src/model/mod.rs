//! Data model for the habrok pipeline.
//!
//! Plain serde-serializable types shared between the JETNET adapter layer, the
//! aggregator, and the derived-analytics engines. Every enrichment field on
//! [`profile::AircraftProfile`] is independently nullable: absence of one upstream
//! source never prevents construction of the profile or computation of scores.

pub mod contact;
pub mod disposition;
pub mod flight;
pub mod market;
pub mod profile;
pub mod relationship;
pub mod scoring;

pub use contact::{BrokerContact, ContactTier};
pub use disposition::{
    DispositionFactor, FleetTrend, OwnerArchetype, OwnerIntelligence, OwnershipPhase,
};
pub use flight::{
    AirportVisits, CharterLikelihood, DowntimePeriod, FlightIntelligence, FlightRecord,
    MonthlyFlightCount, RouteFrequency, TrendDirection,
};
pub use market::{HistoryEntry, HistoryKind, MarketSignals, ModelTrendSignals};
pub use profile::{AircraftProfile, Location, Picture, UtilizationSummary};
pub use relationship::{CompanyNode, ContactNode, RelationshipEdge, RelationshipGraph};
pub use scoring::{HotNotScore, MarketabilityLabel, ScoringFactor};
