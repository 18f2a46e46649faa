//! Aircraft intelligence derivation pipeline.
//!
//! This crate maintains an authenticated session against the JETNET aviation data API,
//! aggregates per-aircraft data from multiple endpoints concurrently, and derives
//! deterministic analytics from the merged profile: a marketability score, an owner
//! disposition prediction, flight activity patterns, and persona-weighted contact
//! rankings. Profiles are rebuilt from upstream on every request; the only retained
//! state is the in-memory session registry and a TTL-bounded model trend cache.

pub mod config;
pub mod error;
pub mod jetnet;
pub mod model;
pub mod service;
#[cfg(test)]
mod test_fixtures;

pub use config::Config;
pub use error::Error;
