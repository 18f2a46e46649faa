//! Derived-analytics services: the profile aggregator and the deterministic
//! engines it feeds.

pub mod contacts;
pub mod disposition;
pub mod flights;
pub mod profile;
pub mod scoring;
pub mod trends;

pub use contacts::{Persona, PersonaWeights};
pub use profile::ProfileService;
pub use trends::TrendCache;
