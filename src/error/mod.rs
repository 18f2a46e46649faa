//! Error types for the habrok pipeline.
//!
//! This module provides specialized error types for the different failure domains
//! (authentication, configuration, upstream JETNET interaction) aggregated into a
//! single unified `Error`. All types use `thiserror` for ergonomic definitions, and
//! `#[from]` conversions allow domain errors to flow through the `?` operator.

pub mod auth;
pub mod config;
pub mod retry;
pub mod upstream;

use thiserror::Error;

use crate::error::{auth::AuthError, config::ConfigError, upstream::UpstreamError};

/// Main error type for the habrok pipeline.
///
/// Aggregates all domain-specific error types into a single unified error. Partial
/// aggregation failure is deliberately not represented here: when an enrichment
/// source fails during profile assembly the affected field degrades to its empty or
/// `None` form instead of surfacing an error.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (missing/rejected credentials, unknown session key).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Upstream JETNET error (token rejection, API failure status, transport).
    #[error(transparent)]
    UpstreamError(#[from] UpstreamError),
    /// The registration lookup matched no aircraft.
    ///
    /// This is the only hard failure a profile build can produce besides
    /// authentication; every enrichment source degrades instead of erroring.
    #[error("No aircraft found for registration {0:?}")]
    AircraftNotFound(String),
    /// Internal error indicating a bug in habrok's code.
    #[error("Internal error with habrok's code, please open a GitHub issue as this indicates a bug: {0:?}")]
    InternalError(String),
}
