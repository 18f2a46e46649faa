//! JETNET upstream adapter layer.
//!
//! [`session`] owns credential exchange and token lifetime, [`client`] wraps every
//! request with envelope normalization and the bounded re-login retry, [`schema`]
//! declares the typed DTO per endpoint, and [`api`] maps endpoint responses into
//! the crate's data model.

pub mod api;
pub mod client;
pub mod schema;
pub mod session;

pub use client::JetnetClient;
pub use session::{
    Credentials, InMemorySessionStore, Session, SessionKey, SessionManager, SessionStore,
    SharedSession,
};
