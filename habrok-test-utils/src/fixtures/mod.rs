//! Test fixture modules for data factories and HTTP mock creation.
//!
//! - `jetnet` — model factories, JSON response bodies, and mockito endpoints
//!   simulating the JETNET API.

pub mod jetnet;
