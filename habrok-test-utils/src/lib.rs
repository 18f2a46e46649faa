//! Shared test infrastructure for habrok.
//!
//! Provides the mockito-backed [`TestSetup`], the declarative [`TestBuilder`],
//! data factories, and mock JETNET endpoint fixtures used by both in-crate unit
//! tests and the root integration suite.

pub mod builder;
pub mod constant;
pub mod error;
pub mod fixtures;
pub mod setup;

pub use builder::TestBuilder;
pub use error::TestError;
pub use setup::TestSetup;

pub mod prelude {
    pub use crate::{constant::*, fixtures::jetnet::factory, TestBuilder, TestError, TestSetup};
}
