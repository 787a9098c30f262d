//! Utility modules
//!
//! Error handling, logging setup and key generation shared by the fixtures.

pub mod errors;
pub mod logging;
pub mod helpers;

pub use errors::{FixtureError, Result};
