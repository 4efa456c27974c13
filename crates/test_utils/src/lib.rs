//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! fund chat test suite.
//!
//! # Modules
//!
//! - `fixtures`: A hand-computed portfolio and the seeded sample store
//! - `builders`: Builder patterns for holdings and price series
//! - `assertions`: Custom assertion helpers for decimal figures
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
