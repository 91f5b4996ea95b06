//! Test Utilities Crate
//!
//! Shared test infrastructure for the claims adjudication test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built policies and claim payloads
//! - `builders`: Builder patterns for test data construction
//! - `generators`: Property-based test data generators
//! - `assertions`: Custom assertion helpers for decisions
//! - `mocks`: In-memory port implementations for service tests

pub mod assertions;
pub mod builders;
pub mod fixtures;
pub mod generators;
pub mod mocks;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
pub use generators::*;
pub use mocks::*;
