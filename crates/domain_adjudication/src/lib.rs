//! Claims Adjudication Domain
//!
//! This crate implements the adjudication pipeline for extracted claim
//! documents: the wire contract with the extraction service, the policy
//! configuration, the deterministic decision engine, and the record handed
//! to persistence.
//!
//! # Pipeline
//!
//! ```text
//! document bytes -> DocumentExtractor -> ExtractedClaimData
//!                -> adjudicate(data, policy) -> Decision
//!                -> ClaimRecord -> ClaimRepository
//! ```
//!
//! The engine in the middle is a pure function; everything around it is
//! plumbing behind port traits.

pub mod decision;
pub mod engine;
pub mod error;
pub mod extraction;
pub mod policy;
pub mod record;
pub mod service;

pub use decision::{AdjudicationReason, Decision, DecisionStatus};
pub use engine::{adjudicate, CONFIDENCE_FLOOR};
pub use error::{PolicyError, SubmissionError};
pub use extraction::{ClaimFacts, ExtractedClaimData, LineItem, ServiceDate};
pub use policy::{PolicyConfiguration, PolicyLimits, PolicyStore};
pub use record::ClaimRecord;
pub use service::{ClaimRepository, ClaimSubmissionService, DocumentExtractor};
