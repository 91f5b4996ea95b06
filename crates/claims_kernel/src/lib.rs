//! Claims Kernel - Foundational types for the claims adjudication system
//!
//! This crate provides the building blocks shared by the adjudication domain:
//! - Money types with precise decimal arithmetic
//! - Strongly-typed identifiers
//! - Port infrastructure for the extraction and persistence collaborators

pub mod error;
pub mod identifiers;
pub mod money;
pub mod ports;

pub use error::KernelError;
pub use identifiers::{ClaimId, DocumentId, PolicyId};
pub use money::{Currency, Money, MoneyError};
pub use ports::{DomainPort, PortError};
