//! Core types, errors, snapshot validation, and logging setup for the QFD
//! analysis engine.
//!
//! Everything in this crate is input-side: the immutable entity records a
//! House of Quality is built from, the validation that rejects malformed
//! records at the boundary, and the ambient plumbing (typed errors, tracing
//! initialization). Derived results live in `qfd-analysis`.

pub mod constants;
pub mod errors;
pub mod logging;
pub mod snapshot;
pub mod types;

pub use errors::{SnapshotError, ValidationError};
pub use snapshot::ProjectSnapshot;
pub use types::{
    Correlation, CustomerReqId, CustomerRequirement, Relationship, RelationshipStrength,
    TechReqId, TechnicalCorrelation, TechnicalRequirement,
};
