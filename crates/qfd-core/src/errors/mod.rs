//! Error types for the QFD engine boundary.
//!
//! The scoring engine itself is total over validated input and raises no
//! errors; everything here belongs to the validation/loading boundary that
//! callers cross before invoking it.

mod snapshot_error;
mod validation_error;

pub use snapshot_error::SnapshotError;
pub use validation_error::ValidationError;
