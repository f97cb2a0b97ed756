//! Priority scoring and weight normalization.
//!
//! Dependency chain: Scorer → Normalizer → (Classifier ∥ Correlation Analyzer).

pub mod normalizer;
pub mod scorer;

pub use normalizer::{normalize_weights, normalized_priorities};
pub use scorer::{PriorityScorer, TechnicalPriority};
