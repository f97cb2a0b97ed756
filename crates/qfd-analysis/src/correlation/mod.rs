//! Correlation analysis — the roof of the House of Quality.
//!
//! Aggregates the signed interactions between technical requirements into
//! per-requirement impact summaries, per-pair insights, and sequencing
//! recommendations.
//!
//! Dependency chain: Index → (Summary ∥ Insights) → Recommendations.

pub mod index;
pub mod insights;
pub mod recommend;
pub mod summary;

pub use index::CorrelationIndex;
pub use insights::{generate_insights, CorrelationInsight};
pub use recommend::target_recommendation;
pub use summary::{summarize, CorrelationImpact, CorrelationImpactSummary};
