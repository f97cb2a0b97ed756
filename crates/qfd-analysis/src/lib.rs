//! QFD analysis engine.
//!
//! Turns a validated [`ProjectSnapshot`] into prioritized, classified,
//! correlation-aware results: raw and normalized priorities, challenge and
//! strategic-importance bands, per-pair correlation insights, competitive
//! profiles, and sequencing recommendations.
//!
//! Every function here is a pure, stateless mapping from input snapshot to
//! output values, safe to re-run on every data change. Inputs are assumed
//! validated (`ProjectSnapshot::validate`); the engine itself raises no
//! errors.
//!
//! [`ProjectSnapshot`]: qfd_core::ProjectSnapshot

pub mod classify;
pub mod competitive;
pub mod correlation;
pub mod engine;
pub mod presentation;
pub mod scoring;

pub use classify::{classify_challenge, classify_importance, ChallengeBand, ImportanceBand};
pub use competitive::{
    competitive_gaps, competitor_profiles, CompetitiveGap, CompetitorProfile, CompetitorStanding,
};
pub use correlation::{
    generate_insights, summarize, target_recommendation, CorrelationImpact,
    CorrelationImpactSummary, CorrelationIndex, CorrelationInsight,
};
pub use engine::{analyze, analyze_correlations, CorrelationAnalysis, QfdAnalysis, TargetImpactAnalysis};
pub use scoring::{normalize_weights, normalized_priorities, PriorityScorer, TechnicalPriority};
