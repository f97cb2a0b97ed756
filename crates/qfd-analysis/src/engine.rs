//! The analysis facade.
//!
//! Sequences the pure stages once over a validated snapshot: score →
//! normalize → (classify ∥ correlate ∥ assess competitors) → assemble. Every
//! stage stays public; the facade adds no logic of its own.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use qfd_core::types::TechReqId;
use qfd_core::ProjectSnapshot;

use crate::classify::{classify_challenge, classify_importance, ChallengeBand, ImportanceBand};
use crate::competitive::{competitive_gaps, competitor_profiles, CompetitiveGap, CompetitorProfile};
use crate::correlation::{
    generate_insights, summarize, target_recommendation, CorrelationIndex,
    CorrelationImpactSummary, CorrelationInsight,
};
use crate::scoring::{normalize_weights, normalized_priorities, PriorityScorer, TechnicalPriority};

/// Full per-requirement verdict: priority, classification, correlation
/// profile, and sequencing advice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetImpactAnalysis {
    pub id: TechReqId,
    pub description: String,
    pub score: u32,
    /// Percentage share of the total raw score.
    pub relative_weight: f64,
    /// Percentage of the maximum raw score (0-100).
    pub normalized_priority: f64,
    pub difficulty: u8,
    pub challenge: ChallengeBand,
    pub importance: ImportanceBand,
    pub correlation: CorrelationImpactSummary,
    pub recommendation: String,
}

/// The priorities/insights bundle for roof-of-matrix views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationAnalysis {
    pub priorities: Vec<TechnicalPriority>,
    pub insights: Vec<CorrelationInsight>,
}

/// Everything the engine derives from one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QfdAnalysis {
    pub priorities: Vec<TechnicalPriority>,
    pub targets: Vec<TargetImpactAnalysis>,
    pub insights: Vec<CorrelationInsight>,
    pub competitor_profiles: Vec<CompetitorProfile>,
    pub competitive_gaps: Vec<CompetitiveGap>,
}

/// Run the whole pipeline over a validated snapshot.
pub fn analyze(snapshot: &ProjectSnapshot) -> QfdAnalysis {
    let priorities = normalize_weights(&PriorityScorer::score(snapshot));
    let normalized = normalized_priorities(&priorities);
    let index = CorrelationIndex::build(&snapshot.correlations);

    let targets: Vec<TargetImpactAnalysis> = snapshot
        .technical_requirements
        .iter()
        .zip(priorities.iter().zip(&normalized))
        .map(|(req, (priority, &normalized_priority))| {
            let correlation = summarize(&req.id, &index);
            let recommendation =
                target_recommendation(normalized_priority, req.difficulty, &correlation);
            TargetImpactAnalysis {
                id: req.id.clone(),
                description: req.description.clone(),
                score: priority.score,
                relative_weight: priority.relative_weight,
                normalized_priority,
                difficulty: req.difficulty,
                challenge: classify_challenge(normalized_priority, req.difficulty),
                importance: classify_importance(normalized_priority, req.difficulty),
                correlation,
                recommendation,
            }
        })
        .collect();

    let insights = generate_insights(snapshot, &priorities);
    debug!(
        targets = targets.len(),
        insights = insights.len(),
        "assembled target impact analyses"
    );

    let analysis = QfdAnalysis {
        priorities,
        targets,
        insights,
        competitor_profiles: competitor_profiles(snapshot),
        competitive_gaps: competitive_gaps(snapshot),
    };
    info!(
        technicals = analysis.priorities.len(),
        correlations = snapshot.correlations.len(),
        competitors = analysis.competitor_profiles.len(),
        "analysis complete"
    );
    analysis
}

/// Just the priorities/insights bundle, for callers that only render the
/// correlation roof.
pub fn analyze_correlations(snapshot: &ProjectSnapshot) -> CorrelationAnalysis {
    let priorities = normalize_weights(&PriorityScorer::score(snapshot));
    let insights = generate_insights(snapshot, &priorities);
    CorrelationAnalysis {
        priorities,
        insights,
    }
}
