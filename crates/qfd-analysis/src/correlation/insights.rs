//! Per-pair correlation insights.
//!
//! Each correlation record becomes one insight: a fixed impact description
//! keyed by the correlation value, plus a recommendation whose wording and
//! urgency flip when the pair's combined *raw* score crosses a per-kind
//! threshold. The thresholds intentionally consume raw scores while the
//! band classifiers consume normalized priorities; both scales are part of
//! the output contract.

use serde::{Deserialize, Serialize};
use tracing::debug;

use qfd_core::types::{Correlation, FxHashMap, TechReqId};
use qfd_core::ProjectSnapshot;

use crate::scoring::TechnicalPriority;

/// One analyzed correlated pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationInsight {
    pub first_description: String,
    pub second_description: String,
    pub correlation: Correlation,
    pub first_score: u32,
    pub second_score: u32,
    /// Fixed description of what the correlation means for the pair.
    pub impact: String,
    /// Sequencing advice; urgency depends on the pair's combined raw score.
    pub recommendation: String,
}

/// Combined raw score above which a strong-positive pair is urgent.
const STRONG_POSITIVE_URGENT_ABOVE: u32 = 50;
/// Combined raw score above which a positive pair is worth bundling.
const POSITIVE_URGENT_ABOVE: u32 = 40;
/// Combined raw score above which a negative pair needs a trade-off study.
const NEGATIVE_URGENT_ABOVE: u32 = 60;
/// Combined raw score above which a strong-negative pair is a blocking conflict.
const STRONG_NEGATIVE_URGENT_ABOVE: u32 = 50;

/// Build one insight per non-zero correlation record.
///
/// Scores are looked up from the already-computed priorities; a record whose
/// ids are missing from the priority list is skipped (validation upstream
/// makes that unreachable for well-formed snapshots).
pub fn generate_insights(
    snapshot: &ProjectSnapshot,
    priorities: &[TechnicalPriority],
) -> Vec<CorrelationInsight> {
    let by_id: FxHashMap<&TechReqId, &TechnicalPriority> =
        priorities.iter().map(|p| (&p.id, p)).collect();

    let mut insights = Vec::with_capacity(snapshot.correlations.len());
    for record in &snapshot.correlations {
        let correlation = record.correlation();
        if correlation == Correlation::None {
            continue;
        }
        let (Some(first), Some(second)) =
            (by_id.get(record.first()), by_id.get(record.second()))
        else {
            debug!(
                first = %record.first(),
                second = %record.second(),
                "skipping correlation with unknown requirement"
            );
            continue;
        };

        let combined = first.score + second.score;
        insights.push(CorrelationInsight {
            first_description: first.description.clone(),
            second_description: second.description.clone(),
            correlation,
            first_score: first.score,
            second_score: second.score,
            impact: impact_description(correlation).to_string(),
            recommendation: pair_recommendation(correlation, combined),
        });
    }
    insights
}

/// Fixed natural-language description per non-zero correlation value.
pub fn impact_description(correlation: Correlation) -> &'static str {
    match correlation {
        Correlation::StrongPositive => {
            "Improving one of these requirements strongly reinforces the other."
        }
        Correlation::Positive => {
            "These requirements support each other; improvements carry over."
        }
        Correlation::Negative => {
            "Improving one of these requirements tends to degrade the other."
        }
        Correlation::StrongNegative => {
            "These requirements are in direct conflict; gains on one come at the cost of the other."
        }
        Correlation::None => "These requirements do not affect each other.",
    }
}

/// Recommendation for one correlated pair, keyed by correlation kind and the
/// pair's combined raw score.
fn pair_recommendation(correlation: Correlation, combined_score: u32) -> String {
    let text = match correlation {
        Correlation::StrongPositive => {
            if combined_score > STRONG_POSITIVE_URGENT_ABOVE {
                "HIGH PRIORITY: implement both requirements together to capture maximum impact."
            } else {
                "Bundle these requirements when scheduling allows; the synergy is free."
            }
        }
        Correlation::Positive => {
            if combined_score > POSITIVE_URGENT_ABOVE {
                "Schedule these requirements in the same iteration to exploit the positive coupling."
            } else {
                "Minor synergy; coordinate implementation if convenient."
            }
        }
        Correlation::Negative => {
            if combined_score > NEGATIVE_URGENT_ABOVE {
                "CAUTION: both requirements carry weight but work against each other; plan an explicit trade-off study."
            } else {
                "Monitor the trade-off between these requirements during implementation."
            }
        }
        Correlation::StrongNegative => {
            if combined_score > STRONG_NEGATIVE_URGENT_ABOVE {
                "CRITICAL CONFLICT: high-priority requirements in direct opposition; agree on a design compromise before implementation."
            } else {
                "Strong conflict at low priority; document the trade-off and revisit if either requirement gains weight."
            }
        }
        Correlation::None => "No interaction; sequence independently.",
    };
    text.to_string()
}
