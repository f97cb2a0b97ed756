//! Raw priority scores from the relationship matrix.
//!
//! score(t) = Σ over customer requirements c of importance(c) × strength(c,t).
//! A missing relationship record contributes 0; it is never a fault.

use serde::{Deserialize, Serialize};
use tracing::debug;

use qfd_core::types::{FxHashMap, TechReqId};
use qfd_core::ProjectSnapshot;

/// Derived priority of one technical requirement.
///
/// `relative_weight` is 0 until [`normalize_weights`] has run; the scorer
/// only fills in raw scores.
///
/// [`normalize_weights`]: super::normalizer::normalize_weights
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicalPriority {
    pub id: TechReqId,
    pub description: String,
    /// Raw importance-weighted score, non-negative.
    pub score: u32,
    /// Percentage share of the total raw score (0 until normalized).
    pub relative_weight: f64,
}

/// Computes raw priority scores for every technical requirement.
pub struct PriorityScorer;

impl PriorityScorer {
    /// Produce one `TechnicalPriority` per technical requirement, preserving
    /// the snapshot's declared order.
    pub fn score(snapshot: &ProjectSnapshot) -> Vec<TechnicalPriority> {
        let importance: FxHashMap<&str, u32> = snapshot
            .customer_requirements
            .iter()
            .map(|c| (c.id.as_str(), u32::from(c.importance)))
            .collect();

        let mut totals: FxHashMap<&str, u32> = FxHashMap::default();
        for r in &snapshot.relationships {
            // Unknown customer ids are a validation failure upstream; here a
            // missing entry just contributes nothing.
            if let Some(&imp) = importance.get(r.customer.as_str()) {
                *totals.entry(r.technical.as_str()).or_insert(0) += imp * r.strength.weight();
            }
        }

        let priorities: Vec<TechnicalPriority> = snapshot
            .technical_requirements
            .iter()
            .map(|t| TechnicalPriority {
                id: t.id.clone(),
                description: t.description.clone(),
                score: totals.get(t.id.as_str()).copied().unwrap_or(0),
                relative_weight: 0.0,
            })
            .collect();

        debug!(
            technicals = priorities.len(),
            relationships = snapshot.relationships.len(),
            "computed raw priority scores"
        );
        priorities
    }
}
