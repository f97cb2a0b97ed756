//! Competitive assessment over the customer-side ratings.
//!
//! Each customer requirement carries one rating per competitor, aligned with
//! the snapshot's competitor-name list. Profiles weight those ratings by
//! customer importance; gaps report the best and worst competitor per
//! requirement.

use serde::{Deserialize, Serialize};

use qfd_core::types::CustomerReqId;
use qfd_core::ProjectSnapshot;

/// Importance-weighted standing of one competitor across the project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitorProfile {
    pub name: String,
    /// Σ importance×rating / Σ importance over the requirements this
    /// competitor is rated on; 0 when it is rated on none.
    pub weighted_rating: f64,
    /// How many customer requirements carry a rating for this competitor.
    pub rated_requirements: usize,
}

/// One competitor's rating on one customer requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetitorStanding {
    pub competitor: String,
    pub rating: u8,
}

/// Best and worst competitor on one customer requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetitiveGap {
    pub customer: CustomerReqId,
    pub description: String,
    pub importance: u8,
    pub best: CompetitorStanding,
    pub worst: CompetitorStanding,
}

/// Compute one profile per declared competitor, in declared order.
///
/// A requirement whose rating row is shorter than the competitor list simply
/// contributes no rating for the trailing competitors.
pub fn competitor_profiles(snapshot: &ProjectSnapshot) -> Vec<CompetitorProfile> {
    snapshot
        .competitor_names
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let mut weighted_sum = 0u32;
            let mut importance_sum = 0u32;
            let mut rated_requirements = 0usize;
            for c in &snapshot.customer_requirements {
                if let Some(&rating) = c.competitor_ratings.get(index) {
                    weighted_sum += u32::from(c.importance) * u32::from(rating);
                    importance_sum += u32::from(c.importance);
                    rated_requirements += 1;
                }
            }
            let weighted_rating = if importance_sum == 0 {
                0.0
            } else {
                f64::from(weighted_sum) / f64::from(importance_sum)
            };
            CompetitorProfile {
                name: name.clone(),
                weighted_rating,
                rated_requirements,
            }
        })
        .collect()
}

/// Best/worst competitor per customer requirement that carries at least one
/// rating. Ties go to the competitor declared first.
pub fn competitive_gaps(snapshot: &ProjectSnapshot) -> Vec<CompetitiveGap> {
    snapshot
        .customer_requirements
        .iter()
        .filter_map(|c| {
            let mut best: Option<CompetitorStanding> = None;
            let mut worst: Option<CompetitorStanding> = None;
            for (name, &rating) in snapshot
                .competitor_names
                .iter()
                .zip(&c.competitor_ratings)
            {
                if best.as_ref().map_or(true, |b| rating > b.rating) {
                    best = Some(CompetitorStanding {
                        competitor: name.clone(),
                        rating,
                    });
                }
                if worst.as_ref().map_or(true, |w| rating < w.rating) {
                    worst = Some(CompetitorStanding {
                        competitor: name.clone(),
                        rating,
                    });
                }
            }
            Some(CompetitiveGap {
                customer: c.id.clone(),
                description: c.description.clone(),
                importance: c.importance,
                best: best?,
                worst: worst?,
            })
        })
        .collect()
}
