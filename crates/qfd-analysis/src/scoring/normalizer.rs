//! Weight normalization over raw priority scores.
//!
//! Two distinct percentage scales come out of the raw scores and they must
//! not be confused:
//! - *relative weight*: share of the **total** score, summing to 100 across
//!   all technical requirements (reported alongside each priority);
//! - *normalized priority*: percentage of the **maximum** score, the 0-100
//!   scale the classifier and correlation analyzer consume.

use super::scorer::TechnicalPriority;

/// Fill in `relative_weight` as `score / total × 100` for each entry.
///
/// If the total score is 0 (no relationships at all) the input is returned
/// unchanged: every weight stays 0 and there is no division by zero. Pure;
/// order preserved.
pub fn normalize_weights(priorities: &[TechnicalPriority]) -> Vec<TechnicalPriority> {
    let total: u32 = priorities.iter().map(|p| p.score).sum();
    if total == 0 {
        return priorities.to_vec();
    }
    priorities
        .iter()
        .map(|p| TechnicalPriority {
            relative_weight: f64::from(p.score) / f64::from(total) * 100.0,
            ..p.clone()
        })
        .collect()
}

/// Each score as a percentage of the maximum score (0-100), index-aligned
/// with the input. A zero maximum yields all zeros.
pub fn normalized_priorities(priorities: &[TechnicalPriority]) -> Vec<f64> {
    let max = priorities.iter().map(|p| p.score).max().unwrap_or(0);
    if max == 0 {
        return vec![0.0; priorities.len()];
    }
    priorities
        .iter()
        .map(|p| f64::from(p.score) / f64::from(max) * 100.0)
        .collect()
}
