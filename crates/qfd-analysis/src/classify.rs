//! Challenge and strategic-importance banding.
//!
//! Both tables are driven by normalized priority (0-100, percent of max) and
//! difficulty (1-5). The thresholds are a fixed output contract and must be
//! reproduced exactly across versions. Each table lives in one named
//! function with its constants beside it, so a retune touches nothing else.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How hard a requirement is to land, given its difficulty and priority.
/// Variants are declared in ascending order so band comparisons work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ChallengeBand {
    Low,
    Medium,
    High,
    Critical,
}

impl ChallengeBand {
    pub fn name(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }
}

impl fmt::Display for ChallengeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Strategic value of a requirement to the product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ImportanceBand {
    Low,
    Medium,
    High,
    Critical,
}

impl ImportanceBand {
    pub fn name(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }
}

impl fmt::Display for ImportanceBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Weight of difficulty in the challenge score.
const CHALLENGE_DIFFICULTY_WEIGHT: f64 = 20.0;
/// Weight of normalized priority in the challenge score.
const CHALLENGE_PRIORITY_WEIGHT: f64 = 0.3;

const CHALLENGE_CRITICAL_ABOVE: f64 = 80.0;
const CHALLENGE_HIGH_ABOVE: f64 = 60.0;
const CHALLENGE_MEDIUM_ABOVE: f64 = 40.0;

/// Band the implementation challenge of one requirement.
///
/// challenge_score = difficulty × 20 + normalized_priority × 0.3, banded at
/// >80 / >60 / >40.
pub fn classify_challenge(normalized_priority: f64, difficulty: u8) -> ChallengeBand {
    let score = f64::from(difficulty) * CHALLENGE_DIFFICULTY_WEIGHT
        + normalized_priority * CHALLENGE_PRIORITY_WEIGHT;
    if score > CHALLENGE_CRITICAL_ABOVE {
        ChallengeBand::Critical
    } else if score > CHALLENGE_HIGH_ABOVE {
        ChallengeBand::High
    } else if score > CHALLENGE_MEDIUM_ABOVE {
        ChallengeBand::Medium
    } else {
        ChallengeBand::Low
    }
}

const IMPORTANCE_TOP_ABOVE: f64 = 70.0;
const IMPORTANCE_MID_ABOVE: f64 = 40.0;
const IMPORTANCE_LOW_ABOVE: f64 = 20.0;

/// Difficulty at or above which the top two priority bands escalate.
pub(crate) const HIGH_DIFFICULTY: u8 = 4;

/// Band the strategic importance of one requirement.
///
/// Branches on normalized priority first, then escalates the top two bands
/// when difficulty ≥ 4.
pub fn classify_importance(normalized_priority: f64, difficulty: u8) -> ImportanceBand {
    let high_difficulty = difficulty >= HIGH_DIFFICULTY;
    if normalized_priority > IMPORTANCE_TOP_ABOVE {
        if high_difficulty {
            ImportanceBand::Critical
        } else {
            ImportanceBand::High
        }
    } else if normalized_priority > IMPORTANCE_MID_ABOVE {
        if high_difficulty {
            ImportanceBand::High
        } else {
            ImportanceBand::Medium
        }
    } else if normalized_priority > IMPORTANCE_LOW_ABOVE {
        ImportanceBand::Medium
    } else {
        ImportanceBand::Low
    }
}
