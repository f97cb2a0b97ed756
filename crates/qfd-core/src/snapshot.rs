//! The full input bundle handed to the engine, plus boundary validation and
//! TOML loading.
//!
//! The engine itself never validates; every invariant is checked here, once,
//! when a snapshot is constructed from untrusted data. A validated snapshot
//! makes the whole analysis pipeline total.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{RATING_MAX, RATING_MIN};
use crate::errors::{SnapshotError, ValidationError};
use crate::types::{
    CustomerRequirement, FxHashSet, Relationship, TechnicalCorrelation, TechnicalRequirement,
};

/// Immutable snapshot of one project's House of Quality records.
///
/// Ordering matters: customer and technical requirements keep their declared
/// order through every derived output, and `competitor_names` is
/// index-aligned with each customer requirement's rating row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectSnapshot {
    #[serde(default)]
    pub customer_requirements: Vec<CustomerRequirement>,
    #[serde(default)]
    pub technical_requirements: Vec<TechnicalRequirement>,
    #[serde(default)]
    pub relationships: Vec<Relationship>,
    #[serde(default)]
    pub correlations: Vec<TechnicalCorrelation>,
    #[serde(default)]
    pub competitor_names: Vec<String>,
}

impl ProjectSnapshot {
    /// Check every cross-entity invariant.
    ///
    /// Range checks on strength and correlation values are already enforced
    /// by the enum representations; this covers everything the types alone
    /// cannot: rating ranges, referential integrity, pair uniqueness.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let competitors = self.competitor_names.len();

        for c in &self.customer_requirements {
            if !(RATING_MIN..=RATING_MAX).contains(&c.importance) {
                return Err(ValidationError::ImportanceOutOfRange {
                    id: c.id.to_string(),
                    value: c.importance,
                });
            }
            for &rating in &c.competitor_ratings {
                if !(RATING_MIN..=RATING_MAX).contains(&rating) {
                    return Err(ValidationError::RatingOutOfRange {
                        id: c.id.to_string(),
                        value: rating,
                    });
                }
            }
            if c.competitor_ratings.len() > competitors {
                return Err(ValidationError::TooManyRatings {
                    id: c.id.to_string(),
                    ratings: c.competitor_ratings.len(),
                    competitors,
                });
            }
        }

        for t in &self.technical_requirements {
            if !(RATING_MIN..=RATING_MAX).contains(&t.difficulty) {
                return Err(ValidationError::DifficultyOutOfRange {
                    id: t.id.to_string(),
                    value: t.difficulty,
                });
            }
        }

        let customer_ids: FxHashSet<&str> = self
            .customer_requirements
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        let technical_ids: FxHashSet<&str> = self
            .technical_requirements
            .iter()
            .map(|t| t.id.as_str())
            .collect();

        let mut seen_cells: FxHashSet<(&str, &str)> = FxHashSet::default();
        for r in &self.relationships {
            if !customer_ids.contains(r.customer.as_str()) {
                return Err(ValidationError::UnknownCustomerRequirement {
                    id: r.customer.to_string(),
                });
            }
            if !technical_ids.contains(r.technical.as_str()) {
                return Err(ValidationError::UnknownTechnicalRequirement {
                    id: r.technical.to_string(),
                });
            }
            if !seen_cells.insert((r.customer.as_str(), r.technical.as_str())) {
                return Err(ValidationError::DuplicateRelationship {
                    customer: r.customer.to_string(),
                    technical: r.technical.to_string(),
                });
            }
        }

        let mut seen_pairs: FxHashSet<(&str, &str)> = FxHashSet::default();
        for c in &self.correlations {
            for id in [c.first(), c.second()] {
                if !technical_ids.contains(id.as_str()) {
                    return Err(ValidationError::UnknownTechnicalRequirement {
                        id: id.to_string(),
                    });
                }
            }
            // Records are canonical by construction, so the ordered pair is
            // enough to catch duplicates regardless of original input order.
            if !seen_pairs.insert((c.first().as_str(), c.second().as_str())) {
                return Err(ValidationError::DuplicateCorrelation {
                    first: c.first().to_string(),
                    second: c.second().to_string(),
                });
            }
        }

        Ok(())
    }

    /// Parse a snapshot from a TOML document and validate it.
    pub fn from_toml_str(input: &str, origin: &str) -> Result<Self, SnapshotError> {
        let snapshot: ProjectSnapshot =
            toml::from_str(input).map_err(|e| SnapshotError::Parse {
                path: origin.to_string(),
                message: e.to_string(),
            })?;
        snapshot.validate()?;
        debug!(
            customers = snapshot.customer_requirements.len(),
            technicals = snapshot.technical_requirements.len(),
            relationships = snapshot.relationships.len(),
            correlations = snapshot.correlations.len(),
            "loaded snapshot from {origin}"
        );
        Ok(snapshot)
    }

    /// Load and validate a snapshot from a TOML file on disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        let path = path.as_ref();
        let display = path.display().to_string();
        if !path.exists() {
            return Err(SnapshotError::FileNotFound { path: display });
        }
        let input = std::fs::read_to_string(path).map_err(|source| SnapshotError::Read {
            path: display.clone(),
            source,
        })?;
        Self::from_toml_str(&input, &display)
    }
}
