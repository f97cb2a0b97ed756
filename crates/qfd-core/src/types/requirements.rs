//! Customer and technical requirement records.

use serde::{Deserialize, Serialize};

use super::identifiers::{CustomerReqId, TechReqId};

/// A customer-voiced requirement (a row of the House of Quality).
///
/// `competitor_ratings` is ordered to match the project's competitor-name
/// list; entry `i` is how competitor `i` satisfies this requirement today.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRequirement {
    pub id: CustomerReqId,
    pub description: String,
    /// Importance to the customer, 1 (nice to have) to 5 (essential).
    pub importance: u8,
    /// One rating per competitor, each 1-5.
    #[serde(default)]
    pub competitor_ratings: Vec<u8>,
}

/// A technical requirement (a column of the House of Quality).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechnicalRequirement {
    pub id: TechReqId,
    pub description: String,
    /// Measurement unit, e.g. "ms" or "defects/kloc".
    pub unit: String,
    /// Target value as free text, e.g. "<200".
    pub target_value: String,
    /// Implementation difficulty, 1 (trivial) to 5 (very hard).
    pub difficulty: u8,
}
