//! Relationship and correlation records.
//!
//! A `Relationship` links one customer requirement to one technical
//! requirement with a 0/1/3/9 strength. A `TechnicalCorrelation` links two
//! technical requirements with a signed -2..2 interaction; the pair is
//! unordered, so the record stores it canonically (lexicographically smaller
//! id first) and each unordered pair has exactly one representation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

use super::identifiers::{CustomerReqId, TechReqId};

/// How strongly a technical requirement addresses a customer requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum RelationshipStrength {
    #[default]
    None,
    Weak,
    Medium,
    Strong,
}

impl RelationshipStrength {
    /// The numeric weight used for scoring (0/1/3/9).
    pub fn weight(self) -> u32 {
        match self {
            Self::None => 0,
            Self::Weak => 1,
            Self::Medium => 3,
            Self::Strong => 9,
        }
    }

    /// Parse a stored weight back into a strength.
    pub fn from_weight(weight: u8) -> Option<Self> {
        match weight {
            0 => Some(Self::None),
            1 => Some(Self::Weak),
            3 => Some(Self::Medium),
            9 => Some(Self::Strong),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Weak => "weak",
            Self::Medium => "medium",
            Self::Strong => "strong",
        }
    }
}

impl fmt::Display for RelationshipStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for RelationshipStrength {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_weight(value).ok_or(ValidationError::InvalidStrength { value })
    }
}

impl From<RelationshipStrength> for u8 {
    fn from(strength: RelationshipStrength) -> Self {
        strength.weight() as u8
    }
}

/// A (customer requirement, technical requirement) cell of the relationship
/// matrix. Absence of a record is equivalent to `RelationshipStrength::None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    pub customer: CustomerReqId,
    pub technical: TechReqId,
    pub strength: RelationshipStrength,
}

/// Signed interaction between two technical requirements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i8", into = "i8")]
pub enum Correlation {
    StrongNegative,
    Negative,
    #[default]
    None,
    Positive,
    StrongPositive,
}

impl Correlation {
    /// The signed value (-2..2).
    pub fn value(self) -> i32 {
        match self {
            Self::StrongNegative => -2,
            Self::Negative => -1,
            Self::None => 0,
            Self::Positive => 1,
            Self::StrongPositive => 2,
        }
    }

    /// Parse a stored value back into a correlation.
    pub fn from_value(value: i8) -> Option<Self> {
        match value {
            -2 => Some(Self::StrongNegative),
            -1 => Some(Self::Negative),
            0 => Some(Self::None),
            1 => Some(Self::Positive),
            2 => Some(Self::StrongPositive),
            _ => None,
        }
    }

    pub fn is_positive(self) -> bool {
        matches!(self, Self::Positive | Self::StrongPositive)
    }

    pub fn is_negative(self) -> bool {
        matches!(self, Self::Negative | Self::StrongNegative)
    }

    /// Unsigned contribution to the net impact accumulator: strong variants
    /// count double, `None` counts nothing.
    pub fn magnitude(self) -> i32 {
        self.value().abs()
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::StrongNegative => "strong_negative",
            Self::Negative => "negative",
            Self::None => "none",
            Self::Positive => "positive",
            Self::StrongPositive => "strong_positive",
        }
    }
}

impl fmt::Display for Correlation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<i8> for Correlation {
    type Error = ValidationError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        Self::from_value(value).ok_or(ValidationError::InvalidCorrelation { value })
    }
}

impl From<Correlation> for i8 {
    fn from(correlation: Correlation) -> Self {
        correlation.value() as i8
    }
}

/// A correlation record between two distinct technical requirements.
///
/// Fields are private so the canonical ordering invariant (first < second)
/// cannot be broken; deserialization funnels through the same constructor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTechnicalCorrelation")]
pub struct TechnicalCorrelation {
    first: TechReqId,
    second: TechReqId,
    correlation: Correlation,
}

impl TechnicalCorrelation {
    /// Build a correlation record, canonicalizing the pair order.
    ///
    /// Rejects self-correlation; swaps the ids so the lexicographically
    /// smaller one comes first regardless of argument order.
    pub fn new(
        a: impl Into<TechReqId>,
        b: impl Into<TechReqId>,
        correlation: Correlation,
    ) -> Result<Self, ValidationError> {
        let a = a.into();
        let b = b.into();
        if a == b {
            return Err(ValidationError::SelfCorrelation { id: a.to_string() });
        }
        let (first, second) = if a < b { (a, b) } else { (b, a) };
        Ok(Self {
            first,
            second,
            correlation,
        })
    }

    pub fn first(&self) -> &TechReqId {
        &self.first
    }

    pub fn second(&self) -> &TechReqId {
        &self.second
    }

    pub fn correlation(&self) -> Correlation {
        self.correlation
    }

    /// Whether this record references the given requirement in either
    /// position of the pair.
    pub fn involves(&self, id: &TechReqId) -> bool {
        &self.first == id || &self.second == id
    }

    /// Given one end of the pair, the other end. `None` if `id` is not part
    /// of this record.
    pub fn partner_of(&self, id: &TechReqId) -> Option<&TechReqId> {
        if &self.first == id {
            Some(&self.second)
        } else if &self.second == id {
            Some(&self.first)
        } else {
            None
        }
    }
}

#[derive(Deserialize)]
struct RawTechnicalCorrelation {
    first: TechReqId,
    second: TechReqId,
    correlation: Correlation,
}

impl TryFrom<RawTechnicalCorrelation> for TechnicalCorrelation {
    type Error = ValidationError;

    fn try_from(raw: RawTechnicalCorrelation) -> Result<Self, Self::Error> {
        Self::new(raw.first, raw.second, raw.correlation)
    }
}
