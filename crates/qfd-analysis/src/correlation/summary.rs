//! Per-requirement aggregation of correlation records.

use std::fmt;

use serde::{Deserialize, Serialize};

use qfd_core::types::TechReqId;

use super::index::CorrelationIndex;

/// Aggregate relationship type of one requirement's correlations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CorrelationImpact {
    /// No correlation records at all.
    Isolated,
    /// Net impact > 1: the requirement mostly reinforces others.
    Synergistic,
    /// Net impact < -1: the requirement mostly fights others.
    Conflicted,
    /// Mixed or mild correlations, net impact in [-1, 1].
    Complex,
}

impl CorrelationImpact {
    pub fn name(self) -> &'static str {
        match self {
            Self::Isolated => "Isolated",
            Self::Synergistic => "Synergistic",
            Self::Conflicted => "Conflicted",
            Self::Complex => "Complex",
        }
    }
}

impl fmt::Display for CorrelationImpact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Counts and net effect of one requirement's correlations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrelationImpactSummary {
    /// Partners with a positive-leaning correlation.
    pub positive_count: usize,
    /// Partners with a negative-leaning correlation.
    pub negative_count: usize,
    /// (2×strong_positive + positive) − (2×strong_negative + negative).
    pub net_impact: i32,
    pub impact: CorrelationImpact,
}

impl CorrelationImpactSummary {
    pub fn has_positive(&self) -> bool {
        self.positive_count > 0
    }

    pub fn has_negative(&self) -> bool {
        self.negative_count > 0
    }
}

const SYNERGISTIC_ABOVE: i32 = 1;
const CONFLICTED_BELOW: i32 = -1;

/// Summarize every correlation record mentioning `id`.
///
/// Strong variants count double toward the signed net impact. A record with
/// correlation 0 still counts as a record (the requirement is not isolated)
/// but moves neither counter.
pub fn summarize(id: &TechReqId, index: &CorrelationIndex<'_>) -> CorrelationImpactSummary {
    let records = index.for_requirement(id);

    let mut positive_count = 0usize;
    let mut negative_count = 0usize;
    let mut net_impact = 0i32;
    for record in records {
        let correlation = record.correlation();
        if correlation.is_positive() {
            positive_count += 1;
        } else if correlation.is_negative() {
            negative_count += 1;
        }
        net_impact += correlation.value();
    }

    let impact = if records.is_empty() {
        CorrelationImpact::Isolated
    } else if net_impact > SYNERGISTIC_ABOVE {
        CorrelationImpact::Synergistic
    } else if net_impact < CONFLICTED_BELOW {
        CorrelationImpact::Conflicted
    } else {
        CorrelationImpact::Complex
    };

    CorrelationImpactSummary {
        positive_count,
        negative_count,
        net_impact,
        impact,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qfd_core::types::{Correlation, TechnicalCorrelation};

    fn correlation(a: &str, b: &str, value: i8) -> TechnicalCorrelation {
        TechnicalCorrelation::new(a, b, Correlation::from_value(value).unwrap()).unwrap()
    }

    #[test]
    fn test_isolated_requirement() {
        let records = vec![correlation("tr-b", "tr-c", 1)];
        let index = CorrelationIndex::build(&records);
        let summary = summarize(&TechReqId::from("tr-a"), &index);

        assert_eq!(summary.impact, CorrelationImpact::Isolated);
        assert_eq!(summary.positive_count, 0);
        assert_eq!(summary.negative_count, 0);
        assert_eq!(summary.net_impact, 0);
    }

    #[test]
    fn test_strong_variants_count_double() {
        // One strong positive (+2) and one negative (-1): net +1.
        let records = vec![
            correlation("tr-a", "tr-b", 2),
            correlation("tr-a", "tr-c", -1),
        ];
        let index = CorrelationIndex::build(&records);
        let summary = summarize(&TechReqId::from("tr-a"), &index);

        assert_eq!(summary.positive_count, 1);
        assert_eq!(summary.negative_count, 1);
        assert_eq!(summary.net_impact, 1);
        assert_eq!(summary.impact, CorrelationImpact::Complex);
    }

    #[test]
    fn test_synergistic_above_one() {
        let records = vec![
            correlation("tr-a", "tr-b", 2),
            correlation("tr-a", "tr-c", 1),
        ];
        let index = CorrelationIndex::build(&records);
        let summary = summarize(&TechReqId::from("tr-a"), &index);
        assert_eq!(summary.net_impact, 3);
        assert_eq!(summary.impact, CorrelationImpact::Synergistic);
    }

    #[test]
    fn test_conflicted_below_minus_one() {
        let records = vec![correlation("tr-a", "tr-b", -2)];
        let index = CorrelationIndex::build(&records);
        let summary = summarize(&TechReqId::from("tr-a"), &index);
        assert_eq!(summary.net_impact, -2);
        assert_eq!(summary.impact, CorrelationImpact::Conflicted);
    }

    #[test]
    fn test_symmetry_across_pair_order() {
        // The same unordered pair built both ways produces identical records,
        // so both requirements see the same analysis.
        let forward = vec![correlation("tr-a", "tr-b", 2)];
        let backward = vec![correlation("tr-b", "tr-a", 2)];
        let id = TechReqId::from("tr-a");

        let summary_forward = summarize(&id, &CorrelationIndex::build(&forward));
        let summary_backward = summarize(&id, &CorrelationIndex::build(&backward));
        assert_eq!(summary_forward, summary_backward);
    }
}
