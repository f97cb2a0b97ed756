//! Correlation lookup keyed by requirement id.
//!
//! Correlation records are stored flat; answering "which records mention
//! requirement t?" by scanning is O(T·K) across a whole analysis. The index
//! buckets each record under both ends of its pair once, so per-requirement
//! lookups are O(1).

use qfd_core::types::{FxHashMap, SmallVec4, TechReqId, TechnicalCorrelation};

/// Per-requirement view over a flat slice of correlation records.
///
/// Borrows the records; build it once per analysis pass.
pub struct CorrelationIndex<'a> {
    by_requirement: FxHashMap<&'a TechReqId, SmallVec4<&'a TechnicalCorrelation>>,
}

impl<'a> CorrelationIndex<'a> {
    /// Index every record under both ends of its pair.
    pub fn build(correlations: &'a [TechnicalCorrelation]) -> Self {
        let mut by_requirement: FxHashMap<&'a TechReqId, SmallVec4<&'a TechnicalCorrelation>> =
            FxHashMap::default();
        for c in correlations {
            by_requirement.entry(c.first()).or_default().push(c);
            by_requirement.entry(c.second()).or_default().push(c);
        }
        Self { by_requirement }
    }

    /// All records that mention `id` in either position of the pair.
    pub fn for_requirement(&self, id: &TechReqId) -> &[&'a TechnicalCorrelation] {
        self.by_requirement
            .get(id)
            .map(|records| records.as_slice())
            .unwrap_or(&[])
    }
}
