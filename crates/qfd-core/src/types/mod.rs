//! Entity records and identifier types for the House of Quality.
//! FxHashMap/SmallVec aliases, String-backed ID newtypes, value enums.

pub mod collections;
pub mod identifiers;
pub mod relations;
pub mod requirements;

pub use collections::{FxHashMap, FxHashSet, SmallVec4};
pub use identifiers::{CustomerReqId, TechReqId};
pub use relations::{Correlation, Relationship, RelationshipStrength, TechnicalCorrelation};
pub use requirements::{CustomerRequirement, TechnicalRequirement};
