//! Display lookups for the matrix cells.
//!
//! Pure mappings from the strength/correlation enums to the symbols, colors,
//! and titles a UI layer renders. No logic lives here.

use qfd_core::types::{Correlation, RelationshipStrength};

/// Matrix cell symbol for a relationship strength.
pub fn strength_symbol(strength: RelationshipStrength) -> &'static str {
    match strength {
        RelationshipStrength::None => "",
        RelationshipStrength::Weak => "▲",
        RelationshipStrength::Medium => "○",
        RelationshipStrength::Strong => "●",
    }
}

/// Display color (hex) for a relationship strength.
pub fn strength_color(strength: RelationshipStrength) -> &'static str {
    match strength {
        RelationshipStrength::None => "#9ca3af",
        RelationshipStrength::Weak => "#60a5fa",
        RelationshipStrength::Medium => "#2563eb",
        RelationshipStrength::Strong => "#1e40af",
    }
}

/// Human-readable title for a relationship strength, with its weight.
pub fn strength_title(strength: RelationshipStrength) -> &'static str {
    match strength {
        RelationshipStrength::None => "None (0)",
        RelationshipStrength::Weak => "Weak (1)",
        RelationshipStrength::Medium => "Medium (3)",
        RelationshipStrength::Strong => "Strong (9)",
    }
}

/// Roof symbol for a correlation value.
pub fn correlation_symbol(correlation: Correlation) -> &'static str {
    match correlation {
        Correlation::StrongNegative => "--",
        Correlation::Negative => "-",
        Correlation::None => "",
        Correlation::Positive => "+",
        Correlation::StrongPositive => "++",
    }
}

/// Display color (hex) for a correlation value.
pub fn correlation_color(correlation: Correlation) -> &'static str {
    match correlation {
        Correlation::StrongNegative => "#b91c1c",
        Correlation::Negative => "#f87171",
        Correlation::None => "#9ca3af",
        Correlation::Positive => "#4ade80",
        Correlation::StrongPositive => "#15803d",
    }
}

/// Human-readable title for a correlation value.
pub fn correlation_title(correlation: Correlation) -> &'static str {
    match correlation {
        Correlation::StrongNegative => "Strong negative",
        Correlation::Negative => "Negative",
        Correlation::None => "No correlation",
        Correlation::Positive => "Positive",
        Correlation::StrongPositive => "Strong positive",
    }
}
