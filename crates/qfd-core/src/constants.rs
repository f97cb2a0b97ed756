//! Shared constants for the QFD analysis engine.

/// Engine version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Minimum customer importance / technical difficulty / competitor rating.
pub const RATING_MIN: u8 = 1;

/// Maximum customer importance / technical difficulty / competitor rating.
pub const RATING_MAX: u8 = 5;

/// The valid relationship strength weights (None/Weak/Medium/Strong).
pub const STRENGTH_WEIGHTS: [u8; 4] = [0, 1, 3, 9];

/// Minimum signed correlation value (strong negative).
pub const CORRELATION_MIN: i8 = -2;

/// Maximum signed correlation value (strong positive).
pub const CORRELATION_MAX: i8 = 2;
