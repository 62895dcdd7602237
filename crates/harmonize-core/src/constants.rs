/// Harmonize engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum number of HITL decisions retained in the log (ring capacity).
pub const DECISION_LOG_CAPACITY: usize = 10_000;

/// Confidence assigned to a learned pattern on first sighting.
pub const PATTERN_BASE_CONFIDENCE: f64 = 0.7;

/// Per-occurrence confidence increment for a learned pattern.
pub const PATTERN_CONFIDENCE_STEP: f64 = 0.05;

/// Ceiling on learned-pattern confidence.
pub const PATTERN_CONFIDENCE_CAP: f64 = 0.95;

/// Confidence a pattern must reach before promotion into the knowledge base.
pub const PATTERN_PROMOTION_CONFIDENCE: f64 = 0.8;

/// Occurrences a pattern must reach before promotion into the knowledge base.
pub const PATTERN_PROMOTION_OCCURRENCES: u32 = 3;

/// Confidence of an expansion found by consonant-skeleton matching.
pub const PATTERN_MATCH_CONFIDENCE: f64 = 0.85;

/// Score bonus granted to prefix matches during fuzzy expansion.
pub const FUZZY_PREFIX_BONUS: f64 = 0.3;

/// Bonus added to final confidence per distinct successful token expansion.
pub const NORMALIZATION_BONUS_STEP: f64 = 0.01;

/// Ceiling on the normalization bonus.
pub const NORMALIZATION_BONUS_CAP: f64 = 0.05;

/// Default auto-confirm threshold, used until feedback data exists.
pub const DEFAULT_AUTO_THRESHOLD: f64 = 0.95;

/// Default review threshold, used until feedback data exists.
pub const DEFAULT_REVIEW_THRESHOLD: f64 = 0.70;

/// Margin subtracted from the lowest rejected confidence when recommending
/// the review threshold.
pub const REVIEW_MARGIN: f64 = 0.05;

/// Floor below which the recommended review threshold never drops.
pub const REVIEW_FLOOR: f64 = 0.50;
