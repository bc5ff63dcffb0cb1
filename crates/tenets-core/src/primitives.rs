//! # Named Primitives
//!
//! Hardcoded constants shared by the pair modules.
//!
//! Every magic number a refactor extracts lives here, so the "good" half
//! of each pair has exactly one authoritative definition to point at.
//! The counterexample halves deliberately repeat these values as inline
//! literals; the equivalence suite holds the two in lockstep.

/// Fixed approximation of pi used by the geometry pair.
///
/// Deliberately NOT `std::f64::consts::PI`: the pair demonstrates reuse
/// of a shared definition, and both halves must agree bit-exactly on the
/// same five-decimal approximation.
pub const PI_APPROX: f64 = 3.14159;

// =============================================================================
// DISCOUNT TIERS
// =============================================================================

/// Upper bound of the undiscounted tier (inclusive).
///
/// Prices at or below this limit keep their full value.
pub const STANDARD_TIER_LIMIT: f64 = 100.0;

/// Upper bound of the standard-discount tier (inclusive).
///
/// Prices above `STANDARD_TIER_LIMIT` up to this limit receive
/// `STANDARD_DISCOUNT`; prices above it receive `PREMIUM_DISCOUNT`.
pub const PREMIUM_TIER_LIMIT: f64 = 200.0;

/// Discount fraction for the middle tier.
pub const STANDARD_DISCOUNT: f64 = 0.10;

/// Discount fraction for the top tier.
pub const PREMIUM_DISCOUNT: f64 = 0.15;

// =============================================================================
// CURRENCY RATES
// =============================================================================

/// Euro to US dollar conversion rate.
///
/// The inlined counterexamples repeat this value as a literal; the
/// generalized converter takes it as a parameter.
pub const EUR_TO_USD_RATE: f64 = 1.1;

/// Euro to British pound conversion rate.
pub const EUR_TO_GBP_RATE: f64 = 0.85;

// =============================================================================
// CALENDAR
// =============================================================================

/// Day names counted as weekend.
///
/// Matching is case-sensitive: `"saturday"` is not a weekend day.
pub const WEEKEND_DAYS: [&str; 2] = ["Saturday", "Sunday"];
