//! # tenets-core
//!
//! A paired study collection for two design tenets - THE PAIRS.
//!
//! Every public function in this crate belongs to a pair: a deliberately
//! convoluted (or duplicated) counterexample, and the refactor it argues
//! for. The counterexamples are the subject matter, not leftovers - each
//! one is held bit-exactly equivalent to its refactor by the equivalence
//! suite in `tests/`.
//!
//! ## The Tenets
//!
//! - **KISS** ("Keep It Simple, Stupid"): prefer the simplest adequate
//!   solution. The [`kiss`] module pairs a nested discount ladder, a
//!   hand-rolled prefix-sum loop, and a branchy weekend predicate with
//!   their flat counterparts.
//! - **DRY** ("Don't Repeat Yourself"): one authoritative definition,
//!   reused. The [`dry`] module pairs duplicated greeting formats,
//!   re-typed geometry formulas, and copy-pasted conversion rates with
//!   their extracted counterparts.
//!
//! ## Architectural Constraints
//!
//! - Pure: every function depends only on its parameters
//! - Deterministic: no I/O, no clocks, no randomness, no shared state
//! - Validated: domain violations (negative price, negative radius,
//!   out-of-range count) are explicit [`TenetsError`] values, identical
//!   across both halves of a pair

// =============================================================================
// MODULES
// =============================================================================

pub mod dry;
pub mod kiss;
pub mod primitives;
pub mod types;

// =============================================================================
// RE-EXPORTS: Core Types
// =============================================================================

pub use types::{Greeting, TenetsError};

// =============================================================================
// RE-EXPORTS: KISS Pairs
// =============================================================================

pub use kiss::{
    discounted_price, discounted_price_nested, is_weekend, is_weekend_branching, sum_first_n,
    sum_first_n_indexed,
};

// =============================================================================
// RE-EXPORTS: DRY Pairs
// =============================================================================

pub use dry::{
    circle_area, circle_area_repeated, convert_currency, cylinder_volume,
    cylinder_volume_repeated, eur_to_gbp, eur_to_gbp_inlined, eur_to_usd, eur_to_usd_inlined,
    greet, greet_admin_duplicated, greet_user_duplicated,
};

// =============================================================================
// RE-EXPORTS: Primitives
// =============================================================================

pub use primitives::{
    EUR_TO_GBP_RATE, EUR_TO_USD_RATE, PI_APPROX, PREMIUM_DISCOUNT, PREMIUM_TIER_LIMIT,
    STANDARD_DISCOUNT, STANDARD_TIER_LIMIT, WEEKEND_DAYS,
};
