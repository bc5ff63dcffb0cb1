//! # KISS Pairs
//!
//! "Keep It Simple, Stupid": prefer the simplest adequate solution.
//!
//! Each pair contrasts a deliberately convoluted function with its simple
//! refactor. The convoluted half is NOT dead weight — it is the exhibit.
//! Both halves of a pair must agree exactly, for values and for errors,
//! on every input; the `pair_equivalence` suite enforces this.

use crate::primitives::{
    PREMIUM_DISCOUNT, PREMIUM_TIER_LIMIT, STANDARD_DISCOUNT, STANDARD_TIER_LIMIT, WEEKEND_DAYS,
};
use crate::types::TenetsError;

// =============================================================================
// PAIR 1: TIERED DISCOUNT
// =============================================================================

/// Tiered discount, the convoluted way: tier selection buried in nested
/// branches, thresholds and rates as repeated inline literals.
///
/// The reader has to mentally flatten the nesting to recover the three
/// tiers that [`discounted_price`] states directly.
#[allow(clippy::needless_late_init)]
pub fn discounted_price_nested(price: f64) -> Result<f64, TenetsError> {
    if price < 0.0 {
        return Err(TenetsError::NegativePrice(price));
    }

    let discount;
    if price > 100.0 {
        if price <= 200.0 {
            discount = 0.10;
        } else {
            discount = 0.15;
        }
    } else {
        discount = 0.0;
    }

    Ok(price * (1.0 - discount))
}

/// Tiered discount, the simple way: one flat ladder, highest tier first.
///
/// Tiers:
/// - `price <= 100`: no discount
/// - `100 < price <= 200`: 10%
/// - `price > 200`: 15%
///
/// Returns [`TenetsError::NegativePrice`] for prices below zero.
pub fn discounted_price(price: f64) -> Result<f64, TenetsError> {
    if price < 0.0 {
        return Err(TenetsError::NegativePrice(price));
    }

    let discount = if price > PREMIUM_TIER_LIMIT {
        PREMIUM_DISCOUNT
    } else if price > STANDARD_TIER_LIMIT {
        STANDARD_DISCOUNT
    } else {
        0.0
    };

    Ok(price * (1.0 - discount))
}

// =============================================================================
// PAIR 2: PREFIX SUM
// =============================================================================

/// Sum of the first `n` values, the convoluted way: a hand-rolled index
/// loop with a mutable accumulator.
#[allow(clippy::needless_range_loop)]
pub fn sum_first_n_indexed(values: &[f64], n: usize) -> Result<f64, TenetsError> {
    if n > values.len() {
        return Err(TenetsError::CountOutOfRange {
            count: n,
            len: values.len(),
        });
    }

    let mut total = 0.0;
    for i in 0..n {
        total += values[i];
    }
    Ok(total)
}

/// Sum of the first `n` values, the simple way: slice and sum.
///
/// `n == 0` yields `0.0`; `n == values.len()` yields the full sum.
/// Returns [`TenetsError::CountOutOfRange`] when `n` exceeds the slice
/// length. Summation is left to right in both halves of the pair, so the
/// results are bit-identical.
pub fn sum_first_n(values: &[f64], n: usize) -> Result<f64, TenetsError> {
    if n > values.len() {
        return Err(TenetsError::CountOutOfRange {
            count: n,
            len: values.len(),
        });
    }

    Ok(values[..n].iter().sum())
}

// =============================================================================
// PAIR 3: WEEKEND PREDICATE
// =============================================================================

/// Weekend test, the convoluted way: an `if` that re-states the boolean
/// it already computed.
#[allow(clippy::needless_bool)]
pub fn is_weekend_branching(day: &str) -> bool {
    if day == "Saturday" || day == "Sunday" {
        true
    } else {
        false
    }
}

/// Weekend test, the simple way: membership in the weekend day table.
///
/// Matching is case-sensitive and exact: `"Sunday"` is a weekend day,
/// `"sunday"` and `"Sonntag"` are not. Unrecognized strings are simply
/// `false`, never an error.
#[must_use]
pub fn is_weekend(day: &str) -> bool {
    WEEKEND_DAYS.contains(&day)
}

// =============================================================================
// TESTS
// =============================================================================
