//! # Pair Equivalence Tests
//!
//! Property-based verification that every counterexample agrees exactly
//! with its refactor - for values AND for errors - across the whole
//! input domain. If any pair drifts apart, the collection is INVALID.

use proptest::collection::vec;
use proptest::prelude::*;
use tenets_core::{
    EUR_TO_GBP_RATE, EUR_TO_USD_RATE, circle_area, circle_area_repeated, convert_currency,
    cylinder_volume, cylinder_volume_repeated, discounted_price, discounted_price_nested,
    eur_to_gbp, eur_to_gbp_inlined, eur_to_usd, eur_to_usd_inlined, greet, greet_admin_duplicated,
    greet_user_duplicated, is_weekend, is_weekend_branching, sum_first_n, sum_first_n_indexed,
};

/// Day strings: the real day names plus arbitrary short strings, so both
/// the hit and miss paths are exercised.
fn day_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Saturday".to_string()),
        Just("Sunday".to_string()),
        Just("Monday".to_string()),
        Just("saturday".to_string()),
        "[A-Za-z]{0,12}",
    ]
}

// =============================================================================
// PROPERTY TESTS
// =============================================================================

proptest! {
    /// The nested and flat discount ladders agree on every finite price,
    /// including negative prices (both must return the same error).
    #[test]
    fn discount_pair_agrees(price in -1e9f64..1e9) {
        prop_assert_eq!(discounted_price_nested(price), discounted_price(price));
    }

    /// Valid prices are discounted by exactly one of the three tier rates.
    #[test]
    fn discount_applies_a_known_tier(price in 0f64..1e9) {
        let discounted = discounted_price(price).expect("non-negative price");

        let tiers = [1.0, 0.9, 0.85];
        prop_assert!(tiers.iter().any(|factor| discounted == price * factor));
    }

    /// The index loop and the iterator sum agree for every count,
    /// in range or not.
    #[test]
    fn sum_pair_agrees(
        values in vec(-1e6f64..1e6, 0..64),
        n in 0usize..80
    ) {
        prop_assert_eq!(
            sum_first_n_indexed(&values, n),
            sum_first_n(&values, n)
        );
    }

    /// For valid counts the result is the left-to-right sum of the prefix.
    #[test]
    fn sum_matches_reference_fold(values in vec(-1e6f64..1e6, 0..64)) {
        let n = values.len();
        let reference = values.iter().fold(0.0, |acc, v| acc + v);

        prop_assert_eq!(sum_first_n(&values, n).expect("count in range"), reference);
    }

    /// Both weekend predicates agree on every string.
    #[test]
    fn weekend_pair_agrees(day in day_strategy()) {
        prop_assert_eq!(is_weekend_branching(&day), is_weekend(&day));
    }

    /// The duplicated greetings agree with the unified one.
    #[test]
    fn greeting_pair_agrees(name in "[A-Za-z ]{0,20}") {
        prop_assert_eq!(greet_user_duplicated(&name), greet(&name, false));
        prop_assert_eq!(greet_admin_duplicated(&name), greet(&name, true));
    }

    /// The re-typed geometry formulas agree with the reused ones.
    #[test]
    fn geometry_pair_agrees(radius in -1e3f64..1e3, height in -1e3f64..1e3) {
        prop_assert_eq!(circle_area_repeated(radius), circle_area(radius));
        prop_assert_eq!(
            cylinder_volume_repeated(radius, height),
            cylinder_volume(radius, height)
        );
    }

    /// Volume is area times height, bit-exactly.
    #[test]
    fn volume_is_area_times_height(radius in 0f64..1e3, height in 0f64..1e3) {
        let area = circle_area(radius).expect("non-negative radius");
        let volume = cylinder_volume(radius, height).expect("valid dimensions");

        prop_assert_eq!(volume, area * height);
    }

    /// The inlined conversions agree with the generalized form applied to
    /// the named constants.
    #[test]
    fn currency_pair_agrees(euro in -1e9f64..1e9) {
        prop_assert_eq!(eur_to_usd_inlined(euro), convert_currency(euro, EUR_TO_USD_RATE));
        prop_assert_eq!(eur_to_gbp_inlined(euro), convert_currency(euro, EUR_TO_GBP_RATE));
        prop_assert_eq!(eur_to_usd(euro), eur_to_usd_inlined(euro));
        prop_assert_eq!(eur_to_gbp(euro), eur_to_gbp_inlined(euro));
    }

    /// Every pure function is deterministic: same input, same output.
    #[test]
    fn pairs_are_deterministic(price in 0f64..1e6, day in day_strategy()) {
        prop_assert_eq!(discounted_price(price), discounted_price(price));
        prop_assert_eq!(is_weekend(&day), is_weekend(&day));
        prop_assert_eq!(greet(&day, true), greet(&day, true));
    }
}
