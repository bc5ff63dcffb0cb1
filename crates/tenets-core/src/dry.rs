//! # DRY Pairs
//!
//! "Don't Repeat Yourself": one authoritative definition, reused.
//!
//! Each pair contrasts copy-pasted logic with the refactor that extracts
//! the shared piece — a value type for the greeting format, a helper
//! function for the area formula, a parameter for the conversion rate.
//! As in [`crate::kiss`], the duplicated half is the exhibit, and every
//! pair must agree exactly on every input.

use crate::primitives::{EUR_TO_GBP_RATE, EUR_TO_USD_RATE, PI_APPROX};
use crate::types::{Greeting, TenetsError};

// =============================================================================
// PAIR 1: GREETINGS
// =============================================================================

/// Greet a regular user, the duplicated way: the format string written
/// out by hand, once per audience.
#[must_use]
pub fn greet_user_duplicated(name: &str) -> String {
    format!("Hallo {}!", name)
}

/// Greet an administrator, the duplicated way: the same format string
/// again, plus the admin clause. A wording fix now has two homes.
#[must_use]
pub fn greet_admin_duplicated(name: &str) -> String {
    format!("Hallo {}! Du bist Admin.", name)
}

/// Greet a user, the reused way: one [`Greeting`] definition, the admin
/// clause appended on request.
#[must_use]
pub fn greet(name: &str, is_admin: bool) -> String {
    Greeting {
        name: name.to_owned(),
        admin: is_admin,
    }
    .render()
}

// =============================================================================
// PAIR 2: GEOMETRY
// =============================================================================

/// Circle area, the duplicated way: the formula inlined here and again
/// in [`cylinder_volume_repeated`].
pub fn circle_area_repeated(radius: f64) -> Result<f64, TenetsError> {
    if radius < 0.0 {
        return Err(TenetsError::NegativeRadius(radius));
    }
    Ok(3.14159 * radius * radius)
}

/// Cylinder volume, the duplicated way: the area formula re-typed instead
/// of reused.
pub fn cylinder_volume_repeated(radius: f64, height: f64) -> Result<f64, TenetsError> {
    if radius < 0.0 {
        return Err(TenetsError::NegativeRadius(radius));
    }
    if height < 0.0 {
        return Err(TenetsError::NegativeHeight(height));
    }
    Ok(3.14159 * radius * radius * height)
}

/// Area of a circle with the given radius, using the fixed
/// [`PI_APPROX`] constant.
///
/// Returns [`TenetsError::NegativeRadius`] for radii below zero.
pub fn circle_area(radius: f64) -> Result<f64, TenetsError> {
    if radius < 0.0 {
        return Err(TenetsError::NegativeRadius(radius));
    }
    Ok(PI_APPROX * radius * radius)
}

/// Volume of a cylinder, the reused way: expressed through
/// [`circle_area`] so the formula has a single home.
///
/// Returns [`TenetsError::NegativeRadius`] or
/// [`TenetsError::NegativeHeight`] for out-of-domain inputs; the radius
/// is checked first.
pub fn cylinder_volume(radius: f64, height: f64) -> Result<f64, TenetsError> {
    let area = circle_area(radius)?;
    if height < 0.0 {
        return Err(TenetsError::NegativeHeight(height));
    }
    Ok(area * height)
}

// =============================================================================
// PAIR 3: CURRENCY CONVERSION
// =============================================================================

/// Euro to USD, the duplicated way: the rate as an inline literal.
#[must_use]
pub fn eur_to_usd_inlined(euro: f64) -> f64 {
    euro * 1.1
}

/// Euro to GBP, the duplicated way: another near-identical function,
/// another inline literal.
#[must_use]
pub fn eur_to_gbp_inlined(euro: f64) -> f64 {
    euro * 0.85
}

/// Convert a euro amount at the given rate: the generalized form the
/// inlined copies collapse into.
#[must_use]
pub fn convert_currency(euro: f64, rate: f64) -> f64 {
    euro * rate
}

/// Euro to USD at [`EUR_TO_USD_RATE`].
#[must_use]
pub fn eur_to_usd(euro: f64) -> f64 {
    convert_currency(euro, EUR_TO_USD_RATE)
}

/// Euro to GBP at [`EUR_TO_GBP_RATE`].
#[must_use]
pub fn eur_to_gbp(euro: f64) -> f64 {
    convert_currency(euro, EUR_TO_GBP_RATE)
}

// =============================================================================
// TESTS
// =============================================================================
