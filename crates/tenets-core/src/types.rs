//! # Core Type Definitions
//!
//! This module contains the shared types for the pair collection:
//! - Greeting representation (`Greeting`)
//! - Error types (`TenetsError`)

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// =============================================================================
// GREETING
// =============================================================================

/// A greeting addressed to a named user.
///
/// This is the single authoritative definition of the greeting format.
/// The duplicated counterexamples in [`crate::dry`] each write the format
/// out by hand; this type is what the refactor extracts.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Greeting {
    /// Name of the person being greeted.
    pub name: String,
    /// Whether the admin clause is appended.
    pub admin: bool,
}

impl Greeting {
    /// Create a greeting for a regular user.
    #[must_use]
    pub fn user(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            admin: false,
        }
    }

    /// Create a greeting for an administrator.
    #[must_use]
    pub fn admin(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            admin: true,
        }
    }

    /// Render the greeting as its output string.
    #[must_use]
    pub fn render(&self) -> String {
        let mut greeting = format!("Hallo {}!", self.name);
        if self.admin {
            greeting.push_str(" Du bist Admin.");
        }
        greeting
    }
}

impl fmt::Display for Greeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors produced by the validated pairs.
///
/// - No silent failures: domain violations are explicit errors
/// - Both halves of a pair return the SAME error for the same input
/// - All errors are local; the caller validates, nothing is retried
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TenetsError {
    /// A price below zero was passed to a discount function.
    #[error("negative price: {0}")]
    NegativePrice(f64),

    /// A radius below zero was passed to a geometry function.
    #[error("negative radius: {0}")]
    NegativeRadius(f64),

    /// A height below zero was passed to a geometry function.
    #[error("negative height: {0}")]
    NegativeHeight(f64),

    /// A prefix count exceeded the length of the input slice.
    #[error("count {count} out of range for slice of length {len}")]
    CountOutOfRange {
        /// The requested prefix length.
        count: usize,
        /// The actual slice length.
        len: usize,
    },
}

// =============================================================================
// TESTS
// =============================================================================
