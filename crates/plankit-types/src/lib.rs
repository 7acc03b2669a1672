//! `plankit-types` – shared value types for the plankit workspace.
//!
//! - [`CheckerSpecs`] – capability advertisement of a state validity checker.
//! - [`GradientClearance`] – co-returned distance and gradient availability.
//! - [`PlanError`] – errors raised while building spaces, checkers and
//!   configuration.  Validity queries themselves never fail.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Properties that a state validity checker may have.
///
/// The flags are advisory: they tell a caller which of the richer queries are
/// worth invoking.  Nothing verifies that they agree with the methods a
/// checker actually overrides; keeping them accurate is the implementer's job.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CheckerSpecs {
    /// The checker can compute the exact clearance of a state.
    #[serde(default)]
    pub has_exact_clearance: bool,
    /// The clearance reported by the checker is a lower bound on the true
    /// clearance.
    #[serde(default)]
    pub has_bounded_approximate_clearance: bool,
    /// The clearance reported by the checker is a conservative approximation.
    #[serde(default)]
    pub has_approximate_clearance: bool,
    /// The checker can return a direction that moves a state away from being
    /// invalid.
    #[serde(default)]
    pub has_gradient_computation: bool,
}

impl CheckerSpecs {
    /// A descriptor with every capability switched off.
    pub const NONE: CheckerSpecs = CheckerSpecs {
        has_exact_clearance: false,
        has_bounded_approximate_clearance: false,
        has_approximate_clearance: false,
        has_gradient_computation: false,
    };

    /// True when any form of clearance (exact, bounded or approximate) is
    /// advertised.
    pub fn has_clearance(&self) -> bool {
        self.has_exact_clearance
            || self.has_bounded_approximate_clearance
            || self.has_approximate_clearance
    }

    /// Flag-wise AND of two descriptors.
    pub fn intersect(&self, other: &CheckerSpecs) -> CheckerSpecs {
        CheckerSpecs {
            has_exact_clearance: self.has_exact_clearance && other.has_exact_clearance,
            has_bounded_approximate_clearance: self.has_bounded_approximate_clearance
                && other.has_bounded_approximate_clearance,
            has_approximate_clearance: self.has_approximate_clearance
                && other.has_approximate_clearance,
            has_gradient_computation: self.has_gradient_computation
                && other.has_gradient_computation,
        }
    }
}

/// Result of a gradient-aware clearance query.
///
/// `distance` follows the clearance sign convention: non-negative means the
/// state is valid and that far from the nearest invalid state, negative means
/// the state is invalid and the magnitude is the penetration depth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientClearance {
    pub distance: f64,
    /// Set when the caller's gradient slot was written.
    pub gradient_available: bool,
}

impl GradientClearance {
    /// A report carrying only a distance; the gradient slot was not touched.
    pub fn distance_only(distance: f64) -> Self {
        Self {
            distance,
            gradient_available: false,
        }
    }
}

/// Errors raised while constructing spaces, checkers and configuration.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlanError {
    #[error("Invalid bounds on axis {axis}: [{low}, {high}]")]
    InvalidBounds { axis: usize, low: f64, high: f64 },

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("A state space needs at least one dimension")]
    ZeroDimension,

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Unknown checker kind: {0}")]
    UnknownChecker(String),
}
