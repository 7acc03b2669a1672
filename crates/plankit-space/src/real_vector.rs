//! Bounded real-vector space.
//!
//! The simplest useful context: states are `f64` vectors, each axis is
//! clamped to a closed `[low, high]` interval and distance is Euclidean.
//!
//! # Key types
//!
//! | Type | Role |
//! |------|------|
//! | [`RealVectorState`]  | A point in ℝⁿ.                                   |
//! | [`RealVectorBounds`] | Per-axis closed intervals, validated on build.  |
//! | [`RealVectorSpace`]  | The [`SpaceInformation`] implementation.        |
//!
//! # Example
//!
//! ```rust
//! use plankit_space::{RealVectorBounds, RealVectorSpace, RealVectorState, SpaceInformation};
//!
//! let bounds = RealVectorBounds::new(vec![-1.0, -1.0], vec![1.0, 1.0]).unwrap();
//! let space = RealVectorSpace::new(bounds);
//!
//! assert_eq!(space.dimension(), 2);
//! assert!(space.satisfies_bounds(&RealVectorState::new(vec![0.5, -0.5])));
//! assert!(!space.satisfies_bounds(&RealVectorState::new(vec![2.0, 0.0])));
//! ```

use std::ops::{Index, IndexMut};

use plankit_types::PlanError;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::space::SpaceInformation;

// ────────────────────────────────────────────────────────────────────────────
// RealVectorState
// ────────────────────────────────────────────────────────────────────────────

/// A point in an n-dimensional real vector space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RealVectorState(Vec<f64>);

impl RealVectorState {
    /// Wrap a coordinate vector.
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    /// The origin of an `n`-dimensional space.
    pub fn zeros(n: usize) -> Self {
        Self(vec![0.0; n])
    }

    pub fn values(&self) -> &[f64] {
        &self.0
    }

    pub fn values_mut(&mut self) -> &mut [f64] {
        &mut self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Euclidean norm, i.e. the distance from the origin.
    pub fn norm(&self) -> f64 {
        self.0.iter().map(|v| v * v).sum::<f64>().sqrt()
    }
}

impl From<Vec<f64>> for RealVectorState {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

impl Index<usize> for RealVectorState {
    type Output = f64;

    fn index(&self, axis: usize) -> &f64 {
        &self.0[axis]
    }
}

impl IndexMut<usize> for RealVectorState {
    fn index_mut(&mut self, axis: usize) -> &mut f64 {
        &mut self.0[axis]
    }
}

// ────────────────────────────────────────────────────────────────────────────
// RealVectorBounds
// ────────────────────────────────────────────────────────────────────────────

/// Closed per-axis bounds `[low[i], high[i]]`.
///
/// Only constructible through [`RealVectorBounds::new`], which rejects empty,
/// mismatched, non-finite or inverted intervals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBounds", into = "RawBounds")]
pub struct RealVectorBounds {
    low: Vec<f64>,
    high: Vec<f64>,
}

#[derive(Serialize, Deserialize)]
struct RawBounds {
    low: Vec<f64>,
    high: Vec<f64>,
}

impl TryFrom<RawBounds> for RealVectorBounds {
    type Error = PlanError;

    fn try_from(raw: RawBounds) -> Result<Self, Self::Error> {
        RealVectorBounds::new(raw.low, raw.high)
    }
}

impl From<RealVectorBounds> for RawBounds {
    fn from(b: RealVectorBounds) -> Self {
        RawBounds {
            low: b.low,
            high: b.high,
        }
    }
}

impl RealVectorBounds {
    /// Build bounds from matching `low` and `high` vectors.
    ///
    /// # Errors
    ///
    /// - [`PlanError::ZeroDimension`] when both vectors are empty.
    /// - [`PlanError::DimensionMismatch`] when their lengths differ.
    /// - [`PlanError::InvalidBounds`] for the first axis that is non-finite
    ///   or has `low > high`.
    pub fn new(low: Vec<f64>, high: Vec<f64>) -> Result<Self, PlanError> {
        if low.len() != high.len() {
            return Err(PlanError::DimensionMismatch {
                expected: low.len(),
                actual: high.len(),
            });
        }
        if low.is_empty() {
            return Err(PlanError::ZeroDimension);
        }
        for (axis, (&l, &h)) in low.iter().zip(&high).enumerate() {
            if !l.is_finite() || !h.is_finite() || l > h {
                return Err(PlanError::InvalidBounds {
                    axis,
                    low: l,
                    high: h,
                });
            }
        }
        Ok(Self { low, high })
    }

    /// Bounds of `[low, high]` on every one of `n` axes.
    pub fn uniform(n: usize, low: f64, high: f64) -> Result<Self, PlanError> {
        Self::new(vec![low; n], vec![high; n])
    }

    pub fn low(&self) -> &[f64] {
        &self.low
    }

    pub fn high(&self) -> &[f64] {
        &self.high
    }

    pub fn dimension(&self) -> usize {
        self.low.len()
    }

    /// Length of the interval on each axis.
    pub fn extent(&self) -> Vec<f64> {
        self.low.iter().zip(&self.high).map(|(l, h)| h - l).collect()
    }

    /// Product of the per-axis extents.
    pub fn volume(&self) -> f64 {
        self.extent().iter().product()
    }

    /// True when `values` has the right dimension and lies inside or on the
    /// boundary of every interval.
    pub fn contains(&self, values: &[f64]) -> bool {
        values.len() == self.low.len()
            && values
                .iter()
                .zip(self.low.iter().zip(&self.high))
                .all(|(v, (l, h))| *v >= *l && *v <= *h)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// RealVectorSpace
// ────────────────────────────────────────────────────────────────────────────

/// A bounded Euclidean configuration space.
#[derive(Debug, Clone)]
pub struct RealVectorSpace {
    bounds: RealVectorBounds,
}

impl RealVectorSpace {
    /// Create a space covering `bounds`.
    pub fn new(bounds: RealVectorBounds) -> Self {
        debug!(
            dimension = bounds.dimension(),
            volume = bounds.volume(),
            "real vector space created"
        );
        Self { bounds }
    }

    pub fn bounds(&self) -> &RealVectorBounds {
        &self.bounds
    }

    /// Wrap `values` as a state of this space.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::DimensionMismatch`] when `values` has the wrong
    /// length.  Out-of-bounds values are accepted; bounds are a validity
    /// question, not a representation one.
    pub fn state(&self, values: Vec<f64>) -> Result<RealVectorState, PlanError> {
        if values.len() != self.dimension() {
            return Err(PlanError::DimensionMismatch {
                expected: self.dimension(),
                actual: values.len(),
            });
        }
        Ok(RealVectorState::new(values))
    }
}

impl SpaceInformation for RealVectorSpace {
    type State = RealVectorState;

    fn dimension(&self) -> usize {
        self.bounds.dimension()
    }

    fn alloc_state(&self) -> RealVectorState {
        let mut state = RealVectorState::zeros(self.dimension());
        self.enforce_bounds(&mut state);
        state
    }

    fn satisfies_bounds(&self, state: &RealVectorState) -> bool {
        self.bounds.contains(state.values())
    }

    fn enforce_bounds(&self, state: &mut RealVectorState) {
        for ((v, l), h) in state
            .values_mut()
            .iter_mut()
            .zip(&self.bounds.low)
            .zip(&self.bounds.high)
        {
            *v = v.clamp(*l, *h);
        }
    }

    fn distance(&self, a: &RealVectorState, b: &RealVectorState) -> f64 {
        a.values()
            .iter()
            .zip(b.values())
            .map(|(x, y)| (x - y) * (x - y))
            .sum::<f64>()
            .sqrt()
    }

    fn interpolate(
        &self,
        from: &RealVectorState,
        to: &RealVectorState,
        t: f64,
        out: &mut RealVectorState,
    ) {
        out.0.clear();
        out.0.extend(
            from.values()
                .iter()
                .zip(to.values())
                .map(|(a, b)| a + (b - a) * t),
        );
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
