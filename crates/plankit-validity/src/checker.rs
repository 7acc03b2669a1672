//! [`StateValidityChecker`] – the contract planners use to ask whether a state
//! is valid.
//!
//! Only [`is_valid`][StateValidityChecker::is_valid] is mandatory.  Every
//! richer query has a default body written in terms of a simpler one:
//!
//! ```text
//! is_valid_with_gradient ──► clearance_with_gradient ──► clearance (0.0)
//!          │
//!          └──────────────► is_valid
//! is_valid_with_clearance ─► clearance, is_valid
//! ```
//!
//! A checker that only knows validity therefore answers every call shape,
//! and a checker that overrides `clearance` upgrades both `is_valid_with_*`
//! queries for free.  Override the fused queries only when computing validity
//! and distance together is cheaper than computing them apart.
//!
//! # Clearance sign convention
//!
//! A non-negative clearance means the state is valid and that far from the
//! nearest invalid state.  A negative clearance means the state is invalid
//! and its magnitude is the penetration depth.  The default `0.0` means "no
//! information", not "on the boundary".
//!
//! # Thread safety
//!
//! Planners call the same checker from several worker threads without
//! locking, hence the `Send + Sync` supertraits.  Any cache or scratch space a
//! concrete checker keeps must be synchronised or thread-local.

use std::sync::Arc;

use plankit_space::SpaceInformation;
use plankit_types::{CheckerSpecs, GradientClearance};
use tracing::debug;

// ────────────────────────────────────────────────────────────────────────────
// StateValidityChecker trait
// ────────────────────────────────────────────────────────────────────────────

/// Decides whether states of the space `S` satisfy all modeled constraints.
///
/// None of the queries can fail.  Passing a state that was not drawn from the
/// bound context is a precondition violation and the result is unspecified.
///
/// # Example
///
/// ```
/// use plankit_space::{RealVectorBounds, RealVectorSpace, RealVectorState};
/// use plankit_validity::StateValidityChecker;
///
/// /// Everything within distance 5 of the origin is free space.
/// struct Disc<'a> {
///     si: &'a RealVectorSpace,
/// }
///
/// impl StateValidityChecker<RealVectorSpace> for Disc<'_> {
///     fn space_information(&self) -> &RealVectorSpace {
///         self.si
///     }
///
///     fn is_valid(&self, state: &RealVectorState) -> bool {
///         self.clearance(state) >= 0.0
///     }
///
///     fn clearance(&self, state: &RealVectorState) -> f64 {
///         5.0 - state.norm()
///     }
/// }
///
/// let si = RealVectorSpace::new(RealVectorBounds::uniform(2, -10.0, 10.0).unwrap());
/// let checker = Disc { si: &si };
///
/// let (valid, dist) = checker.is_valid_with_clearance(&RealVectorState::new(vec![3.0, 0.0]));
/// assert!(valid);
/// assert!((dist - 2.0).abs() < 1e-12);
/// ```
pub trait StateValidityChecker<S: SpaceInformation>: Send + Sync {
    /// The context this checker was bound to at construction.
    fn space_information(&self) -> &S;

    /// Return `true` when `state` is valid.
    ///
    /// Usually this means at least collision checking.  If interpolation or
    /// propagation can produce states outside the bounds of the space, this
    /// should also consult [`SpaceInformation::satisfies_bounds`].
    fn is_valid(&self, state: &S::State) -> bool;

    /// Return validity together with the clearance of `state`.
    fn is_valid_with_clearance(&self, state: &S::State) -> (bool, f64) {
        let distance = self.clearance(state);
        (self.is_valid(state), distance)
    }

    /// Return validity together with the clearance of `state`, writing an
    /// escape direction into `gradient` when one is available.
    ///
    /// `gradient` is only touched when the returned report says
    /// `gradient_available`.
    fn is_valid_with_gradient(
        &self,
        state: &S::State,
        gradient: &mut S::State,
    ) -> (bool, GradientClearance) {
        let report = self.clearance_with_gradient(state, gradient);
        (self.is_valid(state), report)
    }

    /// Distance from `state` to the nearest invalid state; negative values are
    /// penetration depth.  Defaults to `0.0`, i.e. unknown.
    fn clearance(&self, _state: &S::State) -> f64 {
        0.0
    }

    /// Clearance of `state` plus, if available, the direction in the tangent
    /// space of `state` that moves away from invalidity.
    fn clearance_with_gradient(
        &self,
        state: &S::State,
        _gradient: &mut S::State,
    ) -> GradientClearance {
        GradientClearance::distance_only(self.clearance(state))
    }

    /// The capabilities this checker advertises.  Defaults to none.
    fn specs(&self) -> &CheckerSpecs {
        &CheckerSpecs::NONE
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Forwarding impls for pointer types
// ────────────────────────────────────────────────────────────────────────────

macro_rules! forward_checker {
    ($($ptr:ty),+) => {$(
        impl<S: SpaceInformation, C: StateValidityChecker<S> + ?Sized> StateValidityChecker<S>
            for $ptr
        {
            fn space_information(&self) -> &S {
                (**self).space_information()
            }

            fn is_valid(&self, state: &S::State) -> bool {
                (**self).is_valid(state)
            }

            fn is_valid_with_clearance(&self, state: &S::State) -> (bool, f64) {
                (**self).is_valid_with_clearance(state)
            }

            fn is_valid_with_gradient(
                &self,
                state: &S::State,
                gradient: &mut S::State,
            ) -> (bool, GradientClearance) {
                (**self).is_valid_with_gradient(state, gradient)
            }

            fn clearance(&self, state: &S::State) -> f64 {
                (**self).clearance(state)
            }

            fn clearance_with_gradient(
                &self,
                state: &S::State,
                gradient: &mut S::State,
            ) -> GradientClearance {
                (**self).clearance_with_gradient(state, gradient)
            }

            fn specs(&self) -> &CheckerSpecs {
                (**self).specs()
            }
        }
    )+};
}

forward_checker!(&C, Box<C>, Arc<C>);

// ────────────────────────────────────────────────────────────────────────────
// AllValidStateValidityChecker
// ────────────────────────────────────────────────────────────────────────────

/// The simplest checker: every state is valid.
///
/// Use it to switch constraint filtering off, e.g. in tests or when validity
/// is already enforced upstream.  All clearance and gradient queries keep
/// their defaults.
pub struct AllValidStateValidityChecker<'a, S: SpaceInformation> {
    si: &'a S,
}

impl<'a, S: SpaceInformation> AllValidStateValidityChecker<'a, S> {
    pub fn new(si: &'a S) -> Self {
        debug!("all-valid checker bound; constraint filtering disabled");
        Self { si }
    }
}

impl<S: SpaceInformation> StateValidityChecker<S> for AllValidStateValidityChecker<'_, S> {
    fn space_information(&self) -> &S {
        self.si
    }

    fn is_valid(&self, _state: &S::State) -> bool {
        true
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
