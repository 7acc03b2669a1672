//! [`BoundedChecker`] – adds a bounds test in front of another checker.
//!
//! Interpolation and control propagation can produce states outside the
//! bounds of the space.  Checkers that do not test bounds themselves can be
//! wrapped here instead of repeating the test in every implementation.

use plankit_space::SpaceInformation;
use plankit_types::{CheckerSpecs, GradientClearance};

use crate::checker::StateValidityChecker;

/// Rejects states that fail [`SpaceInformation::satisfies_bounds`] and
/// defers everything else to the wrapped checker.
///
/// Clearance comes from the wrapped checker.  For an out-of-bounds state it
/// is capped at `0.0`, so a rejected state never reports positive clearance.
pub struct BoundedChecker<C> {
    inner: C,
}

impl<C> BoundedChecker<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }

    pub fn into_inner(self) -> C {
        self.inner
    }

    fn in_bounds<S>(&self, state: &S::State) -> bool
    where
        S: SpaceInformation,
        C: StateValidityChecker<S>,
    {
        self.inner.space_information().satisfies_bounds(state)
    }
}

impl<S: SpaceInformation, C: StateValidityChecker<S>> StateValidityChecker<S>
    for BoundedChecker<C>
{
    fn space_information(&self) -> &S {
        self.inner.space_information()
    }

    fn is_valid(&self, state: &S::State) -> bool {
        self.in_bounds::<S>(state) && self.inner.is_valid(state)
    }

    fn is_valid_with_clearance(&self, state: &S::State) -> (bool, f64) {
        let (valid, distance) = self.inner.is_valid_with_clearance(state);
        if self.in_bounds::<S>(state) {
            (valid, distance)
        } else {
            (false, distance.min(0.0))
        }
    }

    fn is_valid_with_gradient(
        &self,
        state: &S::State,
        gradient: &mut S::State,
    ) -> (bool, GradientClearance) {
        let (valid, mut report) = self.inner.is_valid_with_gradient(state, gradient);
        if self.in_bounds::<S>(state) {
            (valid, report)
        } else {
            report.distance = report.distance.min(0.0);
            (false, report)
        }
    }

    fn clearance(&self, state: &S::State) -> f64 {
        let distance = self.inner.clearance(state);
        if self.in_bounds::<S>(state) {
            distance
        } else {
            distance.min(0.0)
        }
    }

    fn clearance_with_gradient(
        &self,
        state: &S::State,
        gradient: &mut S::State,
    ) -> GradientClearance {
        let mut report = self.inner.clearance_with_gradient(state, gradient);
        if !self.in_bounds::<S>(state) {
            report.distance = report.distance.min(0.0);
        }
        report
    }

    fn specs(&self) -> &CheckerSpecs {
        self.inner.specs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plankit_space::{RealVectorBounds, RealVectorSpace, RealVectorState};

    use crate::checker::AllValidStateValidityChecker;
    use crate::function::FnValidityChecker;

    fn unit_square() -> RealVectorSpace {
        RealVectorSpace::new(RealVectorBounds::uniform(2, 0.0, 1.0).unwrap())
    }

    fn at(x: f64, y: f64) -> RealVectorState {
        RealVectorState::new(vec![x, y])
    }

    #[test]
    fn out_of_bounds_state_is_invalid() {
        let si = unit_square();
        let checker = BoundedChecker::new(AllValidStateValidityChecker::new(&si));
        assert!(checker.is_valid(&at(0.5, 0.5)));
        assert!(checker.is_valid(&at(1.0, 0.0)));
        assert!(!checker.is_valid(&at(1.5, 0.5)));
        assert!(!checker.is_valid(&at(0.5, -0.1)));
    }

    #[test]
    fn inner_verdict_still_applies_in_bounds() {
        let si = unit_square();
        let checker =
            BoundedChecker::new(FnValidityChecker::new(&si, |s: &RealVectorState| s[0] < 0.5));
        assert!(checker.is_valid(&at(0.2, 0.2)));
        assert!(!checker.is_valid(&at(0.8, 0.2)));
    }

    #[test]
    fn fused_query_combines_bounds_and_inner_clearance() {
        let si = unit_square();
        let checker = BoundedChecker::new(
            FnValidityChecker::new(&si, |_: &RealVectorState| true)
                .with_clearance(|s: &RealVectorState| 1.0 - s[0]),
        );

        let (valid, distance) = checker.is_valid_with_clearance(&at(0.25, 0.5));
        assert!(valid);
        assert!((distance - 0.75).abs() < 1e-12);

        let (valid, distance) = checker.is_valid_with_clearance(&at(2.0, 0.5));
        assert!(!valid);
        assert!((distance + 1.0).abs() < 1e-12);
    }

    #[test]
    fn out_of_bounds_clearance_is_never_positive() {
        let si = unit_square();
        let checker = BoundedChecker::new(
            FnValidityChecker::new(&si, |_: &RealVectorState| true)
                .with_clearance(|s: &RealVectorState| 1.0 - s[0]),
        );

        // Only the y axis is violated; the inner clearance alone would be 0.5.
        let outside = at(0.5, 2.0);
        assert_eq!(checker.is_valid_with_clearance(&outside), (false, 0.0));
        assert_eq!(checker.clearance(&outside), 0.0);

        let mut gradient = at(0.0, 0.0);
        let (valid, report) = checker.is_valid_with_gradient(&outside, &mut gradient);
        assert!(!valid);
        assert_eq!(report.distance, 0.0);
        assert_eq!(checker.clearance_with_gradient(&outside, &mut gradient).distance, 0.0);

        assert!((checker.clearance(&at(0.5, 0.5)) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn into_inner_returns_wrapped_checker() {
        let si = unit_square();
        let inner = BoundedChecker::new(AllValidStateValidityChecker::new(&si)).into_inner();
        assert!(inner.is_valid(&at(5.0, 5.0)));
    }

    #[test]
    fn gradient_query_rejects_out_of_bounds() {
        let si = unit_square();
        let checker = BoundedChecker::new(AllValidStateValidityChecker::new(&si));
        let mut gradient = at(0.0, 0.0);
        let (valid, report) = checker.is_valid_with_gradient(&at(-1.0, 0.0), &mut gradient);
        assert!(!valid);
        assert!(!report.gradient_available);
    }

    #[test]
    fn specs_and_context_come_from_inner() {
        let si = unit_square();
        let specs = CheckerSpecs {
            has_exact_clearance: true,
            ..CheckerSpecs::NONE
        };
        let checker = BoundedChecker::new(
            FnValidityChecker::new(&si, |_: &RealVectorState| true).with_specs(specs),
        );
        assert_eq!(*checker.specs(), specs);
        assert!(std::ptr::eq(checker.space_information(), &si));
    }
}
