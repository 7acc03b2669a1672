//! [`AllOfChecker`] – a state is valid only if every member checker agrees.
//!
//! Members are evaluated in insertion order and `is_valid` stops at the first
//! rejection, so put cheap checks (bounds, joint limits) before expensive
//! ones (collision).  Clearance is the minimum over all members: the nearest
//! invalid state of the conjunction is the nearest one of any member.

use plankit_space::SpaceInformation;
use plankit_types::{CheckerSpecs, GradientClearance};
use tracing::{debug, warn};

use crate::checker::StateValidityChecker;

/// A member of an [`AllOfChecker`].
pub type BoxedChecker<'a, S> = Box<dyn StateValidityChecker<S> + 'a>;

/// Conjunction of several checkers bound to the same context.
///
/// The advertised specs are the intersection of the members' specs: the
/// composite can only promise what every member promises.  An empty composite
/// accepts every state, reports clearance `0.0` and advertises nothing.
///
/// # Example
///
/// ```
/// use plankit_space::{RealVectorBounds, RealVectorSpace, RealVectorState};
/// use plankit_validity::{AllOfChecker, FnValidityChecker, StateValidityChecker};
///
/// let si = RealVectorSpace::new(RealVectorBounds::uniform(1, -10.0, 10.0).unwrap());
///
/// let mut checker = AllOfChecker::new(&si);
/// checker.add_checker(Box::new(FnValidityChecker::new(&si, |s: &RealVectorState| s[0] > -1.0)));
/// checker.add_checker(Box::new(FnValidityChecker::new(&si, |s: &RealVectorState| s[0] < 1.0)));
///
/// assert!(checker.is_valid(&RealVectorState::new(vec![0.0])));
/// assert!(!checker.is_valid(&RealVectorState::new(vec![2.0])));
/// ```
pub struct AllOfChecker<'a, S: SpaceInformation> {
    si: &'a S,
    members: Vec<BoxedChecker<'a, S>>,
    specs: CheckerSpecs,
}

impl<'a, S: SpaceInformation> AllOfChecker<'a, S> {
    /// Create an empty composite bound to `si`.
    pub fn new(si: &'a S) -> Self {
        Self {
            si,
            members: Vec::new(),
            specs: CheckerSpecs::NONE,
        }
    }

    /// Append `checker`.  Members are evaluated in insertion order.
    ///
    /// Call this while setting the planner up; the advertised specs change
    /// with every added member.
    pub fn add_checker(&mut self, checker: BoxedChecker<'a, S>) {
        if !std::ptr::eq(checker.space_information(), self.si) {
            warn!("member checker is bound to a different context than its composite");
        }
        self.specs = if self.members.is_empty() {
            *checker.specs()
        } else {
            self.specs.intersect(checker.specs())
        };
        self.members.push(checker);
        debug!(members = self.members.len(), specs = ?self.specs, "checker added to composite");
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl<S: SpaceInformation> StateValidityChecker<S> for AllOfChecker<'_, S> {
    fn space_information(&self) -> &S {
        self.si
    }

    fn is_valid(&self, state: &S::State) -> bool {
        self.members.iter().all(|m| m.is_valid(state))
    }

    fn is_valid_with_clearance(&self, state: &S::State) -> (bool, f64) {
        let mut valid = true;
        let mut nearest: Option<f64> = None;
        for member in &self.members {
            let (member_valid, distance) = member.is_valid_with_clearance(state);
            valid &= member_valid;
            nearest = Some(nearest.map_or(distance, |d| d.min(distance)));
        }
        (valid, nearest.unwrap_or(0.0))
    }

    fn clearance(&self, state: &S::State) -> f64 {
        self.members
            .iter()
            .map(|m| m.clearance(state))
            .reduce(f64::min)
            .unwrap_or(0.0)
    }

    /// Report of the member with the smallest clearance; its gradient (if
    /// any) is the one written into `gradient`.
    fn clearance_with_gradient(
        &self,
        state: &S::State,
        gradient: &mut S::State,
    ) -> GradientClearance {
        let mut nearest: Option<(GradientClearance, S::State)> = None;
        for member in &self.members {
            let mut scratch = gradient.clone();
            let report = member.clearance_with_gradient(state, &mut scratch);
            let closer = nearest
                .as_ref()
                .is_none_or(|(best, _)| report.distance < best.distance);
            if closer {
                nearest = Some((report, scratch));
            }
        }
        match nearest {
            Some((report, scratch)) => {
                if report.gradient_available {
                    *gradient = scratch;
                }
                report
            }
            None => GradientClearance::distance_only(0.0),
        }
    }

    fn specs(&self) -> &CheckerSpecs {
        &self.specs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use plankit_space::{RealVectorBounds, RealVectorSpace, RealVectorState};

    use crate::checker::AllValidStateValidityChecker;
    use crate::function::FnValidityChecker;

    fn line() -> RealVectorSpace {
        RealVectorSpace::new(RealVectorBounds::uniform(1, -10.0, 10.0).unwrap())
    }

    fn at(x: f64) -> RealVectorState {
        RealVectorState::new(vec![x])
    }

    /// Clearance `offset - |x|`; gradient points toward the origin.
    struct Well<'a> {
        si: &'a RealVectorSpace,
        offset: f64,
        specs: CheckerSpecs,
    }

    impl<'a> Well<'a> {
        fn new(si: &'a RealVectorSpace, offset: f64) -> Self {
            Self {
                si,
                offset,
                specs: CheckerSpecs {
                    has_exact_clearance: true,
                    has_gradient_computation: true,
                    ..CheckerSpecs::NONE
                },
            }
        }
    }

    impl StateValidityChecker<RealVectorSpace> for Well<'_> {
        fn space_information(&self) -> &RealVectorSpace {
            self.si
        }

        fn is_valid(&self, state: &RealVectorState) -> bool {
            self.clearance(state) >= 0.0
        }

        fn clearance(&self, state: &RealVectorState) -> f64 {
            self.offset - state[0].abs()
        }

        fn clearance_with_gradient(
            &self,
            state: &RealVectorState,
            gradient: &mut RealVectorState,
        ) -> GradientClearance {
            gradient[0] = -state[0].signum() * self.offset;
            GradientClearance {
                distance: self.clearance(state),
                gradient_available: true,
            }
        }

        fn specs(&self) -> &CheckerSpecs {
            &self.specs
        }
    }

    #[test]
    fn empty_composite_accepts_everything() {
        let si = line();
        let checker = AllOfChecker::new(&si);
        assert!(checker.is_empty());
        assert!(checker.is_valid(&at(3.0)));
        assert_eq!(checker.clearance(&at(3.0)), 0.0);
        assert_eq!(checker.is_valid_with_clearance(&at(3.0)), (true, 0.0));
        assert_eq!(*checker.specs(), CheckerSpecs::NONE);
    }

    #[test]
    fn first_failing_member_short_circuits() {
        let si = line();
        let later_calls = AtomicUsize::new(0);
        let mut checker = AllOfChecker::new(&si);
        checker.add_checker(Box::new(FnValidityChecker::new(&si, |s: &RealVectorState| {
            s[0] >= 0.0
        })));
        checker.add_checker(Box::new(FnValidityChecker::new(&si, |_: &RealVectorState| {
            later_calls.fetch_add(1, Ordering::Relaxed);
            true
        })));

        assert!(!checker.is_valid(&at(-1.0)));
        assert_eq!(later_calls.load(Ordering::Relaxed), 0);

        assert!(checker.is_valid(&at(1.0)));
        assert_eq!(later_calls.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn clearance_is_minimum_over_members() {
        let si = line();
        let mut checker = AllOfChecker::new(&si);
        checker.add_checker(Box::new(Well::new(&si, 5.0)));
        checker.add_checker(Box::new(Well::new(&si, 2.0)));

        assert!((checker.clearance(&at(1.0)) - 1.0).abs() < 1e-12);

        let (valid, distance) = checker.is_valid_with_clearance(&at(3.0));
        assert!(!valid);
        assert!((distance + 1.0).abs() < 1e-12);
    }

    #[test]
    fn gradient_comes_from_nearest_member() {
        let si = line();
        let mut checker = AllOfChecker::new(&si);
        checker.add_checker(Box::new(Well::new(&si, 5.0)));
        checker.add_checker(Box::new(Well::new(&si, 2.0)));

        let mut gradient = at(0.0);
        let (valid, report) = checker.is_valid_with_gradient(&at(1.0), &mut gradient);
        assert!(valid);
        assert!(report.gradient_available);
        assert!((report.distance - 1.0).abs() < 1e-12);
        // The offset-2 well is nearer, so its scaled gradient wins.
        assert_eq!(gradient, at(-2.0));
    }

    #[test]
    fn gradient_slot_untouched_when_nearest_has_none() {
        let si = line();
        let mut checker = AllOfChecker::new(&si);
        checker.add_checker(Box::new(Well::new(&si, 5.0)));
        checker.add_checker(Box::new(
            FnValidityChecker::new(&si, |_: &RealVectorState| true)
                .with_clearance(|_: &RealVectorState| 0.5),
        ));

        let mut gradient = at(7.0);
        let report = checker.clearance_with_gradient(&at(1.0), &mut gradient);
        assert_eq!(report, GradientClearance::distance_only(0.5));
        assert_eq!(gradient, at(7.0));
    }

    #[test]
    fn specs_are_intersection_of_members() {
        let si = line();
        let mut checker = AllOfChecker::new(&si);
        checker.add_checker(Box::new(Well::new(&si, 5.0)));
        assert!(checker.specs().has_exact_clearance);
        assert!(checker.specs().has_gradient_computation);

        checker.add_checker(Box::new(AllValidStateValidityChecker::new(&si)));
        assert_eq!(*checker.specs(), CheckerSpecs::NONE);
        assert_eq!(checker.len(), 2);
    }
}
