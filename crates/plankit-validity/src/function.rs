//! [`FnValidityChecker`] – a checker built from plain closures.
//!
//! Most setups only have a validity predicate at hand.  Wrapping it here saves
//! writing a struct and an impl block for every experiment.

use plankit_space::SpaceInformation;
use plankit_types::CheckerSpecs;

use crate::checker::StateValidityChecker;

/// Boxed validity predicate over the states of `S`.
pub type ValidityFn<'a, S> =
    Box<dyn Fn(&<S as SpaceInformation>::State) -> bool + Send + Sync + 'a>;

/// Boxed clearance function over the states of `S`.
pub type ClearanceFn<'a, S> =
    Box<dyn Fn(&<S as SpaceInformation>::State) -> f64 + Send + Sync + 'a>;

/// A [`StateValidityChecker`] whose `is_valid` (and optionally `clearance`)
/// are supplied as closures.
///
/// The closures must be `Send + Sync` because the checker is shared across
/// planner threads.
///
/// # Example
///
/// ```
/// use plankit_space::{RealVectorBounds, RealVectorSpace, RealVectorState};
/// use plankit_validity::{FnValidityChecker, StateValidityChecker};
///
/// let si = RealVectorSpace::new(RealVectorBounds::uniform(1, -5.0, 5.0).unwrap());
/// let checker = FnValidityChecker::new(&si, |s: &RealVectorState| s[0] > 0.0);
///
/// assert!(checker.is_valid(&RealVectorState::new(vec![1.0])));
/// assert!(!checker.is_valid(&RealVectorState::new(vec![-1.0])));
/// ```
pub struct FnValidityChecker<'a, S: SpaceInformation> {
    si: &'a S,
    validity: ValidityFn<'a, S>,
    clearance: Option<ClearanceFn<'a, S>>,
    specs: CheckerSpecs,
}

impl<'a, S: SpaceInformation> FnValidityChecker<'a, S> {
    /// Bind `validity` to the context `si`.
    pub fn new(si: &'a S, validity: impl Fn(&S::State) -> bool + Send + Sync + 'a) -> Self {
        Self {
            si,
            validity: Box::new(validity),
            clearance: None,
            specs: CheckerSpecs::NONE,
        }
    }

    /// Also answer clearance queries with `clearance`.
    ///
    /// This does not touch the advertised specs; declare what the function
    /// actually computes with [`with_specs`][Self::with_specs].
    pub fn with_clearance(
        mut self,
        clearance: impl Fn(&S::State) -> f64 + Send + Sync + 'a,
    ) -> Self {
        self.clearance = Some(Box::new(clearance));
        self
    }

    /// Set the advertised capabilities.
    pub fn with_specs(mut self, specs: CheckerSpecs) -> Self {
        self.specs = specs;
        self
    }
}

impl<S: SpaceInformation> StateValidityChecker<S> for FnValidityChecker<'_, S> {
    fn space_information(&self) -> &S {
        self.si
    }

    fn is_valid(&self, state: &S::State) -> bool {
        (self.validity)(state)
    }

    fn clearance(&self, state: &S::State) -> f64 {
        match &self.clearance {
            Some(f) => f(state),
            None => 0.0,
        }
    }

    fn specs(&self) -> &CheckerSpecs {
        &self.specs
    }
}
