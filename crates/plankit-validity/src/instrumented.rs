//! [`InstrumentedChecker`] – counts and traces the queries made against a
//! checker.
//!
//! Planners issue millions of validity queries per run.  Wrapping the
//! configured checker here shows how many were made, how many passed and how
//! often clearance was requested, without touching the checker itself.
//! Counters are relaxed atomics, so the wrapper stays lock-free and can be
//! shared across planner threads like any other checker.
//!
//! Every query also emits a `TRACE` event on the `plankit_validity`
//! target; enable it with `RUST_LOG=plankit_validity=trace`.

use std::sync::atomic::{AtomicU64, Ordering};

use plankit_space::SpaceInformation;
use plankit_types::{CheckerSpecs, GradientClearance};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::checker::StateValidityChecker;

/// Snapshot of the counters of an [`InstrumentedChecker`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckerStats {
    /// Validity queries of any shape.
    pub checks: u64,
    /// Validity queries that returned `true`.
    pub valid: u64,
    /// Queries that asked for a clearance, fused or standalone.
    pub clearance_queries: u64,
}

impl CheckerStats {
    pub fn invalid(&self) -> u64 {
        self.checks.saturating_sub(self.valid)
    }

    /// Fraction of validity queries that passed; `0.0` before the first query.
    pub fn valid_ratio(&self) -> f64 {
        if self.checks == 0 {
            0.0
        } else {
            self.valid as f64 / self.checks as f64
        }
    }
}

/// Forwards every query to `inner`, counting and tracing it on the way.
pub struct InstrumentedChecker<C> {
    inner: C,
    label: String,
    checks: AtomicU64,
    valid: AtomicU64,
    clearance_queries: AtomicU64,
}

impl<C> InstrumentedChecker<C> {
    /// Wrap `inner`; `label` identifies it in trace output.
    pub fn new(inner: C, label: impl Into<String>) -> Self {
        Self {
            inner,
            label: label.into(),
            checks: AtomicU64::new(0),
            valid: AtomicU64::new(0),
            clearance_queries: AtomicU64::new(0),
        }
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Current counter values.
    ///
    /// Counters are read one after another, so a snapshot taken while other
    /// threads are querying may mix values from slightly different moments.
    /// `valid` never exceeds `checks` in a snapshot.
    pub fn stats(&self) -> CheckerStats {
        let valid = self.valid.load(Ordering::Relaxed);
        let checks = self.checks.load(Ordering::Relaxed);
        CheckerStats {
            checks,
            valid: valid.min(checks),
            clearance_queries: self.clearance_queries.load(Ordering::Relaxed),
        }
    }

    /// Zero all counters.
    pub fn reset(&self) {
        self.checks.store(0, Ordering::Relaxed);
        self.valid.store(0, Ordering::Relaxed);
        self.clearance_queries.store(0, Ordering::Relaxed);
    }

    fn record_check(&self, valid: bool) {
        self.checks.fetch_add(1, Ordering::Relaxed);
        if valid {
            self.valid.fetch_add(1, Ordering::Relaxed);
        }
    }

    fn record_clearance(&self) {
        self.clearance_queries.fetch_add(1, Ordering::Relaxed);
    }
}

impl<S: SpaceInformation, C: StateValidityChecker<S>> StateValidityChecker<S>
    for InstrumentedChecker<C>
{
    fn space_information(&self) -> &S {
        self.inner.space_information()
    }

    fn is_valid(&self, state: &S::State) -> bool {
        let valid = self.inner.is_valid(state);
        self.record_check(valid);
        trace!(checker = %self.label, ?state, valid, "is_valid");
        valid
    }

    fn is_valid_with_clearance(&self, state: &S::State) -> (bool, f64) {
        let (valid, distance) = self.inner.is_valid_with_clearance(state);
        self.record_check(valid);
        self.record_clearance();
        trace!(checker = %self.label, ?state, valid, distance, "is_valid_with_clearance");
        (valid, distance)
    }

    fn is_valid_with_gradient(
        &self,
        state: &S::State,
        gradient: &mut S::State,
    ) -> (bool, GradientClearance) {
        let (valid, report) = self.inner.is_valid_with_gradient(state, gradient);
        self.record_check(valid);
        self.record_clearance();
        trace!(
            checker = %self.label,
            ?state,
            valid,
            distance = report.distance,
            gradient_available = report.gradient_available,
            "is_valid_with_gradient"
        );
        (valid, report)
    }

    fn clearance(&self, state: &S::State) -> f64 {
        let distance = self.inner.clearance(state);
        self.record_clearance();
        trace!(checker = %self.label, ?state, distance, "clearance");
        distance
    }

    fn clearance_with_gradient(
        &self,
        state: &S::State,
        gradient: &mut S::State,
    ) -> GradientClearance {
        let report = self.inner.clearance_with_gradient(state, gradient);
        self.record_clearance();
        trace!(
            checker = %self.label,
            ?state,
            distance = report.distance,
            gradient_available = report.gradient_available,
            "clearance_with_gradient"
        );
        report
    }

    fn specs(&self) -> &CheckerSpecs {
        self.inner.specs()
    }
}
