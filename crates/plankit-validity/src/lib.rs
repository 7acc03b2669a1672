//! `plankit-validity` – State validity checking
//!
//! Planners, samplers and local planners never compute validity themselves;
//! they ask a [`StateValidityChecker`] bound to their space.
//!
//! # Modules
//!
//! - [`checker`] – [`StateValidityChecker`][checker::StateValidityChecker]:
//!   the contract.  One mandatory query (`is_valid`) plus clearance and
//!   gradient queries whose defaults fall back on simpler ones.  Also
//!   [`AllValidStateValidityChecker`][checker::AllValidStateValidityChecker],
//!   which accepts every state.
//! - [`function`] – [`FnValidityChecker`][function::FnValidityChecker]:
//!   builds a checker from a validity closure and an optional clearance
//!   closure.
//! - [`bounded`] – [`BoundedChecker`][bounded::BoundedChecker]: rejects states
//!   outside the bounds of the space before consulting the wrapped checker.
//! - [`composite`] – [`AllOfChecker`][composite::AllOfChecker]: conjunction of
//!   several checkers, with minimum clearance and intersected specs.
//! - [`instrumented`] – [`InstrumentedChecker`][instrumented::InstrumentedChecker]:
//!   counts and traces every query made against the wrapped checker.

pub mod bounded;
pub mod checker;
pub mod composite;
pub mod function;
pub mod instrumented;

pub use bounded::BoundedChecker;
pub use checker::{AllValidStateValidityChecker, StateValidityChecker};
pub use composite::{AllOfChecker, BoxedChecker};
pub use function::{ClearanceFn, FnValidityChecker, ValidityFn};
pub use instrumented::{CheckerStats, InstrumentedChecker};

pub use plankit_types::{CheckerSpecs, GradientClearance};
