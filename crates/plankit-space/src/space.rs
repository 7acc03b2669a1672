//! [`SpaceInformation`] – the context a validity checker is bound to.
//!
//! A context owns the representation of states and the metadata that goes
//! with it (dimension, bounds, interpolation).  Checkers hold a shared
//! borrow of their context and never mutate it, so a context must outlive
//! every checker built on top of it.  The borrow checker enforces that.

use std::fmt::Debug;

/// Global metadata for one configuration space.
///
/// Implementations must be safe to share across threads: planners hand the
/// same context to parallel samplers and local planners.
pub trait SpaceInformation: Send + Sync {
    /// The state representation of this space.
    type State: Clone + Debug + Send + Sync;

    /// Number of degrees of freedom.
    fn dimension(&self) -> usize;

    /// Allocate a fresh state that lies inside the bounds of the space.
    fn alloc_state(&self) -> Self::State;

    /// True when `state` lies within the bounds of the space.
    ///
    /// A state that does not belong to this space (e.g. one of the wrong
    /// dimension) is reported as out of bounds.
    fn satisfies_bounds(&self, state: &Self::State) -> bool;

    /// Bring `state` back inside the bounds of the space.
    fn enforce_bounds(&self, state: &mut Self::State);

    /// Distance between two states.
    fn distance(&self, a: &Self::State, b: &Self::State) -> f64;

    /// Write the state at fraction `t ∈ [0, 1]` along the segment from `from`
    /// to `to` into `out`.
    fn interpolate(&self, from: &Self::State, to: &Self::State, t: f64, out: &mut Self::State);
}
