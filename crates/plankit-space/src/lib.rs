//! `plankit-space` – the space-information context that checkers are bound
//! to.
//!
//! # Modules
//!
//! - [`space`] – [`SpaceInformation`][space::SpaceInformation]: the trait a
//!   context implements.  It owns the state representation and answers
//!   dimension, bounds, distance and interpolation questions.
//! - [`real_vector`] – [`RealVectorSpace`][real_vector::RealVectorSpace]: a
//!   bounded Euclidean space whose states are plain `f64` vectors.

pub mod real_vector;
pub mod space;

pub use real_vector::{RealVectorBounds, RealVectorSpace, RealVectorState};
pub use space::SpaceInformation;
