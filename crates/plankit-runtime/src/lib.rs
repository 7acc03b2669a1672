//! `plankit-runtime` – configuration, logging and setup
//!
//! Everything a planning process needs around the checker contract before
//! the first validity query is issued.
//!
//! # Modules
//!
//! - [`config`] – [`Config`][config::Config]: reads and writes
//!   `~/.plankit/config.toml` (space bounds, checker kind, instrumentation,
//!   log format) with `PLANKIT_*` environment overrides.
//! - [`telemetry`] – [`init_tracing`][telemetry::init_tracing]: installs the
//!   global `tracing` subscriber with an `EnvFilter` and a compact or JSON
//!   formatter.
//! - [`setup`] – [`ValiditySetup`][setup::ValiditySetup]: builds the
//!   [`RealVectorSpace`][plankit_space::RealVectorSpace] and the configured
//!   [`StateValidityChecker`][plankit_validity::StateValidityChecker] bound
//!   to it.

pub mod config;
pub mod setup;
pub mod telemetry;

pub use config::{CheckerKind, Config, LogFormat};
pub use setup::ValiditySetup;
pub use telemetry::init_tracing;
