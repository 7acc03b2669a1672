//! [`ValiditySetup`] – builds a space and its validity checker from
//! [`Config`].
//!
//! The setup owns the [`RealVectorSpace`]; checkers it builds borrow it, so
//! the borrow checker guarantees the space outlives every checker.
//!
//! # Example
//!
//! ```
//! use plankit_runtime::config::{CheckerKind, Config};
//! use plankit_runtime::setup::ValiditySetup;
//! use plankit_space::RealVectorState;
//! use plankit_validity::StateValidityChecker;
//!
//! let config = Config { checker: CheckerKind::Bounds, ..Config::default() };
//! let setup = ValiditySetup::from_config(config).unwrap();
//! let checker = setup.build_checker();
//!
//! assert!(checker.is_valid(&RealVectorState::new(vec![0.5, 0.5])));
//! assert!(!checker.is_valid(&RealVectorState::new(vec![1.5, 0.5])));
//! ```

use plankit_space::{RealVectorBounds, RealVectorSpace, SpaceInformation};
use plankit_types::PlanError;
use plankit_validity::{
    AllValidStateValidityChecker, BoundedChecker, BoxedChecker, InstrumentedChecker,
    StateValidityChecker,
};
use tracing::info;

use crate::config::{self, CheckerKind, Config};

/// A configured space plus the knowledge of which checker to build for it.
#[derive(Debug, Clone)]
pub struct ValiditySetup {
    config: Config,
    space: RealVectorSpace,
}

impl ValiditySetup {
    /// Validate the bounds in `config` and build the space.
    ///
    /// # Errors
    ///
    /// Any [`PlanError`] raised by [`RealVectorBounds::new`].
    pub fn from_config(config: Config) -> Result<Self, PlanError> {
        let bounds = RealVectorBounds::new(config.bounds_low.clone(), config.bounds_high.clone())?;
        let space = RealVectorSpace::new(bounds);
        info!(
            dimension = space.dimension(),
            checker = %config.checker,
            instrument = config.instrument,
            "validity setup created"
        );
        Ok(Self { config, space })
    }

    /// Build from `~/.plankit/config.toml`, or from defaults when the file
    /// does not exist.
    pub fn from_default_config() -> Result<Self, PlanError> {
        let config = config::load()?.unwrap_or_default();
        Self::from_config(config)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn space(&self) -> &RealVectorSpace {
        &self.space
    }

    /// Build the configured checker, wrapped for instrumentation when the
    /// config asks for it.
    pub fn build_checker(&self) -> BoxedChecker<'_, RealVectorSpace> {
        let checker = if self.config.instrument {
            Box::new(self.build_instrumented()) as BoxedChecker<'_, RealVectorSpace>
        } else {
            self.build_plain()
        };
        info!(
            checker = %self.config.checker,
            instrument = self.config.instrument,
            specs = ?checker.specs(),
            "validity checker ready"
        );
        checker
    }

    /// Build the configured checker wrapped in an [`InstrumentedChecker`],
    /// regardless of the `instrument` flag, so the caller can read its stats.
    pub fn build_instrumented(
        &self,
    ) -> InstrumentedChecker<BoxedChecker<'_, RealVectorSpace>> {
        InstrumentedChecker::new(self.build_plain(), self.config.checker.to_string())
    }

    fn build_plain(&self) -> BoxedChecker<'_, RealVectorSpace> {
        match self.config.checker {
            CheckerKind::AllValid => Box::new(AllValidStateValidityChecker::new(&self.space)),
            CheckerKind::Bounds => Box::new(BoundedChecker::new(
                AllValidStateValidityChecker::new(&self.space),
            )),
        }
    }
}
