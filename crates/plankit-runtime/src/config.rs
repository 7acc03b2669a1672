//! Configuration – reads/writes `~/.plankit/config.toml`.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use plankit_types::PlanError;
use serde::{Deserialize, Serialize};

/// Which validity checker a setup builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckerKind {
    /// Every state is valid.
    #[default]
    AllValid,
    /// A state is valid iff it lies within the bounds of the space.
    Bounds,
}

impl fmt::Display for CheckerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckerKind::AllValid => write!(f, "all_valid"),
            CheckerKind::Bounds => write!(f, "bounds"),
        }
    }
}

impl FromStr for CheckerKind {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all_valid" | "all-valid" => Ok(CheckerKind::AllValid),
            "bounds" => Ok(CheckerKind::Bounds),
            other => Err(PlanError::UnknownChecker(other.to_string())),
        }
    }
}

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

impl FromStr for LogFormat {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            other => Err(PlanError::Config(format!("unknown log format '{other}'"))),
        }
    }
}

/// Persisted configuration stored in `~/.plankit/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Lower bound of every axis of the space.
    #[serde(default = "default_bounds_low")]
    pub bounds_low: Vec<f64>,

    /// Upper bound of every axis of the space.
    #[serde(default = "default_bounds_high")]
    pub bounds_high: Vec<f64>,

    /// Checker built by [`ValiditySetup`][crate::setup::ValiditySetup].
    #[serde(default)]
    pub checker: CheckerKind,

    /// Wrap the checker in an
    /// [`InstrumentedChecker`][plankit_validity::InstrumentedChecker].
    #[serde(default)]
    pub instrument: bool,

    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_bounds_low() -> Vec<f64> {
    vec![0.0, 0.0]
}
fn default_bounds_high() -> Vec<f64> {
    vec![1.0, 1.0]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bounds_low: default_bounds_low(),
            bounds_high: default_bounds_high(),
            checker: CheckerKind::default(),
            instrument: false,
            log_format: LogFormat::default(),
        }
    }
}

/// Return the path to `~/.plankit/config.toml`.
pub fn config_path() -> PathBuf {
    config_path_for_home(
        &std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .unwrap_or_else(|_| ".".to_string()),
    )
}

/// Build the config path relative to the given home directory.
pub(crate) fn config_path_for_home(home: &str) -> PathBuf {
    PathBuf::from(home).join(".plankit").join("config.toml")
}

/// Load the config from disk.  Returns `None` if the file does not exist.
pub fn load() -> Result<Option<Config>, PlanError> {
    load_from(&config_path())
}

/// Load the config from a specific path, then apply environment overrides.
///
/// | Variable | Config field |
/// |---|---|
/// | `PLANKIT_CHECKER` | `checker` (`all_valid` or `bounds`) |
/// | `PLANKIT_INSTRUMENT` | `instrument` (`true`/`false`/`1`/`0`) |
/// | `PLANKIT_LOG_FORMAT` | `log_format` (`compact` or `json`) |
///
/// Values that do not parse are ignored.
pub fn load_from(path: &Path) -> Result<Option<Config>, PlanError> {
    load_from_with(path, |key| std::env::var(key).ok())
}

/// Load the config from `path`, then apply overrides looked up through `var`.
pub(crate) fn load_from_with(
    path: &Path,
    var: impl Fn(&str) -> Option<String>,
) -> Result<Option<Config>, PlanError> {
    if !path.exists() {
        return Ok(None);
    }
    let raw = fs::read_to_string(path).map_err(|e| {
        PlanError::Config(format!("failed to read {}: {}", path.display(), e))
    })?;
    let mut cfg: Config = toml::from_str(&raw)
        .map_err(|e| PlanError::Config(format!("failed to parse {}: {}", path.display(), e)))?;
    apply_overrides(&mut cfg, var);
    Ok(Some(cfg))
}

/// Apply `PLANKIT_*` overrides looked up through `var` to `cfg`.
pub(crate) fn apply_overrides(cfg: &mut Config, var: impl Fn(&str) -> Option<String>) {
    if let Some(v) = var("PLANKIT_CHECKER")
        && let Ok(kind) = v.parse::<CheckerKind>()
    {
        cfg.checker = kind;
    }
    if let Some(v) = var("PLANKIT_INSTRUMENT") {
        match v.trim() {
            "1" | "true" => cfg.instrument = true,
            "0" | "false" => cfg.instrument = false,
            _ => {}
        }
    }
    if let Some(v) = var("PLANKIT_LOG_FORMAT")
        && let Ok(format) = v.parse::<LogFormat>()
    {
        cfg.log_format = format;
    }
}

/// Save the config to disk, creating `~/.plankit/` if necessary.
pub fn save(cfg: &Config) -> Result<(), PlanError> {
    save_to(cfg, &config_path())
}

/// Save the config to a specific path.
pub fn save_to(cfg: &Config, path: &Path) -> Result<(), PlanError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| PlanError::Config(format!("failed to create config directory: {e}")))?;
    }
    let raw = toml::to_string_pretty(cfg)
        .map_err(|e| PlanError::Config(format!("failed to serialize config: {e}")))?;
    fs::write(path, raw).map_err(|e| {
        PlanError::Config(format!("failed to write {}: {}", path.display(), e))
    })?;
    Ok(())
}
