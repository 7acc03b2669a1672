//! Logging initialisation for plankit.
//!
//! Call [`init_tracing`] once at process startup to install the global
//! `tracing` subscriber.
//!
//! # Environment variables
//!
//! | Variable | Effect |
//! |---|---|
//! | `RUST_LOG` | Log filter (default `"info"`).  Use `plankit_validity=trace` to see every validity query of an instrumented checker. |
//! | `PLANKIT_LOG_FORMAT=json` | Emit newline-delimited JSON logs (via [`Config`][crate::config::Config]). |
//!
//! # Example
//!
//! ```rust,no_run
//! use plankit_runtime::{config::LogFormat, telemetry::init_tracing};
//!
//! init_tracing("planner", LogFormat::Compact);
//! ```

use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LogFormat;

/// Install the global `tracing` subscriber.
///
/// Returns `true` when this call installed the subscriber and `false` when
/// one was already set (by an earlier call, a test harness or the host
/// application); the existing subscriber is then left untouched.
pub fn init_tracing(service_name: &str, format: LogFormat) -> bool {
    let registry = tracing_subscriber::registry().with(build_filter());
    let installed = match format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
            .is_ok(),
        LogFormat::Compact => registry
            .with(tracing_subscriber::fmt::layer().compact())
            .try_init()
            .is_ok(),
    };
    if installed {
        info!(service = service_name, ?format, "tracing initialised");
    }
    installed
}

/// `RUST_LOG` when set and parsable, `info` otherwise.
fn build_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}
