//! Tracing Setup
//!
//! Installs the global `tracing` subscriber for the binary. Library code
//! only emits events; it never installs a subscriber.
//!
//! `RUST_LOG` takes precedence over the configured level.
//!
//! # Usage
//!
//! ```rust,ignore
//! use menu_engine::telemetry::init_telemetry;
//!
//! init_telemetry(&config.observability.logging);
//! ```

use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggingConfig};

/// Build the event filter: `RUST_LOG` if set, else the configured level.
#[must_use]
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize console tracing.
///
/// Does nothing if a global subscriber is already installed.
pub fn init_telemetry(config: &LoggingConfig) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr);

    let result = match config.format {
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    if let Err(e) = result {
        eprintln!("Tracing subscriber already installed: {e}");
    }
}
