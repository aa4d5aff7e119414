//! Tracing subscriber setup.
//!
//! Console output goes through a `fmt` layer filtered by `RUST_LOG` (falling
//! back to the configured level); an optional daily-rolling file layer writes
//! plain-text logs through a non-blocking appender. The returned
//! [`WorkerGuard`] must stay alive for the lifetime of the process or file
//! logs are dropped on exit.

use std::path::PathBuf;

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Level filter used when `RUST_LOG` is unset.
    pub log_level: String,

    /// Directory for rolling file logs; `None` disables file output.
    pub log_dir: Option<PathBuf>,

    pub log_file_prefix: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_dir: None,
            log_file_prefix: "evwire".to_string(),
        }
    }
}

/// Install the global subscriber. Call once at startup.
pub fn init(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&config.log_level))?;

    let console_layer = tracing_subscriber::fmt::layer().with_target(false);

    match &config.log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, &config.log_file_prefix);
            let (writer, guard) = tracing_appender::non_blocking(appender);

            let file_layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer);

            tracing_subscriber::registry()
                .with(filter)
                .with(console_layer)
                .with(file_layer)
                .try_init()?;

            Ok(Some(guard))
        }

        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(console_layer)
                .try_init()?;

            Ok(None)
        }
    }
}
