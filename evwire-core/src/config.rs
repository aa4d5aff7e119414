//! Wiring configuration loader and saver.
//!
//! Manages the user-editable wiring file: which named handlers attach to
//! which event types. Loads and saves TOML from the cross-platform config
//! path using the [`directories`](https://docs.rs/directories) crate, with
//! robust defaulting if no file exists yet.
//!
//! Handler *names* live here; the actual functions are looked up through a
//! [`HandlerCatalog`](crate::dispatch::catalog::HandlerCatalog) at resolve
//! time.
//!
//! ## Example
//! ```rust,ignore
//! let config = WiringConfig::load().await?;
//! let wiring = catalog.resolve(&config)?;
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::info;

use tokio::fs as TokioFs;

use crate::error::AppError;

/// A wiring value: one handler name, or an ordered list of names.
///
/// Mirrors [`HandlerSpec`](crate::dispatch::handler::HandlerSpec) at the file
/// level, so `evt = "on_foo"` and `evt = ["on_foo"]` resolve identically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    pub fn names(&self) -> &[String] {
        match self {
            Self::One(name) => std::slice::from_ref(name),
            Self::Many(names) => names,
        }
    }
}

/// Main wiring file for the application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WiringConfig {
    /// Log level filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Event-type name to handler name(s).
    #[serde(default)]
    pub events: HashMap<String, OneOrMany>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for WiringConfig {
    fn default() -> Self {
        let mut events = HashMap::new();
        events.insert("foo_event".to_string(), OneOrMany::One("on_foo".to_string()));
        events.insert("bar_event".to_string(), OneOrMany::One("on_bar".to_string()));

        Self {
            log_level: default_log_level(),
            events,
        }
    }
}

impl WiringConfig {
    /// Loads config from the TOML file at the XDG-compliant app config dir,
    /// or writes and returns defaults when no file exists yet.
    pub async fn load() -> Result<Self, AppError> {
        let path = Self::config_path()?;

        if path.exists() {
            info!("Loading wiring config from {}", path.display());
            Self::load_from(&path).await
        } else {
            info!(
                "No wiring config found at {}, using defaults. Creating it now.",
                path.display()
            );

            let default_config = Self::default();
            default_config.save().await?;

            Ok(default_config)
        }
    }

    /// Loads config from an explicit path.
    pub async fn load_from(path: &Path) -> Result<Self, AppError> {
        let text = TokioFs::read_to_string(path)
            .await
            .map_err(|source| AppError::ConfigIo {
                path: path.to_path_buf(),
                source,
            })?;

        let cfg: Self = toml::from_str(&text)?;

        Ok(cfg)
    }

    /// Saves config to the TOML file at the XDG-compliant app config dir.
    pub async fn save(&self) -> Result<(), AppError> {
        let path = Self::config_path()?;

        info!("Saving wiring config to {}", path.display());

        self.save_to(&path).await
    }

    /// Saves config to an explicit path, creating parent directories.
    pub async fn save_to(&self, path: &Path) -> Result<(), AppError> {
        if let Some(parent) = path.parent() {
            TokioFs::create_dir_all(parent).await?;
        }

        let toml_str =
            toml::to_string_pretty(self).map_err(|e| AppError::Other(e.to_string()))?;
        TokioFs::write(path, toml_str).await?;

        Ok(())
    }

    /// Returns the canonical config file path using `directories::ProjectDirs`.
    pub fn config_path() -> Result<PathBuf, AppError> {
        let proj_dirs = ProjectDirs::from("org", "evwire", "evwire")
            .ok_or_else(|| AppError::Other("Could not determine config directory.".to_string()))?;

        Ok(proj_dirs.config_dir().join("wiring.toml"))
    }
}
