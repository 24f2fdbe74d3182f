//! # hip-config
//!
//! Layered configuration loading for the hip pain calculator using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`HIPCALC_*` prefix, `__` as separator)
//! 2. Project-level `.hipcalc/config.toml`
//! 3. User-level `~/.config/hipcalc/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `HIPCALC_MODELS__DIR` -> `models.dir`,
//! `HIPCALC_GENERAL__DEFAULT_TIMEPOINT` -> `general.default_timepoint`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use hip_config::HipConfig;
//!
//! let config = HipConfig::load_with_dotenv().expect("config");
//! println!("models in {}", config.models.dir.display());
//! ```

mod error;
mod general;
mod models;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use models::ModelsConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct HipConfig {
    #[serde(default)]
    pub models: ModelsConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl HipConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a value is unusable.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support from the current directory.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a value is unusable.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.models.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".hipcalc/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("HIPCALC_").split("__"))
    }

    /// Replace the models directory (the `--models-dir` flag).
    #[must_use]
    pub fn with_models_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.models.dir = dir.into();
        self
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("hipcalc").join("config.toml"))
    }
}
