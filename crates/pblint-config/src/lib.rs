//! # pblint-config
//!
//! Layered configuration loading for pblint using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`PBLINT_*` prefix, `__` as separator)
//! 2. Project-level `.pblint.toml`
//! 3. User-level `~/.config/pblint/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `PBLINT_OUTPUT__FORMAT` -> `output.format` and
//! `PBLINT_LINT__IMPORT_PATHS` -> `lint.import_paths` (e.g. `[proto, third_party]`).
//!
//! The rule set is fixed; only how schemas are loaded and how the report is
//! rendered can be configured.
//!
//! # Usage
//!
//! ```no_run
//! use pblint_config::PblintConfig;
//!
//! let config = PblintConfig::load().expect("config");
//! for path in &config.lint.import_paths {
//!     println!("include: {}", path.display());
//! }
//! ```

mod error;
mod lint;
mod output;

pub use error::ConfigError;
pub use lint::LintConfig;
pub use output::{OutputConfig, ReportFormat};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Name of the project-local config file.
pub const PROJECT_CONFIG_FILE: &str = ".pblint.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PblintConfig {
    #[serde(default)]
    pub lint: LintConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl PblintConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Precedence (highest to lowest):
    /// 1. Environment variables (`PBLINT_*` prefix)
    /// 2. `.pblint.toml` (project-local)
    /// 3. `~/.config/pblint/config.toml` (user-global)
    /// 4. Default values
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Extract and validate a configuration from an arbitrary figment.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.lint.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(PROJECT_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment = figment.merge(Env::prefixed("PBLINT_").split("__"));

        figment
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("pblint").join("config.toml"))
    }
}
