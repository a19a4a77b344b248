//! Schema loading settings.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LintConfig {
    /// Include directories used to resolve schema imports.
    #[serde(default)]
    pub import_paths: Vec<PathBuf>,
}

impl LintConfig {
    /// Reject empty import path entries.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first empty entry.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(index) = self
            .import_paths
            .iter()
            .position(|path| path.as_os_str().is_empty())
        {
            return Err(ConfigError::InvalidValue {
                field: format!("lint.import_paths[{index}]"),
                reason: "import path must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
