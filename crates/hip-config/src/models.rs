//! Trained artifact location.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_dir() -> PathBuf {
    PathBuf::from("models")
}

fn default_extension() -> String {
    "json".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ModelsConfig {
    /// Directory holding `{timepoint}_model.{ext}` and
    /// `{timepoint}_preprocessor.{ext}`.
    #[serde(default = "default_dir")]
    pub dir: PathBuf,

    /// Artifact file extension, without the leading dot.
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for ModelsConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            extension: default_extension(),
        }
    }
}

impl ModelsConfig {
    /// Reject values the artifact store cannot use.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for an empty directory or an
    /// empty/dotted extension.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dir.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "models.dir".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if self.extension.is_empty() || self.extension.starts_with('.') {
            return Err(ConfigError::InvalidValue {
                field: "models.extension".to_string(),
                reason: format!(
                    "expected a bare extension such as 'json', got '{}'",
                    self.extension
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = ModelsConfig::default();
        assert_eq!(config.dir, PathBuf::from("models"));
        assert_eq!(config.extension, "json");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_dotted_extension() {
        let config = ModelsConfig {
            extension: ".json".to_string(),
            ..ModelsConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("models.extension"));
    }

    #[test]
    fn rejects_empty_dir() {
        let config = ModelsConfig {
            dir: PathBuf::new(),
            ..ModelsConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
