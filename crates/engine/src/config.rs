use std::path::Path;

use field_builder_core::ValidationLimits;
use field_builder_core::choices::{MAX_CHOICE_LEN, MAX_CHOICES};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

pub const DEFAULT_STORAGE_KEY: &str = "formData";
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080/api/fields";

/// Settings for a [`crate::FieldBuilder`]. Every key is optional in YAML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    /// Key the draft snapshot is stored under.
    pub storage_key: String,
    /// Passed to the submitter with every definition.
    pub endpoint: String,
    pub max_choices: usize,
    pub max_choice_len: usize,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            max_choices: MAX_CHOICES,
            max_choice_len: MAX_CHOICE_LEN,
        }
    }
}

impl BuilderConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, EngineError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self =
            serde_yaml::from_str(yaml).map_err(|e| EngineError::Config(e.to_string()))?;
        config.check()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path)
            .map_err(|e| EngineError::Config(format!("{}: {e}", path.display())))?;
        Self::from_yaml_str(&yaml)
    }

    pub fn limits(&self) -> ValidationLimits {
        ValidationLimits {
            max_choices: self.max_choices,
            max_choice_len: self.max_choice_len,
        }
    }

    fn check(&self) -> Result<(), EngineError> {
        if self.storage_key.is_empty() {
            return Err(EngineError::Config("storage_key must not be empty".into()));
        }
        if self.max_choices == 0 || self.max_choice_len == 0 {
            return Err(EngineError::Config("choice limits must be positive".into()));
        }
        Ok(())
    }
}
