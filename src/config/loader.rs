// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::{
    DEFAULT_HASHED_FIELD, DEFAULT_OPT_IN_ANNOTATION, DEFAULT_SUFFIX_LENGTH, DEFAULT_TARGET_KIND,
    MAX_SUFFIX_LENGTH,
};
use crate::errors::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Configuration for the job hasher transform.
///
/// Every field is optional in the YAML form; omitted fields fall back to the
/// built-in defaults in [`consts`](crate::config::consts), which rename
/// opted-in `Job` documents using a 10 character digest of `spec`.
///
/// # Fields
/// * `kind` - Kind discriminator a document must carry (exact match)
/// * `annotation` - Annotation key holding the boolean opt-in marker
/// * `field` - Dotted path of the sub-structure to hash
/// * `suffix_length` - Number of hex characters appended to the name
///
/// # Example
/// ```yaml
/// kind: Job
/// annotation: job-hasher
/// field: spec
/// suffix_length: 10
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct HasherConfig {
    pub kind: String,
    pub annotation: String,
    pub field: String,
    pub suffix_length: usize,
}

impl Default for HasherConfig {
    fn default() -> Self {
        Self {
            kind: DEFAULT_TARGET_KIND.to_string(),
            annotation: DEFAULT_OPT_IN_ANNOTATION.to_string(),
            field: DEFAULT_HASHED_FIELD.to_string(),
            suffix_length: DEFAULT_SUFFIX_LENGTH,
        }
    }
}

impl HasherConfig {
    /// Suffix length clamped to the width of a hex SHA-256 digest.
    ///
    /// # Example
    /// ```
    /// use job_hasher::config::HasherConfig;
    ///
    /// let config = HasherConfig { suffix_length: 100, ..HasherConfig::default() };
    /// assert_eq!(config.effective_suffix_length(), 64);
    /// ```
    pub fn effective_suffix_length(&self) -> usize {
        self.suffix_length.min(MAX_SUFFIX_LENGTH)
    }

    /// Reject values that would make the transform meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.kind.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "kind",
                reason: "must not be empty".to_string(),
            });
        }
        if self.annotation.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "annotation",
                reason: "must not be empty".to_string(),
            });
        }
        if self.field.is_empty() || self.field.split('.').any(str::is_empty) {
            return Err(ConfigError::InvalidValue {
                field: "field",
                reason: format!("'{}' is not a valid field path", self.field),
            });
        }
        if self.suffix_length == 0 {
            return Err(ConfigError::InvalidValue {
                field: "suffix_length",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Load a config from a YAML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<HasherConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let cfg: HasherConfig = serde_yaml::from_str(&content)?;
    Ok(cfg)
}

/// Load and validate a config from a YAML file
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<HasherConfig, ConfigError> {
    let cfg = load_config(path)?;
    cfg.validate()?;
    Ok(cfg)
}
