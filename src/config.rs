//! YAML configuration for the matching pipeline.
//!
//! One file carries every stage's settings. Each section is optional and
//! falls back to its defaults; command-line flags override whatever the
//! file sets.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! version: "1.0"
//! name: "backend-roles"
//!
//! matcher:
//!   top_k: 10
//!   min_similarity: 0.3
//!   oversample_factor: 3
//!
//! extract:
//!   version: 1
//!   skills_marker: "SKILLS"
//!   experience_marker: "EXPERIENCE"
//!   education_marker: "EDUCATION"
//!   bullet_marker: "*"
//!   degree_keywords: ["Diploma", "Degree", "Bachelor", "Master", "PhD"]
//!
//! output:
//!   format: "txt"
//!   include_embeddings: false
//! ```

use std::fs;
use std::path::Path;

use matcher::MatchConfig;
use profile::ExtractConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::format::OutputOptions;

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level configuration for a matching run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct JobMatchConfig {
    /// Configuration format version
    pub version: String,

    /// Optional configuration name/description
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub matcher: MatchConfig,

    /// Profile signal extraction
    #[serde(default)]
    pub extract: ExtractConfig,

    /// Artifact rendering
    #[serde(default)]
    pub output: OutputOptions,
}

impl JobMatchConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: JobMatchConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the version and every section's invariants.
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.matcher
            .validate()
            .map_err(|e| ConfigLoadError::Validation(format!("matcher: {e}")))?;
        self.extract
            .validate()
            .map_err(|e| ConfigLoadError::Validation(format!("extract: {e}")))?;

        Ok(())
    }
}

impl Default for JobMatchConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            matcher: MatchConfig::default(),
            extract: ExtractConfig::default(),
            output: OutputOptions::default(),
        }
    }
}
