//! Configuration types for profile signal extraction.
//!
//! [`ExtractConfig`] names the section markers and keywords the heuristic
//! extractor looks for. The defaults match the upper-case section headers
//! produced by the upstream text restructuring step:
//!
//! ```text
//! SKILLS:
//! * Rust
//! * PostgreSQL
//!
//! EXPERIENCE:
//! Acme Corp (Backend Engineer) - 5 years
//!
//! EDUCATION:
//! Diploma in Computer Science
//! ```
//!
//! # Examples
//!
//! ```rust
//! use profile::ExtractConfig;
//!
//! let config = ExtractConfig::default();
//! assert_eq!(config.skills_marker, "SKILLS");
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ExtractError;

/// Configuration for the section-heuristic extractor.
///
/// All marker matching is case-sensitive, mirroring the fixed upper-case
/// headers the profile text is restructured into.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExtractConfig {
    /// Behavior version; must be >= 1.
    #[serde(default = "ExtractConfig::default_version")]
    pub version: u32,

    /// Marker that identifies the skills block header.
    #[serde(default = "ExtractConfig::default_skills_marker")]
    pub skills_marker: String,

    /// Marker that identifies the experience block header.
    #[serde(default = "ExtractConfig::default_experience_marker")]
    pub experience_marker: String,

    /// Marker that identifies the education block header.
    #[serde(default = "ExtractConfig::default_education_marker")]
    pub education_marker: String,

    /// Bullet symbol preceding each skill line.
    #[serde(default = "ExtractConfig::default_bullet_marker")]
    pub bullet_marker: String,

    /// Keywords that mark a line as a degree or diploma.
    #[serde(default = "ExtractConfig::default_degree_keywords")]
    pub degree_keywords: Vec<String>,
}

impl ExtractConfig {
    pub(crate) fn default_version() -> u32 {
        1
    }

    pub(crate) fn default_skills_marker() -> String {
        "SKILLS".into()
    }

    pub(crate) fn default_experience_marker() -> String {
        "EXPERIENCE".into()
    }

    pub(crate) fn default_education_marker() -> String {
        "EDUCATION".into()
    }

    pub(crate) fn default_bullet_marker() -> String {
        "*".into()
    }

    pub(crate) fn default_degree_keywords() -> Vec<String> {
        ["Diploma", "Degree", "Bachelor", "Master", "PhD"]
            .into_iter()
            .map(String::from)
            .collect()
    }

    /// Validate marker and keyword settings.
    pub fn validate(&self) -> Result<(), ExtractError> {
        if self.version == 0 {
            return Err(ExtractError::InvalidConfig(
                "config version must be >= 1".into(),
            ));
        }
        for (name, value) in [
            ("skills_marker", &self.skills_marker),
            ("experience_marker", &self.experience_marker),
            ("education_marker", &self.education_marker),
            ("bullet_marker", &self.bullet_marker),
        ] {
            if value.trim().is_empty() {
                return Err(ExtractError::InvalidConfig(format!(
                    "{name} must not be empty"
                )));
            }
        }
        if self.degree_keywords.iter().any(|k| k.trim().is_empty()) {
            return Err(ExtractError::InvalidConfig(
                "degree_keywords must not contain empty entries".into(),
            ));
        }
        Ok(())
    }
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            version: Self::default_version(),
            skills_marker: Self::default_skills_marker(),
            experience_marker: Self::default_experience_marker(),
            education_marker: Self::default_education_marker(),
            bullet_marker: Self::default_bullet_marker(),
            degree_keywords: Self::default_degree_keywords(),
        }
    }
}
