//! Lexical signal extraction for candidate profiles.
//!
//! This crate turns semi-structured profile text into [`ProfileSignals`]: a
//! skills list, previous job titles, an education line and a best-effort
//! experience figure. The signals only nudge ranking; they are never used as a
//! hard filter.
//!
//! ## What we do
//!
//! - Split the text into blocks on blank lines
//! - Pick the block whose header carries the skills, experience or education
//!   marker (see [`ExtractConfig`])
//! - Parse bulleted skills, parenthesized titles and the first degree line
//!
//! ## Degradation policy
//!
//! Extraction never fails from the caller's point of view. Missing sections
//! leave the matching signal empty. If the extractor itself errors, the error
//! is logged at `warn` and [`extract_signals`] returns
//! `ProfileSignals::default()`. Absent profile text is `None`, not an empty
//! string standing in for it.
//!
//! ## Swapping the extractor
//!
//! [`SignalExtractor`] is the seam between text and signals. The section
//! heuristic here is one implementation; a structured-extraction step can
//! replace it without touching scoring or ranking.
//!
//! ```rust
//! use profile::{extract_signals, ExtractConfig};
//!
//! let text = "SKILLS:\n* Rust\n* SQL\n\nEXPERIENCE:\nAcme (Backend Engineer) 4 years";
//! let signals = extract_signals(Some(text), &ExtractConfig::default());
//! assert_eq!(signals.key_skills, vec!["Rust", "SQL"]);
//! assert_eq!(signals.job_titles, vec!["Backend Engineer"]);
//! assert_eq!(signals.experience_years, 4);
//! ```

use std::time::Instant;

use tracing::{debug, warn};

mod config;
mod error;
mod sections;
mod types;

pub use crate::config::ExtractConfig;
pub use crate::error::ExtractError;
pub use crate::types::ProfileSignals;

/// Converts profile text into signals.
pub trait SignalExtractor: Send + Sync {
    fn extract(&self, text: &str) -> Result<ProfileSignals, ExtractError>;
}

/// Section-header heuristic extractor.
#[derive(Debug, Clone, Default)]
pub struct SectionExtractor {
    cfg: ExtractConfig,
}

impl SectionExtractor {
    pub fn new(cfg: ExtractConfig) -> Self {
        Self { cfg }
    }

    pub fn config(&self) -> &ExtractConfig {
        &self.cfg
    }
}

impl SignalExtractor for SectionExtractor {
    fn extract(&self, text: &str) -> Result<ProfileSignals, ExtractError> {
        self.cfg.validate()?;
        if text.trim().is_empty() {
            return Err(ExtractError::EmptyInput);
        }

        let blocks = sections::split_blocks(text);
        let mut signals = ProfileSignals::default();

        if let Some(block) = sections::find_block(&blocks, &self.cfg.skills_marker) {
            signals.key_skills = sections::bullet_items(block, &self.cfg.bullet_marker);
        }

        if let Some(block) = sections::find_block(&blocks, &self.cfg.experience_marker) {
            signals.job_titles = sections::parenthesized(block);
            signals.experience_years = sections::experience_years(block);
        }

        if let Some(block) = sections::find_block(&blocks, &self.cfg.education_marker) {
            signals.education_level =
                sections::first_line_with(block, &self.cfg.degree_keywords);
        }

        Ok(signals)
    }
}

/// Extract signals with the default section heuristic.
///
/// `None` yields empty signals without running the extractor.
pub fn extract_signals(text: Option<&str>, cfg: &ExtractConfig) -> ProfileSignals {
    extract_signals_with(&SectionExtractor::new(cfg.clone()), text)
}

/// Run any extractor under the degradation policy.
pub fn extract_signals_with(extractor: &dyn SignalExtractor, text: Option<&str>) -> ProfileSignals {
    let Some(text) = text else {
        debug!("profile_text_absent");
        return ProfileSignals::default();
    };

    let start = Instant::now();
    match extractor.extract(text) {
        Ok(signals) => {
            let elapsed_micros = start.elapsed().as_micros();
            debug!(
                skills = signals.key_skills.len(),
                job_titles = signals.job_titles.len(),
                has_education = signals.education_level.is_some(),
                experience_years = signals.experience_years,
                elapsed_micros,
                "profile_extract_success"
            );
            signals
        }
        Err(err) => {
            let elapsed_micros = start.elapsed().as_micros();
            warn!(error = %err, elapsed_micros, "profile_extract_degraded");
            ProfileSignals::default()
        }
    }
}
