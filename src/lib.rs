//! Workspace umbrella crate for jobmatch.
//!
//! This crate stitches together profile signal extraction and the hybrid
//! ranker so callers can go from a profile vector, a batch of postings and
//! optional profile text to a ranked shortlist with a single call.
//!
//! ```
//! use jobmatch::{run, MatchConfig, MatchInputs, Posting};
//!
//! let inputs = MatchInputs {
//!     profile_embedding: vec![1.0, 0.0],
//!     postings: vec![
//!         Posting { id: "1".into(), embedding: vec![1.0, 0.0], ..Default::default() },
//!         Posting { id: "2".into(), embedding: vec![0.0, 1.0], ..Default::default() },
//!     ],
//!     profile_text: None,
//! };
//! let ranked = run(&inputs, &MatchConfig::default().with_top_k(1)).expect("run");
//! assert_eq!(ranked[0].posting.id, "1");
//! ```

pub use index::{l2_normalize, FlatIndex, IndexError, SearchHit};
pub use matcher::{
    combined_score, relevance_score, set_match_metrics, MatchConfig, MatchError, MatchMetrics,
    Matcher, Posting, ScoredPosting,
};
pub use profile::{extract_signals, ExtractConfig, ProfileSignals};

pub mod config;
pub mod format;
pub mod input;

pub use crate::config::{ConfigLoadError, JobMatchConfig};
pub use crate::format::{
    render_json, render_summary, render_text, write_matches, OutputFormat, OutputOptions,
};
pub use crate::input::{
    load_postings, load_profile_embedding, load_profile_text, parse_postings,
    parse_profile_embedding,
};

use std::path::Path;
use std::time::Instant;

use thiserror::Error;
use tracing::info;

/// Errors that can occur while running the matching pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("matching failed: {0}")]
    Match(#[from] MatchError),

    #[error("config failure: {0}")]
    Config(#[from] ConfigLoadError),

    #[error("failed to access {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON in {context}: {source}")]
    Json {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl PipelineError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        PipelineError::Io {
            path: path.display().to_string(),
            source,
        }
    }
}

/// Everything one matching run consumes.
#[derive(Debug, Clone, Default)]
pub struct MatchInputs {
    /// Raw profile embedding; normalized inside the ranker.
    pub profile_embedding: Vec<f32>,
    pub postings: Vec<Posting>,
    /// Restructured profile text. `None` disables keyword relevance.
    pub profile_text: Option<String>,
}

/// Rank `inputs.postings` with the default extraction markers.
pub fn run(inputs: &MatchInputs, cfg: &MatchConfig) -> Result<Vec<ScoredPosting>, PipelineError> {
    run_with(inputs, cfg, &ExtractConfig::default())
}

/// Rank using every section of a loaded [`JobMatchConfig`].
pub fn run_with_config(
    inputs: &MatchInputs,
    cfg: &JobMatchConfig,
) -> Result<Vec<ScoredPosting>, PipelineError> {
    run_with(inputs, &cfg.matcher, &cfg.extract)
}

fn run_with(
    inputs: &MatchInputs,
    match_cfg: &MatchConfig,
    extract_cfg: &ExtractConfig,
) -> Result<Vec<ScoredPosting>, PipelineError> {
    let start = Instant::now();
    let matcher = Matcher::new(match_cfg.clone())?;
    let signals = extract_signals(inputs.profile_text.as_deref(), extract_cfg);
    let ranked = matcher.rank(&inputs.profile_embedding, &inputs.postings, &signals)?;

    info!(
        postings = inputs.postings.len(),
        skills = signals.key_skills.len(),
        titles = signals.job_titles.len(),
        matches = ranked.len(),
        elapsed_micros = start.elapsed().as_micros(),
        "pipeline_success"
    );
    Ok(ranked)
}
