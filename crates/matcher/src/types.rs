use index::IndexError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Weight of the embedding similarity in the combined score.
pub const EMBEDDING_WEIGHT: f32 = 0.6;
/// Weight of the keyword relevance in the combined score.
pub const KEYWORD_WEIGHT: f32 = 0.4;

/// A job posting as loaded for one matching run.
///
/// Missing text fields and a missing skills list deserialize as empty, so the
/// scorer never has to special-case absent metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Posting {
    /// Unique, immutable identifier.
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub source: String,
    /// Skill tokens; order is kept for display only.
    #[serde(default)]
    pub skills: Vec<String>,
    /// Raw (unnormalized) embedding.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub embedding: Vec<f32>,
}

/// A posting with its per-component and combined scores.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoredPosting {
    #[serde(flatten)]
    pub posting: Posting,
    /// Combined score: `0.6 * embedding_similarity + 0.4 * keyword_relevance`.
    pub similarity: f32,
    /// Cosine similarity between the normalized profile and posting vectors.
    pub embedding_similarity: f32,
    /// Keyword overlap score in `[0, 1]`.
    pub keyword_relevance: f32,
}

/// Fuse the two component scores with the fixed weights.
#[inline]
pub fn combined_score(embedding_similarity: f32, keyword_relevance: f32) -> f32 {
    EMBEDDING_WEIGHT * embedding_similarity + KEYWORD_WEIGHT * keyword_relevance
}

/// Configuration for a single ranking run.
///
/// `MatchConfig` is cheap to clone and serde-friendly so it can be embedded in
/// higher-level configs or overridden from the command line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchConfig {
    /// Maximum number of postings to return.
    #[serde(default = "MatchConfig::default_top_k")]
    pub top_k: usize,
    /// Minimum score, applied to the raw embedding similarity before fusion
    /// and again to the combined score after truncation.
    #[serde(default = "MatchConfig::default_min_similarity")]
    pub min_similarity: f32,
    /// Candidates fetched from the index per requested result. Internal
    /// `top_k` will be `min(top_k * oversample_factor, postings)`.
    #[serde(default = "MatchConfig::default_oversample_factor")]
    pub oversample_factor: usize,
}

impl MatchConfig {
    pub const DEFAULT_TOP_K: usize = 5;
    pub const DEFAULT_MIN_SIMILARITY: f32 = 0.25;
    pub const DEFAULT_OVERSAMPLE_FACTOR: usize = 3;

    pub(crate) fn default_top_k() -> usize {
        Self::DEFAULT_TOP_K
    }

    pub(crate) fn default_min_similarity() -> f32 {
        Self::DEFAULT_MIN_SIMILARITY
    }

    pub(crate) fn default_oversample_factor() -> usize {
        Self::DEFAULT_OVERSAMPLE_FACTOR
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn with_min_similarity(mut self, min_similarity: f32) -> Self {
        self.min_similarity = min_similarity;
        self
    }

    /// Number of candidates to pull from an index holding `corpus_len` rows.
    pub fn candidate_count(&self, corpus_len: usize) -> usize {
        self.top_k
            .saturating_mul(self.oversample_factor)
            .min(corpus_len)
    }

    /// Validate the configuration for a single run.
    pub fn validate(&self) -> Result<(), MatchError> {
        if self.top_k == 0 {
            return Err(MatchError::InvalidConfig(
                "top_k must be greater than zero".into(),
            ));
        }
        if !self.min_similarity.is_finite() || !(-1.0..=1.0).contains(&self.min_similarity) {
            return Err(MatchError::InvalidConfig(
                "min_similarity must be between -1.0 and 1.0".into(),
            ));
        }
        if self.oversample_factor == 0 {
            return Err(MatchError::InvalidConfig(
                "oversample_factor must be >= 1".into(),
            ));
        }
        Ok(())
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            top_k: Self::default_top_k(),
            min_similarity: Self::default_min_similarity(),
            oversample_factor: Self::default_oversample_factor(),
        }
    }
}

/// Errors produced by the matching layer.
///
/// Only structural problems end up here. An empty corpus or a run where
/// nothing clears the threshold is `Ok(vec![])`.
#[derive(Debug, Error)]
pub enum MatchError {
    /// Invalid per-run configuration.
    #[error("invalid match config: {0}")]
    InvalidConfig(String),
    /// The profile embedding cannot be normalized.
    #[error("invalid profile embedding: {0}")]
    InvalidProfile(#[source] IndexError),
    /// A posting embedding cannot be normalized or has the wrong dimension.
    #[error("invalid embedding for posting {id}: {source}")]
    InvalidPosting { id: String, source: IndexError },
    /// Index build or search failed.
    #[error("index error: {0}")]
    Index(#[from] IndexError),
}
