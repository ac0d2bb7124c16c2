//! # Job Matcher (`matcher`)
//!
//! ## Purpose
//!
//! `matcher` sits on top of the vector index (`index`) and the profile
//! extractor (`profile`). Given one profile embedding, a batch of postings and
//! the profile's lexical signals, it produces a ranked, thresholded shortlist.
//!
//! ## Pipeline
//!
//! 1. L2-normalize the profile and every posting embedding.
//! 2. Build a [`FlatIndex`](index::FlatIndex) and pull
//!    `min(top_k * oversample_factor, postings)` candidates.
//! 3. Drop candidates whose embedding similarity is below `min_similarity`.
//! 4. Score the survivors with [`RelevanceScorer`].
//! 5. Combine: `0.6 * embedding_similarity + 0.4 * keyword_relevance`.
//! 6. Stable sort by combined score, truncate to `top_k`.
//! 7. Drop anything whose *combined* score is below `min_similarity`.
//!
//! Step 7 reuses the raw-similarity threshold on the fused score, so a posting
//! that clears the first gate can still be dropped once a low keyword score
//! pulls it down.
//!
//! ## Core Types
//!
//! - [`Posting`]: identifier, display metadata, skills and raw embedding.
//! - [`ScoredPosting`]: a posting plus its three scores.
//! - [`MatchConfig`]: `top_k`, `min_similarity`, `oversample_factor`.
//! - [`Matcher`]: runs the pipeline above.
//!
//! ## Example Usage
//!
//! ```
//! use matcher::{MatchConfig, Matcher, Posting};
//! use profile::ProfileSignals;
//!
//! let postings = vec![
//!     Posting { id: "1".into(), embedding: vec![1.0, 0.0], ..Default::default() },
//!     Posting { id: "2".into(), embedding: vec![0.0, 1.0], ..Default::default() },
//! ];
//! let matcher = Matcher::new(MatchConfig::default().with_top_k(1).with_min_similarity(0.4))
//!     .expect("valid config");
//!
//! let ranked = matcher
//!     .rank(&[1.0, 0.0], &postings, &ProfileSignals::default())
//!     .expect("rank");
//! assert_eq!(ranked.len(), 1);
//! assert_eq!(ranked[0].posting.id, "1");
//! assert!((ranked[0].similarity - 0.6).abs() < 1e-6);
//! ```
//!
//! ## Observability
//!
//! Every run logs a `match_success` event through `tracing`. Install a
//! [`MatchMetrics`] implementation via [`set_match_metrics`] to additionally
//! record latency and candidate/hit counts.

pub mod engine;
pub mod metrics;
pub mod relevance;
pub mod types;

pub use crate::engine::Matcher;
pub use crate::metrics::{set_match_metrics, MatchMetrics};
pub use crate::relevance::{
    relevance_score, relevance_scores, RelevanceScorer, SKILL_MATCH_WEIGHT, TITLE_MATCH_WEIGHT,
};
pub use crate::types::{
    combined_score, MatchConfig, MatchError, Posting, ScoredPosting, EMBEDDING_WEIGHT,
    KEYWORD_WEIGHT,
};
