use std::time::Instant;

use index::{l2_normalize, FlatIndex, IndexError, SearchHit};
use profile::ProfileSignals;
use tracing::{debug, info, Level};

use crate::metrics::metrics_recorder;
use crate::relevance::RelevanceScorer;
use crate::types::{combined_score, MatchConfig, MatchError, Posting, ScoredPosting};


/// Ranks postings against one profile embedding.
///
/// A `Matcher` holds only its configuration. Every [`Matcher::rank`] call
/// normalizes its own copies of the vectors and builds its own index, so one
/// matcher can serve concurrent runs.
#[derive(Debug, Clone)]
pub struct Matcher {
    cfg: MatchConfig,
}

impl Matcher {
    /// Construct a matcher, rejecting an invalid configuration up front.
    pub fn new(cfg: MatchConfig) -> Result<Self, MatchError> {
        cfg.validate()?;
        Ok(Self { cfg })
    }

    pub fn config(&self) -> &MatchConfig {
        &self.cfg
    }

    /// Rank `postings` against `profile_embedding`.
    ///
    /// Returns at most `top_k` postings sorted by combined score. An empty
    /// corpus, or one where nothing clears `min_similarity`, yields an empty
    /// list rather than an error.
    pub fn rank(
        &self,
        profile_embedding: &[f32],
        postings: &[Posting],
        signals: &ProfileSignals,
    ) -> Result<Vec<ScoredPosting>, MatchError> {
        let start = Instant::now();
        let span = tracing::span!(
            Level::INFO,
            "matcher.rank",
            postings = postings.len(),
            top_k = self.cfg.top_k
        );
        let _guard = span.enter();

        let query = l2_normalize(profile_embedding).map_err(MatchError::InvalidProfile)?;
        let index = build_index(query.len(), postings)?;

        let candidate_k = self.cfg.candidate_count(index.len());
        let hits = index.search(&query, candidate_k)?;
        let candidate_count = hits.len();

        let ranked = self.fuse(&hits, postings, signals);

        let latency = start.elapsed();
        info!(
            candidates = candidate_count,
            hits = ranked.len(),
            min_similarity = self.cfg.min_similarity,
            elapsed_micros = latency.as_micros(),
            "match_success"
        );
        if ranked.is_empty() {
            info!("no postings met the minimum similarity threshold");
        }

        if let Some(recorder) = metrics_recorder() {
            recorder.record_match(latency, candidate_count, ranked.len());
        }

        Ok(ranked)
    }

    /// Fuse similarity hits with keyword relevance and apply the thresholds.
    ///
    /// `hits` must be in index order (similarity descending, then insertion
    /// position) and their positions must refer to `postings`. The steps are:
    /// drop hits below `min_similarity`, score the rest, stable-sort by
    /// combined score, truncate to `top_k`, then drop anything whose combined
    /// score is below that same `min_similarity`.
    pub fn fuse(
        &self,
        hits: &[SearchHit],
        postings: &[Posting],
        signals: &ProfileSignals,
    ) -> Vec<ScoredPosting> {
        let min_similarity = self.cfg.min_similarity;
        let scorer = RelevanceScorer::new(signals);

        let mut scored: Vec<ScoredPosting> = hits
            .iter()
            .filter(|hit| hit.score >= min_similarity)
            .filter_map(|hit| postings.get(hit.position).map(|p| (hit.score, p)))
            .map(|(embedding_similarity, posting)| {
                let keyword_relevance = scorer.score(posting);
                ScoredPosting {
                    posting: posting.clone(),
                    similarity: combined_score(embedding_similarity, keyword_relevance),
                    embedding_similarity,
                    keyword_relevance,
                }
            })
            .collect();

        debug!(
            candidates = hits.len(),
            above_threshold = scored.len(),
            "fusion_candidates"
        );

        // `sort_by` is stable: equal combined scores keep index order.
        scored.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
        scored.truncate(self.cfg.top_k);
        // The combined score is held to the same bar as the raw similarity.
        scored.retain(|s| s.similarity >= min_similarity);
        scored
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self {
            cfg: MatchConfig::default(),
        }
    }
}

/// Normalize every posting embedding and load them into a fresh index.
fn build_index(dimension: usize, postings: &[Posting]) -> Result<FlatIndex, MatchError> {
    let vectors = postings
        .iter()
        .map(|posting| {
            if posting.embedding.len() != dimension {
                return Err(MatchError::InvalidPosting {
                    id: posting.id.clone(),
                    source: IndexError::DimensionMismatch {
                        expected: dimension,
                        actual: posting.embedding.len(),
                    },
                });
            }
            l2_normalize(&posting.embedding).map_err(|source| MatchError::InvalidPosting {
                id: posting.id.clone(),
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(FlatIndex::build(dimension, vectors)?)
}
