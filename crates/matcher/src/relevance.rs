//! Keyword relevance between profile signals and posting metadata.
//!
//! Each profile skill that overlaps a posting skill adds
//! [`SKILL_MATCH_WEIGHT`]; each profile title that overlaps the posting title
//! adds [`TITLE_MATCH_WEIGHT`]. "Overlap" is a case-insensitive substring test
//! in either direction. The total is capped at 1.0.
//!
//! A missing posting title is the empty string, which every profile title
//! contains: an untitled posting picks up the title weight for each profile
//! title.

use profile::ProfileSignals;

use crate::types::Posting;

/// Increment for each profile skill found among the posting skills.
pub const SKILL_MATCH_WEIGHT: f32 = 0.2;
/// Increment for each profile title overlapping the posting title.
pub const TITLE_MATCH_WEIGHT: f32 = 0.3;

/// Lower-cased profile signals, prepared once per run.
#[derive(Debug, Clone, Default)]
pub struct RelevanceScorer {
    skills: Vec<String>,
    titles: Vec<String>,
}

fn lowered(items: &[String]) -> Vec<String> {
    items
        .iter()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Substring in either direction. Empty skills never overlap.
#[inline]
fn overlaps(a: &str, b: &str) -> bool {
    !a.is_empty() && !b.is_empty() && (a.contains(b) || b.contains(a))
}

/// `profile_title` is non-empty; `posting_title` may be empty.
#[inline]
fn title_overlaps(profile_title: &str, posting_title: &str) -> bool {
    profile_title.contains(posting_title) || posting_title.contains(profile_title)
}

impl RelevanceScorer {
    pub fn new(signals: &ProfileSignals) -> Self {
        Self {
            skills: lowered(&signals.key_skills),
            titles: lowered(&signals.job_titles),
        }
    }

    /// True when scoring can only ever return 0.0.
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty() && self.titles.is_empty()
    }

    /// Keyword relevance of one posting, in `[0, 1]`.
    pub fn score(&self, posting: &Posting) -> f32 {
        if self.is_empty() {
            return 0.0;
        }

        let posting_skills = lowered(&posting.skills);
        let posting_title = posting.title.trim().to_lowercase();

        let skill_hits = self
            .skills
            .iter()
            .filter(|skill| posting_skills.iter().any(|ps| overlaps(skill, ps)))
            .count();
        let title_hits = self
            .titles
            .iter()
            .filter(|title| title_overlaps(title, &posting_title))
            .count();

        let score =
            skill_hits as f32 * SKILL_MATCH_WEIGHT + title_hits as f32 * TITLE_MATCH_WEIGHT;
        score.min(1.0)
    }
}

/// Keyword relevance of one posting against `signals`.
pub fn relevance_score(posting: &Posting, signals: &ProfileSignals) -> f32 {
    RelevanceScorer::new(signals).score(posting)
}

/// Keyword relevance for each posting, in input order.
pub fn relevance_scores<'a, I>(postings: I, signals: &ProfileSignals) -> Vec<f32>
where
    I: IntoIterator<Item = &'a Posting>,
{
    let scorer = RelevanceScorer::new(signals);
    postings.into_iter().map(|p| scorer.score(p)).collect()
}
