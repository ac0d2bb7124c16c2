use std::cmp::Ordering;
use std::collections::BinaryHeap;

use ndarray::ArrayView1;
use serde::{Deserialize, Serialize};

use crate::{FlatIndex, IndexError};

/// Result entry for a similarity query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Insertion position of the matched vector in the index.
    pub position: usize,
    /// Inner product with the query (cosine similarity for unit vectors).
    pub score: f32,
}

/// Heap entry ordered so the weakest retained hit sits on top of the max-heap.
///
/// Lower score is weaker; on equal scores the later insertion is weaker.
#[derive(Debug, Clone, Copy)]
struct Weakest(SearchHit);

impl PartialEq for Weakest {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Weakest {}

impl PartialOrd for Weakest {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Weakest {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .0
            .score
            .total_cmp(&self.0.score)
            .then_with(|| self.0.position.cmp(&other.0.position))
    }
}

impl FlatIndex {
    /// Search for the `top_k` vectors with the highest inner product.
    ///
    /// Hits come back in descending score order; equal scores are ordered by
    /// insertion position. Asking for more hits than the index holds returns
    /// every row.
    pub fn search(&self, query: &[f32], top_k: usize) -> Result<Vec<SearchHit>, IndexError> {
        if query.len() != self.dimension {
            return Err(IndexError::DimensionMismatch {
                expected: self.dimension,
                actual: query.len(),
            });
        }
        if top_k == 0 || self.is_empty() {
            return Ok(Vec::new());
        }

        let query = ArrayView1::from(query);
        let capacity = top_k.min(self.len());
        let mut heap: BinaryHeap<Weakest> = BinaryHeap::with_capacity(capacity + 1);

        for (position, row) in self.vectors.rows().into_iter().enumerate() {
            let candidate = Weakest(SearchHit {
                position,
                score: row.dot(&query),
            });
            if heap.len() < capacity {
                heap.push(candidate);
            } else if let Some(weakest) = heap.peek() {
                if candidate < *weakest {
                    heap.pop();
                    heap.push(candidate);
                }
            }
        }

        // Ascending by `Weakest` ordering is strongest-first.
        Ok(heap.into_sorted_vec().into_iter().map(|w| w.0).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::l2_normalize;

    fn seed_index(rows: &[&[f32]]) -> FlatIndex {
        let dimension = rows.first().map_or(2, |r| r.len());
        let vectors = rows
            .iter()
            .map(|r| l2_normalize(r).expect("normalize seed"))
            .collect();
        FlatIndex::build(dimension, vectors).expect("index init")
    }

    #[test]
    fn search_orders_by_score_descending() {
        let index = seed_index(&[&[0.0, 1.0], &[1.0, 0.0], &[1.0, 1.0]]);
        let hits = index.search(&[1.0, 0.0], 3).expect("search");

        let positions: Vec<usize> = hits.iter().map(|h| h.position).collect();
        assert_eq!(positions, vec![1, 2, 0]);
        assert!(hits.windows(2).all(|w| w[0].score >= w[1].score));
        assert!((hits[0].score - 1.0).abs() < 1e-6);
        assert!(hits[2].score.abs() < 1e-6);
    }

    #[test]
    fn equal_scores_keep_insertion_order() {
        let index = seed_index(&[
            &[0.0, 1.0],
            &[2.0, 0.0],
            &[0.0, 3.0],
            &[5.0, 0.0],
            &[1.0, 0.0],
        ]);
        let hits = index.search(&[1.0, 0.0], 2).expect("search");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].position, 1);
        assert_eq!(hits[1].position, 3);

        let all = index.search(&[1.0, 0.0], 5).expect("search");
        let positions: Vec<usize> = all.iter().map(|h| h.position).collect();
        assert_eq!(positions, vec![1, 3, 4, 0, 2]);
    }

    #[test]
    fn top_k_returns_exactly_k_when_k_le_m() {
        let index = seed_index(&[&[1.0, 0.1], &[0.2, 1.0], &[1.0, 1.0], &[0.5, 0.3]]);
        for k in 1..=4 {
            let hits = index.search(&[0.6, 0.8], k).expect("search");
            assert_eq!(hits.len(), k);
            assert!(hits.windows(2).all(|w| w[0].score >= w[1].score));
        }
    }

    #[test]
    fn top_k_larger_than_corpus_returns_all() {
        let index = seed_index(&[&[1.0, 0.0], &[0.0, 1.0]]);
        let hits = index.search(&[1.0, 0.0], 10).expect("search");
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn empty_index_returns_no_hits() {
        let index = FlatIndex::build(3, Vec::new()).expect("index init");
        let hits = index.search(&[1.0, 0.0, 0.0], 5).expect("search");
        assert!(hits.is_empty());
    }

    #[test]
    fn zero_top_k_short_circuits() {
        let index = seed_index(&[&[1.0, 0.0]]);
        assert!(index.search(&[1.0, 0.0], 0).expect("search").is_empty());
    }

    #[test]
    fn query_dimension_must_match() {
        let index = seed_index(&[&[1.0, 0.0]]);
        let err = index.search(&[1.0, 0.0, 0.0], 1).expect_err("mismatch");
        assert_eq!(
            err,
            IndexError::DimensionMismatch {
                expected: 2,
                actual: 3
            }
        );
    }
}
