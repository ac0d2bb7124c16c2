//! # Posting Index
//!
//! This crate provides the vector side of job matching: L2 normalization of
//! embeddings and an exact, in-memory inner-product index over a batch of
//! posting vectors.
//!
//! ## Core Features
//!
//! - **Normalization**: [`l2_normalize`] and [`l2_normalize_in_place`] scale a
//!   vector to unit length so that inner product equals cosine similarity.
//!   Degenerate inputs (empty, zero norm, non-finite) are reported as
//!   [`IndexError`] instead of producing NaN.
//! - **Flat Index**: [`FlatIndex`] stores the normalized vectors as a dense
//!   `M x D` matrix and answers top-K queries with a linear scan and a bounded
//!   heap. Results are ordered by descending score; equal scores keep
//!   insertion order.
//!
//! The index is rebuilt for every matching run. There is no persistence and no
//! incremental maintenance.
//!
//! ## Example Usage
//!
//! ```
//! use index::{l2_normalize, FlatIndex};
//!
//! let rows = vec![
//!     l2_normalize(&[1.0, 0.0]).unwrap(),
//!     l2_normalize(&[0.0, 2.0]).unwrap(),
//! ];
//! let index = FlatIndex::build(2, rows).unwrap();
//!
//! let query = l2_normalize(&[3.0, 0.0]).unwrap();
//! let hits = index.search(&query, 5).unwrap();
//! assert_eq!(hits.len(), 2);
//! assert_eq!(hits[0].position, 0);
//! assert!((hits[0].score - 1.0).abs() < 1e-6);
//! ```

mod normalize;
mod query;

pub use normalize::{l2_norm, l2_normalize, l2_normalize_in_place};
pub use query::SearchHit;

use ndarray::{Array2, ArrayView1};
use thiserror::Error;
use tracing::debug;

/// Errors raised when an embedding cannot take part in a similarity run.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IndexError {
    #[error("embedding vector is empty")]
    EmptyVector,
    #[error("cannot normalize a zero-norm vector")]
    ZeroNorm,
    #[error("embedding vector contains non-finite values")]
    NonFinite,
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

/// Exact maximum-inner-product index over unit-length vectors.
///
/// Rows keep the order in which they were supplied to [`FlatIndex::build`];
/// a row's position is how callers map hits back to their postings.
#[derive(Debug, Clone)]
pub struct FlatIndex {
    dimension: usize,
    vectors: Array2<f32>,
}

impl FlatIndex {
    /// Build an index from already-normalized vectors of length `dimension`.
    ///
    /// An empty `vectors` list is valid and yields an index that answers every
    /// query with no hits.
    pub fn build(dimension: usize, vectors: Vec<Vec<f32>>) -> Result<Self, IndexError> {
        let rows = vectors.len();
        let mut matrix = Array2::<f32>::zeros((rows, dimension));
        for (mut row, v) in matrix.rows_mut().into_iter().zip(&vectors) {
            if v.len() != dimension {
                return Err(IndexError::DimensionMismatch {
                    expected: dimension,
                    actual: v.len(),
                });
            }
            row.assign(&ArrayView1::from(v.as_slice()));
        }

        debug!(rows, dimension, "flat_index_built");
        Ok(Self {
            dimension,
            vectors: matrix,
        })
    }

    /// Dimensionality every row and query must have.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of indexed vectors.
    pub fn len(&self) -> usize {
        self.vectors.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
