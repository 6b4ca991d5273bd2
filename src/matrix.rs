//! Pairwise distance matrix construction.
//!
//! Building the matrix costs O(n²) metric invocations, each up to O(L²) for
//! the edit-distance metrics, which makes it the dominant cost of the whole
//! pipeline on large corpora. The cells are independent, so the upper
//! triangle is filled in parallel with rayon and mirrored; the result is
//! identical to a sequential fill because every metric is pure.

use crate::distance::DistanceMetric;
use rayon::prelude::*;
use tracing::debug;

/// Symmetric n×n matrix of pairwise dissimilarities with a zero diagonal.
///
/// Stored as a flat row-major buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    n: usize,
    values: Vec<f64>,
}

impl DistanceMatrix {
    /// Compute the full pairwise matrix for `items` under `metric`.
    pub fn build(items: &[String], metric: &dyn DistanceMetric) -> Self {
        let n = items.len();

        let pairs: Vec<(usize, usize)> = (0..n)
            .flat_map(|i| ((i + 1)..n).map(move |j| (i, j)))
            .collect();
        let upper: Vec<f64> = pairs
            .par_iter()
            .map(|&(i, j)| metric.distance(&items[i], &items[j]))
            .collect();

        let mut values = vec![0.0; n * n];
        let mut cell = 0;
        for i in 0..n {
            for j in (i + 1)..n {
                values[i * n + j] = upper[cell];
                values[j * n + i] = upper[cell];
                cell += 1;
            }
        }

        debug!(n, metric = metric.name(), "distance matrix built");
        Self { n, values }
    }

    /// Wrap an existing square matrix.
    ///
    /// Returns `None` unless `rows` is square. Symmetry and the zero diagonal
    /// are the caller's responsibility; this constructor exists for callers
    /// that already hold precomputed distances.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Option<Self> {
        let n = rows.len();
        if rows.iter().any(|row| row.len() != n) {
            return None;
        }
        let values = rows.into_iter().flatten().collect();
        Some(Self { n, values })
    }

    /// Distance between items `i` and `j`.
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` is out of bounds.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.n + j]
    }

    /// Side length of the matrix.
    pub fn len(&self) -> usize {
        self.n
    }

    /// Whether the matrix is 0×0.
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }
}
