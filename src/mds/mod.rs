//! Classical multidimensional scaling (MDS).
//!
//! Projects a distance matrix into a low-dimensional coordinate space whose
//! pairwise Euclidean distances approximate the input distances, for spatial
//! layout of the item set. The projection is presentation-only: clustering
//! decisions never read these coordinates.
//!
//! # Method (Torgerson, 1952)
//!
//! 1. Square every distance.
//! 2. Double-center: `B = -0.5 · J D² J` with `J` the centering matrix,
//!    turning squared distances into a Gram-like matrix independent of any
//!    coordinate origin.
//! 3. Eigen-decompose `B` (see [`eigen`]).
//! 4. Scale the top eigenvectors by the square roots of their eigenvalues.
//!
//! A distance matrix that embeds poorly in Euclidean space produces negative
//! eigenvalues; those dimensions are clamped to zero rather than allowed to
//! poison the output with NaN.

pub mod eigen;

use crate::error::{Error, Result};
use crate::matrix::DistanceMatrix;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Spatial layout produced by classical MDS.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MdsResult {
    /// One coordinate vector per item, each exactly the requested width.
    pub coordinates: Vec<Vec<f64>>,
    /// All eigenvalues of the double-centered matrix, descending.
    pub eigenvalues: Vec<f64>,
}

/// Classical (Torgerson) multidimensional scaling.
#[derive(Debug, Clone, Copy)]
pub struct ClassicalMds {
    dimensions: usize,
}

impl ClassicalMds {
    /// Create a projection into `dimensions` output dimensions (`>= 1`).
    pub fn new(dimensions: usize) -> Result<Self> {
        if dimensions < 1 {
            return Err(Error::InvalidParameter {
                name: "dimensions",
                message: "must be at least 1",
            });
        }
        Ok(Self { dimensions })
    }

    /// The requested output dimensionality.
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Project `matrix` into the configured number of dimensions.
    ///
    /// Output vectors always have exactly the requested width; when fewer
    /// usable eigenpairs exist (including every dimension past `n`), the
    /// remaining slots are zero.
    pub fn project(&self, matrix: &DistanceMatrix) -> MdsResult {
        let n = matrix.len();
        let d = self.dimensions;

        if n == 0 {
            return MdsResult {
                coordinates: Vec::new(),
                eigenvalues: Vec::new(),
            };
        }
        if n == 1 {
            return MdsResult {
                coordinates: vec![vec![0.0; d]],
                eigenvalues: vec![0.0],
            };
        }

        // Squared distances, then double-centering. The matrix is symmetric,
        // so row and column means coincide.
        let squared: Vec<Vec<f64>> = (0..n)
            .map(|i| {
                (0..n)
                    .map(|j| {
                        let dist = matrix.get(i, j);
                        dist * dist
                    })
                    .collect()
            })
            .collect();

        let row_means: Vec<f64> =
            squared.iter().map(|row| row.iter().sum::<f64>() / n as f64).collect();
        let grand_mean = row_means.iter().sum::<f64>() / n as f64;

        let centered: Vec<Vec<f64>> = (0..n)
            .map(|i| {
                (0..n)
                    .map(|j| -0.5 * (squared[i][j] - row_means[i] - row_means[j] + grand_mean))
                    .collect()
            })
            .collect();

        let decomposition = eigen::decompose(&centered);

        // Eigenpairs, largest eigenvalue first.
        let mut order: Vec<usize> = (0..n).collect();
        order.sort_by(|&a, &b| decomposition.values[b].total_cmp(&decomposition.values[a]));

        let eigenvalues: Vec<f64> = order.iter().map(|&k| decomposition.values[k]).collect();

        let used = d.min(n);
        let mut coordinates = vec![vec![0.0; d]; n];
        for (axis, &k) in order.iter().take(used).enumerate() {
            // Negative eigenvalues mean the distances are not Euclidean;
            // clamp instead of propagating NaN through sqrt.
            let scale = decomposition.values[k].max(0.0).sqrt();
            let vector = &decomposition.vectors[k];
            for (i, row) in coordinates.iter_mut().enumerate() {
                row[axis] = vector[i] * scale;
            }
        }

        debug!(n, dimensions = d, "mds projection finished");
        MdsResult {
            coordinates,
            eigenvalues,
        }
    }
}

impl Default for ClassicalMds {
    /// Three dimensions, the layout space of the downstream renderer.
    fn default() -> Self {
        Self { dimensions: 3 }
    }
}
