//! Symmetric eigen-decomposition via Jacobi rotations.
//!
//! The Jacobi method diagonalizes a symmetric matrix by repeatedly zeroing
//! its largest off-diagonal entry with a Givens rotation. Convergence is
//! quadratic once the off-diagonal mass is small, and the accumulated
//! rotations directly yield an orthonormal eigenvector basis, which makes
//! the method a good fit for the small dense matrices this crate projects.
//!
//! Each rotation depends on the matrix state left by the previous one, so
//! the sweep is inherently sequential.
//!
//! # References
//!
//! Golub, G. H., Van Loan, C. F. (2013). "Matrix Computations", §8.5.

/// Convergence threshold on the largest off-diagonal magnitude.
const TOLERANCE: f64 = 1e-10;

/// Rotations allowed per matrix cell before giving up; the method converges
/// orders of magnitude sooner on well-formed symmetric input.
const MAX_ROTATIONS_PER_CELL: usize = 100;

/// Eigenvalues and eigenvectors of a symmetric matrix.
///
/// `values[k]` pairs with the unit eigenvector `vectors[k]`; pairs are in no
/// particular order.
#[derive(Debug, Clone)]
pub struct EigenDecomposition {
    /// Eigenvalues, unsorted.
    pub values: Vec<f64>,
    /// `vectors[k][i]` is component `i` of the eigenvector for `values[k]`.
    pub vectors: Vec<Vec<f64>>,
}

/// Decompose a symmetric matrix.
///
/// The input is read as-is; symmetry is assumed, not checked, and only the
/// upper triangle drives pivot selection. Stops once the largest off-diagonal
/// magnitude falls below 1e-10 or after `100 * n * n` rotations.
pub fn decompose(matrix: &[Vec<f64>]) -> EigenDecomposition {
    let n = matrix.len();
    let mut a: Vec<Vec<f64>> = matrix.to_vec();

    // Accumulated rotations, starting from the identity.
    let mut v: Vec<Vec<f64>> = (0..n)
        .map(|i| (0..n).map(|j| if i == j { 1.0 } else { 0.0 }).collect())
        .collect();

    if n > 1 {
        for _ in 0..MAX_ROTATIONS_PER_CELL * n * n {
            // Pivot on the largest off-diagonal magnitude.
            let (mut p, mut q, mut largest) = (0, 1, 0.0_f64);
            for i in 0..n {
                for j in (i + 1)..n {
                    if a[i][j].abs() > largest {
                        largest = a[i][j].abs();
                        p = i;
                        q = j;
                    }
                }
            }
            if largest < TOLERANCE {
                break;
            }

            let apq = a[p][q];
            let theta = (a[q][q] - a[p][p]) / (2.0 * apq);
            let t = theta.signum() / (theta.abs() + (theta * theta + 1.0).sqrt());
            let c = 1.0 / (t * t + 1.0).sqrt();
            let s = t * c;

            // Givens rotation of rows/columns p and q.
            a[p][p] -= t * apq;
            a[q][q] += t * apq;
            a[p][q] = 0.0;
            a[q][p] = 0.0;
            for k in 0..n {
                if k == p || k == q {
                    continue;
                }
                let akp = a[k][p];
                let akq = a[k][q];
                a[k][p] = c * akp - s * akq;
                a[p][k] = a[k][p];
                a[k][q] = s * akp + c * akq;
                a[q][k] = a[k][q];
            }

            // Same rotation applied to the eigenvector accumulator.
            for row in v.iter_mut() {
                let vp = row[p];
                let vq = row[q];
                row[p] = c * vp - s * vq;
                row[q] = s * vp + c * vq;
            }
        }
    }

    let values: Vec<f64> = (0..n).map(|i| a[i][i]).collect();
    let vectors: Vec<Vec<f64>> = (0..n)
        .map(|k| (0..n).map(|i| v[i][k]).collect())
        .collect();

    EigenDecomposition { values, vectors }
}
