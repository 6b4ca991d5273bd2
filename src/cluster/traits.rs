use super::Cluster;
use crate::error::Result;
use crate::matrix::DistanceMatrix;

/// Common interface for clustering algorithms over a precomputed distance
/// matrix.
///
/// Implementations partition `items` so that every item lands in exactly one
/// output cluster. Empty input yields an empty partition; a single item must
/// be handled. The matrix side length must equal the item count.
pub trait Clustering: Send + Sync {
    /// Stable identifier for this algorithm.
    fn name(&self) -> &'static str;

    /// Partition `items` according to the pairwise distances in `matrix`.
    fn cluster(&self, items: &[String], matrix: &DistanceMatrix) -> Result<Vec<Cluster>>;
}
