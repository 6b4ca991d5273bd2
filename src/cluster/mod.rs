//! Clustering algorithms for grouping similar tokens.
//!
//! All algorithms consume the same inputs: an ordered item list and a
//! precomputed [`DistanceMatrix`](crate::matrix::DistanceMatrix). They never
//! look at the strings themselves beyond copying them into the output, so
//! any metric can be paired with any algorithm.
//!
//! ## Algorithms (implemented)
//!
//! ### Hierarchical (single-linkage)
//!
//! Merges clusters while the minimum cross-cluster distance stays within a
//! threshold. Good default when a meaningful distance cutoff is known; the
//! cluster count falls out of the data.
//!
//! ### K-Medoids
//!
//! The k-means family adapted to non-numeric items: cluster centers are
//! medoids (actual members), seeded with K-Means++ from a seeded RNG for
//! reproducible partitions. Use when a target cluster count is known or a
//! rough `sqrt(n/2)` estimate is acceptable.
//!
//! ### DBSCAN
//!
//! Density-based clustering with a pooled noise cluster, so the output is
//! still a total partition. Use when outliers should not contaminate the
//! dense groups.
//!
//! ## Output
//!
//! Every algorithm produces [`Cluster`] values with dense 1-based ids, the
//! member list in discovery order, and a representative member where one is
//! defined (hierarchical: first member; k-medoids and DBSCAN: medoid).

mod dbscan;
mod hierarchical;
mod kmedoids;
mod traits;
pub(crate) mod util;

pub use dbscan::Dbscan;
pub use hierarchical::Hierarchical;
pub use kmedoids::KMedoids;
pub use traits::Clustering;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// A group of related items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cluster {
    /// Dense, 1-based cluster identifier.
    pub id: usize,
    /// Member items in discovery order.
    pub members: Vec<String>,
    /// The member chosen to stand for the cluster, if one is defined.
    pub representative: Option<String>,
}

/// Algorithm-specific parameters, applied by [`from_name`].
///
/// Each algorithm reads only the fields it understands.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusteringConfig {
    /// Merge threshold for hierarchical clustering.
    pub threshold: f64,
    /// Target cluster count for k-medoids (0 = auto-estimate).
    pub k: usize,
    /// Iteration cap for k-medoids.
    pub max_iterations: usize,
    /// RNG seed for k-medoids.
    pub seed: u64,
    /// Neighborhood radius for DBSCAN.
    pub epsilon: f64,
    /// Minimum neighborhood size for DBSCAN core points.
    pub min_points: usize,
}

impl Default for ClusteringConfig {
    fn default() -> Self {
        Self {
            threshold: 0.3,
            k: 0,
            max_iterations: 100,
            seed: 0,
            epsilon: 0.3,
            min_points: 2,
        }
    }
}

/// Look up a clustering algorithm by its stable name and construct it.
///
/// Fails fast with [`Error::UnknownAlgorithm`] for unrecognized names and
/// with [`Error::InvalidParameter`] for out-of-range configuration, before
/// any data is touched.
pub fn from_name(name: &str, config: &ClusteringConfig) -> Result<Box<dyn Clustering>> {
    match name {
        "hierarchical" => Ok(Box::new(Hierarchical::new(config.threshold))),
        "kmedoids" => Ok(Box::new(
            KMedoids::new(config.k)
                .with_max_iterations(config.max_iterations)
                .with_seed(config.seed),
        )),
        "dbscan" => Ok(Box::new(Dbscan::new(config.epsilon, config.min_points)?)),
        other => Err(Error::UnknownAlgorithm(other.to_string())),
    }
}
