//! DBSCAN: Density-Based Spatial Clustering of Applications with Noise.
//!
//! # The Algorithm (Ester et al., 1996)
//!
//! DBSCAN groups points by neighborhood density. Unlike k-medoids, it
//! discovers the number of clusters itself and separates outliers instead of
//! forcing them into the nearest group.
//!
//! ## Core Concepts
//!
//! - **Epsilon (ε)**: maximum distance for two items to count as neighbors.
//! - **MinPts**: minimum neighborhood size (the point itself included) for a
//!   point to be "core".
//! - **Core point**: has at least MinPts neighbors within ε.
//! - **Border point**: within ε of a core point but not core itself.
//! - **Noise point**: neither core nor border.
//!
//! ## Noise pooling
//!
//! Downstream consumers here expect a total partition, so after the density
//! pass every remaining noise point is pooled into one extra cluster appended
//! after the density clusters. Nonempty input therefore always yields at
//! least one cluster.
//!
//! ## Complexity
//!
//! O(n²) matrix lookups (every point's neighborhood is a row scan); O(n)
//! space for labels.
//!
//! ## References
//!
//! Ester et al. (1996). "A Density-Based Algorithm for Discovering Clusters
//! in Large Spatial Databases with Noise." KDD-96.

use super::traits::Clustering;
use super::util::{check_size, medoid};
use super::Cluster;
use crate::error::{Error, Result};
use crate::matrix::DistanceMatrix;
use tracing::debug;

// Internal label encoding.
// - UNCLASSIFIED: never assigned yet
// - NOISE_LABEL: visited, but not density-reachable from any core point (may be promoted later)
const UNCLASSIFIED: i32 = -2;
const NOISE_LABEL: i32 = -1;

/// DBSCAN clustering over a precomputed distance matrix.
#[derive(Debug, Clone, Copy)]
pub struct Dbscan {
    epsilon: f64,
    min_points: usize,
}

impl Dbscan {
    /// Create a DBSCAN clusterer.
    ///
    /// # Arguments
    ///
    /// * `epsilon` - Neighborhood radius; must be positive. The neighborhood
    ///   test is inclusive (`d <= epsilon`).
    /// * `min_points` - Minimum neighborhood size (self included) for a core
    ///   point; must be at least 1.
    ///
    /// Both are validated here, before any data is touched.
    pub fn new(epsilon: f64, min_points: usize) -> Result<Self> {
        if !(epsilon > 0.0) {
            return Err(Error::InvalidParameter {
                name: "epsilon",
                message: "must be positive",
            });
        }
        if min_points < 1 {
            return Err(Error::InvalidParameter {
                name: "min_points",
                message: "must be at least 1",
            });
        }
        Ok(Self { epsilon, min_points })
    }

    /// All points within `epsilon` of `point`, the point itself included.
    fn region_query(&self, matrix: &DistanceMatrix, point: usize) -> Vec<usize> {
        (0..matrix.len())
            .filter(|&other| matrix.get(point, other) <= self.epsilon)
            .collect()
    }

    /// Expand a new cluster from core point `point`.
    fn expand_cluster(
        &self,
        matrix: &DistanceMatrix,
        point: usize,
        neighbors: &[usize],
        labels: &mut [i32],
        cluster_id: i32,
        visited: &mut [bool],
    ) {
        labels[point] = cluster_id;

        // Worklist expansion instead of recursion. The `queued` bitmap keeps
        // membership checks O(1) without changing which points get enqueued.
        let mut to_process: Vec<usize> = neighbors.to_vec();
        let mut queued = vec![false; matrix.len()];
        for &idx in neighbors {
            queued[idx] = true;
        }

        while let Some(neighbor) = to_process.pop() {
            // A point previously labeled noise can later turn out to be a
            // border point, so labels are assigned *before* the visited
            // check.
            if labels[neighbor] == UNCLASSIFIED || labels[neighbor] == NOISE_LABEL {
                labels[neighbor] = cluster_id;
            }

            if visited[neighbor] {
                continue;
            }
            visited[neighbor] = true;

            let neighbor_neighbors = self.region_query(matrix, neighbor);
            if neighbor_neighbors.len() >= self.min_points {
                for nn in neighbor_neighbors {
                    if !visited[nn] && !queued[nn] {
                        queued[nn] = true;
                        to_process.push(nn);
                    }
                }
            }
        }
    }
}

impl Clustering for Dbscan {
    fn name(&self) -> &'static str {
        "dbscan"
    }

    fn cluster(&self, items: &[String], matrix: &DistanceMatrix) -> Result<Vec<Cluster>> {
        check_size(items, matrix)?;
        let n = items.len();
        if n == 0 {
            return Ok(Vec::new());
        }

        let mut labels = vec![UNCLASSIFIED; n];
        let mut visited = vec![false; n];
        let mut cluster_id: i32 = 0;

        for point in 0..n {
            if visited[point] {
                continue;
            }
            visited[point] = true;

            let neighbors = self.region_query(matrix, point);
            if neighbors.len() < self.min_points {
                // Not dense enough: provisional noise (may be promoted).
                labels[point] = NOISE_LABEL;
                continue;
            }

            self.expand_cluster(matrix, point, &neighbors, &mut labels, cluster_id, &mut visited);
            cluster_id += 1;
        }

        // Density clusters first, then one pooled noise cluster if any noise
        // remains.
        let mut groups: Vec<Vec<usize>> = vec![Vec::new(); cluster_id as usize];
        let mut noise: Vec<usize> = Vec::new();
        for (i, &label) in labels.iter().enumerate() {
            if label >= 0 {
                groups[label as usize].push(i);
            } else {
                noise.push(i);
            }
        }
        if !noise.is_empty() {
            groups.push(noise);
        }

        debug!(
            n,
            epsilon = self.epsilon,
            min_points = self.min_points,
            clusters = groups.len(),
            "dbscan finished"
        );

        Ok(groups
            .into_iter()
            .enumerate()
            .map(|(idx, members)| Cluster {
                id: idx + 1,
                representative: medoid(&members, matrix).map(|m| items[m].clone()),
                members: members.into_iter().map(|i| items[i].clone()).collect(),
            })
            .collect())
    }
}
