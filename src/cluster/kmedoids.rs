//! K-Medoids: the k-means family adapted to opaque items.
//!
//! Items here are strings with no coordinates, so there is no mean to move a
//! centroid to. The medoid variant keeps every "center" an actual member: the
//! one minimizing total distance to the rest of its cluster.
//!
//! # Algorithm
//!
//! 1. Seed `k` medoids with K-Means++ (Arthur & Vassilvitskii, 2007): the
//!    first medoid uniform at random, each subsequent one with probability
//!    proportional to the squared distance to its nearest chosen medoid.
//! 2. Assign every item to its nearest medoid.
//! 3. Recompute each cluster's medoid; repeat from 2 until the medoid set is
//!    stable or `max_iterations` passes have run.
//!
//! Seeding and iteration draw from a seeded RNG, so a fixed seed over fixed
//! inputs reproduces the same partition run after run.
//!
//! # Complexity
//!
//! O(iterations · k · n) distance lookups for assignment plus O(Σ|cluster|²)
//! per medoid update, all over the precomputed matrix.

use super::traits::Clustering;
use super::util::{check_size, medoid};
use super::Cluster;
use crate::error::Result;
use crate::matrix::DistanceMatrix;
use rand::prelude::*;
use tracing::debug;

/// K-Medoids clustering with K-Means++ seeding.
#[derive(Debug, Clone, Copy)]
pub struct KMedoids {
    k: usize,
    max_iterations: usize,
    seed: u64,
}

impl KMedoids {
    /// Create a K-Medoids clusterer targeting `k` clusters.
    ///
    /// `k = 0` auto-estimates `max(2, floor(sqrt(n / 2)))` from the dataset;
    /// `k >= n` degrades to one singleton cluster per item.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            max_iterations: 100,
            seed: 0,
        }
    }

    /// Set the maximum number of assignment/update passes.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the RNG seed used for medoid seeding.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// The configured cluster count (0 = auto-estimate).
    pub fn k(&self) -> usize {
        self.k
    }

    /// K-Means++ seeding over the precomputed matrix.
    fn seed_medoids(&self, n: usize, k: usize, matrix: &DistanceMatrix) -> Vec<usize> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut medoids = Vec::with_capacity(k);
        medoids.push(rng.random_range(0..n));

        while medoids.len() < k {
            let weights: Vec<f64> = (0..n)
                .map(|i| {
                    medoids
                        .iter()
                        .map(|&m| {
                            let d = matrix.get(i, m);
                            d * d
                        })
                        .fold(f64::INFINITY, f64::min)
                })
                .collect();
            let total: f64 = weights.iter().sum();

            let next = if total > 0.0 {
                let target = rng.random::<f64>() * total;
                let mut cumulative = 0.0;
                let mut chosen = None;
                for (i, w) in weights.iter().enumerate() {
                    cumulative += w;
                    if cumulative > target {
                        chosen = Some(i);
                        break;
                    }
                }
                chosen
            } else {
                None
            };

            // All remaining mass is zero (duplicate-heavy input) or the draw
            // fell off the end through rounding: take the lowest unchosen
            // index so seeding stays total and deterministic.
            let next =
                next.unwrap_or_else(|| (0..n).find(|i| !medoids.contains(i)).unwrap_or(0));
            medoids.push(next);
        }

        medoids
    }

    /// Index of the nearest medoid for each item; ties go to the earliest
    /// medoid in list order.
    fn assign(&self, n: usize, medoids: &[usize], matrix: &DistanceMatrix) -> Vec<usize> {
        (0..n)
            .map(|i| {
                let mut best = 0;
                let mut best_dist = f64::INFINITY;
                for (c, &m) in medoids.iter().enumerate() {
                    let d = matrix.get(i, m);
                    if d < best_dist {
                        best_dist = d;
                        best = c;
                    }
                }
                best
            })
            .collect()
    }
}

impl Default for KMedoids {
    /// Auto-estimated `k`, 100 iterations, seed 0.
    fn default() -> Self {
        Self::new(0)
    }
}

impl Clustering for KMedoids {
    fn name(&self) -> &'static str {
        "kmedoids"
    }

    fn cluster(&self, items: &[String], matrix: &DistanceMatrix) -> Result<Vec<Cluster>> {
        check_size(items, matrix)?;
        let n = items.len();
        if n == 0 {
            return Ok(Vec::new());
        }

        let k = if self.k == 0 {
            ((n as f64 / 2.0).sqrt().floor() as usize).max(2)
        } else {
            self.k
        };

        if k >= n {
            return Ok(items
                .iter()
                .enumerate()
                .map(|(i, item)| Cluster {
                    id: i + 1,
                    members: vec![item.clone()],
                    representative: Some(item.clone()),
                })
                .collect());
        }

        let mut medoids = self.seed_medoids(n, k, matrix);
        let mut assignment = self.assign(n, &medoids, matrix);

        let mut passes = 0;
        for _ in 0..self.max_iterations {
            passes += 1;

            let mut new_medoids = medoids.clone();
            for (c, slot) in new_medoids.iter_mut().enumerate() {
                let members: Vec<usize> =
                    (0..n).filter(|&i| assignment[i] == c).collect();
                if let Some(m) = medoid(&members, matrix) {
                    *slot = m;
                }
            }

            if new_medoids == medoids {
                break;
            }
            medoids = new_medoids;
            assignment = self.assign(n, &medoids, matrix);
        }

        debug!(n, k, passes, "k-medoids converged");

        let mut clusters = Vec::with_capacity(k);
        for (c, &m) in medoids.iter().enumerate() {
            let members: Vec<usize> = (0..n).filter(|&i| assignment[i] == c).collect();
            // Duplicate-heavy input can strand a medoid with no members.
            if members.is_empty() {
                continue;
            }
            clusters.push(Cluster {
                id: clusters.len() + 1,
                representative: Some(items[m].clone()),
                members: members.into_iter().map(|i| items[i].clone()).collect(),
            });
        }
        Ok(clusters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("item-{i}")).collect()
    }

    /// Two tight groups: {0, 1, 2} and {3, 4}, far apart.
    fn grouped_matrix() -> DistanceMatrix {
        DistanceMatrix::from_rows(vec![
            vec![0.0, 1.0, 1.0, 10.0, 10.0],
            vec![1.0, 0.0, 1.0, 10.0, 10.0],
            vec![1.0, 1.0, 0.0, 10.0, 10.0],
            vec![10.0, 10.0, 10.0, 0.0, 1.0],
            vec![10.0, 10.0, 10.0, 1.0, 0.0],
        ])
        .unwrap()
    }

    #[test]
    fn k_at_least_n_gives_singletons() {
        let matrix = grouped_matrix();
        for k in [5, 7] {
            let clusters = KMedoids::new(k).cluster(&items(5), &matrix).unwrap();
            assert_eq!(clusters.len(), 5);
            for (i, c) in clusters.iter().enumerate() {
                assert_eq!(c.id, i + 1);
                assert_eq!(c.members.len(), 1);
                assert_eq!(c.representative, Some(c.members[0].clone()));
            }
        }
    }

    #[test]
    fn same_seed_reproduces_partition() {
        let matrix = grouped_matrix();
        let a = KMedoids::new(2).with_seed(7).cluster(&items(5), &matrix).unwrap();
        let b = KMedoids::new(2).with_seed(7).cluster(&items(5), &matrix).unwrap();

        let sizes = |cs: &[Cluster]| {
            let mut s: Vec<usize> = cs.iter().map(|c| c.members.len()).collect();
            s.sort_unstable();
            s
        };
        assert_eq!(sizes(&a), sizes(&b));
        for (ca, cb) in a.iter().zip(&b) {
            assert_eq!(ca.members, cb.members);
            assert_eq!(ca.representative, cb.representative);
        }
    }

    #[test]
    fn partitions_every_item_exactly_once() {
        let matrix = grouped_matrix();
        let clusters = KMedoids::new(2).with_seed(3).cluster(&items(5), &matrix).unwrap();

        assert_eq!(clusters.len(), 2);
        let mut all: Vec<String> = clusters.iter().flat_map(|c| c.members.clone()).collect();
        all.sort();
        assert_eq!(all, items(5));

        // Every representative is a member of its own cluster.
        for c in &clusters {
            let rep = c.representative.as_ref().unwrap();
            assert!(c.members.contains(rep));
        }
    }

    #[test]
    fn auto_k_estimates_from_dataset_size() {
        // n = 8: k = max(2, floor(sqrt(4))) = 2.
        let n = 8;
        let rows: Vec<Vec<f64>> = (0..n)
            .map(|i| {
                (0..n)
                    .map(|j| if i == j { 0.0 } else { 1.0 + ((i + j) % 3) as f64 })
                    .collect()
            })
            .collect();
        let matrix = DistanceMatrix::from_rows(rows).unwrap();
        let clusters = KMedoids::new(0).with_seed(1).cluster(&items(n), &matrix).unwrap();
        assert_eq!(clusters.len(), 2);
    }

    #[test]
    fn tolerates_single_item_and_empty_input() {
        let matrix = DistanceMatrix::from_rows(vec![vec![0.0]]).unwrap();
        let clusters = KMedoids::default().cluster(&items(1), &matrix).unwrap();
        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].members, vec!["item-0"]);

        let matrix = DistanceMatrix::from_rows(vec![]).unwrap();
        let clusters = KMedoids::default().cluster(&[], &matrix).unwrap();
        assert!(clusters.is_empty());
    }

    #[test]
    fn duplicate_items_still_partition_fully() {
        // All-zero distances: seeding falls back to deterministic picks.
        let matrix = DistanceMatrix::from_rows(vec![vec![0.0; 4]; 4]).unwrap();
        let items: Vec<String> = vec!["same".into(), "same".into(), "same".into(), "same".into()];
        let clusters = KMedoids::new(2).with_seed(9).cluster(&items, &matrix).unwrap();

        let total: usize = clusters.iter().map(|c| c.members.len()).sum();
        assert_eq!(total, 4);
        assert!(!clusters.is_empty());
    }
}
