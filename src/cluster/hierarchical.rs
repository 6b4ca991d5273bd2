//! Agglomerative single-linkage clustering.
//!
//! Starts from singleton clusters and repeatedly merges the pair of clusters
//! with the smallest inter-cluster distance, where that distance is the
//! minimum over all cross-cluster member pairs (single-linkage). Merging
//! stops once the smallest inter-cluster distance exceeds the caller's
//! threshold, or when a single cluster remains.
//!
//! # Implementation
//!
//! Under single-linkage, the partition produced by the merge loop at
//! threshold `t` equals the connected components of the graph whose edges are
//! the item pairs with distance `<= t`: a merge happens exactly when some
//! cross-pair sits within the threshold, regardless of merge order. The
//! components are computed with a union-find in one O(n²) pass instead of
//! simulating the merge sequence.
//!
//! Ties among equal-distance pairs therefore cannot affect the partition.
//! The reported representative is the lowest-index member, which is the
//! cluster's first member under a lowest-pair merge order.
//!
//! # Complexity
//!
//! O(n²) union-find operations over the pairwise matrix; O(n) space.

use super::traits::Clustering;
use super::util::{check_size, UnionFind};
use super::Cluster;
use crate::error::Result;
use crate::matrix::DistanceMatrix;
use tracing::debug;

/// Single-linkage agglomerative clustering with a distance threshold.
#[derive(Debug, Clone, Copy)]
pub struct Hierarchical {
    threshold: f64,
}

impl Hierarchical {
    /// Create a clusterer that merges while the single-linkage distance does
    /// not exceed `threshold`.
    ///
    /// A threshold below every pairwise distance leaves all items in
    /// singleton clusters; raising the threshold never increases the number
    /// of clusters.
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// The configured merge threshold.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl Clustering for Hierarchical {
    fn name(&self) -> &'static str {
        "hierarchical"
    }

    fn cluster(&self, items: &[String], matrix: &DistanceMatrix) -> Result<Vec<Cluster>> {
        check_size(items, matrix)?;
        let n = items.len();
        if n == 0 {
            return Ok(Vec::new());
        }

        let mut uf = UnionFind::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                if matrix.get(i, j) <= self.threshold {
                    uf.union(i, j);
                }
            }
        }

        // Assemble components in first-member order; ids are dense and
        // 1-based, members ascend by item index.
        let mut root_to_cluster: Vec<Option<usize>> = vec![None; n];
        let mut groups: Vec<Vec<usize>> = Vec::new();
        for i in 0..n {
            let root = uf.find(i);
            let cluster = match root_to_cluster[root] {
                Some(c) => c,
                None => {
                    root_to_cluster[root] = Some(groups.len());
                    groups.push(Vec::new());
                    groups.len() - 1
                }
            };
            groups[cluster].push(i);
        }

        debug!(
            n,
            threshold = self.threshold,
            clusters = groups.len(),
            "single-linkage clustering finished"
        );

        Ok(groups
            .into_iter()
            .enumerate()
            .map(|(idx, members)| Cluster {
                id: idx + 1,
                representative: Some(items[members[0]].clone()),
                members: members.into_iter().map(|i| items[i].clone()).collect(),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("item-{i}")).collect()
    }

    #[test]
    fn threshold_splits_two_far_items() {
        let matrix =
            DistanceMatrix::from_rows(vec![vec![0.0, 10.0], vec![10.0, 0.0]]).unwrap();

        let clusters = Hierarchical::new(5.0).cluster(&items(2), &matrix).unwrap();
        assert_eq!(clusters.len(), 2);

        let clusters = Hierarchical::new(15.0).cluster(&items(2), &matrix).unwrap();
        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].members.len(), 2);
    }

    #[test]
    fn merge_happens_at_exact_threshold() {
        // "Exceeds" is strict: a pair at exactly the threshold still merges.
        let matrix =
            DistanceMatrix::from_rows(vec![vec![0.0, 10.0], vec![10.0, 0.0]]).unwrap();
        let clusters = Hierarchical::new(10.0).cluster(&items(2), &matrix).unwrap();
        assert_eq!(clusters.len(), 1);
    }

    #[test]
    fn raising_threshold_never_increases_cluster_count() {
        let matrix = DistanceMatrix::from_rows(vec![
            vec![0.0, 1.0, 5.0, 9.0],
            vec![1.0, 0.0, 4.0, 8.0],
            vec![5.0, 4.0, 0.0, 2.0],
            vec![9.0, 8.0, 2.0, 0.0],
        ])
        .unwrap();

        let mut last = usize::MAX;
        for threshold in [0.5, 1.0, 2.0, 4.0, 9.0] {
            let count = Hierarchical::new(threshold)
                .cluster(&items(4), &matrix)
                .unwrap()
                .len();
            assert!(count <= last, "count rose at threshold {threshold}");
            last = count;
        }
    }

    #[test]
    fn chain_merges_transitively() {
        // 0-1 and 1-2 are close; 0-2 is not. Single-linkage joins all three.
        let matrix = DistanceMatrix::from_rows(vec![
            vec![0.0, 1.0, 9.0],
            vec![1.0, 0.0, 1.0],
            vec![9.0, 1.0, 0.0],
        ])
        .unwrap();
        let clusters = Hierarchical::new(1.5).cluster(&items(3), &matrix).unwrap();
        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].members.len(), 3);
    }

    #[test]
    fn ids_dense_and_one_based_with_first_member_representative() {
        let matrix = DistanceMatrix::from_rows(vec![
            vec![0.0, 9.0, 1.0],
            vec![9.0, 0.0, 9.0],
            vec![1.0, 9.0, 0.0],
        ])
        .unwrap();
        let clusters = Hierarchical::new(2.0).cluster(&items(3), &matrix).unwrap();

        assert_eq!(clusters.len(), 2);
        assert_eq!(clusters[0].id, 1);
        assert_eq!(clusters[1].id, 2);
        // {0, 2} forms first, led by item-0; item-1 stays alone.
        assert_eq!(clusters[0].members, vec!["item-0", "item-2"]);
        assert_eq!(clusters[0].representative.as_deref(), Some("item-0"));
        assert_eq!(clusters[1].members, vec!["item-1"]);
    }

    #[test]
    fn empty_and_singleton_inputs() {
        let matrix = DistanceMatrix::from_rows(vec![]).unwrap();
        let clusters = Hierarchical::new(1.0).cluster(&[], &matrix).unwrap();
        assert!(clusters.is_empty());

        let matrix = DistanceMatrix::from_rows(vec![vec![0.0]]).unwrap();
        let clusters = Hierarchical::new(1.0).cluster(&items(1), &matrix).unwrap();
        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].members, vec!["item-0"]);
    }

    #[test]
    fn mismatched_matrix_rejected() {
        let matrix = DistanceMatrix::from_rows(vec![vec![0.0]]).unwrap();
        assert!(Hierarchical::new(1.0).cluster(&items(2), &matrix).is_err());
    }
}
