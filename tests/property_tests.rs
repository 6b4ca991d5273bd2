use proptest::prelude::*;
use skein::{
    Clustering, CosineNgram, DistanceMatrix, DistanceMetric, Hierarchical, JaroWinkler,
    KMedoids, Levenshtein, Structural,
};

fn metrics() -> Vec<Box<dyn DistanceMetric>> {
    vec![
        Box::new(Levenshtein),
        Box::new(JaroWinkler::default()),
        Box::new(CosineNgram::default()),
        Box::new(Structural::default()),
    ]
}

/// Random symmetric matrix with a zero diagonal, plus matching item names.
fn matrix_strategy(max_n: usize) -> impl Strategy<Value = (Vec<String>, DistanceMatrix)> {
    (1..=max_n).prop_flat_map(|n| {
        prop::collection::vec(0.0f64..10.0, n * (n - 1) / 2).prop_map(move |upper| {
            let mut rows = vec![vec![0.0; n]; n];
            let mut cell = 0;
            for i in 0..n {
                for j in (i + 1)..n {
                    rows[i][j] = upper[cell];
                    rows[j][i] = upper[cell];
                    cell += 1;
                }
            }
            let items = (0..n).map(|i| format!("item-{i}")).collect();
            (items, DistanceMatrix::from_rows(rows).unwrap())
        })
    })
}

proptest! {
    #[test]
    fn prop_metric_identity_and_symmetry(a in ".{0,12}", b in ".{0,12}") {
        for metric in metrics() {
            prop_assert_eq!(metric.distance(&a, &a), 0.0, "{} identity", metric.name());
            prop_assert_eq!(
                metric.distance(&a, &b),
                metric.distance(&b, &a),
                "{} symmetry",
                metric.name()
            );
            prop_assert!(metric.distance(&a, &b) >= 0.0);
        }
    }

    #[test]
    fn prop_normalized_metrics_bounded(a in ".{0,12}", b in ".{0,12}") {
        let normalized: Vec<Box<dyn DistanceMetric>> = vec![
            Box::new(JaroWinkler::default()),
            Box::new(CosineNgram::default()),
            Box::new(Structural::default()),
        ];
        for metric in normalized {
            let d = metric.distance(&a, &b);
            prop_assert!((0.0..=1.0).contains(&d), "{}: {}", metric.name(), d);
        }
    }

    #[test]
    fn prop_built_matrix_symmetric_zero_diagonal(
        items in prop::collection::vec("[a-z:#-]{0,10}", 0..8)
    ) {
        for metric in metrics() {
            let matrix = DistanceMatrix::build(&items, metric.as_ref());
            prop_assert_eq!(matrix.len(), items.len());
            for i in 0..items.len() {
                prop_assert_eq!(matrix.get(i, i), 0.0);
                for j in 0..items.len() {
                    prop_assert_eq!(matrix.get(i, j), matrix.get(j, i));
                }
            }
        }
    }

    #[test]
    fn prop_every_item_clustered_exactly_once(
        (items, matrix) in matrix_strategy(10),
        threshold in 0.0f64..12.0
    ) {
        let clusters = Hierarchical::new(threshold).cluster(&items, &matrix).unwrap();
        let mut seen: Vec<String> = clusters.iter().flat_map(|c| c.members.clone()).collect();
        seen.sort();
        let mut expected = items.clone();
        expected.sort();
        prop_assert_eq!(seen, expected);
        for (idx, c) in clusters.iter().enumerate() {
            prop_assert_eq!(c.id, idx + 1);
        }
    }

    #[test]
    fn prop_raising_threshold_never_splits(
        (items, matrix) in matrix_strategy(10),
        lo in 0.0f64..5.0,
        delta in 0.0f64..5.0
    ) {
        let at_lo = Hierarchical::new(lo).cluster(&items, &matrix).unwrap().len();
        let at_hi = Hierarchical::new(lo + delta).cluster(&items, &matrix).unwrap().len();
        prop_assert!(at_hi <= at_lo);
    }

    #[test]
    fn prop_kmedoids_seed_reproducible(
        (items, matrix) in matrix_strategy(10),
        k in 0usize..6,
        seed in any::<u64>()
    ) {
        let run = || {
            KMedoids::new(k)
                .with_seed(seed)
                .cluster(&items, &matrix)
                .unwrap()
        };
        let (a, b) = (run(), run());

        let sizes = |clusters: &[skein::Cluster]| {
            let mut s: Vec<usize> = clusters.iter().map(|c| c.members.len()).collect();
            s.sort_unstable();
            s
        };
        prop_assert_eq!(sizes(&a), sizes(&b));
    }
}
