//! The full pipeline on a handful of traceability tokens.

use skein::{analyze, ClusteringConfig, EngineConfig};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let items: Vec<String> = [
        "req:auth:login-4f2a#v1",
        "req:auth:login-4f2b#v2",
        "req:auth:logout-91c0#v1",
        "test:auth:login-4f2a#v1",
        "req:storage:flush-07aa#v3",
        "req:storage:flush-07ab#v3",
        "doc:ui:theme-c611#v1",
        "not-a-token",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    for algorithm in ["hierarchical", "kmedoids", "dbscan"] {
        let config = EngineConfig {
            algorithm: algorithm.to_string(),
            algorithm_config: ClusteringConfig {
                threshold: 0.25,
                k: 3,
                epsilon: 0.25,
                min_points: 2,
                ..ClusteringConfig::default()
            },
            ..EngineConfig::default()
        };

        let analysis = analyze(&items, &config).unwrap();

        println!("=== {algorithm} ===");
        for cluster in &analysis.clusters {
            let rep = cluster.representative.as_deref().unwrap_or("-");
            println!("  cluster {} (rep: {rep})", cluster.id);
            for member in &cluster.members {
                println!("    {member}");
            }
        }
        println!();
    }

    // Spatial layout from the default (structural + hierarchical) pipeline.
    let analysis = analyze(&items, &EngineConfig::default()).unwrap();
    if let Some(layout) = analysis.layout {
        println!("=== 3D layout ===");
        for (item, coords) in items.iter().zip(&layout.coordinates) {
            println!(
                "  {:28} => ({:7.3}, {:7.3}, {:7.3})",
                item, coords[0], coords[1], coords[2]
            );
        }
    }
}
