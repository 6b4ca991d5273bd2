//! One-call orchestration of the distance → clustering → layout pipeline.
//!
//! Collaborators that extract tokens from a corpus hand this module an
//! ordered list of strings and a configuration; they get back a partition
//! into clusters and, when requested, 3D-ready coordinates. Everything in
//! between (metric construction, matrix build, algorithm dispatch) is
//! resolved here, and configuration mistakes surface before any distance is
//! computed.

use crate::cluster::{self, Cluster, ClusteringConfig};
use crate::distance::{self, MetricConfig};
use crate::error::Result;
use crate::matrix::DistanceMatrix;
use crate::mds::{ClassicalMds, MdsResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Spatial layout request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Output dimensionality for the MDS projection.
    pub dimensions: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self { dimensions: 3 }
    }
}

/// Full pipeline configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Distance metric name (`levenshtein`, `jaro-winkler`, `cosine`,
    /// `structural`).
    pub metric: String,
    /// Metric-specific parameters.
    pub metric_config: MetricConfig,
    /// Clustering algorithm name (`hierarchical`, `kmedoids`, `dbscan`).
    pub algorithm: String,
    /// Algorithm-specific parameters.
    pub algorithm_config: ClusteringConfig,
    /// Spatial layout request; `None` skips the MDS stage.
    pub layout: Option<LayoutConfig>,
}

impl Default for EngineConfig {
    /// Structural metric with hierarchical clustering and a 3D layout.
    fn default() -> Self {
        Self {
            metric: "structural".to_string(),
            metric_config: MetricConfig::default(),
            algorithm: "hierarchical".to_string(),
            algorithm_config: ClusteringConfig::default(),
            layout: Some(LayoutConfig::default()),
        }
    }
}

/// Everything the pipeline produces for one item list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Analysis {
    /// The partition into clusters.
    pub clusters: Vec<Cluster>,
    /// Spatial coordinates, present when a layout was requested.
    pub layout: Option<MdsResult>,
}

/// Run the configured pipeline over `items`.
///
/// Unknown metric or algorithm names and out-of-range parameters are
/// rejected before the distance matrix is built.
pub fn analyze(items: &[String], config: &EngineConfig) -> Result<Analysis> {
    let metric = distance::from_name(&config.metric, &config.metric_config)?;
    let algorithm = cluster::from_name(&config.algorithm, &config.algorithm_config)?;
    let mds = config
        .layout
        .as_ref()
        .map(|layout| ClassicalMds::new(layout.dimensions))
        .transpose()?;

    debug!(
        items = items.len(),
        metric = config.metric.as_str(),
        algorithm = config.algorithm.as_str(),
        "starting analysis"
    );

    let matrix = DistanceMatrix::build(items, metric.as_ref());
    let clusters = algorithm.cluster(items, &matrix)?;
    let layout = mds.map(|mds| mds.project(&matrix));

    Ok(Analysis { clusters, layout })
}
