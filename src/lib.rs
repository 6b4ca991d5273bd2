//! Distance, clustering, and layout primitives for traceability tokens.
//!
//! `skein` is a small library for finding near-duplicate and related
//! structured tokens (`level:scope:semantic-hash#version`) scattered across
//! a corpus. It takes an ordered list of opaque strings and produces a
//! partition into clusters and, optionally, low-dimensional coordinates for
//! spatial layout.
//!
//! The pipeline is `strings → DistanceMatrix → {clusters, coordinates}`:
//!
//! - [`distance`] provides four interchangeable string metrics
//!   (Levenshtein, Jaro-Winkler, n-gram cosine, and the structure-aware
//!   default).
//! - [`matrix`] builds the symmetric pairwise distance matrix, in parallel.
//! - [`cluster`] provides three interchangeable clustering algorithms
//!   (single-linkage hierarchical, k-medoids, DBSCAN) over the matrix.
//! - [`mds`] projects the matrix into spatial coordinates via classical
//!   multidimensional scaling on top of a Jacobi eigensolver.
//! - [`engine`] wires the stages together behind a single configuration.
//!
//! Everything is pure and stateless: no global state, no I/O, and identical
//! inputs always produce identical outputs (k-medoids under a fixed seed).
//! The O(n²) matrix is the scale limit; very large corpora need external
//! capping before they reach this crate.

#![forbid(unsafe_code)]

pub mod cluster;
pub mod distance;
pub mod engine;
pub mod error;
pub mod matrix;
pub mod mds;

pub use cluster::{Cluster, Clustering, ClusteringConfig, Dbscan, Hierarchical, KMedoids};
pub use distance::{
    CosineNgram, DistanceMetric, JaroWinkler, Levenshtein, MetricConfig, Structural,
    StructuralWeights,
};
pub use engine::{analyze, Analysis, EngineConfig, LayoutConfig};
pub use error::{Error, Result};
pub use matrix::DistanceMatrix;
pub use mds::{ClassicalMds, MdsResult};
