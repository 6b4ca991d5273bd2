//! String distance metrics.
//!
//! This module provides the interchangeable distance strategies used to score
//! how dissimilar two tokens are. All metrics share the same contract:
//!
//! - `distance(a, b) == distance(b, a)` (symmetry)
//! - `distance(s, s) == 0` (identity)
//! - results are non-negative
//!
//! The three normalized metrics ([`JaroWinkler`], [`CosineNgram`],
//! [`Structural`]) stay within `[0, 1]`; [`Levenshtein`] returns raw edit
//! counts.
//!
//! ## Choosing a metric
//!
//! - **Levenshtein**: raw edit counts; good when absolute edit magnitude
//!   matters more than relative similarity.
//! - **Jaro-Winkler**: favors short identifier-like strings with shared
//!   prefixes.
//! - **Cosine**: order-insensitive fragment overlap; tolerant of reordering.
//! - **Structural**: the default for traceability tokens; exploits the
//!   `level:scope:semantic-hash#version` syntax and degrades to Levenshtein
//!   for anything that does not parse.
//!
//! Metric parameters are validated when the metric is constructed, never
//! during a distance call.

mod cosine;
mod jaro_winkler;
mod levenshtein;
mod structural;

pub use cosine::CosineNgram;
pub use jaro_winkler::JaroWinkler;
pub use levenshtein::Levenshtein;
pub use structural::{Structural, StructuralWeights};

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Common interface for pairwise string dissimilarity.
pub trait DistanceMetric: Send + Sync {
    /// Stable identifier for this metric.
    fn name(&self) -> &'static str;

    /// Dissimilarity between `a` and `b`: non-negative, symmetric, and zero
    /// for identical strings.
    fn distance(&self, a: &str, b: &str) -> f64;
}

/// Metric-specific parameters, applied by [`from_name`].
///
/// Each metric reads only the fields it understands.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricConfig {
    /// N-gram size for the cosine metric.
    pub ngram_size: usize,
    /// Prefix scaling factor for Jaro-Winkler, in `[0, 0.25]`.
    pub prefix_scale: f64,
    /// Component weights for the structural metric.
    pub weights: StructuralWeights,
}

impl Default for MetricConfig {
    fn default() -> Self {
        Self {
            ngram_size: 2,
            prefix_scale: 0.1,
            weights: StructuralWeights::default(),
        }
    }
}

/// Look up a metric by its stable name and construct it.
///
/// Fails fast with [`Error::UnknownMetric`] for unrecognized names and with
/// [`Error::InvalidParameter`] for out-of-range configuration, before any
/// distance is computed.
pub fn from_name(name: &str, config: &MetricConfig) -> Result<Box<dyn DistanceMetric>> {
    match name {
        "levenshtein" => Ok(Box::new(Levenshtein)),
        "jaro-winkler" => Ok(Box::new(JaroWinkler::new(config.prefix_scale)?)),
        "cosine" => Ok(Box::new(CosineNgram::new(config.ngram_size)?)),
        "structural" => Ok(Box::new(Structural::new(config.weights)?)),
        other => Err(Error::UnknownMetric(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_builds_every_metric() {
        let config = MetricConfig::default();
        for name in ["levenshtein", "jaro-winkler", "cosine", "structural"] {
            let metric = from_name(name, &config).unwrap();
            assert_eq!(metric.name(), name);
        }
    }

    #[test]
    fn from_name_rejects_unknown() {
        let err = from_name("soundex", &MetricConfig::default()).err().unwrap();
        assert!(matches!(err, Error::UnknownMetric(name) if name == "soundex"));
    }

    #[test]
    fn from_name_rejects_bad_config() {
        let config = MetricConfig {
            prefix_scale: 0.5,
            ..MetricConfig::default()
        };
        assert!(from_name("jaro-winkler", &config).is_err());
        // Other metrics ignore the bad field.
        assert!(from_name("cosine", &config).is_ok());
    }
}
