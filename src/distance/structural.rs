//! Structure-aware distance for traceability tokens.
//!
//! Traceability tokens follow the syntax `level:scope:semantic-hash#version`
//! (e.g. `req:auth:login-4f2a#v3`). Comparing them component-by-component is
//! far more discriminating than comparing raw strings: two tokens sharing
//! level and scope are close even when their hashes differ completely, while
//! a single-character change in the level field signals a different artifact
//! family altogether.
//!
//! Each component pair is scored with length-normalized Levenshtein and the
//! five scores are combined through a weight vector. When either side does
//! not parse, the metric degrades to length-normalized Levenshtein over the
//! raw strings rather than failing the batch.

use super::levenshtein::normalized_levenshtein;
use super::DistanceMetric;
use crate::error::{Error, Result};

/// How far apart weights may drift from summing to 1 before re-normalization.
const WEIGHT_SUM_TOLERANCE: f64 = 0.001;

/// Relative importance of each token component.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StructuralWeights {
    /// Artifact level (`req`, `design`, `test`, ...).
    pub level: f64,
    /// Scope or subsystem name.
    pub scope: f64,
    /// Semantic slug.
    pub semantic: f64,
    /// Content hash.
    pub hash: f64,
    /// Version tag.
    pub version: f64,
}

impl StructuralWeights {
    fn sum(&self) -> f64 {
        self.level + self.scope + self.semantic + self.hash + self.version
    }
}

impl Default for StructuralWeights {
    fn default() -> Self {
        Self {
            level: 0.2,
            scope: 0.3,
            semantic: 0.3,
            hash: 0.1,
            version: 0.1,
        }
    }
}

/// The parsed form of a well-shaped token.
struct Components<'a> {
    level: &'a str,
    scope: &'a str,
    semantic: &'a str,
    hash: &'a str,
    version: &'a str,
}

/// Component-weighted distance over `level:scope:semantic-hash#version`
/// tokens, with a raw-string Levenshtein fallback for anything else.
#[derive(Debug, Clone, Copy)]
pub struct Structural {
    weights: StructuralWeights,
}

impl Structural {
    /// Create a structural metric with the given component weights.
    ///
    /// Weights must be non-negative and not all zero. A vector that does not
    /// sum to 1 (beyond a 0.001 tolerance) is re-normalized so callers can
    /// pass raw importance scores.
    pub fn new(weights: StructuralWeights) -> Result<Self> {
        let all = [
            weights.level,
            weights.scope,
            weights.semantic,
            weights.hash,
            weights.version,
        ];
        if all.iter().any(|w| *w < 0.0 || !w.is_finite()) {
            return Err(Error::InvalidParameter {
                name: "weights",
                message: "must be finite and non-negative",
            });
        }
        let sum = weights.sum();
        if sum == 0.0 {
            return Err(Error::InvalidParameter {
                name: "weights",
                message: "must not be all zero",
            });
        }

        let weights = if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            StructuralWeights {
                level: weights.level / sum,
                scope: weights.scope / sum,
                semantic: weights.semantic / sum,
                hash: weights.hash / sum,
                version: weights.version / sum,
            }
        } else {
            weights
        };

        Ok(Self { weights })
    }

    /// The effective (normalized) component weights.
    pub fn weights(&self) -> &StructuralWeights {
        &self.weights
    }
}

impl Default for Structural {
    fn default() -> Self {
        Self {
            weights: StructuralWeights::default(),
        }
    }
}

impl DistanceMetric for Structural {
    fn name(&self) -> &'static str {
        "structural"
    }

    fn distance(&self, a: &str, b: &str) -> f64 {
        match (parse(a), parse(b)) {
            (Some(ca), Some(cb)) => {
                let w = &self.weights;
                w.level * normalized_levenshtein(ca.level, cb.level)
                    + w.scope * normalized_levenshtein(ca.scope, cb.scope)
                    + w.semantic * normalized_levenshtein(ca.semantic, cb.semantic)
                    + w.hash * normalized_levenshtein(ca.hash, cb.hash)
                    + w.version * normalized_levenshtein(ca.version, cb.version)
            }
            // Either side malformed: degrade, don't abort.
            _ => normalized_levenshtein(a, b),
        }
    }
}

/// Split a token into its five components, or `None` if it is malformed.
fn parse(token: &str) -> Option<Components<'_>> {
    let mut fields = token.split(':');
    let level = fields.next()?;
    let scope = fields.next()?;
    let rest = fields.next()?;
    if fields.next().is_some() {
        return None;
    }

    let (sem_hash, version) = rest.rsplit_once('#')?;
    let (semantic, hash) = sem_hash.rsplit_once('-')?;

    let parts = [level, scope, semantic, hash, version];
    if parts.iter().any(|p| p.is_empty()) {
        return None;
    }

    Some(Components {
        level,
        scope,
        semantic,
        hash,
        version,
    })
}
