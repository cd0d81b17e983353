//! Serialized model artifact format.
//!
//! The artifact is a JSON document owned by serde: metadata plus one model
//! specification. Coefficients and splits reference features by name; names
//! are resolved and checked when the artifact is compiled into a
//! [`Predictor`](crate::Predictor).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// On-disk model artifact: identity plus the model specification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    /// Model name, e.g. "weekly_sales_rf"
    pub name: String,
    /// Model version string
    pub version: String,
    /// The model itself
    pub model: ModelSpec,
}

/// Supported model families.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelSpec {
    /// Linear regression: intercept plus named coefficients
    Linear(LinearSpec),
    /// Regression forest: prediction is the mean of the tree outputs
    Forest(ForestSpec),
}

/// Linear regression specification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearSpec {
    pub intercept: f64,
    /// Per-feature weights, keyed by feature name. Features not listed
    /// contribute nothing.
    pub coefficients: BTreeMap<String, f64>,
}

/// Regression forest specification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForestSpec {
    pub trees: Vec<TreeSpec>,
}

/// A single regression tree as an array-encoded node list. Node 0 is the
/// root; split children must reference strictly later nodes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeSpec {
    pub nodes: Vec<TreeNode>,
}

/// One tree node: either an internal split or a leaf value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TreeNode {
    /// Branch left when `feature <= threshold`, right otherwise
    Split {
        feature: String,
        threshold: f64,
        left: usize,
        right: usize,
    },
    /// Terminal prediction value
    Leaf { value: f64 },
}
