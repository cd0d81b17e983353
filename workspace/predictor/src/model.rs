use std::fmt;
use std::fs;
use std::path::Path;

use common::{ForecastRequest, ModelInfo};
use tracing::{debug, info};

use crate::artifact::{ModelArtifact, ModelSpec, TreeNode};
use crate::error::{PredictorError, Result};
use crate::features::{feature_index, feature_vector, FEATURE_NAMES};

/// A capability that maps a fixed-shape numeric record to a scalar weekly
/// sales figure. Handlers and renderers depend on this boundary, not on any
/// particular model family or artifact format.
pub trait WeeklySalesModel: Send + Sync + fmt::Debug {
    /// Identity of the loaded model
    fn info(&self) -> &ModelInfo;

    /// Predict weekly sales for one request
    fn predict(&self, request: &ForecastRequest) -> f64;
}

/// A model artifact compiled for inference: feature names resolved to
/// vector positions, tree structure verified. Immutable after construction.
#[derive(Debug)]
pub struct Predictor {
    info: ModelInfo,
    model: CompiledModel,
}

#[derive(Debug)]
enum CompiledModel {
    Linear {
        intercept: f64,
        weights: Vec<(usize, f64)>,
    },
    Forest {
        trees: Vec<CompiledTree>,
    },
}

#[derive(Debug)]
struct CompiledTree {
    nodes: Vec<CompiledNode>,
}

#[derive(Debug, Clone, Copy)]
enum CompiledNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        value: f64,
    },
}

impl Predictor {
    /// Load and compile a model artifact from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading model artifact from {}", path.display());
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Parse and compile a model artifact from its JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        let artifact: ModelArtifact = serde_json::from_str(json)?;
        Self::from_artifact(artifact)
    }

    /// Compile a parsed artifact, validating feature names and tree shape.
    pub fn from_artifact(artifact: ModelArtifact) -> Result<Self> {
        let info = ModelInfo {
            name: artifact.name,
            version: artifact.version,
        };

        let model = match artifact.model {
            ModelSpec::Linear(linear) => {
                let mut weights = Vec::with_capacity(linear.coefficients.len());
                for (name, weight) in &linear.coefficients {
                    let index = feature_index(name).ok_or_else(|| {
                        PredictorError::Artifact(format!(
                            "Unknown feature '{}' in coefficients (expected one of: {})",
                            name,
                            FEATURE_NAMES.join(", ")
                        ))
                    })?;
                    weights.push((index, *weight));
                }
                CompiledModel::Linear {
                    intercept: linear.intercept,
                    weights,
                }
            }
            ModelSpec::Forest(forest) => {
                if forest.trees.is_empty() {
                    return Err(PredictorError::Artifact(
                        "Forest artifact contains no trees".to_string(),
                    ));
                }
                let trees = forest
                    .trees
                    .iter()
                    .enumerate()
                    .map(|(tree_index, tree)| compile_tree(tree_index, &tree.nodes))
                    .collect::<Result<Vec<_>>>()?;
                CompiledModel::Forest { trees }
            }
        };

        debug!(model = %info.name, version = %info.version, "Model artifact compiled");
        Ok(Predictor { info, model })
    }
}

/// Verify one tree and resolve its feature names. Children must reference
/// strictly later nodes, which rules out cycles and keeps the walk bounded.
fn compile_tree(tree_index: usize, nodes: &[TreeNode]) -> Result<CompiledTree> {
    if nodes.is_empty() {
        return Err(PredictorError::Artifact(format!(
            "Tree {} has no nodes",
            tree_index
        )));
    }

    let compiled = nodes
        .iter()
        .enumerate()
        .map(|(node_index, node)| match node {
            TreeNode::Leaf { value } => Ok(CompiledNode::Leaf { value: *value }),
            TreeNode::Split {
                feature,
                threshold,
                left,
                right,
            } => {
                let feature = feature_index(feature).ok_or_else(|| {
                    PredictorError::Artifact(format!(
                        "Tree {} node {} splits on unknown feature '{}'",
                        tree_index, node_index, feature
                    ))
                })?;
                for &child in [left, right] {
                    if child <= node_index || child >= nodes.len() {
                        return Err(PredictorError::Artifact(format!(
                            "Tree {} node {} references invalid child {}",
                            tree_index, node_index, child
                        )));
                    }
                }
                Ok(CompiledNode::Split {
                    feature,
                    threshold: *threshold,
                    left: *left,
                    right: *right,
                })
            }
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CompiledTree { nodes: compiled })
}

impl CompiledTree {
    fn eval(&self, features: &[f64; 10]) -> f64 {
        let mut index = 0;
        loop {
            match self.nodes[index] {
                CompiledNode::Leaf { value } => return value,
                CompiledNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    index = if features[feature] <= threshold {
                        left
                    } else {
                        right
                    };
                }
            }
        }
    }
}

impl WeeklySalesModel for Predictor {
    fn info(&self) -> &ModelInfo {
        &self.info
    }

    fn predict(&self, request: &ForecastRequest) -> f64 {
        let features = feature_vector(request);
        match &self.model {
            CompiledModel::Linear { intercept, weights } => weights
                .iter()
                .fold(*intercept, |acc, (index, weight)| {
                    acc + features[*index] * weight
                }),
            CompiledModel::Forest { trees } => {
                let total: f64 = trees.iter().map(|tree| tree.eval(&features)).sum();
                total / trees.len() as f64
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> ForecastRequest {
        ForecastRequest {
            store: 3,
            holiday_flag: false,
            temperature: 80.0,
            fuel_price: 3.0,
            cpi: 180.0,
            unemployment: 7.0,
            month: 6,
            year: 2011,
            week: 24,
            store_avg_sales: 1_000_000.0,
        }
    }

    #[test]
    fn test_linear_prediction_is_intercept_plus_dot_product() {
        let predictor = Predictor::from_json(
            r#"{
                "name": "baseline", "version": "1.0.0",
                "model": {
                    "kind": "linear",
                    "intercept": 100000.0,
                    "coefficients": { "store_avg_sales": 0.5, "temperature": -100.0 }
                }
            }"#,
        )
        .unwrap();

        // 100000 + 0.5 * 1000000 - 100 * 80 = 592000
        let prediction = predictor.predict(&request());
        assert!((prediction - 592_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_forest_prediction_averages_tree_outputs() {
        let predictor = Predictor::from_json(
            r#"{
                "name": "rf", "version": "1.0.0",
                "model": {
                    "kind": "forest",
                    "trees": [
                        { "nodes": [
                            { "split": { "feature": "temperature", "threshold": 75.0, "left": 1, "right": 2 } },
                            { "leaf": { "value": 900000.0 } },
                            { "leaf": { "value": 1100000.0 } }
                        ] },
                        { "nodes": [ { "leaf": { "value": 1000000.0 } } ] }
                    ]
                }
            }"#,
        )
        .unwrap();

        // temperature 80 > 75 takes the right leaf: (1100000 + 1000000) / 2
        let prediction = predictor.predict(&request());
        assert!((prediction - 1_050_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_unknown_coefficient_feature_is_rejected() {
        let result = Predictor::from_json(
            r#"{
                "name": "bad", "version": "1.0.0",
                "model": {
                    "kind": "linear",
                    "intercept": 0.0,
                    "coefficients": { "weekly_sales": 1.0 }
                }
            }"#,
        );
        assert!(matches!(result, Err(PredictorError::Artifact(_))));
    }

    #[test]
    fn test_backward_child_reference_is_rejected() {
        let result = Predictor::from_json(
            r#"{
                "name": "bad", "version": "1.0.0",
                "model": {
                    "kind": "forest",
                    "trees": [
                        { "nodes": [
                            { "split": { "feature": "cpi", "threshold": 150.0, "left": 0, "right": 1 } },
                            { "leaf": { "value": 1.0 } }
                        ] }
                    ]
                }
            }"#,
        );
        assert!(matches!(result, Err(PredictorError::Artifact(_))));
    }

    #[test]
    fn test_out_of_range_child_reference_is_rejected() {
        let result = Predictor::from_json(
            r#"{
                "name": "bad", "version": "1.0.0",
                "model": {
                    "kind": "forest",
                    "trees": [
                        { "nodes": [
                            { "split": { "feature": "cpi", "threshold": 150.0, "left": 1, "right": 5 } },
                            { "leaf": { "value": 1.0 } }
                        ] }
                    ]
                }
            }"#,
        );
        assert!(matches!(result, Err(PredictorError::Artifact(_))));
    }

    #[test]
    fn test_empty_forest_is_rejected() {
        let result = Predictor::from_json(
            r#"{
                "name": "bad", "version": "1.0.0",
                "model": { "kind": "forest", "trees": [] }
            }"#,
        );
        assert!(matches!(result, Err(PredictorError::Artifact(_))));
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        let result = Predictor::from_json("{ not json");
        assert!(matches!(result, Err(PredictorError::Malformed(_))));
    }

    #[test]
    fn test_load_missing_file_is_an_io_error() {
        let result = Predictor::load("/nonexistent/model.json");
        assert!(matches!(result, Err(PredictorError::Io(_))));
    }
}
