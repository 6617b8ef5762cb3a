//! Tree-ensemble regressor loaded from an exported random forest.
//!
//! Each tree is a flat node array rooted at index 0. A split sends the sample
//! left when `features[feature] <= threshold`, right otherwise. The ensemble
//! prediction is the mean of the leaf values reached in every tree.

use std::path::Path;

use serde::Deserialize;

use super::{FeatureVector, Regressor, FEATURE_COUNT};
use crate::error::CoreError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Node {
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

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RegressionTree {
    nodes: Vec<Node>,
}

impl RegressionTree {
    /// A tree with no splits that always predicts `value`.
    pub fn leaf(value: f64) -> Self {
        Self {
            nodes: vec![Node::Leaf { value }],
        }
    }

    pub fn new(nodes: Vec<Node>) -> Result<Self, CoreError> {
        let tree = Self { nodes };
        tree.validate()?;
        Ok(tree)
    }

    /// Children must point strictly forward, so every walk terminates.
    fn validate(&self) -> Result<(), CoreError> {
        if self.nodes.is_empty() {
            return Err(CoreError::ModelLoad("tree has no nodes".into()));
        }

        for (idx, node) in self.nodes.iter().enumerate() {
            match *node {
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    if feature >= FEATURE_COUNT {
                        return Err(CoreError::ModelLoad(format!(
                            "node {idx} splits on feature {feature}, only {FEATURE_COUNT} exist"
                        )));
                    }
                    if !threshold.is_finite() {
                        return Err(CoreError::ModelLoad(format!(
                            "node {idx} has a non-finite threshold"
                        )));
                    }
                    for child in [left, right] {
                        if child <= idx || child >= self.nodes.len() {
                            return Err(CoreError::ModelLoad(format!(
                                "node {idx} points to invalid child {child}"
                            )));
                        }
                    }
                }
                Node::Leaf { value } => {
                    if !value.is_finite() {
                        return Err(CoreError::ModelLoad(format!(
                            "leaf {idx} has a non-finite value"
                        )));
                    }
                }
            }
        }

        Ok(())
    }

    pub fn predict(&self, features: &FeatureVector) -> f64 {
        let x = features.values();
        let mut idx = 0;
        loop {
            match self.nodes[idx] {
                Node::Leaf { value } => return value,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    idx = if x[feature] <= threshold { left } else { right };
                }
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct ForestArtifact {
    trees: Vec<RegressionTree>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForestRegressor {
    trees: Vec<RegressionTree>,
}

impl ForestRegressor {
    pub fn new(trees: Vec<RegressionTree>) -> Result<Self, CoreError> {
        if trees.is_empty() {
            return Err(CoreError::ModelLoad("forest has no trees".into()));
        }
        for (i, tree) in trees.iter().enumerate() {
            tree.validate()
                .map_err(|e| CoreError::ModelLoad(format!("tree {i}: {e}")))?;
        }
        Ok(Self { trees })
    }

    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let artifact: ForestArtifact = serde_json::from_str(json)
            .map_err(|e| CoreError::ModelLoad(format!("invalid forest JSON: {e}")))?;
        Self::new(artifact.trees)
    }

    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| CoreError::ModelLoad(format!("cannot read {}: {e}", path.display())))?;
        Self::from_json(&json)
            .map_err(|e| CoreError::ModelLoad(format!("{}: {e}", path.display())))
    }

    pub fn tree_count(&self) -> usize {
        self.trees.len()
    }
}

impl Regressor for ForestRegressor {
    fn predict(&self, features: &FeatureVector) -> f64 {
        let total: f64 = self.trees.iter().map(|t| t.predict(features)).sum();
        total / self.trees.len() as f64
    }
}
