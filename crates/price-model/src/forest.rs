//! Random Forest Artifact
//!
//! Serialized tree-ensemble regressor loaded once at startup. The artifact
//! format is internal to this crate; callers only see the
//! [`RegressionModel`](crate::RegressionModel) capability.

use crate::{ModelError, RegressionModel};
use feature_codec::{FeatureVector, FEATURE_DIMENSION};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::info;

/// One node in a regression tree
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Node {
    /// Internal split: go left when `features[feature] <= threshold`
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    /// Terminal node holding the tree's output
    Leaf { value: f64 },
}

/// A single regression tree, nodes indexed from the root at 0
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tree {
    pub nodes: Vec<Node>,
}

impl Tree {
    fn evaluate(&self, features: &[f64]) -> Result<f64, ModelError> {
        let mut idx = 0;
        loop {
            match self.nodes.get(idx) {
                Some(Node::Leaf { value }) => return Ok(*value),
                Some(Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                }) => {
                    idx = if features[*feature] <= *threshold {
                        *left
                    } else {
                        *right
                    };
                }
                None => {
                    return Err(ModelError::MalformedArtifact(format!(
                        "tree node index {idx} out of bounds"
                    )))
                }
            }
        }
    }
}

/// On-disk schema of the trained artifact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForestArtifact {
    /// Artifact version, bumped together with the categorical state table
    pub version: u32,
    /// Feature dimension the ensemble was trained on
    pub feature_dimension: usize,
    /// The tree ensemble
    pub trees: Vec<Tree>,
}

impl ForestArtifact {
    /// Read and validate an artifact from disk
    pub fn load(path: impl AsRef<Path>) -> Result<RandomForest, ModelError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let artifact: ForestArtifact = serde_json::from_reader(BufReader::new(file))?;
        let forest = artifact.into_model()?;
        info!(
            path = %path.display(),
            trees = forest.tree_count(),
            "loaded regression model artifact"
        );
        Ok(forest)
    }

    /// Validate the artifact and turn it into a usable model
    pub fn into_model(self) -> Result<RandomForest, ModelError> {
        if self.feature_dimension != FEATURE_DIMENSION {
            return Err(ModelError::DimensionMismatch {
                expected: self.feature_dimension,
                actual: FEATURE_DIMENSION,
            });
        }
        if self.trees.is_empty() {
            return Err(ModelError::MalformedArtifact("empty ensemble".to_string()));
        }
        for (i, tree) in self.trees.iter().enumerate() {
            if tree.nodes.is_empty() {
                return Err(ModelError::MalformedArtifact(format!("tree {i} has no nodes")));
            }
            for (idx, node) in tree.nodes.iter().enumerate() {
                if let Node::Split {
                    feature,
                    left,
                    right,
                    ..
                } = node
                {
                    if *feature >= self.feature_dimension {
                        return Err(ModelError::MalformedArtifact(format!(
                            "tree {i} splits on feature {feature}, dimension is {}",
                            self.feature_dimension
                        )));
                    }
                    if *left >= tree.nodes.len() || *right >= tree.nodes.len() {
                        return Err(ModelError::MalformedArtifact(format!(
                            "tree {i} has a child index past {} nodes",
                            tree.nodes.len()
                        )));
                    }
                    // Children must come strictly after their parent, so
                    // every traversal path is finite.
                    if *left <= idx || *right <= idx {
                        return Err(ModelError::MalformedArtifact(format!(
                            "tree {i} split at node {idx} points back at node {}",
                            (*left).min(*right)
                        )));
                    }
                }
            }
        }
        Ok(RandomForest { trees: self.trees })
    }
}

/// Validated tree-ensemble regressor
#[derive(Debug, Clone)]
pub struct RandomForest {
    trees: Vec<Tree>,
}

impl RandomForest {
    /// Number of trees in the ensemble
    pub fn tree_count(&self) -> usize {
        self.trees.len()
    }
}

impl RegressionModel for RandomForest {
    fn regress(&self, features: &FeatureVector) -> Result<f64, ModelError> {
        let mut sum = 0.0;
        for tree in &self.trees {
            sum += tree.evaluate(features.as_slice())?;
        }
        Ok(sum / self.trees.len() as f64)
    }
}
