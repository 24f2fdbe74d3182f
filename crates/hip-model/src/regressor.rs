//! Regressor artifacts (`{timepoint}_model.json`).
//!
//! Two model families are supported, selected by the `kind` tag:
//!
//! ```json
//! {"kind": "linear", "intercept": 1.2, "coefficients": [0.3, -0.1]}
//! {"kind": "tree_ensemble", "base_score": 2.0, "learning_rate": 0.1,
//!  "aggregation": "sum", "trees": [{"nodes": [...]}]}
//! ```

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::artifact::Regressor;
use crate::error::ModelError;

/// Regressor artifact, tagged by model family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RegressorModel {
    Linear(LinearModel),
    TreeEnsemble(TreeEnsemble),
}

impl Regressor for RegressorModel {
    fn predict(&self, features: &[f64]) -> Result<f64, ModelError> {
        match self {
            Self::Linear(model) => model.predict(features),
            Self::TreeEnsemble(model) => model.predict(features),
        }
    }
}

// ---------------------------------------------------------------------------
// Linear
// ---------------------------------------------------------------------------

/// `intercept + Σ coefficients[i] * x[i]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LinearModel {
    #[serde(default)]
    pub intercept: f64,
    pub coefficients: Vec<f64>,
}

impl Regressor for LinearModel {
    fn predict(&self, features: &[f64]) -> Result<f64, ModelError> {
        if features.len() != self.coefficients.len() {
            return Err(ModelError::Shape(format!(
                "linear model has {} coefficients but received {} features",
                self.coefficients.len(),
                features.len()
            )));
        }
        Ok(self.intercept
            + self
                .coefficients
                .iter()
                .zip(features)
                .map(|(coef, x)| coef * x)
                .sum::<f64>())
    }
}

// ---------------------------------------------------------------------------
// Tree ensemble
// ---------------------------------------------------------------------------

const fn default_learning_rate() -> f64 {
    1.0
}

/// How per-tree outputs combine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Aggregation {
    /// Boosting: trees add up.
    #[default]
    Sum,
    /// Bagging: trees average.
    Mean,
}

/// `base_score + learning_rate * aggregate(tree outputs)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TreeEnsemble {
    #[serde(default)]
    pub base_score: f64,
    #[serde(default = "default_learning_rate")]
    pub learning_rate: f64,
    #[serde(default)]
    pub aggregation: Aggregation,
    pub trees: Vec<Tree>,
}

/// One decision tree stored as a flat node array; node 0 is the root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Tree {
    pub nodes: Vec<TreeNode>,
}

/// `x[feature] <= threshold` descends `left`, otherwise `right`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum TreeNode {
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

impl Tree {
    fn evaluate(&self, index: usize, features: &[f64]) -> Result<f64, ModelError> {
        let mut cursor = 0usize;
        // A well-formed tree reaches a leaf in fewer steps than it has nodes.
        for _ in 0..=self.nodes.len() {
            let node = self.nodes.get(cursor).ok_or_else(|| {
                ModelError::Shape(format!("tree {index} has no node {cursor}"))
            })?;
            match node {
                TreeNode::Leaf { value } => return Ok(*value),
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    let x = features.get(*feature).ok_or_else(|| {
                        ModelError::Shape(format!(
                            "tree {index} splits on feature {feature} but only {} were given",
                            features.len()
                        ))
                    })?;
                    cursor = if x <= threshold { *left } else { *right };
                }
            }
        }
        Err(ModelError::Shape(format!("tree {index} contains a cycle")))
    }
}

impl Regressor for TreeEnsemble {
    fn predict(&self, features: &[f64]) -> Result<f64, ModelError> {
        if self.trees.is_empty() {
            return Err(ModelError::Shape("tree ensemble has no trees".to_string()));
        }

        let mut total = 0.0;
        for (index, tree) in self.trees.iter().enumerate() {
            total += tree.evaluate(index, features)?;
        }

        #[allow(clippy::cast_precision_loss)]
        let combined = match self.aggregation {
            Aggregation::Sum => total,
            Aggregation::Mean => total / self.trees.len() as f64,
        };

        Ok(self.base_score + self.learning_rate * combined)
    }
}
