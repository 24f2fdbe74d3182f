//! Column preprocessor: standard-scaled numeric columns followed by one-hot
//! encoded categorical columns.

use hip_core::record::PatientRecord;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::artifact::Preprocessor;
use crate::error::ModelError;

const fn default_scale() -> f64 {
    1.0
}

/// A numeric column scaled as `(x - mean) / scale`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct NumericColumn {
    pub name: String,
    #[serde(default)]
    pub mean: f64,
    /// A scale of zero is treated as one.
    #[serde(default = "default_scale")]
    pub scale: f64,
}

/// A categorical column expanded to one indicator per known category.
/// Values outside `categories` encode as all zeros.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CategoricalColumn {
    pub name: String,
    pub categories: Vec<String>,
}

/// Preprocessor artifact (`{timepoint}_preprocessor.json`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ColumnPreprocessor {
    #[serde(default)]
    pub numeric: Vec<NumericColumn>,
    #[serde(default)]
    pub categorical: Vec<CategoricalColumn>,
}

impl ColumnPreprocessor {
    /// Length of the vector [`Preprocessor::transform`] produces.
    #[must_use]
    pub fn output_width(&self) -> usize {
        self.numeric.len()
            + self
                .categorical
                .iter()
                .map(|column| column.categories.len())
                .sum::<usize>()
    }
}

impl Preprocessor for ColumnPreprocessor {
    fn transform(&self, record: &PatientRecord) -> Result<Vec<f64>, ModelError> {
        let mut out = Vec::with_capacity(self.output_width());

        for column in &self.numeric {
            let value = record.get(&column.name).ok_or_else(|| absent(&column.name))?;
            let number = value.as_number().ok_or_else(|| {
                ModelError::Transform(format!(
                    "column '{}' expects a number, got '{value}'",
                    column.name
                ))
            })?;
            let scale = if column.scale == 0.0 { 1.0 } else { column.scale };
            out.push((number - column.mean) / scale);
        }

        for column in &self.categorical {
            let value = record
                .get(&column.name)
                .ok_or_else(|| absent(&column.name))?
                .as_text();
            out.extend(
                column
                    .categories
                    .iter()
                    .map(|category| if *category == value { 1.0 } else { 0.0 }),
            );
        }

        Ok(out)
    }
}

fn absent(name: &str) -> ModelError {
    ModelError::Transform(format!("column '{name}' is absent"))
}
