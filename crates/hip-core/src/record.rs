//! Patient records: a name-to-value map built fresh for every prediction.

use std::collections::BTreeMap;
use std::fmt;

use schemars::JsonSchema;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// A single feature value. Booleans are stored as `0`/`1`.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(untagged)]
pub enum FeatureValue {
    Number(f64),
    Text(String),
}

impl FeatureValue {
    /// Numeric view. Text that parses as a number counts as numeric.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Text(text) => text.trim().parse().ok(),
        }
    }

    /// Textual view. Integral numbers render without a decimal point.
    #[must_use]
    pub fn as_text(&self) -> String {
        match self {
            Self::Number(value) => value.to_string(),
            Self::Text(text) => text.clone(),
        }
    }

    /// Numbers become their [`as_text`](Self::as_text) form; text is kept.
    #[must_use]
    pub fn into_text(self) -> Self {
        match self {
            Self::Number(value) => Self::Text(value.to_string()),
            text @ Self::Text(_) => text,
        }
    }

    /// Interpret free text: numbers become `Number`, anything else `Text`.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        trimmed
            .parse::<f64>()
            .map_or_else(|_| Self::Text(trimmed.to_string()), Self::Number)
    }
}

impl fmt::Display for FeatureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_text())
    }
}

impl From<f64> for FeatureValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for FeatureValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<bool> for FeatureValue {
    fn from(value: bool) -> Self {
        Self::Number(if value { 1.0 } else { 0.0 })
    }
}

impl From<&str> for FeatureValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FeatureValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<'de> Deserialize<'de> for FeatureValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct FeatureValueVisitor;

        impl Visitor<'_> for FeatureValueVisitor {
            type Value = FeatureValue;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a number, boolean, or string")
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
                Ok(FeatureValue::from(v))
            }

            #[allow(clippy::cast_precision_loss)]
            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(FeatureValue::Number(v as f64))
            }

            #[allow(clippy::cast_precision_loss)]
            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(FeatureValue::Number(v as f64))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
                Ok(FeatureValue::Number(v))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(FeatureValue::Text(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
                Ok(FeatureValue::Text(v))
            }
        }

        deserializer.deserialize_any(FeatureValueVisitor)
    }
}

/// Feature name to value mapping for one patient.
///
/// Keys not in the active feature set are carried along and ignored by the
/// predictors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct PatientRecord {
    values: BTreeMap<String, FeatureValue>,
}

impl PatientRecord {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<FeatureValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FeatureValue>) {
        self.values.insert(name.into(), value.into());
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FeatureValue> {
        self.values.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut FeatureValue> {
        self.values.get_mut(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Numeric value of `name`, if present and numeric.
    #[must_use]
    pub fn number(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(FeatureValue::as_number)
    }

    /// Names from `required` that this record lacks, in the order given.
    #[must_use]
    pub fn missing<'a>(&self, required: &[&'a str]) -> Vec<&'a str> {
        required
            .iter()
            .copied()
            .filter(|name| !self.contains(name))
            .collect()
    }

    /// Merge `other` into `self`; values in `other` win.
    pub fn extend(&mut self, other: Self) {
        self.values.extend(other.values);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FeatureValue)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl<K, V> FromIterator<(K, V)> for PatientRecord
where
    K: Into<String>,
    V: Into<FeatureValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Self::new();
        for (name, value) in iter {
            record.insert(name, value);
        }
        record
    }
}

/// Split a `NAME=VALUE` assignment. The name may contain spaces
/// (`"Pre-Op Pain=5"`); the split happens at the last `=`.
///
/// # Errors
///
/// Returns [`CoreError::InvalidFeature`] when there is no `=` or the name
/// is empty.
pub fn split_assignment(raw: &str) -> Result<(&str, &str), CoreError> {
    let Some((name, value)) = raw.rsplit_once('=') else {
        return Err(CoreError::InvalidFeature {
            name: raw.to_string(),
            reason: "expected NAME=VALUE".to_string(),
        });
    };
    let name = name.trim();
    if name.is_empty() {
        return Err(CoreError::InvalidFeature {
            name: raw.to_string(),
            reason: "feature name is empty".to_string(),
        });
    }
    Ok((name, value.trim()))
}
