//! Technical attribute values shared by catalog products and placed components.
//!
//! A spec value is either a number (`power`, `capacity`, ...) or free text
//! (`phase`, `name`, ...). The JSON representation is untagged: a bare number
//! or a bare string.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize, Serializer};

/// Attribute name → value, in declaration order.
pub type Specs = IndexMap<String, SpecValue>;

/// A single spec value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SpecValue {
    Number(f64),
    Text(String),
}

impl SpecValue {
    /// Numeric view of the value.
    ///
    /// Text is parsed as a decimal number after trimming whitespace. Returns
    /// `None` when the text is not numeric.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            SpecValue::Number(n) => Some(*n),
            SpecValue::Text(s) => s.trim().parse::<f64>().ok(),
        }
    }
}

impl From<f64> for SpecValue {
    fn from(value: f64) -> Self {
        SpecValue::Number(value)
    }
}

impl From<i64> for SpecValue {
    fn from(value: i64) -> Self {
        SpecValue::Number(value as f64)
    }
}

impl From<&str> for SpecValue {
    fn from(value: &str) -> Self {
        SpecValue::Text(value.to_string())
    }
}

impl From<String> for SpecValue {
    fn from(value: String) -> Self {
        SpecValue::Text(value)
    }
}

impl fmt::Display for SpecValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecValue::Number(n) => write!(f, "{n}"),
            SpecValue::Text(s) => f.write_str(s),
        }
    }
}

/// Largest magnitude at which every integer is exactly representable in f64.
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

impl Serialize for SpecValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            // Whole numbers go out as JSON integers (`400`, not `400.0`).
            SpecValue::Number(n) if n.fract() == 0.0 && n.abs() <= MAX_EXACT_INT => {
                serializer.serialize_i64(*n as i64)
            }
            SpecValue::Number(n) => serializer.serialize_f64(*n),
            SpecValue::Text(s) => serializer.serialize_str(s),
        }
    }
}

/// Build a [`Specs`] map from `(name, value)` pairs.
pub fn specs<I, K, V>(pairs: I) -> Specs
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<SpecValue>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
