//! Product search by type and spec attribute predicates.
//!
//! A [`SpecQuery`] narrows a product list in three passes: type equality,
//! numeric `min`/`max` ranges, then exact value matches. Every pass is a
//! stable filter over the previous result, so relative order is preserved and
//! an empty result is a valid outcome.
//!
//! Range predicates coerce the product's value to a number. A product that
//! lacks the attribute is compared as `0.0`; a product whose value is text
//! that does not parse as a number never satisfies the bound.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::error::CoreError;
use crate::specs::{SpecValue, Specs};

/// Query key selecting the product type.
pub const TYPE_PARAM: &str = "type";

/// Suffix marking an inclusive lower bound (`power_min`).
pub const MIN_SUFFIX: &str = "_min";

/// Suffix marking an inclusive upper bound (`capacity_max`).
pub const MAX_SUFFIX: &str = "_max";

/// Inclusive numeric bounds for one attribute. Either side may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RangeBound {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl RangeBound {
    pub fn min(min: f64) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    pub fn max(max: f64) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    fn admits(&self, value: Option<f64>) -> bool {
        let Some(value) = value else {
            // Non-numeric text fails any bound that is actually set.
            return self.min.is_none() && self.max.is_none();
        };
        self.min.map_or(true, |min| value >= min) && self.max.map_or(true, |max| value <= max)
    }
}

/// A complete product search request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpecQuery {
    pub product_type: Option<String>,
    pub ranges: BTreeMap<String, RangeBound>,
    pub exact: BTreeMap<String, String>,
}

impl SpecQuery {
    /// Restrict results to a single product type.
    pub fn with_type(mut self, product_type: impl Into<String>) -> Self {
        self.product_type = Some(product_type.into());
        self
    }

    /// Add (or replace) the range for `attribute`.
    pub fn with_range(mut self, attribute: impl Into<String>, bound: RangeBound) -> Self {
        self.ranges.insert(attribute.into(), bound);
        self
    }

    /// Require `attribute` to equal `value`.
    pub fn with_exact(mut self, attribute: impl Into<String>, value: impl Into<String>) -> Self {
        self.exact.insert(attribute.into(), value.into());
        self
    }

    /// Build a query from raw `key=value` search parameters.
    ///
    /// Recognised keys are `type`, `<attr>_min`, `<attr>_max` and plain
    /// `<attr>` for an exact match. Every `<attr>` must be one of
    /// `known_attributes`. Bounds must be finite numbers. An empty `type`
    /// is treated as absent.
    pub fn from_params<I, K, V>(
        params: I,
        known_attributes: &BTreeSet<&str>,
    ) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut query = SpecQuery::default();

        for (key, value) in params {
            let (key, value) = (key.as_ref(), value.as_ref());

            if key == TYPE_PARAM {
                query.product_type = (!value.is_empty()).then(|| value.to_string());
                continue;
            }

            if let Some(attribute) = key.strip_suffix(MIN_SUFFIX) {
                let bound = parse_bound(key, value)?;
                ensure_known(attribute, known_attributes)?;
                query.ranges.entry(attribute.to_string()).or_default().min = Some(bound);
            } else if let Some(attribute) = key.strip_suffix(MAX_SUFFIX) {
                let bound = parse_bound(key, value)?;
                ensure_known(attribute, known_attributes)?;
                query.ranges.entry(attribute.to_string()).or_default().max = Some(bound);
            } else {
                ensure_known(key, known_attributes)?;
                query.exact.insert(key.to_string(), value.to_string());
            }
        }

        Ok(query)
    }

    /// Whether `product` satisfies every predicate of this query.
    pub fn matches(&self, product: &Product) -> bool {
        self.product_type
            .as_deref()
            .map_or(true, |t| product.product_type == t)
            && self
                .ranges
                .iter()
                .all(|(attr, bound)| bound.admits(coerce_or_zero(&product.specs, attr)))
            && self
                .exact
                .iter()
                .all(|(attr, expected)| exact_match(product.specs.get(attr), expected))
    }
}

/// Narrow `products` to those matching `query`, preserving order.
pub fn filter_products(products: &[Product], query: &SpecQuery) -> Vec<Product> {
    products
        .iter()
        .filter(|p| query.matches(p))
        .cloned()
        .collect()
}

/// Numeric value of `attribute`, with a missing attribute reading as `0.0`.
///
/// Returns `None` only when the attribute is present but not numeric.
pub fn coerce_or_zero(specs: &Specs, attribute: &str) -> Option<f64> {
    match specs.get(attribute) {
        Some(value) => value.as_number(),
        None => Some(0.0),
    }
}

fn exact_match(actual: Option<&SpecValue>, expected: &str) -> bool {
    let Some(actual) = actual else {
        return false;
    };
    if actual.to_string() == expected {
        return true;
    }
    match (actual.as_number(), expected.trim().parse::<f64>()) {
        (Some(a), Ok(e)) => a == e,
        _ => false,
    }
}

fn parse_bound(key: &str, value: &str) -> Result<f64, CoreError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| {
            CoreError::Validation(format!("Parameter '{key}' must be a number, got '{value}'"))
        })
}

fn ensure_known(attribute: &str, known: &BTreeSet<&str>) -> Result<(), CoreError> {
    if known.contains(attribute) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Unknown spec attribute '{attribute}'"
        )))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
