//! Design components and creation rules.
//!
//! A design is a named canvas of placed components. Components reference one
//! another by id through `connections`; those references are not checked, so
//! a connection may name a component that does not exist.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;
use crate::specs::Specs;

/// A single element placed on a design canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Component {
    #[validate(length(min = 1, message = "component id must not be empty"))]
    pub id: String,
    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "component type must not be empty"))]
    pub component_type: String,
    pub x: f64,
    pub y: f64,
    pub connections: Vec<String>,
    pub specs: Specs,
}

/// Validate a design name. Blank names are rejected.
pub fn validate_design_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation(
            "Design name must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Validate the component list of a new design.
///
/// Each component must carry a non-empty id and type, and ids must be unique
/// within the design. An empty list is valid.
pub fn validate_components(components: &[Component]) -> Result<(), CoreError> {
    let mut seen = HashSet::with_capacity(components.len());

    for (index, component) in components.iter().enumerate() {
        component.validate().map_err(|e| {
            CoreError::Validation(format!("Invalid component at index {index}: {e}"))
        })?;

        if !seen.insert(component.id.as_str()) {
            return Err(CoreError::Validation(format!(
                "Duplicate component id '{}'",
                component.id
            )));
        }
    }

    Ok(())
}

/// Validate everything required to persist a new design.
pub fn validate_new_design(name: &str, components: &[Component]) -> Result<(), CoreError> {
    validate_design_name(name)?;
    validate_components(components)
}
