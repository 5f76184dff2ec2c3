//! Palette of component types that can be placed on a design canvas.

use std::sync::LazyLock;

use serde::Serialize;

use crate::power::component_kinds;
use crate::specs::{SpecValue, Specs};

/// A placeable component type and the specs a new instance starts with.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentType {
    #[serde(rename = "type")]
    pub component_type: &'static str,
    pub label: &'static str,
    pub default_specs: Specs,
}

/// Every type offered by the palette, in display order.
pub static PALETTE: LazyLock<Vec<ComponentType>> = LazyLock::new(|| {
    vec![
        entry(
            component_kinds::SOLAR,
            "Solar Panel",
            &[
                ("power", SpecValue::Number(400.0)),
                ("efficiency", SpecValue::Number(0.21)),
                ("area", SpecValue::Number(1.95)),
            ],
        ),
        entry(
            component_kinds::WIND,
            "Wind Turbine",
            &[
                ("power", SpecValue::Number(2000.0)),
                ("cutInSpeed", SpecValue::Number(3.0)),
                ("ratedSpeed", SpecValue::Number(12.0)),
            ],
        ),
        entry(
            component_kinds::BATTERY,
            "Battery Storage",
            &[
                ("capacity", SpecValue::Number(5000.0)),
                ("voltage", SpecValue::Number(12.0)),
                ("maxChargePower", SpecValue::Number(2000.0)),
            ],
        ),
        entry(
            component_kinds::LOAD,
            "Load",
            &[
                ("power", SpecValue::Number(1000.0)),
                ("voltage", SpecValue::Number(230.0)),
                ("phase", SpecValue::Text("single".into())),
            ],
        ),
    ]
});

fn entry(
    component_type: &'static str,
    label: &'static str,
    defaults: &[(&str, SpecValue)],
) -> ComponentType {
    ComponentType {
        component_type,
        label,
        default_specs: defaults
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect(),
    }
}

/// Default specs for a new component of `component_type`.
///
/// Unknown types start with no specs.
pub fn default_specs(component_type: &str) -> Specs {
    PALETTE
        .iter()
        .find(|t| t.component_type == component_type)
        .map(|t| t.default_specs.clone())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn battery_defaults() {
        let specs = default_specs("battery");
        assert_eq!(specs["capacity"], SpecValue::Number(5000.0));
        assert_eq!(specs.len(), 3);
    }

    #[test]
    fn unknown_type_has_empty_defaults() {
        assert!(default_specs("hydro").is_empty());
    }

    #[test]
    fn palette_types_are_distinct() {
        let types: std::collections::BTreeSet<_> =
            PALETTE.iter().map(|t| t.component_type).collect();
        assert_eq!(types.len(), PALETTE.len());
    }
}
