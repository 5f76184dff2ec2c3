//! Power budget estimates for a design.
//!
//! Generation comes from `solar` and `wind` components, consumption from
//! `load` components, and storage from `battery` capacity. Spec values that
//! are missing, zero or non-numeric count as zero (or as the type's default
//! efficiency).

use serde::Serialize;

use crate::design::Component;
use crate::specs::Specs;

pub mod component_kinds {
    pub const SOLAR: &str = "solar";
    pub const WIND: &str = "wind";
    pub const BATTERY: &str = "battery";
    pub const LOAD: &str = "load";
}

/// Solar panel efficiency assumed when the spec does not say.
pub const DEFAULT_SOLAR_EFFICIENCY: f64 = 0.21;

/// Typical wind turbine efficiency.
pub const WIND_EFFICIENCY: f64 = 0.35;

/// Typical battery round-trip efficiency.
pub const BATTERY_EFFICIENCY: f64 = 0.95;

/// Power through a single component, in watts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PowerFlow {
    pub input: f64,
    pub output: f64,
    pub efficiency: f64,
}

impl PowerFlow {
    const NONE: PowerFlow = PowerFlow {
        input: 0.0,
        output: 0.0,
        efficiency: 0.0,
    };
}

/// Aggregate power figures for a whole design.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SystemPower {
    /// Watts of generation capacity.
    pub total_generation: f64,
    /// Watts drawn by loads.
    pub total_consumption: f64,
    /// Watt-hours of battery storage.
    pub storage_capacity: f64,
    /// `total_generation - total_consumption`.
    pub net_power: f64,
}

/// Numeric spec value, or `default` when missing, zero or not a number.
fn spec_or(specs: &Specs, key: &str, default: f64) -> f64 {
    specs
        .get(key)
        .and_then(|v| v.as_number())
        .filter(|v| *v != 0.0 && !v.is_nan())
        .unwrap_or(default)
}

/// Estimate the power flow through one component.
pub fn component_power(component_type: &str, specs: &Specs) -> PowerFlow {
    match component_type {
        component_kinds::SOLAR => {
            let power = spec_or(specs, "power", 0.0);
            let efficiency = spec_or(specs, "efficiency", DEFAULT_SOLAR_EFFICIENCY);
            PowerFlow {
                input: power / efficiency,
                output: power,
                efficiency,
            }
        }
        component_kinds::WIND => {
            let power = spec_or(specs, "power", 0.0);
            PowerFlow {
                input: power / WIND_EFFICIENCY,
                output: power,
                efficiency: WIND_EFFICIENCY,
            }
        }
        component_kinds::BATTERY => {
            let max_charge = spec_or(specs, "maxChargePower", 0.0);
            PowerFlow {
                input: max_charge,
                output: max_charge * BATTERY_EFFICIENCY,
                efficiency: BATTERY_EFFICIENCY,
            }
        }
        component_kinds::LOAD => {
            let power = spec_or(specs, "power", 0.0);
            PowerFlow {
                input: power,
                output: power,
                efficiency: 1.0,
            }
        }
        _ => PowerFlow::NONE,
    }
}

/// Sum generation, consumption and storage across `components`.
pub fn system_power(components: &[Component]) -> SystemPower {
    let mut summary = SystemPower::default();

    for component in components {
        let flow = component_power(&component.component_type, &component.specs);
        match component.component_type.as_str() {
            component_kinds::SOLAR | component_kinds::WIND => {
                summary.total_generation += flow.output;
            }
            component_kinds::BATTERY => {
                summary.storage_capacity += spec_or(&component.specs, "capacity", 0.0);
            }
            component_kinds::LOAD => {
                summary.total_consumption += flow.input;
            }
            _ => {}
        }
    }

    summary.net_power = summary.total_generation - summary.total_consumption;
    summary
}
