//! Validation logic run before planning.

use std::collections::HashSet;

use crate::config::{PlannerConfig, MAX_RACK_SLOTS};
use crate::inventory::Inventory;
use crate::model::Feature;

/// Validation result with warnings.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Whether validation passed.
    pub passed: bool,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Error messages.
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Create a passing result.
    pub fn ok() -> Self {
        Self {
            passed: true,
            ..Default::default()
        }
    }

    /// Create a failing result with an error.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            passed: false,
            errors: vec![message.into()],
            ..Default::default()
        }
    }

    /// Add a warning.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Add an error.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.passed = false;
    }

    /// Merge another result into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.warnings.extend(other.warnings);
        self.errors.extend(other.errors);
        if !other.passed {
            self.passed = false;
        }
    }
}

/// Validate a planner configuration.
pub fn validate_config(config: &PlannerConfig) -> ValidationResult {
    let mut result = ValidationResult::ok();
    let rack = &config.rack;
    let capacity = rack.bounded_capacity();

    if let Some(capacity) = capacity {
        if capacity > MAX_RACK_SLOTS {
            result.add_error(format!(
                "Rack: capacity {} exceeds the maximum of {} slots",
                capacity, MAX_RACK_SLOTS
            ));
        }
    }

    let mut seen = HashSet::new();
    for &slot in &rack.invalidated {
        if slot == 0 {
            result.add_error("Rack: slot numbers start at 1, cannot invalidate slot 0");
            continue;
        }

        if let Some(capacity) = capacity {
            if slot > capacity {
                result.add_error(format!(
                    "Rack: invalidated slot {} is beyond the rack capacity of {}",
                    slot, capacity
                ));
                continue;
            }
        } else if slot > MAX_RACK_SLOTS {
            result.add_error(format!(
                "Rack: invalidated slot {} is beyond the last addressable slot {}",
                slot, MAX_RACK_SLOTS
            ));
            continue;
        }

        if !seen.insert(slot) {
            result.add_warning(format!("Rack: slot {} is invalidated more than once", slot));
        }
    }

    if let Some(capacity) = capacity {
        if seen.len() >= capacity {
            result.add_error(format!("Rack: all {} slots are invalidated", capacity));
        }
    }

    let machining = &config.machining;
    if machining.slot_peck_drilling.pecks_per_hole == 0 {
        result.add_error("Machining: pecks_per_hole must be at least 1");
    }

    if machining.slot_peck_drilling.max_length_to_bit_diameter <= 0.0 {
        result.add_error("Machining: max_length_to_bit_diameter must be positive");
    }

    if machining.z_bottom >= machining.z_safe {
        result.add_warning(format!(
            "Machining: z_bottom ({}) is not below z_safe ({})",
            machining.z_bottom, machining.z_safe
        ));
    }

    for (name, feed) in [
        ("drill_z_feed", machining.drill_z_feed),
        ("router_z_feed", machining.router_z_feed),
        ("router_table_feed", machining.router_table_feed),
    ] {
        if feed <= 0.0 {
            result.add_error(format!("Machining: {} must be positive", name));
        }
    }

    result
}

/// Validate the features collected from a board.
pub fn validate_inventory(inventory: &Inventory) -> ValidationResult {
    let mut result = ValidationResult::ok();

    if inventory.is_empty() {
        result.add_warning("Inventory: no holes to machine");
        return result;
    }

    for (label, buckets) in [("PTH", inventory.pth()), ("NPTH", inventory.npth())] {
        for (diameter, features) in buckets.iter() {
            if diameter.is_zero() {
                result.add_warning(format!(
                    "Inventory: {} zero diameter {} feature(s)",
                    features.len(),
                    label
                ));
            }

            for feature in features {
                if let Feature::Oblong(oblong) = feature {
                    if oblong.distance.is_zero() {
                        result.add_warning(format!(
                            "Inventory: {} oblong hole at {} has coincident ends",
                            label, oblong.start
                        ));
                    }
                }
            }
        }
    }

    result
}
