//! Validation of configurations and inventories.

mod validate;

pub use validate::{validate_config, validate_inventory, ValidationResult};
