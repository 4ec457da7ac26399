//! pcb2gcode-rs - Drilling and routing plans for printed circuit boards.
//!
//! Holes of a board are collected into a feature inventory, grouped by
//! plating and diameter. A planner then picks a tool for every feature,
//! allocates the tools to the slots of the machine's tool rack and emits
//! the G-code program.
//!
//! # Example
//!
//! ```no_run
//! use pcb2gcode_rs::{convert_board_to_gcode, Operations, PlannerConfig};
//! use std::path::Path;
//!
//! let config = PlannerConfig::default();
//! let gcode = convert_board_to_gcode(Path::new("board.json"), &config, Operations::ALL).unwrap();
//! println!("{}", gcode);
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod inventory;
pub mod model;
pub mod parser;
pub mod planner;
pub mod rack;
pub mod stock;
pub mod units;
pub mod validation;

use std::path::Path;

// Re-exports for convenience
pub use config::{MachiningConfig, PlannerConfig, RackConfig, StockConfig};
pub use error::{ErrorCode, PlanError, Result};
pub use generator::generate_gcode;
pub use inventory::{DiameterBuckets, HoleOptions, Inventory, Operations};
pub use model::{Coordinate, CutDirection, Feature, Hole, Oblong, Tool, ToolKind};
pub use parser::{load_board, BoardDocument};
pub use planner::{MachiningPlan, Operation, Planner, ToolJob};
pub use rack::{Rack, RackChange, Slot};
pub use units::{Angle, Length};
pub use validation::{validate_config, validate_inventory, ValidationResult};

/// Plan the machining of a board file.
///
/// The machine rack is built from the rack section of `config`.
pub fn plan_board(input_path: &Path, config: &PlannerConfig, ops: Operations) -> Result<MachiningPlan> {
    let checked = config.validate();
    if !checked.passed {
        return Err(PlanError::InvalidConfig {
            message: checked.errors.join("; "),
        });
    }

    let board = load_board(input_path)?;
    let inventory = board.to_inventory();

    let validation = validate_inventory(&inventory);
    for warning in &validation.warnings {
        tracing::warn!("{}", warning);
    }

    let rack = Rack::from_config(&config.rack)?;
    Planner::new(config).plan(&inventory, ops, rack)
}

/// Convert a board file to a G-code program.
pub fn convert_board_to_gcode(
    input_path: &Path,
    config: &PlannerConfig,
    ops: Operations,
) -> Result<String> {
    let plan = plan_board(input_path, config, ops)?;

    let filename = input_path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("board.json");

    Ok(generate_gcode(&plan, config, filename))
}
