//! Configuration constants and settings for the planner.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{PlanError, Result};
use crate::model::{CutDirection, ToolKind};
use crate::units::Length;
use crate::validation::{validate_config, ValidationResult};

/// Highest slot number a rack can address, bounded or not.
pub const MAX_RACK_SLOTS: usize = 999;

/// Default retract height above the board in mm.
pub const DEFAULT_Z_SAFE_MM: f64 = 2.0;

/// Default cutting depth in mm (negative is below the board surface).
pub const DEFAULT_Z_BOTTOM_MM: f64 = -2.0;

/// Default drill plunge feed in mm/min.
pub const DEFAULT_DRILL_Z_FEED: f64 = 600.0;

/// Default router plunge feed in mm/min.
pub const DEFAULT_ROUTER_Z_FEED: f64 = 300.0;

/// Default router lateral feed in mm/min.
pub const DEFAULT_ROUTER_TABLE_FEED: f64 = 400.0;

/// Default drill spindle speed.
pub const DEFAULT_DRILL_RPM: u32 = 30_000;

/// Default router spindle speed.
pub const DEFAULT_ROUTER_RPM: u32 = 24_000;

/// Slots longer than this multiple of their width are routed rather than peck drilled.
pub const DEFAULT_MAX_LENGTH_TO_BIT_DIAMETER: f64 = 2.0;

/// Number of drill pecks per bit diameter when drilling a slot.
pub const DEFAULT_PECKS_PER_HOLE: u32 = 3;

/// Default tolerance, in percent, for picking a smaller stock bit.
pub const DEFAULT_DOWNSIZING_PERCENT: f64 = 5.0;

/// Default tolerance, in percent, for picking a larger stock drill bit.
pub const DEFAULT_OVERSIZING_PERCENT: f64 = 5.0;

/// Complete planner configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Tool rack (magazine) settings.
    pub rack: RackConfig,
    /// Cutting parameters.
    pub machining: MachiningConfig,
    /// Available stock of bits.
    pub stock: StockConfig,
}

impl PlannerConfig {
    /// Load a configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(PlanError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Err(PlanError::EmptyFile {
                path: path.to_path_buf(),
            });
        }

        serde_json::from_str(&content).map_err(|source| PlanError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Check the configuration for inconsistencies.
    pub fn validate(&self) -> ValidationResult {
        validate_config(self)
    }
}

/// Rack settings supplied before planning starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RackConfig {
    /// Number of slots of an automatic tool changer. `None` or 0 is a manual rack.
    pub capacity: Option<usize>,
    /// 1-based slots which are broken or reserved.
    pub invalidated: Vec<usize>,
    /// Sort the required tools drills first, smallest first.
    pub sort: bool,
}

impl Default for RackConfig {
    fn default() -> Self {
        Self {
            capacity: None,
            invalidated: Vec::new(),
            sort: true,
        }
    }
}

impl RackConfig {
    /// Capacity of a bounded rack, ignoring a zero size.
    pub fn bounded_capacity(&self) -> Option<usize> {
        self.capacity.filter(|&c| c > 0)
    }
}

/// Slot peck drilling settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PeckDrilling {
    /// Slot centre distance over width above which the slot is routed.
    pub max_length_to_bit_diameter: f64,
    /// Pecks per bit diameter along the slot.
    pub pecks_per_hole: u32,
}

impl Default for PeckDrilling {
    fn default() -> Self {
        Self {
            max_length_to_bit_diameter: DEFAULT_MAX_LENGTH_TO_BIT_DIAMETER,
            pecks_per_hole: DEFAULT_PECKS_PER_HOLE,
        }
    }
}

/// Cutting parameters used by the planner and the G-code output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachiningConfig {
    /// Retract height.
    pub z_safe: Length,
    /// Cutting depth.
    pub z_bottom: Length,
    /// Drill plunge feed (mm/min).
    pub drill_z_feed: f64,
    /// Router plunge feed (mm/min).
    pub router_z_feed: f64,
    /// Router lateral feed (mm/min).
    pub router_table_feed: f64,
    /// Drill spindle speed.
    pub drill_rpm: u32,
    /// Router spindle speed.
    pub router_rpm: u32,
    /// Router bit flute direction, sets the way round holes are routed.
    pub router_cut_direction: CutDirection,
    /// Slot drilling parameters.
    pub slot_peck_drilling: PeckDrilling,
}

impl Default for MachiningConfig {
    fn default() -> Self {
        Self {
            z_safe: Length::from_mm(DEFAULT_Z_SAFE_MM),
            z_bottom: Length::from_mm(DEFAULT_Z_BOTTOM_MM),
            drill_z_feed: DEFAULT_DRILL_Z_FEED,
            router_z_feed: DEFAULT_ROUTER_Z_FEED,
            router_table_feed: DEFAULT_ROUTER_TABLE_FEED,
            drill_rpm: DEFAULT_DRILL_RPM,
            router_rpm: DEFAULT_ROUTER_RPM,
            router_cut_direction: ToolKind::RouterBit.cut_direction(),
            slot_peck_drilling: PeckDrilling::default(),
        }
    }
}

/// Bits available in the stock room.
///
/// Empty lists mean any diameter is available as requested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StockConfig {
    /// Drill bit diameters.
    pub drillbits: Vec<Length>,
    /// Router bit diameters.
    pub routerbits: Vec<Length>,
    /// How much smaller than requested a bit may be, in percent.
    pub downsizing_allowance_percent: f64,
    /// How much larger than requested a drill bit may be, in percent.
    pub oversizing_allowance_percent: f64,
}

impl Default for StockConfig {
    fn default() -> Self {
        Self {
            drillbits: Vec::new(),
            routerbits: Vec::new(),
            downsizing_allowance_percent: DEFAULT_DOWNSIZING_PERCENT,
            oversizing_allowance_percent: DEFAULT_OVERSIZING_PERCENT,
        }
    }
}
