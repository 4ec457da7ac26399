//! Board documents exported from the CAD tool.
//!
//! Positions and sizes are millimetres in the CAD frame, where Y grows
//! downwards. [`BoardDocument::to_inventory`] moves them to the machine frame.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

use crate::error::{PlanError, Result};
use crate::inventory::{HoleOptions, Inventory};
use crate::model::Coordinate;
use crate::units::{Angle, Length};

/// Pad fabrication attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PadAttribute {
    /// Plated-through hole.
    #[default]
    Pth,
    /// Non-plated hole.
    Npth,
    /// Surface mount, no hole.
    Smd,
    /// Edge connector, no hole.
    Connector,
}

impl PadAttribute {
    /// Check if the pad needs a hole.
    pub fn is_drilled(&self) -> bool {
        matches!(self, PadAttribute::Pth | PadAttribute::Npth)
    }
}

/// Via type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViaType {
    /// Through all layers.
    #[default]
    Through,
    /// Blind or buried.
    BlindBuried,
    /// Laser micro via.
    Micro,
}

/// A pad record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pad {
    /// Pad position.
    pub position: [f64; 2],
    /// Drill size along X and Y.
    #[serde(default)]
    pub drill: [f64; 2],
    /// Pad orientation in degrees.
    #[serde(default)]
    pub orientation: f64,
    /// Fabrication attribute.
    #[serde(default)]
    pub attribute: PadAttribute,
}

/// A via record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Via {
    /// Via position.
    pub position: [f64; 2],
    /// Drill diameter.
    #[serde(default)]
    pub drill: f64,
    /// Via type.
    #[serde(default)]
    pub via_type: ViaType,
}

/// Holes of a board as supplied by the CAD tool.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardDocument {
    /// Board name.
    pub name: String,
    /// Auxiliary (drill/place) origin.
    pub aux_origin: [f64; 2],
    /// Pads.
    pub pads: Vec<Pad>,
    /// Vias.
    pub vias: Vec<Via>,
}

impl BoardDocument {
    /// Parse a board document from JSON.
    pub fn from_json(content: &str, path: &Path) -> Result<Self> {
        serde_json::from_str(content).map_err(|source| PlanError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Machine frame coordinate of a CAD position.
    fn to_coordinate(&self, position: [f64; 2]) -> Coordinate {
        let [ox, oy] = self.aux_origin;
        Coordinate::from_mm(position[0] - ox, oy - position[1])
    }

    /// Build the feature inventory of the board.
    pub fn to_inventory(&self) -> Inventory {
        let [ox, oy] = self.aux_origin;
        let mut inventory = Inventory::with_offset(Coordinate::from_mm(ox, -oy));

        for pad in &self.pads {
            if !pad.attribute.is_drilled() {
                continue;
            }

            if pad.drill[0] <= 0.0 {
                debug!("Skipping pad without drill at {:?}", pad.position);
                continue;
            }

            let options = HoleOptions::new()
                .with_size_y(Length::from_mm(pad.drill[1]))
                .with_angle(Angle::from_degrees(pad.orientation))
                .with_plated(pad.attribute == PadAttribute::Pth);

            inventory.add_hole(
                self.to_coordinate(pad.position),
                Length::from_mm(pad.drill[0]),
                options,
            );
        }

        for via in &self.vias {
            if via.drill == 0.0 {
                debug!("Skipping via without drill at {:?}", via.position);
                continue;
            }

            if via.via_type != ViaType::Through {
                debug!("Skipping {:?} via at {:?}", via.via_type, via.position);
                continue;
            }

            inventory.add_hole(
                self.to_coordinate(via.position),
                Length::from_mm(via.drill),
                HoleOptions::new(),
            );
        }

        info!(
            "Board '{}': {} PTH and {} NPTH feature(s)",
            self.name,
            inventory.pth().feature_count(),
            inventory.npth().feature_count()
        );

        inventory
    }
}

/// Load a board document from a JSON file.
pub fn load_board(path: &Path) -> Result<BoardDocument> {
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

    BoardDocument::from_json(&content, path)
}
