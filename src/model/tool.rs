//! Cutting tools held in the rack.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::units::Length;

/// Capability class of a cutting tool.
///
/// The declaration order is the machining order: holes are drilled before
/// anything is routed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ToolKind {
    /// Drill bit, plunges only.
    DrillBit,
    /// Router (end mill) bit, cuts laterally.
    RouterBit,
}

impl ToolKind {
    /// Chip evacuation direction of this kind of bit.
    pub fn cut_direction(&self) -> CutDirection {
        match self {
            ToolKind::DrillBit => CutDirection::Up,
            ToolKind::RouterBit => CutDirection::UpDown,
        }
    }

    /// Single character prefix used in rack listings.
    pub fn prefix(&self) -> char {
        match self {
            ToolKind::DrillBit => ' ',
            ToolKind::RouterBit => 'R',
        }
    }

    /// Human readable name.
    pub fn name(&self) -> &'static str {
        match self {
            ToolKind::DrillBit => "drill",
            ToolKind::RouterBit => "router",
        }
    }
}

/// Chip evacuation direction of a bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CutDirection {
    /// Chips are drawn upwards.
    Up,
    /// Chips are pushed down.
    Down,
    /// Compression bit.
    UpDown,
}

impl CutDirection {
    /// Whether a round hole is routed clockwise (G2) with this bit.
    ///
    /// Chips are lifted out of the hole when an up cutting bit turns
    /// clockwise; a down cutting bit goes the other way round.
    pub fn is_clockwise(&self) -> bool {
        matches!(self, CutDirection::Up | CutDirection::UpDown)
    }
}

/// A cutting tool, identified by kind and diameter.
///
/// Equality and ordering only look at the kind then the diameter, which gives
/// the canonical rack order: drills before routers, smallest first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Tool {
    /// Capability class.
    pub kind: ToolKind,
    /// Cutting diameter.
    pub diameter: Length,
}

impl Tool {
    /// Create a new tool.
    pub fn new(kind: ToolKind, diameter: Length) -> Self {
        Self { kind, diameter }
    }

    /// Create a drill bit.
    pub fn drill(diameter: Length) -> Self {
        Self::new(ToolKind::DrillBit, diameter)
    }

    /// Create a router bit.
    pub fn router(diameter: Length) -> Self {
        Self::new(ToolKind::RouterBit, diameter)
    }

    /// Check if this is a drill bit.
    pub fn is_drill(&self) -> bool {
        self.kind == ToolKind::DrillBit
    }

    /// Check if this is a router bit.
    pub fn is_router(&self) -> bool {
        self.kind == ToolKind::RouterBit
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind.name(), self.diameter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality() {
        let mm = Length::from_mm;
        assert_eq!(Tool::drill(mm(0.8)), Tool::drill(mm(0.8)));
        assert_ne!(Tool::drill(mm(0.8)), Tool::router(mm(0.8)));
        assert_ne!(Tool::drill(mm(0.8)), Tool::drill(mm(0.85)));
    }

    #[test]
    fn test_ordering() {
        let mm = Length::from_mm;
        let mut tools = vec![
            Tool::router(mm(0.8)),
            Tool::drill(mm(2.6)),
            Tool::router(mm(0.5)),
            Tool::drill(mm(0.9)),
        ];
        tools.sort();
        assert_eq!(
            tools,
            vec![
                Tool::drill(mm(0.9)),
                Tool::drill(mm(2.6)),
                Tool::router(mm(0.5)),
                Tool::router(mm(0.8)),
            ]
        );
    }

    #[test]
    fn test_cut_direction() {
        assert_eq!(ToolKind::DrillBit.cut_direction(), CutDirection::Up);
        assert_eq!(ToolKind::RouterBit.cut_direction(), CutDirection::UpDown);
        assert!(CutDirection::UpDown.is_clockwise());
        assert!(!CutDirection::Down.is_clockwise());
    }

    #[test]
    fn test_display() {
        assert_eq!(Tool::router(Length::from_mm(1.2)).to_string(), "router 1.2mm");
    }
}
