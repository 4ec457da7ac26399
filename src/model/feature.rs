//! Machinable features collected from the board.

use serde::Serialize;
use std::fmt;

use super::Coordinate;
use crate::units::Length;

/// A round hole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hole {
    /// Hole diameter.
    pub diameter: Length,
    /// Hole centre.
    pub center: Coordinate,
}

impl Hole {
    /// Create a new hole.
    pub fn new(diameter: Length, center: Coordinate) -> Self {
        Self { diameter, center }
    }
}

/// An oblong hole (slot) swept by a circle of `diameter` from `start` to `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Oblong {
    /// Slot width.
    pub diameter: Length,
    /// First drill centre.
    pub start: Coordinate,
    /// Second drill centre.
    pub end: Coordinate,
    /// Distance between the two centres.
    pub distance: Length,
}

impl Oblong {
    /// Create a new oblong hole.
    pub fn new(diameter: Length, start: Coordinate, end: Coordinate) -> Self {
        Self {
            diameter,
            start,
            end,
            distance: start.distance(&end),
        }
    }
}

/// A feature of the board which requires machining.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Feature {
    /// Drilled hole.
    Hole(Hole),
    /// Slot, drilled or routed.
    Oblong(Oblong),
    /// Contour milled feature. Carries no geometry yet.
    Route,
}

impl Feature {
    /// Diameter of the cutter needed for this feature.
    pub fn diameter(&self) -> Option<Length> {
        match self {
            Feature::Hole(hole) => Some(hole.diameter),
            Feature::Oblong(oblong) => Some(oblong.diameter),
            Feature::Route => None,
        }
    }
}

impl From<Hole> for Feature {
    fn from(hole: Hole) -> Self {
        Feature::Hole(hole)
    }
}

impl From<Oblong> for Feature {
    fn from(oblong: Oblong) -> Self {
        Feature::Oblong(oblong)
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Feature::Hole(hole) => write!(f, "{} {}", hole.diameter, hole.center),
            Feature::Oblong(oblong) => write!(
                f,
                "O{} {} -> {}",
                oblong.diameter, oblong.start, oblong.end
            ),
            Feature::Route => write!(f, "route"),
        }
    }
}
