//! Board coordinates.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

use crate::units::Length;

/// A point on the board in machine convention (Y up).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Coordinate {
    /// X position.
    pub x: Length,
    /// Y position.
    pub y: Length,
}

impl Coordinate {
    /// Board origin.
    pub const ORIGIN: Coordinate = Coordinate {
        x: Length::ZERO,
        y: Length::ZERO,
    };

    /// Create a new coordinate.
    pub fn new(x: Length, y: Length) -> Self {
        Self { x, y }
    }

    /// Create a coordinate from millimetre values.
    pub fn from_mm(x: f64, y: f64) -> Self {
        Self::new(Length::from_mm(x), Length::from_mm(y))
    }

    /// Move the coordinate by the given offsets.
    pub fn offset(&self, dx: Length, dy: Length) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Straight-line distance to another coordinate.
    pub fn distance(&self, other: &Coordinate) -> Length {
        let dx = (other.x - self.x).nm() as f64;
        let dy = (other.y - self.y).nm() as f64;
        Length::from_nm(dx.hypot(dy).round() as i64)
    }

    /// Linear interpolation towards another coordinate (`t` = 0 is self, 1 is other).
    pub fn lerp(&self, other: &Coordinate, t: f64) -> Self {
        Self::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }
}

impl Add for Coordinate {
    type Output = Coordinate;

    fn add(self, rhs: Coordinate) -> Coordinate {
        Coordinate::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Coordinate {
    type Output = Coordinate;

    fn sub(self, rhs: Coordinate) -> Coordinate {
        Coordinate::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
