//! Length and angle quantities.
//!
//! Lengths are stored as whole nanometres so they can be compared, hashed and
//! used as grouping keys without rounding drift. Angles are stored in degrees.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// Nanometres per millimetre.
const NM_PER_MM: f64 = 1_000_000.0;

/// A length with nanometre resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Length(i64);

impl Length {
    /// Zero length.
    pub const ZERO: Length = Length(0);

    /// Create a length from nanometres.
    pub const fn from_nm(nm: i64) -> Self {
        Length(nm)
    }

    /// Create a length from millimetres.
    pub fn from_mm(mm: f64) -> Self {
        Length((mm * NM_PER_MM).round() as i64)
    }

    /// Value in nanometres.
    pub const fn nm(self) -> i64 {
        self.0
    }

    /// Value in millimetres.
    pub fn mm(self) -> f64 {
        self.0 as f64 / NM_PER_MM
    }

    /// Absolute value.
    pub fn abs(self) -> Self {
        Length(self.0.abs())
    }

    /// Check if the length is exactly zero.
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl Add for Length {
    type Output = Length;

    fn add(self, rhs: Length) -> Length {
        Length(self.0 + rhs.0)
    }
}

impl AddAssign for Length {
    fn add_assign(&mut self, rhs: Length) {
        self.0 += rhs.0;
    }
}

impl Sub for Length {
    type Output = Length;

    fn sub(self, rhs: Length) -> Length {
        Length(self.0 - rhs.0)
    }
}

impl SubAssign for Length {
    fn sub_assign(&mut self, rhs: Length) {
        self.0 -= rhs.0;
    }
}

impl Neg for Length {
    type Output = Length;

    fn neg(self) -> Length {
        Length(-self.0)
    }
}

impl Mul<f64> for Length {
    type Output = Length;

    fn mul(self, rhs: f64) -> Length {
        Length((self.0 as f64 * rhs).round() as i64)
    }
}

impl Div<f64> for Length {
    type Output = Length;

    fn div(self, rhs: f64) -> Length {
        Length((self.0 as f64 / rhs).round() as i64)
    }
}

/// Ratio of two lengths.
impl Div for Length {
    type Output = f64;

    fn div(self, rhs: Length) -> f64 {
        self.0 as f64 / rhs.0 as f64
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}mm", self.mm())
    }
}

/// Lengths travel as millimetre floats in JSON.
impl Serialize for Length {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.mm())
    }
}

impl<'de> Deserialize<'de> for Length {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let mm = f64::deserialize(deserializer)?;
        Ok(Length::from_mm(mm))
    }
}

/// An angle in degrees.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Angle(f64);

impl Angle {
    /// Zero angle.
    pub const ZERO: Angle = Angle(0.0);

    /// Right angle.
    pub const RIGHT: Angle = Angle(90.0);

    /// Create an angle from degrees.
    pub const fn from_degrees(degrees: f64) -> Self {
        Angle(degrees)
    }

    /// Value in degrees.
    pub fn degrees(self) -> f64 {
        self.0
    }

    /// Value in radians.
    pub fn radians(self) -> f64 {
        self.0.to_radians()
    }
}

impl Add for Angle {
    type Output = Angle;

    fn add(self, rhs: Angle) -> Angle {
        Angle(self.0 + rhs.0)
    }
}

impl Sub for Angle {
    type Output = Angle;

    fn sub(self, rhs: Angle) -> Angle {
        Angle(self.0 - rhs.0)
    }
}

impl Neg for Angle {
    type Output = Angle;

    fn neg(self) -> Angle {
        Angle(-self.0)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}
