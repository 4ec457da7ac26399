//! Feature inventory of a board.
//!
//! Raw holes are turned into [`Feature`]s and grouped by diameter, once for
//! plated-through holes and once for non-plated holes. Buckets keep the order
//! in which their diameter was first seen.

use serde::Serialize;
use std::ops::BitOr;
use tracing::debug;

use crate::model::{Coordinate, Feature, Hole, Oblong};
use crate::units::{Angle, Length};

/// Selection of features to machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Operations(u8);

impl Operations {
    /// No operation.
    pub const NONE: Operations = Operations(0);
    /// Plated holes and slots.
    pub const PTH: Operations = Operations(0b0001);
    /// Non-plated holes and slots.
    pub const NPTH: Operations = Operations(0b0010);
    /// Board outline routing.
    pub const OUTLINE: Operations = Operations(0b0100);
    /// Everything.
    pub const ALL: Operations = Operations(0b0111);

    /// Check if all operations of `other` are selected.
    pub fn contains(&self, other: Operations) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Operations {
    type Output = Operations;

    fn bitor(self, rhs: Operations) -> Operations {
        Operations(self.0 | rhs.0)
    }
}

/// Options for [`Inventory::add_hole`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoleOptions {
    /// Drill size along Y. A size different from X makes the hole oblong.
    pub size_y: Option<Length>,
    /// Pad orientation, in the CAD frame (clockwise positive).
    pub angle: Angle,
    /// Plated-through hole.
    pub plated: bool,
}

impl Default for HoleOptions {
    fn default() -> Self {
        Self {
            size_y: None,
            angle: Angle::ZERO,
            plated: true,
        }
    }
}

impl HoleOptions {
    /// Default options: round, unrotated, plated.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the Y drill size.
    pub fn with_size_y(mut self, size_y: Length) -> Self {
        self.size_y = Some(size_y);
        self
    }

    /// Set the orientation.
    pub fn with_angle(mut self, angle: Angle) -> Self {
        self.angle = angle;
        self
    }

    /// Set the plating.
    pub fn with_plated(mut self, plated: bool) -> Self {
        self.plated = plated;
        self
    }

    /// Mark the hole as non-plated.
    pub fn npth(self) -> Self {
        self.with_plated(false)
    }
}

/// Features grouped by diameter, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DiameterBuckets {
    buckets: Vec<(Length, Vec<Feature>)>,
}

impl DiameterBuckets {
    /// Create an empty set of buckets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a feature to the bucket of `diameter`, creating it at the end if new.
    pub fn push(&mut self, diameter: Length, feature: Feature) {
        match self.buckets.iter_mut().find(|(d, _)| *d == diameter) {
            Some((_, features)) => features.push(feature),
            None => self.buckets.push((diameter, vec![feature])),
        }
    }

    /// Append every bucket of `other`, joining buckets of the same diameter.
    pub fn merge(&mut self, other: &DiameterBuckets) {
        for (diameter, features) in &other.buckets {
            for feature in features {
                self.push(*diameter, *feature);
            }
        }
    }

    /// Features of a given diameter.
    pub fn get(&self, diameter: Length) -> Option<&[Feature]> {
        self.buckets
            .iter()
            .find(|(d, _)| *d == diameter)
            .map(|(_, features)| features.as_slice())
    }

    /// Iterate the buckets in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = (Length, &[Feature])> {
        self.buckets.iter().map(|(d, f)| (*d, f.as_slice()))
    }

    /// Diameters in discovery order.
    pub fn diameters(&self) -> Vec<Length> {
        self.buckets.iter().map(|(d, _)| *d).collect()
    }

    /// Number of buckets.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Check if there are no buckets.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Total number of features across buckets.
    pub fn feature_count(&self) -> usize {
        self.buckets.iter().map(|(_, f)| f.len()).sum()
    }
}

/// Inventory of the features of a board.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Inventory {
    /// Board origin in the source frame.
    pub offset: Coordinate,
    pth: DiameterBuckets,
    npth: DiameterBuckets,
}

impl Inventory {
    /// Create an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty inventory recording the board origin.
    pub fn with_offset(offset: Coordinate) -> Self {
        Self {
            offset,
            ..Default::default()
        }
    }

    /// Plated features.
    pub fn pth(&self) -> &DiameterBuckets {
        &self.pth
    }

    /// Non-plated features.
    pub fn npth(&self) -> &DiameterBuckets {
        &self.npth
    }

    /// Total number of features.
    pub fn feature_count(&self) -> usize {
        self.pth.feature_count() + self.npth.feature_count()
    }

    /// Check if the inventory holds no feature.
    pub fn is_empty(&self) -> bool {
        self.feature_count() == 0
    }

    /// Register a hole.
    ///
    /// A hole whose `size_y` differs from `size_x` becomes an [`Oblong`] of the
    /// smaller size, with two drill centres either side of `center` along its
    /// long axis. The orientation is given in the CAD frame where angles turn
    /// clockwise, and is flipped here.
    pub fn add_hole(&mut self, center: Coordinate, size_x: Length, options: HoleOptions) {
        let feature = match options.size_y {
            Some(size_y) if size_y != size_x => {
                let width = size_x.min(size_y);
                let radius = (size_x.max(size_y) - width) / 2.0;
                let axis = if size_x < size_y {
                    Angle::RIGHT
                } else {
                    Angle::ZERO
                };
                let angle = (axis - options.angle).radians();
                let dx = radius * angle.cos();
                let dy = radius * angle.sin();
                let start = center.offset(dx, dy);
                let end = center.offset(-dx, -dy);

                Feature::Oblong(Oblong::new(width, start, end))
            }
            _ => Feature::Hole(Hole::new(size_x, center)),
        };

        let diameter = feature.diameter().unwrap_or(size_x);
        debug!(
            "Inventory: {} {}",
            if options.plated { "PTH" } else { "NPTH" },
            feature
        );

        if options.plated {
            self.pth.push(diameter, feature);
        } else {
            self.npth.push(diameter, feature);
        }
    }

    /// All features for the given operations, plated first.
    pub fn get_features(&self, ops: Operations) -> DiameterBuckets {
        let mut features = DiameterBuckets::new();

        if ops.contains(Operations::PTH) {
            features.merge(&self.pth);
        }

        if ops.contains(Operations::NPTH) {
            features.merge(&self.npth);
        }

        features
    }
}
