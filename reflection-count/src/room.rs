//! Shoebox room geometry

use crate::error::{Result, ensure_positive};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Edge lengths of a rectangular room, in meters.
///
/// The source sits at the origin and the receiver at the far corner
/// `(length_x, length_y, length_z)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RoomDimensions {
    /// Room width (x dimension)
    pub length_x: f64,
    /// Room depth (y dimension)
    pub length_y: f64,
    /// Room height (z dimension)
    pub length_z: f64,
}

impl RoomDimensions {
    /// Create validated room dimensions.
    ///
    /// Every edge must be finite and strictly positive.
    pub fn new(length_x: f64, length_y: f64, length_z: f64) -> Result<Self> {
        let room = Self {
            length_x,
            length_y,
            length_z,
        };
        room.validate()?;
        Ok(room)
    }

    /// Check that every edge is finite and strictly positive.
    pub fn validate(&self) -> Result<()> {
        ensure_positive("room.length_x", self.length_x)?;
        ensure_positive("room.length_y", self.length_y)?;
        ensure_positive("room.length_z", self.length_z)?;
        Ok(())
    }

    /// Edge lengths as `[Lx, Ly, Lz]`.
    pub fn as_array(&self) -> [f64; 3] {
        [self.length_x, self.length_y, self.length_z]
    }

    /// Room volume in cubic meters.
    pub fn volume(&self) -> f64 {
        self.length_x * self.length_y * self.length_z
    }

    /// Total area of the six walls in square meters.
    pub fn surface_area(&self) -> f64 {
        2.0 * (self.length_x * self.length_y
            + self.length_x * self.length_z
            + self.length_y * self.length_z)
    }
}

impl From<[f64; 3]> for RoomDimensions {
    /// Unvalidated conversion; call [`RoomDimensions::validate`] before use.
    fn from(dims: [f64; 3]) -> Self {
        Self {
            length_x: dims[0],
            length_y: dims[1],
            length_z: dims[2],
        }
    }
}
