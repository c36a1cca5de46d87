//! Scenario configuration
//!
//! A scenario bundles every input of a reflection count. It can be built in
//! code or loaded from a JSON file such as:
//!
//! ```json
//! {
//!   "order": 50,
//!   "room": { "length_x": 3.29, "length_y": 6.23, "length_z": 2.58 },
//!   "speed_of_sound": 343.0,
//!   "t60": 0.827
//! }
//! ```

use crate::error::{ReflectionError, Result, ensure_positive};
use crate::room::RoomDimensions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Largest accepted reflection order; lattice indices are kept in `i32`.
pub const MAX_ORDER: u32 = i32::MAX as u32;

/// Inputs of one reflection count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Scenario {
    /// Maximum total reflection order (sum of absolute image indices)
    pub order: u32,
    /// Shoebox edge lengths in meters
    pub room: RoomDimensions,
    /// Speed of sound in m/s (default 343)
    #[serde(default = "default_speed_of_sound")]
    pub speed_of_sound: f64,
    /// Reverberation time in seconds
    pub t60: f64,
}

fn default_speed_of_sound() -> f64 {
    343.0
}

impl Scenario {
    /// Create a validated scenario.
    pub fn new(order: u32, room: RoomDimensions, speed_of_sound: f64, t60: f64) -> Result<Self> {
        let scenario = Self {
            order,
            room,
            speed_of_sound,
            t60,
        };
        scenario.validate()?;
        Ok(scenario)
    }

    /// Check every precondition, naming the first one that is violated.
    pub fn validate(&self) -> Result<()> {
        if self.order > MAX_ORDER {
            return Err(ReflectionError::invalid(
                "order",
                format!("must be <= {MAX_ORDER}, got {}", self.order),
            ));
        }
        self.room.validate()?;
        ensure_positive("speed_of_sound", self.speed_of_sound)?;
        ensure_positive("t60", self.t60)?;
        Ok(())
    }

    /// Longest path a reflection may travel before the decay cutoff: `c * T60`.
    pub fn max_distance(&self) -> f64 {
        self.speed_of_sound * self.t60
    }

    /// Parse and validate a scenario from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let scenario: Scenario = serde_json::from_str(json)?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Load and validate a scenario file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| ReflectionError::ConfigLoad {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let scenario: Scenario =
            serde_json::from_str(&json).map_err(|e| ReflectionError::ConfigLoad {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        scenario.validate()?;
        log::debug!("loaded scenario from {}: {:?}", path.display(), scenario);
        Ok(scenario)
    }
}
