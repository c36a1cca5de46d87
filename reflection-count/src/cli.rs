//! Reflection Count - Image-source path counting for shoebox rooms
//! Command-line interface definitions
//!
//! Copyright (C) 2025 Pierre Aubert pierre(at)spinorama(dot)org
//!
//! This program is free software: you can redistribute it and/or modify
//! it under the terms of the GNU General Public License as published by
//! the Free Software Foundation, either version 3 of the License, or
//! (at your option) any later version.
//!
//! This program is distributed in the hope that it will be useful,
//! but WITHOUT ANY WARRANTY; without even the implied warranty of
//! MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//! GNU General Public License for more details.
//!
//! You should have received a copy of the GNU General Public License
//! along with this program.  If not, see <https://www.gnu.org/licenses/>.

use crate::config::Scenario;
use crate::error::{ReflectionError, Result};
use crate::room::RoomDimensions;
use crate::workflow::RunOptions;
use clap::Parser;
use std::path::PathBuf;

/// Count image-source reflection paths in a shoebox room.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to a scenario JSON file (order, room, speed_of_sound, t60).
    #[arg(long, conflicts_with_all = ["order", "room", "t60"])]
    pub config: Option<PathBuf>,

    /// Maximum reflection order.
    #[arg(short, long, required_unless_present_any = ["config", "schema"])]
    pub order: Option<u32>,

    /// Room dimensions in meters, as Lx,Ly,Lz.
    #[arg(
        short,
        long,
        value_delimiter = ',',
        required_unless_present_any = ["config", "schema"]
    )]
    pub room: Option<Vec<f64>>,

    /// Speed of sound in m/s.
    #[arg(short = 'c', long, default_value_t = 343.0)]
    pub speed_of_sound: f64,

    /// Reverberation time (T60) in seconds.
    #[arg(short, long, required_unless_present_any = ["config", "schema"])]
    pub t60: Option<f64>,

    /// Shard the count over a rayon thread pool.
    #[arg(short, long)]
    pub parallel: bool,

    /// Number of worker threads (implies --parallel; default: all cores).
    #[arg(long)]
    pub threads: Option<usize>,

    /// Also report the number of paths per reflection order.
    #[arg(long)]
    pub by_order: bool,

    /// Also list the N nearest image sources.
    #[arg(long, value_name = "N")]
    pub list: Option<usize>,

    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,

    /// Dump the JSON schema of the scenario file and exit.
    #[arg(long)]
    pub schema: bool,
}

impl Args {
    /// Resolve the validated scenario, from `--config` or from the flags.
    pub fn scenario(&self) -> Result<Scenario> {
        if let Some(path) = &self.config {
            return Scenario::load(path);
        }

        let order = self.order.ok_or_else(|| missing("order"))?;
        let t60 = self.t60.ok_or_else(|| missing("t60"))?;
        let room = match self.room.as_deref() {
            Some(&[lx, ly, lz]) => RoomDimensions::new(lx, ly, lz)?,
            Some(other) => {
                return Err(ReflectionError::invalid(
                    "room",
                    format!("expected 3 dimensions Lx,Ly,Lz, got {}", other.len()),
                ));
            }
            None => return Err(missing("room")),
        };

        Scenario::new(order, room, self.speed_of_sound, t60)
    }

    /// Options for [`crate::workflow::run`].
    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            parallel: self.parallel || self.threads.is_some(),
            by_order: self.by_order,
            nearest: self.list.unwrap_or(0),
        }
    }
}

fn missing(name: &str) -> ReflectionError {
    ReflectionError::invalid(name, "is required when --config is not given")
}
