//! Shared workflow steps used by the binary

use crate::config::Scenario;
use crate::counter::ReflectionCounter;
use crate::error::Result;
use crate::image_source::ImageSource;
use log::{debug, info};
use serde::Serialize;
use std::time::Instant;

/// What to compute besides the total count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Use [`ReflectionCounter::count_parallel`]
    pub parallel: bool,
    /// Fill [`CountReport::by_order`]
    pub by_order: bool,
    /// Number of nearest image sources to keep (0 = none)
    pub nearest: usize,
}

/// Result of one counting run.
#[derive(Debug, Clone, Serialize)]
pub struct CountReport {
    pub scenario: Scenario,
    /// Room volume (m³)
    pub volume: f64,
    /// Total wall area (m²)
    pub surface_area: f64,
    pub max_distance: f64,
    pub count: i64,
    /// Wall time of the count itself, in seconds
    pub elapsed: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub by_order: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub nearest: Vec<ImageSource>,
}

/// Count the reflection paths of `scenario` and gather the requested extras.
pub fn run(scenario: &Scenario, options: &RunOptions) -> Result<CountReport> {
    let counter = ReflectionCounter::new(scenario)?;

    let start = Instant::now();
    let count = if options.parallel {
        debug!("counting on {} threads", rayon::current_num_threads());
        counter.count_parallel()
    } else {
        counter.count()
    };
    let elapsed = start.elapsed().as_secs_f64();
    info!("{} reflection paths in {:.4} s", count, elapsed);

    let by_order = options.by_order.then(|| counter.count_by_order());

    let nearest = counter.nearest_image_sources(options.nearest);

    Ok(CountReport {
        scenario: *scenario,
        volume: scenario.room.volume(),
        surface_area: scenario.room.surface_area(),
        max_distance: scenario.max_distance(),
        count,
        elapsed,
        by_order,
        nearest,
    })
}
