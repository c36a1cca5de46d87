//! Count Reflections - image-source path counter for shoebox rooms
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

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use reflection_count::{Args, CountReport, Scenario};
use schemars::schema_for;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if args.schema {
        let schema = schema_for!(Scenario);
        println!("{}", serde_json::to_string_pretty(&schema)?);
        return Ok(());
    }

    let scenario = args.scenario().context("Invalid scenario")?;
    let options = args.run_options();

    let report = match args.threads {
        Some(threads) => {
            info!("Using a pool of {} threads", threads);
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .context("Failed to build thread pool")?;
            pool.install(|| reflection_count::run(&scenario, &options))?
        }
        None => reflection_count::run(&scenario, &options)?,
    };

    if report.count == 0 {
        warn!(
            "No reflection path shorter than {:.3} m (even the direct path is out of reach)",
            report.max_distance
        );
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

fn print_report(report: &CountReport) {
    let scenario = &report.scenario;
    println!(
        "Order: {}, Room dims: ({}, {}, {}), c: {}, T60: {}",
        scenario.order,
        scenario.room.length_x,
        scenario.room.length_y,
        scenario.room.length_z,
        scenario.speed_of_sound,
        scenario.t60
    );
    println!(
        "Volume: {:.2} m³, Surface: {:.2} m², Max distance: {:.3} m",
        report.volume, report.surface_area, report.max_distance
    );
    println!("Count: {}", report.count);
    println!("Time: {:.4} seconds", report.elapsed);

    if let Some(by_order) = &report.by_order {
        println!();
        println!("{:>6} {:>12}", "order", "paths");
        for (order, count) in by_order.iter().enumerate() {
            println!("{:>6} {:>12}", order, count);
        }
    }

    if !report.nearest.is_empty() {
        println!();
        println!(
            "{:>6} {:>6} {:>6} {:>6} {:>12} {:>10}",
            "i", "j", "k", "order", "distance_m", "delay_ms"
        );
        for image in &report.nearest {
            println!(
                "{:>6} {:>6} {:>6} {:>6} {:>12.4} {:>10.3}",
                image.indices[0],
                image.indices[1],
                image.indices[2],
                image.order,
                image.distance,
                image.delay * 1000.0
            );
        }
    }
}
