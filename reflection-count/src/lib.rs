#![doc = include_str!("../README.md")]

/// Error types for reflection counting.
pub mod error;
pub use error::{ReflectionError, Result};

/// Command-line argument definitions
pub mod cli;
/// Scenario configuration and JSON loading
pub mod config;
/// Image-source enumeration and counting
pub mod counter;
/// Image source helpers
pub mod image_source;
/// Shoebox room geometry
pub mod room;
/// Shared workflow steps used by the binary
pub mod workflow;

// Re-export commonly used items
pub use cli::Args;
pub use config::{MAX_ORDER, Scenario};
pub use counter::{ReflectionCounter, count_reflections};
pub use image_source::ImageSource;
pub use room::RoomDimensions;
pub use workflow::{CountReport, RunOptions, run};
