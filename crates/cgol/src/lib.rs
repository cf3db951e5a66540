//! # CGOL
//!
//! Everything around the engine: loading a grid, running it, showing it.
//!
//! ## Pipeline
//!
//! 1. **Configure** - `CgolConfig` from `name height width` text or TOML
//! 2. **Load** - picture (`#`/`.`) or packed hex pattern into a `BitGrid`
//! 3. **Run** - `Simulation` steps the grid in place, one sink frame per generation
//! 4. **Check** - optional replay on the double-buffered reference
//!
//! ## Example
//!
//! ```rust
//! use cgol::{parse_picture, Measurement, NullSink, Simulation};
//!
//! let picture = parse_picture(".#.\n.#.\n.#.\n").unwrap();
//! let config = picture.config("blinker").unwrap();
//! let mut sim = Simulation::new(config, picture.to_grid().unwrap()).unwrap();
//!
//! let summary = sim.run(2, &mut NullSink, &mut Measurement::new()).unwrap();
//! assert_eq!(summary.population, 3);
//! sim.verify().unwrap();
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod cycle;
pub mod error;
pub mod measure;
pub mod pattern;
pub mod render;
pub mod simulation;

pub use config::CgolConfig;
pub use cycle::{grid_hash, Cycle, CycleDetector};
pub use error::{CgolError, CgolResult};
pub use measure::{with_commas, Measurement};
pub use pattern::{
    load_grid, load_hex, load_picture, parse_hex, parse_picture, to_hex, write_picture, Picture,
};
pub use render::{FrameSink, Glyphs, NullSink, TerminalSink, TextSink};
pub use simulation::{RunSummary, Simulation};

/// Core engine, re-exported for binaries.
pub use cgol_core as core;
