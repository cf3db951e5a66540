//! # CGOL Core Engine
//!
//! Conway's Game of Life over a bounded, bit-packed grid, updated in place.
//!
//! ## Architecture Rules
//!
//! 1. **One bit per cell** - rows are packed LSB first, `ceil(width / 8)` bytes each
//! 2. **Single array** - there is no "next" grid; rows are overwritten in place
//! 3. **Constant extra memory** - a three-row window plus one scratch row
//! 4. **Hard edges** - cells outside the grid are permanently dead, no wraparound
//!
//! ## Core Components
//!
//! - `BitGrid`: packed cell storage with bounded cell access
//! - `RowWindow`: old-generation snapshot of rows `r-1`, `r`, `r+1`
//! - `next_row`: the per-row Life rule
//! - `GridStepper`: slides the window down the grid, one generation per call
//! - `ReferenceGrid`: double-buffered oracle used for verification
//!
//! ## Example
//!
//! ```rust
//! use cgol_core::{BitGrid, GridStepper, Pattern};
//!
//! let mut grid = BitGrid::new(8, 8).unwrap();
//! Pattern::BLINKER.stamp(&mut grid, 3, 2);
//!
//! let mut stepper = GridStepper::new();
//! stepper.step(&mut grid);
//!
//! assert!(grid.get_cell(2, 3) && grid.get_cell(3, 3) && grid.get_cell(4, 3));
//! assert_eq!(grid.population(), 3);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod error;
pub mod grid;
pub mod patterns;
pub mod reference;
pub mod rules;
pub mod stepper;
pub mod window;

pub use error::{GridError, GridResult};
pub use grid::{
    bytes_per_row, cell_in_row, clear_row, copy_row, flip_cell_in_row, set_cell_in_row, BitGrid,
    MAX_BYTES_PER_ROW, MAX_HEIGHT, MAX_WIDTH,
};
pub use patterns::Pattern;
pub use reference::ReferenceGrid;
pub use rules::{next_row, should_flip};
pub use stepper::{step, GridStepper};
pub use window::RowWindow;
