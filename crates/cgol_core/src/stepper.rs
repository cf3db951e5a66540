//! # Grid Stepper
//!
//! Advances a [`BitGrid`] one generation in place.
//!
//! ## Single Array Update
//!
//! There is no second grid. Rows are rewritten top to bottom while a
//! [`RowWindow`] holds the old generation of rows `r-1`, `r`, `r+1`:
//!
//! 1. Prime the window: zero, row 0, row 1 (or zero)
//! 2. For each row `r`: compute the new row from the window, write it to the grid
//! 3. Rotate the window and load old row `r+2` (or zero) into `below`
//!
//! Row `r+2` is copied into the window before the stepper ever writes it,
//! so every row's neighborhood is read from the old generation.
//!
//! ## Memory
//!
//! Three window rows plus one scratch row, all inline. A step allocates nothing.

use crate::grid::{copy_row, BitGrid, MAX_BYTES_PER_ROW};
use crate::rules::next_row;
use crate::window::RowWindow;

/// Reusable in-place generation updater.
///
/// Holds only scratch storage; every call to [`step`](Self::step) is a
/// complete, self-contained transition of the grid it is given.
///
/// # Example
///
/// ```rust
/// use cgol_core::{BitGrid, GridStepper};
///
/// let mut grid = BitGrid::new(4, 4).unwrap();
/// grid.set_cell(2, 2, true);
///
/// let mut stepper = GridStepper::new();
/// stepper.step(&mut grid);
/// assert!(grid.is_empty()); // lonely cell dies
/// ```
#[derive(Clone, Debug)]
pub struct GridStepper {
    /// Old-generation neighborhood.
    window: RowWindow,
    /// New row before it is written back.
    scratch: [u8; MAX_BYTES_PER_ROW],
}

impl Default for GridStepper {
    fn default() -> Self {
        Self::new()
    }
}

impl GridStepper {
    /// Creates a stepper. Scratch storage is sized for the widest grid.
    #[must_use]
    pub fn new() -> Self {
        Self {
            window: RowWindow::new(0),
            scratch: [0; MAX_BYTES_PER_ROW],
        }
    }

    /// Advances `grid` by exactly one generation, in place.
    pub fn step(&mut self, grid: &mut BitGrid) {
        let stride = grid.byte_stride();
        if self.window.byte_stride() != stride {
            self.window = RowWindow::new(stride);
        }

        let width = grid.width();
        let height = grid.height();

        self.window.prime(grid);

        for row in 0..height {
            let new_row = &mut self.scratch[..stride];
            next_row(self.window.current(), &self.window, width, new_row);
            copy_row(grid.row_mut(row), new_row);

            if row + 1 < height {
                self.window.rotate();
                self.window.fill_below(grid, row + 2);
            }
        }
    }

    /// Advances `grid` by `generations` generations.
    pub fn step_n(&mut self, grid: &mut BitGrid, generations: usize) {
        for _ in 0..generations {
            self.step(grid);
        }
    }
}

/// Advances `grid` one generation with a temporary stepper.
pub fn step(grid: &mut BitGrid) {
    GridStepper::new().step(grid);
}
