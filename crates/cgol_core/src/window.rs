//! # Row Window
//!
//! A three-slot arena of row buffers holding the *old* generation of rows
//! `r-1`, `r` and `r+1` while row `r` is being rewritten in the grid.
//!
//! ## Rotation
//!
//! ```text
//!   slot:    0      1      2            0      1      2
//!          above  current below  ──▶  below  above  current
//!          (r-1)   (r)   (r+1)        (r+2)   (r)   (r+1)
//! ```
//!
//! Sliding down one row only moves the role offset. The slot that held
//! `above` is reused as the new `below` and refilled from the grid before
//! that grid row is ever overwritten.

use crate::grid::{clear_row, copy_row, BitGrid, MAX_BYTES_PER_ROW};

/// Logical role of a window row.
const ABOVE: usize = 0;
const CURRENT: usize = 1;
const BELOW: usize = 2;

/// Old-generation snapshot of three consecutive grid rows.
///
/// Not a view into the grid: the data is copied, so the grid can be
/// overwritten row by row while the window still sees the previous state.
#[derive(Clone, Debug)]
pub struct RowWindow {
    /// Row storage, each slot `MAX_BYTES_PER_ROW` wide.
    slots: [[u8; MAX_BYTES_PER_ROW]; 3],
    /// Slot currently playing the `above` role.
    top: usize,
    /// Bytes in use per slot.
    byte_stride: usize,
}

impl RowWindow {
    /// Creates a zeroed window for rows of `byte_stride` bytes.
    ///
    /// # Panics
    ///
    /// Panics if `byte_stride` exceeds `MAX_BYTES_PER_ROW`.
    #[must_use]
    pub fn new(byte_stride: usize) -> Self {
        assert!(
            byte_stride <= MAX_BYTES_PER_ROW,
            "row of {byte_stride} bytes exceeds window capacity of {MAX_BYTES_PER_ROW}"
        );
        Self {
            slots: [[0; MAX_BYTES_PER_ROW]; 3],
            top: 0,
            byte_stride,
        }
    }

    /// Returns the number of bytes in use per row.
    #[inline]
    #[must_use]
    pub const fn byte_stride(&self) -> usize {
        self.byte_stride
    }

    /// Centers the window on grid row 0: `above` is zero, `current` is row 0,
    /// `below` is row 1 (zero if the grid has a single row).
    ///
    /// # Panics
    ///
    /// Panics if the grid's byte stride differs from the window's.
    pub fn prime(&mut self, grid: &BitGrid) {
        assert_eq!(grid.byte_stride(), self.byte_stride, "window/grid stride mismatch");
        self.top = 0;
        clear_row(self.role_mut(ABOVE));
        self.fill(CURRENT, grid, 0);
        self.fill(BELOW, grid, 1);
    }

    /// Old row `r-1`.
    #[inline]
    #[must_use]
    pub fn above(&self) -> &[u8] {
        self.role(ABOVE)
    }

    /// Old row `r`.
    #[inline]
    #[must_use]
    pub fn current(&self) -> &[u8] {
        self.role(CURRENT)
    }

    /// Old row `r+1`.
    #[inline]
    #[must_use]
    pub fn below(&self) -> &[u8] {
        self.role(BELOW)
    }

    /// The three rows in top-to-bottom order.
    #[inline]
    #[must_use]
    pub fn rows(&self) -> [&[u8]; 3] {
        [self.role(ABOVE), self.role(CURRENT), self.role(BELOW)]
    }

    /// Slides the roles down one row: `above ← current`, `current ← below`,
    /// and the old `above` buffer becomes `below`. Its contents are stale
    /// until [`fill_below`](Self::fill_below) is called.
    #[inline]
    pub fn rotate(&mut self) {
        self.top = (self.top + 1) % 3;
    }

    /// Loads grid row `row` into the `below` slot, or zeroes it when `row`
    /// lies past the bottom edge.
    #[inline]
    pub fn fill_below(&mut self, grid: &BitGrid, row: usize) {
        self.fill(BELOW, grid, row);
    }

    #[inline]
    fn fill(&mut self, role: usize, grid: &BitGrid, row: usize) {
        if row < grid.height() {
            copy_row(self.role_mut(role), grid.row(row));
        } else {
            clear_row(self.role_mut(role));
        }
    }

    #[inline]
    fn slot(&self, role: usize) -> usize {
        (self.top + role) % 3
    }

    #[inline]
    fn role(&self, role: usize) -> &[u8] {
        &self.slots[self.slot(role)][..self.byte_stride]
    }

    #[inline]
    fn role_mut(&mut self, role: usize) -> &mut [u8] {
        let slot = self.slot(role);
        &mut self.slots[slot][..self.byte_stride]
    }
}
