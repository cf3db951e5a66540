//! # Row Update Rule
//!
//! Classic Life (B3/S23) applied to one packed row at a time.
//!
//! The output row starts as a copy of the old row and only cells whose
//! state changes are flipped. Horizontal scans are clamped at the grid
//! edges; vertical edges come from the window's zero-filled rows.

use crate::grid::{cell_in_row, copy_row, flip_cell_in_row};
use crate::window::RowWindow;

/// Returns true if a cell with `neighbors` live neighbors changes state.
///
/// Birth on exactly 3, survival on 2 or 3, death otherwise.
#[inline]
#[must_use]
pub const fn should_flip(alive: bool, neighbors: u8) -> bool {
    if alive {
        neighbors < 2 || neighbors >= 4
    } else {
        neighbors == 3
    }
}

/// Computes the next generation of one row into `out`.
///
/// # Arguments
///
/// * `current` - Old-generation state of the row (same content as `window.current()`)
/// * `window` - Old-generation rows above, at and below the row
/// * `width` - Logical column count
/// * `out` - Destination, `window.byte_stride()` bytes
///
/// # Panics
///
/// Panics if `current` or `out` are not `window.byte_stride()` bytes long,
/// or if `width` does not fit in them.
pub fn next_row(current: &[u8], window: &RowWindow, width: usize, out: &mut [u8]) {
    copy_row(out, current);
    let rows = window.rows();

    for col in 0..width {
        let alive = cell_in_row(current, col);

        let left = col.saturating_sub(1);
        let right = if col + 1 == width { col } else { col + 1 };

        // 3x3 (or 2x3 on the edges) scan includes the cell itself once.
        let mut neighbors = 0u8;
        for x in left..=right {
            for row in rows {
                neighbors += u8::from(cell_in_row(row, x));
            }
        }
        neighbors -= u8::from(alive);

        if should_flip(alive, neighbors) {
            flip_cell_in_row(out, col);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::BitGrid;

    fn window_for(grid: &BitGrid) -> RowWindow {
        let mut window = RowWindow::new(grid.byte_stride());
        window.prime(grid);
        window
    }

    #[test]
    fn test_rule_table() {
        for n in 0..=8u8 {
            assert_eq!(should_flip(false, n), n == 3, "dead cell, {n} neighbors");
            assert_eq!(should_flip(true, n), !(n == 2 || n == 3), "live cell, {n} neighbors");
        }
    }

    #[test]
    fn test_birth_on_three() {
        // Row 0: ### , row 1 empty. Center of row 1 would be born but we only
        // compute row 0 here: ends die (1 neighbor), middle survives (2).
        let mut grid = BitGrid::new(3, 2).unwrap();
        for col in 0..3 {
            grid.set_cell(col, 0, true);
        }
        let window = window_for(&grid);
        let mut out = [0u8; 1];
        next_row(window.current(), &window, 3, &mut out);

        assert_eq!(out, [0b010]);
    }

    #[test]
    fn test_edges_do_not_wrap() {
        // Live cells at both ends of a row: with wraparound they would be
        // neighbors of each other.
        let mut grid = BitGrid::new(8, 3).unwrap();
        for row in 0..3 {
            grid.set_cell(0, row, true);
            grid.set_cell(7, row, true);
        }
        let mut window = window_for(&grid);
        window.rotate();
        window.fill_below(&grid, 2);

        let mut out = [0u8; 1];
        next_row(window.current(), &window, 8, &mut out);

        // Each middle edge cell has 2 neighbors and survives; columns 1 and 6
        // get 3 neighbors and are born.
        assert_eq!(out, [0b1100_0011]);
    }

    #[test]
    fn test_output_starts_from_current_row() {
        let grid = BitGrid::new(5, 1).unwrap();
        let window = window_for(&grid);
        let mut out = [0xFFu8; 1];
        next_row(window.current(), &window, 5, &mut out);
        assert_eq!(out, [0]);
    }
}
