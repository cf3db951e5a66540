//! # Reference Grid
//!
//! The obvious implementation: one `bool` per cell, two full buffers, an
//! explicit 8-neighbor count, swap the front index after each generation.
//!
//! Used as an oracle for the in-place stepper. Speed is not a goal.

use crate::error::GridResult;
use crate::grid::BitGrid;

/// Relative positions of the eight neighbors.
const NEIGHBORS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Double-buffered, unpacked Life grid with dead edges.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReferenceGrid {
    width: usize,
    height: usize,
    /// Front and back buffers, row-major.
    buffers: [Vec<bool>; 2],
    /// Index of the buffer holding the current generation.
    front: usize,
}

impl ReferenceGrid {
    /// Copies the cells of a packed grid.
    #[must_use]
    pub fn from_bit_grid(grid: &BitGrid) -> Self {
        let (width, height) = (grid.width(), grid.height());
        let mut cells = vec![false; width * height];
        for row in 0..height {
            for col in 0..width {
                cells[row * width + col] = grid.get_cell(col as i32, row as i32);
            }
        }
        Self {
            width,
            height,
            buffers: [cells, vec![false; width * height]],
            front: 0,
        }
    }

    /// Packs the current generation into a new [`BitGrid`].
    ///
    /// # Errors
    ///
    /// Never fails for a grid built with [`from_bit_grid`](Self::from_bit_grid);
    /// the dimensions were already validated.
    pub fn to_bit_grid(&self) -> GridResult<BitGrid> {
        let mut grid = BitGrid::new(self.width, self.height)?;
        for row in 0..self.height {
            for col in 0..self.width {
                grid.set_cell(col as i32, row as i32, self.get(col as i32, row as i32));
            }
        }
        Ok(grid)
    }

    /// Reads a cell of the current generation. Outside the grid is dead.
    #[must_use]
    pub fn get(&self, col: i32, row: i32) -> bool {
        if col < 0 || row < 0 || col as usize >= self.width || row as usize >= self.height {
            return false;
        }
        self.buffers[self.front][row as usize * self.width + col as usize]
    }

    /// Advances one generation into the back buffer, then swaps.
    pub fn step(&mut self) {
        let back = self.front ^ 1;
        for row in 0..self.height {
            for col in 0..self.width {
                let (c, r) = (col as i32, row as i32);
                let neighbors = NEIGHBORS
                    .iter()
                    .filter(|&&(dx, dy)| self.get(c + dx, r + dy))
                    .count();
                let alive = self.get(c, r);
                self.buffers[back][row * self.width + col] =
                    matches!((alive, neighbors), (true, 2 | 3) | (false, 3));
            }
        }
        self.front = back;
    }

    /// Advances `generations` generations.
    pub fn step_n(&mut self, generations: usize) {
        for _ in 0..generations {
            self.step();
        }
    }

    /// Counts cells that differ from `grid`. Dimension mismatches count
    /// every cell of the larger extent.
    #[must_use]
    pub fn mismatches(&self, grid: &BitGrid) -> usize {
        let width = self.width.max(grid.width());
        let height = self.height.max(grid.height());
        let mut count = 0;
        for row in 0..height as i32 {
            for col in 0..width as i32 {
                if self.get(col, row) != grid.get_cell(col, row) {
                    count += 1;
                }
            }
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_through_bit_grid() {
        let mut grid = BitGrid::new(11, 3).unwrap();
        grid.set_cell(10, 2, true);
        grid.set_cell(0, 0, true);

        let reference = ReferenceGrid::from_bit_grid(&grid);
        assert_eq!(reference.to_bit_grid().unwrap(), grid);
        assert_eq!(reference.mismatches(&grid), 0);
    }

    #[test]
    fn test_blinker() {
        let mut grid = BitGrid::new(5, 5).unwrap();
        for row in 1..4 {
            grid.set_cell(2, row, true);
        }
        let mut reference = ReferenceGrid::from_bit_grid(&grid);

        reference.step();
        assert!(reference.get(1, 2) && reference.get(2, 2) && reference.get(3, 2));
        assert!(!reference.get(2, 1) && !reference.get(2, 3));
        assert_eq!(reference.mismatches(&grid), 4);

        reference.step();
        assert_eq!(reference.mismatches(&grid), 0);
    }
}
