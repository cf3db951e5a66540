//! Named starting patterns.

use crate::grid::BitGrid;

/// A named set of live cells, as `(col, row)` offsets from the top-left
/// corner of the pattern's bounding box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pattern {
    /// Display name.
    pub name: &'static str,
    /// Live cell offsets.
    pub cells: &'static [(i32, i32)],
}

impl Pattern {
    /// 2x2 still life.
    pub const BLOCK: Self = Self {
        name: "block",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
    };

    /// Period-2 oscillator, vertical phase.
    pub const BLINKER: Self = Self {
        name: "blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    };

    /// Period-2 oscillator.
    pub const TOAD: Self = Self {
        name: "toad",
        cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
    };

    /// Period-2 oscillator made of two blocks.
    pub const BEACON: Self = Self {
        name: "beacon",
        cells: &[(0, 0), (1, 0), (0, 1), (3, 2), (2, 3), (3, 3)],
    };

    /// Moves (+1, +1) every 4 generations.
    pub const GLIDER: Self = Self {
        name: "glider",
        cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
    };

    /// Methuselah; stabilizes after 1103 generations on an unbounded plane.
    pub const R_PENTOMINO: Self = Self {
        name: "r-pentomino",
        cells: &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
    };

    /// Every built-in pattern.
    pub const ALL: &'static [Self] = &[
        Self::BLOCK,
        Self::BLINKER,
        Self::TOAD,
        Self::BEACON,
        Self::GLIDER,
        Self::R_PENTOMINO,
    ];

    /// Looks up a built-in pattern, ignoring ASCII case.
    #[must_use]
    pub fn by_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Width of the bounding box.
    #[must_use]
    pub fn width(&self) -> usize {
        self.cells.iter().map(|&(c, _)| c + 1).max().unwrap_or(0) as usize
    }

    /// Height of the bounding box.
    #[must_use]
    pub fn height(&self) -> usize {
        self.cells.iter().map(|&(_, r)| r + 1).max().unwrap_or(0) as usize
    }

    /// Sets the pattern's cells with its top-left corner at `(col, row)`.
    /// Cells falling outside the grid are dropped.
    pub fn stamp(&self, grid: &mut BitGrid, col: i32, row: i32) {
        for &(dc, dr) in self.cells {
            grid.set_cell(col + dc, row + dr, true);
        }
    }

    /// Stamps the pattern centered in the grid.
    pub fn stamp_centered(&self, grid: &mut BitGrid) {
        let col = (grid.width() as i32 - self.width() as i32) / 2;
        let row = (grid.height() as i32 - self.height() as i32) / 2;
        self.stamp(grid, col, row);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_name() {
        assert_eq!(Pattern::by_name("Glider"), Some(Pattern::GLIDER));
        assert_eq!(Pattern::by_name("R-PENTOMINO"), Some(Pattern::R_PENTOMINO));
        assert_eq!(Pattern::by_name("spaceship"), None);
    }

    #[test]
    fn test_bounding_box() {
        assert_eq!((Pattern::BLINKER.width(), Pattern::BLINKER.height()), (1, 3));
        assert_eq!((Pattern::TOAD.width(), Pattern::TOAD.height()), (4, 2));
        assert_eq!((Pattern::BEACON.width(), Pattern::BEACON.height()), (4, 4));
    }

    #[test]
    fn test_stamp_clips_at_edges() {
        let mut grid = BitGrid::new(2, 2).unwrap();
        Pattern::GLIDER.stamp(&mut grid, 0, 0);
        // Only (1, 0) of the glider lands inside a 2x2 grid.
        assert_eq!(grid.population(), 1);
        assert!(grid.get_cell(1, 0));
    }

    #[test]
    fn test_stamp_centered() {
        let mut grid = BitGrid::new(7, 7).unwrap();
        Pattern::BLOCK.stamp_centered(&mut grid);
        assert!(grid.get_cell(2, 2) && grid.get_cell(3, 3));
        assert_eq!(grid.population(), 4);
    }
}
