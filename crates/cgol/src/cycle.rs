//! # Cycle Detection
//!
//! Bounded Life always ends up periodic. Hashing each generation's packed
//! grid finds the first repeat; after that the remaining generations can be
//! skipped modulo the period.

use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

use cgol_core::BitGrid;

/// A detected repeat: the state at `start + length` equals the state at `start`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cycle {
    /// First generation of the cycle.
    pub start: u64,
    /// Period in generations.
    pub length: u64,
}

impl Cycle {
    /// Steps still needed after skipping whole periods of `remaining`.
    #[inline]
    #[must_use]
    pub const fn fast_forward(&self, remaining: u64) -> u64 {
        remaining % self.length
    }
}

/// Remembers the hash of every generation seen so far.
#[derive(Clone, Debug, Default)]
pub struct CycleDetector {
    seen: HashMap<u64, u64>,
}

impl CycleDetector {
    /// Creates an empty detector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `grid` as the state at `generation`. Returns the cycle if this
    /// state was seen before.
    pub fn observe(&mut self, grid: &BitGrid, generation: u64) -> Option<Cycle> {
        let hash = grid_hash(grid);
        match self.seen.get(&hash) {
            Some(&start) => Some(Cycle {
                start,
                length: generation - start,
            }),
            None => {
                self.seen.insert(hash, generation);
                None
            }
        }
    }

    /// Number of distinct states recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// Returns true if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    /// Forgets every recorded state.
    pub fn clear(&mut self) {
        self.seen.clear();
    }
}

/// 64-bit hash of a grid's dimensions and cells.
#[must_use]
pub fn grid_hash(grid: &BitGrid) -> u64 {
    let mut hasher = DefaultHasher::new();
    grid.width().hash(&mut hasher);
    grid.height().hash(&mut hasher);
    grid.as_bytes().hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgol_core::{GridStepper, Pattern};

    #[test]
    fn test_blinker_period() {
        let mut grid = BitGrid::new(5, 5).unwrap();
        Pattern::BLINKER.stamp(&mut grid, 2, 1);
        let mut stepper = GridStepper::new();
        let mut detector = CycleDetector::new();

        let mut found = None;
        for generation in 0..10 {
            if let Some(cycle) = detector.observe(&grid, generation) {
                found = Some((generation, cycle));
                break;
            }
            stepper.step(&mut grid);
        }

        let (at, cycle) = found.unwrap();
        assert_eq!(at, 2);
        assert_eq!(cycle, Cycle { start: 0, length: 2 });
        assert_eq!(detector.len(), 2);
    }

    #[test]
    fn test_still_life_period_one() {
        let mut grid = BitGrid::new(4, 4).unwrap();
        Pattern::BLOCK.stamp(&mut grid, 1, 1);
        let mut detector = CycleDetector::new();
        assert!(detector.observe(&grid, 0).is_none());
        assert_eq!(detector.observe(&grid, 1), Some(Cycle { start: 0, length: 1 }));
    }

    #[test]
    fn test_fast_forward() {
        let cycle = Cycle { start: 10, length: 4 };
        assert_eq!(cycle.fast_forward(0), 0);
        assert_eq!(cycle.fast_forward(9), 1);
        assert_eq!(cycle.fast_forward(12), 0);
    }

    #[test]
    fn test_hash_includes_dimensions() {
        let a = BitGrid::new(8, 2).unwrap();
        let b = BitGrid::new(16, 1).unwrap();
        assert_eq!(a.as_bytes(), b.as_bytes());
        assert_ne!(grid_hash(&a), grid_hash(&b));
    }
}
