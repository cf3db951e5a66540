//! # Simulation Loop
//!
//! Drives the in-place stepper for a number of generations, feeding each
//! state to a frame sink and timing the steps. Can replay the same run on
//! the double-buffered reference to check the result.

use cgol_core::{BitGrid, GridStepper, ReferenceGrid};
use tracing::{debug, info};

use crate::config::CgolConfig;
use crate::cycle::{Cycle, CycleDetector};
use crate::error::{CgolError, CgolResult};
use crate::measure::Measurement;
use crate::render::FrameSink;

/// Outcome of [`Simulation::run`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Generation reached.
    pub generation: u64,
    /// Live cells in the final state.
    pub population: usize,
    /// First repeat seen during the run, if any.
    pub cycle: Option<Cycle>,
}

/// A grid, its configuration and the stepper that advances it.
#[derive(Clone, Debug)]
pub struct Simulation {
    config: CgolConfig,
    /// State at generation 0, kept for verification.
    initial: BitGrid,
    grid: BitGrid,
    stepper: GridStepper,
    generation: u64,
}

impl Simulation {
    /// Creates a simulation at generation 0.
    ///
    /// # Errors
    ///
    /// Returns [`CgolError::DimensionMismatch`] if the grid does not have the
    /// configured dimensions.
    pub fn new(config: CgolConfig, grid: BitGrid) -> CgolResult<Self> {
        if (config.width, config.height) != (grid.width(), grid.height()) {
            return Err(CgolError::DimensionMismatch {
                width: config.width,
                height: config.height,
                pattern_width: grid.width(),
                pattern_height: grid.height(),
            });
        }
        Ok(Self {
            config,
            initial: grid.clone(),
            grid,
            stepper: GridStepper::new(),
            generation: 0,
        })
    }

    /// Configuration in use.
    #[must_use]
    pub const fn config(&self) -> &CgolConfig {
        &self.config
    }

    /// Current state.
    #[must_use]
    pub const fn grid(&self) -> &BitGrid {
        &self.grid
    }

    /// Generations computed so far.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Computes one generation.
    pub fn advance(&mut self) {
        self.stepper.step(&mut self.grid);
        self.generation += 1;
    }

    /// Runs `generations` generations.
    ///
    /// The sink sees every state before it is updated, then the final state,
    /// then `finish`. Only the steps are timed.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink fails to write.
    pub fn run(
        &mut self,
        generations: u64,
        sink: &mut dyn FrameSink,
        measurement: &mut Measurement,
    ) -> CgolResult<RunSummary> {
        info!(
            "Processing {generations} generations of {} ({}x{})",
            self.config.name, self.config.width, self.config.height
        );

        let mut detector = CycleDetector::new();
        let mut cycle = None;

        for _ in 0..generations {
            sink.show(&self.grid, self.generation)?;

            if cycle.is_none() {
                cycle = detector.observe(&self.grid, self.generation);
                if let Some(c) = cycle {
                    info!(
                        "Repeated grid at generation {}: period {} starting at {}",
                        self.generation, c.length, c.start
                    );
                }
            }

            measurement.start();
            self.advance();
            measurement.mark_generation();
        }

        sink.show(&self.grid, self.generation)?;
        sink.finish()?;

        Ok(RunSummary {
            generation: self.generation,
            population: self.grid.population(),
            cycle,
        })
    }

    /// Replays the run so far on the reference implementation and compares
    /// the final states. Periodic reference states are fast-forwarded.
    ///
    /// # Errors
    ///
    /// Returns [`CgolError::VerificationFailed`] if any cell differs.
    pub fn verify(&self) -> CgolResult<()> {
        let target = self.generation;
        let mut reference = ReferenceGrid::from_bit_grid(&self.initial);
        let mut detector = CycleDetector::new();

        let mut generation = 0;
        while generation < target {
            let snapshot = reference.to_bit_grid()?;
            if let Some(cycle) = detector.observe(&snapshot, generation) {
                let rest = cycle.fast_forward(target - generation);
                debug!(
                    "Reference repeated at generation {generation}, fast-forwarding {} generations",
                    target - generation - rest
                );
                reference.step_n(rest as usize);
                break;
            }
            reference.step();
            generation += 1;
        }

        let mismatches = reference.mismatches(&self.grid);
        if mismatches > 0 {
            return Err(CgolError::VerificationFailed {
                generation: target,
                mismatches,
            });
        }
        info!(
            "Verified {} after {target} generations against reference",
            self.config.name
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{NullSink, TextSink};
    use cgol_core::Pattern;

    fn glider_sim(size: usize) -> Simulation {
        let mut grid = BitGrid::new(size, size).unwrap();
        Pattern::GLIDER.stamp(&mut grid, 1, 1);
        Simulation::new(CgolConfig::new("glider", size, size).unwrap(), grid).unwrap()
    }

    #[test]
    fn test_dimension_mismatch() {
        let grid = BitGrid::new(4, 4).unwrap();
        let config = CgolConfig::new("x", 4, 5).unwrap();
        assert!(matches!(
            Simulation::new(config, grid),
            Err(CgolError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_run_shows_every_generation() {
        let mut sim = glider_sim(8);
        let mut sink = TextSink::new(Vec::new(), Default::default());
        let mut measurement = Measurement::new();

        let summary = sim.run(3, &mut sink, &mut measurement).unwrap();
        assert_eq!(summary.generation, 3);
        assert_eq!(measurement.generations(), 3);

        let text = String::from_utf8(sink.into_inner()).unwrap();
        for generation in 0..=3 {
            assert!(text.contains(&format!("Generation {generation}\n")));
        }
    }

    #[test]
    fn test_run_reports_cycle() {
        let mut grid = BitGrid::new(6, 6).unwrap();
        Pattern::BLINKER.stamp(&mut grid, 2, 1);
        let config = CgolConfig::new("blinker", 6, 6).unwrap();
        let mut sim = Simulation::new(config, grid).unwrap();

        let summary = sim.run(5, &mut NullSink, &mut Measurement::new()).unwrap();
        assert_eq!(summary.cycle, Some(Cycle { start: 0, length: 2 }));
        assert_eq!(summary.population, 3);
    }

    #[test]
    fn test_verify_long_run_with_fast_forward() {
        // A glider settles down long before 500 generations in an 8x8 grid,
        // so the reference replay finds a cycle and skips ahead.
        let mut sim = glider_sim(8);
        sim.run(500, &mut NullSink, &mut Measurement::new()).unwrap();
        sim.verify().unwrap();
    }

    #[test]
    fn test_verify_detects_divergence() {
        let mut sim = glider_sim(10);
        sim.advance();
        sim.grid.toggle_cell(9, 9);
        assert!(matches!(
            sim.verify(),
            Err(CgolError::VerificationFailed {
                generation: 1,
                mismatches: 1
            })
        ));
    }
}
