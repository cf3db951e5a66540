//! # Generation Timing
//!
//! Accumulates wall-clock time spent inside the generation step only;
//! rendering between steps is not counted.

use std::time::{Duration, Instant};

/// Accumulated step timing.
#[derive(Clone, Debug, Default)]
pub struct Measurement {
    /// Start of the span currently being timed.
    since: Option<Instant>,
    /// Time accumulated over all finished spans.
    total: Duration,
    /// Finished spans.
    generations: u64,
}

impl Measurement {
    /// Creates an empty measurement.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts timing one generation.
    #[inline]
    pub fn start(&mut self) {
        self.since = Some(Instant::now());
    }

    /// Stops timing the current generation and adds it to the total.
    /// Does nothing if [`start`](Self::start) was not called.
    #[inline]
    pub fn mark_generation(&mut self) {
        if let Some(since) = self.since.take() {
            self.total += since.elapsed();
            self.generations += 1;
        }
    }

    /// Total time spent stepping.
    #[must_use]
    pub const fn total(&self) -> Duration {
        self.total
    }

    /// Number of timed generations.
    #[must_use]
    pub const fn generations(&self) -> u64 {
        self.generations
    }

    /// Mean time per generation, zero if nothing was timed.
    #[must_use]
    pub fn per_generation(&self) -> Duration {
        match u32::try_from(self.generations) {
            Ok(0) => Duration::ZERO,
            Ok(n) => self.total / n,
            Err(_) => Duration::from_nanos(
                (self.total.as_nanos() / u128::from(self.generations)) as u64,
            ),
        }
    }

    /// One-line summary, e.g. `1,204,000 ns for 100 generations (12,040 ns per generation)`.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{} ns for {} generations ({} ns per generation)",
            with_commas(self.total.as_nanos()),
            self.generations,
            with_commas(self.per_generation().as_nanos())
        )
    }

    /// Logs the summary.
    pub fn report(&self, name: &str) {
        tracing::info!("{name}: measured {}", self.summary());
    }
}

/// Formats an integer with thousands separators.
#[must_use]
pub fn with_commas(value: u128) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
