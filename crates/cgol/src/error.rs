//! # CGOL Error Types
//!
//! Everything that can go wrong before or around the generation loop.
//! The step itself never fails.

use std::path::PathBuf;

use cgol_core::GridError;
use thiserror::Error;

/// Errors raised by loading, running or verifying a simulation.
#[derive(Error, Debug)]
pub enum CgolError {
    /// File could not be read or written.
    #[error("i/o error on {path}: {source}")]
    Io {
        /// File involved.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Terminal or output stream failure while rendering.
    #[error("render output failed: {0}")]
    Render(#[from] std::io::Error),

    /// TOML configuration did not parse.
    #[error("invalid TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration values are missing or out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Picture or hex pattern data is malformed.
    #[error("invalid pattern at line {line}: {reason}")]
    InvalidPattern {
        /// 1-based line number.
        line: usize,
        /// What was wrong.
        reason: String,
    },

    /// Pattern data is shorter than the configured grid.
    #[error("pattern holds {actual} bytes, grid needs {expected}")]
    TruncatedPattern {
        /// Bytes required by the configuration.
        expected: usize,
        /// Bytes found.
        actual: usize,
    },

    /// Pattern dimensions disagree with the configuration.
    #[error("pattern is {pattern_width}x{pattern_height}, configuration says {width}x{height}")]
    DimensionMismatch {
        /// Configured width.
        width: usize,
        /// Configured height.
        height: usize,
        /// Width found in the pattern.
        pattern_width: usize,
        /// Height found in the pattern.
        pattern_height: usize,
    },

    /// Grid construction failed.
    #[error(transparent)]
    Grid(#[from] GridError),

    /// In-place result disagrees with the reference implementation.
    #[error("verification failed after {generation} generations: {mismatches} cells differ")]
    VerificationFailed {
        /// Generation at which the states were compared.
        generation: u64,
        /// Number of differing cells.
        mismatches: usize,
    },
}

impl CgolError {
    /// Wraps an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for CGOL operations.
pub type CgolResult<T> = Result<T, CgolError>;
