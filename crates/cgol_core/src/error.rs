//! # Grid Error Types
//!
//! Construction-time failures. Once a grid exists, nothing in the core can fail:
//! out-of-range cell access is defined behavior, not an error.

use thiserror::Error;

/// Errors raised while building a [`BitGrid`](crate::BitGrid).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Width outside `1..=MAX_WIDTH`.
    #[error("invalid grid width {width}: must be between 1 and {max}")]
    InvalidWidth {
        /// Requested width.
        width: usize,
        /// Largest supported width.
        max: usize,
    },

    /// Height outside `1..=MAX_HEIGHT`.
    #[error("invalid grid height {height}: must be between 1 and {max}")]
    InvalidHeight {
        /// Requested height.
        height: usize,
        /// Largest supported height.
        max: usize,
    },

    /// Packed input does not hold exactly `height * byte_stride` bytes.
    #[error("packed grid data has {actual} bytes, expected {expected}")]
    LengthMismatch {
        /// Bytes required by the grid dimensions.
        expected: usize,
        /// Bytes supplied.
        actual: usize,
    },
}

/// Result type for grid construction.
pub type GridResult<T> = Result<T, GridError>;
