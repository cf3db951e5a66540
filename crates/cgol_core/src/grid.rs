//! # Bit Grid
//!
//! The whole world lives in one contiguous byte buffer:
//! - Row-major, `byte_stride = ceil(width / 8)` bytes per row
//! - Column `c` of a row is bit `c % 8` of byte `c / 8` (LSB first)
//! - Padding bits past `width` in the last byte of a row are always zero
//!
//! ## Boundary Rule
//!
//! Cell access outside `[0, width) x [0, height)` is not an error.
//! Reads return dead, writes are ignored. There is no wraparound.

use crate::error::{GridError, GridResult};

/// Maximum number of cells in a grid row.
pub const MAX_WIDTH: usize = 256;

/// Maximum number of grid rows.
pub const MAX_HEIGHT: usize = 256;

/// Bytes needed for the widest supported row.
pub const MAX_BYTES_PER_ROW: usize = bytes_per_row(MAX_WIDTH);

/// Number of bytes a row of `width` cells occupies (rounded up).
#[inline]
#[must_use]
pub const fn bytes_per_row(width: usize) -> usize {
    width.div_ceil(8)
}

/// Reads column `col` of a packed row.
///
/// # Panics
///
/// Panics if `col / 8` is outside `row`.
#[inline]
#[must_use]
pub fn cell_in_row(row: &[u8], col: usize) -> bool {
    (row[col / 8] >> (col % 8)) & 1 == 1
}

/// Writes column `col` of a packed row.
///
/// # Panics
///
/// Panics if `col / 8` is outside `row`.
#[inline]
pub fn set_cell_in_row(row: &mut [u8], col: usize, alive: bool) {
    let mask = 1u8 << (col % 8);
    if alive {
        row[col / 8] |= mask;
    } else {
        row[col / 8] &= !mask;
    }
}

/// Flips column `col` of a packed row.
///
/// # Panics
///
/// Panics if `col / 8` is outside `row`.
#[inline]
pub fn flip_cell_in_row(row: &mut [u8], col: usize) {
    row[col / 8] ^= 1u8 << (col % 8);
}

/// Copies one packed row over another.
///
/// # Panics
///
/// Panics if the two rows differ in length.
#[inline]
pub fn copy_row(dst: &mut [u8], src: &[u8]) {
    dst.copy_from_slice(src);
}

/// Zero-fills a packed row (every cell dead).
#[inline]
pub fn clear_row(dst: &mut [u8]) {
    dst.fill(0);
}

/// A bounded grid of cells, one bit per cell.
///
/// Dimensions are fixed at construction; the buffer is never resized.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitGrid {
    /// Logical column count.
    width: usize,
    /// Row count.
    height: usize,
    /// Bytes per row.
    byte_stride: usize,
    /// Packed cells, `height * byte_stride` bytes.
    data: Box<[u8]>,
}

impl BitGrid {
    /// Creates an all-dead grid.
    ///
    /// # Errors
    ///
    /// Returns an error if `width` or `height` is zero or above the
    /// supported maximum (256).
    pub fn new(width: usize, height: usize) -> GridResult<Self> {
        validate_dimensions(width, height)?;
        let byte_stride = bytes_per_row(width);
        Ok(Self {
            width,
            height,
            byte_stride,
            data: vec![0u8; byte_stride * height].into_boxed_slice(),
        })
    }

    /// Creates a grid from packed row-major bytes.
    ///
    /// Padding bits past `width` are cleared.
    ///
    /// # Errors
    ///
    /// Returns an error on invalid dimensions or if `bytes` is not exactly
    /// `height * ceil(width / 8)` long.
    pub fn from_bytes(width: usize, height: usize, bytes: &[u8]) -> GridResult<Self> {
        validate_dimensions(width, height)?;
        let byte_stride = bytes_per_row(width);
        let expected = byte_stride * height;
        if bytes.len() != expected {
            return Err(GridError::LengthMismatch {
                expected,
                actual: bytes.len(),
            });
        }

        let mut grid = Self {
            width,
            height,
            byte_stride,
            data: bytes.into(),
        };
        let mask = grid.padding_mask();
        if mask != 0xFF {
            for row in grid.data.chunks_exact_mut(byte_stride) {
                row[byte_stride - 1] &= mask;
            }
        }
        Ok(grid)
    }

    /// Returns the logical column count.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Returns the row count.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Returns the number of bytes per row.
    #[inline]
    #[must_use]
    pub const fn byte_stride(&self) -> usize {
        self.byte_stride
    }

    /// Returns the whole packed buffer.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Returns true if `(col, row)` lies inside the grid.
    #[inline]
    #[must_use]
    pub fn contains(&self, col: i32, row: i32) -> bool {
        col >= 0 && row >= 0 && (col as usize) < self.width && (row as usize) < self.height
    }

    /// Reads a cell. Anything outside the grid is dead.
    #[inline]
    #[must_use]
    pub fn get_cell(&self, col: i32, row: i32) -> bool {
        if !self.contains(col, row) {
            return false;
        }
        cell_in_row(self.row(row as usize), col as usize)
    }

    /// Writes a cell. Writes outside the grid are ignored.
    #[inline]
    pub fn set_cell(&mut self, col: i32, row: i32, alive: bool) {
        if self.contains(col, row) {
            set_cell_in_row(self.row_mut(row as usize), col as usize, alive);
        }
    }

    /// Flips a cell. Flips outside the grid are ignored.
    #[inline]
    pub fn toggle_cell(&mut self, col: i32, row: i32) {
        if self.contains(col, row) {
            flip_cell_in_row(self.row_mut(row as usize), col as usize);
        }
    }

    /// Returns the packed storage of one row.
    ///
    /// # Panics
    ///
    /// Panics if `row >= height`.
    #[inline]
    #[must_use]
    pub fn row(&self, row: usize) -> &[u8] {
        let start = row * self.byte_stride;
        &self.data[start..start + self.byte_stride]
    }

    /// Returns the packed storage of one row for bulk writes.
    ///
    /// # Panics
    ///
    /// Panics if `row >= height`.
    #[inline]
    pub fn row_mut(&mut self, row: usize) -> &mut [u8] {
        let start = row * self.byte_stride;
        &mut self.data[start..start + self.byte_stride]
    }

    /// Iterates over the packed rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.data.chunks_exact(self.byte_stride)
    }

    /// Counts live cells.
    #[must_use]
    pub fn population(&self) -> usize {
        self.data.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Returns true if every cell is dead.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.iter().all(|&b| b == 0)
    }

    /// Kills every cell.
    pub fn clear(&mut self) {
        clear_row(&mut self.data);
    }

    /// Mask of the valid bits in the last byte of a row.
    #[inline]
    fn padding_mask(&self) -> u8 {
        match self.width % 8 {
            0 => 0xFF,
            bits => (1u8 << bits) - 1,
        }
    }
}

fn validate_dimensions(width: usize, height: usize) -> GridResult<()> {
    if width == 0 || width > MAX_WIDTH {
        return Err(GridError::InvalidWidth {
            width,
            max: MAX_WIDTH,
        });
    }
    if height == 0 || height > MAX_HEIGHT {
        return Err(GridError::InvalidHeight {
            height,
            max: MAX_HEIGHT,
        });
    }
    Ok(())
}
