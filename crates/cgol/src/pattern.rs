//! # Pattern Loading
//!
//! Two on-disk forms of an initial grid:
//!
//! - **Picture** (`.txt`): one line per row, `#` live, `.` dead. The picture
//!   defines the grid's height and width.
//! - **Hex** (`.hex`): packed rows as two-digit hex byte tokens, one row per
//!   line, `ceil(width / 8)` bytes per row, LSB first. Needs a configuration
//!   for the dimensions. The stream may be zero-padded to a multiple of four
//!   bytes.

use std::fmt::Write as _;
use std::path::Path;

use cgol_core::{bytes_per_row, set_cell_in_row, BitGrid};

use crate::config::CgolConfig;
use crate::error::{CgolError, CgolResult};

/// Live cell glyph in pictures.
pub const LIVE: char = '#';

/// Dead cell glyph in pictures.
pub const DEAD: char = '.';

/// A parsed picture: dimensions plus packed rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Picture {
    /// Row count.
    pub height: usize,
    /// Column count.
    pub width: usize,
    /// Packed rows, `height * ceil(width / 8)` bytes.
    pub bytes: Vec<u8>,
}

impl Picture {
    /// Builds the grid described by the picture.
    ///
    /// # Errors
    ///
    /// Returns an error if the picture exceeds the supported grid size.
    pub fn to_grid(&self) -> CgolResult<BitGrid> {
        Ok(BitGrid::from_bytes(self.width, self.height, &self.bytes)?)
    }

    /// Configuration matching the picture's dimensions.
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions are out of range.
    pub fn config(&self, name: &str) -> CgolResult<CgolConfig> {
        CgolConfig::new(name, self.height, self.width)
    }
}

/// Parses a `#`/`.` picture. Blank lines are skipped and whitespace inside
/// a row is ignored.
///
/// # Errors
///
/// Returns an error on unknown characters, ragged rows, or an empty picture.
pub fn parse_picture(text: &str) -> CgolResult<Picture> {
    let mut rows: Vec<Vec<bool>> = Vec::new();
    let mut width = None;

    for (index, line) in text.lines().enumerate() {
        let line_no = index + 1;
        let mut cells = Vec::new();
        for ch in line.chars().filter(|c| !c.is_whitespace()) {
            match ch {
                LIVE => cells.push(true),
                DEAD => cells.push(false),
                other => {
                    return Err(CgolError::InvalidPattern {
                        line: line_no,
                        reason: format!("unexpected character '{other}'"),
                    })
                }
            }
        }
        if cells.is_empty() {
            continue;
        }

        match width {
            None => width = Some(cells.len()),
            Some(w) if w != cells.len() => {
                return Err(CgolError::InvalidPattern {
                    line: line_no,
                    reason: format!("row has {} cells, expected {w}", cells.len()),
                })
            }
            Some(_) => {}
        }
        rows.push(cells);
    }

    let width = width.ok_or_else(|| CgolError::InvalidPattern {
        line: 1,
        reason: "picture has no cells".into(),
    })?;

    let stride = bytes_per_row(width);
    let mut bytes = vec![0u8; stride * rows.len()];
    for (row, cells) in bytes.chunks_exact_mut(stride).zip(&rows) {
        for (col, &alive) in cells.iter().enumerate() {
            set_cell_in_row(row, col, alive);
        }
    }

    Ok(Picture {
        height: rows.len(),
        width,
        bytes,
    })
}

/// Renders a grid as a picture, one line per row.
#[must_use]
pub fn write_picture(grid: &BitGrid) -> String {
    let mut out = String::with_capacity((grid.width() + 1) * grid.height());
    for row in 0..grid.height() as i32 {
        for col in 0..grid.width() as i32 {
            out.push(if grid.get_cell(col, row) { LIVE } else { DEAD });
        }
        out.push('\n');
    }
    out
}

/// Parses hex byte tokens, returning exactly `expected_len` bytes.
/// Trailing bytes (padding) are dropped.
///
/// # Errors
///
/// Returns an error on a token that is not a hex byte, or if fewer than
/// `expected_len` bytes are present.
pub fn parse_hex(text: &str, expected_len: usize) -> CgolResult<Vec<u8>> {
    let mut bytes = Vec::with_capacity(expected_len);
    for (index, line) in text.lines().enumerate() {
        for token in line.split_whitespace() {
            let byte = (token.len() <= 2)
                .then(|| u8::from_str_radix(token, 16).ok())
                .flatten()
                .ok_or_else(|| CgolError::InvalidPattern {
                    line: index + 1,
                    reason: format!("'{token}' is not a hex byte"),
                })?;
            bytes.push(byte);
        }
    }

    if bytes.len() < expected_len {
        return Err(CgolError::TruncatedPattern {
            expected: expected_len,
            actual: bytes.len(),
        });
    }
    bytes.truncate(expected_len);
    Ok(bytes)
}

/// Formats packed bytes as ` xx` tokens, `bytes_per_line` per line, zero
/// padded to a multiple of four bytes.
#[must_use]
pub fn to_hex(bytes: &[u8], bytes_per_line: usize) -> String {
    let padded_len = bytes.len().next_multiple_of(4);
    let per_line = bytes_per_line.max(1);
    let mut out = String::with_capacity(padded_len * 3 + padded_len / per_line + 1);

    let padded = bytes
        .iter()
        .copied()
        .chain(std::iter::repeat(0).take(padded_len - bytes.len()));
    for (i, byte) in padded.enumerate() {
        let _ = write!(out, " {byte:02x}");
        if (i + 1) % per_line == 0 {
            out.push('\n');
        }
    }
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out
}

/// Loads a picture file; the configuration name is the file stem.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid picture.
pub fn load_picture(path: &Path) -> CgolResult<(CgolConfig, BitGrid)> {
    let text = std::fs::read_to_string(path).map_err(|e| CgolError::io(path, e))?;
    let picture = parse_picture(&text)?;
    let config = picture.config(&pattern_name(path))?;
    let grid = picture.to_grid()?;
    tracing::info!(
        "Loaded picture {}: {}x{}, {} live cells",
        config.name,
        config.width,
        config.height,
        grid.population()
    );
    Ok((config, grid))
}

/// Loads a hex file sized by `config`.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is malformed, or is short.
pub fn load_hex(config: &CgolConfig, path: &Path) -> CgolResult<BitGrid> {
    let text = std::fs::read_to_string(path).map_err(|e| CgolError::io(path, e))?;
    let bytes = parse_hex(&text, config.grid_bytes())?;
    let grid = BitGrid::from_bytes(config.width, config.height, &bytes)?;
    tracing::info!("Loaded {} bytes of hex data for {}", bytes.len(), config.name);
    Ok(grid)
}

/// Loads a pattern, choosing the format by extension.
///
/// `.hex` files require `config`. For pictures, a supplied `config` must
/// agree with the picture's dimensions and its name is kept.
///
/// # Errors
///
/// Returns an error if the pattern cannot be loaded or disagrees with `config`.
pub fn load_grid(path: &Path, config: Option<&CgolConfig>) -> CgolResult<(CgolConfig, BitGrid)> {
    let is_hex = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("hex"));

    if is_hex {
        let config = config.ok_or_else(|| {
            CgolError::InvalidConfig(format!(
                "{} is a hex pattern and needs a configuration file",
                path.display()
            ))
        })?;
        let grid = load_hex(config, path)?;
        return Ok((config.clone(), grid));
    }

    let (picture_config, grid) = load_picture(path)?;
    match config {
        Some(config) if (config.width, config.height) != (grid.width(), grid.height()) => {
            Err(CgolError::DimensionMismatch {
                width: config.width,
                height: config.height,
                pattern_width: grid.width(),
                pattern_height: grid.height(),
            })
        }
        Some(config) => Ok((config.clone(), grid)),
        None => Ok((picture_config, grid)),
    }
}

fn pattern_name(path: &Path) -> String {
    path.file_stem()
        .map_or_else(|| "pattern".to_owned(), |s| s.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    const GLIDER: &str = "\
.#........
..#.......
###.......
..........
";

    #[test]
    fn test_parse_picture() {
        let picture = parse_picture(GLIDER).unwrap();
        assert_eq!((picture.width, picture.height), (10, 4));
        assert_eq!(picture.bytes, vec![0b010, 0, 0b100, 0, 0b111, 0, 0, 0]);

        let grid = picture.to_grid().unwrap();
        assert_eq!(grid.population(), 5);
        assert_eq!(write_picture(&grid), GLIDER);
    }

    #[test]
    fn test_picture_skips_blank_lines_and_crlf() {
        let picture = parse_picture("#.\r\n\r\n.#\r\n\n").unwrap();
        assert_eq!((picture.width, picture.height), (2, 2));
        assert_eq!(picture.bytes, vec![0b01, 0b10]);
    }

    #[test]
    fn test_picture_errors() {
        assert!(matches!(
            parse_picture("#.\n#x\n"),
            Err(CgolError::InvalidPattern { line: 2, .. })
        ));
        assert!(matches!(
            parse_picture("#.\n#..\n"),
            Err(CgolError::InvalidPattern { line: 2, .. })
        ));
        assert!(matches!(
            parse_picture("\n\n"),
            Err(CgolError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_parse_hex_drops_padding() {
        let bytes = parse_hex(" 02 00\n 04 00\n 07 00\n 00 00\n", 6).unwrap();
        assert_eq!(bytes, vec![2, 0, 4, 0, 7, 0]);
    }

    #[test]
    fn test_parse_hex_errors() {
        assert!(matches!(
            parse_hex(" 01 02\n 0g\n", 3),
            Err(CgolError::InvalidPattern { line: 2, .. })
        ));
        assert!(matches!(
            parse_hex(" 100", 1),
            Err(CgolError::InvalidPattern { line: 1, .. })
        ));
        assert!(matches!(
            parse_hex(" 01 02", 3),
            Err(CgolError::TruncatedPattern {
                expected: 3,
                actual: 2
            })
        ));
    }

    #[test]
    fn test_to_hex_pads_to_words() {
        assert_eq!(to_hex(&[0x0a, 0xff, 0x01], 2), " 0a ff\n 01 00\n");
        let picture = parse_picture(GLIDER).unwrap();
        let hex = to_hex(&picture.bytes, 2);
        assert_eq!(parse_hex(&hex, picture.bytes.len()).unwrap(), picture.bytes);
    }

    #[test]
    fn test_load_grid_by_extension() {
        let id = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let dir = std::env::temp_dir();
        let txt = dir.join(format!("cgol_glider_{id}.txt"));
        let hex = dir.join(format!("cgol_glider_{id}.hex"));
        let picture = parse_picture(GLIDER).unwrap();
        std::fs::write(&txt, GLIDER).unwrap();
        std::fs::write(&hex, to_hex(&picture.bytes, 2)).unwrap();

        let (config, from_txt) = load_grid(&txt, None).unwrap();
        assert_eq!(config.name, format!("cgol_glider_{id}"));
        let (_, from_hex) = load_grid(&hex, Some(&config)).unwrap();
        assert_eq!(from_txt, from_hex);

        assert!(matches!(
            load_grid(&hex, None),
            Err(CgolError::InvalidConfig(_))
        ));
        let wrong = CgolConfig::new("wrong", 5, 10).unwrap();
        assert!(matches!(
            load_grid(&txt, Some(&wrong)),
            Err(CgolError::DimensionMismatch { .. })
        ));

        std::fs::remove_file(&txt).ok();
        std::fs::remove_file(&hex).ok();
    }
}
