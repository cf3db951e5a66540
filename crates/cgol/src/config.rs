//! # Grid Configuration
//!
//! Three values size the grid: a name, a height and a width.
//!
//! ## Formats
//!
//! Plain (`cgol_conf.txt` style), whitespace separated:
//!
//! ```text
//! glider_16x16 16 16
//! ```
//!
//! TOML (selected by a `.toml` extension):
//!
//! ```toml
//! name = "glider_16x16"
//! height = 16
//! width = 16
//! ```

use std::path::Path;

use cgol_core::{bytes_per_row, MAX_HEIGHT, MAX_WIDTH};
use serde::Deserialize;

use crate::error::{CgolError, CgolResult};

/// Name and dimensions of a grid.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CgolConfig {
    /// Test/pattern name, used in logs and reports.
    pub name: String,
    /// Row count.
    pub height: usize,
    /// Column count.
    pub width: usize,
}

impl CgolConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a dimension is outside `1..=256`.
    pub fn new(name: impl Into<String>, height: usize, width: usize) -> CgolResult<Self> {
        let config = Self {
            name: name.into(),
            height,
            width,
        };
        config.validate()?;
        Ok(config)
    }

    /// Bytes per packed row.
    #[inline]
    #[must_use]
    pub const fn bytes_per_row(&self) -> usize {
        bytes_per_row(self.width)
    }

    /// Bytes in the whole packed grid.
    #[inline]
    #[must_use]
    pub const fn grid_bytes(&self) -> usize {
        self.bytes_per_row() * self.height
    }

    /// Checks the dimensions against what the engine supports.
    ///
    /// # Errors
    ///
    /// Returns [`CgolError::InvalidConfig`] for an empty name or a dimension
    /// outside `1..=256`.
    pub fn validate(&self) -> CgolResult<()> {
        if self.name.trim().is_empty() {
            return Err(CgolError::InvalidConfig("name is empty".into()));
        }
        if !(1..=MAX_HEIGHT).contains(&self.height) {
            return Err(CgolError::InvalidConfig(format!(
                "height {} outside 1..={MAX_HEIGHT}",
                self.height
            )));
        }
        if !(1..=MAX_WIDTH).contains(&self.width) {
            return Err(CgolError::InvalidConfig(format!(
                "width {} outside 1..={MAX_WIDTH}",
                self.width
            )));
        }
        Ok(())
    }

    /// Parses the plain `name height width` form.
    ///
    /// # Errors
    ///
    /// Returns an error if a value is missing, not a number, or out of range.
    pub fn from_conf_str(text: &str) -> CgolResult<Self> {
        let mut fields = text.split_whitespace();
        let name = fields
            .next()
            .ok_or_else(|| CgolError::InvalidConfig("missing name".into()))?;
        let height = parse_dimension(fields.next(), "height")?;
        let width = parse_dimension(fields.next(), "width")?;
        Self::new(name, height, width)
    }

    /// Parses the TOML form.
    ///
    /// # Errors
    ///
    /// Returns an error on malformed TOML or out-of-range values.
    pub fn from_toml_str(text: &str) -> CgolResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration file. `.toml` files are parsed as TOML,
    /// everything else as the plain form.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse.
    pub fn load(path: &Path) -> CgolResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| CgolError::io(path, e))?;
        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        let config = if is_toml {
            Self::from_toml_str(&text)?
        } else {
            Self::from_conf_str(&text)?
        };

        tracing::info!(
            "Loaded configuration {}: height={}, width={}",
            config.name,
            config.height,
            config.width
        );
        Ok(config)
    }
}

fn parse_dimension(field: Option<&str>, what: &str) -> CgolResult<usize> {
    let field = field.ok_or_else(|| CgolError::InvalidConfig(format!("missing {what}")))?;
    field
        .parse()
        .map_err(|_| CgolError::InvalidConfig(format!("{what} '{field}' is not a number")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_form() {
        let config = CgolConfig::from_conf_str("cgol_16x16_p1 16 20\n").unwrap();
        assert_eq!(config, CgolConfig::new("cgol_16x16_p1", 16, 20).unwrap());
        assert_eq!(config.bytes_per_row(), 3);
        assert_eq!(config.grid_bytes(), 48);
    }

    #[test]
    fn test_plain_form_errors() {
        assert!(matches!(
            CgolConfig::from_conf_str(""),
            Err(CgolError::InvalidConfig(_))
        ));
        assert!(matches!(
            CgolConfig::from_conf_str("name 16"),
            Err(CgolError::InvalidConfig(_))
        ));
        assert!(matches!(
            CgolConfig::from_conf_str("name sixteen 16"),
            Err(CgolError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_toml_form() {
        let config =
            CgolConfig::from_toml_str("name = \"edna\"\nheight = 64\nwidth = 64\n").unwrap();
        assert_eq!(config.name, "edna");
        assert_eq!((config.height, config.width), (64, 64));
    }

    #[test]
    fn test_toml_missing_field() {
        assert!(matches!(
            CgolConfig::from_toml_str("name = \"x\"\nheight = 4\n"),
            Err(CgolError::Toml(_))
        ));
    }

    #[test]
    fn test_range_limits() {
        assert!(CgolConfig::new("x", 0, 5).is_err());
        assert!(CgolConfig::new("x", 5, 257).is_err());
        assert!(CgolConfig::new(" ", 5, 5).is_err());
        assert!(CgolConfig::new("x", 256, 256).is_ok());
    }

    #[test]
    fn test_load_picks_format_by_extension() {
        let id = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let dir = std::env::temp_dir();
        let plain = dir.join(format!("cgol_conf_{id}.txt"));
        let toml = dir.join(format!("cgol_conf_{id}.toml"));
        std::fs::write(&plain, "plain 3 4").unwrap();
        std::fs::write(&toml, "name = \"toml\"\nheight = 5\nwidth = 6").unwrap();

        assert_eq!(CgolConfig::load(&plain).unwrap().name, "plain");
        assert_eq!(CgolConfig::load(&toml).unwrap().width, 6);
        assert!(matches!(
            CgolConfig::load(&dir.join(format!("missing_{id}.txt"))),
            Err(CgolError::Io { .. })
        ));

        std::fs::remove_file(&plain).ok();
        std::fs::remove_file(&toml).ok();
    }
}
