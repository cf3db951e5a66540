//! # Rendering
//!
//! Frame sinks receive the grid after every generation. The engine does not
//! care whether or how anything is displayed.
//!
//! - `NullSink`: discards frames (timing runs)
//! - `TextSink`: full picture per generation to any writer
//! - `TerminalSink`: ANSI animation, redraws only cells that changed

use std::io::Write;
use std::time::Duration;

use cgol_core::BitGrid;

use crate::error::CgolResult;

const HIDE_CURSOR: &str = "\x1b[?25l";
const SHOW_CURSOR: &str = "\x1b[?25h";
const CLEAR_SCREEN: &str = "\x1b[2J";
const RESET_COLOR: &str = "\x1b[0m";
const LIVE_COLOR: &str = "\x1b[32m";
const DEAD_COLOR: &str = "\x1b[34m";

/// Receives the grid once per generation.
pub trait FrameSink {
    /// Shows the grid as it is at `generation`.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    fn show(&mut self, grid: &BitGrid, generation: u64) -> CgolResult<()>;

    /// Called once after the last frame.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    fn finish(&mut self) -> CgolResult<()> {
        Ok(())
    }
}

/// Characters used for live and dead cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyphs {
    /// Live cell.
    pub live: char,
    /// Dead cell.
    pub dead: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self::ASCII
    }
}

impl Glyphs {
    /// `#` and `.`, same as the picture format.
    pub const ASCII: Self = Self {
        live: '#',
        dead: '.',
    };

    /// Solid bar and dot operator.
    pub const BLOCKS: Self = Self {
        live: '\u{25AE}',
        dead: '\u{22C5}',
    };

    #[inline]
    fn for_cell(self, alive: bool) -> char {
        if alive {
            self.live
        } else {
            self.dead
        }
    }
}

/// Discards every frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl FrameSink for NullSink {
    fn show(&mut self, _grid: &BitGrid, _generation: u64) -> CgolResult<()> {
        Ok(())
    }
}

/// Writes a header line and the full grid for every generation.
#[derive(Debug)]
pub struct TextSink<W: Write> {
    out: W,
    glyphs: Glyphs,
}

impl<W: Write> TextSink<W> {
    /// Creates a sink writing to `out`.
    pub fn new(out: W, glyphs: Glyphs) -> Self {
        Self { out, glyphs }
    }

    /// Returns the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> FrameSink for TextSink<W> {
    fn show(&mut self, grid: &BitGrid, generation: u64) -> CgolResult<()> {
        let mut frame = String::with_capacity((grid.width() + 1) * (grid.height() + 1));
        for row in 0..grid.height() as i32 {
            for col in 0..grid.width() as i32 {
                frame.push(self.glyphs.for_cell(grid.get_cell(col, row)));
            }
            frame.push('\n');
        }
        writeln!(self.out, "Generation {generation}")?;
        self.out.write_all(frame.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}

/// In-place ANSI terminal animation.
///
/// The first frame clears the screen and draws every cell. Later frames
/// only move the cursor to cells whose state changed.
#[derive(Debug)]
pub struct TerminalSink<W: Write> {
    out: W,
    glyphs: Glyphs,
    /// Last frame shown, for diffing.
    previous: Option<BitGrid>,
    /// Pause after each frame.
    frame_delay: Duration,
    /// Cells written by the last `show`.
    last_updates: usize,
}

impl<W: Write> TerminalSink<W> {
    /// Creates a terminal sink writing to `out`.
    pub fn new(out: W, glyphs: Glyphs, frame_delay: Duration) -> Self {
        Self {
            out,
            glyphs,
            previous: None,
            frame_delay,
            last_updates: 0,
        }
    }

    /// Number of cells redrawn by the most recent frame.
    #[must_use]
    pub const fn last_frame_updates(&self) -> usize {
        self.last_updates
    }

    /// Returns the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw_cell(&mut self, col: usize, row: usize, alive: bool) -> std::io::Result<()> {
        let color = if alive { LIVE_COLOR } else { DEAD_COLOR };
        write!(
            self.out,
            "\x1b[{};{}H{color}{}",
            row + 1,
            col + 1,
            self.glyphs.for_cell(alive)
        )
    }
}

impl<W: Write> FrameSink for TerminalSink<W> {
    fn show(&mut self, grid: &BitGrid, generation: u64) -> CgolResult<()> {
        let previous = self
            .previous
            .take()
            .filter(|p| p.width() == grid.width() && p.height() == grid.height());
        if previous.is_none() {
            write!(self.out, "{HIDE_CURSOR}{CLEAR_SCREEN}")?;
        }

        let mut updates = 0;
        for row in 0..grid.height() {
            for col in 0..grid.width() {
                let alive = grid.get_cell(col as i32, row as i32);
                let changed = previous
                    .as_ref()
                    .map_or(true, |p| p.get_cell(col as i32, row as i32) != alive);
                if changed {
                    self.draw_cell(col, row, alive)?;
                    updates += 1;
                }
            }
        }

        write!(
            self.out,
            "\x1b[{};1H{RESET_COLOR}Generation {generation}\x1b[K",
            grid.height() + 2
        )?;
        self.out.flush()?;

        self.last_updates = updates;
        self.previous = Some(grid.clone());

        if !self.frame_delay.is_zero() {
            std::thread::sleep(self.frame_delay);
        }
        Ok(())
    }

    fn finish(&mut self) -> CgolResult<()> {
        let below = self.previous.as_ref().map_or(1, |p| p.height() + 3);
        write!(self.out, "\x1b[{below};1H{RESET_COLOR}{SHOW_CURSOR}")?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blinker(horizontal: bool) -> BitGrid {
        let mut grid = BitGrid::new(5, 5).unwrap();
        for i in 1..4 {
            if horizontal {
                grid.set_cell(i, 2, true);
            } else {
                grid.set_cell(2, i, true);
            }
        }
        grid
    }

    #[test]
    fn test_text_sink_frame() {
        let mut sink = TextSink::new(Vec::new(), Glyphs::ASCII);
        sink.show(&blinker(true), 7).unwrap();
        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(text, "Generation 7\n.....\n.....\n.###.\n.....\n.....\n");
    }

    #[test]
    fn test_terminal_sink_redraws_only_changes() {
        let mut sink = TerminalSink::new(Vec::new(), Glyphs::BLOCKS, Duration::ZERO);

        sink.show(&blinker(false), 0).unwrap();
        assert_eq!(sink.last_frame_updates(), 25);

        sink.show(&blinker(true), 1).unwrap();
        assert_eq!(sink.last_frame_updates(), 4);

        sink.show(&blinker(true), 2).unwrap();
        assert_eq!(sink.last_frame_updates(), 0);

        sink.finish().unwrap();
        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(text.matches(CLEAR_SCREEN).count(), 1);
        assert!(text.contains("Generation 2"));
        assert!(text.ends_with(SHOW_CURSOR));
    }

    #[test]
    fn test_null_sink() {
        let mut sink = NullSink;
        assert!(sink.show(&blinker(false), 0).is_ok());
        assert!(sink.finish().is_ok());
    }
}
