//! # CGOL Runner
//!
//! Loads a pattern, runs it for a number of generations and optionally
//! animates, dumps and verifies the result.
//!
//! ```bash
//! # Picture file, 100 generations, animated in the terminal
//! cgol --pattern patterns/glider_16x16.txt --generations 100 --animate terminal
//!
//! # Packed hex data sized by a configuration file
//! cgol --pattern cgol_hex_in.hex --config cgol_conf.txt --generations 1000 --verify
//!
//! # Built-in pattern centered in a 64x64 grid
//! cgol --builtin r-pentomino --width 64 --height 64 --generations 500 --dump out.txt
//! ```
//!
//! Logging goes to stderr; set `RUST_LOG` to override the default `cgol=info`.

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use cgol::core::{BitGrid, Pattern};
use cgol::{
    load_grid, to_hex, write_picture, CgolConfig, CgolError, CgolResult, FrameSink, Glyphs,
    Measurement, NullSink, Simulation, TerminalSink, TextSink,
};
use clap::{Parser, ValueEnum};
use tracing::{error, info};

/// How generations are displayed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Animate {
    /// No output; timing only.
    None,
    /// Full picture per generation.
    Text,
    /// In-place ANSI animation.
    Terminal,
}

/// Glyph set for displayed cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum GlyphSet {
    /// `#` and `.`.
    Ascii,
    /// Solid bar and dot.
    Blocks,
}

/// Bounded, bit-packed Game of Life
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Pattern file: `#`/`.` picture, or `.hex` packed rows
    #[arg(short, long, conflicts_with = "builtin")]
    pattern: Option<PathBuf>,

    /// Configuration file (`name height width`, or `.toml`)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Built-in pattern, centered in the grid
    #[arg(short, long)]
    builtin: Option<String>,

    /// Grid width for built-in patterns without a configuration
    #[arg(long, default_value_t = 32)]
    width: usize,

    /// Grid height for built-in patterns without a configuration
    #[arg(long, default_value_t = 32)]
    height: usize,

    /// Number of generations to compute
    #[arg(short, long, default_value_t = 1)]
    generations: u64,

    /// Display mode
    #[arg(short, long, value_enum, default_value_t = Animate::None)]
    animate: Animate,

    /// Pause between animated frames, in milliseconds
    #[arg(long, default_value_t = 100)]
    frame_delay_ms: u64,

    /// Glyphs for animated cells
    #[arg(long, value_enum, default_value_t = GlyphSet::Blocks)]
    glyphs: GlyphSet,

    /// Write the final grid here (`.hex` for packed rows, picture otherwise)
    #[arg(short, long)]
    dump: Option<PathBuf>,

    /// Replay on the double-buffered reference and compare
    #[arg(long)]
    verify: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("cgol=info")),
        )
        .with_writer(io::stderr)
        .init();

    match run(&Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> CgolResult<()> {
    let config = args.config.as_deref().map(CgolConfig::load).transpose()?;
    let (config, grid) = initial_grid(args, config)?;
    info!(
        "Starting {}: {}x{}, {} live cells",
        config.name,
        config.width,
        config.height,
        grid.population()
    );

    let mut sim = Simulation::new(config, grid)?;
    let mut measurement = Measurement::new();
    let glyphs = match args.glyphs {
        GlyphSet::Ascii => Glyphs::ASCII,
        GlyphSet::Blocks => Glyphs::BLOCKS,
    };

    let mut sink: Box<dyn FrameSink> = match args.animate {
        Animate::None => Box::new(NullSink),
        Animate::Text => Box::new(TextSink::new(io::stdout().lock(), glyphs)),
        Animate::Terminal => Box::new(TerminalSink::new(
            io::stdout().lock(),
            glyphs,
            Duration::from_millis(args.frame_delay_ms),
        )),
    };

    let summary = sim.run(args.generations, sink.as_mut(), &mut measurement)?;
    drop(sink);

    info!(
        "Generation {}: {} live cells",
        summary.generation, summary.population
    );
    measurement.report(&sim.config().name);

    if let Some(path) = &args.dump {
        dump(sim.grid(), path)?;
    }
    if args.verify {
        sim.verify()?;
    }
    Ok(())
}

fn initial_grid(args: &Args, config: Option<CgolConfig>) -> CgolResult<(CgolConfig, BitGrid)> {
    if let Some(path) = &args.pattern {
        return load_grid(path, config.as_ref());
    }

    let name = args.builtin.as_deref().ok_or_else(|| {
        CgolError::InvalidConfig("either --pattern or --builtin is required".into())
    })?;
    let pattern = Pattern::by_name(name).ok_or_else(|| {
        let known: Vec<&str> = Pattern::ALL.iter().map(|p| p.name).collect();
        CgolError::InvalidConfig(format!(
            "unknown pattern '{name}', expected one of: {}",
            known.join(", ")
        ))
    })?;

    let config = match config {
        Some(config) => config,
        None => CgolConfig::new(pattern.name, args.height, args.width)?,
    };
    let mut grid = BitGrid::new(config.width, config.height)?;
    pattern.stamp_centered(&mut grid);
    Ok((config, grid))
}

fn dump(grid: &BitGrid, path: &Path) -> CgolResult<()> {
    let is_hex = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("hex"));
    let text = if is_hex {
        to_hex(grid.as_bytes(), grid.byte_stride())
    } else {
        write_picture(grid)
    };
    std::fs::write(path, text).map_err(|e| CgolError::io(path, e))?;
    info!("Final grid dumped to {}", path.display());
    Ok(())
}
