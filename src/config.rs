use std::path::PathBuf;

use clap::Parser;

use crate::level::Difficulty;
use crate::session::DEFAULT_ROUND_SECS;

pub const DEFAULT_RENDER_FPS: u64 = 60;

/// Largest custom width or height, in cells.
pub const MAX_DIMENSION: u16 = 256;

/// Race through randomly generated mazes against the clock.
#[derive(Debug, Parser)]
#[command(name = "maze", version)]
pub struct Args {
    /// Starting difficulty
    #[arg(long, value_enum, default_value_t = Difficulty::Easy)]
    pub difficulty: Difficulty,

    /// Custom maze width in cells, overrides the difficulty preset
    #[arg(long, requires = "height", value_parser = clap::value_parser!(u16).range(1..=MAX_DIMENSION as i64))]
    pub width: Option<u16>,

    /// Custom maze height in cells, overrides the difficulty preset
    #[arg(long, requires = "width", value_parser = clap::value_parser!(u16).range(1..=MAX_DIMENSION as i64))]
    pub height: Option<u16>,

    /// Round length in seconds
    #[arg(long, default_value_t = DEFAULT_ROUND_SECS, value_parser = clap::value_parser!(u32).range(1..))]
    pub duration: u32,

    /// Random seed, for replaying the same sequence of mazes
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write diagnostics to this file (filtered by RUST_LOG)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub difficulty: Difficulty,
    pub width: usize,
    pub height: usize,
    pub round_secs: u32,
    pub seed: Option<u64>,
    pub log_file: Option<PathBuf>,
    pub render_fps: u64,
}

impl Settings {
    pub fn from_args(args: Args) -> Self {
        let (width, height) = match (args.width, args.height) {
            (Some(w), Some(h)) => (usize::from(w), usize::from(h)),
            _ => args.difficulty.dimensions(),
        };
        Self {
            difficulty: args.difficulty,
            width,
            height,
            round_secs: args.duration,
            seed: args.seed,
            log_file: args.log_file,
            render_fps: read_render_fps(std::env::var("MAZE_FPS").ok()),
        }
    }
}

fn read_render_fps(raw: Option<String>) -> u64 {
    raw.and_then(|v| v.parse::<u64>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(DEFAULT_RENDER_FPS)
}
