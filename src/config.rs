//! Command-line configuration.
//!
//! Gameplay rules are fixed constants in `blockdrop-types`; only front-end
//! concerns are configurable here.

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use tracing::Level;

use crate::term::MAX_CELL_SIZE;

#[derive(Debug, Clone, Parser)]
#[command(name = "blockdrop", version, about = "Falling-block puzzle game for the terminal")]
pub struct Config {
    #[arg(long, env = "BLOCKDROP_SEED", help = "Seed for a reproducible piece sequence")]
    pub seed: Option<u64>,

    #[arg(
        long,
        env = "BLOCKDROP_LOG",
        help = "Write logs to this file (the terminal is used by the game)"
    )]
    pub log_file: Option<PathBuf>,

    #[arg(short = 'v', long, action = ArgAction::Count, help = "Increase log verbosity (-v = INFO, -vv = DEBUG, -vvv = TRACE)")]
    pub verbose: u8,

    #[arg(
        long,
        default_value_t = 2,
        value_parser = clap::value_parser!(u16).range(1..=MAX_CELL_SIZE as i64),
        help = "Terminal columns per board cell"
    )]
    pub cell_width: u16,
}

impl Config {
    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}
