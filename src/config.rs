//! Command-line and environment configuration.
//!
//! Every flag can also be set through a `RUBIK_TABLE_*` environment variable;
//! the flag wins when both are present.

use std::path::PathBuf;

use clap::Parser;

use crate::core::PuzzleError;
use crate::engine::Session;
use crate::types::{DEFAULT_GRID_SIZE, SUPPORTED_SIZES};

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "rubik-table",
    version,
    about = "Rotate rows and columns until every row or every column is one color"
)]
pub struct AppConfig {
    /// Grid size of the first game (2, 4 or 6)
    #[arg(
        short,
        long,
        env = "RUBIK_TABLE_SIZE",
        default_value_t = DEFAULT_GRID_SIZE,
        value_parser = parse_size
    )]
    pub size: usize,

    /// Seed for reproducible grids
    #[arg(long, env = "RUBIK_TABLE_SEED")]
    pub seed: Option<u64>,

    /// Append logs to this file (RUST_LOG sets the level, default info)
    #[arg(long, env = "RUBIK_TABLE_LOG_PATH")]
    pub log_path: Option<PathBuf>,
}

impl AppConfig {
    /// Start the session this configuration describes.
    pub fn session(&self) -> Result<Session, PuzzleError> {
        match self.seed {
            Some(seed) => Session::with_seed(self.size, seed),
            None => Session::new(self.size),
        }
    }
}

fn parse_size(s: &str) -> Result<usize, String> {
    let size: usize = s
        .trim()
        .parse()
        .map_err(|_| format!("`{s}` is not a number"))?;
    if SUPPORTED_SIZES.contains(&size) {
        Ok(size)
    } else {
        Err(format!("size must be one of {SUPPORTED_SIZES:?}"))
    }
}
