//! Logger setup for the terminal binary.
//!
//! The game owns the terminal, so log lines never reach stderr. With a log
//! path, records are appended to that file at `info` unless `RUST_LOG` says
//! otherwise. Without one, logging is off unless `RUST_LOG` is set, in which
//! case records go to [`default_log_path`].

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use env_logger::{Builder, Target, DEFAULT_FILTER_ENV};
use log::LevelFilter;

/// File name used when `RUST_LOG` is set without a log path
pub const DEFAULT_LOG_FILE: &str = "rubik-table.log";

pub fn default_log_path() -> PathBuf {
    std::env::temp_dir().join(DEFAULT_LOG_FILE)
}

/// Install the global logger from `RUST_LOG` and the optional log path.
pub fn init(log_path: Option<&Path>) -> Result<()> {
    let filters = std::env::var(DEFAULT_FILTER_ENV).ok();
    builder(log_path, filters.as_deref())?
        .try_init()
        .context("install logger")
}

/// Configure a logger without installing it.
///
/// `filters` uses `RUST_LOG` syntax.
pub fn builder(log_path: Option<&Path>, filters: Option<&str>) -> Result<Builder> {
    let mut builder = Builder::new();
    match filters {
        Some(filters) => {
            builder.parse_filters(filters);
        }
        None if log_path.is_some() => {
            builder.filter_level(LevelFilter::Info);
        }
        None => {
            builder.filter_level(LevelFilter::Off);
            return Ok(builder);
        }
    }

    let path = log_path.map_or_else(default_log_path, Path::to_path_buf);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open log file {}", path.display()))?;
    builder.target(Target::Pipe(Box::new(file)));
    Ok(builder)
}
