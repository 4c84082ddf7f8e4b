//! Logging setup.
//!
//! The game owns stdout, so log lines only go to a file when one is
//! configured. `RUST_LOG` overrides the `-v` level when set.

use std::fs::File;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::prelude::*;

use crate::config::Config;

/// Install the global subscriber. Returns false when logging stays disabled.
pub fn init(config: &Config) -> Result<bool> {
    let Some(path) = &config.log_file else {
        return Ok(false);
    };

    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(config.log_level()).into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(filter)
        .try_init()
        .context("failed to install log subscriber")?;

    info!(level = %config.log_level(), path = %path.display(), "logging initialized");
    Ok(true)
}
