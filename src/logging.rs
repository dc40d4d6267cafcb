//! Tracing setup. The terminal belongs to the UI, so events go to a log file.
//!
//! Filter priority, highest first:
//!
//! 1. `POKEDEX_LOG` (directives, e.g. `pokedex=debug`)
//! 2. `RUST_LOG`
//! 3. `--verbose` → `debug`
//! 4. `warn`

use std::fs::{self, File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

pub const LOG_ENV: &str = "POKEDEX_LOG";

pub fn default_level(verbose: bool) -> Level {
    if verbose { Level::DEBUG } else { Level::WARN }
}

/// Install the global subscriber writing to `log_file`.
///
/// Logging stays off when the file cannot be opened.
pub fn init(log_file: &Path, verbose: bool) {
    let Some(file) = open_log_file(log_file) else {
        return;
    };

    let layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    // A subscriber may already be installed (tests, replays); keep it
    let _ = tracing_subscriber::registry()
        .with(build_env_filter(verbose))
        .with(layer)
        .try_init();
}

fn open_log_file(path: &Path) -> Option<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    OpenOptions::new().create(true).append(true).open(path).ok()
}

pub fn build_env_filter(verbose: bool) -> EnvFilter {
    if let Ok(directives) = std::env::var(LOG_ENV) {
        if let Ok(filter) = EnvFilter::try_new(&directives) {
            return filter;
        }
    }

    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    let level = default_level(verbose);
    EnvFilter::new(level.as_str())
}
