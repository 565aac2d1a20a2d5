//! Log file setup. The terminal belongs to the UI, so logs go to a file.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use color_eyre::eyre::eyre;
use lumen_config::Config;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Returns the log file path, or `None` when
/// the platform has no data directory (logging is then disabled).
pub fn init(level: &str) -> color_eyre::Result<Option<PathBuf>> {
    let Some(dir) = Config::log_dir() else {
        return Ok(None);
    };
    fs::create_dir_all(&dir)?;
    let path = dir.join("lumen.log");
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| eyre!(err))?;

    Ok(Some(path))
}
