//! File logging for hosts.
//!
//! A terminal host owns stdout while it draws, so logs go to a file.

use std::fs::File;
use std::path::Path;

use simplelog::{Config, LevelFilter, WriteLogger};

use crate::error::LoggingError;

/// Install a global `simplelog` logger writing to `path`.
///
/// The file is truncated. Fails if it cannot be created or if a global
/// logger is already set.
pub fn init_file_logger(path: impl AsRef<Path>, level: LevelFilter) -> Result<(), LoggingError> {
    let log_file = File::create(path.as_ref())?;
    WriteLogger::init(level, Config::default(), log_file)?;
    log::debug!("File logger initialized at {}", path.as_ref().display());
    Ok(())
}
