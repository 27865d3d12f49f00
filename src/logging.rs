//! Logging bootstrap.
//!
//! Diagnostics go to stderr unless a log directory is configured, in which
//! case they are appended to `rslotboard_*.log` files there. Initialization
//! happens at most once per process; later calls are ignored.

use crate::errors::{AppError, AppResult};
use flexi_logger::{FileSpec, Logger, LoggerHandle, WriteMode};
use log::info;
use std::path::Path;
use std::sync::OnceLock;

const LOG_FILE_BASENAME: &str = "rslotboard";

static LOGGER: OnceLock<LoggerHandle> = OnceLock::new();

pub fn init_logging(level: &str, log_dir: Option<&Path>) -> AppResult<()> {
    if LOGGER.get().is_some() {
        return Ok(());
    }

    let logger = Logger::try_with_env_or_str(level)
        .map_err(|e| AppError::Config(format!("invalid log level '{level}': {e}")))?;

    let logger = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            logger
                .log_to_file(FileSpec::default().directory(dir).basename(LOG_FILE_BASENAME))
                .write_mode(WriteMode::Direct)
                .append()
                .format_for_files(flexi_logger::detailed_format)
        }
        None => logger.format(flexi_logger::default_format),
    };

    let handle = logger
        .start()
        .map_err(|e| AppError::Config(format!("failed to start logger: {e}")))?;

    info!(
        "event=app_start version={} level={level}",
        env!("CARGO_PKG_VERSION")
    );

    // dropping the handle would stop the logger
    let _ = LOGGER.set(handle);
    Ok(())
}
