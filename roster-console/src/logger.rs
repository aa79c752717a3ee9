//! File logging for the console
//!
//! The terminal belongs to the UI, so logs only go to a file, and only
//! when one is requested.

use std::path::Path;

use tracing_subscriber::EnvFilter;

/// Environment variable naming the log file
pub const LOG_FILE_VAR: &str = "ROSTER_CONSOLE_LOG";

/// Install a file subscriber if `ROSTER_CONSOLE_LOG` is set.
///
/// Returns `false` when logging stays disabled.
pub fn init_file_logger() -> bool {
    let Some(file) = std::env::var(LOG_FILE_VAR).ok().filter(|f| !f.is_empty()) else {
        return false;
    };

    let path = Path::new(&file);
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let Some(name) = path.file_name() else {
        return false;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let appender = tracing_appender::rolling::never(dir, name);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .with_writer(appender)
        .try_init()
        .is_ok()
}
