//! Logger setup shared by the binaries.

use flexi_logger::{opt_format, FlexiLoggerError, Logger, LoggerHandle};

/// Starts logging to stderr at `level`, unless `RUST_LOG` says otherwise.
///
/// Keep the returned handle alive for the life of the process.
pub fn init(level: &str) -> Result<LoggerHandle, FlexiLoggerError> {
    Logger::try_with_env_or_str(level)?
        .log_to_stderr()
        .format(opt_format)
        .start()
}
