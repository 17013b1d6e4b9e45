use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures that can occur before the desktop takes over the terminal.
///
/// Window-manager operations themselves are total and never error; only
/// process setup (logging, terminal bring-up) has failure paths worth
/// reporting to the invoking shell.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("failed to open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl From<SetupError> for io::Error {
    fn from(err: SetupError) -> Self {
        io::Error::other(err.to_string())
    }
}
