//! Process-level failures and their exit codes.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Usage line printed when the arguments are unusable.
pub const USAGE: &str = "Usage: stash items-file [inventory-size] [--detailed]";

#[derive(Debug, Error)]
pub enum CliError {
    #[error("missing items-file argument")]
    Usage,

    #[error("unknown option `{0}`")]
    UnknownOption(String),

    #[error("Error: {} could not be opened or read", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error: report could not be written")]
    Output(#[source] io::Error),
}

impl CliError {
    /// The arguments were unusable; callers print [`USAGE`] alongside.
    pub fn is_usage(&self) -> bool {
        matches!(self, CliError::Usage | CliError::UnknownOption(_))
    }

    /// Non-zero exit status for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Usage | CliError::UnknownOption(_) => 1,
            CliError::Output(_) => 2,
            CliError::Unreadable { .. } => 3,
        }
    }
}
