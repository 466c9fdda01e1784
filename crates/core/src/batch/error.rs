//! Error types for the batch module.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a whole run.
///
/// Problems with individual files never surface here; they end up in the
/// failure log instead.
#[derive(Debug, Error)]
pub enum BatchError {
    /// The output directory could not be created.
    #[error("Failed to create output directory {path}: {source}")]
    OutputDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output path exists but is not a directory.
    #[error("Output path exists and is not a directory: {path}")]
    OutputNotDirectory { path: PathBuf },

    /// The input directory could not be listed.
    #[error("Failed to read input directory {path}: {source}")]
    InputDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A log file could not be created.
    #[error("Failed to create log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An entry could not be appended to a log file.
    #[error("Failed to write log file {path}: {source}")]
    LogWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl BatchError {
    /// The path involved in the failure.
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::OutputDirectory { path, .. }
            | Self::OutputNotDirectory { path }
            | Self::InputDirectory { path, .. }
            | Self::LogFile { path, .. }
            | Self::LogWrite { path, .. } => path,
        }
    }
}
