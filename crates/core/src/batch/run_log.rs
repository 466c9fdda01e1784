//! Append-only run logs.

use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use super::error::BatchError;

/// A plain-text log of file names, one per line.
///
/// The file is truncated on creation and every entry is flushed as soon as it
/// is appended, so an interrupted run still leaves an accurate log behind.
#[derive(Debug)]
pub struct RunLog {
    path: PathBuf,
    file: File,
    entries: Vec<String>,
}

impl RunLog {
    /// Creates (or truncates) the log file at `path`.
    pub async fn create(path: impl Into<PathBuf>) -> Result<Self, BatchError> {
        let path = path.into();
        let file = File::create(&path)
            .await
            .map_err(|source| BatchError::LogFile {
                path: path.clone(),
                source,
            })?;

        Ok(Self {
            path,
            file,
            entries: Vec::new(),
        })
    }

    /// Appends one entry.
    pub async fn append(&mut self, entry: &str) -> Result<(), BatchError> {
        let line = format!("{}\n", entry);
        let result = async {
            self.file.write_all(line.as_bytes()).await?;
            self.file.flush().await
        }
        .await;

        result.map_err(|source| BatchError::LogWrite {
            path: self.path.clone(),
            source,
        })?;

        self.entries.push(entry.to_string());
        Ok(())
    }

    /// Flushes file contents to disk.
    pub async fn sync(&mut self) -> Result<(), BatchError> {
        self.file
            .sync_all()
            .await
            .map_err(|source| BatchError::LogWrite {
                path: self.path.clone(),
                source,
            })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consumes the log, returning its entries.
    pub fn into_entries(self) -> Vec<String> {
        self.entries
    }
}
