//! Types for the batch module.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::codec::Dimensions;
use crate::notify::Alert;

/// A PNG found in the input directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFile {
    /// Full path to the file.
    pub path: PathBuf,
    /// File name, lossily converted to UTF-8 for logs.
    pub name: String,
}

/// Step at which a file failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureStage {
    Decode,
    Resize,
    Encode,
    Write,
}

/// What happened to a single input file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum FileOutcome {
    /// A WEBP was written.
    Converted {
        input: String,
        output: PathBuf,
        original: Dimensions,
        written: Dimensions,
        size_bytes: u64,
    },
    /// The output name was already taken; nothing was written.
    Duplicate { input: String, target: String },
    /// The file could not be converted.
    Failed {
        input: String,
        stage: FailureStage,
        reason: String,
    },
}

impl FileOutcome {
    /// The input file name this outcome belongs to.
    pub fn input(&self) -> &str {
        match self {
            Self::Converted { input, .. }
            | Self::Duplicate { input, .. }
            | Self::Failed { input, .. } => input,
        }
    }

    pub fn is_converted(&self) -> bool {
        matches!(self, Self::Converted { .. })
    }
}

/// Progress update sent once per input file, before it is processed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchProgress {
    /// Zero-based position of the file in the run.
    pub index: usize,
    /// Number of PNG files in the run.
    pub total: usize,
    /// File name being processed.
    pub file_name: String,
}

/// Summary of a completed run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub started_at: DateTime<Utc>,
    pub duration_ms: u64,
    /// One entry per PNG, in processing order.
    pub outcomes: Vec<FileOutcome>,
    /// Contents of the duplicate log.
    pub duplicates: Vec<String>,
    /// Contents of the failure log.
    pub failures: Vec<String>,
}

impl BatchReport {
    /// Number of WEBP files written.
    pub fn converted_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_converted()).count()
    }

    /// Whether either log has entries.
    pub fn has_issues(&self) -> bool {
        !self.duplicates.is_empty() || !self.failures.is_empty()
    }

    /// Alerts to raise for this run, duplicates first.
    pub fn alerts(&self) -> Vec<Alert> {
        let log_dir = display_name(&self.output_dir);
        let mut alerts = Vec::new();
        if !self.duplicates.is_empty() {
            alerts.push(Alert::duplicate_names(&log_dir));
        }
        if !self.failures.is_empty() {
            alerts.push(Alert::missed_files(&log_dir));
        }
        alerts
    }
}

fn display_name(dir: &Path) -> String {
    dir.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| dir.display().to_string())
}
