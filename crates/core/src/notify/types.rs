//! Types for the notify module.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What an end-of-run alert is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    /// Some inputs mapped to an output name that was already taken.
    DuplicateNames,
    /// Some inputs could not be decoded or encoded.
    MissedFiles,
}

impl AlertKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DuplicateNames => "duplicate_names",
            Self::MissedFiles => "missed_files",
        }
    }
}

impl fmt::Display for AlertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user-facing alert raised at the end of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
}

impl Alert {
    /// Alert for duplicate output names; `log_dir` is the directory name
    /// shown to the user.
    pub fn duplicate_names(log_dir: &str) -> Self {
        Self {
            kind: AlertKind::DuplicateNames,
            message: format!(
                "Error: Duplicate filenames! Please check the txt log in {}.",
                log_dir
            ),
        }
    }

    /// Alert for files that could not be converted.
    pub fn missed_files(log_dir: &str) -> Self {
        Self {
            kind: AlertKind::MissedFiles,
            message: format!("Error: Missed PNG! Please check the txt log in {}.", log_dir),
        }
    }

    /// Dialog title for this alert.
    pub fn title(&self) -> &'static str {
        "Error"
    }
}
