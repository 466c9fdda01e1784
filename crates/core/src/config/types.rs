use serde::{Deserialize, Serialize};

use crate::batch::BatchConfig;

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub batch: BatchConfig,
    #[serde(default)]
    pub notifier: NotifierConfig,
}

/// How end-of-run alerts are delivered
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct NotifierConfig {
    #[serde(default)]
    pub method: NotifierMethod,
    /// Exit with a non-zero status when duplicates or failures were logged
    #[serde(default = "default_fail_on_issues")]
    pub fail_on_issues: bool,
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            method: NotifierMethod::default(),
            fail_on_issues: default_fail_on_issues(),
        }
    }
}

fn default_fail_on_issues() -> bool {
    true
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotifierMethod {
    /// Blocking modal dialog (requires the `desktop` feature)
    Desktop,
    /// Message printed to the terminal
    #[default]
    Terminal,
    /// No presentation; only the exit code
    ExitCode,
}

impl NotifierMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Desktop => "desktop",
            Self::Terminal => "terminal",
            Self::ExitCode => "exit_code",
        }
    }
}
