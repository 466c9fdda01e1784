//! End-of-run alerting.
//!
//! The batch only knows about the `Notifier` trait; how an alert reaches the
//! user (modal dialog, terminal line, nothing but an exit code) is picked from
//! configuration with [`create_notifier`].

#[cfg(feature = "desktop")]
mod desktop;
mod exit_code;
mod terminal;
mod traits;
mod types;

#[cfg(feature = "desktop")]
pub use desktop::*;
pub use exit_code::*;
pub use terminal::*;
pub use traits::*;
pub use types::*;

use crate::config::{NotifierConfig, NotifierMethod};

/// Factory function to create a notifier from config
pub fn create_notifier(config: &NotifierConfig) -> Result<Box<dyn Notifier>, NotifyError> {
    match config.method {
        NotifierMethod::Terminal => Ok(Box::new(TerminalNotifier::new())),
        NotifierMethod::ExitCode => Ok(Box::new(ExitCodeNotifier::new())),
        #[cfg(feature = "desktop")]
        NotifierMethod::Desktop => Ok(Box::new(DesktopNotifier::new())),
        #[cfg(not(feature = "desktop"))]
        NotifierMethod::Desktop => Err(NotifyError::ConfigurationError(
            "desktop notifications require the `desktop` feature".to_string(),
        )),
    }
}
