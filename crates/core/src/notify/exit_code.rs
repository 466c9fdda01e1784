use async_trait::async_trait;

use super::{Alert, Notifier, NotifyError};

/// Notifier for unattended runs
/// Alerts are only logged; the process exit code carries the signal
pub struct ExitCodeNotifier;

impl ExitCodeNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ExitCodeNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for ExitCodeNotifier {
    async fn notify(&self, alert: &Alert) -> Result<(), NotifyError> {
        tracing::info!(kind = %alert.kind, "Alert suppressed: {}", alert.message);
        Ok(())
    }

    fn method_name(&self) -> &'static str {
        "exit_code"
    }
}
