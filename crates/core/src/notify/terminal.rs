use async_trait::async_trait;

use super::{Alert, Notifier, NotifyError};

/// Notifier that prints alerts to standard error
pub struct TerminalNotifier;

impl TerminalNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for TerminalNotifier {
    async fn notify(&self, alert: &Alert) -> Result<(), NotifyError> {
        tracing::warn!(kind = %alert.kind, "{}", alert.message);
        eprintln!("{}", alert.message);
        Ok(())
    }

    fn method_name(&self) -> &'static str {
        "terminal"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_terminal_notifier_accepts_alerts() {
        let notifier = TerminalNotifier::new();
        let result = notifier.notify(&Alert::missed_files("Compressed")).await;
        assert!(result.is_ok());
    }

    #[test]
    fn test_terminal_notifier_method_name() {
        assert_eq!(TerminalNotifier::default().method_name(), "terminal");
    }
}
