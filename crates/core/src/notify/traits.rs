use async_trait::async_trait;
use thiserror::Error;

use super::types::Alert;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Notification backend unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to deliver notification: {0}")]
    Failed(String),
}

#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver an alert to the user
    async fn notify(&self, alert: &Alert) -> Result<(), NotifyError>;

    /// Name of this notification method
    fn method_name(&self) -> &'static str;
}
