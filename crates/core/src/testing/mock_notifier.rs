//! Mock notifier for testing.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::notify::{Alert, Notifier, NotifyError};

/// Notifier that records every alert it receives.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    alerts: Arc<RwLock<Vec<Alert>>>,
    fail: Arc<RwLock<bool>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Alerts received so far.
    pub async fn alerts(&self) -> Vec<Alert> {
        self.alerts.read().await.clone()
    }

    /// Make every delivery fail after recording the alert.
    pub async fn set_failing(&self, fail: bool) {
        *self.fail.write().await = fail;
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, alert: &Alert) -> Result<(), NotifyError> {
        self.alerts.write().await.push(alert.clone());
        if *self.fail.read().await {
            return Err(NotifyError::Failed("mock delivery failure".to_string()));
        }
        Ok(())
    }

    fn method_name(&self) -> &'static str {
        "recording"
    }
}
