use async_trait::async_trait;
use rfd::{MessageButtons, MessageDialog, MessageLevel};

use super::{Alert, Notifier, NotifyError};

/// Notifier that shows a blocking modal dialog
/// The call returns once the user dismisses the dialog
///
/// The dialog is shown on the thread polling `notify`. macOS only allows
/// dialogs on the main thread, so await it from the task driven by
/// `#[tokio::main]` (as the `pngpress` binary does), never from a spawned task
/// or the blocking pool.
pub struct DesktopNotifier;

impl DesktopNotifier {
    pub fn new() -> Self {
        Self
    }

    fn dialog(alert: &Alert) -> MessageDialog {
        MessageDialog::new()
            .set_level(MessageLevel::Error)
            .set_title(alert.title())
            .set_description(alert.message.as_str())
            .set_buttons(MessageButtons::Ok)
    }
}

impl Default for DesktopNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for DesktopNotifier {
    async fn notify(&self, alert: &Alert) -> Result<(), NotifyError> {
        Self::dialog(alert).show();
        Ok(())
    }

    fn method_name(&self) -> &'static str {
        "desktop"
    }
}
