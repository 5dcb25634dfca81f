use tracing::{error, info};

/// Tone of a user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Error,
}

/// External "show message" capability. The presenter reports outcomes
/// through it but never renders the message itself.
pub trait Notifier {
    fn notify(&mut self, message: &str, level: NotificationLevel);
}

/// Sends notifications to the tracing subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, message: &str, level: NotificationLevel) {
        match level {
            NotificationLevel::Error => error!(notification = message),
            NotificationLevel::Info | NotificationLevel::Success => {
                info!(notification = message, ?level)
            }
        }
    }
}

impl Notifier for Vec<(String, NotificationLevel)> {
    fn notify(&mut self, message: &str, level: NotificationLevel) {
        self.push((message.to_string(), level));
    }
}
