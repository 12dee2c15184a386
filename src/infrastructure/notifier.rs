//! Local notification dispatch

/// A local notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub body: String,
}

impl Notification {
    /// Notification fired after a new entry is stored
    pub fn entry_added() -> Self {
        Notification {
            title: "New Travel Entry Added! ✈️".to_string(),
            body: "Your travel memory has been saved successfully.".to_string(),
        }
    }
}

/// Fire-and-forget notification sink. Delivery failures are the
/// implementation's concern and never reach the caller.
pub trait Notifier {
    fn notify(&self, notification: &Notification);
}

/// Prints notifications to stderr
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: &Notification) {
        eprintln!("{}\n{}", notification.title, notification.body);
    }
}

/// Drops every notification
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn notify(&self, _notification: &Notification) {}
}
