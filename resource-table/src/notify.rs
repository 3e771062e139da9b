//! Notification sinks ("toasts").
//!
//! The table reports the outcome of loads and writes through a [`Notifier`].
//! Notifications are fire-and-forget; nothing is returned to the table.

use log::info;
use log::warn;
use tokio::sync::mpsc;

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Error,
}

/// A single notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: Level,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: Level::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: Level::Error,
            message: message.into(),
        }
    }
}

/// Fire-and-forget notification surface.
pub trait Notifier: Send + Sync + 'static {
    /// Reports a successful operation.
    fn success(&self, message: &str);

    /// Reports a failed operation.
    fn error(&self, message: &str);
}

/// Writes notifications to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn success(&self, message: &str) {
        info!("{message}");
    }

    fn error(&self, message: &str) {
        warn!("{message}");
    }
}

/// Drops every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn success(&self, _message: &str) {}

    fn error(&self, _message: &str) {}
}

/// Forwards notifications to a channel drained by the UI's toast surface.
///
/// Sending never blocks; notifications sent after the receiver is dropped
/// are discarded.
///
/// # Example
///
/// ```
/// use resource_table::notify::{ChannelNotifier, Notifier};
///
/// let (notifier, mut toasts) = ChannelNotifier::new();
/// notifier.success("Item created successfully");
/// assert_eq!(toasts.try_recv().unwrap().message, "Item created successfully");
/// ```
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    tx: mpsc::UnboundedSender<Notification>,
}

impl ChannelNotifier {
    /// Creates a notifier and the receiver that drains it.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Notification>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    fn send(&self, notification: Notification) {
        if self.tx.send(notification).is_err() {
            log::trace!("toast receiver dropped");
        }
    }
}

impl Notifier for ChannelNotifier {
    fn success(&self, message: &str) {
        self.send(Notification::success(message));
    }

    fn error(&self, message: &str) {
        self.send(Notification::error(message));
    }
}
