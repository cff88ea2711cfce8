//! Transient status signaling.
//!
//! Feature failures in the browser core are never fatal and never raise
//! dialogs; they surface as short-lived status messages the chrome renders in
//! its status bar. [`StatusSink`] is the delivery contract, [`StatusLog`] a
//! recording sink for headless use and tests, [`NullStatus`] discards
//! everything.

use std::sync::{Arc, RwLock};
use std::time::Duration;

/// A transient, non-blocking status message with a display duration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    /// Text to display.
    pub text: String,
    /// How long the chrome should keep it visible.
    pub duration: Duration,
}

impl StatusMessage {
    /// Standard display duration.
    pub const DEFAULT_DURATION: Duration = Duration::from_millis(2000);
    /// Duration for quick state announcements.
    pub const BRIEF_DURATION: Duration = Duration::from_millis(1500);
    /// Duration for failure notices, kept visible a little longer.
    pub const FAILURE_DURATION: Duration = Duration::from_millis(3000);

    /// Creates a message with the standard duration.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            duration: Self::DEFAULT_DURATION,
        }
    }

    /// Creates a quick state announcement.
    pub fn brief(text: impl Into<String>) -> Self {
        Self::new(text).with_duration(Self::BRIEF_DURATION)
    }

    /// Creates a failure notice.
    pub fn failure(text: impl Into<String>) -> Self {
        Self::new(text).with_duration(Self::FAILURE_DURATION)
    }

    /// Overrides the display duration.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }
}

impl std::fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Receiver for transient status messages.
///
/// The chrome implements this over its status bar. Delivery is
/// fire-and-forget; a sink must not block.
pub trait StatusSink {
    /// Delivers one message.
    fn show(&mut self, message: StatusMessage);
}

/// Sink that discards every message.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullStatus;

impl StatusSink for NullStatus {
    fn show(&mut self, _message: StatusMessage) {}
}

/// Sink that records messages in memory.
///
/// Clonable; clones share the same log, so a caller can keep one handle and
/// hand another to the shell.
#[derive(Debug, Clone, Default)]
pub struct StatusLog {
    messages: Arc<RwLock<Vec<StatusMessage>>>,
}

impl StatusLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every recorded message, oldest first.
    pub fn messages(&self) -> Vec<StatusMessage> {
        self.messages.read().unwrap().clone()
    }

    /// Returns the most recent message, if any.
    pub fn last(&self) -> Option<StatusMessage> {
        self.messages.read().unwrap().last().cloned()
    }

    /// Returns true if any recorded message contains `needle`.
    pub fn any_contains(&self, needle: &str) -> bool {
        self.messages
            .read()
            .unwrap()
            .iter()
            .any(|m| m.text.contains(needle))
    }

    /// Number of recorded messages.
    pub fn len(&self) -> usize {
        self.messages.read().unwrap().len()
    }

    /// Returns true if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops all recorded messages.
    pub fn clear(&self) {
        self.messages.write().unwrap().clear();
    }
}

impl StatusSink for StatusLog {
    fn show(&mut self, message: StatusMessage) {
        self.messages.write().unwrap().push(message);
    }
}
