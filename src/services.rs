//! Application capabilities and their per-environment providers.

use std::collections::VecDeque;

use parking_lot::Mutex;
use tracing::Level;

/// Pending push messages kept before the oldest are discarded.
pub const PUSH_OUTBOX_CAPACITY: usize = 64;

/// Structured application logging.
pub trait Logger: Send + Sync {
    fn log(&self, level: Level, message: &str);

    /// Short provider name shown in diagnostics.
    fn name(&self) -> &'static str;
}

/// User-facing notifications.
pub trait Notifier: Send + Sync {
    fn notify(&self, title: &str, body: &str);

    fn name(&self) -> &'static str;
}

// ============================================================================
// Loggers
// ============================================================================

/// Production logger forwarding to the installed tracing subscriber.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn log(&self, level: Level, message: &str) {
        if level == Level::ERROR {
            tracing::error!(target: "servicebox::app", "{message}");
        } else if level == Level::WARN {
            tracing::warn!(target: "servicebox::app", "{message}");
        } else if level == Level::INFO {
            tracing::info!(target: "servicebox::app", "{message}");
        } else if level == Level::DEBUG {
            tracing::debug!(target: "servicebox::app", "{message}");
        } else {
            tracing::trace!(target: "servicebox::app", "{message}");
        }
    }

    fn name(&self) -> &'static str {
        "tracing"
    }
}

pub struct NoopLogger;

impl Logger for NoopLogger {
    fn log(&self, _level: Level, _message: &str) {}

    fn name(&self) -> &'static str {
        "noop"
    }
}

/// Test logger keeping every line in memory.
#[derive(Default)]
pub struct MemoryLogger {
    lines: Mutex<Vec<String>>,
}

impl MemoryLogger {
    #[cfg(test)]
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }
}

impl Logger for MemoryLogger {
    fn log(&self, level: Level, message: &str) {
        self.lines.lock().push(format!("{level} {message}"));
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

// ============================================================================
// Notifiers
// ============================================================================

/// Desktop notifications, surfaced through the log until a toast backend exists.
pub struct DesktopNotifier;

impl Notifier for DesktopNotifier {
    fn notify(&self, title: &str, body: &str) {
        tracing::info!(target: "servicebox::notify", title, body, "Desktop notification");
    }

    fn name(&self) -> &'static str {
        "desktop"
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushMessage {
    pub title: String,
    pub body: String,
}

/// Mobile push notifications, queued until the device sync drains them.
///
/// The outbox holds at most `capacity` messages; when full, the oldest
/// message is dropped to make room.
pub struct PushNotifier {
    outbox: Mutex<VecDeque<PushMessage>>,
    capacity: usize,
}

impl PushNotifier {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            outbox: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity: capacity.max(1),
        }
    }

    /// Take all queued messages, oldest first.
    pub fn drain(&self) -> Vec<PushMessage> {
        self.outbox.lock().drain(..).collect()
    }

    pub fn pending(&self) -> usize {
        self.outbox.lock().len()
    }
}

impl Default for PushNotifier {
    fn default() -> Self {
        Self::with_capacity(PUSH_OUTBOX_CAPACITY)
    }
}

impl Notifier for PushNotifier {
    fn notify(&self, title: &str, body: &str) {
        let mut outbox = self.outbox.lock();
        if outbox.len() >= self.capacity {
            outbox.pop_front();
            tracing::warn!(capacity = self.capacity, "Push outbox full, dropped oldest message");
        }
        outbox.push_back(PushMessage {
            title: title.to_string(),
            body: body.to_string(),
        });
        tracing::debug!(queued = outbox.len(), "Queued push notification");
    }

    fn name(&self) -> &'static str {
        "push"
    }
}

/// Test notifier recording what would have been sent.
#[derive(Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<PushMessage>>,
}

impl RecordingNotifier {
    #[cfg(test)]
    pub fn sent(&self) -> Vec<PushMessage> {
        self.sent.lock().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, title: &str, body: &str) {
        self.sent.lock().push(PushMessage {
            title: title.to_string(),
            body: body.to_string(),
        });
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_logger_captures_lines() {
        let logger = MemoryLogger::default();
        logger.log(Level::INFO, "started");
        logger.log(Level::WARN, "slow");
        assert_eq!(logger.lines(), vec!["INFO started", "WARN slow"]);
    }

    #[test]
    fn test_push_notifier_drain() {
        let notifier = PushNotifier::default();
        notifier.notify("Ready", "all services wired");

        let drained = notifier.drain();
        assert_eq!(drained.len(), 1);
        assert_eq!(drained[0].title, "Ready");
        assert!(notifier.drain().is_empty());
    }

    #[test]
    fn test_push_notifier_bounded() {
        let notifier = PushNotifier::with_capacity(3);
        for i in 0..10 {
            notifier.notify(&format!("msg-{i}"), "body");
        }
        assert_eq!(notifier.pending(), 3);

        let titles: Vec<String> = notifier.drain().into_iter().map(|m| m.title).collect();
        assert_eq!(titles, vec!["msg-7", "msg-8", "msg-9"]);
        assert_eq!(notifier.pending(), 0);
    }

    #[test]
    fn test_push_notifier_default_capacity() {
        let notifier = PushNotifier::default();
        for _ in 0..PUSH_OUTBOX_CAPACITY + 5 {
            notifier.notify("t", "b");
        }
        assert_eq!(notifier.pending(), PUSH_OUTBOX_CAPACITY);
    }

    #[test]
    fn test_recording_notifier() {
        let notifier = RecordingNotifier::default();
        notifier.notify("a", "b");
        assert_eq!(
            notifier.sent(),
            vec![PushMessage {
                title: "a".to_string(),
                body: "b".to_string()
            }]
        );
    }

    #[test]
    fn test_provider_names() {
        assert_eq!(TracingLogger.name(), "tracing");
        assert_eq!(NoopLogger.name(), "noop");
        assert_eq!(DesktopNotifier.name(), "desktop");
        assert_eq!(PushNotifier::default().name(), "push");
    }
}
