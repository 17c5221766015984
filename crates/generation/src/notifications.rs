//! User-facing notifications.
//!
//! Systems emit [`NotificationEvent`]s; a collector folds them into the
//! bounded [`NotificationLog`] the UI renders. Pipeline failures that must
//! reach the user (missing layout, export I/O errors) go through here
//! rather than being swallowed into the log output.

use bevy::prelude::*;

/// Kept notifications; older entries are dropped once the log is full.
const MAX_NOTIFICATIONS: usize = 50;

/// Notification priority, from most to least urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NotificationPriority {
    /// Something the user asked for could not be done.
    Warning,
    /// General information.
    Info,
    /// Good news (a run completed).
    Positive,
}

impl NotificationPriority {
    /// Short label for display.
    pub fn label(&self) -> &'static str {
        match self {
            NotificationPriority::Warning => "WARNING",
            NotificationPriority::Info => "INFO",
            NotificationPriority::Positive => "OK",
        }
    }
}

#[derive(Event, Debug, Clone)]
pub struct NotificationEvent {
    pub text: String,
    pub priority: NotificationPriority,
}

impl NotificationEvent {
    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            priority: NotificationPriority::Warning,
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            priority: NotificationPriority::Info,
        }
    }

    pub fn positive(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            priority: NotificationPriority::Positive,
        }
    }
}

/// A collected notification, newest last.
#[derive(Debug, Clone)]
pub struct Notification {
    pub text: String,
    pub priority: NotificationPriority,
}

/// Bounded log of collected notifications for the UI.
#[derive(Resource, Debug, Default)]
pub struct NotificationLog {
    entries: Vec<Notification>,
}

impl NotificationLog {
    pub fn entries(&self) -> &[Notification] {
        &self.entries
    }

    pub fn push(&mut self, text: String, priority: NotificationPriority) {
        if self.entries.len() == MAX_NOTIFICATIONS {
            self.entries.remove(0);
        }
        self.entries.push(Notification { text, priority });
    }
}

/// Folds the frame's [`NotificationEvent`]s into the log.
pub fn collect_notifications(
    mut events: EventReader<NotificationEvent>,
    mut log: ResMut<NotificationLog>,
) {
    for event in events.read() {
        match event.priority {
            NotificationPriority::Warning => warn!("{}", event.text),
            _ => info!("{}", event.text),
        }
        log.push(event.text.clone(), event.priority);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_is_bounded() {
        let mut log = NotificationLog::default();
        for i in 0..(MAX_NOTIFICATIONS + 10) {
            log.push(format!("note {i}"), NotificationPriority::Info);
        }
        assert_eq!(log.entries().len(), MAX_NOTIFICATIONS);
        assert_eq!(log.entries()[0].text, "note 10");
    }
}
