//! # Notifications
//!
//! Toast-style messages raised by commands.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  command ──► Notifier::push(..) ──► queue ──► console drains & prints  │
//! │                                                                         │
//! │  Nothing is kept after draining: there is no notification history.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// How a notification is drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    #[default]
    Default,
    /// Red toast for failures.
    Destructive,
}

/// A transient message with a short title and a description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub variant: Variant,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Creates a regular notification.
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Notification::with_variant(Variant::Default, title, description)
    }

    /// Creates a destructive (error) notification.
    pub fn error(description: impl Into<String>) -> Self {
        Notification::with_variant(Variant::Destructive, "Error", description)
    }

    fn with_variant(
        variant: Variant,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Notification {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            variant,
            created_at: Utc::now(),
        }
    }
}

/// Pending notifications, oldest first.
#[derive(Debug, Default)]
pub struct Notifier {
    queue: Vec<Notification>,
}

impl Notifier {
    pub fn new() -> Self {
        Notifier::default()
    }

    pub fn push(&mut self, notification: Notification) {
        tracing::debug!(title = %notification.title, "notification raised");
        self.queue.push(notification);
    }

    /// Takes every pending notification, leaving the queue empty.
    pub fn drain(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.queue)
    }

    pub fn pending(&self) -> &[Notification] {
        &self.queue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_empties_queue() {
        let mut notifier = Notifier::new();
        notifier.push(Notification::info("Product Added", "Red Onions has been added"));
        notifier.push(Notification::error("Please fill in all required fields"));

        let drained = notifier.drain();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].variant, Variant::Default);
        assert_eq!(drained[1].title, "Error");
        assert_eq!(drained[1].variant, Variant::Destructive);

        assert!(notifier.pending().is_empty());
        assert!(notifier.drain().is_empty());
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(Notification::error("boom")).unwrap();
        assert_eq!(json["variant"], "destructive");
        assert_eq!(json["title"], "Error");
        assert!(json["createdAt"].is_string());
    }
}
