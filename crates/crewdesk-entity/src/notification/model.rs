//! Notification entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crewdesk_core::types::NotificationId;

use super::kind::NotificationKind;
use super::priority::NotificationPriority;

/// A notification surfaced to a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    /// Unique notification identifier.
    pub id: NotificationId,
    /// Kind of event this notification represents.
    pub kind: NotificationKind,
    /// Priority level.
    pub priority: NotificationPriority,
    /// Notification title.
    pub title: String,
    /// Notification body text.
    pub description: String,
    /// When the event occurred. Immutable after creation.
    pub timestamp: DateTime<Utc>,
    /// Whether the user has read this notification.
    #[serde(default)]
    pub is_read: bool,
    /// Short external-system reference (e.g. "QuickBooks", "JOB-2291").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_label: Option<String>,
    /// Navigable target offered alongside the notification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<ActionLink>,
    /// Whether the underlying resource is about to expire.
    #[serde(default)]
    pub is_expiring: bool,
    /// When the underlying resource expires.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

/// A navigable target and its caption, handed to the router collaborator
/// when the user follows a notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionLink {
    /// Opaque path accepted by the router.
    pub url: String,
    /// Caption shown on the action button.
    pub label: String,
}

impl ActionLink {
    /// Create a new action link.
    pub fn new(url: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            label: label.into(),
        }
    }
}

impl Notification {
    /// Check if the notification has not been read yet.
    pub fn is_unread(&self) -> bool {
        !self.is_read
    }

    /// Check if the notification has expired as of `now`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.map(|exp| exp <= now).unwrap_or(false)
    }

    /// Case-insensitive substring match against title, description, and
    /// source label. An absent source label never matches; an empty
    /// needle matches everything.
    pub fn matches_search(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
            || self
                .source_label
                .as_deref()
                .map(|s| s.to_lowercase().contains(&needle))
                .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::builder::NotificationBuilder;
    use chrono::Duration;

    #[test]
    fn test_is_unread() {
        let n = NotificationBuilder::new(NotificationKind::Message)
            .title("New message")
            .build();
        assert!(n.is_unread());
    }

    #[test]
    fn test_is_expired() {
        let now = Utc::now();
        let n = NotificationBuilder::new(NotificationKind::Alert)
            .title("License expiring")
            .expires_at(now - Duration::hours(1))
            .build();
        assert!(n.is_expired(now));
        assert!(!n.is_expired(now - Duration::hours(2)));
    }

    #[test]
    fn test_no_expiry_never_expires() {
        let n = NotificationBuilder::new(NotificationKind::System)
            .title("Maintenance window")
            .build();
        assert!(!n.is_expired(Utc::now()));
    }

    #[test]
    fn test_matches_search_is_case_insensitive() {
        let n = NotificationBuilder::new(NotificationKind::Payment)
            .title("Invoice #1042 paid")
            .description("Wheeler Plumbing settled the balance")
            .build();
        assert!(n.matches_search("wheeler"));
        assert!(n.matches_search("INVOICE"));
        assert!(!n.matches_search("roofing"));
    }

    #[test]
    fn test_matches_search_absent_source_label() {
        let n = NotificationBuilder::new(NotificationKind::Message)
            .title("Ping")
            .description("Quick question")
            .build();
        // Missing source label is a non-match, not a panic.
        assert!(!n.matches_search("quickbooks"));
    }

    #[test]
    fn test_matches_search_source_label() {
        let n = NotificationBuilder::new(NotificationKind::Document)
            .title("W-9 uploaded")
            .source_label("QuickBooks")
            .build();
        assert!(n.matches_search("quickbooks"));
    }

    #[test]
    fn test_serde_roundtrip() {
        let n = NotificationBuilder::new(NotificationKind::Assignment)
            .title("New job assigned")
            .action(ActionLink::new("/jobs/2291", "View job"))
            .build();
        let json = serde_json::to_string(&n).expect("serialize");
        let parsed: Notification = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed.id, n.id);
        assert_eq!(parsed.action, n.action);
    }
}
