//! Builder for constructing notification records.

use chrono::{DateTime, Utc};

use crewdesk_core::types::NotificationId;

use super::kind::NotificationKind;
use super::model::{ActionLink, Notification};
use super::priority::NotificationPriority;

/// Fluent builder for [`Notification`] records.
///
/// Data sources reconstructing history should set an explicit
/// [`timestamp`](Self::timestamp) and [`id`](Self::id); otherwise
/// `build()` stamps the current time and mints a fresh identifier.
#[derive(Debug, Clone)]
pub struct NotificationBuilder {
    id: Option<NotificationId>,
    kind: NotificationKind,
    priority: NotificationPriority,
    title: String,
    description: String,
    timestamp: Option<DateTime<Utc>>,
    is_read: bool,
    source_label: Option<String>,
    action: Option<ActionLink>,
    is_expiring: bool,
    expires_at: Option<DateTime<Utc>>,
}

impl NotificationBuilder {
    /// Start building a notification of the given kind.
    pub fn new(kind: NotificationKind) -> Self {
        Self {
            id: None,
            kind,
            priority: NotificationPriority::Informational,
            title: String::new(),
            description: String::new(),
            timestamp: None,
            is_read: false,
            source_label: None,
            action: None,
            is_expiring: false,
            expires_at: None,
        }
    }

    /// Set an explicit identifier.
    pub fn id(mut self, id: impl Into<NotificationId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the priority.
    pub fn priority(mut self, priority: NotificationPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Set the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the body text.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the event timestamp.
    pub fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Mark the record as already read.
    pub fn read(mut self) -> Self {
        self.is_read = true;
        self
    }

    /// Set the external-system reference label.
    pub fn source_label(mut self, label: impl Into<String>) -> Self {
        self.source_label = Some(label.into());
        self
    }

    /// Attach a navigable action.
    pub fn action(mut self, action: ActionLink) -> Self {
        self.action = Some(action);
        self
    }

    /// Set the expiry timestamp and flag the record as expiring.
    pub fn expires_at(mut self, expires_at: DateTime<Utc>) -> Self {
        self.is_expiring = true;
        self.expires_at = Some(expires_at);
        self
    }

    /// Finalize the record.
    pub fn build(self) -> Notification {
        Notification {
            id: self.id.unwrap_or_else(NotificationId::generate),
            kind: self.kind,
            priority: self.priority,
            title: self.title,
            description: self.description,
            timestamp: self.timestamp.unwrap_or_else(Utc::now),
            is_read: self.is_read,
            source_label: self.source_label,
            action: self.action,
            is_expiring: self.is_expiring,
            expires_at: self.expires_at,
        }
    }
}
