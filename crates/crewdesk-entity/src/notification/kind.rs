//! Notification kind enumeration.

use serde::{Deserialize, Serialize};

/// Kind of event a notification represents, used for filtering and
/// bucket membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// A job or visit was assigned to the user.
    Assignment,
    /// An invoice or payment event.
    Payment,
    /// An alert needing attention (expiring document, overdue invoice).
    Alert,
    /// A message from a customer or teammate.
    Message,
    /// A document was uploaded, signed, or changed.
    Document,
    /// A system-level notice (maintenance, release notes).
    System,
    /// The user was mentioned in a note or comment.
    Mention,
    /// A scheduled reminder.
    Reminder,
}

impl NotificationKind {
    /// Parse from string, falling back to `System` for unknown values.
    pub fn from_str_value(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "assignment" => Self::Assignment,
            "payment" => Self::Payment,
            "alert" => Self::Alert,
            "message" => Self::Message,
            "document" => Self::Document,
            "mention" => Self::Mention,
            "reminder" => Self::Reminder,
            _ => Self::System,
        }
    }

    /// Return the kind as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Assignment => "assignment",
            Self::Payment => "payment",
            Self::Alert => "alert",
            Self::Message => "message",
            Self::Document => "document",
            Self::System => "system",
            Self::Mention => "mention",
            Self::Reminder => "reminder",
        }
    }

    /// Whether this kind belongs to the "updates" bucket.
    ///
    /// The buckets are independent predicates, not a partition: `Alert`
    /// is excluded here but included in [`Self::is_system`], and a kind
    /// may satisfy neither.
    pub fn is_update(&self) -> bool {
        matches!(
            self,
            Self::Assignment
                | Self::Payment
                | Self::Message
                | Self::Document
                | Self::Mention
                | Self::Reminder
        )
    }

    /// Whether this kind belongs to the "system" bucket.
    pub fn is_system(&self) -> bool {
        matches!(self, Self::System | Self::Alert)
    }
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
