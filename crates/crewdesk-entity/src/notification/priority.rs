//! Notification priority levels.

use serde::{Deserialize, Serialize};

/// Notification priority levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationPriority {
    /// Work is finished; nothing left to do
    Completed,
    /// Informational — no response expected
    Informational,
    /// Requires an explicit user response
    ActionRequired,
}

impl NotificationPriority {
    /// Parse from string
    pub fn from_str_value(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "action_required" => Self::ActionRequired,
            "completed" => Self::Completed,
            _ => Self::Informational,
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &str {
        match self {
            Self::ActionRequired => "action_required",
            Self::Informational => "informational",
            Self::Completed => "completed",
        }
    }

    /// Whether this priority flags the notification for the "actions" tab
    pub fn requires_action(&self) -> bool {
        matches!(self, Self::ActionRequired)
    }
}

impl std::fmt::Display for NotificationPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
