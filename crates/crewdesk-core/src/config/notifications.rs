//! Notification center configuration.

use serde::{Deserialize, Serialize};

/// Notification center settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationsConfig {
    /// Number of rows shown per page in the notification table.
    #[serde(default = "default_rows_per_page")]
    pub rows_per_page: usize,
    /// Maximum stored notifications per store; overflow is trimmed from
    /// the tail during maintenance.
    #[serde(default = "default_max_stored")]
    pub max_stored: usize,
    /// Number of days after which stored notifications are cleaned up.
    #[serde(default = "default_cleanup_days")]
    pub cleanup_after_days: u32,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            rows_per_page: default_rows_per_page(),
            max_stored: default_max_stored(),
            cleanup_after_days: default_cleanup_days(),
        }
    }
}

fn default_rows_per_page() -> usize {
    10
}

fn default_max_stored() -> usize {
    1000
}

fn default_cleanup_days() -> u32 {
    30
}
