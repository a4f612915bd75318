//! Tab and search filter composition for the notification list.

use serde::{Deserialize, Serialize};

use crewdesk_entity::Notification;

/// Top-level filter distinguishing all notifications from unread-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MainTab {
    /// Every notification in the store.
    #[default]
    All,
    /// Unread notifications only.
    Unread,
}

/// Secondary filter bucket applied after the main tab.
///
/// The buckets are independent predicates over kind and priority, not a
/// partition: one record can match several sub tabs, or none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubTab {
    /// No sub-tab filtering.
    #[default]
    All,
    /// Work and communication updates (assignments, payments, messages,
    /// documents, mentions, reminders).
    Updates,
    /// Notifications whose priority requires an explicit response.
    Actions,
    /// System notices and alerts.
    System,
}

impl SubTab {
    /// Return the tab as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Updates => "updates",
            Self::Actions => "actions",
            Self::System => "system",
        }
    }

    /// Whether a notification belongs to this bucket.
    pub fn matches(&self, notification: &Notification) -> bool {
        match self {
            Self::All => true,
            Self::Updates => notification.kind.is_update(),
            Self::Actions => notification.priority.requires_action(),
            Self::System => notification.kind.is_system(),
        }
    }
}

impl MainTab {
    /// Return the tab as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Unread => "unread",
        }
    }

    /// Whether a notification passes this tab.
    pub fn matches(&self, notification: &Notification) -> bool {
        match self {
            Self::All => true,
            Self::Unread => notification.is_unread(),
        }
    }
}

/// The complete filter state of the notification list: main tab, sub tab,
/// and free-form search text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotificationFilter {
    /// Top-level read/unread tab.
    #[serde(default)]
    pub main_tab: MainTab,
    /// Secondary bucket tab.
    #[serde(default)]
    pub sub_tab: SubTab,
    /// Case-insensitive search text; empty means no search filtering.
    #[serde(default)]
    pub search: String,
}

impl NotificationFilter {
    /// Whether a notification passes every active filter.
    ///
    /// Conditions are AND-composed and short-circuit in order: main tab,
    /// sub tab, then search.
    pub fn matches(&self, notification: &Notification) -> bool {
        if !self.main_tab.matches(notification) {
            return false;
        }
        if !self.sub_tab.matches(notification) {
            return false;
        }
        if !self.search.is_empty() && !notification.matches_search(&self.search) {
            return false;
        }
        true
    }

    /// Filter `items`, preserving their order. Never re-sorts.
    pub fn apply<'a>(&self, items: &'a [Notification]) -> Vec<&'a Notification> {
        items.iter().filter(|n| self.matches(n)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crewdesk_entity::{NotificationBuilder, NotificationKind, NotificationPriority};

    fn message(id: &str, read: bool) -> Notification {
        let b = NotificationBuilder::new(NotificationKind::Message)
            .id(id)
            .title("Customer message")
            .description("Can you come earlier?");
        if read { b.read().build() } else { b.build() }
    }

    #[test]
    fn test_unread_tab_excludes_read() {
        let items = vec![message("a", true), message("b", false)];
        let filter = NotificationFilter {
            main_tab: MainTab::Unread,
            ..Default::default()
        };
        let visible = filter.apply(&items);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id.as_str(), "b");
    }

    #[test]
    fn test_sub_tab_buckets() {
        let alert = NotificationBuilder::new(NotificationKind::Alert)
            .id("alert")
            .title("Overdue invoice")
            .priority(NotificationPriority::ActionRequired)
            .build();
        let payment = NotificationBuilder::new(NotificationKind::Payment)
            .id("pay")
            .title("Invoice paid")
            .priority(NotificationPriority::Completed)
            .build();
        let items = vec![alert, payment];

        let updates = NotificationFilter {
            sub_tab: SubTab::Updates,
            ..Default::default()
        };
        assert_eq!(updates.apply(&items).len(), 1);
        assert_eq!(updates.apply(&items)[0].id.as_str(), "pay");

        let system = NotificationFilter {
            sub_tab: SubTab::System,
            ..Default::default()
        };
        assert_eq!(system.apply(&items).len(), 1);
        assert_eq!(system.apply(&items)[0].id.as_str(), "alert");

        // The alert matches both Actions and System: buckets overlap.
        let actions = NotificationFilter {
            sub_tab: SubTab::Actions,
            ..Default::default()
        };
        assert_eq!(actions.apply(&items)[0].id.as_str(), "alert");
    }

    #[test]
    fn test_search_no_match_yields_empty() {
        let items = vec![message("a", false)];
        let filter = NotificationFilter {
            search: "Wheeler".to_string(),
            ..Default::default()
        };
        assert!(filter.apply(&items).is_empty());
    }

    #[test]
    fn test_filters_are_and_composed() {
        let read_match = NotificationBuilder::new(NotificationKind::Message)
            .id("read")
            .title("Wheeler job update")
            .read()
            .build();
        let unread_other = NotificationBuilder::new(NotificationKind::Message)
            .id("unread")
            .title("Different job")
            .build();
        let items = vec![read_match, unread_other];

        let filter = NotificationFilter {
            main_tab: MainTab::Unread,
            sub_tab: SubTab::Updates,
            search: "wheeler".to_string(),
        };
        // The read record matches the search but fails the main tab; the
        // unread one passes the tabs but fails the search.
        assert!(filter.apply(&items).is_empty());
    }

    #[test]
    fn test_apply_preserves_order() {
        let items: Vec<_> = (0..5).map(|i| message(&format!("m{i}"), false)).collect();
        let filter = NotificationFilter::default();
        let ids: Vec<_> = filter
            .apply(&items)
            .iter()
            .map(|n| n.id.as_str().to_string())
            .collect();
        assert_eq!(ids, ["m0", "m1", "m2", "m3", "m4"]);
    }

    #[test]
    fn test_empty_store() {
        let filter = NotificationFilter::default();
        assert!(filter.apply(&[]).is_empty());
    }
}
