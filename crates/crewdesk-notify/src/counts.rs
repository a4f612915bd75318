//! Per-tab badge count aggregation.

use serde::{Deserialize, Serialize};

use crewdesk_entity::Notification;

use crate::filter::{MainTab, SubTab};

/// Badge counts for the four sub tabs, computed against the currently
/// selected main tab.
///
/// Because the sub-tab buckets overlap, the four counts are not required
/// to sum to the base-set size; that is observed product behavior and
/// must be preserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabCounts {
    /// Size of the base set (`SubTab::All`).
    pub all: usize,
    /// Records in the updates bucket.
    pub updates: usize,
    /// Records whose priority requires action.
    pub actions: usize,
    /// Records in the system bucket.
    pub system: usize,
}

impl TabCounts {
    /// Compute counts over `items`. The base set is the whole list for
    /// [`MainTab::All`] and the unread subset for [`MainTab::Unread`].
    pub fn compute(items: &[Notification], main_tab: MainTab) -> Self {
        let mut counts = Self {
            all: 0,
            updates: 0,
            actions: 0,
            system: 0,
        };
        for n in items.iter().filter(|n| main_tab.matches(n)) {
            counts.all += 1;
            if SubTab::Updates.matches(n) {
                counts.updates += 1;
            }
            if SubTab::Actions.matches(n) {
                counts.actions += 1;
            }
            if SubTab::System.matches(n) {
                counts.system += 1;
            }
        }
        counts
    }

    /// Count for a single sub tab.
    pub fn get(&self, sub_tab: SubTab) -> usize {
        match sub_tab {
            SubTab::All => self.all,
            SubTab::Updates => self.updates,
            SubTab::Actions => self.actions,
            SubTab::System => self.system,
        }
    }
}

/// Unread count over the entire store, independent of any tab selection.
/// Drives the bell badge and the "Unread" main-tab badge.
pub fn unread_total(items: &[Notification]) -> usize {
    items.iter().filter(|n| n.is_unread()).count()
}
