//! The notification center session: store + filter + pager composition.

use tracing::debug;

use crewdesk_core::config::notifications::NotificationsConfig;
use crewdesk_core::types::{NotificationId, PageResponse, Pager};
use crewdesk_entity::{ActionLink, Notification};

use crate::counts::{unread_total, TabCounts};
use crate::filter::{MainTab, NotificationFilter, SubTab};
use crate::store::NotificationStore;

/// Everything a notification view drives: the owned store, the active
/// filter state, and the page cursor.
///
/// Derived state (the visible page, tab counts) is recomputed from the
/// store on every query, so mutations are reflected immediately with no
/// cache to invalidate. All operations are synchronous and total:
/// boundary navigation and unknown-id mutations are no-ops.
#[derive(Debug, Clone)]
pub struct NotificationCenter {
    /// The owned notification store.
    store: NotificationStore,
    /// Active tab and search state.
    filter: NotificationFilter,
    /// Page cursor over the filtered set.
    pager: Pager,
}

impl NotificationCenter {
    /// Create a center over `store` using configured page size.
    pub fn new(store: NotificationStore, config: &NotificationsConfig) -> Self {
        Self {
            store,
            filter: NotificationFilter::default(),
            pager: Pager::new(config.rows_per_page),
        }
    }

    /// Create a center with an explicit page size.
    pub fn with_rows_per_page(store: NotificationStore, rows_per_page: usize) -> Self {
        Self {
            store,
            filter: NotificationFilter::default(),
            pager: Pager::new(rows_per_page),
        }
    }

    /// The underlying store.
    pub fn store(&self) -> &NotificationStore {
        &self.store
    }

    /// Active filter state.
    pub fn filter(&self) -> &NotificationFilter {
        &self.filter
    }

    /// Current page number (1-based).
    pub fn current_page(&self) -> usize {
        self.pager.current_page()
    }

    /// Total pages over the currently filtered set, never less than 1.
    pub fn total_pages(&self) -> usize {
        self.pager.total_pages(self.filtered_len())
    }

    /// Switch the main tab and reset to the first page.
    pub fn set_main_tab(&mut self, tab: MainTab) {
        self.filter.main_tab = tab;
        self.pager.reset();
        debug!(tab = tab.as_str(), "main tab changed");
    }

    /// Switch the sub tab and reset to the first page.
    pub fn set_sub_tab(&mut self, tab: SubTab) {
        self.filter.sub_tab = tab;
        self.pager.reset();
        debug!(tab = tab.as_str(), "sub tab changed");
    }

    /// Replace the search text and reset to the first page.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filter.search = search.into();
        self.pager.reset();
    }

    /// The visible page of the filtered set, in store order.
    pub fn visible_page(&self) -> PageResponse<Notification> {
        let filtered: Vec<Notification> = self
            .filter
            .apply(self.store.as_slice())
            .into_iter()
            .cloned()
            .collect();
        self.pager.paginate(&filtered)
    }

    /// Badge count for a sub tab, respecting the selected main tab.
    pub fn sub_tab_count(&self, sub_tab: SubTab) -> usize {
        TabCounts::compute(self.store.as_slice(), self.filter.main_tab).get(sub_tab)
    }

    /// All four sub-tab badge counts at once.
    pub fn tab_counts(&self) -> TabCounts {
        TabCounts::compute(self.store.as_slice(), self.filter.main_tab)
    }

    /// Unread count over the entire store, independent of tab state.
    pub fn unread_total(&self) -> usize {
        unread_total(self.store.as_slice())
    }

    /// Jump to the first page.
    pub fn first_page(&mut self) {
        self.pager.first();
    }

    /// Move back one page; no-op on the first page.
    pub fn prev_page(&mut self) {
        self.pager.prev();
    }

    /// Advance one page; no-op on the last page.
    pub fn next_page(&mut self) {
        let len = self.filtered_len();
        self.pager.next(len);
    }

    /// Jump to the last page of the filtered set.
    pub fn last_page(&mut self) {
        let len = self.filtered_len();
        self.pager.last(len);
    }

    /// Mark one notification read; unknown or already-read ids are
    /// no-ops.
    pub fn mark_read(&mut self, id: &NotificationId) -> bool {
        let changed = self.store.mark_read(id);
        self.reclamp();
        changed
    }

    /// Mark every notification read. Returns the number newly marked.
    pub fn mark_all_read(&mut self) -> u64 {
        let marked = self.store.mark_all_read();
        self.reclamp();
        marked
    }

    /// Remove a notification; unknown ids are no-ops.
    pub fn remove(&mut self, id: &NotificationId) -> bool {
        let removed = self.store.remove(id);
        self.reclamp();
        removed
    }

    /// Handle the user opening a notification: mark it read, then hand
    /// back its action link (if any) for the router collaborator.
    /// Marking always happens before navigation.
    pub fn click(&mut self, id: &NotificationId) -> Option<ActionLink> {
        self.store.mark_read(id);
        self.reclamp();
        self.store.get(id).and_then(|n| n.action.clone())
    }

    /// Number of records passing the active filter.
    fn filtered_len(&self) -> usize {
        self.store
            .as_slice()
            .iter()
            .filter(|n| self.filter.matches(n))
            .count()
    }

    /// Keep the page cursor in range after a mutation shrank the
    /// filtered set.
    fn reclamp(&mut self) {
        let len = self.filtered_len();
        self.pager.clamp(len);
    }
}
