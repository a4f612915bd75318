//! In-memory notification store and lifecycle mutations.

use chrono::{DateTime, Utc};
use tracing::debug;

use crewdesk_core::types::NotificationId;
use crewdesk_entity::Notification;

/// An explicitly owned, order-preserving container of notifications.
///
/// The store never re-sorts: records keep the order the data source
/// supplied them in (reverse-chronological in the sample data). Each
/// record has a two-state lifecycle — unread, then read — terminated by
/// removal. Mutations on unknown ids are silent no-ops; every operation
/// is total.
#[derive(Debug, Clone, Default)]
pub struct NotificationStore {
    /// Records in data-source order.
    items: Vec<Notification>,
}

impl NotificationStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store from an ordered list of records.
    pub fn from_records(items: Vec<Notification>) -> Self {
        Self { items }
    }

    /// Number of records in the store.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All records, in store order.
    pub fn as_slice(&self) -> &[Notification] {
        &self.items
    }

    /// Look up a record by id.
    pub fn get(&self, id: &NotificationId) -> Option<&Notification> {
        self.items.iter().find(|n| &n.id == id)
    }

    /// Append a record to the end of the store.
    pub fn push(&mut self, notification: Notification) {
        self.items.push(notification);
    }

    /// Number of unread records across the entire store.
    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| n.is_unread()).count()
    }

    /// Mark a record as read. Idempotent: returns `true` only when the
    /// record existed and was previously unread.
    pub fn mark_read(&mut self, id: &NotificationId) -> bool {
        match self.items.iter_mut().find(|n| &n.id == id) {
            Some(n) if n.is_unread() => {
                n.is_read = true;
                debug!(id = %id, "notification marked read");
                true
            }
            Some(_) => false,
            None => {
                debug!(id = %id, "mark_read on unknown id ignored");
                false
            }
        }
    }

    /// Mark every record as read. Returns the number newly marked.
    pub fn mark_all_read(&mut self) -> u64 {
        let mut marked = 0u64;
        for n in self.items.iter_mut().filter(|n| n.is_unread()) {
            n.is_read = true;
            marked += 1;
        }
        debug!(marked, "marked all notifications read");
        marked
    }

    /// Remove a record. Returns `true` if a record was removed.
    pub fn remove(&mut self, id: &NotificationId) -> bool {
        let before = self.items.len();
        self.items.retain(|n| &n.id != id);
        let removed = self.items.len() != before;
        if removed {
            debug!(id = %id, "notification removed");
        }
        removed
    }

    /// Drop records whose expiry is at or before `now`. Returns the
    /// number removed.
    pub fn purge_expired(&mut self, now: DateTime<Utc>) -> usize {
        let before = self.items.len();
        self.items.retain(|n| !n.is_expired(now));
        let removed = before - self.items.len();
        if removed > 0 {
            debug!(removed, "purged expired notifications");
        }
        removed
    }

    /// Drop records created at or before `cutoff`. Returns the number
    /// removed.
    pub fn purge_older_than(&mut self, cutoff: DateTime<Utc>) -> usize {
        let before = self.items.len();
        self.items.retain(|n| n.timestamp > cutoff);
        let removed = before - self.items.len();
        if removed > 0 {
            debug!(removed, "purged aged-out notifications");
        }
        removed
    }

    /// Keep at most `max_stored` records in store order, dropping the
    /// overflow from the tail. Returns the number dropped.
    pub fn trim_to(&mut self, max_stored: usize) -> usize {
        if self.items.len() <= max_stored {
            return 0;
        }
        let dropped = self.items.len() - max_stored;
        self.items.truncate(max_stored);
        debug!(dropped, max_stored, "trimmed notification overflow");
        dropped
    }
}
