//! # crewdesk-notify
//!
//! The CrewDesk notification center engine: an explicitly owned in-memory
//! store, pure classification and filter composition, per-tab count
//! aggregation, pagination, and the two-state read lifecycle. Views drive
//! a [`NotificationCenter`] and render whatever it derives; delivery,
//! persistence, and routing belong to the embedding application.

pub mod center;
pub mod counts;
pub mod filter;
pub mod formatter;
pub mod sample;
pub mod store;

pub use center::NotificationCenter;
pub use counts::TabCounts;
pub use filter::{MainTab, NotificationFilter, SubTab};
pub use store::NotificationStore;
