//! Core type definitions used across the CrewDesk workspace.

pub mod id;
pub mod pagination;

pub use id::NotificationId;
pub use pagination::{PageResponse, Pager};
