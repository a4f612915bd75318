//! # crewdesk-entity
//!
//! Domain entity models for CrewDesk. Every struct in this crate
//! represents a domain value object. All entities derive `Debug`,
//! `Clone`, `Serialize`, and `Deserialize`.

pub mod notification;

pub use notification::{
    ActionLink, Notification, NotificationBuilder, NotificationKind, NotificationPriority,
};
