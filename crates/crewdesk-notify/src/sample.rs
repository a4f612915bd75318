//! Built-in sample dataset for demos and tests.
//!
//! Mirrors the mock data the product boots with before a live data source
//! is wired in: a reverse-chronological mix of assignments, payments,
//! alerts, messages, documents, mentions, reminders, and system notices.

use chrono::{DateTime, Duration, Utc};

use crewdesk_entity::{
    ActionLink, Notification, NotificationBuilder, NotificationKind, NotificationPriority,
};

/// Build the sample dataset anchored at `now`, newest first.
pub fn sample_notifications(now: DateTime<Utc>) -> Vec<Notification> {
    vec![
        NotificationBuilder::new(NotificationKind::Assignment)
            .id("ntf-001")
            .title("New job assigned")
            .description("You were assigned to the Hendricks HVAC install on Friday")
            .priority(NotificationPriority::ActionRequired)
            .source_label("JOB-2291")
            .action(ActionLink::new("/jobs/2291", "View job"))
            .timestamp(now - Duration::minutes(4))
            .build(),
        NotificationBuilder::new(NotificationKind::Message)
            .id("ntf-002")
            .title("Message from Dana Wheeler")
            .description("Gate code is 4417, dog is friendly")
            .timestamp(now - Duration::minutes(25))
            .build(),
        NotificationBuilder::new(NotificationKind::Payment)
            .id("ntf-003")
            .title("Invoice #1042 paid")
            .description("Wheeler Plumbing settled the $1,840.00 balance")
            .priority(NotificationPriority::Completed)
            .source_label("QuickBooks")
            .action(ActionLink::new("/invoices/1042", "View invoice"))
            .timestamp(now - Duration::hours(2))
            .build(),
        NotificationBuilder::new(NotificationKind::Alert)
            .id("ntf-004")
            .title("Invoice #0991 overdue")
            .description("Payment from Castillo Roofing is 14 days past due")
            .priority(NotificationPriority::ActionRequired)
            .action(ActionLink::new("/invoices/0991", "Send reminder"))
            .timestamp(now - Duration::hours(5))
            .build(),
        NotificationBuilder::new(NotificationKind::Mention)
            .id("ntf-005")
            .title("Marcus mentioned you")
            .description("\"@you can you pick up the condenser before the visit?\"")
            .timestamp(now - Duration::hours(8))
            .read()
            .build(),
        NotificationBuilder::new(NotificationKind::Document)
            .id("ntf-006")
            .title("Signed estimate uploaded")
            .description("EST-2288 was signed by the customer")
            .priority(NotificationPriority::Completed)
            .source_label("EST-2288")
            .timestamp(now - Duration::hours(26))
            .read()
            .build(),
        NotificationBuilder::new(NotificationKind::Reminder)
            .id("ntf-007")
            .title("Visit tomorrow at 8:00")
            .description("Pre-season tune-up at 114 Alder Ct")
            .timestamp(now - Duration::days(2))
            .build(),
        NotificationBuilder::new(NotificationKind::Alert)
            .id("ntf-008")
            .title("Technician certification expiring")
            .description("EPA 608 certification for Ray Soto expires in 30 days")
            .priority(NotificationPriority::ActionRequired)
            .expires_at(now + Duration::days(30))
            .timestamp(now - Duration::days(3))
            .build(),
        NotificationBuilder::new(NotificationKind::System)
            .id("ntf-009")
            .title("Scheduled maintenance")
            .description("CrewDesk will be unavailable Sunday 02:00-02:30 UTC")
            .timestamp(now - Duration::days(5))
            .read()
            .build(),
        NotificationBuilder::new(NotificationKind::System)
            .id("ntf-010")
            .title("Price book import finished")
            .description("312 items imported, 4 skipped")
            .priority(NotificationPriority::Completed)
            .source_label("Import")
            .timestamp(now - Duration::days(9))
            .read()
            .build(),
    ]
}
