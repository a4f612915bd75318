//! Display formatting for notification timestamps.

use chrono::{DateTime, Utc};

/// Render a timestamp relative to `now` the way the notification list
/// displays it.
///
/// Thresholds: under a minute → "Just now"; under an hour → minutes;
/// under a day → hours; under a week → days; otherwise an absolute date.
/// Future timestamps clamp to "Just now".
pub fn relative_timestamp(ts: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(ts);
    let minutes = elapsed.num_minutes();

    if minutes < 1 {
        return "Just now".to_string();
    }
    if minutes < 60 {
        return format!("{minutes}m ago");
    }
    let hours = elapsed.num_hours();
    if hours < 24 {
        return format!("{hours}h ago");
    }
    let days = elapsed.num_days();
    if days < 7 {
        return format!("{days}d ago");
    }
    ts.format("%b %-d, %Y").to_string()
}
