use chrono::{DateTime, Utc};

/// Human-readable age of the roster snapshot relative to `reference_secs`.
pub fn format_updated_at(fetched_at: DateTime<Utc>, reference_secs: i64) -> String {
    let secs = reference_secs - fetched_at.timestamp();
    if secs < 60 {
        return "just now".to_string();
    }
    let mins = secs / 60;
    if mins < 60 {
        return format!("{mins}m ago");
    }
    let hours = secs / 3600;
    if hours < 24 {
        return format!("{hours}h ago");
    }
    fetched_at.format("%b %d, %Y %H:%M UTC").to_string()
}
