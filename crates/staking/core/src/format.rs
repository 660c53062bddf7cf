//! Human-readable rendering of durations, deadlines, and lock lengths.

const MINUTE: u64 = 60;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;

/// Renders a duration as its two largest units out of days, hours, and
/// minutes; seconds appear only for sub-minute durations.
///
/// Examples: `"3d 7h"`, `"12h 30m"`, `"45s"`.
pub fn humanize_duration(seconds: u64) -> String {
    if seconds == 0 {
        return "0s".to_string();
    }

    let mut remaining = seconds;
    let mut parts: Vec<String> = Vec::new();

    let days = remaining / DAY;
    if days > 0 {
        parts.push(format!("{days}d"));
        remaining -= days * DAY;
    }

    let hours = remaining / HOUR;
    if hours > 0 {
        parts.push(format!("{hours}h"));
        remaining -= hours * HOUR;
    }

    let minutes = remaining / MINUTE;
    if minutes > 0 && parts.len() < 2 {
        parts.push(format!("{minutes}m"));
        remaining -= minutes * MINUTE;
    }

    if parts.is_empty() {
        parts.push(format!("{remaining}s"));
    }

    parts.join(" ")
}

/// Renders the time remaining until `unlock_time` as seen at `now` (both
/// unix seconds). Elapsed deadlines render as `"Ready to unstake"`.
pub fn format_countdown(unlock_time: u64, now: u64) -> String {
    if unlock_time <= now {
        return "Ready to unstake".to_string();
    }
    humanize_duration(unlock_time - now)
}

/// Renders a unix timestamp as a UTC date-time. `0` is the contract's
/// "not set" and renders as `"—"`.
pub fn format_timestamp(unix_secs: u64) -> String {
    if unix_secs == 0 {
        return "—".to_string();
    }
    match chrono::DateTime::from_timestamp(unix_secs as i64, 0) {
        Some(datetime) => datetime.format("%a, %d %b %Y %H:%M:%S GMT").to_string(),
        None => "—".to_string(),
    }
}

/// Month label with the right plural: `"1 month"`, `"3 months"`.
pub fn lock_label(months: u32) -> String {
    let unit = if months == 1 { "month" } else { "months" };
    format!("{months} {unit}")
}
