use chrono::{DateTime, NaiveDateTime, Utc};

/// Render an API timestamp as `YYYY-MM-DD HH:MM:SS` in UTC. Accepts RFC 3339
/// strings and bare `YYYY-MM-DD HH:MM:SS` datetimes; anything else is shown
/// as received.
pub fn format_signal_time(raw: &str) -> String {
    if let Ok(ts) = raw.parse::<DateTime<Utc>>() {
        return ts.format("%Y-%m-%d %H:%M:%S").to_string();
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return naive.and_utc().format("%Y-%m-%d %H:%M:%S").to_string();
    }
    raw.to_string()
}

/// Millisecond-precision UTC clock line.
pub fn format_clock(now: DateTime<Utc>) -> String {
    now.format("%Y-%m-%d %H:%M:%S%.3f").to_string()
}

/// Countdown shown as `0:SS`, zero-padded.
pub fn format_countdown(seconds: u64) -> String {
    format!("0:{seconds:02}")
}
