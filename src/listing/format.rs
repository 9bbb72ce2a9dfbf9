use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, FixedOffset};

pub const DEFAULT_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

const UNITS: [&str; 7] = ["B", "KB", "MB", "GB", "TB", "PB", "EB"];

// Format bytes using binary units, one decimal place above 1 KB
pub fn human_file_size(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{} B", bytes);
    }
    let mut v = bytes as f64;
    let mut i = 0usize;
    while v >= 1024.0 && i < UNITS.len() - 1 {
        v /= 1024.0;
        i += 1;
    }
    // 1023.96 KB would print as "1024.0 KB"
    if (v * 10.0).round() >= 10240.0 && i < UNITS.len() - 1 {
        v /= 1024.0;
        i += 1;
    }
    format!("{:.1} {}", v, UNITS[i])
}

/// Whether `fmt` is a strftime string chrono can render without error.
pub fn is_valid_datetime_format(fmt: &str) -> bool {
    !fmt.trim().is_empty() && !StrftimeItems::new(fmt).any(|item| matches!(item, Item::Error))
}

// Format in the offset carried by the timestamp itself; no conversion to local time.
// Falls back to RFC 3339 if the format cannot be rendered.
pub fn format_modified(ts: &DateTime<FixedOffset>, fmt: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", ts.format(fmt)).is_err() {
        return ts.to_rfc3339();
    }
    out
}
