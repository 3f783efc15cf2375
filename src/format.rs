use chrono::{DateTime, Local};

const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Human-readable size in 1024 steps, always two decimals (`2.00 KB`).
/// Anything past TB is expressed in PB, however large.
#[must_use]
pub fn format_size(bytes: u64) -> String {
    let mut size = bytes as f64;
    for unit in UNITS {
        if size < 1_024.0 {
            return format!("{size:.2} {unit}");
        }
        size /= 1_024.0;
    }
    format!("{size:.2} PB")
}

#[must_use]
pub fn format_timestamp(time: &DateTime<Local>) -> String {
    time.format("%Y-%m-%d %H:%M:%S").to_string()
}
