use chrono::{DateTime, Local};
use std::time::SystemTime;

/// Unit labels by number of 1024-divisions performed. TB is the ceiling;
/// anything larger still renders in TB.
const UNITS: [&str; 5] = [" B", "KB", "MB", "GB", "TB"];

/// Renders a byte count as a fixed-width output field, tab-terminated.
///
/// Raw mode prints the integer followed by " bytes"; human mode scales
/// by 1024 and prints two decimals with the matching unit label.
pub fn size_field(size: u64, human_readable: bool) -> String {
    if !human_readable {
        return format!("{:<6} bytes\t", size);
    }

    let mut value = size as f64;
    let mut unit = 0;

    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    format!("{:<6.2} {}\t", value, UNITS[unit])
}

/// Renders a modification instant as a ctime-style calendar string in
/// local time ("Thu Aug  6 14:55:02 2026"), padded to 30 columns.
pub fn mtime_field(modified: SystemTime) -> String {
    let local: DateTime<Local> = modified.into();
    let stamp = local.format("%a %b %e %H:%M:%S %Y").to_string();
    format!("{:<30}", stamp)
}
