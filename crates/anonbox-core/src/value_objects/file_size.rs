//! Human-readable file size formatting

const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Format a byte count for display: `0` -> `"0 Bytes"`, `1024` -> `"1 KB"`.
///
/// Values are rounded to two decimals; anything past gigabytes stays in GB.
#[must_use]
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let exponent = ((bytes as f64).log2() / 10.0).floor() as usize;
    let exponent = exponent.min(UNITS.len() - 1);
    let value = bytes as f64 / 1024f64.powi(exponent as i32);
    let rounded = (value * 100.0).round() / 100.0;

    format!("{} {}", rounded, UNITS[exponent])
}
