//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

pub fn pad_left(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}

/// Seconds as "08h 05m". Seconds are truncated.
pub fn secs2readable(secs: i64) -> String {
    let s = secs.max(0);
    format!("{:02}h {:02}m", s / 3600, (s % 3600) / 60)
}

/// Device label for display: upper-cased, `-` when unknown.
pub fn describe_device(device: Option<&str>) -> String {
    match device.map(str::trim) {
        Some(d) if !d.is_empty() => d.to_uppercase(),
        _ => "-".to_string(),
    }
}

/// A line of `ch` repeated `width` times.
pub fn separator(ch: &str, width: usize) -> String {
    let c = ch.chars().next().unwrap_or('-');
    std::iter::repeat_n(c, width).collect()
}
