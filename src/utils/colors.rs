//! ANSI colours for the sessions table and the worked-time clock.

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

fn is_empty_value(value: &str) -> bool {
    let v = value.trim();
    v.is_empty() || v == "--:--" || v == "-" || v == "00:00:00"
}

/// Missing values (`--:--`, `-`, zero durations) are greyed out, the rest
/// is returned unchanged.
pub fn colorize_optional(value: &str) -> String {
    if is_empty_value(value) {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Start times in green, end times in red.
pub fn colorize_in_out(value: &str, is_in: bool) -> String {
    if is_empty_value(value) {
        return format!("{GREY}{value}{RESET}");
    }

    if is_in {
        format!("{GREEN}{value}{RESET}")
    } else {
        format!("{RED}{value}{RESET}")
    }
}

/// Green while a session is running, red otherwise (matches the check-in /
/// check-out button colours).
pub fn color_for_running(running: bool) -> &'static str {
    if running { GREEN } else { RED }
}
