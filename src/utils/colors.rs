/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Due rows in red, upcoming rows in green.
pub fn color_for_due(is_due: bool) -> &'static str {
    if is_due { RED } else { GREEN }
}

/// Repetitions left:
/// 1 → yellow (last review before mastery)
/// otherwise → reset
pub fn color_for_repetitions(left: i32) -> &'static str {
    if left <= 1 { YELLOW } else { RESET }
}

pub fn colorize(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}
