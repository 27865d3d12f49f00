/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";
pub const CYAN: &str = "\x1b[36m";

/// Wrap `text` in `color` when `enabled`, otherwise return it unchanged.
pub fn paint(text: &str, color: &str, enabled: bool) -> String {
    if enabled {
        format!("{color}{text}{RESET}")
    } else {
        text.to_string()
    }
}

/// Grey placeholder for an empty cell.
pub fn dim(text: &str, enabled: bool) -> String {
    paint(text, GREY, enabled)
}
