/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const INVERSE: &str = "\x1b[7m";

/// Weekday color for the calendar header and day numbers (0 = Sunday).
pub fn color_for_weekday(weekday: u32) -> &'static str {
    match weekday {
        0 => RED,
        6 => BLUE,
        _ => RESET,
    }
}

