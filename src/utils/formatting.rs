//! Formatting utilities used for CLI and export outputs.

use unicode_width::UnicodeWidthStr;

/// Pad to a display width (wide characters such as `원` count double).
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(w)))
}

pub fn pad_left(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", " ".repeat(width.saturating_sub(w)), s)
}

/// 1234000 → "1,234,000"
pub fn group_digits(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    if amount < 0 { format!("-{out}") } else { out }
}

/// 1234000, "원" → "1,234,000원"
pub fn currency_text(amount: i64, suffix: &str) -> String {
    format!("{}{}", group_digits(amount), suffix)
}

/// Hours with one decimal, e.g. "7.5h".
pub fn hours_text(hours: f64) -> String {
    format!("{:.1}h", hours)
}
