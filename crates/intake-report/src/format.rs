//! Display formatting helpers.

use chrono::NaiveDate;

/// Shown for blank values.
pub const NONE_PLACEHOLDER: &str = "(none)";

/// Format a dollar amount with thousands separators and no decimals.
///
/// Halves round away from zero, e.g. `1234.5` becomes `$1,235`.
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return NONE_PLACEHOLDER.to_string();
    }
    let rounded = amount.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0.0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Cut `text` to at most `max_chars` characters, marking the cut with an
/// ellipsis that counts toward the limit.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    if max_chars == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(max_chars - 1).collect();
    out.push('…');
    out
}

/// Escape `<` and `>` for inclusion in markup.
pub fn escape_angle_brackets(text: &str) -> String {
    text.replace('<', "&lt;").replace('>', "&gt;")
}

/// Replace all but the last `visible` characters with `*`.
pub fn mask_leading(text: &str, visible: usize) -> String {
    let count = text.chars().count();
    let hidden = count.saturating_sub(visible);
    text.chars()
        .enumerate()
        .map(|(idx, ch)| if idx < hidden { '*' } else { ch })
        .collect()
}

/// One `*` per character.
pub fn mask_all(text: &str) -> String {
    "*".repeat(text.chars().count())
}

/// Long-form date for the page header, e.g. "Friday, October 16, 2026".
pub fn format_header_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}
