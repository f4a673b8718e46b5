//! Display formatting for task fields and completion rates.
//!
//! Every function here is pure and only produces strings for tables and
//! status lines.
//!
//! ## Examples
//!
//! ```rust
//! use daytask::libs::formatter::{completion_bar, format_deadline, format_percent};
//!
//! assert_eq!(format_percent(66.666), "66.7%");
//! assert_eq!(completion_bar(50.0, 10), "█████░░░░░");
//! assert_eq!(format_deadline(Some("09:30:00")), "09:30");
//! assert_eq!(format_deadline(None), "-");
//! ```

/// Width of the bar column in the statistics table.
pub const BAR_WIDTH: usize = 20;

const EMPTY: &str = "-";

/// Rounds a percentage to one decimal place.
pub fn format_percent(percent: f64) -> String {
    let percent = if percent.is_finite() { percent } else { 0.0 };
    format!("{:.1}%", percent)
}

/// Text bar with `width` cells, filled in proportion to `percent`.
///
/// Values outside `0..=100` are clamped.
pub fn completion_bar(percent: f64, width: usize) -> String {
    let ratio = if percent.is_finite() { (percent / 100.0).clamp(0.0, 1.0) } else { 0.0 };
    let filled = (ratio * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// `HH:MM` for a deadline, dropping the seconds the server may add.
pub fn format_deadline(deadline: Option<&str>) -> String {
    match deadline {
        Some(value) if !value.trim().is_empty() => {
            let value = value.trim();
            match value.splitn(3, ':').collect::<Vec<_>>().as_slice() {
                [hours, minutes, ..] => format!("{}:{}", hours, minutes),
                _ => value.to_string(),
            }
        }
        _ => EMPTY.to_string(),
    }
}

/// First line of a memo, cut to `max_chars` with an ellipsis.
pub fn format_memo(memo: Option<&str>, max_chars: usize) -> String {
    let line = memo.and_then(|m| m.lines().next()).map(str::trim).unwrap_or_default();
    if line.is_empty() {
        return EMPTY.to_string();
    }
    if line.chars().count() <= max_chars {
        return line.to_string();
    }
    let cut: String = line.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", cut)
}

pub fn format_status(completed: bool) -> &'static str {
    if completed {
        "[x]"
    } else {
        "[ ]"
    }
}
