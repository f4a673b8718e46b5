#[cfg(test)]
mod tests {
    use daytask::libs::formatter::{completion_bar, format_deadline, format_memo, format_percent, format_status};

    #[test]
    fn test_format_percent_one_decimal() {
        assert_eq!(format_percent(75.0), "75.0%");
        assert_eq!(format_percent(33.333), "33.3%");
        assert_eq!(format_percent(66.666), "66.7%");
        assert_eq!(format_percent(0.0), "0.0%");
    }

    #[test]
    fn test_format_percent_non_finite() {
        assert_eq!(format_percent(f64::NAN), "0.0%");
        assert_eq!(format_percent(f64::INFINITY), "0.0%");
    }

    #[test]
    fn test_completion_bar() {
        assert_eq!(completion_bar(0.0, 4), "░░░░");
        assert_eq!(completion_bar(100.0, 4), "████");
        assert_eq!(completion_bar(50.0, 4), "██░░");
        assert_eq!(completion_bar(250.0, 3), "███");
        assert_eq!(completion_bar(-10.0, 3), "░░░");
        assert_eq!(completion_bar(f64::NAN, 2), "░░");
    }

    #[test]
    fn test_format_deadline() {
        assert_eq!(format_deadline(Some("09:30")), "09:30");
        assert_eq!(format_deadline(Some("17:45:00")), "17:45");
        assert_eq!(format_deadline(Some("  ")), "-");
        assert_eq!(format_deadline(None), "-");
    }

    #[test]
    fn test_format_memo() {
        assert_eq!(format_memo(None, 10), "-");
        assert_eq!(format_memo(Some("short"), 10), "short");
        assert_eq!(format_memo(Some("first line\nsecond"), 20), "first line");
        assert_eq!(format_memo(Some("abcdefghijkl"), 5), "abcd…");
    }

    #[test]
    fn test_format_status() {
        assert_eq!(format_status(true), "[x]");
        assert_eq!(format_status(false), "[ ]");
    }
}
