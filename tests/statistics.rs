#[cfg(test)]
mod tests {
    use daytask::libs::statistics::{
        chart_data, chart_label, effective_rate, DailyStat, GroupBy, MonthlyStat, Statistics, SummaryCards, ViewMode,
        WeeklyStat,
    };

    fn daily(date: &str, total: i64, completed: i64, rate: f64) -> DailyStat {
        DailyStat {
            date: date.to_string(),
            total_tasks: total,
            completed_tasks: completed,
            completion_rate: rate,
        }
    }

    #[test]
    fn test_day_labels_have_no_zero_padding() {
        let entries = chart_data(&[daily("2024-03-07", 4, 3, 0.75)], &[], &[], ViewMode::Day);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].label, "3/7");
        assert_eq!(entries[0].total, 4);
        assert_eq!(entries[0].completed, 3);
        assert_eq!(entries[0].incomplete, 1);
        assert!((entries[0].completion_rate_percent - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_week_labels_use_week_start() {
        let weekly = vec![WeeklyStat {
            week_start: "2024-12-30".to_string(),
            week_end: "2025-01-05".to_string(),
            total_tasks: 10,
            completed_tasks: 4,
            completion_rate: 0.4,
        }];

        let entries = chart_data(&[], &weekly, &[], ViewMode::Week);
        assert_eq!(entries[0].label, "12/30");
        assert_eq!(entries[0].incomplete, 6);
    }

    #[test]
    fn test_month_keys_pass_through() {
        let monthly = vec![MonthlyStat {
            month: "2024-03".to_string(),
            total_tasks: 31,
            completed_tasks: 31,
            completion_rate: 1.0,
        }];

        let entries = chart_data(&[], &[], &monthly, ViewMode::Month);
        assert_eq!(entries[0].label, "2024-03");
        assert_eq!(entries[0].incomplete, 0);
        assert!((entries[0].completion_rate_percent - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_mode_selects_one_array() {
        let days = vec![daily("2024-03-01", 1, 0, 0.0), daily("2024-03-02", 2, 2, 1.0)];
        assert_eq!(chart_data(&days, &[], &[], ViewMode::Day).len(), 2);
        assert!(chart_data(&days, &[], &[], ViewMode::Week).is_empty());
        assert!(chart_data(&days, &[], &[], ViewMode::Month).is_empty());
    }

    #[test]
    fn test_unparsable_key_passes_through() {
        assert_eq!(chart_label("someday", ViewMode::Day), "someday");
        assert_eq!(chart_label("2024-02-30", ViewMode::Week), "2024-02-30");
    }

    #[test]
    fn test_empty_period_has_zero_rate() {
        let entries = chart_data(&[daily("2024-03-01", 0, 0, 0.5)], &[], &[], ViewMode::Day);
        assert_eq!(entries[0].completion_rate_percent, 0.0);

        assert_eq!(effective_rate(0, f64::NAN), 0.0);
        assert_eq!(effective_rate(5, f64::INFINITY), 0.0);
        assert_eq!(effective_rate(5, 0.2), 0.2);
    }

    #[test]
    fn test_incomplete_is_not_clamped() {
        let entries = chart_data(&[daily("2024-03-01", 2, 3, 1.5)], &[], &[], ViewMode::Day);
        assert_eq!(entries[0].incomplete, -1);
    }

    #[test]
    fn test_rate_is_not_rounded() {
        let entries = chart_data(&[daily("2024-03-01", 3, 1, 1.0 / 3.0)], &[], &[], ViewMode::Day);
        assert!((entries[0].completion_rate_percent - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_statistics_response_with_null_rate() {
        let json = r#"{
            "period": {"start_date": "2024-03-01", "end_date": "2024-03-03"},
            "summary": {"total_tasks": 0, "completed_tasks": 0, "incomplete_tasks": 0, "completion_rate": null},
            "daily_stats": [
                {"date": "2024-03-01", "total_tasks": 0, "completed_tasks": 0, "completion_rate": null},
                {"date": "2024-03-02", "total_tasks": 2, "completed_tasks": 1, "completion_rate": 0.5}
            ]
        }"#;

        let statistics: Statistics = serde_json::from_str(json).unwrap();
        assert_eq!(statistics.summary.completion_rate, 0.0);
        assert!(statistics.weekly_stats.is_empty());

        let entries = statistics.chart(ViewMode::Day);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].completion_rate_percent, 0.0);
        assert_eq!(entries[1].label, "3/2");
    }

    #[test]
    fn test_summary_cards_from_summary() {
        let json = r#"{"period": {"start_date": "2024-03-01", "end_date": "2024-03-31"},
            "summary": {"total_tasks": 8, "completed_tasks": 6, "incomplete_tasks": 2, "completion_rate": 0.75}}"#;
        let statistics: Statistics = serde_json::from_str(json).unwrap();

        let cards = SummaryCards::from(&statistics.summary);
        assert_eq!(cards.total, 8);
        assert_eq!(cards.incomplete, 2);
        assert!((cards.completion_rate_percent - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_group_by_query_values() {
        assert_eq!(GroupBy::from(ViewMode::Day).as_str(), "day");
        assert_eq!(GroupBy::from(ViewMode::Week).as_str(), "week");
        assert_eq!(GroupBy::from(ViewMode::Month).as_str(), "month");
        assert_eq!(GroupBy::All.as_str(), "all");
    }
}
