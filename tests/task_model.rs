#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use daytask::libs::task::{validate_deadline, validate_title, NewTask, Task, TaskId, TaskPatch, MAX_TITLE_LEN};
    use serde_json::json;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    #[test]
    fn test_task_from_server_json() {
        let task: Task = serde_json::from_value(json!({
            "id": 12,
            "date": "2024-03-01",
            "title": "Write notes",
            "memo": null,
            "deadline": "17:30:00",
            "completed": false,
            "order_index": 2,
            "created_at": "2024-03-01T08:00:00",
            "updated_at": "2024-03-01T08:00:00"
        }))
        .unwrap();

        assert_eq!(task.id, TaskId(12));
        assert_eq!(task.date, date());
        assert_eq!(task.memo, None);
        assert_eq!(task.deadline.as_deref(), Some("17:30:00"));
        assert_eq!(task.order_index, 2);
    }

    #[test]
    fn test_task_id_parsing() {
        assert_eq!(" 42 ".parse::<TaskId>().unwrap(), TaskId(42));
        assert!("abc".parse::<TaskId>().is_err());
        assert_eq!(TaskId(7).to_string(), "7");
    }

    #[test]
    fn test_new_task_payload() {
        let new_task = NewTask::new(date(), "  Buy milk  ")
            .unwrap()
            .with_memo(Some("2 liters".to_string()))
            .with_deadline(Some("09:15"))
            .unwrap()
            .with_order_index(4);

        assert_eq!(
            serde_json::to_value(&new_task).unwrap(),
            json!({
                "date": "2024-03-01",
                "title": "Buy milk",
                "memo": "2 liters",
                "deadline": "09:15",
                "order_index": 4
            })
        );
    }

    #[test]
    fn test_new_task_without_order_index_omits_it() {
        let value = serde_json::to_value(NewTask::new(date(), "Read").unwrap()).unwrap();
        assert!(value.get("order_index").is_none());
        assert_eq!(value["memo"], serde_json::Value::Null);
    }

    #[test]
    fn test_blank_memo_is_dropped() {
        let new_task = NewTask::new(date(), "Read").unwrap().with_memo(Some("   ".to_string()));
        assert_eq!(new_task.memo, None);
    }

    #[test]
    fn test_patch_distinguishes_clear_from_unchanged() {
        let patch = TaskPatch::default().clear_memo().completed(true);
        assert_eq!(serde_json::to_value(&patch).unwrap(), json!({"memo": null, "completed": true}));

        let patch = TaskPatch::default().deadline("8:05").unwrap();
        assert_eq!(serde_json::to_value(&patch).unwrap(), json!({"deadline": "8:05"}));

        assert_eq!(serde_json::to_value(TaskPatch::default()).unwrap(), json!({}));
        assert!(TaskPatch::default().is_empty());
    }

    #[test]
    fn test_patch_apply_matches_server_merge() {
        let mut task: Task = serde_json::from_value(json!({
            "id": 1, "date": "2024-03-01", "title": "Old", "memo": "note", "deadline": "10:00"
        }))
        .unwrap();

        let patch = TaskPatch::default().title("New").unwrap().clear_deadline();
        task.apply(&patch);

        assert_eq!(task.title, "New");
        assert_eq!(task.memo.as_deref(), Some("note"));
        assert_eq!(task.deadline, None);
    }

    #[test]
    fn test_patch_completes_only_open_tasks() {
        let mut task: Task = serde_json::from_value(json!({"id": 1, "date": "2024-03-01", "title": "T"})).unwrap();
        let patch = TaskPatch::default().completed(true);

        assert!(patch.completes(&task));
        task.completed = true;
        assert!(!patch.completes(&task));
        assert!(!TaskPatch::default().completed(false).completes(&task));
    }

    #[test]
    fn test_title_validation() {
        assert!(validate_title("   ").is_err());
        assert!(validate_title(&"x".repeat(MAX_TITLE_LEN + 1)).is_err());
        assert_eq!(validate_title(&"x".repeat(MAX_TITLE_LEN)).unwrap().len(), MAX_TITLE_LEN);
        assert!(TaskPatch::default().title("").is_err());
    }

    #[test]
    fn test_deadline_validation() {
        assert_eq!(validate_deadline("09:30").unwrap(), "09:30");
        assert_eq!(validate_deadline(" 23:59:59 ").unwrap(), "23:59:59");
        assert!(validate_deadline("24:00").is_err());
        assert!(validate_deadline("12:60").is_err());
        assert!(validate_deadline("noon").is_err());
        assert!(validate_deadline("2024-03-01T09:00").is_err());
        assert!(NewTask::new(date(), "T").unwrap().with_deadline(Some("9")).is_err());
    }
}
