#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use daytask::libs::reorder::{move_item, plan_reorder, MoveRequest, ReorderRejection};
    use daytask::libs::task::{Task, TaskId};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    fn task(id: i64, date: NaiveDate, order_index: i32, completed: bool) -> Task {
        Task {
            id: TaskId(id),
            date,
            title: format!("task {}", id),
            memo: None,
            deadline: None,
            completed,
            order_index,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    fn ids(tasks: &[Task]) -> Vec<i64> {
        tasks.iter().map(|t| t.id.0).collect()
    }

    fn open_list() -> Vec<Task> {
        vec![
            task(1, day(1), 0, false),
            task(2, day(1), 1, false),
            task(3, day(1), 2, false),
            task(4, day(1), 3, false),
        ]
    }

    #[test]
    fn test_move_item_splices_forward() {
        let mut items = vec!['a', 'b', 'c', 'd'];
        move_item(&mut items, 0, 2);
        assert_eq!(items, vec!['b', 'c', 'a', 'd']);
    }

    #[test]
    fn test_move_item_splices_backward() {
        let mut items = vec!['a', 'b', 'c', 'd'];
        move_item(&mut items, 3, 1);
        assert_eq!(items, vec!['a', 'd', 'b', 'c']);
    }

    #[test]
    fn test_move_item_out_of_range_is_noop() {
        let mut items = vec![1, 2, 3];
        move_item(&mut items, 5, 0);
        move_item(&mut items, 0, 3);
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[test]
    fn test_move_down_is_not_a_swap() {
        let plan = plan_reorder(&open_list(), MoveRequest::new(TaskId(1), TaskId(3)), true).unwrap();

        assert_eq!(plan.from, 0);
        assert_eq!(plan.to, 2);
        assert_eq!(ids(&plan.tasks), vec![2, 3, 1, 4]);
        let orders: Vec<i32> = plan.tasks.iter().map(|t| t.order_index).collect();
        assert_eq!(orders, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_assignments_cover_visible_tasks_in_new_order() {
        let plan = plan_reorder(&open_list(), MoveRequest::new(TaskId(4), TaskId(2)), true).unwrap();

        assert_eq!(
            plan.assignments,
            vec![(TaskId(1), 0), (TaskId(4), 1), (TaskId(2), 2), (TaskId(3), 3)]
        );
    }

    #[test]
    fn test_cross_date_move_is_rejected() {
        let mut tasks = open_list();
        tasks.push(task(9, day(2), 0, false));

        let result = plan_reorder(&tasks, MoveRequest::new(TaskId(1), TaskId(9)), true);

        assert_eq!(
            result,
            Err(ReorderRejection::CrossDate {
                from: day(1),
                to: day(2)
            })
        );
    }

    #[test]
    fn test_drop_on_itself_is_rejected() {
        let result = plan_reorder(&open_list(), MoveRequest::new(TaskId(2), TaskId(2)), true);
        assert_eq!(result, Err(ReorderRejection::SameTask(TaskId(2))));
    }

    #[test]
    fn test_unknown_task_is_rejected() {
        let result = plan_reorder(&open_list(), MoveRequest::new(TaskId(42), TaskId(2)), true);
        assert_eq!(result, Err(ReorderRejection::UnknownTask(TaskId(42))));

        let result = plan_reorder(&open_list(), MoveRequest::new(TaskId(2), TaskId(42)), true);
        assert_eq!(result, Err(ReorderRejection::UnknownTask(TaskId(42))));
    }

    #[test]
    fn test_hidden_task_cannot_be_moved() {
        let mut tasks = open_list();
        tasks[1].completed = true;

        let result = plan_reorder(&tasks, MoveRequest::new(TaskId(2), TaskId(4)), false);
        assert_eq!(result, Err(ReorderRejection::Hidden(TaskId(2))));

        let result = plan_reorder(&tasks, MoveRequest::new(TaskId(4), TaskId(2)), false);
        assert_eq!(result, Err(ReorderRejection::Hidden(TaskId(2))));
    }

    #[test]
    fn test_move_with_hidden_completed_tasks() {
        // Visible: 3, 7, 5, 8 (positions 0..3). Hidden: 6 and 4.
        let tasks = vec![
            task(3, day(1), 0, false),
            task(6, day(1), 1, true),
            task(7, day(1), 2, false),
            task(5, day(1), 3, false),
            task(4, day(1), 4, true),
            task(8, day(1), 5, false),
        ];

        let plan = plan_reorder(&tasks, MoveRequest::new(TaskId(5), TaskId(3)), false).unwrap();

        assert_eq!(plan.from, 2);
        assert_eq!(plan.to, 0);
        assert_eq!(
            plan.assignments,
            vec![(TaskId(5), 0), (TaskId(3), 1), (TaskId(7), 2), (TaskId(8), 3)]
        );

        // Visible tasks first in their new order, hidden ones after in their old order.
        assert_eq!(ids(&plan.tasks), vec![5, 3, 7, 8, 6, 4]);
        let hidden: Vec<(i64, i32)> = plan.tasks.iter().filter(|t| t.completed).map(|t| (t.id.0, t.order_index)).collect();
        assert_eq!(hidden, vec![(6, 1), (4, 4)]);
    }

    #[test]
    fn test_completed_tasks_move_when_shown() {
        let mut tasks = open_list();
        tasks[0].completed = true;

        let plan = plan_reorder(&tasks, MoveRequest::new(TaskId(1), TaskId(4)), true).unwrap();
        assert_eq!(ids(&plan.tasks), vec![2, 3, 4, 1]);
    }
}
