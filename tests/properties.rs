use kanban_core::{
    reorder::{drop_column, hover_task},
    Board, DragItem, Id,
};
use proptest::prelude::*;

/// Builds a board with `columns` columns and one task per entry of
/// `task_columns`, each entry picking a column by index.
fn build(columns: usize, task_columns: &[usize]) -> (Board, Vec<Id>, Vec<Id>) {
    let mut board = Board::default();
    let column_ids: Vec<Id> = (0..columns).map(|_| board.add_column()).collect();
    let task_ids: Vec<Id> = task_columns
        .iter()
        .map(|index| board.add_task(column_ids[index % columns]).unwrap())
        .collect();
    (board, column_ids, task_ids)
}

fn board_strategy() -> impl Strategy<Value = (usize, Vec<usize>)> {
    (1usize..6, prop::collection::vec(0usize..6, 0..12))
}

fn unknown_id() -> Id {
    Id::new(1_000_000)
}

proptest! {
    #[test]
    fn prop_creation_order_is_display_order((columns, task_columns) in board_strategy()) {
        let (board, column_ids, task_ids) = build(columns, &task_columns);

        let shown: Vec<Id> = board.columns().iter().map(|c| c.id).collect();
        prop_assert_eq!(&shown, &column_ids);

        for (col_index, column_id) in column_ids.iter().enumerate() {
            let expected: Vec<Id> = task_columns
                .iter()
                .zip(&task_ids)
                .filter(|(index, _)| *index % columns == col_index)
                .map(|(_, id)| *id)
                .collect();
            let shown: Vec<Id> = board.tasks_for_column(*column_id).iter().map(|t| t.id).collect();
            prop_assert_eq!(shown, expected);
        }
    }

    #[test]
    fn prop_remove_column_cascades(
        (columns, task_columns) in board_strategy(),
        pick in 0usize..6,
    ) {
        let (mut board, column_ids, _) = build(columns, &task_columns);
        let removed = column_ids[pick % columns];
        let before = board.clone();

        board.remove_column(removed);

        prop_assert!(board.tasks().iter().all(|t| t.column_id != removed));
        let kept_columns: Vec<Id> = before.columns().iter().map(|c| c.id).filter(|id| *id != removed).collect();
        let now_columns: Vec<Id> = board.columns().iter().map(|c| c.id).collect();
        prop_assert_eq!(now_columns, kept_columns);

        let kept_tasks: Vec<Id> = before.tasks().iter().filter(|t| t.column_id != removed).map(|t| t.id).collect();
        let now_tasks: Vec<Id> = board.tasks().iter().map(|t| t.id).collect();
        prop_assert_eq!(now_tasks, kept_tasks);
    }

    #[test]
    fn prop_drop_on_self_is_identity(
        (columns, task_columns) in board_strategy(),
        pick in 0usize..12,
    ) {
        let (board, column_ids, task_ids) = build(columns, &task_columns);

        let column = column_ids[pick % columns];
        prop_assert_eq!(drop_column(&board, column, Some(DragItem::column(column))), board.clone());

        if !task_ids.is_empty() {
            let task = task_ids[pick % task_ids.len()];
            prop_assert_eq!(hover_task(&board, DragItem::task(task), Some(DragItem::task(task))), board.clone());
        }
    }

    #[test]
    fn prop_column_drop_matches_remove_insert(
        columns in 1usize..8,
        from in 0usize..8,
        to in 0usize..8,
    ) {
        let (board, column_ids, _) = build(columns, &[]);
        let (from, to) = (from % columns, to % columns);

        let next = drop_column(&board, column_ids[from], Some(DragItem::column(column_ids[to])));

        let mut expected = column_ids.clone();
        let moved = expected.remove(from);
        expected.insert(to, moved);
        let shown: Vec<Id> = next.columns().iter().map(|c| c.id).collect();
        prop_assert_eq!(shown, expected);
    }

    #[test]
    fn prop_hover_over_other_column_reassigns(
        (columns, task_columns) in board_strategy(),
        pick_task in 0usize..12,
        pick_column in 0usize..6,
    ) {
        prop_assume!(!task_columns.is_empty());
        let (board, column_ids, task_ids) = build(columns, &task_columns);
        let task = task_ids[pick_task % task_ids.len()];
        let column = column_ids[pick_column % columns];

        let next = hover_task(&board, DragItem::task(task), Some(DragItem::column(column)));

        prop_assert_eq!(next.task(task).unwrap().column_id, column);
        let before_order: Vec<Id> = board.tasks().iter().map(|t| t.id).collect();
        let after_order: Vec<Id> = next.tasks().iter().map(|t| t.id).collect();
        prop_assert_eq!(after_order, before_order);
    }

    #[test]
    fn prop_hover_over_task_in_other_column_reassigns(
        (columns, task_columns) in board_strategy(),
        pick_active in 0usize..12,
        pick_over in 0usize..12,
    ) {
        prop_assume!(!task_columns.is_empty());
        let (board, _, task_ids) = build(columns, &task_columns);
        let active = task_ids[pick_active % task_ids.len()];
        let over = task_ids[pick_over % task_ids.len()];
        let source = board.task(active).unwrap().column_id;
        let target = board.task(over).unwrap().column_id;
        prop_assume!(source != target);

        let next = hover_task(&board, DragItem::task(active), Some(DragItem::task(over)));

        prop_assert_eq!(next.task(active).unwrap().column_id, target);
        prop_assert!(next.tasks_for_column(source).iter().all(|t| t.id != active));
        prop_assert_eq!(next.tasks().len(), board.tasks().len());
    }

    #[test]
    fn prop_unknown_ids_leave_board_unchanged(
        (columns, task_columns) in board_strategy(),
        pick in 0usize..12,
    ) {
        let (mut board, column_ids, _) = build(columns, &task_columns);
        let known = column_ids[pick % columns];
        let before = board.clone();

        board.rename_column(unknown_id(), "x".to_string());
        board.rename_task(unknown_id(), "x".to_string());
        board.remove_column(unknown_id());
        board.remove_task(unknown_id());
        prop_assert_eq!(&board, &before);

        prop_assert_eq!(drop_column(&board, unknown_id(), Some(DragItem::column(known))), before.clone());
        prop_assert_eq!(drop_column(&board, known, Some(DragItem::column(unknown_id()))), before.clone());
        prop_assert_eq!(hover_task(&board, DragItem::task(unknown_id()), Some(DragItem::column(known))), before.clone());
    }
}
