//! Reorder engine
//!
//! Pure functions from the current [`Board`] and a drag event's payload to the
//! next [`Board`]. Nothing here reads the clock or mutates its input: every
//! move builds a fresh sequence from the old one. Ids that are not on the
//! board turn the whole step into a no-op.

use crate::{
    domain::{Board, Id, Task},
    drag::{DragItem, ItemKind},
};
use tracing::trace;

/// Moves the element at `from` to `to`, shifting everything in between by one.
///
/// Out-of-range `from` returns an unchanged copy; `to` past the end lands on
/// the last position.
pub fn move_item<T: Clone>(items: &[T], from: usize, to: usize) -> Vec<T> {
    let Some(moving) = items.get(from) else {
        return items.to_vec();
    };
    let to = to.min(items.len() - 1);

    let mut moved = Vec::with_capacity(items.len());
    let rest = items
        .iter()
        .enumerate()
        .filter(|(index, _)| *index != from)
        .map(|(_, item)| item);
    for (index, item) in rest.enumerate() {
        if index == to {
            moved.push(moving.clone());
        }
        moved.push(item.clone());
    }
    if moved.len() < items.len() {
        moved.push(moving.clone());
    }
    moved
}

/// Column drop at the end of a column drag
///
/// Moves the active column to the index of the column it was dropped on.
/// Dropping on itself, on nothing, or on something that is not a column on
/// this board leaves the order alone.
pub fn drop_column(board: &Board, active: Id, over: Option<DragItem>) -> Board {
    let Some(over) = over else {
        return board.clone();
    };
    if over.kind != ItemKind::Column || over.id == active {
        return board.clone();
    }

    match (board.column_index(active), board.column_index(over.id)) {
        (Some(from), Some(to)) => {
            trace!(column_id = %active, from, to, "moving column");
            board.with_columns(move_item(board.columns(), from, to))
        }
        _ => board.clone(),
    }
}

/// One hover tick while a task is being dragged
///
/// Over another task in the same column the active task takes that task's
/// index. Over a task in a different column it joins that column and is
/// placed at `hover index - 1` in the flat sequence (wrapping to the end when
/// the hovered task is first). Over a column body it joins that column
/// without moving.
pub fn hover_task(board: &Board, active: DragItem, over: Option<DragItem>) -> Board {
    let Some(over) = over else {
        return board.clone();
    };
    if active.kind != ItemKind::Task || active.id == over.id {
        return board.clone();
    }
    let Some(active_index) = board.task_index(active.id) else {
        return board.clone();
    };

    match over.kind {
        ItemKind::Task => {
            let Some(over_index) = board.task_index(over.id) else {
                return board.clone();
            };
            let tasks = board.tasks();
            let target_column = tasks[over_index].column_id;

            if tasks[active_index].column_id == target_column {
                trace!(task_id = %active.id, from = active_index, to = over_index, "reordering task");
                return board.with_tasks(move_item(tasks, active_index, over_index));
            }

            let reassigned = reassign(tasks, active.id, target_column);
            let to = over_index
                .checked_sub(1)
                .unwrap_or(reassigned.len() - 1);
            trace!(
                task_id = %active.id,
                column_id = %target_column,
                from = active_index,
                to,
                "moving task across columns"
            );
            board.with_tasks(move_item(&reassigned, active_index, to))
        }
        ItemKind::Column => {
            if !board.has_column(over.id) {
                return board.clone();
            }
            if board.tasks()[active_index].belongs_to(over.id) {
                return board.clone();
            }
            trace!(task_id = %active.id, column_id = %over.id, "moving task into column");
            board.with_tasks(reassign(board.tasks(), active.id, over.id))
        }
    }
}

fn reassign(tasks: &[Task], task_id: Id, column_id: Id) -> Vec<Task> {
    tasks
        .iter()
        .map(|task| {
            if task.id == task_id {
                Task {
                    column_id,
                    ..task.clone()
                }
            } else {
                task.clone()
            }
        })
        .collect()
}
