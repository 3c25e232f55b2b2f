//! Drag session state machine
//!
//! A drag is a `Start`, any number of `Over` ticks, then an `End`. Task drags
//! reshuffle the board on every `Over`; column drags only reorder on `End`.

use crate::{
    domain::{Board, Column, Id, Task},
    reorder,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

/// What kind of board item a drag refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Column,
    Task,
}

/// An item taking part in a drag: the one being dragged or the hover target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DragItem {
    pub id: Id,
    pub kind: ItemKind,
}

impl DragItem {
    pub fn column(id: Id) -> Self {
        Self {
            id,
            kind: ItemKind::Column,
        }
    }

    pub fn task(id: Id) -> Self {
        Self {
            id,
            kind: ItemKind::Task,
        }
    }
}

/// Events from the pointer/drag source. `over` is `None` when nothing
/// droppable is under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DragEvent {
    Start { active: DragItem },
    Over { active: Id, over: Option<DragItem> },
    End { active: Id, over: Option<DragItem> },
}

/// The item currently being dragged, as captured when the drag started
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveItem<'a> {
    Column(&'a Column),
    Task(&'a Task),
}

impl ActiveItem<'_> {
    pub fn id(&self) -> Id {
        match self {
            Self::Column(column) => column.id,
            Self::Task(task) => task.id,
        }
    }

    pub fn kind(&self) -> ItemKind {
        match self {
            Self::Column(_) => ItemKind::Column,
            Self::Task(_) => ItemKind::Task,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum DragSession {
    #[default]
    Idle,
    DraggingColumn(Column),
    DraggingTask(Task),
}

impl DragSession {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn active_id(&self) -> Option<Id> {
        self.active_item().map(|item| item.id())
    }

    /// Snapshot for the drag overlay
    pub fn active_item(&self) -> Option<ActiveItem<'_>> {
        match self {
            Self::Idle => None,
            Self::DraggingColumn(column) => Some(ActiveItem::Column(column)),
            Self::DraggingTask(task) => Some(ActiveItem::Task(task)),
        }
    }

    /// Applies one drag event, returning the next session and the next board
    pub fn handle(&self, board: &Board, event: &DragEvent) -> (Self, Board) {
        match *event {
            DragEvent::Start { active } => (self.start(board, active), board.clone()),
            DragEvent::Over { active, over } => (self.clone(), self.over(board, active, over)),
            DragEvent::End { active, over } => self.end(board, active, over),
        }
    }

    fn start(&self, board: &Board, active: DragItem) -> Self {
        if let Some(current) = self.active_id() {
            warn!(current = %current, next = %active.id, "drag started while another drag is active");
        }

        let next = match active.kind {
            ItemKind::Column => board.column(active.id).cloned().map(Self::DraggingColumn),
            ItemKind::Task => board.task(active.id).cloned().map(Self::DraggingTask),
        };
        match next {
            Some(session) => {
                debug!(id = %active.id, kind = ?active.kind, "drag started");
                session
            }
            None => {
                debug!(id = %active.id, kind = ?active.kind, "drag start for unknown item ignored");
                Self::Idle
            }
        }
    }

    fn over(&self, board: &Board, active: Id, over: Option<DragItem>) -> Board {
        match self {
            Self::DraggingTask(task) if task.id == active => {
                trace!(task_id = %active, over = ?over, "task drag over");
                reorder::hover_task(board, DragItem::task(active), over)
            }
            Self::DraggingColumn(column) if column.id == active => board.clone(),
            Self::Idle => {
                warn!(id = %active, "drag over without an active drag");
                board.clone()
            }
            _ => {
                warn!(id = %active, session = ?self.active_id(), "drag over for a different item");
                board.clone()
            }
        }
    }

    fn end(&self, board: &Board, active: Id, over: Option<DragItem>) -> (Self, Board) {
        // The session is cleared whatever the drop target was.
        let next = Self::Idle;

        let board = match self {
            Self::DraggingColumn(column) if column.id == active => {
                debug!(column_id = %active, over = ?over, "column drag ended");
                reorder::drop_column(board, active, over)
            }
            Self::DraggingTask(task) if task.id == active => {
                debug!(task_id = %active, "task drag ended");
                board.clone()
            }
            Self::Idle => {
                warn!(id = %active, "drag end without an active drag");
                board.clone()
            }
            _ => {
                warn!(id = %active, session = ?self.active_id(), "drag end for a different item");
                board.clone()
            }
        };
        (next, board)
    }
}
