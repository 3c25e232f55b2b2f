use crate::{
    config::BoardConfig,
    domain::{Board, Column, Id, Task},
    drag::{ActiveItem, DragEvent, DragItem, DragSession},
    error::Result,
};

/// A board together with its drag session
///
/// This is what a rendering surface talks to: it forwards user intents and
/// drag events here, then reads columns, per-column tasks and the overlay
/// item back out to redraw.
#[derive(Debug, Clone, Default)]
pub struct Kanban {
    board: Board,
    session: DragSession,
}

impl Kanban {
    pub fn new(config: BoardConfig) -> Self {
        Self::from_board(Board::new(config))
    }

    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            session: DragSession::Idle,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn session(&self) -> &DragSession {
        &self.session
    }

    pub fn create_column(&mut self) -> Id {
        self.board.add_column()
    }

    pub fn delete_column(&mut self, id: Id) {
        self.board.remove_column(id);
    }

    pub fn rename_column(&mut self, id: Id, title: impl Into<String>) {
        self.board.rename_column(id, title.into());
    }

    pub fn create_task(&mut self, column_id: Id) -> Result<Id> {
        self.board.add_task(column_id)
    }

    pub fn delete_task(&mut self, id: Id) {
        self.board.remove_task(id);
    }

    pub fn rename_task(&mut self, id: Id, content: impl Into<String>) {
        self.board.rename_task(id, content.into());
    }

    /// Feeds one drag event through the session and the reorder engine
    pub fn handle(&mut self, event: DragEvent) {
        let (session, board) = self.session.handle(&self.board, &event);
        self.session = session;
        self.board = board;
    }

    pub fn on_drag_start(&mut self, active: DragItem) {
        self.handle(DragEvent::Start { active });
    }

    pub fn on_drag_over(&mut self, active: Id, over: Option<DragItem>) {
        self.handle(DragEvent::Over { active, over });
    }

    pub fn on_drag_end(&mut self, active: Id, over: Option<DragItem>) {
        self.handle(DragEvent::End { active, over });
    }

    pub fn current_columns(&self) -> &[Column] {
        self.board.columns()
    }

    pub fn tasks_for_column(&self, column_id: Id) -> Vec<&Task> {
        self.board.tasks_for_column(column_id)
    }

    pub fn active_overlay_item(&self) -> Option<ActiveItem<'_>> {
        self.session.active_item()
    }
}
