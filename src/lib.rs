//! # Kanban Core
//!
//! Board state and drag-and-drop reordering for kanban boards.
//!
//! The crate owns the ordered columns and the flat task sequence of a board,
//! and turns a stream of drag events (start, over, end) into new column
//! orders and task placements. Rendering and pointer handling live outside:
//! a UI forwards intents and drag events to [`Kanban`] and re-reads the
//! board after every call.

pub mod config;
pub mod domain;
pub mod drag;
pub mod error;
pub mod kanban;
pub mod reorder;

// Re-export commonly used types
pub use config::{BoardConfig, IdStrategy};
pub use domain::{
    board::{Board, BoardView, ColumnView},
    column::Column,
    id::{Id, IdAllocator},
    task::Task,
};
pub use drag::{ActiveItem, DragEvent, DragItem, DragSession, ItemKind};
pub use error::{KanbanError, Result};
pub use kanban::Kanban;
