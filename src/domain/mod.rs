pub mod board;
pub mod column;
pub mod id;
pub mod task;

pub use board::{Board, BoardView, ColumnView};
pub use column::Column;
pub use id::{Id, IdAllocator};
pub use task::Task;
