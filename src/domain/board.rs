use crate::{
    config::BoardConfig,
    domain::{Column, Id, IdAllocator, Task},
    error::{KanbanError, Result},
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Kanban board state
///
/// Columns are kept in display order. Tasks live in a single flat sequence;
/// a column's visible list is the stable subsequence of tasks whose
/// `column_id` matches it.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    config: BoardConfig,
    columns: Vec<Column>,
    tasks: Vec<Task>,
    ids: IdAllocator,
}

impl Board {
    pub fn new(config: BoardConfig) -> Self {
        let ids = config.id_strategy.allocator();
        Self::with_allocator(config, ids)
    }

    /// Creates an empty board drawing ids from `ids`
    pub fn with_allocator(config: BoardConfig, ids: IdAllocator) -> Self {
        Self {
            config,
            columns: Vec::new(),
            tasks: Vec::new(),
            ids,
        }
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// The flat task sequence, across all columns
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn column(&self, id: Id) -> Option<&Column> {
        self.columns.iter().find(|column| column.id == id)
    }

    pub fn task(&self, id: Id) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn column_index(&self, id: Id) -> Option<usize> {
        self.columns.iter().position(|column| column.id == id)
    }

    pub fn task_index(&self, id: Id) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }

    pub fn has_column(&self, id: Id) -> bool {
        self.column_index(id).is_some()
    }

    /// Tasks shown in a column, in display order
    pub fn tasks_for_column(&self, column_id: Id) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| task.belongs_to(column_id))
            .collect()
    }

    /// Appends a column with a placeholder title and returns its id
    pub fn add_column(&mut self) -> Id {
        let id = self.ids.next_id();
        let title = format!(
            "{} {}",
            self.config.column_title_prefix,
            self.columns.len() + 1
        );
        debug!(column_id = %id, title = %title, "column added");
        self.columns.push(Column::new(id, title));
        id
    }

    /// Removes a column and every task it owns. Unknown ids are ignored.
    pub fn remove_column(&mut self, id: Id) {
        let Some(index) = self.column_index(id) else {
            debug!(column_id = %id, "remove_column: column not found");
            return;
        };
        self.columns.remove(index);

        let before = self.tasks.len();
        self.tasks.retain(|task| !task.belongs_to(id));
        debug!(
            column_id = %id,
            tasks_removed = before - self.tasks.len(),
            "column removed"
        );
    }

    pub fn rename_column(&mut self, id: Id, title: String) {
        match self.columns.iter_mut().find(|column| column.id == id) {
            Some(column) => column.set_title(title),
            None => debug!(column_id = %id, "rename_column: column not found"),
        }
    }

    /// Appends a task to the given column and returns its id
    ///
    /// The column is not required to exist unless the board is configured
    /// with `reject_orphan_tasks`.
    pub fn add_task(&mut self, column_id: Id) -> Result<Id> {
        if !self.has_column(column_id) {
            if self.config.reject_orphan_tasks {
                return Err(KanbanError::ColumnNotFound(column_id));
            }
            debug!(column_id = %column_id, "add_task: column not on board, creating anyway");
        }

        let id = self.ids.next_id();
        let content = format!(
            "{} {}",
            self.config.task_content_prefix,
            self.tasks.len() + 1
        );
        debug!(task_id = %id, column_id = %column_id, "task added");
        self.tasks.push(Task::new(id, column_id, content));
        Ok(id)
    }

    pub fn remove_task(&mut self, id: Id) {
        match self.task_index(id) {
            Some(index) => {
                self.tasks.remove(index);
                debug!(task_id = %id, "task removed");
            }
            None => debug!(task_id = %id, "remove_task: task not found"),
        }
    }

    pub fn rename_task(&mut self, id: Id, content: String) {
        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => task.set_content(content),
            None => debug!(task_id = %id, "rename_task: task not found"),
        }
    }

    /// Returns a copy of this board with its columns replaced
    pub(crate) fn with_columns(&self, columns: Vec<Column>) -> Self {
        Self {
            config: self.config.clone(),
            columns,
            tasks: self.tasks.clone(),
            ids: self.ids.clone(),
        }
    }

    /// Returns a copy of this board with its task sequence replaced
    pub(crate) fn with_tasks(&self, tasks: Vec<Task>) -> Self {
        Self {
            config: self.config.clone(),
            columns: self.columns.clone(),
            tasks,
            ids: self.ids.clone(),
        }
    }

    /// Snapshot of what a renderer draws: every column with its visible tasks
    pub fn view(&self) -> BoardView {
        BoardView {
            name: self.config.name.clone(),
            columns: self
                .columns
                .iter()
                .map(|column| ColumnView {
                    column: column.clone(),
                    tasks: self
                        .tasks_for_column(column.id)
                        .into_iter()
                        .cloned()
                        .collect(),
                })
                .collect(),
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}

/// Render-ready board snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    pub name: String,
    pub columns: Vec<ColumnView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnView {
    #[serde(flatten)]
    pub column: Column,
    pub tasks: Vec<Task>,
}

impl BoardView {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
