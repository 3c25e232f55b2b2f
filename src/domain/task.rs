use crate::domain::Id;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A card on the board, owned by exactly one column at a time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: Id,
    pub content: String,
    pub column_id: Id,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task in the given column
    pub fn new(id: Id, column_id: Id, content: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            content,
            column_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets the content
    pub fn set_content(&mut self, content: String) {
        self.content = content;
        self.updated_at = Utc::now();
    }

    pub fn belongs_to(&self, column_id: Id) -> bool {
        self.column_id == column_id
    }
}
