use crate::{
    domain::IdAllocator,
    error::{KanbanError, Result},
};
use serde::{Deserialize, Serialize};

/// How new column and task ids are produced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    #[default]
    Sequential,
    Random,
}

impl IdStrategy {
    pub fn allocator(self) -> IdAllocator {
        match self {
            Self::Sequential => IdAllocator::sequential(),
            Self::Random => IdAllocator::random(),
        }
    }
}

/// Board configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub name: String,
    /// Placeholder titles read "<prefix> <n>"
    pub column_title_prefix: String,
    pub task_content_prefix: String,
    pub id_strategy: IdStrategy,
    /// Refuse to create tasks against a column id that is not on the board
    pub reject_orphan_tasks: bool,
}

impl BoardConfig {
    /// Parses a JSON config, filling in defaults for missing fields
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.column_title_prefix.trim().is_empty() {
            return Err(KanbanError::ConfigError(
                "column_title_prefix must not be blank".to_string(),
            ));
        }
        if self.task_content_prefix.trim().is_empty() {
            return Err(KanbanError::ConfigError(
                "task_content_prefix must not be blank".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            name: "Default Board".to_string(),
            column_title_prefix: "Column".to_string(),
            task_content_prefix: "Task".to_string(),
            id_strategy: IdStrategy::Sequential,
            reject_orphan_tasks: false,
        }
    }
}
