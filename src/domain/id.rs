use serde::{Deserialize, Serialize};
use std::{collections::HashSet, fmt, str::FromStr};
use uuid::Uuid;

/// Identifier shared by columns and tasks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id(u64);

impl Id {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for Id {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl FromStr for Id {
    type Err = crate::error::KanbanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| crate::error::KanbanError::InvalidId(s.to_string()))
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hands out ids that stay unique for the lifetime of a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdAllocator {
    /// Monotonic counter
    Sequential { next: u64 },
    /// Random 64-bit values, checked against everything issued so far
    Random { issued: HashSet<Id> },
}

impl IdAllocator {
    pub fn sequential() -> Self {
        Self::Sequential { next: 1 }
    }

    pub fn random() -> Self {
        Self::Random {
            issued: HashSet::new(),
        }
    }

    /// Generates the next id
    pub fn next_id(&mut self) -> Id {
        match self {
            Self::Sequential { next } => {
                let id = Id(*next);
                *next += 1;
                id
            }
            Self::Random { issued } => loop {
                let (high, _) = Uuid::new_v4().as_u64_pair();
                let id = Id(high);
                if issued.insert(id) {
                    break id;
                }
            },
        }
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::sequential()
    }
}
