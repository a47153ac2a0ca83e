//! Service-level errors shared by the kanban services.

use crate::kanban::{
    domain::{BoardId, KanbanDomainError, ListId, TaskId},
    ports::KanbanRepositoryError,
};
use std::fmt;
use thiserror::Error;

/// Entity or collection that a lookup failed to find.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingEntity {
    /// No boards exist at all.
    Boards,
    /// The board does not exist.
    Board(BoardId),
    /// The board has no lists.
    Lists(BoardId),
    /// The list does not exist.
    List(ListId),
    /// The list has no tasks.
    Tasks(ListId),
    /// The task does not exist.
    Task(TaskId),
}

impl fmt::Display for MissingEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Boards => "Boards",
            Self::Board(_) => "Board",
            Self::Lists(_) => "Lists",
            Self::List(_) => "List",
            Self::Tasks(_) => "Tasks",
            Self::Task(_) => "Task",
        };
        f.write_str(label)
    }
}

/// Service-level errors for kanban operations.
#[derive(Debug, Error)]
pub enum KanbanServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] KanbanDomainError),
    /// The requested entity or collection is absent.
    #[error("{0} not found")]
    NotFound(MissingEntity),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] KanbanRepositoryError),
    /// A reorder left a position with no list to place there.
    #[error("no list to place at reorder position {position}")]
    ReorderGap {
        /// Zero-based position of the empty slot.
        position: usize,
    },
}

/// Result type for kanban service operations.
pub type KanbanServiceResult<T> = Result<T, KanbanServiceError>;
