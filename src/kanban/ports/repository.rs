//! Repository ports for board, list and task documents.
//!
//! The operations mirror a document store: insert-one, find-by-id,
//! find-by-filter, partial update-by-id, delete-by-id, delete-many and
//! push/pull of a child identifier into a parent's backreference array.
//! None of them spans more than one document.

use crate::kanban::domain::{
    Board, BoardChanges, BoardId, List, ListChanges, ListId, Task, TaskChanges, TaskId,
};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

/// Result type for kanban repository operations.
pub type KanbanRepositoryResult<T> = Result<T, KanbanRepositoryError>;

/// Board persistence contract.
#[async_trait]
pub trait BoardRepository: Send + Sync {
    /// Stores a new board.
    ///
    /// # Errors
    ///
    /// Returns [`KanbanRepositoryError::DuplicateId`] when the identifier is
    /// already taken.
    async fn insert_board(&self, board: &Board) -> KanbanRepositoryResult<()>;

    /// Returns every board in insertion order.
    async fn find_boards(&self) -> KanbanRepositoryResult<Vec<Board>>;

    /// Finds a board by identifier.
    ///
    /// Returns `None` when the board does not exist.
    async fn find_board(&self, id: BoardId) -> KanbanRepositoryResult<Option<Board>>;

    /// Applies a partial update and returns the updated board.
    ///
    /// Returns `None` when the board does not exist.
    async fn update_board(
        &self,
        id: BoardId,
        changes: &BoardChanges,
    ) -> KanbanRepositoryResult<Option<Board>>;

    /// Deletes a board. Returns `false` when nothing was deleted.
    async fn delete_board(&self, id: BoardId) -> KanbanRepositoryResult<bool>;

    /// Appends a list identifier to the board's `lists` array.
    ///
    /// Returns `false` when the board does not exist.
    async fn push_list(&self, board: BoardId, list: ListId) -> KanbanRepositoryResult<bool>;

    /// Removes every occurrence of a list identifier from the board's
    /// `lists` array.
    ///
    /// Returns `false` when the board does not exist.
    async fn pull_list(&self, board: BoardId, list: ListId) -> KanbanRepositoryResult<bool>;
}

/// List persistence contract.
#[async_trait]
pub trait ListRepository: Send + Sync {
    /// Stores a new list.
    ///
    /// # Errors
    ///
    /// Returns [`KanbanRepositoryError::DuplicateId`] when the identifier is
    /// already taken.
    async fn insert_list(&self, list: &List) -> KanbanRepositoryResult<()>;

    /// Returns the lists of a board.
    ///
    /// Lists with an `order` come first in ascending order, followed by
    /// lists without one; ties keep insertion order.
    async fn find_lists_by_board(&self, board: BoardId) -> KanbanRepositoryResult<Vec<List>>;

    /// Finds a list by identifier.
    ///
    /// Returns `None` when the list does not exist.
    async fn find_list(&self, id: ListId) -> KanbanRepositoryResult<Option<List>>;

    /// Applies a partial update and returns the updated list.
    ///
    /// Returns `None` when the list does not exist.
    async fn update_list(
        &self,
        id: ListId,
        changes: &ListChanges,
    ) -> KanbanRepositoryResult<Option<List>>;

    /// Deletes a list. Returns `false` when nothing was deleted.
    async fn delete_list(&self, id: ListId) -> KanbanRepositoryResult<bool>;

    /// Deletes every list of a board and returns how many were removed.
    async fn delete_lists_by_board(&self, board: BoardId) -> KanbanRepositoryResult<usize>;

    /// Appends a task identifier to the list's `tasks` array.
    ///
    /// Returns `false` when the list does not exist.
    async fn push_task(&self, list: ListId, task: TaskId) -> KanbanRepositoryResult<bool>;

    /// Removes every occurrence of a task identifier from the list's `tasks`
    /// array.
    ///
    /// Returns `false` when the list does not exist.
    async fn pull_task(&self, list: ListId, task: TaskId) -> KanbanRepositoryResult<bool>;
}

/// Task persistence contract.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`KanbanRepositoryError::DuplicateId`] when the identifier is
    /// already taken.
    async fn insert_task(&self, task: &Task) -> KanbanRepositoryResult<()>;

    /// Returns the tasks of a list in insertion order.
    async fn find_tasks_by_list(&self, list: ListId) -> KanbanRepositoryResult<Vec<Task>>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_task(&self, id: TaskId) -> KanbanRepositoryResult<Option<Task>>;

    /// Overwrites the task's mutable fields and returns the updated task.
    ///
    /// Returns `None` when the task does not exist.
    async fn update_task(
        &self,
        id: TaskId,
        changes: &TaskChanges,
    ) -> KanbanRepositoryResult<Option<Task>>;

    /// Deletes a task. Returns `false` when nothing was deleted.
    async fn delete_task(&self, id: TaskId) -> KanbanRepositoryResult<bool>;
}

/// A store holding all three kanban collections.
pub trait KanbanStore: BoardRepository + ListRepository + TaskRepository + Clone + 'static {}

impl<T> KanbanStore for T where T: BoardRepository + ListRepository + TaskRepository + Clone + 'static
{}

/// Errors returned by kanban repository implementations.
#[derive(Debug, Clone, Error)]
pub enum KanbanRepositoryError {
    /// A document with the same identifier already exists.
    #[error("duplicate document identifier: {0}")]
    DuplicateId(Uuid),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl KanbanRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
