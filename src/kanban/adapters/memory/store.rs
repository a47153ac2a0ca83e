//! In-memory document store for boards, lists and tasks.

use async_trait::async_trait;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::kanban::{
    domain::{Board, BoardChanges, BoardId, List, ListChanges, ListId, Task, TaskChanges, TaskId},
    ports::{
        BoardRepository, KanbanRepositoryError, KanbanRepositoryResult, ListRepository,
        TaskRepository,
    },
};

/// Thread-safe in-memory store holding all three kanban collections.
///
/// Collections are kept in insertion order, like a document store's natural
/// order. Clones share the same underlying state.
#[derive(Debug, Clone, Default)]
pub struct InMemoryKanbanStore {
    state: Arc<RwLock<InMemoryKanbanState>>,
}

#[derive(Debug, Default)]
struct InMemoryKanbanState {
    boards: Vec<Board>,
    lists: Vec<List>,
    tasks: Vec<Task>,
}

impl InMemoryKanbanStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> KanbanRepositoryResult<RwLockReadGuard<'_, InMemoryKanbanState>> {
        self.state.read().map_err(|err| {
            KanbanRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> KanbanRepositoryResult<RwLockWriteGuard<'_, InMemoryKanbanState>> {
        self.state.write().map_err(|err| {
            KanbanRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

/// Removes the first document matching `predicate`, reporting whether one was found.
fn remove_where<T>(documents: &mut Vec<T>, predicate: impl Fn(&T) -> bool) -> bool {
    documents
        .iter()
        .position(predicate)
        .map(|index| documents.remove(index))
        .is_some()
}

#[async_trait]
impl BoardRepository for InMemoryKanbanStore {
    async fn insert_board(&self, board: &Board) -> KanbanRepositoryResult<()> {
        let mut state = self.write()?;
        if state.boards.iter().any(|stored| stored.id() == board.id()) {
            return Err(KanbanRepositoryError::DuplicateId(board.id().into_inner()));
        }
        state.boards.push(board.clone());
        Ok(())
    }

    async fn find_boards(&self) -> KanbanRepositoryResult<Vec<Board>> {
        Ok(self.read()?.boards.clone())
    }

    async fn find_board(&self, id: BoardId) -> KanbanRepositoryResult<Option<Board>> {
        let state = self.read()?;
        Ok(state.boards.iter().find(|board| board.id() == id).cloned())
    }

    async fn update_board(
        &self,
        id: BoardId,
        changes: &BoardChanges,
    ) -> KanbanRepositoryResult<Option<Board>> {
        let mut state = self.write()?;
        let updated = state
            .boards
            .iter_mut()
            .find(|board| board.id() == id)
            .map(|board| {
                board.apply(changes);
                board.clone()
            });
        Ok(updated)
    }

    async fn delete_board(&self, id: BoardId) -> KanbanRepositoryResult<bool> {
        let mut state = self.write()?;
        Ok(remove_where(&mut state.boards, |board| board.id() == id))
    }

    async fn push_list(&self, board: BoardId, list: ListId) -> KanbanRepositoryResult<bool> {
        let mut state = self.write()?;
        let Some(stored) = state.boards.iter_mut().find(|stored| stored.id() == board) else {
            return Ok(false);
        };
        stored.link_list(list);
        Ok(true)
    }

    async fn pull_list(&self, board: BoardId, list: ListId) -> KanbanRepositoryResult<bool> {
        let mut state = self.write()?;
        let Some(stored) = state.boards.iter_mut().find(|stored| stored.id() == board) else {
            return Ok(false);
        };
        stored.unlink_list(list);
        Ok(true)
    }
}

#[async_trait]
impl ListRepository for InMemoryKanbanStore {
    async fn insert_list(&self, list: &List) -> KanbanRepositoryResult<()> {
        let mut state = self.write()?;
        if state.lists.iter().any(|stored| stored.id() == list.id()) {
            return Err(KanbanRepositoryError::DuplicateId(list.id().into_inner()));
        }
        state.lists.push(list.clone());
        Ok(())
    }

    async fn find_lists_by_board(&self, board: BoardId) -> KanbanRepositoryResult<Vec<List>> {
        let state = self.read()?;
        let mut lists: Vec<List> = state
            .lists
            .iter()
            .filter(|list| list.board() == board)
            .cloned()
            .collect();
        // Stable sort: unordered lists trail, ties keep insertion order.
        lists.sort_by_key(|list| (list.order().is_none(), list.order()));
        Ok(lists)
    }

    async fn find_list(&self, id: ListId) -> KanbanRepositoryResult<Option<List>> {
        let state = self.read()?;
        Ok(state.lists.iter().find(|list| list.id() == id).cloned())
    }

    async fn update_list(
        &self,
        id: ListId,
        changes: &ListChanges,
    ) -> KanbanRepositoryResult<Option<List>> {
        let mut state = self.write()?;
        let updated = state
            .lists
            .iter_mut()
            .find(|list| list.id() == id)
            .map(|list| {
                list.apply(changes);
                list.clone()
            });
        Ok(updated)
    }

    async fn delete_list(&self, id: ListId) -> KanbanRepositoryResult<bool> {
        let mut state = self.write()?;
        Ok(remove_where(&mut state.lists, |list| list.id() == id))
    }

    async fn delete_lists_by_board(&self, board: BoardId) -> KanbanRepositoryResult<usize> {
        let mut state = self.write()?;
        let before = state.lists.len();
        state.lists.retain(|list| list.board() != board);
        Ok(before.saturating_sub(state.lists.len()))
    }

    async fn push_task(&self, list: ListId, task: TaskId) -> KanbanRepositoryResult<bool> {
        let mut state = self.write()?;
        let Some(stored) = state.lists.iter_mut().find(|stored| stored.id() == list) else {
            return Ok(false);
        };
        stored.link_task(task);
        Ok(true)
    }

    async fn pull_task(&self, list: ListId, task: TaskId) -> KanbanRepositoryResult<bool> {
        let mut state = self.write()?;
        let Some(stored) = state.lists.iter_mut().find(|stored| stored.id() == list) else {
            return Ok(false);
        };
        stored.unlink_task(task);
        Ok(true)
    }
}

#[async_trait]
impl TaskRepository for InMemoryKanbanStore {
    async fn insert_task(&self, task: &Task) -> KanbanRepositoryResult<()> {
        let mut state = self.write()?;
        if state.tasks.iter().any(|stored| stored.id() == task.id()) {
            return Err(KanbanRepositoryError::DuplicateId(task.id().into_inner()));
        }
        state.tasks.push(task.clone());
        Ok(())
    }

    async fn find_tasks_by_list(&self, list: ListId) -> KanbanRepositoryResult<Vec<Task>> {
        let state = self.read()?;
        Ok(state
            .tasks
            .iter()
            .filter(|task| task.list() == list)
            .cloned()
            .collect())
    }

    async fn find_task(&self, id: TaskId) -> KanbanRepositoryResult<Option<Task>> {
        let state = self.read()?;
        Ok(state.tasks.iter().find(|task| task.id() == id).cloned())
    }

    async fn update_task(
        &self,
        id: TaskId,
        changes: &TaskChanges,
    ) -> KanbanRepositoryResult<Option<Task>> {
        let mut state = self.write()?;
        let updated = state
            .tasks
            .iter_mut()
            .find(|task| task.id() == id)
            .map(|task| {
                task.apply(changes);
                task.clone()
            });
        Ok(updated)
    }

    async fn delete_task(&self, id: TaskId) -> KanbanRepositoryResult<bool> {
        let mut state = self.write()?;
        Ok(remove_where(&mut state.tasks, |task| task.id() == id))
    }
}
