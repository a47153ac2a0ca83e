//! Service layer for lists scoped to a board, including reordering.

use super::{KanbanServiceError, KanbanServiceResult, MissingEntity};
use crate::kanban::{
    domain::{BoardId, List, ListChanges, ListId, Title, move_item},
    ports::{BoardRepository, KanbanRepositoryError, ListRepository},
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// List orchestration service.
///
/// Keeps `Board.lists` in step with list creation and deletion.
pub struct ListService<B, L>
where
    B: BoardRepository,
    L: ListRepository,
{
    boards: Arc<B>,
    lists: Arc<L>,
}

impl<B, L> Clone for ListService<B, L>
where
    B: BoardRepository,
    L: ListRepository,
{
    fn clone(&self) -> Self {
        Self {
            boards: Arc::clone(&self.boards),
            lists: Arc::clone(&self.lists),
        }
    }
}

impl<B, L> ListService<B, L>
where
    B: BoardRepository,
    L: ListRepository,
{
    /// Creates a new list service.
    #[must_use]
    pub const fn new(boards: Arc<B>, lists: Arc<L>) -> Self {
        Self { boards, lists }
    }

    /// Returns the lists of a board in board order.
    ///
    /// # Errors
    ///
    /// Returns [`KanbanServiceError::NotFound`] when the board has no lists.
    pub async fn list_by_board(&self, board_id: BoardId) -> KanbanServiceResult<Vec<List>> {
        let lists = self.lists.find_lists_by_board(board_id).await?;
        debug!(board = %board_id, count = lists.len(), "lists found");
        if lists.is_empty() {
            return Err(KanbanServiceError::NotFound(MissingEntity::Lists(board_id)));
        }
        Ok(lists)
    }

    /// Creates a list on an existing board and appends it to `Board.lists`.
    ///
    /// # Errors
    ///
    /// Returns [`KanbanServiceError::Domain`] when the title is invalid,
    /// [`KanbanServiceError::NotFound`] when the board does not exist, or
    /// [`KanbanServiceError::Repository`] when either write fails.
    pub async fn create(
        &self,
        board_id: BoardId,
        title: impl Into<String> + Send,
    ) -> KanbanServiceResult<List> {
        let list = List::new(board_id, Title::new(title)?);
        if self.boards.find_board(board_id).await?.is_none() {
            return Err(KanbanServiceError::NotFound(MissingEntity::Board(board_id)));
        }

        self.lists.insert_list(&list).await?;
        if !self.boards.push_list(board_id, list.id()).await? {
            warn!(board = %board_id, list = %list.id(), "board vanished before list was linked");
        }
        info!(board = %board_id, list = %list.id(), "list created");
        Ok(list)
    }

    /// Retrieves a list.
    ///
    /// # Errors
    ///
    /// Returns [`KanbanServiceError::NotFound`] when the list does not exist.
    pub async fn get(&self, list_id: ListId) -> KanbanServiceResult<List> {
        self.lists
            .find_list(list_id)
            .await?
            .ok_or(KanbanServiceError::NotFound(MissingEntity::List(list_id)))
    }

    /// Replaces the list title, leaving every other field unchanged.
    ///
    /// Without a title nothing is written and the stored list is returned.
    ///
    /// # Errors
    ///
    /// Returns [`KanbanServiceError::Domain`] when the title is empty or
    /// [`KanbanServiceError::NotFound`] when the list does not exist.
    pub async fn update(
        &self,
        list_id: ListId,
        title: Option<String>,
    ) -> KanbanServiceResult<List> {
        let changes = match title {
            Some(text) => ListChanges::title(Title::new(text)?),
            None => ListChanges::default(),
        };
        let list = self
            .lists
            .update_list(list_id, &changes)
            .await?
            .ok_or(KanbanServiceError::NotFound(MissingEntity::List(list_id)))?;
        info!(list = %list_id, "list updated");
        Ok(list)
    }

    /// Moves the list at `source_index` to `destination_index` and persists
    /// `order = position` for every list of the board.
    ///
    /// `list_id` identifies the dragged list for logging only; the move is
    /// driven by the indices, which are never bounds-checked. Writes are
    /// sequential and not atomic. Returns the lists as stored after the
    /// reorder.
    ///
    /// # Errors
    ///
    /// Returns [`KanbanServiceError::ReorderGap`] when `source_index`
    /// addresses no list, leaving the writes for earlier positions in place,
    /// or [`KanbanServiceError::Repository`] when a lookup or write fails.
    pub async fn reorder(
        &self,
        board_id: BoardId,
        list_id: ListId,
        source_index: i64,
        destination_index: i64,
    ) -> KanbanServiceResult<Vec<List>> {
        debug!(
            board = %board_id,
            list = %list_id,
            source_index,
            destination_index,
            "reordering lists"
        );
        let current = self.lists.find_lists_by_board(board_id).await?;
        let reordered = move_item(current, source_index, destination_index);

        let mut persisted = Vec::with_capacity(reordered.len());
        for (position, slot) in reordered.iter().enumerate() {
            let Some(list) = slot else {
                warn!(board = %board_id, position, "reorder left an empty position");
                return Err(KanbanServiceError::ReorderGap { position });
            };
            let order = u32::try_from(position).map_err(KanbanRepositoryError::persistence)?;
            match self
                .lists
                .update_list(list.id(), &ListChanges::order(order))
                .await?
            {
                Some(updated) => persisted.push(updated),
                None => warn!(list = %list.id(), "list vanished during reorder"),
            }
        }
        info!(board = %board_id, count = persisted.len(), "lists reordered");
        Ok(persisted)
    }

    /// Deletes a list and removes it from `Board.lists`.
    ///
    /// Tasks of the list are left in place. Succeeds even when the list or
    /// the board does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`KanbanServiceError::Repository`] when either write fails.
    pub async fn delete(&self, board_id: BoardId, list_id: ListId) -> KanbanServiceResult<()> {
        let existed = self.lists.delete_list(list_id).await?;
        let unlinked = self.boards.pull_list(board_id, list_id).await?;
        info!(board = %board_id, list = %list_id, existed, unlinked, "list deleted");
        Ok(())
    }
}
