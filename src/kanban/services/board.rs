//! Service layer for board CRUD and list cascades.

use super::{KanbanServiceError, KanbanServiceResult, MissingEntity};
use crate::kanban::{
    domain::{Board, BoardChanges, BoardId, NewBoard, Owner, Title},
    ports::{BoardRepository, ListRepository},
};
use std::sync::Arc;
use tracing::{debug, info};

/// Request payload for creating a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateBoardRequest {
    title: String,
    description: Option<String>,
    owner: String,
}

impl CreateBoardRequest {
    /// Creates a request with the required board fields.
    #[must_use]
    pub fn new(title: impl Into<String>, owner: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            owner: owner.into(),
        }
    }

    /// Sets the board description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Request payload for updating a board.
///
/// An absent description leaves the stored one unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateBoardRequest {
    title: String,
    description: Option<String>,
}

impl UpdateBoardRequest {
    /// Creates a request replacing the title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
        }
    }

    /// Also replaces the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Board orchestration service.
pub struct BoardService<B, L>
where
    B: BoardRepository,
    L: ListRepository,
{
    boards: Arc<B>,
    lists: Arc<L>,
}

impl<B, L> Clone for BoardService<B, L>
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

impl<B, L> BoardService<B, L>
where
    B: BoardRepository,
    L: ListRepository,
{
    /// Creates a new board service.
    #[must_use]
    pub const fn new(boards: Arc<B>, lists: Arc<L>) -> Self {
        Self { boards, lists }
    }

    /// Returns every board.
    ///
    /// # Errors
    ///
    /// Returns [`KanbanServiceError::NotFound`] when no board exists, or
    /// [`KanbanServiceError::Repository`] when the lookup fails.
    pub async fn list_all(&self) -> KanbanServiceResult<Vec<Board>> {
        let boards = self.boards.find_boards().await?;
        debug!(count = boards.len(), "boards found");
        if boards.is_empty() {
            return Err(KanbanServiceError::NotFound(MissingEntity::Boards));
        }
        Ok(boards)
    }

    /// Creates a board with an empty list sequence.
    ///
    /// # Errors
    ///
    /// Returns [`KanbanServiceError::Domain`] when the title or owner is
    /// invalid, or [`KanbanServiceError::Repository`] when persistence fails.
    pub async fn create(&self, request: CreateBoardRequest) -> KanbanServiceResult<Board> {
        let board = Board::new(NewBoard {
            title: Title::new(request.title)?,
            description: request.description,
            owner: Owner::new(request.owner)?,
        });
        self.boards.insert_board(&board).await?;
        info!(board = %board.id(), owner = %board.owner(), "board created");
        Ok(board)
    }

    /// Retrieves a board.
    ///
    /// # Errors
    ///
    /// Returns [`KanbanServiceError::NotFound`] when the board does not exist.
    pub async fn get(&self, board_id: BoardId) -> KanbanServiceResult<Board> {
        self.boards
            .find_board(board_id)
            .await?
            .ok_or(KanbanServiceError::NotFound(MissingEntity::Board(board_id)))
    }

    /// Replaces the title and, when supplied, the description.
    ///
    /// Returns the board as stored after the update.
    ///
    /// # Errors
    ///
    /// Returns [`KanbanServiceError::Domain`] when the title is invalid or
    /// [`KanbanServiceError::NotFound`] when the board does not exist.
    pub async fn update(
        &self,
        board_id: BoardId,
        request: UpdateBoardRequest,
    ) -> KanbanServiceResult<Board> {
        let changes = BoardChanges {
            title: Some(Title::new(request.title)?),
            description: request.description,
        };
        let board = self
            .boards
            .update_board(board_id, &changes)
            .await?
            .ok_or(KanbanServiceError::NotFound(MissingEntity::Board(board_id)))?;
        info!(board = %board_id, "board updated");
        Ok(board)
    }

    /// Deletes a board and every list that belongs to it.
    ///
    /// Tasks of the removed lists are left in place. Deleting an absent
    /// board still removes any lists pointing at it and succeeds. Returns
    /// the number of lists removed.
    ///
    /// # Errors
    ///
    /// Returns [`KanbanServiceError::Repository`] when either deletion fails.
    pub async fn delete(&self, board_id: BoardId) -> KanbanServiceResult<usize> {
        let existed = self.boards.delete_board(board_id).await?;
        let removed_lists = self.lists.delete_lists_by_board(board_id).await?;
        info!(board = %board_id, existed, removed_lists, "board deleted");
        Ok(removed_lists)
    }
}
