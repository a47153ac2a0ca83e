//! Board route handlers.

use super::{
    AppState,
    error::ApiError,
    payload::{BoardPayload, optional_text, parse_id, required_text},
};
use crate::kanban::{
    domain::{Board, BoardId, KanbanDomainError},
    ports::KanbanStore,
    services::{CreateBoardRequest, UpdateBoardRequest},
};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};

/// `GET /boards`
pub(super) async fn list_boards<S: KanbanStore>(
    State(state): State<AppState<S>>,
) -> Result<Json<Vec<Board>>, ApiError> {
    Ok(Json(state.boards.list_all().await?))
}

/// `POST /boards`
pub(super) async fn create_board<S: KanbanStore>(
    State(state): State<AppState<S>>,
    payload: Result<Json<BoardPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Board>), ApiError> {
    let Json(body) = payload?;
    let title = required_text(body.title, KanbanDomainError::InvalidTitle)?;
    let owner = required_text(body.owner, KanbanDomainError::InvalidOwner)?;
    let description = optional_text(
        body.description,
        KanbanDomainError::InvalidText {
            field: "description",
        },
    )?;

    let mut request = CreateBoardRequest::new(title, owner);
    if let Some(description) = description {
        request = request.with_description(description);
    }
    let board = state.boards.create(request).await?;
    Ok((StatusCode::CREATED, Json(board)))
}

/// `GET /boards/{boardId}`
pub(super) async fn get_board<S: KanbanStore>(
    State(state): State<AppState<S>>,
    Path(raw_board): Path<String>,
) -> Result<Json<Board>, ApiError> {
    let board_id: BoardId = parse_id(&raw_board)?;
    Ok(Json(state.boards.get(board_id).await?))
}

/// `PUT /boards/{boardId}`
pub(super) async fn update_board<S: KanbanStore>(
    State(state): State<AppState<S>>,
    Path(raw_board): Path<String>,
    payload: Result<Json<BoardPayload>, JsonRejection>,
) -> Result<Json<Board>, ApiError> {
    let Json(body) = payload?;
    let title = required_text(body.title, KanbanDomainError::InvalidTitle)?;
    let description = optional_text(
        body.description,
        KanbanDomainError::InvalidText {
            field: "description",
        },
    )?;
    let board_id: BoardId = parse_id(&raw_board)?;

    let mut request = UpdateBoardRequest::new(title);
    if let Some(description) = description {
        request = request.with_description(description);
    }
    Ok(Json(state.boards.update(board_id, request).await?))
}

/// `DELETE /boards/{boardId}`
pub(super) async fn delete_board<S: KanbanStore>(
    State(state): State<AppState<S>>,
    Path(raw_board): Path<String>,
) -> Result<Json<&'static str>, ApiError> {
    let board_id: BoardId = parse_id(&raw_board)?;
    state.boards.delete(board_id).await?;
    Ok(Json("Board deleted"))
}
