//! List route handlers.

use super::{
    AppState,
    error::ApiError,
    payload::{
        ListPayload, ReorderPayload, optional_text, parse_id, required_text, splice_index,
    },
};
use crate::kanban::{
    domain::{BoardId, KanbanDomainError, List, ListId},
    ports::KanbanStore,
};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};

/// `GET /boards/{boardId}/lists`
pub(super) async fn list_lists<S: KanbanStore>(
    State(state): State<AppState<S>>,
    Path(raw_board): Path<String>,
) -> Result<Json<Vec<List>>, ApiError> {
    let board_id: BoardId = parse_id(&raw_board)?;
    Ok(Json(state.lists.list_by_board(board_id).await?))
}

/// `POST /boards/{boardId}/lists`
pub(super) async fn create_list<S: KanbanStore>(
    State(state): State<AppState<S>>,
    Path(raw_board): Path<String>,
    payload: Result<Json<ListPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<List>), ApiError> {
    let Json(body) = payload?;
    let title = required_text(body.title, KanbanDomainError::InvalidTitle)?;
    let board_id: BoardId = parse_id(&raw_board)?;
    let list = state.lists.create(board_id, title).await?;
    Ok((StatusCode::CREATED, Json(list)))
}

/// `GET /boards/{boardId}/lists/{listId}`
pub(super) async fn get_list<S: KanbanStore>(
    State(state): State<AppState<S>>,
    Path((_board, raw_list)): Path<(String, String)>,
) -> Result<Json<List>, ApiError> {
    let list_id: ListId = parse_id(&raw_list)?;
    Ok(Json(state.lists.get(list_id).await?))
}

/// `PUT /boards/{boardId}/lists/{listId}`
pub(super) async fn update_list<S: KanbanStore>(
    State(state): State<AppState<S>>,
    Path((_board, raw_list)): Path<(String, String)>,
    payload: Result<Json<ListPayload>, JsonRejection>,
) -> Result<Json<List>, ApiError> {
    let Json(body) = payload?;
    let title = optional_text(body.title, KanbanDomainError::InvalidTitle)?;
    let list_id: ListId = parse_id(&raw_list)?;
    Ok(Json(state.lists.update(list_id, title).await?))
}

/// `PUT /boards/{boardId}/lists/{listId}/reorder`
pub(super) async fn reorder_lists<S: KanbanStore>(
    State(state): State<AppState<S>>,
    Path((raw_board, raw_list)): Path<(String, String)>,
    payload: Result<Json<ReorderPayload>, JsonRejection>,
) -> Result<Json<&'static str>, ApiError> {
    let Json(body) = payload?;
    let board_id: BoardId = parse_id(&raw_board)?;
    let list_id: ListId = parse_id(&raw_list)?;
    let source_index = splice_index(body.source_index.as_ref());
    let destination_index = splice_index(body.destination_index.as_ref());
    state
        .lists
        .reorder(board_id, list_id, source_index, destination_index)
        .await?;
    Ok(Json("Lists reordered successfully"))
}

/// `DELETE /boards/{boardId}/lists/{listId}`
pub(super) async fn delete_list<S: KanbanStore>(
    State(state): State<AppState<S>>,
    Path((raw_board, raw_list)): Path<(String, String)>,
) -> Result<Json<&'static str>, ApiError> {
    let board_id: BoardId = parse_id(&raw_board)?;
    let list_id: ListId = parse_id(&raw_list)?;
    state.lists.delete(board_id, list_id).await?;
    Ok(Json("List deleted successfully"))
}
