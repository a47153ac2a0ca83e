//! Task route handlers.
//!
//! The board segment of task paths is not consulted; tasks are addressed by
//! their list and their own identifier.

use super::{
    AppState,
    error::ApiError,
    payload::{TaskPayload, optional_text, parse_id, required_text},
};
use crate::kanban::{
    domain::{KanbanDomainError, ListId, Task, TaskId},
    ports::KanbanStore,
    services::{CreateTaskRequest, UpdateTaskRequest},
};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};

/// `GET /boards/{boardId}/lists/{listId}/tasks`
pub(super) async fn list_tasks<S: KanbanStore>(
    State(state): State<AppState<S>>,
    Path((_board, raw_list)): Path<(String, String)>,
) -> Result<Json<Vec<Task>>, ApiError> {
    let list_id: ListId = parse_id(&raw_list)?;
    Ok(Json(state.tasks.list_by_list(list_id).await?))
}

/// `POST /boards/{boardId}/lists/{listId}/tasks`
pub(super) async fn create_task<S: KanbanStore>(
    State(state): State<AppState<S>>,
    Path((_board, raw_list)): Path<(String, String)>,
    payload: Result<Json<TaskPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    let Json(body) = payload?;
    let title = required_text(body.title, KanbanDomainError::InvalidTitle)?;
    let description = optional_text(
        body.description,
        KanbanDomainError::InvalidText {
            field: "description",
        },
    )?;
    let list_id: ListId = parse_id(&raw_list)?;

    let mut request = CreateTaskRequest::new(title);
    if let Some(description) = description {
        request = request.with_description(description);
    }
    if let Some(completed) = body.completed {
        request = request.with_completed(completed);
    }
    let task = state.tasks.create(list_id, request).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// `GET /boards/{boardId}/lists/{listId}/tasks/{taskId}`
pub(super) async fn get_task<S: KanbanStore>(
    State(state): State<AppState<S>>,
    Path((_board, _list, raw_task)): Path<(String, String, String)>,
) -> Result<Json<Task>, ApiError> {
    let task_id: TaskId = parse_id(&raw_task)?;
    Ok(Json(state.tasks.get(task_id).await?))
}

/// `PUT /boards/{boardId}/lists/{listId}/tasks/{taskId}`
pub(super) async fn update_task<S: KanbanStore>(
    State(state): State<AppState<S>>,
    Path((_board, _list, raw_task)): Path<(String, String, String)>,
    payload: Result<Json<TaskPayload>, JsonRejection>,
) -> Result<Json<Task>, ApiError> {
    let Json(body) = payload?;
    let title = optional_text(body.title, KanbanDomainError::InvalidTitle)?;
    let description = optional_text(
        body.description,
        KanbanDomainError::InvalidText {
            field: "description",
        },
    )?;
    let task_id: TaskId = parse_id(&raw_task)?;

    let mut request = UpdateTaskRequest::default();
    if let Some(title) = title {
        request = request.with_title(title);
    }
    if let Some(description) = description {
        request = request.with_description(description);
    }
    if let Some(completed) = body.completed {
        request = request.with_completed(completed);
    }
    if let Some(new_list_id) = body.new_list_id.filter(|raw| !raw.is_empty()) {
        request = request.with_new_list(parse_id(&new_list_id)?);
    }
    Ok(Json(state.tasks.update(task_id, request).await?))
}

/// `DELETE /boards/{boardId}/lists/{listId}/tasks/{taskId}`
pub(super) async fn delete_task<S: KanbanStore>(
    State(state): State<AppState<S>>,
    Path((_board, raw_list, raw_task)): Path<(String, String, String)>,
) -> Result<Json<&'static str>, ApiError> {
    let list_id: ListId = parse_id(&raw_list)?;
    let task_id: TaskId = parse_id(&raw_task)?;
    state.tasks.delete(list_id, task_id).await?;
    Ok(Json("Task deleted successfully"))
}
