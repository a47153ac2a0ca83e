//! HTTP transport for the kanban services.
//!
//! Routes map one-to-one onto service operations; this layer only parses
//! identifiers and bodies and renders results as status codes. See
//! [`error::ApiError`] for the status mapping.

mod boards;
pub mod error;
mod lists;
mod payload;
mod tasks;

use crate::kanban::{
    ports::KanbanStore,
    services::{BoardService, ListService, TaskService},
};
use axum::{
    Json, Router,
    routing::{get, put},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Body returned by the liveness route.
pub const LIVENESS_MESSAGE: &str = "All good in here";

/// Services shared by every request handler.
pub struct AppState<S: KanbanStore> {
    /// Board operations.
    pub boards: BoardService<S, S>,
    /// List operations.
    pub lists: ListService<S, S>,
    /// Task operations.
    pub tasks: TaskService<S, S>,
}

impl<S: KanbanStore> AppState<S> {
    /// Builds the services over a single store holding all collections.
    #[must_use]
    pub fn new(store: S) -> Self {
        let shared = Arc::new(store);
        Self {
            boards: BoardService::new(Arc::clone(&shared), Arc::clone(&shared)),
            lists: ListService::new(Arc::clone(&shared), Arc::clone(&shared)),
            tasks: TaskService::new(Arc::clone(&shared), shared),
        }
    }
}

impl<S: KanbanStore> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            boards: self.boards.clone(),
            lists: self.lists.clone(),
            tasks: self.tasks.clone(),
        }
    }
}

/// Builds the application router mounted under `base_path`.
///
/// An empty or `/` base path mounts the routes at the root.
#[must_use]
pub fn router<S: KanbanStore>(state: AppState<S>, base_path: &str) -> Router {
    let api = Router::new()
        .route("/", get(liveness))
        .route(
            "/boards",
            get(boards::list_boards::<S>).post(boards::create_board::<S>),
        )
        .route(
            "/boards/:board_id",
            get(boards::get_board::<S>)
                .put(boards::update_board::<S>)
                .delete(boards::delete_board::<S>),
        )
        .route(
            "/boards/:board_id/lists",
            get(lists::list_lists::<S>).post(lists::create_list::<S>),
        )
        .route(
            "/boards/:board_id/lists/:list_id",
            get(lists::get_list::<S>)
                .put(lists::update_list::<S>)
                .delete(lists::delete_list::<S>),
        )
        .route(
            "/boards/:board_id/lists/:list_id/reorder",
            put(lists::reorder_lists::<S>),
        )
        .route(
            "/boards/:board_id/lists/:list_id/tasks",
            get(tasks::list_tasks::<S>).post(tasks::create_task::<S>),
        )
        .route(
            "/boards/:board_id/lists/:list_id/tasks/:task_id",
            get(tasks::get_task::<S>)
                .put(tasks::update_task::<S>)
                .delete(tasks::delete_task::<S>),
        )
        .with_state(state);

    let prefix = base_path.trim_matches('/');
    let app = if prefix.is_empty() {
        api
    } else {
        Router::new().nest(&format!("/{prefix}"), api)
    };
    app.layer(TraceLayer::new_for_http())
}

async fn liveness() -> Json<&'static str> {
    Json(LIVENESS_MESSAGE)
}
