//! Shared helpers for driving the router in-process.

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header::CONTENT_TYPE},
};
use corkboard::{
    http::{AppState, router},
    kanban::adapters::memory::InMemoryKanbanStore,
};
use rstest::fixture;
use serde_json::{Value, json};
use tower::ServiceExt;

/// Base path the test router is mounted under.
pub const BASE: &str = "/api";

/// Router over a fresh in-memory store.
#[derive(Clone)]
pub struct Api {
    app: Router,
}

/// Provides an API mounted under [`BASE`].
#[fixture]
pub fn api() -> Api {
    Api::mounted_at(BASE)
}

impl Api {
    /// Builds an API mounted under `base_path`.
    #[must_use]
    pub fn mounted_at(base_path: &str) -> Self {
        Self {
            app: router(AppState::new(InMemoryKanbanStore::new()), base_path),
        }
    }

    /// Sends a request with an optional JSON body and decodes the response.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be built or the response body
    /// is not JSON.
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<(StatusCode, Value), eyre::Report> {
        let raw = body.map(|value| value.to_string());
        self.send_raw(method, path, raw).await
    }

    /// Sends a request whose body is passed through verbatim.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be built or the response body
    /// is not JSON.
    pub async fn send_raw(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<(StatusCode, Value), eyre::Report> {
        let request = Request::builder()
            .method(method)
            .uri(path)
            .header(CONTENT_TYPE, "application/json")
            .body(body.map_or_else(Body::empty, Body::from))?;
        let response = self.app.clone().oneshot(request).await?;
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)?
        };
        Ok((status, value))
    }

    /// Creates a board owned by `alice` and returns its identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the board is not created.
    pub async fn create_board(&self, title: &str) -> Result<String, eyre::Report> {
        let (status, body) = self
            .send(
                Method::POST,
                &format!("{BASE}/boards"),
                Some(json!({ "title": title, "owner": "alice" })),
            )
            .await?;
        eyre::ensure!(status == StatusCode::CREATED, "board create: {status} {body}");
        id_of(&body)
    }

    /// Creates a list on `board` and returns its identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the list is not created.
    pub async fn create_list(&self, board: &str, title: &str) -> Result<String, eyre::Report> {
        let (status, body) = self
            .send(
                Method::POST,
                &format!("{BASE}/boards/{board}/lists"),
                Some(json!({ "title": title })),
            )
            .await?;
        eyre::ensure!(status == StatusCode::CREATED, "list create: {status} {body}");
        id_of(&body)
    }

    /// Creates a task in `list` and returns the created document.
    ///
    /// # Errors
    ///
    /// Returns an error if the task is not created.
    pub async fn create_task(
        &self,
        board: &str,
        list: &str,
        body: Value,
    ) -> Result<Value, eyre::Report> {
        let (status, created) = self
            .send(
                Method::POST,
                &format!("{BASE}/boards/{board}/lists/{list}/tasks"),
                Some(body),
            )
            .await?;
        eyre::ensure!(status == StatusCode::CREATED, "task create: {status} {created}");
        Ok(created)
    }
}

/// Extracts the `_id` of a returned document.
///
/// # Errors
///
/// Returns an error if the document has no string `_id`.
pub fn id_of(document: &Value) -> Result<String, eyre::Report> {
    document
        .get("_id")
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or_else(|| eyre::eyre!("document without _id: {document}"))
}

/// Extracts the identifiers of an array of documents.
///
/// # Errors
///
/// Returns an error if `documents` is not an array of identified documents.
pub fn ids_of(documents: &Value) -> Result<Vec<String>, eyre::Report> {
    documents
        .as_array()
        .ok_or_else(|| eyre::eyre!("expected an array, got {documents}"))?
        .iter()
        .map(id_of)
        .collect()
}
