//! Diesel row models for kanban persistence.

use super::schema::{boards, lists, tasks};
use diesel::prelude::*;
use uuid::Uuid;

/// Query result row for board records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = boards)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct BoardRow {
    /// Board identifier.
    pub id: Uuid,
    /// Board title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Owner name.
    pub owner: String,
    /// List backreferences.
    pub list_ids: Vec<Uuid>,
}

/// Insert model for board records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = boards)]
pub struct NewBoardRow {
    /// Board identifier.
    pub id: Uuid,
    /// Board title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Owner name.
    pub owner: String,
    /// List backreferences.
    pub list_ids: Vec<Uuid>,
}

/// Partial update for board records. `None` columns are skipped.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = boards)]
pub struct BoardChangeset {
    /// Replacement title.
    pub title: Option<String>,
    /// Replacement description.
    pub description: Option<String>,
}

/// Query result row for list records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = lists)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ListRow {
    /// List identifier.
    pub id: Uuid,
    /// List title.
    pub title: String,
    /// Owning board identifier.
    pub board_id: Uuid,
    /// Task backreferences.
    pub task_ids: Vec<Uuid>,
    /// Position among the board's lists.
    pub position: Option<i32>,
}

/// Insert model for list records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = lists)]
pub struct NewListRow {
    /// List identifier.
    pub id: Uuid,
    /// List title.
    pub title: String,
    /// Owning board identifier.
    pub board_id: Uuid,
    /// Task backreferences.
    pub task_ids: Vec<Uuid>,
    /// Position among the board's lists.
    pub position: Option<i32>,
}

/// Partial update for list records. `None` columns are skipped.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = lists)]
pub struct ListChangeset {
    /// Replacement title.
    pub title: Option<String>,
    /// Replacement position.
    pub position: Option<i32>,
}

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: Uuid,
    /// Task title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Completion flag.
    pub completed: bool,
    /// Owning list identifier.
    pub list_id: Uuid,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task identifier.
    pub id: Uuid,
    /// Task title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Completion flag.
    pub completed: bool,
    /// Owning list identifier.
    pub list_id: Uuid,
}

/// Overwrite of task records.
///
/// `description` is always `Some`, so a `None` inner value writes `NULL`;
/// `title` is skipped when absent and `list_id` is skipped when the task
/// stays in its list.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks)]
pub struct TaskChangeset {
    /// Replacement title.
    pub title: Option<String>,
    /// Replacement description.
    pub description: Option<Option<String>>,
    /// Replacement completion flag.
    pub completed: bool,
    /// Destination list when moving.
    pub list_id: Option<Uuid>,
}
