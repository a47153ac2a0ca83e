//! `PostgreSQL` adapters for kanban persistence.

mod models;
mod repository;
mod schema;

pub use repository::{KanbanPgPool, PostgresKanbanStore};
