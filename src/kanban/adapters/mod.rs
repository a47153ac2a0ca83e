//! Adapter implementations for kanban repository ports.
//!
//! - [`memory::InMemoryKanbanStore`]: thread-safe in-process document store
//!   used by tests and by the server when no database is configured
//! - [`postgres::PostgresKanbanStore`]: `PostgreSQL` persistence using Diesel

pub mod memory;
pub mod postgres;
