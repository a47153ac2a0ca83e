//! Port contracts for kanban persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by kanban services.
//! Each collection (boards, lists, tasks) gets its own repository trait;
//! [`KanbanStore`] bundles the three for adapters that hold all of them.

pub mod repository;

pub use repository::{
    BoardRepository, KanbanRepositoryError, KanbanRepositoryResult, KanbanStore, ListRepository,
    TaskRepository,
};
