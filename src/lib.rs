//! Corkboard: kanban board backend.
//!
//! This crate provides a REST backend for kanban-style boards: boards own
//! lists, lists own tasks, and each parent keeps a forward-reference
//! sequence of its children.
//!
//! # Architecture
//!
//! Corkboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure entity types with no infrastructure dependencies
//! - **Ports**: Abstract repository traits for document storage
//! - **Adapters**: In-memory and `PostgreSQL` implementations of the ports
//! - **Services**: Sequential orchestration of repository calls
//!
//! # Modules
//!
//! - [`kanban`]: Boards, lists and tasks
//! - [`http`]: axum routes translating requests into service calls
//! - [`config`]: Server configuration from flags and environment
//! - [`telemetry`]: Tracing subscriber installation

pub mod config;
pub mod http;
pub mod kanban;
pub mod telemetry;
