//! Kanban board management for Corkboard.
//!
//! Boards own an ordered sequence of lists and lists own an ordered sequence
//! of tasks. Both sequences are forward caches of the `board`/`list` fields
//! stored on the children, maintained by the services with sequential
//! storage calls rather than transactions. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
