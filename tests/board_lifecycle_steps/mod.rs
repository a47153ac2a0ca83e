//! Step definitions for board lifecycle scenarios.

pub mod when;
pub mod world;
