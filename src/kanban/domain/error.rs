//! Error types for kanban domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing or manipulating kanban domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum KanbanDomainError {
    /// The title is missing, not a string, or empty.
    #[error("Title is required and must be a string.")]
    InvalidTitle,

    /// The board owner is missing, not a string, or blank after trimming.
    #[error("Owner is required and must be a string.")]
    InvalidOwner,

    /// An identifier could not be parsed.
    #[error("malformed identifier: {0}")]
    MalformedId(String),

    /// A free-text field held an array or an object instead of a scalar.
    #[error("{field} must be a string.")]
    InvalidText {
        /// Name of the offending field as sent by the client.
        field: &'static str,
    },
}
