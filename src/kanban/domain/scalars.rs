//! Validated scalar values shared by kanban entities.

use super::KanbanDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Non-empty title of a board, list or task.
///
/// Titles are stored verbatim; surrounding whitespace is preserved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Title(String);

impl Title {
    /// Creates a validated title.
    ///
    /// # Errors
    ///
    /// Returns [`KanbanDomainError::InvalidTitle`] when the value is empty.
    pub fn new(value: impl Into<String>) -> Result<Self, KanbanDomainError> {
        let raw = value.into();
        if raw.is_empty() {
            return Err(KanbanDomainError::InvalidTitle);
        }
        Ok(Self(raw))
    }

    /// Returns the title as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Title {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Board owner name, trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Owner(String);

impl Owner {
    /// Creates a validated owner, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`KanbanDomainError::InvalidOwner`] when the value is blank.
    pub fn new(value: impl Into<String>) -> Result<Self, KanbanDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(KanbanDomainError::InvalidOwner);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the owner as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
