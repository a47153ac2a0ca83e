//! Board aggregate and its change set.

use super::{BoardId, ListId, Owner, Title};
use serde::{Deserialize, Serialize};

/// Top-level container owning an ordered sequence of lists by reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    #[serde(rename = "_id")]
    id: BoardId,
    title: Title,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    owner: Owner,
    #[serde(default)]
    lists: Vec<ListId>,
}

/// Validated fields supplied when creating a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBoard {
    /// Board title.
    pub title: Title,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Board owner.
    pub owner: Owner,
}

/// Parameter object for reconstructing a persisted board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedBoardData {
    /// Persisted board identifier.
    pub id: BoardId,
    /// Persisted title.
    pub title: Title,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted owner.
    pub owner: Owner,
    /// Persisted list backreferences in board order.
    pub lists: Vec<ListId>,
}

/// Partial update applied to a board. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardChanges {
    /// Replacement title.
    pub title: Option<Title>,
    /// Replacement description.
    pub description: Option<String>,
}

impl BoardChanges {
    /// Returns `true` when the change set carries no field.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none()
    }
}

impl Board {
    /// Creates a new board with a fresh identifier and no lists.
    #[must_use]
    pub fn new(fields: NewBoard) -> Self {
        Self {
            id: BoardId::new(),
            title: fields.title,
            description: fields.description,
            owner: fields.owner,
            lists: Vec::new(),
        }
    }

    /// Reconstructs a board from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedBoardData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            owner: data.owner,
            lists: data.lists,
        }
    }

    /// Returns the board identifier.
    #[must_use]
    pub const fn id(&self) -> BoardId {
        self.id
    }

    /// Returns the board title.
    #[must_use]
    pub const fn title(&self) -> &Title {
        &self.title
    }

    /// Returns the board description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the board owner.
    #[must_use]
    pub const fn owner(&self) -> &Owner {
        &self.owner
    }

    /// Returns the list backreferences in board order.
    #[must_use]
    pub fn lists(&self) -> &[ListId] {
        &self.lists
    }

    /// Applies a partial update.
    pub fn apply(&mut self, changes: &BoardChanges) {
        if let Some(title) = &changes.title {
            self.title = title.clone();
        }
        if let Some(description) = &changes.description {
            self.description = Some(description.clone());
        }
    }

    /// Appends a list backreference.
    pub fn link_list(&mut self, list_id: ListId) {
        self.lists.push(list_id);
    }

    /// Removes every occurrence of a list backreference.
    pub fn unlink_list(&mut self, list_id: ListId) {
        self.lists.retain(|id| *id != list_id);
    }
}
