//! Task entity and its change set.

use super::{ListId, TaskId, Title};
use serde::{Deserialize, Serialize};

/// A unit of work within a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "_id")]
    id: TaskId,
    title: Title,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default)]
    completed: bool,
    list: ListId,
}

/// Validated fields supplied when creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    /// Task title.
    pub title: Title,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Completion flag.
    pub completed: bool,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: Title,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted completion flag.
    pub completed: bool,
    /// Owning list.
    pub list: ListId,
}

/// Full overwrite of a task's mutable fields.
///
/// Unlike board and list updates, an absent description clears the stored
/// one and an absent completion flag resets it to `false`. The title is the
/// exception: `None` keeps it, since a task is never left untitled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskChanges {
    /// Replacement title; `None` keeps the current one.
    pub title: Option<Title>,
    /// Replacement description; `None` clears it.
    pub description: Option<String>,
    /// Replacement completion flag.
    pub completed: bool,
    /// Destination list when the task moves; `None` keeps the current list.
    pub list: Option<ListId>,
}

impl Task {
    /// Creates a new task in a list with a fresh identifier.
    #[must_use]
    pub fn new(list: ListId, fields: NewTask) -> Self {
        Self {
            id: TaskId::new(),
            title: fields.title,
            description: fields.description,
            completed: fields.completed,
            list,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            completed: data.completed,
            list: data.list,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &Title {
        &self.title
    }

    /// Returns the task description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns whether the task is completed.
    #[must_use]
    pub const fn completed(&self) -> bool {
        self.completed
    }

    /// Returns the owning list.
    #[must_use]
    pub const fn list(&self) -> ListId {
        self.list
    }

    /// Overwrites the mutable fields.
    pub fn apply(&mut self, changes: &TaskChanges) {
        if let Some(title) = &changes.title {
            self.title.clone_from(title);
        }
        self.description.clone_from(&changes.description);
        self.completed = changes.completed;
        if let Some(list) = changes.list {
            self.list = list;
        }
    }
}
