//! List entity and its change set.

use super::{BoardId, ListId, TaskId, Title};
use serde::{Deserialize, Serialize};

/// A column within a board, owning an ordered sequence of tasks by reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    #[serde(rename = "_id")]
    id: ListId,
    title: Title,
    board: BoardId,
    #[serde(default)]
    tasks: Vec<TaskId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    order: Option<u32>,
}

/// Parameter object for reconstructing a persisted list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedListData {
    /// Persisted list identifier.
    pub id: ListId,
    /// Persisted title.
    pub title: Title,
    /// Owning board.
    pub board: BoardId,
    /// Persisted task backreferences in list order.
    pub tasks: Vec<TaskId>,
    /// Position among the board's lists, once reordered.
    pub order: Option<u32>,
}

/// Partial update applied to a list. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListChanges {
    /// Replacement title.
    pub title: Option<Title>,
    /// Replacement position.
    pub order: Option<u32>,
}

impl ListChanges {
    /// Change set replacing only the title.
    #[must_use]
    pub const fn title(title: Title) -> Self {
        Self {
            title: Some(title),
            order: None,
        }
    }

    /// Change set replacing only the position.
    #[must_use]
    pub const fn order(order: u32) -> Self {
        Self {
            title: None,
            order: Some(order),
        }
    }

    /// Returns `true` when the change set carries no field.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none() && self.order.is_none()
    }
}

impl List {
    /// Creates a new list on a board with a fresh identifier and no tasks.
    #[must_use]
    pub fn new(board: BoardId, title: Title) -> Self {
        Self {
            id: ListId::new(),
            title,
            board,
            tasks: Vec::new(),
            order: None,
        }
    }

    /// Reconstructs a list from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedListData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            board: data.board,
            tasks: data.tasks,
            order: data.order,
        }
    }

    /// Returns the list identifier.
    #[must_use]
    pub const fn id(&self) -> ListId {
        self.id
    }

    /// Returns the list title.
    #[must_use]
    pub const fn title(&self) -> &Title {
        &self.title
    }

    /// Returns the owning board.
    #[must_use]
    pub const fn board(&self) -> BoardId {
        self.board
    }

    /// Returns the task backreferences in list order.
    #[must_use]
    pub fn tasks(&self) -> &[TaskId] {
        &self.tasks
    }

    /// Returns the position among the board's lists, if one has been set.
    #[must_use]
    pub const fn order(&self) -> Option<u32> {
        self.order
    }

    /// Applies a partial update.
    pub fn apply(&mut self, changes: &ListChanges) {
        if let Some(title) = &changes.title {
            self.title = title.clone();
        }
        if let Some(order) = changes.order {
            self.order = Some(order);
        }
    }

    /// Appends a task backreference.
    pub fn link_task(&mut self, task_id: TaskId) {
        self.tasks.push(task_id);
    }

    /// Removes every occurrence of a task backreference.
    pub fn unlink_task(&mut self, task_id: TaskId) {
        self.tasks.retain(|id| *id != task_id);
    }
}
