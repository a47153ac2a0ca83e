//! Service layer for tasks scoped to a list.

use super::{KanbanServiceError, KanbanServiceResult, MissingEntity};
use crate::kanban::{
    domain::{ListId, NewTask, Task, TaskChanges, TaskId, Title},
    ports::{ListRepository, TaskRepository},
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: Option<String>,
    completed: Option<bool>,
}

impl CreateTaskRequest {
    /// Creates a request with the required task title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            completed: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the completion flag; it defaults to `false`.
    #[must_use]
    pub const fn with_completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }
}

/// Request payload for overwriting a task.
///
/// An absent description clears the stored one and an absent completion flag
/// resets it to `false`. An absent title keeps the current title.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    title: Option<String>,
    description: Option<String>,
    completed: Option<bool>,
    new_list: Option<ListId>,
}

impl UpdateTaskRequest {
    /// Sets the replacement title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the replacement description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the replacement completion flag.
    #[must_use]
    pub const fn with_completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    /// Moves the task to another list as part of the update.
    #[must_use]
    pub const fn with_new_list(mut self, list_id: ListId) -> Self {
        self.new_list = Some(list_id);
        self
    }
}

/// Task orchestration service.
///
/// Keeps `List.tasks` in step with task creation, moves and deletion.
pub struct TaskService<L, T>
where
    L: ListRepository,
    T: TaskRepository,
{
    lists: Arc<L>,
    tasks: Arc<T>,
}

impl<L, T> Clone for TaskService<L, T>
where
    L: ListRepository,
    T: TaskRepository,
{
    fn clone(&self) -> Self {
        Self {
            lists: Arc::clone(&self.lists),
            tasks: Arc::clone(&self.tasks),
        }
    }
}

impl<L, T> TaskService<L, T>
where
    L: ListRepository,
    T: TaskRepository,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(lists: Arc<L>, tasks: Arc<T>) -> Self {
        Self { lists, tasks }
    }

    /// Returns the tasks of a list.
    ///
    /// # Errors
    ///
    /// Returns [`KanbanServiceError::NotFound`] when the list has no tasks.
    pub async fn list_by_list(&self, list_id: ListId) -> KanbanServiceResult<Vec<Task>> {
        let tasks = self.tasks.find_tasks_by_list(list_id).await?;
        debug!(list = %list_id, count = tasks.len(), "tasks found");
        if tasks.is_empty() {
            return Err(KanbanServiceError::NotFound(MissingEntity::Tasks(list_id)));
        }
        Ok(tasks)
    }

    /// Creates a task in an existing list and appends it to `List.tasks`.
    ///
    /// # Errors
    ///
    /// Returns [`KanbanServiceError::Domain`] when the title is invalid,
    /// [`KanbanServiceError::NotFound`] when the list does not exist, or
    /// [`KanbanServiceError::Repository`] when either write fails.
    pub async fn create(
        &self,
        list_id: ListId,
        request: CreateTaskRequest,
    ) -> KanbanServiceResult<Task> {
        let task = Task::new(
            list_id,
            NewTask {
                title: Title::new(request.title)?,
                description: request.description,
                completed: request.completed.unwrap_or_default(),
            },
        );
        self.require_list(list_id).await?;

        self.tasks.insert_task(&task).await?;
        if !self.lists.push_task(list_id, task.id()).await? {
            warn!(list = %list_id, task = %task.id(), "list vanished before task was linked");
        }
        info!(list = %list_id, task = %task.id(), "task created");
        Ok(task)
    }

    /// Retrieves a task.
    ///
    /// # Errors
    ///
    /// Returns [`KanbanServiceError::NotFound`] when the task does not exist.
    pub async fn get(&self, task_id: TaskId) -> KanbanServiceResult<Task> {
        self.tasks
            .find_task(task_id)
            .await?
            .ok_or(KanbanServiceError::NotFound(MissingEntity::Task(task_id)))
    }

    /// Overwrites a task and returns it as stored after the update.
    ///
    /// When the request names a different list the task moves there: its
    /// `list` field is rewritten, then its id is pulled from the old list's
    /// `tasks` and pushed onto the new one.
    ///
    /// # Errors
    ///
    /// Returns [`KanbanServiceError::Domain`] when a supplied title is empty,
    /// [`KanbanServiceError::NotFound`] when the task or the destination list
    /// does not exist, or [`KanbanServiceError::Repository`] when a write
    /// fails.
    pub async fn update(
        &self,
        task_id: TaskId,
        request: UpdateTaskRequest,
    ) -> KanbanServiceResult<Task> {
        let title = request.title.map(Title::new).transpose()?;
        let relocation = match request.new_list {
            Some(destination) => self.plan_move(task_id, destination).await?,
            None => None,
        };

        let changes = TaskChanges {
            title,
            description: request.description,
            completed: request.completed.unwrap_or_default(),
            list: relocation.map(|(_, destination)| destination),
        };
        let task = self
            .tasks
            .update_task(task_id, &changes)
            .await?
            .ok_or(KanbanServiceError::NotFound(MissingEntity::Task(task_id)))?;

        if let Some((origin, destination)) = relocation {
            self.lists.pull_task(origin, task_id).await?;
            if !self.lists.push_task(destination, task_id).await? {
                warn!(list = %destination, task = %task_id, "list vanished before task was linked");
            }
            info!(task = %task_id, from = %origin, to = %destination, "task moved");
        }
        info!(task = %task_id, "task updated");
        Ok(task)
    }

    /// Deletes a task and removes it from `List.tasks`.
    ///
    /// Succeeds even when the task or the list does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`KanbanServiceError::Repository`] when either write fails.
    pub async fn delete(&self, list_id: ListId, task_id: TaskId) -> KanbanServiceResult<()> {
        let existed = self.tasks.delete_task(task_id).await?;
        let unlinked = self.lists.pull_task(list_id, task_id).await?;
        info!(list = %list_id, task = %task_id, existed, unlinked, "task deleted");
        Ok(())
    }

    async fn require_list(&self, list_id: ListId) -> KanbanServiceResult<()> {
        if self.lists.find_list(list_id).await?.is_none() {
            return Err(KanbanServiceError::NotFound(MissingEntity::List(list_id)));
        }
        Ok(())
    }

    /// Resolves `(origin, destination)` for a move, or `None` when the task
    /// already lives in `destination`.
    async fn plan_move(
        &self,
        task_id: TaskId,
        destination: ListId,
    ) -> KanbanServiceResult<Option<(ListId, ListId)>> {
        let current = self.get(task_id).await?;
        if current.list() == destination {
            return Ok(None);
        }
        self.require_list(destination).await?;
        Ok(Some((current.list(), destination)))
    }
}
