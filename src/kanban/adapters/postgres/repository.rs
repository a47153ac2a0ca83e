//! `PostgreSQL` repository implementation for kanban storage.

use super::{
    models::{
        BoardChangeset, BoardRow, ListChangeset, ListRow, NewBoardRow, NewListRow, NewTaskRow,
        TaskChangeset, TaskRow,
    },
    schema::{boards, lists, tasks},
};
use crate::kanban::{
    domain::{
        Board, BoardChanges, BoardId, List, ListChanges, ListId, Owner, PersistedBoardData,
        PersistedListData, PersistedTaskData, Task, TaskChanges, TaskId, Title,
    },
    ports::{
        BoardRepository, KanbanRepositoryError, KanbanRepositoryResult, ListRepository,
        TaskRepository,
    },
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel::sql_types;
use tracing::debug;
use uuid::Uuid;

/// `PostgreSQL` connection pool type used by kanban adapters.
pub type KanbanPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed store for boards, lists and tasks.
#[derive(Debug, Clone)]
pub struct PostgresKanbanStore {
    pool: KanbanPgPool,
}

impl PostgresKanbanStore {
    /// Creates a new store from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: KanbanPgPool) -> Self {
        Self { pool }
    }

    /// Builds a connection pool for `database_url` and wraps it in a store.
    ///
    /// # Errors
    ///
    /// Returns [`KanbanRepositoryError::Persistence`] when the pool cannot
    /// establish its initial connections.
    pub fn connect(database_url: &str, max_size: u32) -> KanbanRepositoryResult<Self> {
        let manager = ConnectionManager::<PgConnection>::new(database_url);
        let pool = Pool::builder()
            .max_size(max_size)
            .build(manager)
            .map_err(KanbanRepositoryError::persistence)?;
        Ok(Self::new(pool))
    }

    async fn run_blocking<F, T>(&self, f: F) -> KanbanRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> KanbanRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(KanbanRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(KanbanRepositoryError::persistence)?
    }
}

#[async_trait]
impl BoardRepository for PostgresKanbanStore {
    async fn insert_board(&self, board: &Board) -> KanbanRepositoryResult<()> {
        let board_id = board.id().into_inner();
        let new_row = NewBoardRow {
            id: board_id,
            title: board.title().as_str().to_owned(),
            description: board.description().map(str::to_owned),
            owner: board.owner().as_str().to_owned(),
            list_ids: board.lists().iter().map(|id| id.into_inner()).collect(),
        };

        self.run_blocking(move |connection| {
            diesel::insert_into(boards::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| insert_error(err, board_id))?;
            Ok(())
        })
        .await
    }

    async fn find_boards(&self) -> KanbanRepositoryResult<Vec<Board>> {
        self.run_blocking(|connection| {
            let rows = boards::table
                .order_by(boards::seq.asc())
                .select(BoardRow::as_select())
                .load::<BoardRow>(connection)
                .map_err(KanbanRepositoryError::persistence)?;
            rows.into_iter().map(row_to_board).collect()
        })
        .await
    }

    async fn find_board(&self, id: BoardId) -> KanbanRepositoryResult<Option<Board>> {
        self.run_blocking(move |connection| {
            let row = boards::table
                .find(id.into_inner())
                .select(BoardRow::as_select())
                .first::<BoardRow>(connection)
                .optional()
                .map_err(KanbanRepositoryError::persistence)?;
            row.map(row_to_board).transpose()
        })
        .await
    }

    async fn update_board(
        &self,
        id: BoardId,
        changes: &BoardChanges,
    ) -> KanbanRepositoryResult<Option<Board>> {
        if changes.is_empty() {
            return self.find_board(id).await;
        }
        let changeset = BoardChangeset {
            title: changes.title.as_ref().map(|title| title.as_str().to_owned()),
            description: changes.description.clone(),
        };

        self.run_blocking(move |connection| {
            let row = diesel::update(boards::table.find(id.into_inner()))
                .set(&changeset)
                .returning(BoardRow::as_returning())
                .get_result::<BoardRow>(connection)
                .optional()
                .map_err(KanbanRepositoryError::persistence)?;
            row.map(row_to_board).transpose()
        })
        .await
    }

    async fn delete_board(&self, id: BoardId) -> KanbanRepositoryResult<bool> {
        self.run_blocking(move |connection| {
            let deleted = diesel::delete(boards::table.find(id.into_inner()))
                .execute(connection)
                .map_err(KanbanRepositoryError::persistence)?;
            Ok(deleted > 0)
        })
        .await
    }

    async fn push_list(&self, board: BoardId, list: ListId) -> KanbanRepositoryResult<bool> {
        self.run_blocking(move |connection| {
            execute_array_update(
                connection,
                "UPDATE boards SET list_ids = array_append(list_ids, $1) WHERE id = $2",
                list.into_inner(),
                board.into_inner(),
            )
        })
        .await
    }

    async fn pull_list(&self, board: BoardId, list: ListId) -> KanbanRepositoryResult<bool> {
        self.run_blocking(move |connection| {
            execute_array_update(
                connection,
                "UPDATE boards SET list_ids = array_remove(list_ids, $1) WHERE id = $2",
                list.into_inner(),
                board.into_inner(),
            )
        })
        .await
    }
}

#[async_trait]
impl ListRepository for PostgresKanbanStore {
    async fn insert_list(&self, list: &List) -> KanbanRepositoryResult<()> {
        let list_id = list.id().into_inner();
        let position = list
            .order()
            .map(i32::try_from)
            .transpose()
            .map_err(KanbanRepositoryError::persistence)?;
        let new_row = NewListRow {
            id: list_id,
            title: list.title().as_str().to_owned(),
            board_id: list.board().into_inner(),
            task_ids: list.tasks().iter().map(|id| id.into_inner()).collect(),
            position,
        };

        self.run_blocking(move |connection| {
            diesel::insert_into(lists::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| insert_error(err, list_id))?;
            Ok(())
        })
        .await
    }

    async fn find_lists_by_board(&self, board: BoardId) -> KanbanRepositoryResult<Vec<List>> {
        self.run_blocking(move |connection| {
            let rows = lists::table
                .filter(lists::board_id.eq(board.into_inner()))
                .order_by((lists::position.asc().nulls_last(), lists::seq.asc()))
                .select(ListRow::as_select())
                .load::<ListRow>(connection)
                .map_err(KanbanRepositoryError::persistence)?;
            debug!(board = %board, count = rows.len(), "loaded lists");
            rows.into_iter().map(row_to_list).collect()
        })
        .await
    }

    async fn find_list(&self, id: ListId) -> KanbanRepositoryResult<Option<List>> {
        self.run_blocking(move |connection| {
            let row = lists::table
                .find(id.into_inner())
                .select(ListRow::as_select())
                .first::<ListRow>(connection)
                .optional()
                .map_err(KanbanRepositoryError::persistence)?;
            row.map(row_to_list).transpose()
        })
        .await
    }

    async fn update_list(
        &self,
        id: ListId,
        changes: &ListChanges,
    ) -> KanbanRepositoryResult<Option<List>> {
        if changes.is_empty() {
            return self.find_list(id).await;
        }
        let changeset = ListChangeset {
            title: changes.title.as_ref().map(|title| title.as_str().to_owned()),
            position: changes
                .order
                .map(i32::try_from)
                .transpose()
                .map_err(KanbanRepositoryError::persistence)?,
        };

        self.run_blocking(move |connection| {
            let row = diesel::update(lists::table.find(id.into_inner()))
                .set(&changeset)
                .returning(ListRow::as_returning())
                .get_result::<ListRow>(connection)
                .optional()
                .map_err(KanbanRepositoryError::persistence)?;
            row.map(row_to_list).transpose()
        })
        .await
    }

    async fn delete_list(&self, id: ListId) -> KanbanRepositoryResult<bool> {
        self.run_blocking(move |connection| {
            let deleted = diesel::delete(lists::table.find(id.into_inner()))
                .execute(connection)
                .map_err(KanbanRepositoryError::persistence)?;
            Ok(deleted > 0)
        })
        .await
    }

    async fn delete_lists_by_board(&self, board: BoardId) -> KanbanRepositoryResult<usize> {
        self.run_blocking(move |connection| {
            diesel::delete(lists::table.filter(lists::board_id.eq(board.into_inner())))
                .execute(connection)
                .map_err(KanbanRepositoryError::persistence)
        })
        .await
    }

    async fn push_task(&self, list: ListId, task: TaskId) -> KanbanRepositoryResult<bool> {
        self.run_blocking(move |connection| {
            execute_array_update(
                connection,
                "UPDATE lists SET task_ids = array_append(task_ids, $1) WHERE id = $2",
                task.into_inner(),
                list.into_inner(),
            )
        })
        .await
    }

    async fn pull_task(&self, list: ListId, task: TaskId) -> KanbanRepositoryResult<bool> {
        self.run_blocking(move |connection| {
            execute_array_update(
                connection,
                "UPDATE lists SET task_ids = array_remove(task_ids, $1) WHERE id = $2",
                task.into_inner(),
                list.into_inner(),
            )
        })
        .await
    }
}

#[async_trait]
impl TaskRepository for PostgresKanbanStore {
    async fn insert_task(&self, task: &Task) -> KanbanRepositoryResult<()> {
        let task_id = task.id().into_inner();
        let new_row = NewTaskRow {
            id: task_id,
            title: task.title().as_str().to_owned(),
            description: task.description().map(str::to_owned),
            completed: task.completed(),
            list_id: task.list().into_inner(),
        };

        self.run_blocking(move |connection| {
            diesel::insert_into(tasks::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| insert_error(err, task_id))?;
            Ok(())
        })
        .await
    }

    async fn find_tasks_by_list(&self, list: ListId) -> KanbanRepositoryResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .filter(tasks::list_id.eq(list.into_inner()))
                .order_by(tasks::seq.asc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(KanbanRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn find_task(&self, id: TaskId) -> KanbanRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .find(id.into_inner())
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(KanbanRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn update_task(
        &self,
        id: TaskId,
        changes: &TaskChanges,
    ) -> KanbanRepositoryResult<Option<Task>> {
        let changeset = TaskChangeset {
            title: changes.title.as_ref().map(|title| title.as_str().to_owned()),
            description: Some(changes.description.clone()),
            completed: changes.completed,
            list_id: changes.list.map(ListId::into_inner),
        };

        self.run_blocking(move |connection| {
            let row = diesel::update(tasks::table.find(id.into_inner()))
                .set(&changeset)
                .returning(TaskRow::as_returning())
                .get_result::<TaskRow>(connection)
                .optional()
                .map_err(KanbanRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn delete_task(&self, id: TaskId) -> KanbanRepositoryResult<bool> {
        self.run_blocking(move |connection| {
            let deleted = diesel::delete(tasks::table.find(id.into_inner()))
                .execute(connection)
                .map_err(KanbanRepositoryError::persistence)?;
            Ok(deleted > 0)
        })
        .await
    }
}

/// Runs an `array_append`/`array_remove` statement binding `(element, id)`
/// and reports whether the parent row matched.
fn execute_array_update(
    connection: &mut PgConnection,
    statement: &'static str,
    element: Uuid,
    id: Uuid,
) -> KanbanRepositoryResult<bool> {
    let updated = diesel::sql_query(statement)
        .bind::<sql_types::Uuid, _>(element)
        .bind::<sql_types::Uuid, _>(id)
        .execute(connection)
        .map_err(KanbanRepositoryError::persistence)?;
    Ok(updated > 0)
}

fn insert_error(err: DieselError, id: Uuid) -> KanbanRepositoryError {
    match err {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            KanbanRepositoryError::DuplicateId(id)
        }
        _ => KanbanRepositoryError::persistence(err),
    }
}

fn row_to_board(row: BoardRow) -> KanbanRepositoryResult<Board> {
    let BoardRow {
        id,
        title,
        description,
        owner,
        list_ids,
    } = row;

    let data = PersistedBoardData {
        id: BoardId::from_uuid(id),
        title: Title::new(title).map_err(KanbanRepositoryError::persistence)?,
        description,
        owner: Owner::new(owner).map_err(KanbanRepositoryError::persistence)?,
        lists: list_ids.into_iter().map(ListId::from_uuid).collect(),
    };
    Ok(Board::from_persisted(data))
}

fn row_to_list(row: ListRow) -> KanbanRepositoryResult<List> {
    let ListRow {
        id,
        title,
        board_id,
        task_ids,
        position,
    } = row;

    let data = PersistedListData {
        id: ListId::from_uuid(id),
        title: Title::new(title).map_err(KanbanRepositoryError::persistence)?,
        board: BoardId::from_uuid(board_id),
        tasks: task_ids.into_iter().map(TaskId::from_uuid).collect(),
        order: position
            .map(u32::try_from)
            .transpose()
            .map_err(KanbanRepositoryError::persistence)?,
    };
    Ok(List::from_persisted(data))
}

fn row_to_task(row: TaskRow) -> KanbanRepositoryResult<Task> {
    let TaskRow {
        id,
        title,
        description,
        completed,
        list_id,
    } = row;

    let data = PersistedTaskData {
        id: TaskId::from_uuid(id),
        title: Title::new(title).map_err(KanbanRepositoryError::persistence)?,
        description,
        completed,
        list: ListId::from_uuid(list_id),
    };
    Ok(Task::from_persisted(data))
}
