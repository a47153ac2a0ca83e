//! Shared world state for board lifecycle BDD scenarios.

use std::collections::HashMap;

use corkboard::{
    http::AppState,
    kanban::{
        adapters::memory::InMemoryKanbanStore,
        domain::{Board, BoardId, ListId, Task},
        services::KanbanServiceError,
    },
};
use rstest::fixture;

/// Scenario world for board lifecycle behaviour tests.
pub struct BoardWorld {
    pub services: AppState<InMemoryKanbanStore>,
    pub board: Option<Board>,
    pub lists: HashMap<String, ListId>,
    pub task: Option<Task>,
    pub last_board_result: Option<Result<Board, KanbanServiceError>>,
}

impl BoardWorld {
    /// Creates a world over an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            services: AppState::new(InMemoryKanbanStore::new()),
            board: None,
            lists: HashMap::new(),
            task: None,
            last_board_result: None,
        }
    }

    /// Returns the scenario board identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if no board was created in an earlier step.
    pub fn board_id(&self) -> Result<BoardId, eyre::Report> {
        self.board
            .as_ref()
            .map(Board::id)
            .ok_or_else(|| eyre::eyre!("missing board in scenario world"))
    }

    /// Resolves a list created earlier in the scenario by its title.
    ///
    /// # Errors
    ///
    /// Returns an error if no list with that title was created.
    pub fn list_id(&self, title: &str) -> Result<ListId, eyre::Report> {
        self.lists
            .get(title)
            .copied()
            .ok_or_else(|| eyre::eyre!("no list titled {title:?} in scenario world"))
    }

    /// Titles of the board's lists in stored order.
    ///
    /// # Errors
    ///
    /// Returns an error if the board has no lists or an id is unknown.
    pub fn stored_list_titles(&self) -> Result<Vec<String>, eyre::Report> {
        let lists = run_async(self.services.lists.list_by_board(self.board_id()?))
            .map_err(|err| eyre::eyre!("list lookup failed: {err}"))?;
        Ok(lists
            .iter()
            .map(|list| list.title().as_str().to_owned())
            .collect())
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Splits a comma separated step argument into titles.
#[must_use]
pub fn titles(raw: &str) -> Vec<String> {
    raw.split(',').map(|title| title.trim().to_owned()).collect()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
