//! Application services for board, list and task orchestration.
//!
//! Each service is a short sequential chain of repository calls. Steps that
//! touch a second document (backreference push/pull, cascades) run after the
//! primary mutation and are not rolled back when they fail.

mod board;
mod error;
mod list;
mod task;

pub use board::{BoardService, CreateBoardRequest, UpdateBoardRequest};
pub use error::{KanbanServiceError, KanbanServiceResult, MissingEntity};
pub use list::ListService;
pub use task::{CreateTaskRequest, TaskService, UpdateTaskRequest};
