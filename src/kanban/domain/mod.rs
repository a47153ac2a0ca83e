//! Domain model for kanban boards, lists and tasks.
//!
//! The domain keeps shape and required-field constraints for each entity,
//! the change sets applied by update operations, and the splice used to
//! reorder lists. Infrastructure concerns stay outside this boundary.

mod board;
mod error;
mod ids;
mod list;
mod reorder;
mod scalars;
mod task;

pub use board::{Board, BoardChanges, NewBoard, PersistedBoardData};
pub use error::KanbanDomainError;
pub use ids::{BoardId, ListId, TaskId};
pub use list::{List, ListChanges, PersistedListData};
pub use reorder::move_item;
pub use scalars::{Owner, Title};
pub use task::{NewTask, PersistedTaskData, Task, TaskChanges};
