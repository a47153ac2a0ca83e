//! When steps for board lifecycle BDD scenarios.

use super::world::{BoardWorld, run_async};
use corkboard::kanban::services::{CreateBoardRequest, UpdateTaskRequest};
use eyre::WrapErr;
use rstest_bdd_macros::when;

#[when(r#"a list titled "{title}" is added to the board"#)]
fn add_list(world: &mut BoardWorld, title: String) -> Result<(), eyre::Report> {
    let board_id = world.board_id()?;
    let list = run_async(world.services.lists.create(board_id, title.clone()))
        .wrap_err("add list to board")?;
    world.lists.insert(title, list.id());
    Ok(())
}

#[when("the list at position {source:i64} is moved to position {destination:i64}")]
fn move_list(world: &mut BoardWorld, source: i64, destination: i64) -> Result<(), eyre::Report> {
    let board_id = world.board_id()?;
    let stored = run_async(world.services.lists.list_by_board(board_id))
        .wrap_err("load lists before reorder")?;
    let dragged = usize::try_from(source)
        .ok()
        .and_then(|index| stored.get(index))
        .ok_or_else(|| eyre::eyre!("no list at position {source}"))?
        .id();
    run_async(
        world
            .services
            .lists
            .reorder(board_id, dragged, source, destination),
    )
    .wrap_err("reorder lists")?;
    Ok(())
}

#[when(r#"the task is moved to list "{list}""#)]
fn move_task(world: &mut BoardWorld, list: String) -> Result<(), eyre::Report> {
    let destination = world.list_id(&list)?;
    let task = world
        .task
        .clone()
        .ok_or_else(|| eyre::eyre!("missing task in scenario world"))?;
    let request = UpdateTaskRequest::default()
        .with_completed(task.completed())
        .with_new_list(destination);
    let moved = run_async(world.services.tasks.update(task.id(), request))
        .wrap_err("move task")?;
    world.task = Some(moved);
    Ok(())
}

#[when("the board is deleted")]
fn delete_board(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    let board_id = world.board_id()?;
    run_async(world.services.boards.delete(board_id)).wrap_err("delete board")?;
    Ok(())
}

#[when(r#"a board titled "{title}" is created without an owner"#)]
fn create_ownerless_board(world: &mut BoardWorld, title: String) {
    let result = run_async(
        world
            .services
            .boards
            .create(CreateBoardRequest::new(title, "")),
    );
    world.last_board_result = Some(result);
}
