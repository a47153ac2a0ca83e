//! Board document tests against the in-memory store.

use super::helpers::{board, store, title};
use corkboard::kanban::{
    adapters::memory::InMemoryKanbanStore,
    domain::{BoardChanges, BoardId, ListId},
    ports::{BoardRepository, KanbanRepositoryError},
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn duplicate_board_id_is_rejected(store: InMemoryKanbanStore) -> Result<(), eyre::Report> {
    let sprint = board("Sprint")?;
    store.insert_board(&sprint).await?;

    let result = store.insert_board(&sprint).await;

    eyre::ensure!(
        matches!(result, Err(KanbanRepositoryError::DuplicateId(id)) if id == sprint.id().into_inner()),
        "expected duplicate id error, got {result:?}"
    );
    eyre::ensure!(store.find_boards().await?.len() == 1, "expected one board");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_applies_only_supplied_fields(
    store: InMemoryKanbanStore,
) -> Result<(), eyre::Report> {
    let sprint = board("Sprint")?;
    store.insert_board(&sprint).await?;

    let renamed = store
        .update_board(
            sprint.id(),
            &BoardChanges {
                title: Some(title("Renamed")?),
                description: None,
            },
        )
        .await?
        .ok_or_else(|| eyre::eyre!("board should exist"))?;
    let described = store
        .update_board(
            sprint.id(),
            &BoardChanges {
                title: None,
                description: Some("Notes".to_owned()),
            },
        )
        .await?
        .ok_or_else(|| eyre::eyre!("board should exist"))?;

    assert_eq!(renamed.title().as_str(), "Renamed");
    assert_eq!(renamed.description(), None);
    assert_eq!(described.title().as_str(), "Renamed");
    assert_eq!(described.description(), Some("Notes"));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn push_and_pull_maintain_the_list_sequence(
    store: InMemoryKanbanStore,
) -> Result<(), eyre::Report> {
    let sprint = board("Sprint")?;
    store.insert_board(&sprint).await?;
    let (first, second) = (ListId::new(), ListId::new());

    eyre::ensure!(store.push_list(sprint.id(), first).await?, "push first");
    eyre::ensure!(store.push_list(sprint.id(), second).await?, "push second");
    eyre::ensure!(store.pull_list(sprint.id(), first).await?, "pull first");

    let stored = store
        .find_board(sprint.id())
        .await?
        .ok_or_else(|| eyre::eyre!("board should exist"))?;
    assert_eq!(stored.lists(), &[second]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn writes_against_missing_boards_report_no_match(
    store: InMemoryKanbanStore,
) -> Result<(), eyre::Report> {
    let missing = BoardId::new();

    assert!(!store.push_list(missing, ListId::new()).await?);
    assert!(!store.pull_list(missing, ListId::new()).await?);
    assert!(!store.delete_board(missing).await?);
    assert!(
        store
            .update_board(missing, &BoardChanges::default())
            .await?
            .is_none()
    );
    Ok(())
}
