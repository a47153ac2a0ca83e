//! Board-scoped list routes, including reordering.

use super::helpers::{Api, BASE, api, id_of, ids_of};
use axum::http::{Method, StatusCode};
use corkboard::http::error::INTERNAL_ERROR_MESSAGE;
use rstest::rstest;
use serde_json::json;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_lists_are_linked_and_listed(api: Api) -> Result<(), eyre::Report> {
    let board = api.create_board("Sprint").await?;
    let todo = api.create_list(&board, "Todo").await?;
    let done = api.create_list(&board, "Done").await?;

    let (status, lists) = api
        .send(Method::GET, &format!("{BASE}/boards/{board}/lists"), None)
        .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids_of(&lists)?, vec![todo.clone(), done.clone()]);

    let (_, stored) = api
        .send(Method::GET, &format!("{BASE}/boards/{board}"), None)
        .await?;
    assert_eq!(stored.get("lists"), Some(&json!([todo, done])));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_details_are_served(api: Api) -> Result<(), eyre::Report> {
    let board = api.create_board("Sprint").await?;
    let todo = api.create_list(&board, "Todo").await?;

    let (status, list) = api
        .send(
            Method::GET,
            &format!("{BASE}/boards/{board}/lists/{todo}"),
            None,
        )
        .await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(id_of(&list)?, todo);
    assert_eq!(list.get("board"), Some(&json!(board)));
    assert_eq!(list.get("tasks"), Some(&json!([])));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn board_without_lists_is_not_found(api: Api) -> Result<(), eyre::Report> {
    let board = api.create_board("Sprint").await?;

    let (status, body) = api
        .send(Method::GET, &format!("{BASE}/boards/{board}/lists"), None)
        .await?;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "Lists not found" }));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_on_missing_board_is_not_found(api: Api) -> Result<(), eyre::Report> {
    let missing = uuid::Uuid::new_v4();

    let (status, body) = api
        .send(
            Method::POST,
            &format!("{BASE}/boards/{missing}/lists"),
            Some(json!({ "title": "Todo" })),
        )
        .await?;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "Board not found" }));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn rename_changes_only_the_title(api: Api) -> Result<(), eyre::Report> {
    let board = api.create_board("Sprint").await?;
    let todo = api.create_list(&board, "Todo").await?;

    let (status, renamed) = api
        .send(
            Method::PUT,
            &format!("{BASE}/boards/{board}/lists/{todo}"),
            Some(json!({ "title": "Doing" })),
        )
        .await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(renamed.get("title"), Some(&json!("Doing")));
    assert_eq!(renamed.get("board"), Some(&json!(board)));
    Ok(())
}

#[rstest]
#[case(json!({}), json!("Todo"))]
#[case(json!({ "title": null }), json!("Todo"))]
#[case(json!({ "title": 42 }), json!("42"))]
#[tokio::test(flavor = "multi_thread")]
async fn rename_accepts_loose_titles(
    api: Api,
    #[case] body: serde_json::Value,
    #[case] expected: serde_json::Value,
) -> Result<(), eyre::Report> {
    let board = api.create_board("Sprint").await?;
    let todo = api.create_list(&board, "Todo").await?;

    let (status, renamed) = api
        .send(
            Method::PUT,
            &format!("{BASE}/boards/{board}/lists/{todo}"),
            Some(body),
        )
        .await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(id_of(&renamed)?, todo);
    assert_eq!(renamed.get("title"), Some(&expected));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn rename_of_missing_list_without_title_is_not_found(
    api: Api,
) -> Result<(), eyre::Report> {
    let board = api.create_board("Sprint").await?;
    let missing = uuid::Uuid::new_v4();

    let (status, body) = api
        .send(
            Method::PUT,
            &format!("{BASE}/boards/{board}/lists/{missing}"),
            Some(json!({})),
        )
        .await?;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "List not found" }));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reorder_moves_the_first_list_last(api: Api) -> Result<(), eyre::Report> {
    let board = api.create_board("Sprint").await?;
    let l0 = api.create_list(&board, "L0").await?;
    let l1 = api.create_list(&board, "L1").await?;
    let l2 = api.create_list(&board, "L2").await?;

    let (status, body) = api
        .send(
            Method::PUT,
            &format!("{BASE}/boards/{board}/lists/{l0}/reorder"),
            Some(json!({ "sourceIndex": 0, "destinationIndex": 2 })),
        )
        .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("Lists reordered successfully"));

    let (_, lists) = api
        .send(Method::GET, &format!("{BASE}/boards/{board}/lists"), None)
        .await?;
    assert_eq!(ids_of(&lists)?, vec![l1, l2, l0]);
    let orders: Vec<_> = lists
        .as_array()
        .into_iter()
        .flatten()
        .map(|list| list.get("order").cloned())
        .collect();
    assert_eq!(orders, vec![Some(json!(0)), Some(json!(1)), Some(json!(2))]);
    Ok(())
}

#[rstest]
#[case(json!({ "destinationIndex": 2 }))]
#[case(json!({ "sourceIndex": null, "destinationIndex": 2 }))]
#[case(json!({ "sourceIndex": 0.0, "destinationIndex": 2.0 }))]
#[case(json!({ "sourceIndex": "0", "destinationIndex": 2.9 }))]
#[tokio::test(flavor = "multi_thread")]
async fn reorder_coerces_loose_indices(
    api: Api,
    #[case] body: serde_json::Value,
) -> Result<(), eyre::Report> {
    let board = api.create_board("Sprint").await?;
    let l0 = api.create_list(&board, "L0").await?;
    let l1 = api.create_list(&board, "L1").await?;
    let l2 = api.create_list(&board, "L2").await?;

    let (status, _) = api
        .send(
            Method::PUT,
            &format!("{BASE}/boards/{board}/lists/{l0}/reorder"),
            Some(body),
        )
        .await?;
    assert_eq!(status, StatusCode::OK);

    let (_, lists) = api
        .send(Method::GET, &format!("{BASE}/boards/{board}/lists"), None)
        .await?;
    assert_eq!(ids_of(&lists)?, vec![l1, l2, l0]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reorder_from_past_the_end_is_an_internal_error(api: Api) -> Result<(), eyre::Report> {
    let board = api.create_board("Sprint").await?;
    let l0 = api.create_list(&board, "L0").await?;
    let l1 = api.create_list(&board, "L1").await?;
    let l2 = api.create_list(&board, "L2").await?;

    let (status, body) = api
        .send(
            Method::PUT,
            &format!("{BASE}/boards/{board}/lists/{l0}/reorder"),
            Some(json!({ "sourceIndex": 3, "destinationIndex": 1 })),
        )
        .await?;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "message": INTERNAL_ERROR_MESSAGE }));

    let (_, lists) = api
        .send(Method::GET, &format!("{BASE}/boards/{board}/lists"), None)
        .await?;
    assert_eq!(ids_of(&lists)?, vec![l0, l1, l2]);
    let first_order = lists.get(0).and_then(|list| list.get("order")).cloned();
    assert_eq!(first_order, Some(json!(0)));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_unlinks_the_list(api: Api) -> Result<(), eyre::Report> {
    let board = api.create_board("Sprint").await?;
    let todo = api.create_list(&board, "Todo").await?;
    let done = api.create_list(&board, "Done").await?;

    let (status, body) = api
        .send(
            Method::DELETE,
            &format!("{BASE}/boards/{board}/lists/{todo}"),
            None,
        )
        .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("List deleted successfully"));

    let (_, stored) = api
        .send(Method::GET, &format!("{BASE}/boards/{board}"), None)
        .await?;
    assert_eq!(stored.get("lists"), Some(&json!([done])));
    Ok(())
}
