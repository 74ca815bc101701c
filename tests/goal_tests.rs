//! Goal list operation tests
mod common;

use common::{get_test_handler, persisted_json, reopen_handler};
use goal_tracker::*;

#[tokio::test]
async fn test_add_goal_then_check_it() {
    let (handler, _dir) = get_test_handler();

    let result = handler
        .handle_add_goal("academic".to_string(), "Finish thesis".to_string())
        .await
        .unwrap();
    assert!(result.contains("Finish thesis"));
    assert!(result.contains("progress: 0%"));

    let state = handler.state();
    let goals = state.goals(Category::Academic);
    assert_eq!(goals.len(), 1);
    assert!(!goals[0].done);
    assert!(goals[0].time.starts_with(" ("));
    assert_eq!(state.progress(Category::Academic), 0);

    let result = handler
        .handle_toggle_goal("academic".to_string(), 1)
        .await
        .unwrap();
    assert!(result.contains("marked done"));
    assert!(result.contains("progress: 100%"));

    let json = persisted_json(&handler);
    assert_eq!(json["academic"][0]["done"], true);
    assert_eq!(json["academic"][0]["text"], "Finish thesis");
}

#[tokio::test]
async fn test_add_blank_goal_is_rejected_without_saving() {
    let (handler, _dir) = get_test_handler();

    let result = handler
        .handle_add_goal("personal".to_string(), "   ".to_string())
        .await;
    assert!(result.is_err());
    assert_eq!(handler.state(), AppState::new());
    assert!(handler.storage().read_raw().unwrap().is_none());
}

#[tokio::test]
async fn test_unknown_category_is_rejected() {
    let (handler, _dir) = get_test_handler();

    let result = handler
        .handle_add_goal("fitness".to_string(), "Run".to_string())
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_edit_goal_keeps_timestamp() {
    let (handler, _dir) = get_test_handler();
    handler
        .handle_add_goal("spiritual".to_string(), "Pray".to_string())
        .await
        .unwrap();
    let time = handler.state().goals(Category::Spiritual)[0].time.clone();

    handler
        .handle_edit_goal("spiritual".to_string(), 1, "  Pray every morning ".to_string())
        .await
        .unwrap();

    let json = persisted_json(&handler);
    assert_eq!(json["spiritual"][0]["text"], "Pray every morning");
    assert_eq!(json["spiritual"][0]["time"], time.as_str());
}

#[tokio::test]
async fn test_edit_goal_with_blank_text_changes_nothing() {
    let (handler, _dir) = get_test_handler();
    handler
        .handle_add_goal("spiritual".to_string(), "Pray".to_string())
        .await
        .unwrap();

    let result = handler
        .handle_edit_goal("spiritual".to_string(), 1, "  ".to_string())
        .await;
    assert!(result.is_err());
    assert_eq!(persisted_json(&handler)["spiritual"][0]["text"], "Pray");
}

#[tokio::test]
async fn test_update_notes_is_saved() {
    let (handler, _dir) = get_test_handler();
    handler
        .handle_add_goal("financial".to_string(), "Save 10%".to_string())
        .await
        .unwrap();

    handler
        .handle_update_notes("financial".to_string(), 1, "Transfer on payday".to_string())
        .await
        .unwrap();
    assert_eq!(
        persisted_json(&handler)["financial"][0]["notes"],
        "Transfer on payday"
    );

    handler
        .handle_update_notes("financial".to_string(), 1, String::new())
        .await
        .unwrap();
    assert_eq!(persisted_json(&handler)["financial"][0]["notes"], "");
}

#[tokio::test]
async fn test_delete_goal_updates_progress() {
    let (handler, _dir) = get_test_handler();
    for text in ["A", "B"] {
        handler
            .handle_add_goal("personal".to_string(), text.to_string())
            .await
            .unwrap();
    }
    handler
        .handle_toggle_goal("personal".to_string(), 1)
        .await
        .unwrap();
    assert_eq!(handler.state().progress(Category::Personal), 50);

    let result = handler
        .handle_delete_goal("personal".to_string(), 2)
        .await
        .unwrap();
    assert!(result.contains("progress: 100%"));

    let result = handler
        .handle_delete_goal("personal".to_string(), 1)
        .await
        .unwrap();
    assert!(result.contains("progress: 0%"));
    assert_eq!(persisted_json(&handler)["personal"], serde_json::json!([]));
}

#[tokio::test]
async fn test_positions_out_of_range() {
    let (handler, _dir) = get_test_handler();
    handler
        .handle_add_goal("academic".to_string(), "Only goal".to_string())
        .await
        .unwrap();

    assert!(handler.handle_toggle_goal("academic".to_string(), 0).await.is_err());
    assert!(handler.handle_toggle_goal("academic".to_string(), 2).await.is_err());
    assert!(handler.handle_delete_goal("spiritual".to_string(), 1).await.is_err());
}

#[tokio::test]
async fn test_goals_survive_restart() {
    let (handler, dir) = get_test_handler();
    handler
        .handle_add_goal("academic".to_string(), "Finish thesis".to_string())
        .await
        .unwrap();
    handler
        .handle_toggle_goal("academic".to_string(), 1)
        .await
        .unwrap();

    let reopened = reopen_handler(&dir);
    assert_eq!(reopened.state(), handler.state());
}

#[tokio::test]
async fn test_list_shows_goals_and_progress() {
    let (handler, _dir) = get_test_handler();
    handler
        .handle_add_goal("academic".to_string(), "Finish thesis".to_string())
        .await
        .unwrap();
    handler
        .handle_update_notes("academic".to_string(), 1, "chapter 4".to_string())
        .await
        .unwrap();

    let list = handler
        .handle_list(Some("academic".to_string()), None)
        .await
        .unwrap();
    assert!(list.contains("progress: 0%"));
    assert!(list.contains("1. [ ] Finish thesis"));
    assert!(list.contains("Notes: chapter 4"));

    let list = handler
        .handle_list(Some("academic".to_string()), Some(true))
        .await
        .unwrap();
    assert!(!list.contains("Notes:"));

    let overview = handler.handle_list(None, None).await.unwrap();
    assert!(overview.contains("Personal Care & Lifestyle"));
    assert!(overview.contains("Academic Timetable"));
}
