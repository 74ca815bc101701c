//! Timetable operation tests
mod common;

use common::{get_test_handler, handler_with_raw_state, persisted_json};

#[tokio::test]
async fn test_add_then_delete_timetable_entry() {
    let (handler, _dir) = get_test_handler();

    let result = handler
        .handle_add_timetable(
            "Monday".to_string(),
            "Algorithms".to_string(),
            "10:00".to_string(),
        )
        .await
        .unwrap();
    assert!(result.contains("Monday - Algorithms - 10:00"));

    let state = handler.state();
    assert_eq!(state.timetable().len(), 1);
    assert_eq!(state.timetable()[0].day, "Monday");
    assert_eq!(state.timetable()[0].subject, "Algorithms");
    assert_eq!(state.timetable()[0].time, "10:00");

    let list = handler.handle_list(None, None).await.unwrap();
    assert!(list.contains("1. Monday - Algorithms - 10:00"));

    handler.handle_delete_timetable(1).await.unwrap();
    assert!(handler.state().timetable().is_empty());
    assert_eq!(
        persisted_json(&handler)["academicTimetable"],
        serde_json::json!([])
    );
}

#[tokio::test]
async fn test_incomplete_timetable_entry_is_rejected() {
    let (handler, _dir) = get_test_handler();

    let result = handler
        .handle_add_timetable("Monday".to_string(), " ".to_string(), "10:00".to_string())
        .await;
    assert!(result.is_err());
    assert!(handler.state().timetable().is_empty());
    assert!(handler.storage().read_raw().unwrap().is_none());
}

#[tokio::test]
async fn test_duplicate_rows_are_allowed() {
    let (handler, _dir) = get_test_handler();
    for _ in 0..2 {
        handler
            .handle_add_timetable("Tue".to_string(), "Physics".to_string(), "9:00".to_string())
            .await
            .unwrap();
    }
    assert_eq!(handler.state().timetable().len(), 2);

    handler.handle_delete_timetable(2).await.unwrap();
    assert_eq!(handler.state().timetable().len(), 1);
    assert!(handler.handle_delete_timetable(2).await.is_err());
}

#[tokio::test]
async fn test_non_array_stored_timetable_loads_empty() {
    let handler = handler_with_raw_state(r#"{"academicTimetable":"Monday"}"#);
    assert!(handler.state().timetable().is_empty());
}
