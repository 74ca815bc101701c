//! Budget check tests
mod common;

use common::{get_test_handler, persisted_json, reopen_handler};
use goal_tracker::StatusColor;

#[tokio::test]
async fn test_over_budget_reports_overage_in_red() {
    let (handler, _dir) = get_test_handler();

    let result = handler.handle_check_budget("20000".to_string()).await.unwrap();
    assert_eq!(
        result,
        "You have exceeded the ₦18,000 food budget limit by ₦2,000. (status: red)"
    );
    assert_eq!(handler.budget_status().unwrap().color, StatusColor::red);
    assert_eq!(persisted_json(&handler)["weeklyFoodBudget"], "20000");
}

#[tokio::test]
async fn test_budget_at_limit_is_within() {
    let (handler, _dir) = get_test_handler();

    let result = handler.handle_check_budget("18000".to_string()).await.unwrap();
    assert!(result.starts_with("Good job!"));
    assert!(result.ends_with("(status: green)"));
    assert_eq!(persisted_json(&handler)["weeklyFoodBudget"], "18000");
}

#[tokio::test]
async fn test_just_over_limit() {
    let (handler, _dir) = get_test_handler();

    let result = handler
        .handle_check_budget("18000.01".to_string())
        .await
        .unwrap();
    assert!(result.contains("by ₦0.01."));
}

#[tokio::test]
async fn test_invalid_budget_is_not_persisted() {
    let (handler, _dir) = get_test_handler();
    handler.handle_check_budget("15000".to_string()).await.unwrap();

    for input in ["abc", "0", "-10"] {
        let result = handler.handle_check_budget(input.to_string()).await.unwrap();
        assert_eq!(result, "Please enter a valid budget amount. (status: red)");
        assert_eq!(handler.budget_status().unwrap().color, StatusColor::red);
    }

    assert_eq!(handler.state().budget(), "15000");
    assert_eq!(persisted_json(&handler)["weeklyFoodBudget"], "15000");
}

#[tokio::test]
async fn test_invalid_budget_on_empty_state_saves_nothing() {
    let (handler, _dir) = get_test_handler();
    handler.handle_check_budget("nope".to_string()).await.unwrap();
    assert!(handler.storage().read_raw().unwrap().is_none());
}

#[tokio::test]
async fn test_stored_budget_is_rechecked_on_restart() {
    let (handler, dir) = get_test_handler();
    handler.handle_check_budget("12000".to_string()).await.unwrap();

    let reopened = reopen_handler(&dir);
    let status = reopened.budget_status().unwrap();
    assert_eq!(status.color, StatusColor::green);

    let overview = reopened.handle_list(None, None).await.unwrap();
    assert!(overview.contains("Amount: 12000"));
    assert!(overview.contains("Status (green): Good job!"));
}
