//! E2E tests for the analyze/suggest actions.
//!
//! Tests run against a mocked scoring API and inspect the in-memory view,
//! so no backend or terminal is needed.

use mockito::{Matcher, Server};
use serde_json::json;
use smarttask_core::{
    ActionOutcome, Dashboard, MemoryView, Presentation, Strategy, TaskApiClient, View,
    EMPTY_PLACEHOLDER,
};

fn dashboard_for(server: &Server) -> Dashboard {
    Dashboard::new(TaskApiClient::new(&server.url()).unwrap())
}

fn titles(view: &MemoryView) -> Vec<String> {
    view.results()
        .expect("results rendered")
        .cards()
        .iter()
        .map(|c| c.title.clone())
        .collect()
}

/// Test: impact strategy re-sorts the backend response (B before A).
#[tokio::test]
async fn test_analyze_impact_orders_by_score_on_importance_tie() {
    let mut server = Server::new_async().await;
    let input = r#"[{"title":"A","importance":9,"score":3},{"title":"B","importance":9,"score":7}]"#;
    let _m = server
        .mock("POST", "/api/tasks/analyze/")
        .match_body(Matcher::Json(json!({"tasks": [
            {"title": "A", "importance": 9, "score": 3},
            {"title": "B", "importance": 9, "score": 7}
        ]})))
        .with_status(200)
        .with_header("content-type", "application/json")
        // Echoed back in input order; the client must not trust it.
        .with_body(r#"{"tasks":[{"title":"A","importance":9,"score":3},{"title":"B","importance":9,"score":7}]}"#)
        .create_async()
        .await;

    let view = MemoryView::new(Strategy::Impact);
    let outcome = dashboard_for(&server).analyze(input, &view).await;

    assert_eq!(outcome, ActionOutcome::Rendered { count: 2 });
    assert_eq!(titles(&view), ["B", "A"]);
    assert_eq!(view.error(), None);
}

/// Test: a 500 leaves previous results in place and reports the status.
#[tokio::test]
async fn test_analyze_server_error_keeps_previous_results() {
    let mut healthy = Server::new_async().await;
    let _ok = healthy
        .mock("POST", "/api/tasks/analyze/")
        .with_status(200)
        .with_body(r#"{"tasks":[{"title":"Kept","score":50}]}"#)
        .create_async()
        .await;
    let mut failing = Server::new_async().await;
    let _fail = failing
        .mock("POST", "/api/tasks/analyze/")
        .with_status(500)
        .create_async()
        .await;

    let view = MemoryView::default();
    dashboard_for(&healthy).analyze(r#"[{"title":"Kept"}]"#, &view).await;
    let before = view.results();

    let outcome = dashboard_for(&failing)
        .analyze(r#"[{"title":"Other"}]"#, &view)
        .await;

    assert_eq!(outcome, ActionOutcome::RequestFailed);
    let error = view.error().unwrap();
    assert!(error.contains("500"), "error was {error}");
    assert!(error.starts_with("Failed to analyze tasks: "));
    assert_eq!(view.results(), before);
    assert_eq!(titles(&view), ["Kept"]);
}

/// Test: invalid analyze input never reaches the server.
#[tokio::test]
async fn test_analyze_invalid_json_sends_nothing() {
    let mut server = Server::new_async().await;
    let m = server
        .mock("POST", "/api/tasks/analyze/")
        .expect(0)
        .create_async()
        .await;

    let view = MemoryView::default();
    let outcome = dashboard_for(&server).analyze("[{", &view).await;

    m.assert_async().await;
    assert_eq!(outcome, ActionOutcome::InvalidInput);
    assert!(view.error().unwrap().starts_with("Invalid JSON: "));
    assert_eq!(view.results(), None);
}

/// Test: suggest tolerates unparseable input and posts an empty list.
#[tokio::test]
async fn test_suggest_with_bad_input_posts_empty_list() {
    let mut server = Server::new_async().await;
    let m = server
        .mock("POST", "/api/tasks/suggest/")
        .match_body(Matcher::Json(json!({"tasks": []})))
        .with_status(200)
        .with_body(r#"{"tasks":[{"title":"Finish assignment report","score":95}]}"#)
        .create_async()
        .await;

    let view = MemoryView::default();
    let outcome = dashboard_for(&server).suggest("{\"tasks\": 3}", &view).await;

    m.assert_async().await;
    assert_eq!(outcome, ActionOutcome::Rendered { count: 1 });
    assert_eq!(titles(&view), ["Finish assignment report"]);
    // The parse problem stays visible next to the suggestions.
    assert_eq!(
        view.error().as_deref(),
        Some("JSON must be an array of tasks or an object with a 'tasks' array.")
    );
}

/// Test: suggest failures use their own prefix.
#[tokio::test]
async fn test_suggest_server_error_prefix() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("POST", "/api/tasks/suggest/")
        .with_status(404)
        .create_async()
        .await;

    let view = MemoryView::default();
    let outcome = dashboard_for(&server).suggest("", &view).await;

    assert_eq!(outcome, ActionOutcome::RequestFailed);
    assert_eq!(
        view.error().as_deref(),
        Some("Failed to get suggestions: Server error: 404")
    );
}

/// Test: a response without `tasks` renders the placeholder.
#[tokio::test]
async fn test_missing_tasks_field_renders_placeholder() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("POST", "/api/tasks/analyze/")
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let view = MemoryView::default();
    let outcome = dashboard_for(&server).analyze("[]", &view).await;

    assert_eq!(outcome, ActionOutcome::Rendered { count: 0 });
    assert_eq!(view.results(), Some(Presentation::Placeholder(EMPTY_PLACEHOLDER)));
}

/// Test: malformed JSON in a 200 response is reported, results untouched.
#[tokio::test]
async fn test_malformed_response_body_is_reported() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("POST", "/api/tasks/analyze/")
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    let view = MemoryView::default();
    let outcome = dashboard_for(&server).analyze("[]", &view).await;

    assert_eq!(outcome, ActionOutcome::RequestFailed);
    assert!(view
        .error()
        .unwrap()
        .starts_with("Failed to analyze tasks: Invalid JSON in response: "));
    assert_eq!(view.results(), None);
}

/// Test: each action clears an earlier error before it runs.
#[tokio::test]
async fn test_error_slot_is_cleared_on_next_action() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("POST", "/api/tasks/analyze/")
        .with_status(200)
        .with_body(r#"{"tasks":[]}"#)
        .create_async()
        .await;

    let view = MemoryView::default();
    view.show_error("stale");
    let outcome = dashboard_for(&server).analyze("", &view).await;

    assert!(outcome.is_rendered());
    assert_eq!(view.error(), None);
}

/// Test: every strategy re-sorts the backend order.
#[tokio::test]
async fn test_each_strategy_resorts_backend_order() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("POST", "/api/tasks/analyze/")
        .with_status(200)
        .with_body(
            json!({"tasks": [
                {"title": "big", "score": 90, "importance": 6, "estimated_hours": 6, "due_date": "2025-02-01"},
                {"title": "quick", "score": 70, "importance": 4, "estimated_hours": 1},
                {"title": "vital", "score": 80, "importance": 10, "estimated_hours": 3, "due_date": "2025-01-10"}
            ]})
            .to_string(),
        )
        .create_async()
        .await;

    let dashboard = dashboard_for(&server);
    let cases = [
        (Strategy::Balanced, ["big", "vital", "quick"]),
        (Strategy::Fast, ["quick", "vital", "big"]),
        (Strategy::Impact, ["vital", "big", "quick"]),
        (Strategy::Deadline, ["vital", "big", "quick"]),
    ];
    for (strategy, expected) in cases {
        let view = MemoryView::new(strategy);
        dashboard.analyze("[]", &view).await;
        assert_eq!(titles(&view), expected, "strategy {strategy}");
    }
}
