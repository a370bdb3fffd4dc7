mod support;

use std::collections::HashSet;

use serde_json::{Map, Value, json};
use zerodb_core::catalog::{self, RENEW_TOKEN_TOOL};

use support::{FakeZeroDb, PROJECT_ID};

fn args(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object arguments, got {other}"),
    }
}

#[tokio::test]
async fn advertises_every_catalog_tool_once() {
    let api = FakeZeroDb::start().await;
    let server = api.server();

    let tools = server.tools();
    let names: HashSet<String> = tools.iter().map(|tool| tool.name.to_string()).collect();

    assert_eq!(tools.len(), catalog::TOOLS.len());
    assert_eq!(names.len(), catalog::TOOLS.len());
    assert!(names.contains(RENEW_TOKEN_TOOL));
    assert!(names.contains("zerodb_search_vectors"));
}

#[tokio::test]
async fn unknown_tool_is_a_hard_error() {
    let api = FakeZeroDb::start().await;
    let server = api.server();

    let err = server
        .dispatch("zerodb_does_not_exist", Map::new())
        .await
        .expect_err("unknown tools are rejected");

    assert!(err.message.contains("unknown tool: zerodb_does_not_exist"));
    assert_eq!(api.login_calls(), 0);
}

#[tokio::test]
async fn remote_tool_authenticates_once_then_executes() {
    let api = FakeZeroDb::start().await;
    let server = api.server();

    let first = server
        .dispatch("zerodb_store_memory", args(json!({ "content": "hello", "role": "user" })))
        .await
        .expect("known tool");
    let second = server
        .dispatch("zerodb_get_project", args(json!({ "project_id": "other-project" })))
        .await
        .expect("known tool");

    assert!(!first.is_error());
    assert!(!second.is_error());
    assert_eq!(api.login_calls(), 1);

    let executions = api.executions();
    assert_eq!(executions[0]["operation"], json!("store_memory"));
    assert_eq!(executions[0]["params"]["project_id"], json!(PROJECT_ID));
    assert_eq!(executions[1]["params"]["project_id"], json!("other-project"));
}

#[tokio::test]
async fn every_remote_tool_reaches_its_operation() {
    let api = FakeZeroDb::start().await;
    let server = api.server();

    for spec in catalog::TOOLS {
        let Some(operation) = spec.remote_operation() else {
            continue;
        };
        let envelope = server
            .dispatch(spec.name, Map::new())
            .await
            .expect("catalog tools are routable");
        let result: Value = serde_json::from_str(envelope.text()).expect("JSON result text");
        assert_eq!(result, json!({ "operation": operation }), "{}", spec.name);
    }

    assert_eq!(api.executions().len(), 60);
    assert_eq!(api.login_calls(), 1);
}

#[tokio::test]
async fn authentication_failure_is_a_soft_error() {
    let api = FakeZeroDb::start().await;
    api.reject_logins();
    let server = api.server();

    let envelope = server
        .dispatch("zerodb_list_tables", Map::new())
        .await
        .expect("known tool");

    assert!(envelope.is_error());
    assert_eq!(
        envelope.text(),
        "Error executing zerodb_list_tables: authentication failed: invalid credentials"
    );
    assert!(api.executions().is_empty());

    let result = server
        .call("zerodb_list_tables", None)
        .await
        .expect("known tool");
    assert_eq!(result.is_error, Some(true));
}

#[tokio::test]
async fn renew_tool_bypasses_the_executor() {
    let api = FakeZeroDb::start().await;
    let server = api.server();

    let envelope = server
        .dispatch(RENEW_TOKEN_TOOL, Map::new())
        .await
        .expect("renew tool is known");

    assert!(!envelope.is_error());
    assert!(envelope.text().starts_with("Token renewed successfully. Expires at: "));
    assert_eq!(api.login_calls(), 1);
    assert!(api.executions().is_empty());

    api.reject_logins();
    let failed = server
        .dispatch(RENEW_TOKEN_TOOL, Map::new())
        .await
        .expect("renew tool is known");
    assert!(failed.is_error());
    assert!(failed.text().starts_with("Token renewal failed: "));
}

#[tokio::test]
async fn concurrent_calls_all_complete() {
    let api = FakeZeroDb::start().await;
    let server = api.server();

    let (left, right) = tokio::join!(
        server.dispatch("zerodb_list_files", Map::new()),
        server.dispatch("zerodb_list_events", Map::new()),
    );

    assert!(!left.expect("known tool").is_error());
    assert!(!right.expect("known tool").is_error());
    assert!((1..=2).contains(&api.login_calls()));
    assert_eq!(api.executions().len(), 2);
}
