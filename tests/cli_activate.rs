mod common;

use common::{TEST_API_KEY, TestContext};
use mockito::Matcher;
use predicates::prelude::*;

#[test]
fn activate_reports_not_found_and_continues() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let a = server
        .mock("POST", "/api/v1/workflows/a/activate")
        .match_header("x-n8n-api-key", TEST_API_KEY)
        .match_header("accept", "application/json")
        .with_status(200)
        .with_body(r#"{"id":"a","active":true}"#)
        .expect(1)
        .create();
    let b = server
        .mock("POST", "/api/v1/workflows/b/activate")
        .with_status(404)
        .with_body(r#"{"message":"Not Found"}"#)
        .expect(1)
        .create();

    ctx.write_ids(r#"["a", "b"]"#);

    ctx.cli(&server.url())
        .arg("activate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Workflow ID 'a' activated successfully."))
        .stdout(predicate::str::contains("Total workflows attempted: 2"))
        .stdout(predicate::str::contains("Workflows activated successfully: 1"))
        .stdout(predicate::str::contains("Workflows failed to activate: 1"))
        .stderr(predicate::str::contains("Workflow with ID 'b' not found (404)"));

    a.assert();
    b.assert();
}

#[test]
fn activate_before_deploy_asks_to_run_deploy_first() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let any = server.mock("POST", Matcher::Any).expect(0).create();

    ctx.cli(&server.url())
        .arg("activate")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Workflow IDs file not found"))
        .stderr(predicate::str::contains("Run 'n8n-deploy deploy' first"));

    any.assert();
}

#[test]
fn activate_with_empty_list_has_nothing_to_do() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let any = server.mock("POST", Matcher::Any).expect(0).create();
    ctx.write_ids("[]");

    ctx.cli(&server.url())
        .args(["activate", "--strict"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No workflow IDs found in the file to activate."));

    any.assert();
}

#[test]
fn activate_with_malformed_list_stops() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let any = server.mock("POST", Matcher::Any).expect(0).create();
    ctx.write_ids(r#"{"ids": ["a"]}"#);

    ctx.cli(&server.url())
        .arg("activate")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse JSON from"))
        .stderr(predicate::str::contains("valid JSON array of workflow IDs"));

    any.assert();
}

#[test]
fn activate_rejected_request_shows_body_and_strict_fails() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let _a = server
        .mock("POST", "/api/v1/workflows/a/activate")
        .with_status(400)
        .with_body(r#"{"message":"Workflow has no node to start the workflow"}"#)
        .create();
    ctx.write_ids(r#"["a"]"#);

    ctx.cli(&server.url())
        .args(["activate", "--strict"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("might already be active"))
        .stderr(predicate::str::contains("no node to start the workflow"));
}

#[test]
fn deploy_then_activate_uses_persisted_ids() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let _create = server
        .mock("POST", "/api/v1/workflows")
        .with_status(200)
        .with_body(r#"{"id":"wf-77","name":"chat"}"#)
        .expect(1)
        .create();
    let activate = server
        .mock("POST", "/api/v1/workflows/wf-77/activate")
        .with_status(200)
        .expect(1)
        .create();

    ctx.write_workflow("chat.json", r#"{"name":"chat"}"#);

    ctx.cli(&server.url()).args(["deploy", "chat.json"]).assert().success();
    ctx.cli(&server.url())
        .arg("activate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Workflows activated successfully: 1"));

    activate.assert();
}
