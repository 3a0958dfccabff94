//! Bulk resident import against a mock API

mod common;

use client::usecases::u501_import_residents::{import_file, preview_file};
use client::ClientError;
use common::{user_json, TestContext};
use contracts::domain::a001_society::SocietyId;
use contracts::usecases::u501_import_residents::{ImportStatus, DEFAULT_RESIDENT_PASSWORD};
use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, ResponseTemplate};

async fn register_bodies(ctx: &TestContext) -> Vec<Value> {
    ctx.server
        .received_requests()
        .await
        .unwrap()
        .into_iter()
        .filter(|r| r.method.as_str() == "POST" && r.url.path() == "/api/users/register")
        .map(|r| serde_json::from_slice(&r.body).unwrap())
        .collect()
}

#[tokio::test]
async fn test_import_counts_success_and_failure() {
    let ctx = TestContext::logged_in("tok").await;

    Mock::given(method("POST"))
        .and(path("/api/users/register"))
        .and(body_partial_json(json!({"email": "b@x.com"})))
        .respond_with(ResponseTemplate::new(400).set_body_string("Email already in use"))
        .with_priority(1)
        .expect(1)
        .mount(&ctx.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/users/register"))
        .respond_with(ResponseTemplate::new(201).set_body_json(user_json(11, "A", "a@x.com")))
        .expect(1)
        .mount(&ctx.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/users/society/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            user_json(11, "A", "a@x.com")
        ])))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let file = ctx.write_file("residents.csv", "FullName,Email\nA,a@x.com\n,b@x.com\n");
    let report = import_file(&ctx.client, SocietyId(1), &file).await.unwrap();

    assert_eq!(report.outcome.succeeded, 1);
    assert_eq!(report.outcome.failed, 1);
    assert_eq!(
        report.outcome.status().to_string(),
        "Upload Complete! Success: 1, Failed: 1"
    );
    assert_eq!(report.residents.as_ref().map(|r| r.len()), Ok(1));

    let failed: Vec<_> = report.outcome.failures().collect();
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0].row_number, 2);
    assert_eq!(failed[0].email.as_deref(), Some("b@x.com"));
    assert!(failed[0]
        .error
        .as_deref()
        .unwrap_or_default()
        .contains("Email already in use"));

    let bodies = register_bodies(&ctx).await;
    assert_eq!(bodies.len(), 2);
    assert_eq!(bodies[0]["fullName"], "A");
    assert_eq!(bodies[1]["fullName"], "Unknown");
    for body in &bodies {
        assert_eq!(body["password"], DEFAULT_RESIDENT_PASSWORD);
        assert_eq!(body["role"], "RESIDENT");
        assert_eq!(body["societyId"], 1);
    }
}

#[tokio::test]
async fn test_rows_are_sent_in_file_order() {
    let ctx = TestContext::logged_in("tok").await;

    Mock::given(method("POST"))
        .and(path("/api/users/register"))
        .respond_with(ResponseTemplate::new(200))
        .expect(4)
        .mount(&ctx.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/users/society/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&ctx.server)
        .await;

    let file = ctx.write_file(
        "residents.csv",
        "name,email address,Flat Number,mobile,role\n\
         Asha,asha@x.com,A-1,900,resident\n\
         Bilal,bilal@x.com,A-2,901,guard\n\
         Chen,chen@x.com,B-7,902,\n\
         Dev,dev@x.com,C-3,903,vendor\n",
    );
    let report = import_file(&ctx.client, SocietyId(1), &file).await.unwrap();
    assert_eq!(report.outcome.total(), 4);
    assert_eq!(report.outcome.succeeded, 4);

    let bodies = register_bodies(&ctx).await;
    let emails: Vec<_> = bodies.iter().map(|b| b["email"].as_str().unwrap()).collect();
    assert_eq!(emails, ["asha@x.com", "bilal@x.com", "chen@x.com", "dev@x.com"]);
    let roles: Vec<_> = bodies.iter().map(|b| b["role"].as_str().unwrap()).collect();
    assert_eq!(roles, ["RESIDENT", "GUARD", "RESIDENT", "VENDOR"]);
    assert_eq!(bodies[2]["flatNo"], "B-7");
    assert_eq!(bodies[3]["phoneNumber"], "903");
}

#[tokio::test]
async fn test_parse_error_sends_nothing() {
    let ctx = TestContext::logged_in("tok").await;

    let file = ctx.write_file("broken.csv", "FullName,Email\nA,a@x.com,extra\n");
    let err = import_file(&ctx.client, SocietyId(1), &file)
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Import(_)));
    assert!(err.to_string().starts_with("Error parsing CSV: line 2"));
    assert!(ctx.server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_refresh_failure_does_not_fail_import() {
    let ctx = TestContext::logged_in("tok").await;

    Mock::given(method("POST"))
        .and(path("/api/users/register"))
        .respond_with(ResponseTemplate::new(201))
        .mount(&ctx.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/users/society/1"))
        .respond_with(ResponseTemplate::new(503).set_body_string("down for maintenance"))
        .mount(&ctx.server)
        .await;

    let file = ctx.write_file("residents.csv", "FullName,Email\nA,a@x.com\n");
    let report = import_file(&ctx.client, SocietyId(1), &file).await.unwrap();

    assert_eq!(report.outcome.status(), ImportStatus::Complete { succeeded: 1, failed: 0 });
    assert!(report.residents.unwrap_err().contains("503"));
}

#[tokio::test]
async fn test_header_only_file_registers_nobody() {
    let ctx = TestContext::logged_in("tok").await;

    Mock::given(method("GET"))
        .and(path("/api/users/society/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&ctx.server)
        .await;

    let file = ctx.write_file("empty.csv", "FullName,Email,Role,FlatNo,Phone\n");
    let report = import_file(&ctx.client, SocietyId(1), &file).await.unwrap();

    assert_eq!(report.outcome.total(), 0);
    assert!(register_bodies(&ctx).await.is_empty());
}

#[tokio::test]
async fn test_dry_run_makes_no_requests() {
    let ctx = TestContext::logged_in("tok").await;

    let file = ctx.write_file("residents.csv", "Email\na@x.com\nb@x.com\n");
    let preview = preview_file(&ctx.client, SocietyId(4), &file)
        .await
        .unwrap();

    assert_eq!(preview.tasks.len(), 2);
    assert_eq!(preview.tasks[1].request.full_name, "Unknown");
    assert_eq!(preview.tasks[1].request.society_id, SocietyId(4));
    assert_eq!(preview.missing_fields.len(), 4);
    assert!(ctx.server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_missing_file_is_an_io_error() {
    let ctx = TestContext::logged_in("tok").await;
    let file = ctx.dir.path().join("nope.csv");

    let err = import_file(&ctx.client, SocietyId(1), &file)
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Io(_)));

    let err = preview_file(&ctx.client, SocietyId(1), &file)
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Io(_)));

    assert!(ctx.server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_row_of_empty_cells_is_submitted_and_fails() {
    let ctx = TestContext::logged_in("tok").await;

    Mock::given(method("POST"))
        .and(path("/api/users/register"))
        .and(body_partial_json(json!({ "email": "a@x.com" })))
        .respond_with(ResponseTemplate::new(201))
        .with_priority(1)
        .mount(&ctx.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/users/register"))
        .respond_with(ResponseTemplate::new(400).set_body_string("Email is required"))
        .mount(&ctx.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/users/society/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&ctx.server)
        .await;

    let file = ctx.write_file("residents.csv", "FullName,Email,Role\nA,a@x.com,\n,,\n   \n");
    let report = import_file(&ctx.client, SocietyId(1), &file).await.unwrap();

    assert_eq!(report.outcome.status(), ImportStatus::Complete { succeeded: 1, failed: 1 });
    let bodies = register_bodies(&ctx).await;
    assert_eq!(bodies.len(), 2);
    assert_eq!(bodies[1]["fullName"], "Unknown");
    assert_eq!(bodies[1]["role"], "RESIDENT");
    assert!(bodies[1].get("email").is_none());
}
