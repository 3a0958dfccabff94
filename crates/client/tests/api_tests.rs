//! HTTP-level tests of the authenticated client

mod common;

use client::system::auth;
use client::{ApiError, ClientError};
use common::{user_json, TestContext};
use contracts::domain::a001_society::{SocietyId, SocietyUpdateDto};
use contracts::domain::a002_user::UserId;
use contracts::domain::a003_complaint::{ComplaintId, ComplaintStatus};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

// =============================================================================
// Bearer token
// =============================================================================

#[tokio::test]
async fn test_bearer_header_sent_when_logged_in() {
    let ctx = TestContext::logged_in("tok-123").await;

    Mock::given(method("GET"))
        .and(path("/api/users/society/1"))
        .and(header("authorization", "Bearer tok-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            user_json(1, "Priya Nair", "priya@example.com")
        ])))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let users = ctx.client.users_by_society(SocietyId(1)).await.unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].full_name, "Priya Nair");
}

#[tokio::test]
async fn test_no_header_without_session() {
    let ctx = TestContext::anonymous().await;

    Mock::given(method("GET"))
        .and(path("/api/users/society/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&ctx.server)
        .await;

    ctx.client.users_by_society(SocietyId(1)).await.unwrap();

    let requests = ctx.server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_error_status_keeps_body() {
    let ctx = TestContext::logged_in("tok").await;

    Mock::given(method("GET"))
        .and(path("/api/societies/9"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Society not found"))
        .mount(&ctx.server)
        .await;

    let err = ctx.client.get_society(SocietyId(9)).await.unwrap_err();
    match err {
        ApiError::Status { status, body } => {
            assert_eq!(status, 404);
            assert_eq!(body, "Society not found");
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

// =============================================================================
// Login
// =============================================================================

fn api_token(exp: i64) -> String {
    encode(
        &Header::default(),
        &json!({
            "sub": "admin@greenacres.in",
            "userId": 3,
            "role": "ADMIN",
            "iat": exp - 36000,
            "exp": exp,
        }),
        &EncodingKey::from_secret(b"server-side-secret"),
    )
    .unwrap()
}

#[tokio::test]
async fn test_login_saves_session_file() {
    let ctx = TestContext::with_file_store().await;
    let exp = chrono::Utc::now().timestamp() + 3600;
    let token = api_token(exp);

    Mock::given(method("POST"))
        .and(path("/api/users/login"))
        .and(body_partial_json(json!({
            "email": "admin@greenacres.in",
            "password": "secret"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": token,
            "fullName": "Society Admin",
            "role": "ADMIN"
        })))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let session = auth::login(&ctx.client, " admin@greenacres.in ", "secret")
        .await
        .unwrap();

    assert_eq!(session.token, token);
    assert_eq!(session.user_id, Some(3));
    assert_eq!(session.email.as_deref(), Some("admin@greenacres.in"));
    assert_eq!(session.display_name(), "Society Admin");
    assert_eq!(session.expires_at.map(|t| t.timestamp()), Some(exp));

    assert!(ctx.dir.path().join("session.json").exists());
    let current = auth::current_session(ctx.store.as_ref()).unwrap();
    assert_eq!(current, session);
}

#[tokio::test]
async fn test_bare_token_reply() {
    let ctx = TestContext::anonymous().await;
    let token = api_token(chrono::Utc::now().timestamp() + 3600);

    Mock::given(method("POST"))
        .and(path("/api/users/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(token)))
        .mount(&ctx.server)
        .await;

    let session = auth::login(&ctx.client, "admin@greenacres.in", "secret")
        .await
        .unwrap();
    // без fullName в ответе роль берётся из токена
    assert_eq!(session.role.as_deref(), Some("ADMIN"));
    assert_eq!(session.display_name(), "Admin User");
}

#[tokio::test]
async fn test_login_rejected() {
    let ctx = TestContext::anonymous().await;

    Mock::given(method("POST"))
        .and(path("/api/users/login"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Invalid email or password"))
        .mount(&ctx.server)
        .await;

    let err = auth::login(&ctx.client, "admin@greenacres.in", "wrong")
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::AuthenticationFailed(ref m) if m == "Invalid email or password"));
    assert_eq!(ctx.store.load().unwrap(), None);
}

#[tokio::test]
async fn test_login_requires_both_fields() {
    let ctx = TestContext::anonymous().await;

    let err = auth::login(&ctx.client, "admin@greenacres.in", "   ")
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Validation(_)));
    assert!(ctx.server.received_requests().await.unwrap().is_empty());
}

// =============================================================================
// Complaints and society
// =============================================================================

#[tokio::test]
async fn test_resolve_sends_status_query() {
    let ctx = TestContext::logged_in("tok").await;

    Mock::given(method("PUT"))
        .and(path("/api/complaints/8/status"))
        .and(query_param("status", "RESOLVED"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 8, "status": "RESOLVED"})))
        .expect(1)
        .mount(&ctx.server)
        .await;

    ctx.client
        .update_complaint_status(ComplaintId(8), ComplaintStatus::Resolved)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_assign_vendor_path() {
    let ctx = TestContext::logged_in("tok").await;

    Mock::given(method("PUT"))
        .and(path("/api/complaints/8/assign/31"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&ctx.server)
        .await;

    ctx.client
        .assign_vendor(ComplaintId(8), UserId(31))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_complaints_board_decodes_partial_records() {
    let ctx = TestContext::logged_in("tok").await;

    Mock::given(method("GET"))
        .and(path("/api/complaints/society/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": 1,
                "title": "Lift stuck",
                "description": "Wing B lift stops at 4th floor",
                "status": "OPEN",
                "severity": "EMERGENCY",
                "upvotes": 6,
                "user": user_json(4, "Rahul Mehta", "rahul@example.com")
            },
            { "id": 2, "title": "Leaking tap", "status": "RESOLVED" }
        ])))
        .mount(&ctx.server)
        .await;

    let complaints = ctx.client.complaints_by_society(SocietyId(1)).await.unwrap();
    assert_eq!(complaints.len(), 2);
    assert!(complaints[0].is_emergency());
    assert_eq!(complaints[0].reporter_name(), Some("Rahul Mehta"));
    assert!(complaints[1].is_resolved());
    assert_eq!(complaints[1].description, "");
}

#[tokio::test]
async fn test_update_society_body() {
    let ctx = TestContext::logged_in("tok").await;

    Mock::given(method("PUT"))
        .and(path("/api/societies/1"))
        .and(body_partial_json(json!({
            "name": "Green Acres",
            "totalFlats": 120,
            "amenities": ["Clubhouse", "Solar Power"]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1, "name": "Green Acres"})))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let mut form = SocietyUpdateDto {
        name: "Green Acres".into(),
        total_flats: Some(120),
        amenities: vec!["Clubhouse".into()],
        ..Default::default()
    };
    form.toggle_amenity("Solar Power");

    ctx.client.update_society(SocietyId(1), &form).await.unwrap();
}
