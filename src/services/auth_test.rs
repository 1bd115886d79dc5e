use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{HeaderMap, Uri};
use axum::{Json, Router};

use super::*;
use crate::config::AuthTimeouts;

#[test]
fn success_extracts_nested_user_email() {
    let body = r#"{"access_token":"tok","user":{"id":"u1","email":"a@b.com"}}"#;
    assert_eq!(
        interpret_reply(200, body).unwrap(),
        ProviderOutcome::Accepted { email: Some("a@b.com".to_owned()) }
    );
}

#[test]
fn success_extracts_top_level_email_from_signup() {
    let body = r#"{"id":"u1","email":"new@b.com","confirmation_sent_at":"2026-01-01T00:00:00Z"}"#;
    assert_eq!(
        interpret_reply(200, body).unwrap(),
        ProviderOutcome::Accepted { email: Some("new@b.com".to_owned()) }
    );
}

#[test]
fn success_without_email_field_is_still_accepted() {
    assert_eq!(interpret_reply(201, r#"{"id":"u1"}"#).unwrap(), ProviderOutcome::Accepted { email: None });
}

#[test]
fn success_status_with_html_body_is_decode_error() {
    let err = interpret_reply(200, "<html><body>Welcome</body></html>").unwrap_err();
    assert!(matches!(err, AuthProviderError::Decode { status: 200, .. }));
}

#[test]
fn success_status_with_empty_body_is_decode_error() {
    assert!(matches!(interpret_reply(204, ""), Err(AuthProviderError::Decode { status: 204, .. })));
}

#[test]
fn rejection_prefers_msg_field() {
    let body = r#"{"code":400,"error_code":"user_already_exists","msg":"User already registered"}"#;
    assert_eq!(
        interpret_reply(422, body).unwrap(),
        ProviderOutcome::Rejected { message: "User already registered".to_owned() }
    );
}

#[test]
fn rejection_uses_error_description() {
    let body = r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#;
    assert_eq!(
        interpret_reply(400, body).unwrap(),
        ProviderOutcome::Rejected { message: "Invalid login credentials".to_owned() }
    );
}

#[test]
fn rejection_skips_blank_fields() {
    let body = r#"{"msg":"  ","error":"Email not confirmed"}"#;
    assert_eq!(
        interpret_reply(400, body).unwrap(),
        ProviderOutcome::Rejected { message: "Email not confirmed".to_owned() }
    );
}

#[test]
fn rejection_without_message_mentions_status() {
    assert_eq!(
        interpret_reply(429, "").unwrap(),
        ProviderOutcome::Rejected { message: "request rejected (429)".to_owned() }
    );
}

#[test]
fn server_error_is_upstream_error() {
    let err = interpret_reply(503, "maintenance").unwrap_err();
    assert!(matches!(err, AuthProviderError::Upstream { status: 503, .. }));
    assert_eq!(err.to_string(), "auth provider error: status 503");
}

// =============================================================================
// GoTrueProvider against a local fake provider
// =============================================================================

#[derive(Clone, Debug)]
struct Captured {
    path_and_query: String,
    apikey: Option<String>,
    authorization: Option<String>,
    body: serde_json::Value,
}

type CaptureLog = Arc<Mutex<Vec<Captured>>>;

async fn record(State(log): State<CaptureLog>, uri: Uri, headers: HeaderMap, body: String) -> Json<serde_json::Value> {
    let header = |name: &str| headers.get(name).and_then(|v| v.to_str().ok()).map(str::to_owned);
    let body: serde_json::Value = serde_json::from_str(&body).unwrap();
    let email = body["email"].clone();
    log.lock().unwrap().push(Captured {
        path_and_query: uri.path_and_query().map(ToString::to_string).unwrap_or_default(),
        apikey: header("apikey"),
        authorization: header("authorization"),
        body,
    });
    Json(serde_json::json!({ "user": { "email": email } }))
}

async fn fake_provider() -> (GoTrueProvider, CaptureLog) {
    let log = CaptureLog::default();
    let app = Router::new().fallback(record).with_state(log.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let config = AuthProviderConfig {
        base_url: format!("http://{addr}"),
        api_key: "anon-key".to_owned(),
        timeouts: AuthTimeouts { request_secs: 5, connect_secs: 5 },
    };
    (GoTrueProvider::new(&config).unwrap(), log)
}

#[tokio::test]
async fn sign_in_posts_password_grant_with_api_key() {
    let (provider, log) = fake_provider().await;
    let outcome = provider.sign_in(&Credentials::new("a@b.com", "secret1")).await.unwrap();
    assert_eq!(outcome, ProviderOutcome::Accepted { email: Some("a@b.com".to_owned()) });

    let calls = log.lock().unwrap().clone();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].path_and_query, "/auth/v1/token?grant_type=password");
    assert_eq!(calls[0].apikey.as_deref(), Some("anon-key"));
    assert_eq!(calls[0].authorization.as_deref(), Some("Bearer anon-key"));
    assert_eq!(calls[0].body, serde_json::json!({ "email": "a@b.com", "password": "secret1" }));
}

#[tokio::test]
async fn sign_up_posts_to_signup_endpoint() {
    let (provider, log) = fake_provider().await;
    provider.sign_up(&Credentials::new("new@b.com", "secret1")).await.unwrap();

    let calls = log.lock().unwrap().clone();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].path_and_query, "/auth/v1/signup");
    assert_eq!(calls[0].apikey.as_deref(), Some("anon-key"));
    assert_eq!(calls[0].body, serde_json::json!({ "email": "new@b.com", "password": "secret1" }));
}
