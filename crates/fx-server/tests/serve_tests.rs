use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use fx_server::ambassador::AmbassadorStore;
use fx_server::serve::{router, AppState};
use fx_server::waitlist::WaitlistStore;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;
use tower::ServiceExt;

static SITE_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Builds a throwaway site directory with a few known files.
fn temp_site() -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "fx-server-test-{}-{}",
        std::process::id(),
        SITE_COUNTER.fetch_add(1, Ordering::Relaxed)
    ));
    std::fs::create_dir_all(&dir).expect("create temp site dir");
    std::fs::write(dir.join("index.html"), "<html>home</html>").expect("write index");
    std::fs::write(dir.join("style.css"), "body { margin: 0; }").expect("write css");
    std::fs::write(dir.join("data.bin"), [1u8, 2, 3]).expect("write bin");
    dir
}

fn test_state(site_root: PathBuf) -> AppState {
    let waitlist = WaitlistStore::new(site_root.join("waitlist.json"));
    let ambassador = AmbassadorStore::new(site_root.join("ambassadors.json"));
    AppState {
        site_root,
        waitlist: Arc::new(Mutex::new(waitlist)),
        ambassador: Arc::new(Mutex::new(ambassador)),
    }
}

async fn get(state: AppState, path: &str) -> (StatusCode, Option<String>, Vec<u8>) {
    let response = router(state)
        .oneshot(Request::builder().uri(path).body(Body::empty()).expect("request"))
        .await
        .expect("response");
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().expect("header utf8").to_string());
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    (status, content_type, bytes.to_vec())
}

async fn post_json(state: AppState, path: &str, json: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json.to_string()))
        .expect("request");
    let response = router(state).oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    let value = serde_json::from_slice(&bytes).expect("json body");
    (status, value)
}

#[tokio::test]
async fn root_serves_the_index_document() {
    let site = temp_site();
    let (status, content_type, body) = get(test_state(site.clone()), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("text/html"));

    let (_, _, index_body) = get(test_state(site), "/index.html").await;
    assert_eq!(body, index_body, "/ and /index.html should serve the same bytes");
}

#[tokio::test]
async fn css_gets_its_content_type() {
    let site = temp_site();
    let (status, content_type, body) = get(test_state(site), "/style.css").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("text/css"));
    assert_eq!(body, b"body { margin: 0; }");
}

#[tokio::test]
async fn unknown_extension_falls_back_to_plain_text() {
    let site = temp_site();
    let (status, content_type, _) = get(test_state(site), "/data.bin").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("text/plain"));
}

#[tokio::test]
async fn missing_file_is_404() {
    let site = temp_site();
    let (status, content_type, body) = get(test_state(site), "/nope.html").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(content_type.as_deref(), Some("text/html"));
    assert!(String::from_utf8_lossy(&body).contains("404"));
}

#[tokio::test]
async fn traversal_outside_the_root_is_404() {
    let site = temp_site();
    let (status, _, _) = get(test_state(site), "/../index.html").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn valid_email_joins_the_waitlist() {
    let site = temp_site();
    let (status, body) = post_json(test_state(site), "/api/waitlist", r#"{"email":"a@example.com"}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn duplicate_email_is_rejected() {
    let site = temp_site();
    let (status, _) =
        post_json(test_state(site.clone()), "/api/waitlist", r#"{"email":"dup@example.com"}"#).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = post_json(test_state(site), "/api/waitlist", r#"{"email":"dup@example.com"}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(
        body["message"].as_str().expect("message").contains("already"),
        "duplicate rejection should say so, got {body}"
    );
}

#[tokio::test]
async fn email_without_at_sign_is_rejected() {
    let site = temp_site();
    let (status, body) = post_json(test_state(site), "/api/waitlist", r#"{"email":"not-an-email"}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn missing_email_field_is_rejected() {
    let site = temp_site();
    let (status, body) = post_json(test_state(site), "/api/waitlist", "{}").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

const AMBASSADOR_APPLICATION: &str = r#"{
    "name": "Jordan Lee",
    "email": "Jordan@Example.com",
    "school": "Northside High",
    "grade": "11",
    "community_access": "Student council and two club Discords",
    "why_interested": "I want to help classmates find teammates",
    "time_commitment": "3 hours a week"
}"#;

#[tokio::test]
async fn complete_ambassador_application_is_accepted() {
    let site = temp_site();
    let (status, body) =
        post_json(test_state(site.clone()), "/api/ambassador", AMBASSADOR_APPLICATION).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    // Persisted with the email lower-cased and the optional field defaulted.
    let stored = std::fs::read(site.join("ambassadors.json")).expect("store written");
    let entries: serde_json::Value = serde_json::from_slice(&stored).expect("store json");
    assert_eq!(entries[0]["email"], "jordan@example.com");
    assert_eq!(entries[0]["experience"], "");
}

#[tokio::test]
async fn ambassador_application_missing_a_field_is_rejected() {
    let site = temp_site();
    let (status, body) = post_json(
        test_state(site),
        "/api/ambassador",
        r#"{"name":"Jordan Lee","email":"jordan@example.com"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "School is required");
}

#[tokio::test]
async fn ambassador_application_blank_field_is_rejected() {
    let site = temp_site();
    // Whitespace-only values do not satisfy a required field.
    let (status, body) = post_json(
        test_state(site),
        "/api/ambassador",
        r#"{"name":"   ","email":"jordan@example.com"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Name is required");
}

#[tokio::test]
async fn ambassador_applications_accumulate() {
    let site = temp_site();
    let state = test_state(site);
    let (status, _) = post_json(state.clone(), "/api/ambassador", AMBASSADOR_APPLICATION).await;
    assert_eq!(status, StatusCode::OK);

    // Same applicant again: applications are never deduplicated.
    let (status, _) = post_json(state.clone(), "/api/ambassador", AMBASSADOR_APPLICATION).await;
    assert_eq!(status, StatusCode::OK);

    let entries = state.ambassador.lock().await.entries().await.expect("entries");
    assert_eq!(entries.len(), 2);
}
