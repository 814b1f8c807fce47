//! Session lifecycle against a mock REST API.

use campus_application::{CampusApp, RestoreOutcome};
use campus_core::auth::AuthFailureHook;
use campus_core::config::ClientConfig;
use campus_core::error::CampusError;
use campus_core::session::TokenStore;
use campus_core::user::{Role, UserSummary};
use campus_infrastructure::{FileTokenStore, MemoryTokenStore};
use serde_json::json;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::TempDir;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Default)]
struct RedirectProbe {
    redirects: AtomicUsize,
}

impl AuthFailureHook for RedirectProbe {
    fn on_auth_failure(&self) {
        self.redirects.fetch_add(1, Ordering::SeqCst);
    }
}

fn app(server: &MockServer, store: Arc<dyn TokenStore>) -> (CampusApp, Arc<RedirectProbe>) {
    let probe = Arc::new(RedirectProbe::default());
    let app = CampusApp::bootstrap(
        &ClientConfig::default().with_api_base_url(server.uri()),
        store,
        probe.clone(),
    )
    .unwrap();
    (app, probe)
}

fn teacher() -> UserSummary {
    UserSummary {
        id: "7".into(),
        name: "Grace".into(),
        email: "grace@example.com".into(),
        role: Role::Teacher,
    }
}

async fn mount_login(server: &MockServer, token: &str) {
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({"email": "grace@example.com", "password": "s3cret"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"access_token": token})))
        .mount(server)
        .await;
}

async fn mount_me(server: &MockServer, token: &str) {
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .and(header("authorization", format!("Bearer {token}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 7, "name": "Grace", "email": "grace@example.com", "role": "TEACHER"
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_login_populates_session_and_storage() {
    let server = MockServer::start().await;
    mount_login(&server, "tok-abc").await;
    mount_me(&server, "tok-abc").await;

    let store = Arc::new(MemoryTokenStore::new());
    let (app, _) = app(&server, store.clone());

    let user = app.session.login("grace@example.com", "s3cret").await.unwrap();

    assert_eq!(user, teacher());
    assert!(app.session.is_authenticated());
    let session = app.session.snapshot();
    assert_eq!(session.token.as_deref(), Some("tok-abc"));
    assert_eq!(session.current_user, Some(teacher()));
    assert_eq!(store.current().as_deref(), Some("tok-abc"));
}

#[tokio::test]
async fn test_logout_clears_session_and_storage() {
    let server = MockServer::start().await;
    mount_login(&server, "tok-abc").await;
    mount_me(&server, "tok-abc").await;

    let temp_dir = TempDir::new().unwrap();
    let store = Arc::new(FileTokenStore::with_path(temp_dir.path().join("session.json")));
    let (app, _) = app(&server, store.clone());

    app.session.login("grace@example.com", "s3cret").await.unwrap();
    assert_eq!(store.load().await.unwrap().as_deref(), Some("tok-abc"));

    let requests_before = server.received_requests().await.unwrap().len();
    app.session.logout().await;

    assert!(app.session.snapshot().token.is_none());
    assert!(app.session.current_user().is_none());
    assert_eq!(store.load().await.unwrap(), None);
    // Logout is local.
    assert_eq!(server.received_requests().await.unwrap().len(), requests_before);
}

#[tokio::test]
async fn test_login_with_rejected_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "Invalid credentials"})))
        .mount(&server)
        .await;

    let store = Arc::new(MemoryTokenStore::new());
    let (app, _) = app(&server, store.clone());

    let err = app.session.login("grace@example.com", "wrong").await.unwrap_err();
    assert_eq!(err, CampusError::authentication("Invalid credentials"));
    assert!(!app.session.is_authenticated());
    assert_eq!(store.current(), None);
}

#[tokio::test]
async fn test_register_does_not_log_in() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/register"))
        .and(body_json(json!({
            "name": "Lin", "email": "lin@example.com", "password": "pw123456", "role": "STUDENT"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 11})))
        .expect(1)
        .mount(&server)
        .await;

    let store = Arc::new(MemoryTokenStore::new());
    let (app, _) = app(&server, store.clone());

    app.session
        .register("Lin", "lin@example.com", "pw123456", Role::Student)
        .await
        .unwrap();
    assert!(!app.session.is_authenticated());
    assert_eq!(store.current(), None);
}

#[tokio::test]
async fn test_register_duplicate_email_is_validation_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/register"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({"message": "Email already exists"})))
        .mount(&server)
        .await;

    let (app, _) = app(&server, Arc::new(MemoryTokenStore::new()));
    let err = app
        .session
        .register("Lin", "lin@example.com", "pw123456", Role::Student)
        .await
        .unwrap_err();
    assert_eq!(err, CampusError::validation("Email already exists"));
}

#[tokio::test]
async fn test_restore_without_token_makes_no_request() {
    let server = MockServer::start().await;
    let (app, _) = app(&server, Arc::new(MemoryTokenStore::new()));

    assert_eq!(app.init().await, RestoreOutcome::NoStoredToken);
    assert!(!app.session.is_authenticated());
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_restore_with_rejected_token_purges_it() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let store = Arc::new(MemoryTokenStore::with_token("expired"));
    let (app, probe) = app(&server, store.clone());

    assert_eq!(app.init().await, RestoreOutcome::InvalidTokenPurged);
    assert_eq!(store.current(), None);
    assert!(app.session.snapshot().token.is_none());
    assert!(!app.session.is_authenticated());
    assert_eq!(probe.redirects.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_restore_with_accepted_token_matches_fresh_login() {
    let server = MockServer::start().await;
    mount_login(&server, "tok-abc").await;
    mount_me(&server, "tok-abc").await;

    let (fresh, _) = app(&server, Arc::new(MemoryTokenStore::new()));
    fresh.session.login("grace@example.com", "s3cret").await.unwrap();

    let (restored, _) = app(&server, Arc::new(MemoryTokenStore::with_token("tok-abc")));
    let outcome = restored.init().await;

    assert_eq!(outcome, RestoreOutcome::Restored(teacher()));
    assert_eq!(restored.session.snapshot(), fresh.session.snapshot());
}

#[tokio::test]
async fn test_restore_on_server_error_keeps_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let store = Arc::new(MemoryTokenStore::with_token("tok-abc"));
    let (app, probe) = app(&server, store.clone());

    let outcome = app.init().await;
    assert!(matches!(
        outcome,
        RestoreOutcome::Deferred(CampusError::Request { status: Some(500), .. })
    ));
    assert_eq!(store.current().as_deref(), Some("tok-abc"));
    assert!(!app.session.is_authenticated());
    assert!(app.session.current_user().is_none());
    assert_eq!(probe.redirects.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_restore_with_unreadable_storage_is_deferred() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("session.json");
    std::fs::write(&path, "garbage").unwrap();

    let server = MockServer::start().await;
    let (app, _) = app(&server, Arc::new(FileTokenStore::with_path(path.clone())));

    assert!(matches!(app.init().await, RestoreOutcome::Deferred(_)));
    assert!(path.exists());
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_auth_failure_on_any_call_ends_session() {
    let server = MockServer::start().await;
    mount_login(&server, "tok-abc").await;
    mount_me(&server, "tok-abc").await;
    Mock::given(method("DELETE"))
        .and(path("/assignments/5"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let store = Arc::new(MemoryTokenStore::new());
    let (app, probe) = app(&server, store.clone());
    app.session.login("grace@example.com", "s3cret").await.unwrap();

    let err = app.api.delete_assignment(5).await.unwrap_err();

    assert!(err.is_authentication());
    assert_eq!(store.current(), None);
    assert!(!app.session.is_authenticated());
    assert!(app.session.snapshot().token.is_none());
    assert_eq!(probe.redirects.load(Ordering::SeqCst), 1);
}
