//! Session lifecycle tests against a stand-in backend.
//!
//! Each test spins up a real actix-web server on a random port, points an
//! isolated client (with its own temporary session file) at it, and drives
//! the public `SessionStore` operations end to end.

use actix_web::{rt, web, App, HttpRequest, HttpResponse, HttpServer};
use pretty_assertions::assert_eq;
use serde::Deserialize;
use serde_json::json;
use std::net::TcpListener;
use std::path::PathBuf;
use taskdeck::models::Session;
use taskdeck::{ApiClient, AppError, SessionStore, SessionStorage};
use tempfile::TempDir;

#[derive(Deserialize)]
struct LoginBody {
    email: String,
    password: String,
}

#[derive(Deserialize)]
struct RegisterBody {
    name: String,
    email: String,
    #[allow(dead_code)]
    password: String,
}

#[derive(Deserialize)]
struct ProfileBody {
    name: String,
}

fn bearer_token(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get("Authorization")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
}

async fn login(body: web::Json<LoginBody>) -> HttpResponse {
    // Password policy is the backend's call; this account also accepts a
    // two-character password
    if body.email == "a@b.com" && (body.password == "password123" || body.password == "pw") {
        HttpResponse::Ok().json(json!({
            "id": 1,
            "name": "Ann",
            "email": body.email,
            "token": "tok1"
        }))
    } else {
        HttpResponse::Unauthorized().json(json!({
            "message": "Invalid credentials"
        }))
    }
}

async fn register(body: web::Json<RegisterBody>) -> HttpResponse {
    HttpResponse::Created().json(json!({
        "id": 2,
        "name": body.name,
        "email": body.email,
        "token": "tok2"
    }))
}

async fn profile(req: HttpRequest, body: web::Json<ProfileBody>) -> HttpResponse {
    match bearer_token(&req) {
        Some("tok1") => HttpResponse::Ok().json(json!({
            "id": 1,
            "name": body.name,
            "email": "a@b.com",
            "token": "tok1"
        })),
        _ => HttpResponse::Unauthorized().json(json!({
            "message": "Not authorized, no token"
        })),
    }
}

/// Echoes back the Authorization header the server saw, so tests can assert
/// exactly what the adapter put on the wire.
async fn echo(req: HttpRequest) -> HttpResponse {
    let seen = req
        .headers()
        .get("Authorization")
        .and_then(|value| value.to_str().ok());
    HttpResponse::Ok().json(json!({ "authorization": seen }))
}

/// Binds a random port, spawns the stand-in backend on it, and returns the
/// base URL the client should use.
async fn spawn_backend() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener); // Drop the listener so the server can bind to it

    rt::spawn(async move {
        HttpServer::new(|| {
            App::new().service(
                web::scope("/api")
                    .route("/auth/login", web::post().to(login))
                    .route("/auth/register", web::post().to(register))
                    .route("/auth/profile", web::put().to(profile))
                    .route("/echo", web::get().to(echo)),
            )
        })
        .bind(("127.0.0.1", port))
        .unwrap_or_else(|_| panic!("Failed to bind to port {}", port))
        .run()
        .await
    });

    // Give the server a moment to start
    tokio::time::sleep(tokio::time::Duration::from_millis(200)).await;

    format!("http://127.0.0.1:{}/api", port)
}

struct TestClient {
    _dir: TempDir,
    session_file: PathBuf,
    api: ApiClient,
    store: SessionStore,
}

async fn test_client() -> TestClient {
    let base_url = spawn_backend().await;
    let dir = TempDir::new().unwrap();
    let session_file = dir.path().join("session.json");
    let storage = SessionStorage::new(&session_file);
    let api = ApiClient::new(base_url, storage.clone());
    let mut store = SessionStore::new(api.clone(), storage);
    store.restore();
    TestClient {
        _dir: dir,
        session_file,
        api,
        store,
    }
}

fn persisted(session_file: &PathBuf) -> Option<Session> {
    SessionStorage::new(session_file).load()
}

#[actix_rt::test]
async fn test_login_writes_through_to_disk() {
    let mut client = test_client().await;

    let session = client.store.login("a@b.com", "password123").await.unwrap();
    assert_eq!(session.id, 1);
    assert_eq!(session.name, "Ann");
    assert_eq!(session.email, "a@b.com");
    assert_eq!(session.token, "tok1");

    // In-memory and persisted copies must be equal immediately afterwards
    assert_eq!(client.store.current(), Some(&session));
    assert_eq!(persisted(&client.session_file), Some(session));
}

#[actix_rt::test]
async fn test_login_with_short_password_is_the_backends_call() {
    let mut client = test_client().await;

    // No client-side length rule on login: "pw" goes to the backend, which
    // accepts it and issues the session
    let session = client.store.login("a@b.com", "pw").await.unwrap();
    assert_eq!(session.token, "tok1");
    assert_eq!(client.store.current(), Some(&session));
    assert_eq!(persisted(&client.session_file), Some(session));

    // A rejected password comes back as the backend's message, not a local
    // validation error
    let err = client.store.login("a@b.com", "no").await.unwrap_err();
    match err {
        AppError::Api { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "Invalid credentials");
        }
        other => panic!("Expected Api error, got {:?}", other),
    }
}

#[actix_rt::test]
async fn test_failed_login_leaves_state_unchanged() {
    let mut client = test_client().await;

    // Establish a good session first, then fail a second login
    let before = client.store.login("a@b.com", "password123").await.unwrap();

    let err = client
        .store
        .login("a@b.com", "wrong-password")
        .await
        .unwrap_err();
    match err {
        AppError::Api { status, message } => {
            assert_eq!(status, 401);
            // The server's message is delivered to the caller unmodified
            assert_eq!(message, "Invalid credentials");
        }
        other => panic!("Expected Api error, got {:?}", other),
    }

    assert_eq!(client.store.current(), Some(&before));
    assert_eq!(persisted(&client.session_file), Some(before));
}

#[actix_rt::test]
async fn test_register_establishes_session() {
    let mut client = test_client().await;

    let session = client
        .store
        .register("Bea", "bea@example.com", "password123")
        .await
        .unwrap();
    assert_eq!(session.id, 2);
    assert_eq!(session.name, "Bea");
    assert_eq!(session.token, "tok2");

    assert_eq!(client.store.current(), Some(&session));
    assert_eq!(persisted(&client.session_file), Some(session));
}

#[actix_rt::test]
async fn test_update_profile_changes_name_only() {
    let mut client = test_client().await;
    client.store.login("a@b.com", "password123").await.unwrap();

    let session = client.store.update_profile("Annie").await.unwrap();
    assert_eq!(
        session,
        Session {
            id: 1,
            name: "Annie".to_string(),
            email: "a@b.com".to_string(),
            token: "tok1".to_string(),
        }
    );

    assert_eq!(client.store.current(), Some(&session));
    assert_eq!(persisted(&client.session_file), Some(session));
}

#[actix_rt::test]
async fn test_update_profile_without_session_surfaces_rejection() {
    let mut client = test_client().await;

    let err = client.store.update_profile("Nobody").await.unwrap_err();
    match err {
        AppError::Api { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "Not authorized, no token");
        }
        other => panic!("Expected Api error, got {:?}", other),
    }

    assert_eq!(client.store.current(), None);
    assert_eq!(persisted(&client.session_file), None);
}

#[actix_rt::test]
async fn test_logout_clears_memory_and_disk() {
    let mut client = test_client().await;
    client.store.login("a@b.com", "password123").await.unwrap();

    client.store.logout();

    assert_eq!(client.store.current(), None);
    assert_eq!(persisted(&client.session_file), None);
}

#[actix_rt::test]
async fn test_restore_picks_up_session_from_a_previous_run() {
    let mut client = test_client().await;
    let session = client.store.login("a@b.com", "password123").await.unwrap();

    // A second store over the same storage simulates a process restart
    let storage = SessionStorage::new(&client.session_file);
    let mut second = SessionStore::new(client.api.clone(), storage);
    second.restore();
    assert_eq!(second.current(), Some(&session));
}

#[actix_rt::test]
async fn test_requests_carry_bearer_only_with_a_session() {
    let mut client = test_client().await;

    // No session yet: the request must go out unauthenticated
    let seen: serde_json::Value = client.api.get("/echo").await.unwrap();
    assert_eq!(seen["authorization"], serde_json::Value::Null);

    client.store.login("a@b.com", "password123").await.unwrap();

    // With a session holding token tok1, every request carries it
    let seen: serde_json::Value = client.api.get("/echo").await.unwrap();
    assert_eq!(seen["authorization"], "Bearer tok1");

    client.store.logout();

    let seen: serde_json::Value = client.api.get("/echo").await.unwrap();
    assert_eq!(seen["authorization"], serde_json::Value::Null);
}

#[actix_rt::test]
async fn test_transport_failure_propagates() {
    // Nothing is listening on this port
    let dir = TempDir::new().unwrap();
    let storage = SessionStorage::new(dir.path().join("session.json"));
    let api = ApiClient::new("http://127.0.0.1:1/api", storage.clone());
    let mut store = SessionStore::new(api, storage);
    store.restore();

    let err = store.login("a@b.com", "password123").await.unwrap_err();
    assert!(matches!(err, AppError::Transport(_)));
    assert_eq!(store.current(), None);
}
