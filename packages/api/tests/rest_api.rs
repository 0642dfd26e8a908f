//! End-to-end client tests against a mocked backend.

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use api::{ApiClient, ApiError, Credentials};
use store::{MemoryTokenStore, QueryCache, QueryKey, Task, TokenStore};

fn client_for(server: &MockServer) -> (ApiClient, Arc<MemoryTokenStore>) {
    let tokens = Arc::new(MemoryTokenStore::new());
    let client = ApiClient::new(server.uri(), tokens.clone());
    (client, tokens)
}

fn auth_body(token: &str, user_id: &str, email: &str) -> serde_json::Value {
    json!({
        "access_token": token,
        "token_type": "bearer",
        "user": {
            "id": user_id,
            "email": email,
            "created_at": "2024-03-01T09:00:00Z",
        },
    })
}

#[tokio::test]
async fn login_success_persists_token_and_returns_user() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login"))
        .and(body_json(json!({"email": "a@b.com", "password": "longenough1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(auth_body("tok-123", "u-1", "a@b.com")))
        .mount(&server)
        .await;

    let (client, tokens) = client_for(&server);
    let response = client
        .login(&Credentials {
            email: "a@b.com".to_string(),
            password: "longenough1".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(response.access_token, "tok-123");
    assert_eq!(response.user.id, "u-1");
    assert_eq!(response.user.email, "a@b.com");
    // Stored token equals the response token
    assert_eq!(tokens.get().as_deref(), Some("tok-123"));
}

#[tokio::test]
async fn login_with_wrong_password_maps_code_and_stores_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "detail": {"code": "INVALID_CREDENTIALS", "message": "Invalid email or password"},
        })))
        .mount(&server)
        .await;

    let (client, tokens) = client_for(&server);
    let err = client
        .login(&Credentials {
            email: "a@b.com".to_string(),
            password: "wrong".to_string(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::InvalidCredentials));
    assert_eq!(err.to_string(), "Invalid email or password");
    assert!(tokens.get().is_none());
}

#[tokio::test]
async fn register_with_taken_email_maps_code() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/register"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "detail": {"code": "EMAIL_EXISTS", "message": "Email already registered"},
        })))
        .mount(&server)
        .await;

    let (client, tokens) = client_for(&server);
    let err = client
        .register(&Credentials {
            email: "a@b.com".to_string(),
            password: "longenough1".to_string(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::EmailExists));
    assert!(tokens.get().is_none());
}

#[tokio::test]
async fn register_then_list_tasks_sends_bearer_header() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/register"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(auth_body("fresh-token", "u-9", "a@b.com")),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/tasks"))
        .and(header("authorization", "Bearer fresh-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _tokens) = client_for(&server);
    client
        .register(&Credentials {
            email: "a@b.com".to_string(),
            password: "longenough1".to_string(),
        })
        .await
        .unwrap();

    let tasks = client.list_tasks().await.unwrap();
    assert!(tasks.is_empty());
}

#[tokio::test]
async fn toggle_sends_pure_negation() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/v1/tasks/t-1"))
        .and(body_json(json!({"completed": true})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "t-1",
            "title": "Water the plants",
            "description": null,
            "completed": true,
            "created_at": "2024-03-01T09:00:00Z",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (client, tokens) = client_for(&server);
    tokens.set("tok");

    let task = Task {
        id: "t-1".to_string(),
        title: "Water the plants".to_string(),
        description: None,
        completed: false,
        created_at: "2024-03-01T09:00:00Z".to_string(),
    };
    let updated = client.toggle_task(&task).await.unwrap();
    assert!(updated.completed);
}

#[tokio::test]
async fn rejected_delete_surfaces_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/v1/tasks/t-404"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "detail": {"code": "TASK_NOT_FOUND", "message": "Task not found"},
        })))
        .mount(&server)
        .await;

    let (client, _tokens) = client_for(&server);
    let err = client.delete_task("t-404").await.unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));
}

#[tokio::test]
async fn logout_reports_backend_outcome() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/logout"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Successfully logged out.",
        })))
        .mount(&server)
        .await;

    let (client, tokens) = client_for(&server);
    tokens.set("tok");
    client.logout().await.unwrap();

    // The network call alone does not touch local state; the caller clears
    // the token unconditionally, success or not.
    assert_eq!(tokens.get().as_deref(), Some("tok"));
}

#[tokio::test]
async fn rejected_logout_still_clears_token_and_cache() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/logout"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "detail": "session backend unavailable",
        })))
        .mount(&server)
        .await;

    let (client, tokens) = client_for(&server);
    tokens.set("tok");
    let cache = QueryCache::new();
    cache.put(QueryKey::Tasks, &Vec::<Task>::new());
    cache.put(QueryKey::Session, &json!({"id": "u-1", "email": "a@b.com", "created_at": ""}));

    client.end_session(&cache).await;

    // The failed notification must not leave the user half logged out.
    assert!(tokens.get().is_none());
    assert!(!cache.contains(QueryKey::Tasks));
    assert!(!cache.contains(QueryKey::Session));
}

#[tokio::test]
async fn unreachable_logout_still_clears_token_and_cache() {
    // Nothing listens here.
    let tokens = Arc::new(MemoryTokenStore::new());
    let client = ApiClient::new("http://127.0.0.1:9", tokens.clone());
    tokens.set("tok");
    let cache = QueryCache::new();
    cache.put(QueryKey::Tasks, &Vec::<Task>::new());

    client.end_session(&cache).await;

    assert!(tokens.get().is_none());
    assert!(!cache.contains(QueryKey::Tasks));
}

#[tokio::test]
async fn unreachable_backend_is_a_network_error() {
    // Nothing listens here.
    let tokens = Arc::new(MemoryTokenStore::new());
    let client = ApiClient::new("http://127.0.0.1:9", tokens);
    let err = client.list_tasks().await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
}
