use std::sync::Arc;

use anyhow::Result;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use users_info::{
    api::rest::dto::UserDto,
    config::UsersInfoConfig,
    contract::{client::UsersInfoApi, error::UsersInfoError, model::NewUser},
    domain::repo::UsersRepository,
    infra::storage::InMemoryUsersRepository,
    UsersInfo,
};

/// Router over a fresh seeded store, plus a handle on that store.
fn create_test_router() -> (Router, Arc<InMemoryUsersRepository>) {
    let repo = Arc::new(InMemoryUsersRepository::seeded());
    let module = UsersInfo::with_repository(repo.clone());
    (module.register_rest(Router::new()), repo)
}

async fn send(router: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

fn get_users() -> Request<Body> {
    Request::builder().uri("/users").body(Body::empty()).unwrap()
}

fn post_users(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/users")
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap()
}

#[tokio::test]
async fn fresh_instance_lists_two_seeded_users() {
    let (router, _) = create_test_router();

    let (status, body) = send(&router, get_users()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            {"id": 1, "name": "Mazlum", "email": "mazlum@example.com"},
            {"id": 2, "name": "Emre", "email": "emre@example.com"}
        ])
    );
}

#[tokio::test]
async fn create_returns_200_with_next_id() {
    let (router, _) = create_test_router();

    let (status, body) = send(
        &router,
        post_users(r#"{"name":"Alice","email":"alice@example.com"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let user: UserDto = serde_json::from_value(body).unwrap();
    assert_eq!(
        user,
        UserDto {
            id: 3,
            name: "Alice".into(),
            email: "alice@example.com".into(),
        }
    );
}

#[tokio::test]
async fn empty_email_is_rejected_and_store_unchanged() {
    let (router, repo) = create_test_router();

    let (status, body) = send(&router, post_users(r#"{"name":"Bob","email":""}"#)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "email is required"}));
    assert_eq!(repo.count().await, 2);
}

#[tokio::test]
async fn missing_email_field_is_a_validation_error() {
    let (router, _) = create_test_router();

    let (status, body) = send(&router, post_users(r#"{"name":"Bob"}"#)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "email is required");
}

#[tokio::test]
async fn null_body_or_null_email_is_a_validation_error() {
    let (router, repo) = create_test_router();

    for body in ["null", r#"{"name":"Bob","email":null}"#, "{}"] {
        let (status, json) = send(&router, post_users(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body: {body}");
        assert_eq!(json, json!({"error": "email is required"}), "body: {body}");
    }
    assert_eq!(repo.count().await, 2);
}

#[tokio::test]
async fn null_name_is_stored_as_empty() {
    let (router, _) = create_test_router();

    let (status, body) = send(&router, post_users(r#"{"name":null,"email":"anon@example.com"}"#)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": 3, "name": "", "email": "anon@example.com"}));
}

#[tokio::test]
async fn malformed_json_is_invalid_request() {
    let (router, repo) = create_test_router();

    for bad in [r#"{"name":"Bob","email":"#, "not json", r#"{"name":42,"email":"x@y"}"#] {
        let (status, body) = send(&router, post_users(bad)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body: {bad}");
        assert_eq!(body, json!({"error": "invalid request"}), "body: {bad}");
    }
    assert_eq!(repo.count().await, 2);
}

#[tokio::test]
async fn missing_content_type_is_invalid_request() {
    let (router, _) = create_test_router();

    let req = Request::builder()
        .method("POST")
        .uri("/users")
        .body(Body::from(r#"{"name":"Alice","email":"alice@example.com"}"#))
        .unwrap();
    let (status, body) = send(&router, req).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid request");
}

#[tokio::test]
async fn sequential_posts_keep_insertion_order_and_ids() {
    let (router, _) = create_test_router();
    let n = 5;

    for i in 0..n {
        let (status, _) = send(
            &router,
            post_users(json!({"name": format!("user{i}"), "email": format!("user{i}@example.com")}).to_string()),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = send(&router, get_users()).await;
    assert_eq!(status, StatusCode::OK);

    let users: Vec<UserDto> = serde_json::from_value(body).unwrap();
    assert_eq!(users.len(), 2 + n);
    let ids: Vec<u64> = users.iter().map(|u| u.id).collect();
    assert_eq!(ids, (1..=(2 + n as u64)).collect::<Vec<_>>());
    assert_eq!(users[2].name, "user0");
    assert_eq!(users[6].name, "user4");
}

#[tokio::test]
async fn routes_work_behind_the_ingress_stack() {
    let module = UsersInfo::new(&UsersInfoConfig::default());
    let host = api_ingress::ApiIngress::new(api_ingress::ApiIngressConfig::default(), "127.0.0.1:0");
    let router = host.build_router(module.register_rest(Router::new()), Some(module.openapi()));

    let response = router.clone().oneshot(get_users()).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));

    let (status, body) = send(&router, post_users("{")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid request");
}

#[tokio::test]
async fn unseeded_module_starts_empty() {
    let module = UsersInfo::new(&UsersInfoConfig {
        seed_defaults: false,
    });
    let router = module.register_rest(Router::new());

    let (_, body) = send(&router, get_users()).await;
    assert_eq!(body, json!([]));

    let (_, body) = send(&router, post_users(r#"{"name":"First","email":"f@example.com"}"#)).await;
    assert_eq!(body["id"], 1);
}

#[tokio::test]
async fn test_local_client() -> Result<()> {
    let module = UsersInfo::default();
    let client: Arc<dyn UsersInfoApi> = module.client();

    let created = client
        .create_user(NewUser::new("Client", "client@example.com"))
        .await?;
    assert_eq!(created.id, 3);

    let users = client.list_users().await?;
    assert_eq!(users.len(), 3);
    assert_eq!(users.last(), Some(&created));

    let err = client
        .create_user(NewUser::new("NoMail", ""))
        .await
        .unwrap_err();
    assert_eq!(err, UsersInfoError::validation("email is required"));

    Ok(())
}

#[test]
fn openapi_documents_both_operations() {
    let doc = serde_json::to_value(UsersInfo::default().openapi()).unwrap();

    assert!(doc.pointer("/paths/~1users/get").is_some());
    assert!(doc.pointer("/paths/~1users/post").is_some());
    assert!(doc.pointer("/components/schemas/UserDto").is_some());
    assert!(doc.pointer("/components/schemas/ErrorBody").is_some());
}
