use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use tower::ServiceExt;

use load_demo::{LoadDemo, LoadDemoConfig};

fn router(iterations: u64) -> Router {
    LoadDemo::new(LoadDemoConfig {
        iterations,
        ..Default::default()
    })
    .register_rest(Router::new())
}

async fn get_hello(router: Router) -> (StatusCode, serde_json::Value) {
    let response = router
        .oneshot(Request::builder().uri("/api/hello").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn hello_returns_fixed_message() {
    for iterations in [0, 1, 10_000] {
        let (status, body) = get_hello(router(iterations)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!({"message": "Hello from Fiber!"}));
    }
}

#[tokio::test]
async fn other_methods_are_not_routed() {
    let response = router(0)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/hello")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[test]
fn openapi_documents_hello() {
    let doc = LoadDemo::new(LoadDemoConfig::default()).openapi();
    let doc = serde_json::to_value(doc).unwrap();
    assert!(doc.pointer("/paths/~1api~1hello/get").is_some());
}
