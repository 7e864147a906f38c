use crate::api::rest::{dto, handlers};
use axum::{routing::get, Extension, Router};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Load demo API", description = "CPU-bound endpoint for load testing"),
    paths(handlers::hello),
    components(schemas(dto::HelloResponse))
)]
pub struct LoadDemoApiDoc;

pub fn register_routes(router: Router, settings: handlers::HelloSettings) -> Router {
    let hello = Router::new()
        .route("/api/hello", get(handlers::hello))
        .layer(Extension(settings));

    router.merge(hello)
}

pub fn openapi() -> utoipa::openapi::OpenApi {
    LoadDemoApiDoc::openapi()
}
