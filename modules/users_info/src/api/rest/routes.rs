use crate::api::rest::{dto, handlers};
use crate::domain::service::Service;
use axum::{routing::get, Extension, Router};
use std::sync::Arc;
use utoipa::OpenApi;

/// OpenAPI description of the users endpoints.
#[derive(OpenApi)]
#[openapi(
    info(title = "Users API", description = "In-memory users service"),
    paths(handlers::list_users, handlers::create_user),
    components(schemas(dto::UserDto, dto::CreateUserReq, dto::ErrorBody)),
    tags((name = "users", description = "User management"))
)]
pub struct UsersApiDoc;

/// Mount `GET /users` and `POST /users` on `router`, sharing `service`.
pub fn register_routes(router: Router, service: Arc<Service>) -> Router {
    let users = Router::new()
        .route("/users", get(handlers::list_users).post(handlers::create_user))
        .layer(Extension(service));

    router.merge(users)
}

pub fn openapi() -> utoipa::openapi::OpenApi {
    UsersApiDoc::openapi()
}
