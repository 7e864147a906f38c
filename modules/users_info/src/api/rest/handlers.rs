use std::sync::Arc;

use axum::{extract::rejection::JsonRejection, response::Json, Extension};
use tracing::info;

use crate::api::rest::dto::{CreateUserReq, ErrorBody, UserDto};
use crate::api::rest::error::ApiError;
use crate::domain::service::Service;

/// List all users in insertion order
#[utoipa::path(
    get,
    path = "/users",
    operation_id = "users_info.list_users",
    tag = "users",
    responses(
        (status = 200, description = "All users", body = [UserDto])
    )
)]
pub async fn list_users(Extension(svc): Extension<Arc<Service>>) -> Json<Vec<UserDto>> {
    info!("Listing users");

    let users = svc.get_all_users().await;
    Json(users.into_iter().map(UserDto::from).collect())
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/users",
    operation_id = "users_info.create_user",
    tag = "users",
    request_body = CreateUserReq,
    responses(
        (status = 200, description = "Created user with its assigned id", body = UserDto),
        (status = 400, description = "Malformed body or missing email", body = ErrorBody)
    )
)]
pub async fn create_user(
    Extension(svc): Extension<Arc<Service>>,
    payload: Result<Json<Option<CreateUserReq>>, JsonRejection>,
) -> Result<Json<UserDto>, ApiError> {
    // A bare `null` body carries no fields, same as `{}`.
    let req_body = payload?.0.unwrap_or_default();
    info!("Creating user: {:?}", req_body);

    let user = svc.create_user(req_body.into()).await?;
    Ok(Json(UserDto::from(user)))
}
