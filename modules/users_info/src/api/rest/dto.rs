use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::contract::model::{NewUser, User};

/// REST DTO for user representation with serde/utoipa
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: u64,
    pub name: String,
    pub email: String,
}

/// REST DTO for creating a new user. Absent and `null` fields read as empty
/// strings; unknown fields (including a client-sent `id`) are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct CreateUserReq {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Body of every 400 response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

// Conversion implementations between REST DTOs and contract models

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

impl From<CreateUserReq> for NewUser {
    fn from(req: CreateUserReq) -> Self {
        Self {
            name: req.name.unwrap_or_default(),
            email: req.email.unwrap_or_default(),
        }
    }
}
