use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const HELLO_MESSAGE: &str = "Hello from Fiber!";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HelloResponse {
    pub message: String,
}

impl Default for HelloResponse {
    fn default() -> Self {
        Self {
            message: HELLO_MESSAGE.to_string(),
        }
    }
}
