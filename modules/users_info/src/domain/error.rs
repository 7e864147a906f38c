use thiserror::Error;

/// Domain-specific errors using thiserror
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("email is required")]
    EmailRequired,
}

impl DomainError {
    pub fn email_required() -> Self {
        Self::EmailRequired
    }
}
