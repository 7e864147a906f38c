use std::sync::Arc;

use crate::contract::model::{NewUser, User};
use crate::domain::error::DomainError;
use crate::domain::repo::UsersRepository;
use tracing::{debug, info, instrument};

/// Domain service with business rules for user management.
/// Depends only on the repository port, not on infra types.
#[derive(Clone)]
pub struct Service {
    repo: Arc<dyn UsersRepository>,
}

impl Service {
    /// Create a service over an injected repository.
    pub fn new(repo: Arc<dyn UsersRepository>) -> Self {
        Self { repo }
    }

    #[instrument(name = "users_info.service.get_all_users", skip(self))]
    pub async fn get_all_users(&self) -> Vec<User> {
        let users = self.repo.all().await;
        debug!("Listed {} users", users.len());
        users
    }

    #[instrument(
        name = "users_info.service.create_user",
        skip(self),
        fields(email = %new_user.email, name = %new_user.name)
    )]
    pub async fn create_user(&self, new_user: NewUser) -> Result<User, DomainError> {
        info!("Creating new user");

        Self::validate_new_user(&new_user)?;

        let user = self.repo.create(new_user).await;
        info!("Successfully created user with id={}", user.id);
        Ok(user)
    }

    // --- validation helpers ---

    fn validate_new_user(new_user: &NewUser) -> Result<(), DomainError> {
        if new_user.email.is_empty() {
            debug!("Rejecting user without email");
            return Err(DomainError::email_required());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::storage::InMemoryUsersRepository;

    fn service_with(repo: Arc<InMemoryUsersRepository>) -> Service {
        Service::new(repo)
    }

    #[tokio::test]
    async fn create_rejects_empty_email_without_touching_repo() {
        let repo = Arc::new(InMemoryUsersRepository::seeded());
        let svc = service_with(repo.clone());

        let err = svc
            .create_user(NewUser::new("Bob", ""))
            .await
            .unwrap_err();

        assert_eq!(err, DomainError::EmailRequired);
        assert_eq!(err.to_string(), "email is required");
        assert_eq!(repo.count().await, 2);
    }

    #[tokio::test]
    async fn create_accepts_empty_name() {
        let svc = service_with(Arc::new(InMemoryUsersRepository::new()));

        let user = svc.create_user(NewUser::new("", "anon@example.com")).await.unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.name, "");
    }

    #[tokio::test]
    async fn whitespace_email_is_not_empty() {
        let svc = service_with(Arc::new(InMemoryUsersRepository::new()));

        let user = svc.create_user(NewUser::new("Ws", " ")).await.unwrap();
        assert_eq!(user.email, " ");
    }

    #[tokio::test]
    async fn get_all_passes_through_in_order() {
        let svc = service_with(Arc::new(InMemoryUsersRepository::seeded()));
        svc.create_user(NewUser::new("Alice", "alice@example.com"))
            .await
            .unwrap();

        let names: Vec<_> = svc
            .get_all_users()
            .await
            .into_iter()
            .map(|u| u.name)
            .collect();
        assert_eq!(names, ["Mazlum", "Emre", "Alice"]);
    }
}
