use crate::contract::model::{NewUser, User};
use async_trait::async_trait;

/// Port for the domain layer: storage operations the domain needs.
/// Object-safe and async-friendly via `async_trait`.
#[async_trait]
pub trait UsersRepository: Send + Sync {
    /// Snapshot of all users in insertion order.
    async fn all(&self) -> Vec<User>;
    /// Assign the next id (`count + 1`), append and return the stored record.
    async fn create(&self, new_user: NewUser) -> User;
    /// Number of stored users.
    async fn count(&self) -> usize;
}
