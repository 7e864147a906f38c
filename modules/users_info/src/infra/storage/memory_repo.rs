use async_trait::async_trait;
use parking_lot::RwLock;

use crate::contract::model::{NewUser, User};
use crate::domain::repo::UsersRepository;

/// Users every fresh seeded store starts with.
pub fn seed_users() -> Vec<User> {
    vec![
        User {
            id: 1,
            name: "Mazlum".to_string(),
            email: "mazlum@example.com".to_string(),
        },
        User {
            id: 2,
            name: "Emre".to_string(),
            email: "emre@example.com".to_string(),
        },
    ]
}

/// Process-memory store. Id assignment and append happen under one write
/// lock, so concurrent creates still get unique, gap-free ids.
#[derive(Debug, Default)]
pub struct InMemoryUsersRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUsersRepository {
    /// Empty store; the first user gets id 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with [`seed_users`].
    pub fn seeded() -> Self {
        Self {
            users: RwLock::new(seed_users()),
        }
    }
}

#[async_trait]
impl UsersRepository for InMemoryUsersRepository {
    async fn all(&self) -> Vec<User> {
        self.users.read().clone()
    }

    async fn create(&self, new_user: NewUser) -> User {
        let mut users = self.users.write();
        let user = User {
            id: users.len() as u64 + 1,
            name: new_user.name,
            email: new_user.email,
        };
        users.push(user.clone());
        user
    }

    async fn count(&self) -> usize {
        self.users.read().len()
    }
}
