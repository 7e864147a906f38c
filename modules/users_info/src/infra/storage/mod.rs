mod memory_repo;

pub use memory_repo::{seed_users, InMemoryUsersRepository};
