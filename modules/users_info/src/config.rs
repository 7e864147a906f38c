use serde::{Deserialize, Serialize};

/// Configuration for the users_info module
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UsersInfoConfig {
    /// Start with the two demo users (ids 1 and 2).
    #[serde(default = "default_seed_defaults")]
    pub seed_defaults: bool,
}

impl Default for UsersInfoConfig {
    fn default() -> Self {
        Self {
            seed_defaults: default_seed_defaults(),
        }
    }
}

fn default_seed_defaults() -> bool {
    true
}
