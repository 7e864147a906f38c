use serde::{Deserialize, Serialize};

/// Configuration for the load_demo module
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoadDemoConfig {
    /// Loop iterations per `/api/hello` request.
    #[serde(default = "default_iterations")]
    pub iterations: u64,
    /// Tokio worker threads for the server runtime.
    #[serde(default = "default_worker_threads")]
    pub worker_threads: usize,
}

impl Default for LoadDemoConfig {
    fn default() -> Self {
        Self {
            iterations: default_iterations(),
            worker_threads: default_worker_threads(),
        }
    }
}

fn default_iterations() -> u64 {
    100_000_000
}

fn default_worker_threads() -> usize {
    1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_single_core_demo() {
        let cfg: LoadDemoConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg.iterations, 100_000_000);
        assert_eq!(cfg.worker_threads, 1);
    }
}
