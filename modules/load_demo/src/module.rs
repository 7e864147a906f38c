use axum::Router;
use tracing::info;

use crate::api::rest::{handlers::HelloSettings, routes};
use crate::config::LoadDemoConfig;

/// The load demo: one CPU-bound route, nothing stateful.
#[derive(Debug, Clone)]
pub struct LoadDemo {
    config: LoadDemoConfig,
}

impl LoadDemo {
    /// Key of this module's entry in the `modules` config bag.
    pub const NAME: &'static str = "load_demo";

    pub fn new(config: LoadDemoConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LoadDemoConfig {
        &self.config
    }

    pub fn register_rest(&self, router: Router) -> Router {
        info!(
            iterations = self.config.iterations,
            "Registering load_demo REST routes"
        );
        routes::register_routes(
            router,
            HelloSettings {
                iterations: self.config.iterations,
            },
        )
    }

    pub fn openapi(&self) -> utoipa::openapi::OpenApi {
        routes::openapi()
    }
}
