use std::sync::Arc;

use axum::Router;
use tracing::info;

use crate::api::rest::routes;
use crate::config::UsersInfoConfig;
use crate::contract::client::UsersInfoApi;
use crate::domain::repo::UsersRepository;
use crate::domain::service::Service;
use crate::gateways::local::UsersInfoLocalClient;
use crate::infra::storage::InMemoryUsersRepository;

/// Wires repository → service → REST controller and local client.
#[derive(Clone)]
pub struct UsersInfo {
    service: Arc<Service>,
}

impl UsersInfo {
    /// Key of this module's entry in the `modules` config bag.
    pub const NAME: &'static str = "users_info";

    pub fn new(cfg: &UsersInfoConfig) -> Self {
        let repo = if cfg.seed_defaults {
            InMemoryUsersRepository::seeded()
        } else {
            InMemoryUsersRepository::new()
        };
        info!(seed_defaults = cfg.seed_defaults, "Initializing users_info module");
        Self::with_repository(Arc::new(repo))
    }

    /// Build the module over an externally owned store.
    pub fn with_repository(repo: Arc<dyn UsersRepository>) -> Self {
        Self {
            service: Arc::new(Service::new(repo)),
        }
    }

    pub fn service(&self) -> Arc<Service> {
        self.service.clone()
    }

    /// In-process client for other modules.
    pub fn client(&self) -> Arc<dyn UsersInfoApi> {
        Arc::new(UsersInfoLocalClient::new(self.service.clone()))
    }

    pub fn register_rest(&self, router: Router) -> Router {
        info!("Registering users_info REST routes");
        routes::register_routes(router, self.service.clone())
    }

    pub fn openapi(&self) -> utoipa::openapi::OpenApi {
        routes::openapi()
    }
}

impl Default for UsersInfo {
    fn default() -> Self {
        Self::new(&UsersInfoConfig::default())
    }
}
