//! HTTP host shared by the server binaries: owns the listener, the global
//! middleware stack and the infrastructure routes (`/health`, `/openapi.json`).

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::{
    http::{header, StatusCode},
    middleware::from_fn,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::{
    cors::CorsLayer,
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
};

mod config;
pub mod request_id;
mod web;

pub use config::ApiIngressConfig;

/// The HTTP host. Modules hand it their routers; it wraps them with the
/// middleware stack and serves them until cancelled.
pub struct ApiIngress {
    config: ApiIngressConfig,
    bind_addr: String,
}

impl ApiIngress {
    /// `default_bind_addr` is used unless the config carries an explicit `bind_addr`.
    pub fn new(config: ApiIngressConfig, default_bind_addr: impl Into<String>) -> Self {
        let bind_addr = config
            .bind_addr
            .clone()
            .unwrap_or_else(|| default_bind_addr.into());
        Self { config, bind_addr }
    }

    pub fn config(&self) -> &ApiIngressConfig {
        &self.config
    }

    pub fn bind_addr(&self) -> &str {
        &self.bind_addr
    }

    /// Merge module routes with the infrastructure routes and apply the middleware stack.
    ///
    /// Layer order, outermost first:
    /// SetRequestId -> PropagateRequestId -> Trace -> push_req_id_to_extensions
    /// -> Timeout -> CORS -> BodyLimit
    pub fn build_router(&self, routes: Router, openapi: Option<utoipa::openapi::OpenApi>) -> Router {
        let mut router = Router::new()
            .route("/health", get(web::health_check))
            .merge(routes)
            .fallback(web::not_found);

        match openapi {
            Some(doc) if self.config.enable_docs => {
                tracing::info!(paths = doc.paths.paths.len(), "serving /openapi.json");
                let doc = Arc::new(doc);
                router = router.route(
                    "/openapi.json",
                    get(move || {
                        let doc = doc.clone();
                        async move {
                            ([(header::CACHE_CONTROL, "no-store")], Json((*doc).clone()))
                                .into_response()
                        }
                    }),
                );
            }
            _ => {}
        }

        router = router.layer(RequestBodyLimitLayer::new(self.config.body_limit_bytes));

        if self.config.cors_enabled {
            router = router.layer(CorsLayer::permissive());
        }

        if self.config.request_timeout_secs > 0 {
            router = router.layer(TimeoutLayer::with_status_code(
                StatusCode::REQUEST_TIMEOUT,
                Duration::from_secs(self.config.request_timeout_secs),
            ));
        }

        let x_request_id = request_id::header();
        router
            .layer(from_fn(request_id::push_req_id_to_extensions))
            .layer(request_id::create_trace_layer())
            .layer(PropagateRequestIdLayer::new(x_request_id.clone()))
            .layer(SetRequestIdLayer::new(x_request_id, request_id::MakeReqId))
    }

    /// Bind the configured address and serve until `cancel` fires.
    pub async fn serve(&self, router: Router, cancel: CancellationToken) -> Result<()> {
        let listener = TcpListener::bind(self.bind_addr.as_str())
            .await
            .with_context(|| format!("Failed to bind HTTP listener on {}", self.bind_addr))?;
        tracing::info!("HTTP server bound on {}", listener.local_addr()?);
        serve_on(listener, router, cancel).await
    }
}

/// Serve `router` on an already bound listener with graceful shutdown on cancel.
pub async fn serve_on(listener: TcpListener, router: Router, cancel: CancellationToken) -> Result<()> {
    let shutdown = async move {
        cancel.cancelled().await;
        tracing::info!("HTTP server shutting down gracefully (cancellation)");
    };

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| anyhow::anyhow!(e))
}
