use std::time::Instant;

use axum::{response::Json, Extension};
use tracing::debug;

use crate::api::rest::dto::HelloResponse;
use crate::compute::heavy_computation;

/// Per-route settings injected via `Extension`.
#[derive(Debug, Clone, Copy)]
pub struct HelloSettings {
    pub iterations: u64,
}

/// Burn CPU, then greet. The loop blocks this worker thread on purpose.
#[utoipa::path(
    get,
    path = "/api/hello",
    operation_id = "load_demo.hello",
    tag = "load",
    responses(
        (status = 200, description = "Fixed greeting after the CPU-bound delay", body = HelloResponse)
    )
)]
pub async fn hello(Extension(settings): Extension<HelloSettings>) -> Json<HelloResponse> {
    let started = Instant::now();
    let checksum = heavy_computation(settings.iterations);
    debug!(
        iterations = settings.iterations,
        elapsed_ms = started.elapsed().as_millis() as u64,
        checksum,
        "heavy computation finished"
    );

    Json(HelloResponse::default())
}
