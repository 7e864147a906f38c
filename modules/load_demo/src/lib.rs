//! CPU-bound demo endpoint for load and stress testing.
//!
//! `GET /api/hello` burns a configurable number of floating point
//! iterations on the request worker before answering, so throughput
//! collapses once the worker threads are saturated.

pub mod api;
pub mod compute;
pub mod config;
pub mod module;

pub use config::LoadDemoConfig;
pub use module::LoadDemo;
