//! appstatus-server library crate
//!
//! Exposes `build_app` and `config` for integration tests.
//! The actual binary entrypoint is in `main.rs`.

pub mod config;
pub mod db;
mod error;
mod middleware;
mod routes;

use std::sync::Arc;

use appstatus_core::{EnvSource, ProcessEnv};
use axum::{Router, middleware as axum_mw};
use tower_http::trace::TraceLayer;

use db::{DatabaseProbe, MySqlProbe};

pub use middleware::request_id::REQUEST_ID_HEADER;

/// Shared, read-only handler dependencies
#[derive(Clone)]
pub struct AppState {
    pub env: Arc<dyn EnvSource>,
    pub probe: Arc<dyn DatabaseProbe>,
}

impl AppState {
    pub fn new(env: Arc<dyn EnvSource>, probe: Arc<dyn DatabaseProbe>) -> Self {
        Self { env, probe }
    }
}

impl Default for AppState {
    /// Process environment and a real MySQL probe
    fn default() -> Self {
        Self::new(Arc::new(ProcessEnv), Arc::new(MySqlProbe))
    }
}

/// Build the full application router with all routes and middleware.
///
/// Extracted from `main()` so integration tests can construct the app
/// without binding to a TCP port.
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .merge(routes::status_routes())
        .with_state(state)
        .layer(axum_mw::from_fn(middleware::request_id_middleware))
        .layer(TraceLayer::new_for_http())
}
