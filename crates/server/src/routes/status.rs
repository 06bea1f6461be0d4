//! Status endpoint handler

use std::net::SocketAddr;

use appstatus_core::{ConnectionResult, ServerInfo, Settings, StatusResponse};
use axum::{
    extract::{ConnectInfo, Request, State},
    http::header,
    response::{IntoResponse, Response},
};

use crate::{AppState, error::AppError, middleware::RequestId};

/// Compiler that built this binary
const RUNTIME_VERSION: &str = match option_env!("APPSTATUS_RUSTC_VERSION") {
    Some(version) => version,
    None => "",
};

/// Value reported as `server_software`
const SERVER_SOFTWARE: &str = concat!("appstatus-server/", env!("CARGO_PKG_VERSION"));

/// ANY / - Report configuration, host metadata and database reachability
pub async fn report(State(state): State<AppState>, request: Request) -> Result<Response, AppError> {
    let settings = Settings::load(state.env.as_ref());

    let remote_addr = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string());
    let request_id = request
        .extensions()
        .get::<RequestId>()
        .map(|r| r.0.clone())
        .unwrap_or_else(|| "unknown".to_string());

    let server_info = ServerInfo::collect(
        RUNTIME_VERSION,
        Some(SERVER_SOFTWARE),
        remote_addr.as_deref(),
        &settings.environment,
    );

    let connection = check_database(&state, &settings, &request_id).await;
    let body = StatusResponse::new(&settings, server_info, connection).to_pretty_json()?;

    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

/// Run the probe unless this is a dev deployment
async fn check_database(state: &AppState, settings: &Settings, request_id: &str) -> ConnectionResult {
    if settings.is_dev() {
        tracing::debug!(
            request_id = %request_id,
            environment = %settings.environment,
            "Skipping database probe"
        );
        return ConnectionResult::skipped();
    }

    let result = state.probe.probe(settings).await;
    match &result {
        Ok(()) => tracing::info!(
            request_id = %request_id,
            host = %settings.db_host,
            db = %settings.db_name,
            "Database probe succeeded"
        ),
        Err(e) => tracing::warn!(
            request_id = %request_id,
            host = %settings.db_host,
            db = %settings.db_name,
            error = %e,
            "Database probe failed"
        ),
    }
    result.into()
}
