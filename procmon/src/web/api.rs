//! REST API handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use super::state::AppState;
use crate::error::{ErrorKind, MonitorError};
use crate::types::{ProcessInfo, SystemUsage, TerminateRequest, TerminateResponse};

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    fn new(msg: impl Into<String>) -> Self {
        Self { error: msg.into() }
    }
}

type ApiError = (StatusCode, Json<ErrorResponse>);

/// HTTP status for a failed operation
pub fn status_for(err: &MonitorError) -> StatusCode {
    match err.kind() {
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::PermissionDenied => StatusCode::FORBIDDEN,
        ErrorKind::InvalidInput => StatusCode::BAD_REQUEST,
        ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// List running processes
pub async fn list_processes(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProcessInfo>>, ApiError> {
    match state.monitor.list_processes().await {
        Ok(processes) => Ok(Json(processes)),
        Err(e) => {
            tracing::error!("Failed to list processes: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(e.to_string())),
            ))
        }
    }
}

/// Sample system CPU and memory usage
pub async fn get_usage(State(state): State<AppState>) -> Result<Json<SystemUsage>, ApiError> {
    match state.monitor.system_usage().await {
        Ok(usage) => Ok(Json(usage)),
        Err(e) => {
            tracing::error!("Failed to sample usage: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(e.to_string())),
            ))
        }
    }
}

/// Terminate a process by pid
///
/// Body rejections (not JSON, wrong types) are reported through the same
/// error shape as a missing pid.
pub async fn terminate_process(
    State(state): State<AppState>,
    body: Result<Json<TerminateRequest>, JsonRejection>,
) -> (StatusCode, Json<TerminateResponse>) {
    let result = match body {
        Ok(Json(req)) => state.monitor.terminate(req.pid).await,
        Err(rejection) => Err(MonitorError::invalid_input(format!(
            "invalid request body: {}",
            rejection.body_text()
        ))),
    };

    match result {
        Ok(pid) => (StatusCode::OK, Json(TerminateResponse::terminated(pid))),
        Err(e) => {
            tracing::warn!("Terminate request failed: {}", e);
            let status = if state.legacy_status_codes {
                StatusCode::OK
            } else {
                status_for(&e)
            };
            (status, Json(TerminateResponse::failed(e.to_string())))
        }
    }
}
