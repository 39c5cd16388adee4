use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::fmt;

use tutuu_ai_core::config::DeploymentMode;
use tutuu_ai_core::device::DeviceId;
use tutuu_ai_core::envelope::Envelope;
use tutuu_ai_core::routes::Route;

pub const GENERIC_FAULT_MESSAGE: &str = "Внутренняя ошибка сервера";

/// Fault text reaches the caller only in development mode.
pub fn fault_message(mode: DeploymentMode, base: &str, detail: impl fmt::Display) -> String {
    if mode.is_verbose() {
        format!("{base}: {detail}")
    } else {
        base.to_string()
    }
}

pub fn fault_response(device_id: DeviceId, message: String) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(Envelope::failure(device_id, message)),
    )
        .into_response()
}

/// A handler's own fault boundary.
#[derive(Debug)]
pub struct ApiError {
    route: Route,
    device_id: DeviceId,
    mode: DeploymentMode,
    source: anyhow::Error,
}

impl ApiError {
    pub fn new(
        route: Route,
        device_id: DeviceId,
        mode: DeploymentMode,
        source: anyhow::Error,
    ) -> Self {
        Self {
            route,
            device_id,
            mode,
            source,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        sentry_anyhow::capture_anyhow(&self.source);
        tracing::error!(
            route = self.route.name(),
            device_id = %self.device_id,
            error = %format!("{:#}", self.source),
            "handler failed"
        );

        let message = fault_message(
            self.mode,
            self.route.failure_message(),
            format_args!("{:#}", self.source),
        );
        fault_response(self.device_id, message)
    }
}
