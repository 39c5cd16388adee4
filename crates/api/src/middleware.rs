use axum::{
    extract::{Request, State},
    http::header::HOST,
    middleware::Next,
    response::Response,
};
use futures_util::FutureExt;
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::time::Instant;
use tracing::Instrument;
use uuid::Uuid;

use tutuu_ai_core::config::DeploymentMode;

use crate::error::{fault_message, fault_response, GENERIC_FAULT_MESSAGE};
use crate::extract::device_id;

/// Logs every request on entry and its status and latency on exit.
/// Faults unwind through untouched.
pub async fn log_requests(request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4();
    let device = device_id(request.headers());
    let method = request.method().clone();
    let url = request_url(&request);

    async move {
        tracing::info!("{method} {url} - Device ID: {device}");
        let started = Instant::now();

        let response = next.run(request).await;

        tracing::info!(
            "Response: {} - Time: {:.3}s",
            response.status().as_u16(),
            started.elapsed().as_secs_f64()
        );
        response
    }
    .instrument(tracing::info_span!("request", %request_id))
    .await
}

/// Absolute URL of the request. Origin-form targets are joined with the
/// `Host` header; TLS is terminated upstream, so the scheme is `http`.
fn request_url(request: &Request) -> String {
    let uri = request.uri();
    if uri.authority().is_some() {
        return uri.to_string();
    }
    match request.headers().get(HOST).and_then(|h| h.to_str().ok()) {
        Some(host) => format!("http://{host}{uri}"),
        None => uri.to_string(),
    }
}

/// Last-resort boundary: turns a panic anywhere below it into the uniform
/// 500 envelope.
pub async fn intercept_faults(
    State(mode): State<DeploymentMode>,
    request: Request,
    next: Next,
) -> Response {
    let device = device_id(request.headers());

    match AssertUnwindSafe(next.run(request)).catch_unwind().await {
        Ok(response) => response,
        Err(panic) => {
            let detail = panic_detail(panic.as_ref());
            tracing::error!(device_id = %device, error = %detail, "unhandled fault");
            sentry::capture_message(&format!("unhandled fault: {detail}"), sentry::Level::Error);

            fault_response(device, fault_message(mode, GENERIC_FAULT_MESSAGE, &detail))
        }
    }
}

fn panic_detail(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
