use axum::{
    middleware,
    routing::{get, post, MethodRouter},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use tutuu_ai_core::config::DeploymentMode;
use tutuu_ai_core::insight::InsightEngine;
use tutuu_ai_core::routes::{Route, OPENAPI_PATH};

use crate::handlers;
use crate::middleware::{intercept_faults, log_requests};

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<dyn InsightEngine>,
    pub mode: DeploymentMode,
}

impl AppState {
    pub fn new(engine: Arc<dyn InsightEngine>, mode: DeploymentMode) -> Self {
        Self { engine, mode }
    }
}

fn catalog_handler(route: Route) -> MethodRouter<AppState> {
    match route {
        Route::Health => get(handlers::health),
        Route::Discovery => get(handlers::root),
        Route::Recommendations => post(handlers::recommendations),
        Route::PricePrediction => post(handlers::price_prediction),
        Route::ConstructionEstimate => post(handlers::construction_estimate),
        Route::MarketAnalysis => get(handlers::market_analysis),
    }
}

/// Every served path with its handler: the catalog plus the OpenAPI document.
fn route_table() -> Vec<(&'static str, MethodRouter<AppState>)> {
    Route::ALL
        .into_iter()
        .map(|route| (route.path(), catalog_handler(route)))
        .chain(std::iter::once((OPENAPI_PATH, get(handlers::openapi))))
        .collect()
}

pub fn build_router(state: AppState) -> Router {
    let mode = state.mode;

    let routes = route_table()
        .into_iter()
        .fold(Router::new(), |router, (path, handler)| router.route(path, handler))
        .with_state(state);

    with_middleware(routes, mode)
}

/// Outer to inner: CORS, fault interceptor, request logger.
pub fn with_middleware(router: Router, mode: DeploymentMode) -> Router {
    router
        .layer(middleware::from_fn(log_requests))
        .layer(middleware::from_fn_with_state(mode, intercept_faults))
        .layer(CorsLayer::permissive())
}
