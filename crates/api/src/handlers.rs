use axum::{extract::State, Json};
use serde_json::Value;
use std::future::Future;

use tutuu_ai_core::domain::construction::{ConstructionEstimate, ConstructionEstimateRequest};
use tutuu_ai_core::domain::market::MarketAnalysis;
use tutuu_ai_core::domain::pricing::{PricePrediction, PricePredictionRequest};
use tutuu_ai_core::domain::recommendation::{RecommendationRequest, Recommendations};
use tutuu_ai_core::domain::service::{Discovery, HealthStatus};
use tutuu_ai_core::envelope::Envelope;
use tutuu_ai_core::routes::{openapi_document, Route};

use crate::app::AppState;
use crate::error::ApiError;
use crate::extract::ClientDevice;

pub type HandlerResult<T> = Result<Json<Envelope<T>>, ApiError>;

/// Shared request pipeline: run the route's compute step, then wrap the
/// payload in the envelope or hand the failure to the route's fault boundary.
async fn exchange<T, F>(
    route: Route,
    ClientDevice(device): ClientDevice,
    state: &AppState,
    compute: F,
) -> HandlerResult<T>
where
    F: Future<Output = anyhow::Result<T>>,
{
    match compute.await {
        Ok(payload) => Ok(Json(Envelope::success(
            device,
            route.success_message(),
            payload,
        ))),
        Err(err) => Err(ApiError::new(route, device, state.mode, err)),
    }
}

pub async fn health(
    State(state): State<AppState>,
    device: ClientDevice,
) -> HandlerResult<HealthStatus> {
    exchange(Route::Health, device, &state, async {
        Ok::<_, anyhow::Error>(HealthStatus::healthy_at(chrono::Utc::now()))
    })
    .await
}

pub async fn root(State(state): State<AppState>, device: ClientDevice) -> HandlerResult<Discovery> {
    exchange(Route::Discovery, device, &state, async {
        Ok::<_, anyhow::Error>(Discovery::from_catalog())
    })
    .await
}

pub async fn recommendations(
    State(state): State<AppState>,
    device: ClientDevice,
    Json(request): Json<RecommendationRequest>,
) -> HandlerResult<Recommendations> {
    exchange(Route::Recommendations, device, &state, async {
        let out = state.engine.recommend(&request).await?;
        out.validate()?;
        Ok::<_, anyhow::Error>(out)
    })
    .await
}

pub async fn price_prediction(
    State(state): State<AppState>,
    device: ClientDevice,
    Json(request): Json<PricePredictionRequest>,
) -> HandlerResult<PricePrediction> {
    exchange(Route::PricePrediction, device, &state, async {
        let out = state.engine.predict_price(&request).await?;
        out.validate()?;
        Ok::<_, anyhow::Error>(out)
    })
    .await
}

pub async fn construction_estimate(
    State(state): State<AppState>,
    device: ClientDevice,
    Json(request): Json<ConstructionEstimateRequest>,
) -> HandlerResult<ConstructionEstimate> {
    exchange(Route::ConstructionEstimate, device, &state, async {
        let out = state.engine.estimate_construction(&request).await?;
        out.validate()?;
        Ok::<_, anyhow::Error>(out)
    })
    .await
}

pub async fn market_analysis(
    State(state): State<AppState>,
    device: ClientDevice,
) -> HandlerResult<MarketAnalysis> {
    exchange(Route::MarketAnalysis, device, &state, async {
        let out = state.engine.analyze_market().await?;
        out.validate()?;
        Ok::<_, anyhow::Error>(out)
    })
    .await
}

pub async fn openapi() -> Json<Value> {
    Json(openapi_document())
}
