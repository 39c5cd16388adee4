pub mod fixture;

use crate::domain::construction::{ConstructionEstimate, ConstructionEstimateRequest};
use crate::domain::market::MarketAnalysis;
use crate::domain::pricing::{PricePrediction, PricePredictionRequest};
use crate::domain::recommendation::{RecommendationRequest, Recommendations};

/// Computes the payload of each business endpoint.
///
/// Handlers never build payloads themselves; swapping the engine is how real
/// models get wired in.
#[async_trait::async_trait]
pub trait InsightEngine: Send + Sync {
    async fn recommend(&self, request: &RecommendationRequest) -> anyhow::Result<Recommendations>;

    async fn predict_price(
        &self,
        request: &PricePredictionRequest,
    ) -> anyhow::Result<PricePrediction>;

    async fn estimate_construction(
        &self,
        request: &ConstructionEstimateRequest,
    ) -> anyhow::Result<ConstructionEstimate>;

    async fn analyze_market(&self) -> anyhow::Result<MarketAnalysis>;
}
