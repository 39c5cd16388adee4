//! Engine that answers every request with fixed sample data.
//!
//! Request fields are logged at info level but never influence the result.

use crate::domain::construction::{ConstructionEstimate, ConstructionEstimateRequest, MaterialCost};
use crate::domain::market::{Level, MarketAnalysis, MarketTrends};
use crate::domain::pricing::{PricePrediction, PricePredictionRequest, PriceTrend};
use crate::domain::recommendation::{RecommendationRequest, Recommendations, RecommendedProduct};
use crate::insight::InsightEngine;

#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureEngine;

impl FixtureEngine {
    pub fn new() -> Self {
        Self
    }
}

fn product(id: &str, name: &str, confidence: f64, reason: &str) -> RecommendedProduct {
    RecommendedProduct {
        product_id: id.to_string(),
        name: name.to_string(),
        confidence,
        reason: reason.to_string(),
    }
}

fn material(name: &str, quantity: f64, unit: &str, cost: f64) -> MaterialCost {
    MaterialCost {
        material: name.to_string(),
        quantity,
        unit: unit.to_string(),
        cost,
    }
}

#[async_trait::async_trait]
impl InsightEngine for FixtureEngine {
    async fn recommend(&self, request: &RecommendationRequest) -> anyhow::Result<Recommendations> {
        tracing::info!(
            user_id = %request.user_id,
            search_query = ?request.search_query,
            category = ?request.category,
            budget = ?request.budget,
            "fixture recommendations"
        );

        Ok(Recommendations {
            recommendations: vec![
                product(
                    "prod-001",
                    "Кирпич керамический М150",
                    0.92,
                    "Популярный товар в вашей категории",
                ),
                product(
                    "prod-002",
                    "Цемент М500 50 кг",
                    0.87,
                    "Часто покупают вместе с кирпичом",
                ),
                product(
                    "prod-003",
                    "Арматура А500С 12 мм",
                    0.81,
                    "Соответствует указанному бюджету",
                ),
            ],
            confidence: 0.85,
        })
    }

    async fn predict_price(
        &self,
        request: &PricePredictionRequest,
    ) -> anyhow::Result<PricePrediction> {
        tracing::info!(
            product_id = %request.product_id,
            history_len = request.historical_prices.len(),
            "fixture price prediction"
        );

        Ok(PricePrediction {
            predicted_price: 1250.0,
            confidence: 0.78,
            trend: PriceTrend::Stable,
        })
    }

    async fn estimate_construction(
        &self,
        request: &ConstructionEstimateRequest,
    ) -> anyhow::Result<ConstructionEstimate> {
        tracing::info!(
            project_type = %request.project_type,
            area = request.area,
            materials_len = request.materials.len(),
            complexity = %request.complexity,
            "fixture construction estimate"
        );

        Ok(ConstructionEstimate {
            total_estimate: 2_500_000.0,
            materials_breakdown: vec![
                material("Кирпич", 15_000.0, "шт", 375_000.0),
                material("Цемент", 120.0, "мешок", 54_000.0),
                material("Доски", 8.0, "м³", 96_000.0),
            ],
            labor_estimate: 1_000_000.0,
            timeline_days: 90,
        })
    }

    async fn analyze_market(&self) -> anyhow::Result<MarketAnalysis> {
        Ok(MarketAnalysis {
            market_trends: MarketTrends {
                demand: Level::High,
                supply: Level::Stable,
                price_trend: PriceTrend::Rising,
            },
            top_categories: vec![
                "Строительные материалы".to_string(),
                "Инструменты".to_string(),
                "Сантехника".to_string(),
                "Электрика".to_string(),
            ],
            seasonal_factors: vec![
                "Весенний рост спроса на стройматериалы".to_string(),
                "Летний пик строительного сезона".to_string(),
                "Снижение активности в зимний период".to_string(),
            ],
        })
    }
}
