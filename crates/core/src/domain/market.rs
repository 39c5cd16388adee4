use serde::{Deserialize, Serialize};

use crate::domain::pricing::PriceTrend;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Low,
    Stable,
    High,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketTrends {
    pub demand: Level,
    pub supply: Level,
    pub price_trend: PriceTrend,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketAnalysis {
    pub market_trends: MarketTrends,
    pub top_categories: Vec<String>,
    pub seasonal_factors: Vec<String>,
}
