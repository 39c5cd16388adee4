use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricePredictionRequest {
    pub product_id: String,
    #[serde(default)]
    pub market_data: Map<String, Value>,
    #[serde(default)]
    pub historical_prices: Vec<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceTrend {
    Rising,
    Stable,
    Falling,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricePrediction {
    pub predicted_price: f64,
    pub confidence: f64,
    pub trend: PriceTrend,
}
