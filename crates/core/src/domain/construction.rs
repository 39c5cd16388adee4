use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConstructionEstimateRequest {
    pub project_type: String,
    pub area: f64,
    pub materials: Vec<String>,
    pub complexity: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConstructionEstimate {
    pub total_estimate: f64,
    pub materials_breakdown: Vec<MaterialCost>,
    pub labor_estimate: f64,
    pub timeline_days: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialCost {
    pub material: String,
    pub quantity: f64,
    pub unit: String,
    pub cost: f64,
}
