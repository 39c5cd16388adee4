//! Output checks applied to every engine result before it is sent.

use anyhow::ensure;

use crate::domain::construction::ConstructionEstimate;
use crate::domain::market::MarketAnalysis;
use crate::domain::pricing::PricePrediction;
use crate::domain::recommendation::Recommendations;

fn ensure_confidence(confidence: f64, what: &str) -> anyhow::Result<()> {
    ensure!(
        (0.0..=1.0).contains(&confidence),
        "{what} confidence must be between 0 and 1 (got {confidence})"
    );
    Ok(())
}

fn ensure_amount(value: f64, what: &str) -> anyhow::Result<()> {
    ensure!(
        value.is_finite() && value >= 0.0,
        "{what} must be a finite non-negative number (got {value})"
    );
    Ok(())
}

impl Recommendations {
    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            !self.recommendations.is_empty(),
            "recommendations must be non-empty"
        );
        ensure_confidence(self.confidence, "overall")?;
        for item in &self.recommendations {
            ensure!(!item.product_id.trim().is_empty(), "product_id must be non-empty");
            ensure_confidence(item.confidence, &format!("product {}", item.product_id))?;
        }
        Ok(())
    }
}

impl PricePrediction {
    pub fn validate(&self) -> anyhow::Result<()> {
        ensure_amount(self.predicted_price, "predicted_price")?;
        ensure_confidence(self.confidence, "prediction")
    }
}

impl ConstructionEstimate {
    // Line items are not required to sum to the total.
    pub fn validate(&self) -> anyhow::Result<()> {
        ensure_amount(self.total_estimate, "total_estimate")?;
        ensure_amount(self.labor_estimate, "labor_estimate")?;
        for line in &self.materials_breakdown {
            ensure_amount(line.quantity, &format!("quantity of {}", line.material))?;
            ensure_amount(line.cost, &format!("cost of {}", line.material))?;
        }
        Ok(())
    }
}

impl MarketAnalysis {
    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            !self.top_categories.is_empty(),
            "top_categories must be non-empty"
        );
        Ok(())
    }
}
