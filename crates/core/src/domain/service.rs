use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::routes::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthState {
    Healthy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub service: String,
    pub timestamp: String,
    pub version: String,
    pub status: HealthState,
}

impl HealthStatus {
    pub fn healthy_at(now: DateTime<Utc>) -> Self {
        Self {
            service: crate::SERVICE_NAME.to_string(),
            timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            version: crate::SERVICE_VERSION.to_string(),
            status: HealthState::Healthy,
        }
    }
}

/// Directory of routes served by the root endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Discovery {
    pub service: String,
    pub version: String,
    pub endpoints: BTreeMap<String, String>,
    pub docs: BTreeMap<String, String>,
}

impl Discovery {
    pub fn from_catalog() -> Self {
        let endpoints = Route::ALL
            .iter()
            .map(|route| (route.name().to_string(), route.path().to_string()))
            .collect();

        let docs = BTreeMap::from([(
            "openapi".to_string(),
            crate::routes::OPENAPI_PATH.to_string(),
        )]);

        Self {
            service: crate::SERVICE_NAME.to_string(),
            version: crate::SERVICE_VERSION.to_string(),
            endpoints,
            docs,
        }
    }
}
