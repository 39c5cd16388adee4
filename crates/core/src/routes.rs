//! Catalog of the routes the service exposes.
//!
//! The router registers handlers by hand; the catalog drives the discovery
//! endpoint, the OpenAPI document and the localized handler messages. Tests
//! in the api crate keep the two in sync.

use serde_json::{json, Map, Value};

pub const OPENAPI_PATH: &str = "/openapi.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Health,
    Discovery,
    Recommendations,
    PricePrediction,
    ConstructionEstimate,
    MarketAnalysis,
}

impl Route {
    pub const ALL: [Route; 6] = [
        Route::Health,
        Route::Discovery,
        Route::Recommendations,
        Route::PricePrediction,
        Route::ConstructionEstimate,
        Route::MarketAnalysis,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::Health => "/health",
            Route::Discovery => "/",
            Route::Recommendations => "/recommendations",
            Route::PricePrediction => "/price-prediction",
            Route::ConstructionEstimate => "/construction-estimate",
            Route::MarketAnalysis => "/market-analysis",
        }
    }

    pub fn method(self) -> &'static str {
        match self {
            Route::Recommendations | Route::PricePrediction | Route::ConstructionEstimate => {
                "POST"
            }
            Route::Health | Route::Discovery | Route::MarketAnalysis => "GET",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Route::Health => "health",
            Route::Discovery => "root",
            Route::Recommendations => "recommendations",
            Route::PricePrediction => "price_prediction",
            Route::ConstructionEstimate => "construction_estimate",
            Route::MarketAnalysis => "market_analysis",
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            Route::Health => "Service health check",
            Route::Discovery => "Service information and route directory",
            Route::Recommendations => "Product recommendations for a user",
            Route::PricePrediction => "Price forecast for a product",
            Route::ConstructionEstimate => "Construction cost estimate",
            Route::MarketAnalysis => "Market trends overview",
        }
    }

    /// Health responses carry no message line.
    pub fn success_message(self) -> Option<&'static str> {
        match self {
            Route::Health => None,
            Route::Discovery => Some("AI Service TUTUU MARKET MVP"),
            Route::Recommendations => Some("Рекомендации успешно сгенерированы"),
            Route::PricePrediction => Some("Прогноз цены успешно выполнен"),
            Route::ConstructionEstimate => Some("Смета строительства успешно рассчитана"),
            Route::MarketAnalysis => Some("Анализ рынка успешно выполнен"),
        }
    }

    /// Message used by the handler's own fault boundary.
    pub fn failure_message(self) -> &'static str {
        match self {
            Route::Health => "Ошибка проверки состояния сервиса",
            Route::Discovery => "Ошибка получения информации о сервисе",
            Route::Recommendations => "Ошибка при генерации рекомендаций",
            Route::PricePrediction => "Ошибка при прогнозировании цены",
            Route::ConstructionEstimate => "Ошибка при расчёте сметы строительства",
            Route::MarketAnalysis => "Ошибка при анализе рынка",
        }
    }
}

/// Minimal OpenAPI 3 document describing the catalogued routes.
pub fn openapi_document() -> Value {
    let mut paths = Map::new();
    for route in Route::ALL {
        let operation = json!({
            "operationId": route.name(),
            "summary": route.summary(),
            "parameters": [{
                "name": crate::device::DEVICE_ID_HEADER,
                "in": "header",
                "required": false,
                "schema": {"type": "string"}
            }],
            "responses": {
                "200": {"description": "Successful response"},
                "500": {"description": "Internal fault"}
            }
        });
        let entry = paths
            .entry(route.path().to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if let Value::Object(methods) = entry {
            methods.insert(route.method().to_ascii_lowercase(), operation);
        }
    }

    json!({
        "openapi": "3.0.3",
        "info": {
            "title": crate::SERVICE_NAME,
            "version": crate::SERVICE_VERSION
        },
        "paths": Value::Object(paths)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn paths_and_names_are_unique() {
        let paths: HashSet<_> = Route::ALL.iter().map(|r| r.path()).collect();
        let names: HashSet<_> = Route::ALL.iter().map(|r| r.name()).collect();
        assert_eq!(paths.len(), Route::ALL.len());
        assert_eq!(names.len(), Route::ALL.len());
    }

    #[test]
    fn openapi_covers_every_route() {
        let doc = openapi_document();
        for route in Route::ALL {
            let method = route.method().to_ascii_lowercase();
            assert!(
                doc["paths"][route.path()][method.as_str()].is_object(),
                "missing {} {}",
                route.method(),
                route.path()
            );
        }
        assert_eq!(doc["info"]["version"], "1.0.0");
    }
}
