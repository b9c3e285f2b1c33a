//! Route handlers.

use super::error::{ApiError, ApiJson};
use super::server::SharedState;
use crate::models::{AdviceResponse, QueryRequest, ScenarioRequest, ScenarioResponse};
use axum::Json;
use axum::extract::State;
use serde_json::{Value, json};

/// `GET /`
pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "Legal Aid Expert System API",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// `GET /categories`
pub async fn categories(State(state): State<SharedState>) -> Json<Value> {
    Json(json!({ "categories": state.service.categories() }))
}

/// `POST /scenarios`
pub async fn scenarios(
    State(state): State<SharedState>,
    ApiJson(request): ApiJson<ScenarioRequest>,
) -> Json<ScenarioResponse> {
    Json(ScenarioResponse {
        scenarios: state.service.scenarios(&request.category),
    })
}

/// `POST /query`
pub async fn query(
    State(state): State<SharedState>,
    ApiJson(request): ApiJson<QueryRequest>,
) -> Result<Json<AdviceResponse>, ApiError> {
    tracing::info!(category = %request.category, "Received query");
    let response = state.service.answer(&request)?;
    Ok(Json(response))
}

/// `GET /health`
pub async fn health(State(state): State<SharedState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "rules_loaded": state.service.rules_loaded(),
    }))
}

/// `GET /test-scenarios`
pub async fn test_scenarios(State(state): State<SharedState>) -> Json<Value> {
    Json(json!({ "scenarios_by_category": state.service.scenarios_by_category() }))
}
