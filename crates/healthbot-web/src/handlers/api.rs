//! JSON API endpoints for the symptom checker.

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use healthbot_core::{AnalysisResult, Severity};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::state::SharedState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeQuery {
    pub text: String,
    pub severity: Option<Severity>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub query: String,
    pub severity: Severity,
    /// True when the caller-supplied severity warrants the advisory banner,
    /// independent of what the matcher found.
    pub severe_advisory: bool,
    pub result: AnalysisResult,
}

/// GET /api/analyze — run the matcher over free text.
pub async fn api_analyze(
    State(state): State<SharedState>,
    Query(query): Query<AnalyzeQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let text = query.text.trim();
    if text.is_empty() {
        return Err(ApiError::BadRequest("text must not be blank".to_string()));
    }

    let severity = query.severity.unwrap_or_default();
    let result = state.db.analyze(text);

    Ok(Json(AnalyzeResponse {
        query: text.to_string(),
        severity,
        severe_advisory: severity.is_severe(),
        result,
    }))
}

/// GET /api/symptoms — list the known symptom keys.
pub async fn api_symptoms(State(state): State<SharedState>) -> impl IntoResponse {
    let symptoms: Vec<String> = state.db.symptoms().map(|s| s.to_string()).collect();
    Json(serde_json::json!({
        "total": symptoms.len(),
        "symptoms": symptoms,
    }))
}

/// GET /api/health — liveness probe.
pub async fn api_health(State(state): State<SharedState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "symptoms": state.db.len(),
    }))
}
