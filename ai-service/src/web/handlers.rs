//! HTTP handlers, one per endpoint
//!
//! Each handler receives an already validated payload, calls into `core`
//! and serializes the result.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use serde_json::json;
use tracing::debug;

use crate::core::{detect_zscore, generate_copy, score_lead, select_variant, suggest_price};
use crate::error::ServiceResult;
use crate::state::AppState;
use crate::traits::OutlierDetector;
use crate::types::{
    AbSelectRequest, AnomalyReport, CopyDeck, CopyRequest, DetectionMethod, HealthStatus, LeadFeatures,
    LeadScore, PriceSuggestion, PricingRequest, TimeSeriesInput, VariantChoice, VersionInfo,
};
use crate::web::extract::ValidatedJson;

/// Liveness probe
pub async fn healthz() -> Json<HealthStatus> {
    Json(HealthStatus { ok: true })
}

/// Service identity and optional capabilities
pub async fn version<D>(State(state): State<AppState<D>>) -> Json<VersionInfo>
where
    D: OutlierDetector + 'static,
{
    Json(VersionInfo {
        name: state.config.app_name.clone(),
        version: state.config.app_version.clone(),
        iforest: state.detector.is_available(),
    })
}

pub async fn predict_lead(ValidatedJson(features): ValidatedJson<LeadFeatures>) -> Json<LeadScore> {
    let result = score_lead(&features);
    debug!(probability = result.probability, "Scored lead");
    Json(result)
}

/// Thompson Sampling draw from the thread-local generator
pub async fn ab_select(ValidatedJson(request): ValidatedJson<AbSelectRequest>) -> ServiceResult<Json<VariantChoice>> {
    let choice = select_variant(&request.variants, &mut rand::thread_rng())?;
    Ok(Json(choice))
}

pub async fn anomaly_events<D>(
    State(state): State<AppState<D>>,
    ValidatedJson(input): ValidatedJson<TimeSeriesInput>,
) -> ServiceResult<Json<AnomalyReport>>
where
    D: OutlierDetector + 'static,
{
    match input.method {
        DetectionMethod::ZScore => {
            let summary = detect_zscore(&input.values, input.z_thresh);
            debug!(points = input.values.len(), flagged = summary.anomalies.len(), "Z-score pass");

            Ok(Json(AnomalyReport::ZScore {
                anomalies: summary.anomalies,
                mean: summary.mean,
                std: summary.std,
            }))
        }
        DetectionMethod::IsolationForest => {
            let params = input.isolation_params();
            let detector = Arc::clone(&state.detector);
            let values = input.values;

            // Tree building is CPU bound, keep it off the async workers
            let anomalies =
                tokio::task::spawn_blocking(move || detector.detect_outliers(&values, &params)).await??;

            Ok(Json(AnomalyReport::IsolationForest { anomalies }))
        }
    }
}

pub async fn generate_copy_deck(ValidatedJson(request): ValidatedJson<CopyRequest>) -> Json<CopyDeck> {
    Json(generate_copy(&request))
}

pub async fn pricing_suggest(ValidatedJson(request): ValidatedJson<PricingRequest>) -> Json<PriceSuggestion> {
    let suggestion = suggest_price(&request);
    debug!(country = %suggestion.country, factor = suggestion.factor, "Priced request");
    Json(suggestion)
}

/// JSON 404 for unknown routes
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "detail": "Not Found" })))
}
