use axum::{extract::State, response::IntoResponse, Extension, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use clubfind_core::{ClubCategory, SearchRequest};
use clubfind_query::run_search;

use super::{ApiError, ApiResponse, AppState, ResponseMeta};
use crate::middleware::RequestId;

#[derive(Debug, Deserialize)]
pub struct SearchPayload {
    pub query: String,
    pub category: String,
}

/// Summary returned immediately after a search; the full rendered result
/// set is retrieved once from `/api/v1/results/{id}`.
#[derive(Debug, Serialize)]
pub struct SearchSummary {
    pub result_id: Uuid,
    pub url: Option<String>,
    pub is_model_specific: bool,
    pub has_mismatch: bool,
    pub implied_category: Option<ClubCategory>,
    pub resolved_models: Vec<String>,
    pub total_count: Option<u32>,
    pub no_results: bool,
    pub record_count: usize,
}

pub async fn run(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(payload): Json<SearchPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let raw_query = payload.query.trim();
    if raw_query.is_empty() {
        return Err(ApiError::new(
            req_id.0,
            "validation_error",
            "query must not be empty",
        ));
    }
    let Some(category) = ClubCategory::from_slug(&payload.category) else {
        return Err(ApiError::new(
            req_id.0,
            "validation_error",
            format!("unknown category: {}", payload.category),
        ));
    };

    let request = SearchRequest {
        raw_query: raw_query.to_string(),
        category,
    };
    let outcome = run_search(
        state.backend.as_ref(),
        &state.catalog,
        &state.refdata,
        request,
    )
    .await;

    let url = outcome.url.clone();
    let signal = outcome.signal;
    let resolved_models: Vec<String> = outcome
        .models
        .canonical_names()
        .into_iter()
        .map(str::to_string)
        .collect();
    let total_count = outcome.extraction.total_count;
    let no_results = outcome.extraction.no_results;
    let record_count = outcome.extraction.records.len();
    let result_id = state.cache.insert(outcome);

    Ok(Json(ApiResponse {
        data: SearchSummary {
            result_id,
            url,
            is_model_specific: signal.is_model_specific,
            has_mismatch: signal.has_mismatch,
            implied_category: signal.implied_category,
            resolved_models,
            total_count,
            no_results,
            record_count,
        },
        meta: ResponseMeta::new(req_id.0),
    }))
}
