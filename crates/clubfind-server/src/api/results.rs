use std::collections::BTreeMap;

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Extension, Json,
};
use serde::Serialize;
use uuid::Uuid;

use clubfind_catalog::{AppliedFilter, ProductRecord};
use clubfind_core::{ClubCategory, DisplayConfig, MismatchSignal};
use clubfind_query::SearchOutcome;

use super::{ApiError, ApiResponse, AppState, ResponseMeta};
use crate::middleware::RequestId;

/// Fully rendered result set. Each successful GET consumes the entry;
/// a second request for the same id returns `not_found`.
#[derive(Debug, Serialize)]
pub struct ResultView {
    pub query: String,
    pub category: ClubCategory,
    pub category_label: String,
    pub signal: MismatchSignal,
    pub resolved_models: Vec<String>,
    pub url: Option<String>,
    pub total_count: Option<u32>,
    pub no_results: bool,
    pub applied_filters: Vec<AppliedFilter>,
    pub next_page_url: Option<String>,
    pub records: Vec<RecordView>,
}

/// One product card, with attributes narrowed to the category's visible
/// allowlist.
#[derive(Debug, Serialize)]
pub struct RecordView {
    pub brand: Option<String>,
    pub model: Option<String>,
    pub image_url: Option<String>,
    pub product_url: Option<String>,
    pub is_parent_model: bool,
    pub price: Option<String>,
    pub condition: Option<String>,
    pub new_price: Option<String>,
    pub new_url: Option<String>,
    pub used_price: Option<String>,
    pub used_url: Option<String>,
    pub attributes: BTreeMap<String, String>,
}

pub(super) fn render(outcome: SearchOutcome, display: &DisplayConfig) -> ResultView {
    let category = outcome.request.category;
    let visible = display.visible_attributes(category);
    let records = outcome
        .extraction
        .records
        .into_iter()
        .map(|record| render_record(record, visible))
        .collect();

    ResultView {
        query: outcome.request.raw_query,
        category,
        category_label: category.to_string(),
        signal: outcome.signal,
        resolved_models: outcome
            .models
            .canonical_names()
            .into_iter()
            .map(str::to_string)
            .collect(),
        url: outcome.url,
        total_count: outcome.extraction.total_count,
        no_results: outcome.extraction.no_results,
        applied_filters: outcome.extraction.applied_filters,
        next_page_url: outcome.extraction.next_page_url,
        records,
    }
}

fn render_record(record: ProductRecord, visible: &[String]) -> RecordView {
    // An unconfigured category shows everything.
    let attributes = record
        .attributes
        .into_iter()
        .filter(|(label, _)| visible.is_empty() || visible.iter().any(|v| v == label))
        .collect();

    RecordView {
        brand: record.brand,
        model: record.model,
        image_url: record.image_url,
        product_url: record.product_url,
        is_parent_model: record.is_parent_model,
        price: record.price,
        condition: record.condition,
        new_price: record.new_price,
        new_url: record.new_url,
        used_price: record.used_price,
        used_url: record.used_url,
        attributes,
    }
}

pub async fn take(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let Ok(id) = Uuid::parse_str(&id) else {
        return Err(ApiError::new(
            req_id.0,
            "validation_error",
            "result id must be a UUID",
        ));
    };

    let Some(outcome) = state.cache.take(id) else {
        return Err(ApiError::new(
            req_id.0,
            "not_found",
            "result expired or already retrieved",
        ));
    };

    Ok(Json(ApiResponse {
        data: render(outcome, &state.display),
        meta: ResponseMeta::new(req_id.0),
    }))
}
