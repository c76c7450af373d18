use axum::{extract::State, response::IntoResponse, Extension, Json};
use serde::Serialize;

use clubfind_core::ClubCategory;

use super::{ApiResponse, AppState, ResponseMeta};
use crate::middleware::RequestId;

#[derive(Debug, Serialize)]
pub struct CategoryItem {
    pub slug: &'static str,
    pub label: String,
    /// Example query shown as the search box hint for this category.
    pub placeholder: Option<String>,
}

pub async fn list(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> impl IntoResponse {
    let data: Vec<CategoryItem> = ClubCategory::ALL
        .into_iter()
        .map(|category| CategoryItem {
            slug: category.slug(),
            label: category.to_string(),
            placeholder: state
                .refdata
                .placeholder_hint(category)
                .map(str::to_string),
        })
        .collect();

    Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    })
}
