//! Search pipeline orchestration.

use serde::Serialize;

use clubfind_catalog::{CatalogClient, ExtractionResult};
use clubfind_core::{MismatchSignal, ModelMapping, RefData, SearchRequest};
use clubfind_llm::{ChatBackend, FilterInferer};

use crate::compiler;
use crate::mismatch;
use crate::resolver;

/// Everything one search produced, shaped for display.
#[derive(Debug, Clone, Serialize)]
pub struct SearchOutcome {
    pub request: SearchRequest,
    pub signal: MismatchSignal,
    pub models: ModelMapping,
    /// The compiled filter URL. `None` means URL compilation failed and
    /// nothing was fetched.
    pub url: Option<String>,
    pub extraction: ExtractionResult,
}

/// Runs the full pipeline for one request.
///
/// 1. Mismatch detection (pure) and model-specificity classification —
///    independent of each other, neither feeds the other.
/// 2. Model extraction and mapping, only for model-specific queries: the
///    classification gate exists to skip the extraction cost on generic
///    queries.
/// 3. URL compilation; the deterministic model group is appended after
///    inference. A compile failure ends the request with `url: None` and
///    an empty extraction — no partial URL is ever fetched.
/// 4. Catalog fetch and extraction, which degrades internally.
///
/// Never fails: every stage has a defined empty/negative fallback.
pub async fn run_search<B>(
    backend: &B,
    catalog: &CatalogClient,
    refdata: &RefData,
    request: SearchRequest,
) -> SearchOutcome
where
    B: ChatBackend + FilterInferer + Sync,
{
    let category_check = mismatch::detect(&request.raw_query, request.category);
    let is_model_specific =
        resolver::classify_is_model_specific(backend, refdata, &request.raw_query).await;
    let signal = MismatchSignal::new(is_model_specific, category_check);

    if signal.has_mismatch {
        tracing::info!(
            selected = %request.category,
            implied = ?signal.implied_category,
            "query vocabulary implies a different category"
        );
    }

    let models = if is_model_specific {
        resolver::extract_and_map(backend, refdata, &request.raw_query, request.category).await
    } else {
        ModelMapping::new()
    };

    let url = match compiler::compile(backend, refdata, &request, &models).await {
        Ok(url) => url,
        Err(e) => {
            tracing::error!(error = %e, "URL compilation failed, aborting search");
            return SearchOutcome {
                request,
                signal,
                models,
                url: None,
                extraction: ExtractionResult::empty(),
            };
        }
    };

    tracing::info!(url = %url, "compiled filter URL");
    let extraction = catalog.extract(&url).await;

    SearchOutcome {
        request,
        signal,
        models,
        url: Some(url),
        extraction,
    }
}
