//! Model resolution: a cheap classification gate, then reference-list
//! mapping for queries that name specific models.
//!
//! Both calls degrade rather than fail: a classification error means "not
//! model-specific" and an extraction error means "no models resolved". A
//! missing reference list makes resolution a no-op.

use clubfind_core::{ClubCategory, ModelMapping, RefData};
use clubfind_llm::ChatBackend;

/// The classifier must answer with a single token.
const CLASSIFY_MAX_TOKENS: u32 = 2;

/// Room for up to seven `reference=Official Name` pairs.
const MAPPING_MAX_TOKENS: u32 = 400;

/// Worked examples keeping the classifier on its two-label contract.
const CLASSIFY_EXAMPLES: &str = "\
EXAMPLES - respond ONLY with 1 or 0
User: \"ping irons\"                  -> 0
User: \"titleist drivers\"            -> 0
User: \"ping g430 driver\"            -> 1
User: \"taylormade spider putters\"   -> 1
User: \"mizuno jpx 923 forged\"       -> 1";

/// Returns `true` if the query references explicit club models.
///
/// Delegates to the chat backend with a fixed two-label instruction and
/// the known brand list, so brand names are never mistaken for model
/// names. Any call failure or off-contract response is treated as the
/// generic label — classification must never abort the pipeline.
pub async fn classify_is_model_specific<B: ChatBackend>(
    backend: &B,
    refdata: &RefData,
    raw_query: &str,
) -> bool {
    let system = format!(
        "You are the first step in a natural-language golf-search tool. \
         Reply with '1' if the query is model-specific or '0' if generic. \
         Never output anything except '1' or '0'.\n\n{CLASSIFY_EXAMPLES}\n\n\
         These names are BRANDS, not models - do NOT treat them as models:\n{}",
        refdata.brand_block()
    );

    match backend.complete(&system, raw_query, CLASSIFY_MAX_TOKENS).await {
        Ok(label) => {
            let is_model_specific = label.trim_start().starts_with('1');
            tracing::debug!(label = %label, is_model_specific, "query classified");
            is_model_specific
        }
        Err(e) => {
            tracing::warn!(error = %e, "classification failed, treating query as generic");
            false
        }
    }
}

/// Maps the query's model references onto the category's canonical list.
///
/// Returns an empty mapping when the reference list is missing, the call
/// fails, or the output parses to nothing — all three are "no models
/// resolved", not errors.
pub async fn extract_and_map<B: ChatBackend>(
    backend: &B,
    refdata: &RefData,
    raw_query: &str,
    category: ClubCategory,
) -> ModelMapping {
    let model_block = refdata.model_block(category);
    if model_block.is_empty() {
        tracing::warn!(category = %category, "no canonical model list, skipping resolution");
        return ModelMapping::new();
    }

    let system = format!(
        "You identify {category} model names in the user's query and map them \
         to the official list below.\n\
         Return pairs in the format userReference=officialModel, \
         comma-separated, max {}.\n\
         Omit any reference you cannot confidently match.\n\
         List of official models:\n{model_block}",
        ModelMapping::MAX_MODELS
    );

    match backend.complete(&system, raw_query, MAPPING_MAX_TOKENS).await {
        Ok(output) => {
            let mapping = parse_mapping(&output);
            tracing::debug!(pairs = mapping.len(), "model references resolved");
            mapping
        }
        Err(e) => {
            tracing::warn!(error = %e, "model extraction failed, resolving no models");
            ModelMapping::new()
        }
    }
}

/// Parses `reference=Official Name` pairs, comma-separated.
///
/// Pairs without `=` or with an empty side are dropped; duplicates and
/// anything past the cap are handled by [`ModelMapping`].
fn parse_mapping(raw: &str) -> ModelMapping {
    let mut mapping = ModelMapping::new();
    for pair in raw.split(',') {
        let Some((reference, canonical)) = pair.split_once('=') else {
            continue;
        };
        let reference = reference.trim();
        let canonical = canonical.trim();
        if reference.is_empty() || canonical.is_empty() {
            continue;
        }
        mapping.insert(reference, canonical);
    }
    mapping
}
