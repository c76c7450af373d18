//! Filter-URL compilation.
//!
//! The semantic half (brand, flex, loft, dexterity, price, condition) is
//! delegated to the [`FilterInferer`] with the category's instruction
//! document; the deterministic half — the `g2_model[i]` group built from
//! resolved canonical names — is appended here and is explicitly withheld
//! from the generative step.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use clubfind_core::{ModelMapping, RefData, SearchRequest};
use clubfind_llm::FilterInferer;

use crate::error::CompileError;

/// Characters left bare by `quote_plus`-style encoding: letters, digits,
/// `_ . - ~`. Space is handled separately as `+`.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~');

/// Generic instruction document used when the category's own file is
/// missing. Carries the one worked example the encoding grammar is
/// learned from, plus the condition/new-used exclusivity rule.
const FALLBACK_INSTRUCTIONS: &str = "\
Here is an example URL that reflects how the URL gets created when filters \
are chosen on the catalog website:

https://www.2ndswing.com/golf-clubs/drivers?g2_brand%5B0%5D=Cleveland&g2_brand%5B1%5D=Ping&g2_brand%5B2%5D=TaylorMade&g2_club_loft%5B0%5D=10.5%C2%B0&g2_club_loft%5B1%5D=9.5%C2%B0&g2_condition%5B0%5D=Above+Average+9.0&g2_condition%5B1%5D=Mint+9.5&g2_dexterity%5B0%5D=Left+Handed&g2_dexterity%5B1%5D=Right+Handed&g2_shaft_flex%5B0%5D=Regular&g2_shaft_flex%5B1%5D=Stiff&new_used_filter%5B0%5D=New&new_used_filter%5B1%5D=Used&price=425-850

Keep in mind there are separate 'condition' and 'new/used' filters. If the \
user specifies new or used, use the new_used_filter group; if they specify \
a more specific condition grade, use g2_condition instead - never both.

Build a URL for the user's request following that example. Respond ONLY \
with a URL.";

/// Appended to every instruction document: model filters are deterministic
/// data and must never be left to the generative step.
const NO_MODEL_PARAMS_RULE: &str =
    "Do NOT include any g2_model parameters; they will be appended later.";

/// Compiles the fully-qualified filter URL for a request.
///
/// The inferer sees the category's instruction document (or the generic
/// fallback) plus the no-model-parameters rule; the resolved canonical
/// names are then appended as an indexed `g2_model` group — deduplicated,
/// insertion-ordered, capped, URL-encoded.
///
/// # Errors
///
/// Returns [`CompileError`] when inference fails or answers with
/// something that is not a URL. There is no partial URL: the caller
/// treats this as total pipeline failure for the request.
pub async fn compile<I: FilterInferer>(
    inferer: &I,
    refdata: &RefData,
    request: &SearchRequest,
    mapping: &ModelMapping,
) -> Result<String, CompileError> {
    let instructions = refdata
        .filter_instructions(request.category)
        .unwrap_or(FALLBACK_INSTRUCTIONS);
    let prompt = format!("{instructions}\n\n{NO_MODEL_PARAMS_RULE}");

    let base_url = inferer.infer(&request.raw_query, &prompt).await?;
    let base_url = base_url.trim();
    if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
        return Err(CompileError::NotAUrl(base_url.to_string()));
    }

    Ok(append_model_filters(base_url, &mapping.canonical_names()))
}

/// Appends the indexed `g2_model` filter group to a base URL.
///
/// Names are already deduplicated and capped by [`ModelMapping`]; each is
/// `quote_plus`-encoded. Chooses `?` vs `&` based on whether the base URL
/// already has a query string.
#[must_use]
pub fn append_model_filters(base_url: &str, canonical_names: &[&str]) -> String {
    if canonical_names.is_empty() {
        return base_url.to_string();
    }

    let chunk = canonical_names
        .iter()
        .enumerate()
        .map(|(i, name)| format!("g2_model[{i}]={}", quote_plus(name)))
        .collect::<Vec<_>>()
        .join("&");

    let sep = if base_url.contains('?') {
        if base_url.ends_with('?') || base_url.ends_with('&') {
            ""
        } else {
            "&"
        }
    } else {
        "?"
    };

    format!("{base_url}{sep}{chunk}")
}

/// `quote_plus`-style encoding: spaces become `+`, everything outside
/// `[A-Za-z0-9_.~-]` becomes `%XX`.
fn quote_plus(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for part in value.split(' ') {
        if !encoded.is_empty() {
            encoded.push('+');
        }
        encoded.push_str(&utf8_percent_encode(part, QUERY_VALUE).to_string());
    }
    encoded
}
