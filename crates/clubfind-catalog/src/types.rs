use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One normalized product listing.
///
/// A *parent model* is a listing available in multiple conditions (new and
/// used) rather than a single fixed-condition unit; it carries the
/// `new_*`/`used_*` pairs instead of a single `price`/`condition`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub brand: Option<String>,
    pub model: Option<String>,
    pub image_url: Option<String>,
    pub product_url: Option<String>,
    pub is_parent_model: bool,
    /// Current price for a single fixed-condition listing.
    pub price: Option<String>,
    /// Condition grade for a single fixed-condition listing, e.g. `"Mint 9.5"`.
    pub condition: Option<String>,
    pub new_price: Option<String>,
    pub new_url: Option<String>,
    pub used_price: Option<String>,
    pub used_url: Option<String>,
    /// Every labeled attribute from the card's attribute block, keyed by
    /// its lowercased label. No allowlist at extraction time; display
    /// filtering is a presentation concern.
    pub attributes: BTreeMap<String, String>,
}

/// One label/value pair from the page's active-filter list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedFilter {
    pub label: String,
    pub value: String,
}

/// Everything extracted from one listing page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub records: Vec<ProductRecord>,
    /// Total result count from the toolbar counter. `None` means the count
    /// could not be determined — callers must not read it as zero.
    pub total_count: Option<u32>,
    /// Active filters in the order the page renders them.
    pub applied_filters: Vec<AppliedFilter>,
    pub next_page_url: Option<String>,
    /// `true` only when the page shows its "no products match" notice —
    /// the single authoritative confirmed-empty signal.
    pub no_results: bool,
}

impl ExtractionResult {
    /// The degraded "could not determine anything" value returned when a
    /// fetch or parse fails.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }
}
