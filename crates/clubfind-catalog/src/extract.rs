//! Listing-page parsing: HTML in, [`ExtractionResult`] out.
//!
//! Parsing is synchronous and holds the DOM only within this module — the
//! parsed `Html` tree is not `Send`, so nothing here may live across an
//! await point. Every field degrades independently: a malformed count or a
//! missing element yields `None` for that field, never an error.

use scraper::{ElementRef, Html, Node, Selector};

use crate::pagination;
use crate::selectors;
use crate::types::{AppliedFilter, ExtractionResult, ProductRecord};

/// Parses one listing page into an [`ExtractionResult`].
///
/// `page_url` is the URL the page was fetched from, used to normalize
/// relative pagination hrefs. Identical input always produces an identical
/// result.
#[must_use]
pub fn parse_listing(html: &str, page_url: &str) -> ExtractionResult {
    let doc = Html::parse_document(html);

    let no_results = doc.select(&selectors::NO_RESULTS_NOTICE).next().is_some();

    let total_count = doc
        .select(&selectors::TOTAL_COUNT)
        .next()
        .and_then(|el| parse_count(&element_text(el)));

    let applied_filters = doc
        .select(&selectors::APPLIED_FILTER_ITEM)
        .filter_map(parse_applied_filter)
        .collect();

    let next_href = doc
        .select(&selectors::NEXT_LINK)
        .next()
        .and_then(|el| el.value().attr("href"))
        .map(str::to_string);
    let page_hrefs: Vec<String> = doc
        .select(&selectors::PAGE_LINK)
        .filter_map(|el| el.value().attr("href"))
        .map(str::to_string)
        .collect();
    let next_page_url =
        pagination::resolve_next_page(next_href.as_deref(), &page_hrefs, page_url);

    let records = doc
        .select(&selectors::PRODUCT_CARD)
        .map(parse_card)
        .collect();

    ExtractionResult {
        records,
        total_count,
        applied_filters,
        next_page_url,
        no_results,
    }
}

/// Parses the toolbar counter text, e.g. `"1,204"`. Non-numeric → `None`.
fn parse_count(text: &str) -> Option<u32> {
    let cleaned = text.trim().replace(',', "");
    cleaned.parse::<u32>().ok()
}

fn parse_applied_filter(item: ElementRef) -> Option<AppliedFilter> {
    let label = select_text(item, &selectors::APPLIED_FILTER_LABEL)?;
    let value = select_text(item, &selectors::APPLIED_FILTER_VALUE)?;
    Some(AppliedFilter {
        label: label.trim_end_matches(':').trim().to_string(),
        value,
    })
}

fn parse_card(card: ElementRef) -> ProductRecord {
    let brand = select_text(card, &selectors::BRAND);
    // Single listings title under the category div; parent models under p-title.
    let model = select_text(card, &selectors::TITLE_PRIMARY)
        .or_else(|| select_text(card, &selectors::TITLE_FALLBACK));
    let image_url = card
        .select(&selectors::IMAGE)
        .next()
        .and_then(|el| el.value().attr("src"))
        .map(str::to_string);
    let product_url = card
        .select(&selectors::PRODUCT_LINK)
        .next()
        .and_then(|el| el.value().attr("href"))
        .map(str::to_string);

    let is_parent_model = card.value().attr(selectors::HAS_USED_ATTR) == Some("1")
        && card.value().attr(selectors::HAS_NEW_VARIANTS_ATTR) == Some("1");

    let mut record = ProductRecord {
        brand,
        model,
        image_url,
        product_url,
        is_parent_model,
        attributes: parse_attributes(card),
        ..ProductRecord::default()
    };

    if is_parent_model {
        let (new_price, new_url) = parse_listing_link(card, &selectors::NEW_LISTING_LINK);
        let (used_price, used_url) = parse_listing_link(card, &selectors::USED_LISTING_LINK);
        record.new_price = new_price;
        record.new_url = new_url;
        record.used_price = used_price;
        record.used_url = used_url;
    } else {
        record.price = select_text(card, &selectors::CURRENT_PRICE);
        record.condition = select_text(card, &selectors::CONDITION);
    }

    record
}

/// Extracts the price and href of a parent model's new/used sub-link.
fn parse_listing_link(
    card: ElementRef,
    link_selector: &Selector,
) -> (Option<String>, Option<String>) {
    let Some(link) = card.select(link_selector).next() else {
        return (None, None);
    };
    let url = link.value().attr("href").map(str::to_string);
    let price = select_text(link, &selectors::LISTING_PRICE);
    (price, url)
}

/// Collects every labeled attribute span into a lowercase-keyed map.
///
/// The value is whatever follows the label span: `<br>` elements are
/// skipped, the first non-empty text node or element text wins.
fn parse_attributes(card: ElementRef) -> std::collections::BTreeMap<String, String> {
    let mut attributes = std::collections::BTreeMap::new();
    let Some(block) = card.select(&selectors::ATTRIBUTE_BLOCK).next() else {
        return attributes;
    };
    for label in block.select(&selectors::ATTRIBUTE_LABEL) {
        let key = element_text(label)
            .trim_end_matches(':')
            .trim()
            .to_lowercase();
        if key.is_empty() {
            continue;
        }
        if let Some(value) = attribute_value(label) {
            attributes.insert(key, value);
        }
    }
    attributes
}

/// Walks the siblings after a label span to find its value.
fn attribute_value(label: ElementRef) -> Option<String> {
    for sibling in label.next_siblings() {
        match sibling.value() {
            Node::Text(text) => {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    return Some(trimmed.to_string());
                }
            }
            Node::Element(element) => {
                if element.name() == "br" {
                    continue;
                }
                let text = ElementRef::wrap(sibling)
                    .map(element_text)
                    .unwrap_or_default();
                if text.is_empty() {
                    return None;
                }
                return Some(text);
            }
            _ => {}
        }
    }
    None
}

/// First match's trimmed text, `None` when absent or blank.
fn select_text(scope: ElementRef, selector: &Selector) -> Option<String> {
    scope.select(selector).next().map(element_text).and_then(|t| {
        if t.is_empty() {
            None
        } else {
            Some(t)
        }
    })
}

fn element_text(el: ElementRef) -> String {
    el.text().collect::<String>().trim().to_string()
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
