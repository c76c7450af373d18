use super::*;

const PAGE_URL: &str = "https://catalog.example.com/golf-clubs/drivers?g2_dexterity%5B0%5D=Left+Handed";

/// A single fixed-condition (used) listing card.
fn single_card() -> &'static str {
    r#"
    <div class="product-box product-item-info" data-itemhasused="1" data-hasnewvariants="0">
      <a class="product photo product-item-photo" href="https://catalog.example.com/ping-g430-max-driver">
        <img class="product-image-photo" src="https://img.example.com/g430.jpg">
      </a>
      <div class="product-brand">Ping</div>
      <div class="pmp-product-category">G430 Max Driver</div>
      <div class="current-price">$399.99</div>
      <div class="pmp-product-condition">Above Average 9.0</div>
      <div class="pmp-attribute">
        <span class="pmp-attribute-label">Dexterity:</span> Right Handed<br>
        <span class="pmp-attribute-label">Loft:</span> 10.5&deg;<br>
        <span class="pmp-attribute-label">Flex:</span> Regular<br>
        <span class="pmp-attribute-label">Shaft:</span> <span>Alta CB Black</span>
      </div>
    </div>
    "#
}

/// A parent-model card with both used inventory and new variants.
fn parent_card() -> &'static str {
    r#"
    <div class="product-box product-item-info" data-itemhasused="1" data-hasnewvariants="1">
      <a class="product photo product-item-photo" href="/taylormade-stealth-2-driver">
        <img class="product-image-photo" src="/img/stealth2.jpg">
      </a>
      <div class="product-brand">TaylorMade</div>
      <div class="p-title">Stealth 2 Driver</div>
      <a class="pmp-new-link" href="/stealth-2-driver-new">New from <span class="price">$449.99</span></a>
      <a class="pmp-used-link" href="/stealth-2-driver-used">Used from <span class="price">$289.99</span></a>
    </div>
    "#
}

fn listing_page(body: &str) -> String {
    format!(
        r#"<!DOCTYPE html><html><body>
        <p class="toolbar-amount">Items <span class="toolbar-number">1</span>-<span class="toolbar-number">24</span> of <span class="toolbar-number">1,204</span></p>
        <div class="filter-current">
          <ul>
            <li class="item"><span class="filter-label">Dexterity</span> <span class="filter-value">Left Handed</span></li>
            <li class="item"><span class="filter-label">Flex:</span> <span class="filter-value">Regular</span></li>
          </ul>
        </div>
        {body}
        <div class="pages">
          <a class="page" href="/golf-clubs/drivers?p=2&amp;g2_dexterity%5B0%5D=Left+Handed"><span>2</span></a>
          <a class="action next" href="/golf-clubs/drivers?p=2&amp;g2_dexterity%5B0%5D=Left+Handed"><span>Next</span></a>
        </div>
        </body></html>"#
    )
}

#[test]
fn parses_total_count_with_thousands_separator() {
    let result = parse_listing(&listing_page(""), PAGE_URL);
    assert_eq!(result.total_count, Some(1204));
}

#[test]
fn non_numeric_count_yields_none() {
    let html = r#"<p class="toolbar-amount"><span class="toolbar-number">lots</span></p>"#;
    let result = parse_listing(html, PAGE_URL);
    assert_eq!(result.total_count, None);
}

#[test]
fn missing_toolbar_yields_none_not_zero() {
    let result = parse_listing("<html><body></body></html>", PAGE_URL);
    assert_eq!(result.total_count, None);
    assert!(!result.no_results);
}

#[test]
fn applied_filters_keep_render_order_and_lose_trailing_colon() {
    let result = parse_listing(&listing_page(""), PAGE_URL);
    assert_eq!(
        result.applied_filters,
        vec![
            AppliedFilter {
                label: "Dexterity".to_string(),
                value: "Left Handed".to_string(),
            },
            AppliedFilter {
                label: "Flex".to_string(),
                value: "Regular".to_string(),
            },
        ]
    );
}

#[test]
fn no_results_notice_sets_flag_independent_of_records() {
    let html = r#"<div class="message info empty"><div>We can't find products matching the selection.</div></div>"#;
    let result = parse_listing(html, PAGE_URL);
    assert!(result.no_results);
    assert!(result.records.is_empty());
}

#[test]
fn next_link_is_absolutized_and_entity_unescaped() {
    let result = parse_listing(&listing_page(""), PAGE_URL);
    // The &amp; in the fixture href must come back as a literal ampersand.
    assert_eq!(
        result.next_page_url.as_deref(),
        Some("https://catalog.example.com/golf-clubs/drivers?p=2&g2_dexterity%5B0%5D=Left+Handed")
    );
}

#[test]
fn page_two_fallback_used_when_next_control_missing() {
    let html = r#"<html><body>
        <div class="pages"><a class="page" href="/golf-clubs/drivers?p=2"><span>2</span></a></div>
        </body></html>"#;
    let result = parse_listing(html, "https://catalog.example.com/golf-clubs/drivers");
    assert_eq!(
        result.next_page_url.as_deref(),
        Some("https://catalog.example.com/golf-clubs/drivers?p=2")
    );
}

#[test]
fn single_card_takes_price_and_condition() {
    let result = parse_listing(&listing_page(single_card()), PAGE_URL);
    assert_eq!(result.records.len(), 1);

    let record = &result.records[0];
    assert!(!record.is_parent_model);
    assert_eq!(record.brand.as_deref(), Some("Ping"));
    assert_eq!(record.model.as_deref(), Some("G430 Max Driver"));
    assert_eq!(
        record.image_url.as_deref(),
        Some("https://img.example.com/g430.jpg")
    );
    assert_eq!(
        record.product_url.as_deref(),
        Some("https://catalog.example.com/ping-g430-max-driver")
    );
    assert_eq!(record.price.as_deref(), Some("$399.99"));
    assert_eq!(record.condition.as_deref(), Some("Above Average 9.0"));
    assert!(record.new_price.is_none());
    assert!(record.used_price.is_none());
}

#[test]
fn single_card_captures_dynamic_attribute_bag() {
    let result = parse_listing(&listing_page(single_card()), PAGE_URL);
    let attributes = &result.records[0].attributes;

    assert_eq!(attributes.get("dexterity").map(String::as_str), Some("Right Handed"));
    assert_eq!(attributes.get("loft").map(String::as_str), Some("10.5°"));
    assert_eq!(attributes.get("flex").map(String::as_str), Some("Regular"));
    // Element-wrapped value after the label.
    assert_eq!(attributes.get("shaft").map(String::as_str), Some("Alta CB Black"));
}

#[test]
fn parent_card_takes_new_used_pairs_instead_of_single_price() {
    let result = parse_listing(&listing_page(parent_card()), PAGE_URL);
    let record = &result.records[0];

    assert!(record.is_parent_model);
    assert_eq!(record.brand.as_deref(), Some("TaylorMade"));
    // Fallback title location.
    assert_eq!(record.model.as_deref(), Some("Stealth 2 Driver"));
    assert_eq!(record.new_price.as_deref(), Some("$449.99"));
    assert_eq!(record.new_url.as_deref(), Some("/stealth-2-driver-new"));
    assert_eq!(record.used_price.as_deref(), Some("$289.99"));
    assert_eq!(record.used_url.as_deref(), Some("/stealth-2-driver-used"));
    assert!(record.price.is_none());
    assert!(record.condition.is_none());
}

#[test]
fn used_only_card_is_not_parent_model() {
    // data-itemhasused=1 alone is not enough; both flags must co-occur.
    let result = parse_listing(&listing_page(single_card()), PAGE_URL);
    assert!(!result.records[0].is_parent_model);
}

#[test]
fn card_with_missing_pieces_degrades_per_field() {
    let html = r#"<div class="product-box product-item-info"></div>"#;
    let result = parse_listing(html, PAGE_URL);
    assert_eq!(result.records.len(), 1);

    let record = &result.records[0];
    assert!(record.brand.is_none());
    assert!(record.model.is_none());
    assert!(record.image_url.is_none());
    assert!(record.product_url.is_none());
    assert!(record.attributes.is_empty());
}

#[test]
fn extraction_is_idempotent() {
    let page = listing_page(&format!("{}{}", single_card(), parent_card()));
    let first = parse_listing(&page, PAGE_URL);
    let second = parse_listing(&page, PAGE_URL);
    assert_eq!(first, second);
}
