//! CSS selectors for the catalog's listing markup.
//!
//! The catalog exposes no API; its rendered HTML is the wire format. All
//! selectors live here so a markup change is a one-file fix: capture a
//! fresh page, update the selector, extend the fixtures in
//! `extract_test.rs`.

use std::sync::LazyLock;

use scraper::Selector;

/// "We can't find products matching the selection." notice.
pub static NO_RESULTS_NOTICE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.message.info.empty").unwrap());

/// Toolbar element holding the total result count.
pub static TOTAL_COUNT: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("p.toolbar-amount span.toolbar-number:last-child").unwrap()
});

/// One entry in the active-filter list.
pub static APPLIED_FILTER_ITEM: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.filter-current li.item").unwrap());

/// Filter label within an active-filter entry.
pub static APPLIED_FILTER_LABEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("span.filter-label").unwrap());

/// Filter value within an active-filter entry.
pub static APPLIED_FILTER_VALUE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("span.filter-value").unwrap());

/// The pager's "next" control.
pub static NEXT_LINK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a.action.next").unwrap());

/// All numbered pager links, scanned for the literal page-2 fallback.
pub static PAGE_LINK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.pages a.page").unwrap());

/// One product card.
pub static PRODUCT_CARD: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.product-box.product-item-info").unwrap());

/// Brand line within a card.
pub static BRAND: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.product-brand").unwrap());

/// Primary title location (single fixed-condition listings).
pub static TITLE_PRIMARY: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.pmp-product-category").unwrap());

/// Fallback title location (parent-model listings).
pub static TITLE_FALLBACK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.p-title").unwrap());

/// Product image.
pub static IMAGE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("img.product-image-photo").unwrap());

/// Product link wrapping the card photo.
pub static PRODUCT_LINK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a.product.photo.product-item-photo").unwrap());

/// Current price on a single fixed-condition listing.
pub static CURRENT_PRICE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.current-price").unwrap());

/// Condition grade on a single fixed-condition listing.
pub static CONDITION: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.pmp-product-condition").unwrap());

/// "Shop new" sub-link on a parent-model card.
pub static NEW_LISTING_LINK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a.pmp-new-link").unwrap());

/// "Shop used" sub-link on a parent-model card.
pub static USED_LISTING_LINK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a.pmp-used-link").unwrap());

/// Price span inside a new/used sub-link.
pub static LISTING_PRICE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("span.price").unwrap());

/// Attribute block within a card.
pub static ATTRIBUTE_BLOCK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.pmp-attribute").unwrap());

/// One labeled attribute span within the attribute block.
pub static ATTRIBUTE_LABEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("span.pmp-attribute-label").unwrap());

/// Card data flag: the listing has used inventory.
pub static HAS_USED_ATTR: &str = "data-itemhasused";

/// Card data flag: the listing has new variants.
pub static HAS_NEW_VARIANTS_ATTR: &str = "data-hasnewvariants";
