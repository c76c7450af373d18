//! Next-page resolution for listing pages.
//!
//! The catalog's pager renders an explicit "next" control on every page
//! except the last. Some filtered listings omit the control entirely while
//! still rendering numbered page links, so a literal page-2 link is used
//! as a fallback. That heuristic is only correct when the current URL is
//! page 1 (no `p=` parameter); on deeper pages the fallback is skipped
//! rather than guessing backwards.
//!
//! Hrefs arrive already entity-unescaped: html5ever decodes `&amp;` and
//! friends in attribute values during parsing, so the strings here are
//! plain URLs.

/// Resolves the next-page URL from the page's pager hrefs.
///
/// `next_href` is the "next" control's href if rendered; `page_hrefs` are
/// the numbered page links in render order. Relative hrefs are normalized
/// against `current_url`.
#[must_use]
pub fn resolve_next_page(
    next_href: Option<&str>,
    page_hrefs: &[String],
    current_url: &str,
) -> Option<String> {
    if let Some(href) = next_href {
        return Some(absolutize(href, current_url));
    }

    // Fallback: a literal page-2 link, valid only while on page 1.
    if query_param(current_url, "p").is_some() {
        return None;
    }
    page_hrefs
        .iter()
        .find(|href| query_param(href, "p").as_deref() == Some("2"))
        .map(|href| absolutize(href, current_url))
}

/// Normalizes a possibly-relative href against the current page URL.
///
/// Falls back to the raw href when the current URL is itself unparseable.
#[must_use]
pub fn absolutize(href: &str, current_url: &str) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        return href.to_string();
    }
    reqwest::Url::parse(current_url)
        .ok()
        .and_then(|base| base.join(href).ok())
        .map_or_else(|| href.to_string(), |url| url.to_string())
}

/// Extracts the value of a named query parameter from a URL string.
fn query_param(url: &str, param: &str) -> Option<String> {
    let query_start = url.find('?')? + 1;
    let query = url[query_start..].split('#').next().unwrap_or("");

    let needle = format!("{param}=");
    for pair in query.split('&') {
        if let Some(value) = pair.strip_prefix(needle.as_str()) {
            if !value.is_empty() {
                return Some(value.to_string());
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE_1: &str = "https://catalog.example.com/golf-clubs/drivers?g2_brand%5B0%5D=Ping";
    const PAGE_2: &str = "https://catalog.example.com/golf-clubs/drivers?p=2";

    #[test]
    fn next_control_wins_over_fallback() {
        let pages = vec!["https://catalog.example.com/golf-clubs/drivers?p=2".to_string()];
        let next = resolve_next_page(
            Some("https://catalog.example.com/golf-clubs/drivers?p=3"),
            &pages,
            PAGE_2,
        );
        assert_eq!(
            next.as_deref(),
            Some("https://catalog.example.com/golf-clubs/drivers?p=3")
        );
    }

    #[test]
    fn relative_next_href_is_absolutized() {
        let next = resolve_next_page(Some("/golf-clubs/drivers?p=2"), &[], PAGE_1);
        assert_eq!(
            next.as_deref(),
            Some("https://catalog.example.com/golf-clubs/drivers?p=2")
        );
    }

    #[test]
    fn page_two_fallback_applies_on_page_one() {
        let pages = vec![
            "https://catalog.example.com/golf-clubs/drivers?p=2".to_string(),
            "https://catalog.example.com/golf-clubs/drivers?p=3".to_string(),
        ];
        let next = resolve_next_page(None, &pages, PAGE_1);
        assert_eq!(
            next.as_deref(),
            Some("https://catalog.example.com/golf-clubs/drivers?p=2")
        );
    }

    #[test]
    fn page_two_fallback_skipped_when_already_paged() {
        let pages = vec!["https://catalog.example.com/golf-clubs/drivers?p=2".to_string()];
        assert!(resolve_next_page(None, &pages, PAGE_2).is_none());
    }

    #[test]
    fn no_links_yields_none() {
        assert!(resolve_next_page(None, &[], PAGE_1).is_none());
    }

    #[test]
    fn absolutize_keeps_absolute_hrefs() {
        assert_eq!(
            absolutize("https://other.example.com/x", PAGE_1),
            "https://other.example.com/x"
        );
    }

    #[test]
    fn absolutize_falls_back_on_unparseable_base() {
        assert_eq!(absolutize("/x?p=2", "not a url"), "/x?p=2");
    }

    #[test]
    fn query_param_ignores_fragment() {
        assert_eq!(
            query_param("https://x.example/a?p=2#anchor", "p").as_deref(),
            Some("2")
        );
    }

    #[test]
    fn query_param_missing_returns_none() {
        assert!(query_param("https://x.example/a?q=1", "p").is_none());
    }
}
