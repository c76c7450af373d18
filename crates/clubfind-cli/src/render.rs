//! Plain-text rendering of extraction results for the terminal.

use clubfind_catalog::{ExtractionResult, ProductRecord};

pub(crate) fn print_extraction(extraction: &ExtractionResult, visible: &[String]) {
    if extraction.no_results {
        println!("no products match this search");
        return;
    }

    match extraction.total_count {
        Some(count) => println!(
            "{count} result{} ({} on this page)",
            if count == 1 { "" } else { "s" },
            extraction.records.len()
        ),
        None => println!("{} results on this page", extraction.records.len()),
    }

    if !extraction.applied_filters.is_empty() {
        let filters: Vec<String> = extraction
            .applied_filters
            .iter()
            .map(|f| format!("{}: {}", f.label, f.value))
            .collect();
        println!("filters: {}", filters.join(" | "));
    }

    for record in &extraction.records {
        println!("{}", format_record(record, visible));
    }

    if let Some(next) = &extraction.next_page_url {
        println!("next page: {next}");
    }
}

/// One record as a single line: title, price(s), then visible attributes.
pub(crate) fn format_record(record: &ProductRecord, visible: &[String]) -> String {
    let mut line = String::from("- ");
    if let Some(brand) = &record.brand {
        line.push_str(brand);
        line.push(' ');
    }
    line.push_str(record.model.as_deref().unwrap_or("(unknown model)"));

    if record.is_parent_model {
        if let Some(new_price) = &record.new_price {
            line.push_str(&format!("  new from {new_price}"));
        }
        if let Some(used_price) = &record.used_price {
            line.push_str(&format!("  used from {used_price}"));
        }
    } else {
        if let Some(price) = &record.price {
            line.push_str(&format!("  {price}"));
        }
        if let Some(condition) = &record.condition {
            line.push_str(&format!(" ({condition})"));
        }
    }

    let shown: Vec<String> = record
        .attributes
        .iter()
        .filter(|(label, _)| visible.is_empty() || visible.iter().any(|v| v == *label))
        .map(|(label, value)| format!("{label}={value}"))
        .collect();
    if !shown.is_empty() {
        line.push_str(&format!("  [{}]", shown.join(", ")));
    }

    line
}
