//! The one-shot `search` command.
//!
//! Wires the full pipeline against live endpoints and prints the rendered
//! result set. Pipeline-internal failures degrade as usual; only setup
//! problems (bad config, unknown category) abort.

use anyhow::Context;

use clubfind_core::{AppConfig, ClubCategory, SearchRequest};
use clubfind_query::run_search;

use crate::render;

pub(crate) async fn run(
    config: &AppConfig,
    query: &str,
    category: &str,
    json: bool,
) -> anyhow::Result<()> {
    let category = ClubCategory::from_slug(category)
        .ok_or_else(|| anyhow::anyhow!("unknown category '{category}'"))?;
    let query = query.trim();
    if query.is_empty() {
        anyhow::bail!("query must not be empty");
    }

    let refdata = clubfind_core::RefData::load(&config.refdata_path);
    let display = clubfind_core::load_display_config(&config.display_config_path)
        .context("failed to load display config")?;
    let backend = clubfind_llm::ChatClient::new(
        &config.llm_base_url,
        config.llm_api_key.clone(),
        &config.llm_model,
        config.llm_request_timeout_secs,
    )
    .context("failed to build chat client")?;
    let catalog = clubfind_catalog::CatalogClient::new(
        config.catalog_request_timeout_secs,
        &config.catalog_user_agent,
    )
    .context("failed to build catalog client")?;

    tracing::info!(category = %category, "running search");
    let outcome = run_search(
        &backend,
        &catalog,
        &refdata,
        SearchRequest {
            raw_query: query.to_string(),
            category,
        },
    )
    .await;
    tracing::info!(
        records = outcome.extraction.records.len(),
        compiled = outcome.url.is_some(),
        "search finished"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    if outcome.signal.has_mismatch {
        match outcome.signal.implied_category {
            Some(implied) => println!(
                "note: the query reads like a {implied} search but {} was selected",
                outcome.request.category
            ),
            None => println!("note: the query may not match the selected category"),
        }
    }
    if !outcome.models.is_empty() {
        let names = outcome.models.canonical_names().join(", ");
        println!("resolved models: {names}");
    }
    match &outcome.url {
        Some(url) => println!("catalog url: {url}"),
        None => {
            println!("could not compile a catalog URL for this query");
            return Ok(());
        }
    }

    render::print_extraction(&outcome.extraction, display.visible_attributes(category));
    Ok(())
}
