//! The bulk `extract` command: parse listings from pre-compiled URLs with
//! bounded concurrency. Per-URL failures come back as empty extractions,
//! so one dead page never aborts the batch.

use anyhow::Context;

use clubfind_catalog::extract_batch;
use clubfind_core::AppConfig;

use crate::render;

pub(crate) async fn run(config: &AppConfig, urls: &[String], json: bool) -> anyhow::Result<()> {
    let catalog = clubfind_catalog::CatalogClient::new(
        config.catalog_request_timeout_secs,
        &config.catalog_user_agent,
    )
    .context("failed to build catalog client")?;

    // Bare paths are resolved against the configured catalog base, so
    // `extract /golf-clubs/drivers` works without spelling out the host.
    let urls: Vec<String> = urls
        .iter()
        .map(|url| absolutize(&config.catalog_base_url, url))
        .collect();

    tracing::info!(
        urls = urls.len(),
        concurrency = config.catalog_max_concurrent_fetches,
        "extracting listings"
    );
    let results = extract_batch(&catalog, &urls, config.catalog_max_concurrent_fetches).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    for (url, extraction) in urls.iter().zip(&results) {
        println!("== {url}");
        render::print_extraction(extraction, &[]);
        println!();
    }
    Ok(())
}

fn absolutize(base: &str, url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("{base}/{}", url.trim_start_matches('/'))
    }
}
