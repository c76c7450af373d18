//! Concurrent extraction of multiple candidate URLs.

use futures::stream::{self, StreamExt};

use crate::client::CatalogClient;
use crate::types::ExtractionResult;

/// Extracts every URL with at most `max_concurrent` fetches in flight.
///
/// Results come back in input order. Per-URL failures are isolated:
/// [`CatalogClient::extract`] degrades each failure to an empty
/// sub-result, so one bad URL never fails the batch.
pub async fn extract_batch(
    client: &CatalogClient,
    urls: &[String],
    max_concurrent: usize,
) -> Vec<ExtractionResult> {
    let mut indexed: Vec<(usize, ExtractionResult)> = stream::iter(urls.iter().enumerate())
        .map(|(index, url)| async move { (index, client.extract(url).await) })
        .buffer_unordered(max_concurrent.max(1))
        .collect()
        .await;

    indexed.sort_by_key(|(index, _)| *index);
    indexed.into_iter().map(|(_, result)| result).collect()
}
