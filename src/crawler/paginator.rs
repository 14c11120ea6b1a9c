//! Pagination driver
//!
//! The first list page tells how many results the query has; the remaining
//! pages are then fetched one after another so that references keep page
//! order. Any list-page failure aborts the whole collection.

use crate::config::SourcesConfig;
use crate::crawler::{fetch_list_page, parse_list_page, DocumentReference, Site};
use crate::filter::Filter;
use crate::vocabulary::Vocabulary;
use crate::{HarvestError, Result};
use reqwest::Client;

/// Number of list pages needed for `total` results, `None` when there are none
///
/// ```
/// use resume_harvest::crawler::page_count;
///
/// assert_eq!(page_count(47, 20), Some(3));
/// assert_eq!(page_count(0, 20), None);
/// ```
///
/// The count saturates at `u32::MAX`, the largest page offset a query can carry.
pub fn page_count(total: u64, page_size: u32) -> Option<u32> {
    if total == 0 || page_size == 0 {
        return None;
    }
    let pages = total.div_ceil(u64::from(page_size));
    Some(u32::try_from(pages).unwrap_or(u32::MAX))
}

/// Collects the references of every result page of `filter` on `site`
pub async fn collect_references(
    client: &Client,
    site: Site,
    filter: &Filter,
    vocabulary: &Vocabulary,
    sources: &SourcesConfig,
) -> Result<Vec<DocumentReference>> {
    let first_request = site.build_query(filter, 0, vocabulary, sources)?;
    tracing::info!("Sending request {} to {}", first_request, site);

    let body = fetch_list_page(client, &first_request).await?;
    let first = parse_list_page(site, &body, sources, &first_request)?;

    let pages = page_count(first.total, site.page_size()).ok_or_else(|| HarvestError::NotFound {
        query: first_request.to_string(),
    })?;
    tracing::info!("Found {} resumes on {} in {} pages", first.total, site, pages);
    if first.is_missing_references() {
        tracing::warn!("First page of {} has no references for {} results", site, first.total);
    }

    // page one is already in hand
    let mut references = first.references;
    for offset in 1..pages {
        let request = site.build_query(filter, offset, vocabulary, sources)?;
        tracing::debug!("Fetching list page {}", request);

        let body = fetch_list_page(client, &request).await?;
        let page = parse_list_page(site, &body, sources, &request)?;
        if page.references.is_empty() {
            tracing::warn!("List page {} of {} has no references", offset + 1, site);
        }
        references.extend(page.references);

        tracing::info!("Collected page {}/{} from {}", offset + 1, pages, site);
    }

    Ok(references)
}
