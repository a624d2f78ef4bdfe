//! Pagination.
//!
//! Paged routes return a `pager` block alongside each slice of `results`.
//! [`fetch_all`] walks every page in order and concatenates the results.

use std::future::Future;

use serde_json::Value;
use tracing::debug;

use super::error::ClientError;
use crate::types::Page;

/// Fetches every page and merges the results in page order.
///
/// `fetch_page` is called with page numbers starting at 1. The page count is
/// recomputed from each response's pager, and fetching stops once the next
/// page number exceeds it. The first page is always fetched, even when it
/// reports zero pages.
///
/// # Errors
///
/// Returns the first error produced by `fetch_page`.
pub async fn fetch_all<F, Fut>(mut fetch_page: F) -> Result<Vec<Value>, ClientError>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<Page, ClientError>>,
{
    let mut merged = Vec::new();
    let mut page: u32 = 1;

    loop {
        let Page { pager, results } = fetch_page(page).await?;
        let total_pages = pager.total_pages();

        debug!(
            page,
            total_pages,
            records = results.len(),
            "fetched page"
        );

        merged.extend(results);

        match next_page(page, total_pages) {
            Some(next) => page = next,
            None => break,
        }
    }

    Ok(merged)
}

/// Returns the page after `page`, or `None` once `total_pages` is reached or
/// page numbers run out.
fn next_page(page: u32, total_pages: i64) -> Option<u32> {
    let next = page.checked_add(1)?;
    (i64::from(next) <= total_pages).then_some(next)
}
