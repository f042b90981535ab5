// file: src/github/fetcher.rs
// description: repository host abstraction and page-by-page listing
// reference: https://docs.github.com/en/rest/using-the-rest-api/using-pagination-in-the-rest-api

use crate::error::Result;
use crate::models::{Repository, Visibility};
use std::future::Future;
use tracing::debug;

/// The two remote operations the tool relies on.
pub trait RepositoryHost {
    /// One page of the authenticated user's repositories, 1-based.
    fn list_page(&self, page: u32) -> impl Future<Output = Result<Vec<Repository>>>;

    /// True only when the host confirmed the change.
    fn set_visibility(
        &self,
        full_name: &str,
        visibility: Visibility,
    ) -> impl Future<Output = bool>;
}

pub async fn fetch_all_repositories<H: RepositoryHost>(host: &H) -> Result<Vec<Repository>> {
    fetch_all_repositories_with(host, |_, _| {}).await
}

/// Requests pages sequentially until one comes back empty.
/// `on_page` receives the page number and the running total after each non-empty page.
pub async fn fetch_all_repositories_with<H, F>(
    host: &H,
    mut on_page: F,
) -> Result<Vec<Repository>>
where
    H: RepositoryHost,
    F: FnMut(u32, usize),
{
    let mut repositories = Vec::new();
    let mut page = 1;

    loop {
        let batch = host.list_page(page).await?;
        debug!("Page {} returned {} repositories", page, batch.len());

        if batch.is_empty() {
            break;
        }

        repositories.extend(batch);
        on_page(page, repositories.len());
        page += 1;
    }

    Ok(repositories)
}
