use async_trait::async_trait;
use futures::{stream, StreamExt};

use crate::domain::{mentions_company, FetchResult, FetchStatus, RawCorpus};

/// Worker budget for simultaneously in-flight page fetches. Each fetch owns
/// its own rendering session, so this also bounds live browser sessions.
pub const MAX_CONCURRENT_FETCHES: usize = 4;

#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_page(&self, url: &str) -> FetchResult;
}

/// Fetch every candidate url with bounded parallelism and collect the pages
/// that actually mention the company.
///
/// Results are consumed as fetches complete, so accepted sections land in the
/// corpus in completion order, not submission order; the corpus order across
/// urls can differ between runs. A timed-out or failed url is logged and
/// excluded without touching its siblings, and the call returns only once
/// every dispatched fetch has resolved.
pub async fn harvest<F: PageFetcher>(
    fetcher: &F,
    company_name: &str,
    urls: Vec<String>,
) -> RawCorpus {
    let mut corpus = RawCorpus::new();

    let mut fetches = stream::iter(
        urls.into_iter()
            .map(|url| async move { fetcher.fetch_page(&url).await }),
    )
    .buffer_unordered(MAX_CONCURRENT_FETCHES);

    while let Some(result) = fetches.next().await {
        match result.status {
            FetchStatus::Ok => match mentions_company(&result.text, company_name) {
                true => {
                    log::info!("Scraped {} and found exact company name", result.url);
                    corpus.push(result.url, result.text);
                }
                false => {
                    log::info!("Scraped {} but did not find the exact company name", result.url)
                }
            },
            FetchStatus::Timeout => log::error!("Timeout while trying to scrape {}", result.url),
            FetchStatus::Error => log::error!("Error scraping {}", result.url),
        }
    }

    corpus
}
