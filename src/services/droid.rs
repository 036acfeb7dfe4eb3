use std::time::Duration;

use async_trait::async_trait;
use scraper::Html;
use thirtyfour::error::WebDriverError;
use thirtyfour::{prelude::*, ChromiumLikeCapabilities};

use crate::domain::FetchResult;
use crate::services::PageFetcher;

const CHROME_ARGS: [&str; 3] = ["--headless", "--no-sandbox", "--disable-dev-shm-usage"];

/// Renders pages through a WebDriver endpoint. Every fetch opens its own
/// browser session and quits it on all exit paths, so concurrent fetches
/// never share a session.
pub struct Droid {
    webdriver_url: String,
    page_wait: Duration,
}

enum RenderOutcome {
    Ready(String),
    TimedOut,
    Failed(WebDriverError),
}

impl Droid {
    pub fn new(webdriver_url: String, page_wait: Duration) -> Self {
        Droid {
            webdriver_url,
            page_wait,
        }
    }

    /// Render one url and reduce it to visible text. Never returns an error:
    /// a page that does not become ready within the wait bound maps to a
    /// `Timeout` result, everything else that goes wrong maps to `Error`,
    /// both with empty text.
    pub async fn fetch_page(&self, url: &str) -> FetchResult {
        let mut caps = DesiredCapabilities::chrome();
        for arg in CHROME_ARGS {
            if let Err(e) = caps.add_arg(arg) {
                log::error!("Failed to set browser capability {}: {:?}", arg, e);
                return FetchResult::error(url.to_string());
            }
        }

        let driver = match WebDriver::new(&self.webdriver_url, caps).await {
            Ok(driver) => driver,
            Err(e) => {
                log::error!("Failed to start webdriver session for {}: {:?}", url, e);
                return FetchResult::error(url.to_string());
            }
        };

        let outcome = self.render(&driver, url).await;

        if let Err(e) = driver.quit().await {
            log::error!("Failed to quit webdriver session for {}: {:?}", url, e);
        }

        match outcome {
            RenderOutcome::Ready(text) => FetchResult::ok(url.to_string(), text),
            RenderOutcome::TimedOut => FetchResult::timeout(url.to_string()),
            RenderOutcome::Failed(e) => {
                log::error!("Webdriver error on {}: {:?}", url, e);
                FetchResult::error(url.to_string())
            }
        }
    }

    async fn render(&self, driver: &WebDriver, url: &str) -> RenderOutcome {
        // The page counts as minimally ready once a body element exists.
        // Navigation, the readiness wait, and the source read all share the
        // one wait bound, so a slow page load cannot stall past it either.
        let load = async {
            driver.goto(url).await?;
            driver.query(By::Tag("body")).first().await?;
            driver.source().await
        };

        match tokio::time::timeout(self.page_wait, load).await {
            Err(_) => RenderOutcome::TimedOut,
            Ok(Err(e)) => RenderOutcome::Failed(e),
            Ok(Ok(page_source)) => RenderOutcome::Ready(visible_text(&page_source)),
        }
    }
}

#[async_trait]
impl PageFetcher for Droid {
    async fn fetch_page(&self, url: &str) -> FetchResult {
        Droid::fetch_page(self, url).await
    }
}

/// Trimmed non-empty text nodes of the document, one per line.
fn visible_text(page_source: &str) -> String {
    let document = Html::parse_document(page_source);
    document
        .root_element()
        .text()
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .collect::<Vec<&str>>()
        .join("\n")
}
