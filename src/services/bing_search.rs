use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

const SEARCH_URL: &str = "https://api.bing.microsoft.com/v7.0/custom/search";

pub struct BingSearchClient {
    client: reqwest::Client,
    api_key: String,
    custom_config_id: String,
    result_count: u32,
    url: String,
}

#[derive(Serialize)]
struct SearchQuery {
    q: String,
    customconfig: String,
    count: u32,
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(rename = "webPages")]
    web_pages: Option<WebPages>,
}

#[derive(Deserialize)]
struct WebPages {
    value: Vec<PageResult>,
}

#[derive(Deserialize)]
struct PageResult {
    url: String,
}

impl BingSearchClient {
    pub fn new(api_key: String, custom_config_id: String, result_count: u32) -> Self {
        let client = reqwest::Client::builder()
            .read_timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        BingSearchClient {
            client,
            api_key,
            custom_config_id,
            result_count,
            url: SEARCH_URL.to_string(),
        }
    }

    /// Ranked candidate urls for one company. Any provider failure collapses
    /// to an empty list with a logged diagnostic so the company still runs
    /// through the pipeline with an empty corpus.
    pub async fn search(&self, company_name: &str, excluded_site: &str) -> Vec<String> {
        let query = build_search_query(company_name, excluded_site);

        let response = self
            .client
            .get(self.url.clone())
            .header("Ocp-Apim-Subscription-Key", self.api_key.clone())
            .query(&SearchQuery {
                q: query.clone(),
                customconfig: self.custom_config_id.clone(),
                count: self.result_count,
            })
            .send()
            .await;

        match response {
            Ok(res) => match res.status().is_success() {
                true => match res.json::<SearchResponse>().await {
                    Ok(body) => {
                        let urls = filter_result_urls(body, excluded_site);
                        match urls.is_empty() {
                            true => log::info!("No results found on query: {}", query),
                            false => log::info!("Found URLs: {:?}", urls),
                        }
                        urls
                    }
                    Err(e) => {
                        log::error!("Failed to parse search response: {:?}", e);
                        vec![]
                    }
                },
                false => {
                    log::error!(
                        "Failed to retrieve search results: {} on query: {}",
                        res.status(),
                        query
                    );
                    vec![]
                }
            },
            Err(e) => {
                log::error!("No response from search api: {:?}", e);
                vec![]
            }
        }
    }
}

pub fn build_search_query(company_name: &str, excluded_site: &str) -> String {
    match excluded_site.is_empty() {
        true => format!(r#"intext:"{}" company sustainability"#, company_name),
        false => format!(
            r#"intext:"{}" company sustainability -site:{}"#,
            company_name, excluded_site
        ),
    }
}

fn filter_result_urls(body: SearchResponse, excluded_site: &str) -> Vec<String> {
    body.web_pages
        .map(|pages| pages.value)
        .unwrap_or_default()
        .into_iter()
        .map(|page| page.url)
        .filter(|url| Url::parse(url).is_ok())
        .filter(|url| excluded_site.is_empty() || !url.contains(excluded_site))
        .collect()
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;

    use super::{
        build_search_query, filter_result_urls, BingSearchClient, PageResult, SearchResponse,
        WebPages,
    };

    fn client_against(url: String) -> BingSearchClient {
        BingSearchClient {
            client: reqwest::Client::new(),
            api_key: "test-key".to_string(),
            custom_config_id: "test-config".to_string(),
            result_count: 5,
            url,
        }
    }

    #[test]
    fn query_without_excluded_site() {
        assert_eq!(
            build_search_query("Acme Corp", ""),
            r#"intext:"Acme Corp" company sustainability"#
        );
    }

    #[test]
    fn query_excludes_the_company_website() {
        assert_eq!(
            build_search_query("Acme Corp", "acme.example"),
            r#"intext:"Acme Corp" company sustainability -site:acme.example"#
        );
    }

    #[test]
    fn result_urls_drop_the_excluded_site_and_junk() {
        let body = SearchResponse {
            web_pages: Some(WebPages {
                value: vec![
                    PageResult {
                        url: "https://news.example/acme-goes-green".to_string(),
                    },
                    PageResult {
                        url: "https://acme.example/about".to_string(),
                    },
                    PageResult {
                        url: "not a url".to_string(),
                    },
                ],
            }),
        };

        assert_eq!(
            filter_result_urls(body, "acme.example"),
            vec!["https://news.example/acme-goes-green"]
        );
    }

    #[test]
    fn missing_web_pages_means_no_urls() {
        let body = SearchResponse { web_pages: None };
        assert!(filter_result_urls(body, "").is_empty());
    }

    #[tokio::test]
    async fn successful_response_yields_the_ranked_urls() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).header("Ocp-Apim-Subscription-Key", "test-key");
                then.status(200).json_body(serde_json::json!({
                    "webPages": {
                        "value": [
                            { "url": "https://news.example/acme-goes-green" },
                            { "url": "https://blog.example/acme-esg" }
                        ]
                    }
                }));
            })
            .await;

        let client = client_against(server.url("/search"));
        let urls = client.search("Acme Corp", "").await;

        assert_eq!(
            urls,
            vec![
                "https://news.example/acme-goes-green",
                "https://blog.example/acme-esg"
            ]
        );
    }

    #[tokio::test]
    async fn non_200_response_yields_an_empty_url_list() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET);
                then.status(429).body("rate limited");
            })
            .await;

        let client = client_against(server.url("/search"));
        assert!(client.search("Acme Corp", "").await.is_empty());
    }

    #[tokio::test]
    async fn malformed_response_body_yields_an_empty_url_list() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET);
                then.status(200).body("not json at all");
            })
            .await;

        let client = client_against(server.url("/search"));
        assert!(client.search("Acme Corp", "").await.is_empty());
    }

    #[tokio::test]
    async fn transport_failure_yields_an_empty_url_list() {
        // Discard port, nothing listens there.
        let client = client_against("http://127.0.0.1:9/search".to_string());
        assert!(client.search("Acme Corp", "").await.is_empty());
    }
}
