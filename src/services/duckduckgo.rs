use std::time::Duration;

use fake_user_agent::get_chrome_rua;
use scraper::{Html, Selector};
use serde::Serialize;

/// Client for the DuckDuckGo html endpoint. Built once at startup and shared
/// across requests; holds no per-call state.
pub struct SearchClient {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Serialize)]
struct SearchQuery {
    q: String,
}

impl SearchClient {
    pub fn new(base_url: String, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .read_timeout(timeout)
            .build()
            .unwrap();

        SearchClient { client, base_url }
    }

    /// Fetch the search result page for a query. Network errors, timeouts and
    /// non-success statuses all surface as errors for the caller to absorb.
    pub async fn search(&self, query: &str) -> Result<String, anyhow::Error> {
        let res = self
            .client
            .get(&self.base_url)
            .header("User-Agent", get_chrome_rua())
            .query(&SearchQuery {
                q: query.to_string(),
            })
            .send()
            .await?;

        match res.status().is_success() {
            true => Ok(res.text().await?),
            false => Err(anyhow::anyhow!(
                "Search returned status {} on query: {}",
                res.status(),
                query
            )),
        }
    }
}

/// Trimmed text of every `a.result__url` tag, in document order. DuckDuckGo
/// renders the result url as the anchor text, so this is the candidate list.
pub fn extract_result_urls(html_content: &str) -> Vec<String> {
    let result_url_selector = Selector::parse("a.result__url").unwrap();
    let html_document = Html::parse_document(html_content);

    html_document
        .select(&result_url_selector)
        .map(|tag| tag.text().collect::<String>().trim().to_string())
        .collect()
}
