use crate::domain::select_best_domain;

use super::{extract_result_urls, SearchClient};

/// Resolve a company name to its most likely official website domain.
/// Any search failure degrades to None; a failed candidate never fails the
/// whole resolution. Retry and backoff belong to the caller.
pub async fn resolve_domain(search_client: &SearchClient, company_name: &str) -> Option<String> {
    let query = format!("{} official website", company_name);

    let html_content = match search_client.search(&query).await {
        Ok(html) => html,
        Err(e) => {
            log::error!("Search failed on query {}: {:?}", query, e);
            return None;
        }
    };

    let candidates = extract_result_urls(&html_content);
    log::info!(
        "Found {} result urls for company: {}",
        candidates.len(),
        company_name
    );

    select_best_domain(&candidates, company_name)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{resolve_domain, SearchClient};

    #[tokio::test]
    async fn resolve_domain_unreachable_search_engine() {
        let search_client = SearchClient::new(
            "http://127.0.0.1:1/html/".to_string(),
            Duration::from_secs(1),
        );
        let result = resolve_domain(&search_client, "Acme Widgets").await;

        assert_eq!(result, None);
    }
}
