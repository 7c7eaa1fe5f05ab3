use std::collections::HashSet;
use std::sync::LazyLock;

use url::Url;

/// Aggregator and social sites that rank well for almost any company query
/// but are never the company's own website.
pub static BLACKLISTED_DOMAINS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        "wikipedia.org",
        "linkedin.com",
        "facebook.com",
        "twitter.com",
        "instagram.com",
        "youtube.com",
        "crunchbase.com",
        "bloomberg.com",
    ])
});

/// Reduce a raw search result string to a bare registrable domain:
/// lowercase host, scheme removed, one leading `www.` label removed.
/// Returns None on anything that does not parse as a url with a host.
pub fn normalize_domain(raw_url: &str) -> Option<String> {
    let absolute_url = match raw_url.starts_with("http://") || raw_url.starts_with("https://") {
        true => raw_url.to_string(),
        false => format!("http://{}", raw_url),
    };

    let parsed_url = Url::parse(&absolute_url).ok()?;
    let host = parsed_url.host_str()?.to_lowercase();

    let domain = match host.strip_prefix("www.") {
        Some(h) => h.to_string(),
        None => host,
    };

    match domain.is_empty() {
        true => None,
        false => Some(domain),
    }
}

pub fn is_valid_domain(domain: &str) -> bool {
    match domain.split_once('.') {
        Some((label, _)) => !label.is_empty() && !BLACKLISTED_DOMAINS.contains(domain),
        None => false,
    }
}

/// Exact word overlap between the company name and the domain's leftmost
/// label split on `-`. "Acme Corp" matches acme-corp.com via {acme, corp}.
pub fn tokens_overlap(company_name: &str, domain: &str) -> bool {
    let company_name = company_name.to_lowercase();
    let company_words: HashSet<&str> = company_name.split_whitespace().collect();

    let label = match domain.split_once('.') {
        Some((label, _)) => label,
        None => domain,
    };

    label.split('-').any(|word| company_words.contains(word))
}

/// Single pass over the candidates in page order. First valid domain whose
/// tokens overlap the company name wins outright; otherwise fall back to the
/// first valid domain seen. Candidates that fail to normalize are skipped.
pub fn select_best_domain(candidates: &[String], company_name: &str) -> Option<String> {
    let mut first_valid: Option<String> = None;

    for candidate in candidates {
        let domain = match normalize_domain(candidate) {
            Some(d) => d,
            None => continue,
        };

        if !is_valid_domain(&domain) {
            continue;
        }

        if tokens_overlap(company_name, &domain) {
            return Some(domain);
        }

        if first_valid.is_none() {
            first_valid = Some(domain);
        }
    }

    first_valid
}

#[cfg(test)]
mod tests {
    use super::{is_valid_domain, normalize_domain, select_best_domain, tokens_overlap};

    #[test]
    fn normalize_domain_strips_scheme_www_and_case() {
        assert_eq!(
            normalize_domain("http://www.Example.com/path"),
            Some("example.com".to_string())
        );
        assert_eq!(normalize_domain("Example.com"), Some("example.com".to_string()));
        assert_eq!(
            normalize_domain("https://EXAMPLE.COM"),
            Some("example.com".to_string())
        );
    }

    #[test]
    fn normalize_domain_is_idempotent() {
        let domain = normalize_domain("https://www.acme-widgets.com/about").unwrap();
        assert_eq!(normalize_domain(&domain), Some(domain));
    }

    #[test]
    fn normalize_domain_strips_only_one_www_label() {
        assert_eq!(
            normalize_domain("www.www.example.com"),
            Some("www.example.com".to_string())
        );
    }

    #[test]
    fn normalize_domain_rejects_malformed_input() {
        assert_eq!(normalize_domain(""), None);
        assert_eq!(normalize_domain("http://"), None);
        assert_eq!(normalize_domain("ht tp://broken url"), None);
    }

    #[test]
    fn is_valid_domain_rejects_blacklisted() {
        assert!(!is_valid_domain("linkedin.com"));
        assert!(!is_valid_domain("wikipedia.org"));
        assert!(is_valid_domain("acme-widgets.com"));
    }

    #[test]
    fn is_valid_domain_rejects_malformed() {
        assert!(!is_valid_domain(""));
        assert!(!is_valid_domain("noTLD"));
        assert!(!is_valid_domain(".com"));
    }

    #[test]
    fn tokens_overlap_on_shared_word() {
        assert!(tokens_overlap("Acme Corp", "acme-corp.com"));
        assert!(tokens_overlap("Acme Corp", "corp-store.com"));
        assert!(!tokens_overlap("Acme Corp", "unrelated.com"));
    }

    #[test]
    fn select_best_domain_prefers_token_overlap() {
        let candidates = vec![
            "wikipedia.org/x".to_string(),
            "acme-widgets.com/y".to_string(),
            "acme.net/z".to_string(),
        ];
        let result = select_best_domain(&candidates, "Acme Widgets");

        assert_eq!(result, Some("acme-widgets.com".to_string()));
    }

    #[test]
    fn select_best_domain_falls_back_to_first_valid() {
        let candidates = vec!["randomsite.com".to_string(), "othersite.com".to_string()];
        let result = select_best_domain(&candidates, "Acme Widgets");

        assert_eq!(result, Some("randomsite.com".to_string()));
    }

    #[test]
    fn select_best_domain_skips_unparseable_candidates() {
        let candidates = vec![
            "ht tp://broken url".to_string(),
            "acme-widgets.com/products".to_string(),
        ];
        let result = select_best_domain(&candidates, "Acme Widgets");

        assert_eq!(result, Some("acme-widgets.com".to_string()));
    }

    #[test]
    fn select_best_domain_never_returns_blacklisted() {
        let candidates = vec!["linkedin.com/company/acme".to_string()];
        let result = select_best_domain(&candidates, "LinkedIn");

        assert_eq!(result, None);
    }

    #[test]
    fn select_best_domain_nothing_valid() {
        let candidates = vec![
            "linkedin.com".to_string(),
            "noTLD".to_string(),
            ".com".to_string(),
        ];
        let result = select_best_domain(&candidates, "Acme Widgets");

        assert_eq!(result, None);
    }
}
