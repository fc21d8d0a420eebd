use url::Url;

use crate::calendar::filter_window;
use crate::config::{CalendarConfig, CalendarWindow};
use crate::error::{FetchError, Result};
use crate::models::{Article, QiitaItem};

// ============================================================================
// Request
// ============================================================================

/// `GET {api_base}/users/{identifier}/items?per_page={page_size}`
///
/// The identifier is not validated. It is inserted as one path segment, so
/// `/` and `?` are percent-encoded instead of reshaping the request.
pub fn items_url(config: &CalendarConfig, identifier: &str) -> Result<Url> {
    let mut url = Url::parse(&config.api_base)?;
    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|()| FetchError::InvalidBase(config.api_base.clone()))?;
        segments
            .pop_if_empty()
            .extend(["users", identifier, "items"]);
    }
    url.query_pairs_mut()
        .append_pair("per_page", &config.page_size.to_string());
    Ok(url)
}

// ============================================================================
// Response
// ============================================================================

/// Turn a finished HTTP exchange into raw items.
pub fn interpret_response(status: u16, body: &str) -> Result<Vec<QiitaItem>> {
    if !(200..300).contains(&status) {
        return Err(FetchError::Status(status));
    }
    Ok(serde_json::from_str(body)?)
}

/// The working set that should replace the current one after a fetch.
///
/// Failures are logged and collapse to an empty set, which renders the same
/// as a user with no posts in the window.
pub fn resolve_articles(result: Result<Vec<QiitaItem>>, window: &CalendarWindow) -> Vec<Article> {
    match result {
        Ok(items) => {
            let fetched = items.len();
            let articles = filter_window(items, window);
            tracing::debug!(fetched, kept = articles.len(), "Filtered items to calendar window");
            articles
        }
        Err(e) => {
            tracing::error!("Error fetching Qiita articles: {}", e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{cell_for, CellState, Day};

    const SAMPLE_BODY: &str = r#"[
        {"title": "day one", "url": "https://x/1", "created_at": "2024-12-01T00:00:00Z", "likes_count": 3},
        {"title": "too late", "url": "https://x/26", "created_at": "2024-12-26T00:00:00Z"},
        {"title": "day fourteen", "url": "https://x/14", "created_at": "2024-12-14T09:00:00Z"}
    ]"#;

    fn load(status: u16, body: &str) -> Vec<Article> {
        resolve_articles(interpret_response(status, body), &CalendarWindow::default())
    }

    #[test]
    fn test_items_url() {
        let url = items_url(&CalendarConfig::default(), "alice").expect("should build url");
        assert_eq!(
            url.as_str(),
            "https://qiita.com/api/v2/users/alice/items?per_page=100"
        );
    }

    #[test]
    fn test_items_url_encodes_identifier() {
        let url = items_url(&CalendarConfig::default(), "a/b?c").expect("should build url");
        assert_eq!(
            url.as_str(),
            "https://qiita.com/api/v2/users/a%2Fb%3Fc/items?per_page=100"
        );
    }

    #[test]
    fn test_items_url_accepts_empty_identifier() {
        let url = items_url(&CalendarConfig::default(), "").expect("should build url");
        assert_eq!(url.path(), "/api/v2/users//items");
    }

    #[test]
    fn test_items_url_with_trailing_slash_base() {
        let config = CalendarConfig {
            api_base: "http://localhost:8080/api/v2/".to_string(),
            page_size: 20,
            ..CalendarConfig::default()
        };
        let url = items_url(&config, "bob").expect("should build url");
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/api/v2/users/bob/items?per_page=20"
        );
    }

    #[test]
    fn test_items_url_rejects_bad_base() {
        let config = CalendarConfig {
            api_base: "not a url".to_string(),
            ..CalendarConfig::default()
        };
        assert!(matches!(
            items_url(&config, "alice"),
            Err(FetchError::InvalidUrl(_))
        ));

        let config = CalendarConfig {
            api_base: "mailto:someone@example.com".to_string(),
            ..CalendarConfig::default()
        };
        assert!(matches!(
            items_url(&config, "alice"),
            Err(FetchError::InvalidBase(_))
        ));
    }

    #[test]
    fn test_interpret_success() {
        let items = interpret_response(200, SAMPLE_BODY).expect("should parse items");
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].title, "day one");
    }

    #[test]
    fn test_interpret_non_success_status() {
        assert!(matches!(
            interpret_response(404, r#"{"message":"Not found","type":"not_found"}"#),
            Err(FetchError::Status(404))
        ));
        assert!(matches!(
            interpret_response(500, ""),
            Err(FetchError::Status(500))
        ));
    }

    #[test]
    fn test_interpret_malformed_body() {
        assert!(matches!(
            interpret_response(200, r#"{"items": []}"#),
            Err(FetchError::Parse(_))
        ));
        assert!(matches!(
            interpret_response(200, r#"[{"title": "no url"}]"#),
            Err(FetchError::Parse(_))
        ));
        assert!(matches!(
            interpret_response(200, "<html>"),
            Err(FetchError::Parse(_))
        ));
    }

    #[test]
    fn test_failed_fetch_empties_working_set() {
        let articles = load(404, "");
        assert!(articles.is_empty());
        for d in Day::all() {
            assert_eq!(cell_for(d, &articles), CellState::Empty);
        }

        let network = resolve_articles(
            Err(FetchError::Network("connection refused".to_string())),
            &CalendarWindow::default(),
        );
        assert!(network.is_empty());
    }

    #[test]
    fn test_successful_fetch_filters_items() {
        let articles = load(200, SAMPLE_BODY);
        let urls: Vec<&str> = articles.iter().map(|a| a.url.as_str()).collect();
        assert_eq!(urls, vec!["https://x/1", "https://x/14"]);
    }

    #[test]
    fn test_empty_response_is_empty_working_set() {
        assert!(load(200, "[]").is_empty());
    }

    #[test]
    fn test_repeated_load_is_idempotent() {
        let first = load(200, SAMPLE_BODY);
        let second = load(200, SAMPLE_BODY);
        assert_eq!(first, second);

        let first_cells: Vec<CellState<'_>> = Day::all().map(|d| cell_for(d, &first)).collect();
        let second_cells: Vec<CellState<'_>> =
            Day::all().map(|d| cell_for(d, &second)).collect();
        assert_eq!(first_cells, second_cells);
    }
}
