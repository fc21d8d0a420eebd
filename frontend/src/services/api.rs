use advent_shared::api::{interpret_response, items_url};
use advent_shared::{CalendarConfig, FetchError, QiitaItem};
use gloo_net::http::Request;

pub struct ApiService;

impl ApiService {
    /// Fetch the first page of a user's items. No auth header, no timeout.
    pub async fn list_user_items(
        config: &CalendarConfig,
        identifier: &str,
    ) -> Result<Vec<QiitaItem>, FetchError> {
        let url = items_url(config, identifier)?;

        let response = Request::get(url.as_str())
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        interpret_response(status, &body)
    }
}
