use crate::classify::classify_response;
use crate::{ClientError, Result};
use reqwest::Client as HttpClient;
use url::Url;
use usersearch_core::{encode_query, ClientConfig, PageWindow, SearchRequest, SearchResponse};

/// User search REST API client
///
/// Holds no per-call state, so one instance can be shared between tasks.
#[derive(Debug, Clone)]
pub struct SearchClient {
    config: ClientConfig,
    client: HttpClient,
}

impl SearchClient {
    /// Create a client whose transport uses the deadlines from `config`
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut builder = HttpClient::builder()
            .user_agent(config.user_agent.as_str())
            .connect_timeout(config.connect_timeout());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { config, client })
    }

    /// Create a client on top of an already configured transport
    pub fn with_http_client(config: ClientConfig, client: HttpClient) -> Self {
        Self { config, client }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetch one page of users.
    ///
    /// Negative `limit` or `offset` fail before any request is sent. The
    /// service is asked for one record more than `limit` (capped at
    /// [`usersearch_core::MAX_PAGE_SIZE`]); getting it back sets
    /// `next_page`.
    #[tracing::instrument(
        skip_all,
        fields(limit = req.limit, offset = req.offset, order_by = req.order_by.as_i8())
    )]
    pub async fn find_users(&self, req: &SearchRequest) -> Result<SearchResponse> {
        let window = PageWindow::for_request(req)?;
        let url = self.search_url(req, &window)?;
        tracing::debug!(url = %url, fetch = window.fetch, "Sending search request");

        let response = self
            .client
            .get(url)
            .header(self.config.token_header.as_str(), self.config.access_token.as_str())
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.bytes().await?;
        if status != 200 {
            tracing::warn!(status, "Search service returned an error status");
        }

        let users = classify_response(status, &body, &req.order_field)?;
        let page = window.assemble(users);
        tracing::debug!(
            returned = page.users.len(),
            next_page = page.next_page,
            "Search complete"
        );

        Ok(page)
    }

    fn search_url(&self, req: &SearchRequest, window: &PageWindow) -> Result<Url> {
        let endpoint = self.config.endpoint();
        let mut url = Url::parse(&endpoint).map_err(|source| ClientError::InvalidUrl {
            url: endpoint.clone(),
            source,
        })?;
        url.set_query(Some(&encode_query(req, window)));
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use usersearch_core::OrderBy;

    fn client(url: &str) -> SearchClient {
        SearchClient::new(ClientConfig::new(url, "ok")).unwrap()
    }

    #[test]
    fn test_search_url_carries_query() {
        let client = SearchClient::new(
            ClientConfig::new("http://127.0.0.1:8080", "ok").with_search_path("/search"),
        )
        .unwrap();
        let req = SearchRequest::new(1, 0)
            .with_query("Name")
            .order_by_field("Name", OrderBy::Asc);
        let window = PageWindow::for_request(&req).unwrap();

        let url = client.search_url(&req, &window).unwrap();
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:8080/search?limit=2&offset=0&query=Name&order_field=Name&order_by=1"
        );
    }

    #[test]
    fn test_search_url_rejects_empty_base() {
        let client = client("");
        let req = SearchRequest::new(1, 0);
        let window = PageWindow::for_request(&req).unwrap();

        let err = client.search_url(&req, &window).unwrap_err();
        assert!(matches!(err, ClientError::InvalidUrl { .. }));
        assert_eq!(err.kind(), ErrorKind::Unknown);
    }

    #[tokio::test]
    async fn test_validation_runs_before_url_parsing() {
        // An unusable URL would fail too, but the limit check comes first
        let client = client("");
        let err = client
            .find_users(&SearchRequest::new(-2, 0))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }
}
