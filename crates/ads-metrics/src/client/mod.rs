//! ADS API client.
//!
//! Provides the async HTTP client and the two seams the aggregator talks
//! through:
//! - [`SearchService`]: runs one search and returns every record
//! - [`Connector`]: builds a service from an [`ApiToken`]

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use url::Url;

use crate::config::Config;
use crate::error::{ClientError, ClientResult};
use crate::models::{ApiToken, PublicationRecord, SearchQuery, SearchResponse};

/// Something that can run an ADS search.
#[async_trait]
pub trait SearchService: Send + Sync {
    /// Run `query` and return the full, materialized result list.
    async fn search(&self, query: &SearchQuery) -> ClientResult<Vec<PublicationRecord>>;
}

/// Builds an authenticated [`SearchService`] from a token.
pub trait Connector {
    /// Service produced by this connector.
    type Service: SearchService;

    /// Create a service that authenticates with `token`.
    fn connect(&self, token: ApiToken) -> ClientResult<Self::Service>;
}

impl Connector for Config {
    type Service = AdsClient;

    fn connect(&self, token: ApiToken) -> ClientResult<AdsClient> {
        AdsClient::new(self, &token)
    }
}

/// ADS API client bound to one token.
#[derive(Clone)]
pub struct AdsClient {
    /// HTTP client with the bearer token as a default header.
    client: Client,

    /// Search endpoint.
    search_url: Url,

    /// Rows requested per search.
    rows: u32,
}

impl AdsClient {
    /// Create a new client with the given configuration and token.
    ///
    /// # Errors
    ///
    /// Returns error if the token is not a valid header value, the URL does
    /// not parse, or HTTP client initialization fails.
    pub fn new(config: &Config, token: &ApiToken) -> ClientResult<Self> {
        let bearer = format!("Bearer {}", token.expose());
        let mut auth = HeaderValue::from_str(&bearer)?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .gzip(true)
            .build()?;

        Ok(Self {
            client,
            search_url: Url::parse(&config.search_url())?,
            rows: config.rows,
        })
    }

    /// Search endpoint this client queries.
    #[must_use]
    pub fn search_url(&self) -> &str {
        self.search_url.as_str()
    }

    /// Build the request URL for `query`.
    fn query_url(&self, query: &SearchQuery) -> Url {
        let mut url = self.search_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("q", &query.q());
            for fl in query.fl_params() {
                pairs.append_pair("fl", &fl);
            }
            pairs.append_pair("rows", &self.rows.to_string());
        }
        url
    }

    /// Handle API response status codes.
    async fn handle_response(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        match status.as_u16() {
            code @ (401 | 403) => Err(ClientError::unauthorized(code, text)),
            400 => Err(ClientError::bad_request(text)),
            code @ 500..=599 => Err(ClientError::server(code, text)),
            code => Err(ClientError::UnexpectedStatus {
                status: code,
                message: text,
            }),
        }
    }
}

#[async_trait]
impl SearchService for AdsClient {
    async fn search(&self, query: &SearchQuery) -> ClientResult<Vec<PublicationRecord>> {
        let url = self.query_url(query);
        tracing::debug!(author = %query.author, fl = ?query.fl, "Querying ADS");

        let response = self.client.get(url).send().await?;
        let response = Self::handle_response(response).await?;

        let body = response.bytes().await?;
        let parsed: SearchResponse = serde_json::from_slice(&body)?;

        tracing::debug!(
            num_found = parsed.response.num_found,
            returned = parsed.response.docs.len(),
            "ADS search complete"
        );
        Ok(parsed.response.docs)
    }
}

impl std::fmt::Debug for AdsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdsClient")
            .field("search_url", &self.search_url())
            .finish()
    }
}
