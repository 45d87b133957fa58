//! Request dispatcher for the news API.
//!
//! [`Client`] owns the API key, the base URL and a `reqwest` transport.
//! Every operation follows the same protocol:
//!
//! 1. Validate the parameter set. A rejected set returns
//!    [`Error::Validation`] and nothing is sent.
//! 2. `GET {base_url}{endpoint}?{query}` with the key in `X-Api-Key`.
//! 3. Read and decode the JSON envelope.
//! 4. Map a non-`"ok"` envelope to [`Error::Api`], even on HTTP 200.
//!
//! There is no retry, caching or rate limiting here. A `Client` is cheap to
//! clone and can be shared between tasks; cancellation is done by dropping
//! the returned future.

use std::fmt;
use std::time::{Duration, Instant};

use tracing::{debug, instrument, warn};

use crate::config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::error::{ConfigError, Error};
use crate::models::{ArticlePage, Envelope, Source};
use crate::params::{RequestParams, SearchParams, SourceFilterParams, TopHeadlinesParams};
use crate::utils::truncate_for_log;

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "X-Api-Key";

/// Endpoint paths, relative to the base URL.
pub mod endpoint {
    pub const EVERYTHING: &str = "everything";
    pub const TOP_HEADLINES: &str = "top-headlines";
    pub const SOURCES: &str = "top-headlines/sources";
}

const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Fluent constructor for [`Client`].
///
/// ```no_run
/// # async fn example() -> Result<(), awful_news_api::Error> {
/// use std::time::Duration;
/// use awful_news_api::ClientBuilder;
///
/// let client = ClientBuilder::new("my-api-key")
///     .timeout(Duration::from_secs(5))
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ClientBuilder {
    api_key: String,
    base_url: String,
    timeout: Duration,
    user_agent: Option<String>,
    http_client: Option<reqwest::Client>,
}

impl ClientBuilder {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: None,
            http_client: None,
        }
    }

    /// Start from a loaded configuration.
    ///
    /// # Errors
    ///
    /// [`ConfigError::MissingApiKey`] when the config carries no key.
    pub fn from_config(config: &ClientConfig) -> Result<Self, ConfigError> {
        let mut builder = Self::new(config.api_key()?)
            .base_url(&config.base_url)
            .timeout(Duration::from_secs(config.timeout_secs));
        builder.user_agent = config.user_agent.clone();
        Ok(builder)
    }

    /// Override the service root. A trailing `/` is added if missing.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        self.base_url = base_url;
        self
    }

    /// Timeout of the default transport. Ignored when
    /// [`http_client`](Self::http_client) is set.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// User agent of the default transport. Ignored when
    /// [`http_client`](Self::http_client) is set.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Use a caller-configured transport (proxies, middleware, custom TLS).
    pub fn http_client(mut self, http_client: reqwest::Client) -> Self {
        self.http_client = Some(http_client);
        self
    }

    /// # Errors
    ///
    /// [`Error::Transport`] if the default `reqwest` client cannot be built.
    pub fn build(self) -> Result<Client, Error> {
        let http = match self.http_client {
            Some(http) => http,
            None => reqwest::Client::builder()
                .timeout(self.timeout)
                .user_agent(self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT))
                .build()?,
        };

        Ok(Client {
            api_key: self.api_key,
            base_url: self.base_url,
            http,
        })
    }
}

impl fmt::Debug for ClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .field("custom_http_client", &self.http_client.is_some())
            .finish_non_exhaustive()
    }
}

/// Client for the `everything`, `top-headlines` and `top-headlines/sources`
/// endpoints.
#[derive(Clone)]
pub struct Client {
    api_key: String,
    base_url: String,
    http: reqwest::Client,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Client with the default base URL and a 10 second transport timeout.
    pub fn new(api_key: impl Into<String>) -> Result<Self, Error> {
        ClientBuilder::new(api_key).build()
    }

    pub fn builder(api_key: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(api_key)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Search every indexed article.
    ///
    /// See <https://newsapi.org/docs/endpoints/everything>.
    pub async fn everything(&self, params: &SearchParams) -> Result<ArticlePage, Error> {
        self.articles(endpoint::EVERYTHING, params).await
    }

    /// Live top and breaking headlines.
    ///
    /// See <https://newsapi.org/docs/endpoints/top-headlines>.
    pub async fn top_headlines(&self, params: &TopHeadlinesParams) -> Result<ArticlePage, Error> {
        self.articles(endpoint::TOP_HEADLINES, params).await
    }

    /// Publishers available to the two article endpoints.
    ///
    /// See <https://newsapi.org/docs/endpoints/sources>.
    pub async fn sources(&self, params: &SourceFilterParams) -> Result<Vec<Source>, Error> {
        let envelope = self.get(endpoint::SOURCES, params).await?;
        Ok(envelope.sources)
    }

    async fn articles<P: RequestParams>(
        &self,
        endpoint: &'static str,
        params: &P,
    ) -> Result<ArticlePage, Error> {
        let envelope = self.get(endpoint, params).await?;
        Ok(ArticlePage {
            total_results: envelope.total_results,
            articles: envelope.articles,
        })
    }

    fn url(&self, endpoint: &str, query: &str) -> String {
        if query.is_empty() {
            format!("{}{}", self.base_url, endpoint)
        } else {
            format!("{}{}?{}", self.base_url, endpoint, query)
        }
    }

    #[instrument(level = "info", skip_all, fields(endpoint = endpoint))]
    async fn get<P: RequestParams>(
        &self,
        endpoint: &'static str,
        params: &P,
    ) -> Result<Envelope, Error> {
        if let Err(e) = params.validate() {
            warn!(error = %e, "Rejected request parameters; nothing sent");
            return Err(e.into());
        }

        let url = self.url(endpoint, &params.query_string());
        debug!(%url, "Sending request");

        let t0 = Instant::now();
        let response = self
            .http
            .get(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await?;
        let status_code = response.status().as_u16();
        // Consumes the response; the connection is released on every path.
        let body = response.bytes().await?;
        let elapsed_ms = t0.elapsed().as_millis();

        let envelope: Envelope = serde_json::from_slice(&body).inspect_err(|e| {
            warn!(
                status_code,
                error = %e,
                body_preview = %truncate_for_log(&String::from_utf8_lossy(&body), 300),
                "Response body is not a valid envelope"
            )
        })?;
        match envelope.into_result(status_code) {
            Ok(envelope) => {
                debug!(
                    status_code,
                    elapsed_ms,
                    total_results = envelope.total_results,
                    articles = envelope.articles.len(),
                    sources = envelope.sources.len(),
                    "Request succeeded"
                );
                Ok(envelope)
            }
            Err(e) => {
                warn!(
                    status_code,
                    elapsed_ms,
                    code = %e.code,
                    message = %e.message,
                    "Service returned an error"
                );
                Err(e.into())
            }
        }
    }
}
