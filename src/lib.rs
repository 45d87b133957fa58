//! # Awful News API
//!
//! A typed, validating client for the [newsapi.org](https://newsapi.org)
//! v2 endpoints:
//!
//! | Operation | Endpoint | Parameters |
//! |-----------|----------|------------|
//! | [`Client::everything`] | `everything` | [`SearchParams`] |
//! | [`Client::top_headlines`] | `top-headlines` | [`TopHeadlinesParams`] |
//! | [`Client::sources`] | `top-headlines/sources` | [`SourceFilterParams`] |
//!
//! Parameter sets are checked locally before anything goes over the wire,
//! so an impossible request (too broad, `sources` mixed with `country`,
//! page size over 100, ...) fails fast with a [`ValidationError`]. Service
//! failures come back as [`ApiError`] carrying the HTTP status and the
//! service's own code and message.
//!
//! ## Usage
//!
//! ```no_run
//! use awful_news_api::{Client, Country, TopHeadlinesParams};
//!
//! # async fn example() -> Result<(), awful_news_api::Error> {
//! let client = Client::new("my-api-key")?;
//! let page = client
//!     .top_headlines(&TopHeadlinesParams {
//!         country: Some(Country::UNITED_STATES),
//!         ..Default::default()
//!     })
//!     .await?;
//! println!("{} headlines", page.total_results);
//! # Ok(())
//! # }
//! ```
//!
//! The client does not retry, cache or rate limit. Bring your own
//! `reqwest::Client` through [`ClientBuilder::http_client`] to add that.

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod params;
pub mod query;
pub mod types;
mod utils;

pub use client::{Client, ClientBuilder};
pub use config::ClientConfig;
pub use error::{ApiError, ConfigError, Error, ValidationError};
pub use models::{Article, ArticlePage, Source, SourceIdentity};
pub use params::{RequestParams, SearchParams, SourceFilterParams, TopHeadlinesParams};
pub use types::{Category, Country, Language, SearchIn, SortBy};
