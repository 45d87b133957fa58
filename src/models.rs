//! Response records returned by the news API.
//!
//! These types are decoded straight from the service's JSON and are not
//! validated: the service is the source of truth for their contents. Text
//! fields the service may omit or send as `null` (author, description,
//! image URL, ...) are `Option<String>`.
//!
//! Every response is wrapped in an [`Envelope`] whose `status` field says
//! whether the call succeeded. The envelope never leaves the crate; callers
//! get either the payload or an [`ApiError`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::types::{Category, Country, Language};

/// Identifier and display name of a news publisher.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SourceIdentity {
    /// Stable identifier (e.g. `bbc-news`). Absent for publishers the
    /// service does not index as a source.
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
}

/// A news publisher as listed by the `top-headlines/sources` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Source {
    #[serde(flatten)]
    pub identity: SourceIdentity,
    pub description: Option<String>,
    /// Home page of the publisher.
    pub url: Option<String>,
    pub category: Option<Category>,
    pub language: Option<Language>,
    pub country: Option<Country>,
}

/// A single article from `everything` or `top-headlines`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(default)]
    pub source: SourceIdentity,
    pub author: Option<String>,
    /// Headline.
    pub title: Option<String>,
    /// Snippet or summary.
    pub description: Option<String>,
    pub url: Option<String>,
    pub url_to_image: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    /// Unformatted body text, truncated by the service to 200 characters.
    pub content: Option<String>,
}

/// Successful payload of an article endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticlePage {
    /// Total matches across all pages, not just this one.
    pub total_results: u64,
    pub articles: Vec<Article>,
}

/// Wire envelope shared by every endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Envelope {
    /// Missing counts as a failure, like any value other than `"ok"`.
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub total_results: u64,
    #[serde(default)]
    pub articles: Vec<Article>,
    #[serde(default)]
    pub sources: Vec<Source>,
}

impl Envelope {
    /// Success discriminator used by the service.
    pub const STATUS_OK: &'static str = "ok";

    /// Turn a non-`"ok"` envelope into an [`ApiError`], whatever the HTTP
    /// status was.
    pub fn into_result(self, status_code: u16) -> Result<Self, ApiError> {
        if self.status == Self::STATUS_OK {
            Ok(self)
        } else {
            Err(ApiError {
                status_code,
                code: self.code.unwrap_or_default(),
                message: self.message.unwrap_or_default(),
            })
        }
    }
}
