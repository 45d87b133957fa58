//! Request parameter sets for the three endpoints.
//!
//! Each parameter set is a plain struct the caller fills in per request.
//! The [`RequestParams`] trait gives the client one way to check and encode
//! any of them:
//!
//! 1. [`validate`](RequestParams::validate) runs the endpoint's rules in a
//!    fixed order and stops at the first failure.
//! 2. [`query_string`](RequestParams::query_string) renders the canonical,
//!    key-sorted query string.
//!
//! Optional text fields treat `Some("")` exactly like `None`.

use chrono::{DateTime, Utc};

use crate::error::ValidationError;
use crate::query::QueryPairs;
use crate::types::{Category, Country, Language, SearchIn, SortBy};

/// Longest query, in characters, the service accepts.
pub const MAX_QUERY_CHARS: usize = 500;
/// Largest page the service returns.
pub const MAX_PAGE_SIZE: u32 = 100;
/// Most sources one `everything` request may name.
pub const MAX_SOURCES: usize = 20;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// A parameter set the client knows how to send.
pub trait RequestParams {
    /// Check field values and cross-field rules.
    fn validate(&self) -> Result<(), ValidationError>;

    /// Percent-encoded, key-sorted query string. Unset fields are omitted.
    fn query_string(&self) -> String;
}

/// `Some(v)` only when the field holds a non-empty value.
fn set<T: AsRef<str>>(value: &Option<T>) -> Option<&T> {
    value
        .as_ref()
        .filter(|v| !AsRef::<str>::as_ref(*v).is_empty())
}

fn query_too_long(query: &Option<String>) -> bool {
    set(query).is_some_and(|q| q.chars().count() > MAX_QUERY_CHARS)
}

/// Filters for the `top-headlines/sources` endpoint. All empty means every
/// source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceFilterParams {
    pub categories: Vec<Category>,
    pub languages: Vec<Language>,
    pub countries: Vec<Country>,
}

impl RequestParams for SourceFilterParams {
    fn validate(&self) -> Result<(), ValidationError> {
        if !self.categories.iter().all(Category::is_valid) {
            return Err(ValidationError::InvalidCategory);
        }
        if !self.languages.iter().all(Language::is_valid) {
            return Err(ValidationError::InvalidLanguage);
        }
        if !self.countries.iter().all(Country::is_valid) {
            return Err(ValidationError::InvalidCountry);
        }
        Ok(())
    }

    fn query_string(&self) -> String {
        let mut q = QueryPairs::new();
        q.push_all("category", &self.categories)
            .push_all("language", &self.languages)
            .push_all("country", &self.countries);
        q.encode()
    }
}

/// Filters for the `top-headlines` endpoint.
///
/// `sources` cannot be combined with `country` or `category`, and at least
/// one of `query`, `category`, `language`, `country` or `sources` is
/// required.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopHeadlinesParams {
    /// Keywords or a phrase. Advanced syntax is not supported here.
    pub query: Option<String>,
    pub category: Option<Category>,
    pub language: Option<Language>,
    pub country: Option<Country>,
    /// Source identifiers as returned by [`Client::sources`](crate::Client::sources).
    pub sources: Vec<String>,
    /// Results per page, 0 for the service default (20).
    pub page_size: u32,
    /// 1-based page number, 0 for the first page.
    pub page: u32,
}

impl RequestParams for TopHeadlinesParams {
    fn validate(&self) -> Result<(), ValidationError> {
        if query_too_long(&self.query) {
            return Err(ValidationError::QueryTooLong);
        }
        if set(&self.category).is_some_and(|c| !c.is_valid()) {
            return Err(ValidationError::InvalidCategory);
        }
        if set(&self.language).is_some_and(|l| !l.is_valid()) {
            return Err(ValidationError::InvalidLanguage);
        }
        if set(&self.country).is_some_and(|c| !c.is_valid()) {
            return Err(ValidationError::InvalidCountry);
        }
        let has_country_or_category =
            set(&self.country).is_some() || set(&self.category).is_some();
        if !self.sources.is_empty() && has_country_or_category {
            return Err(ValidationError::IncompatibleParams);
        }
        if self.page_size > MAX_PAGE_SIZE {
            return Err(ValidationError::PageSizeTooLarge);
        }
        if set(&self.query).is_none()
            && set(&self.category).is_none()
            && set(&self.language).is_none()
            && set(&self.country).is_none()
            && self.sources.is_empty()
        {
            return Err(ValidationError::ScopeTooBroad);
        }
        Ok(())
    }

    fn query_string(&self) -> String {
        let mut q = QueryPairs::new();
        q.push_opt("q", self.query.as_ref())
            .push_opt("category", self.category.as_ref())
            .push_opt("country", self.country.as_ref())
            .push_opt("language", self.language.as_ref())
            .push_all("sources", &self.sources)
            .push_nonzero("pageSize", self.page_size)
            .push_nonzero("page", self.page);
        q.encode()
    }
}

/// Filters for the `everything` endpoint (full-text article search).
///
/// `query` accepts the service's advanced syntax: quoted phrases, `+`/`-`
/// prefixes and `AND`/`OR`/`NOT` with parentheses, e.g.
/// `crypto AND (ethereum OR litecoin) NOT bitcoin`. It is passed through
/// verbatim; only its length is checked locally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    pub query: Option<String>,
    /// Keywords that must appear in the title. No advanced syntax.
    pub query_in_title: Option<String>,
    pub search_in: Option<SearchIn>,
    /// At most [`MAX_SOURCES`] source identifiers.
    pub sources: Vec<String>,
    /// Restrict results to these domains (e.g. `bbc.co.uk`).
    pub domains: Vec<String>,
    /// Drop results from these domains.
    pub exclude_domains: Vec<String>,
    /// Oldest allowed publication time.
    pub from: Option<DateTime<Utc>>,
    /// Newest allowed publication time.
    pub to: Option<DateTime<Utc>>,
    pub language: Option<Language>,
    pub sort_by: Option<SortBy>,
    pub page_size: u32,
    pub page: u32,
}

impl RequestParams for SearchParams {
    fn validate(&self) -> Result<(), ValidationError> {
        if query_too_long(&self.query) {
            return Err(ValidationError::QueryTooLong);
        }
        if set(&self.search_in).is_some_and(|s| !s.is_valid()) {
            return Err(ValidationError::InvalidSearchScope);
        }
        if self.sources.len() > MAX_SOURCES {
            return Err(ValidationError::TooManySources);
        }
        if let (Some(from), Some(to)) = (self.from, self.to) {
            if from > to {
                return Err(ValidationError::InvalidTimeRange);
            }
        }
        if set(&self.language).is_some_and(|l| !l.is_valid()) {
            return Err(ValidationError::InvalidLanguage);
        }
        if set(&self.sort_by).is_some_and(|s| !s.is_valid()) {
            return Err(ValidationError::InvalidSortBy);
        }
        if self.page_size > MAX_PAGE_SIZE {
            return Err(ValidationError::PageSizeTooLarge);
        }
        if set(&self.query).is_none()
            && set(&self.query_in_title).is_none()
            && self.sources.is_empty()
            && self.domains.is_empty()
        {
            return Err(ValidationError::ScopeTooBroad);
        }
        Ok(())
    }

    fn query_string(&self) -> String {
        let from = self.from.map(|t| t.format(TIMESTAMP_FORMAT).to_string());
        let to = self.to.map(|t| t.format(TIMESTAMP_FORMAT).to_string());

        let mut q = QueryPairs::new();
        q.push_opt("q", self.query.as_ref())
            .push_opt("qInTitle", self.query_in_title.as_ref())
            .push_opt("searchIn", self.search_in.as_ref())
            .push_all("sources", &self.sources)
            .push_all("domains", &self.domains)
            .push_all("excludeDomains", &self.exclude_domains)
            .push_opt("from", from.as_ref())
            .push_opt("to", to.as_ref())
            .push_opt("language", self.language.as_ref())
            .push_opt("sortBy", self.sort_by.as_ref())
            .push_nonzero("pageSize", self.page_size)
            .push_nonzero("page", self.page);
        q.encode()
    }
}
