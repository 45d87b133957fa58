//! Command-line interface definitions for Awful News API.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! Connection settings can come from flags, environment variables or a YAML
//! config file; flags win over the file.

use awful_news_api::{
    Category, ClientConfig, Country, Language, SearchIn, SearchParams, SortBy, SourceFilterParams,
    TopHeadlinesParams,
};
use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};

use crate::outputs::OutputFormat;

/// Command-line arguments for the Awful News API client.
///
/// # Examples
///
/// ```sh
/// # Top US headlines as JSON on stdout
/// awful_news_api --api-key YOUR_KEY top-headlines --country us
///
/// # Full-text search written to a Markdown file
/// awful_news_api -f markdown -o ./out/rust.md everything -q '"rust language" AND -game' --sort-by popularity
///
/// # Every English-language business source
/// awful_news_api sources --category business --language en
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// newsapi.org API key
    #[arg(long, env = "NEWSAPI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Service root, e.g. https://newsapi.org/v2/
    #[arg(long, env = "NEWSAPI_BASE_URL")]
    pub base_url: Option<String>,

    /// Transport timeout in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Optional path to config.yaml file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Write results to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Layer flag values over a (possibly file-loaded) configuration.
    pub fn apply_overrides(&self, config: &mut ClientConfig) {
        if let Some(api_key) = &self.api_key {
            config.api_key = Some(api_key.clone());
        }
        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(timeout_secs) = self.timeout_secs {
            config.timeout_secs = timeout_secs;
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search every article (advanced query syntax supported)
    Everything(EverythingArgs),
    /// Live top and breaking headlines
    TopHeadlines(TopHeadlinesArgs),
    /// List news sources
    Sources(SourcesArgs),
}

#[derive(Args, Debug)]
pub struct EverythingArgs {
    /// Query; supports quotes, +/- prefixes and AND/OR/NOT
    #[arg(short, long)]
    pub query: Option<String>,

    /// Keywords that must appear in the title
    #[arg(long)]
    pub query_in_title: Option<String>,

    /// Restrict the query to title, description or content
    #[arg(long)]
    pub search_in: Option<SearchIn>,

    /// Source identifier (repeatable, at most 20)
    #[arg(long = "source", value_delimiter = ',')]
    pub sources: Vec<String>,

    /// Domain to search (repeatable)
    #[arg(long = "domain", value_delimiter = ',')]
    pub domains: Vec<String>,

    /// Domain to exclude (repeatable)
    #[arg(long = "exclude-domain", value_delimiter = ',')]
    pub exclude_domains: Vec<String>,

    /// Oldest publication time (RFC 3339)
    #[arg(long)]
    pub from: Option<DateTime<Utc>>,

    /// Newest publication time (RFC 3339)
    #[arg(long)]
    pub to: Option<DateTime<Utc>>,

    #[arg(long)]
    pub language: Option<Language>,

    /// relevancy, popularity or publishedAt
    #[arg(long)]
    pub sort_by: Option<SortBy>,

    #[arg(long, default_value_t = 0)]
    pub page_size: u32,

    #[arg(long, default_value_t = 0)]
    pub page: u32,
}

impl From<EverythingArgs> for SearchParams {
    fn from(args: EverythingArgs) -> Self {
        SearchParams {
            query: args.query,
            query_in_title: args.query_in_title,
            search_in: args.search_in,
            sources: args.sources,
            domains: args.domains,
            exclude_domains: args.exclude_domains,
            from: args.from,
            to: args.to,
            language: args.language,
            sort_by: args.sort_by,
            page_size: args.page_size,
            page: args.page,
        }
    }
}

#[derive(Args, Debug)]
pub struct TopHeadlinesArgs {
    /// Keywords or a phrase
    #[arg(short, long)]
    pub query: Option<String>,

    #[arg(long)]
    pub category: Option<Category>,

    #[arg(long)]
    pub language: Option<Language>,

    #[arg(long)]
    pub country: Option<Country>,

    /// Source identifier (repeatable; not combinable with --country/--category)
    #[arg(long = "source", value_delimiter = ',')]
    pub sources: Vec<String>,

    #[arg(long, default_value_t = 0)]
    pub page_size: u32,

    #[arg(long, default_value_t = 0)]
    pub page: u32,
}

impl From<TopHeadlinesArgs> for TopHeadlinesParams {
    fn from(args: TopHeadlinesArgs) -> Self {
        TopHeadlinesParams {
            query: args.query,
            category: args.category,
            language: args.language,
            country: args.country,
            sources: args.sources,
            page_size: args.page_size,
            page: args.page,
        }
    }
}

#[derive(Args, Debug)]
pub struct SourcesArgs {
    /// Category filter (repeatable)
    #[arg(long = "category", value_delimiter = ',')]
    pub categories: Vec<Category>,

    /// Language filter (repeatable)
    #[arg(long = "language", value_delimiter = ',')]
    pub languages: Vec<Language>,

    /// Country filter (repeatable)
    #[arg(long = "country", value_delimiter = ',')]
    pub countries: Vec<Country>,
}

impl From<SourcesArgs> for SourceFilterParams {
    fn from(args: SourcesArgs) -> Self {
        SourceFilterParams {
            categories: args.categories,
            languages: args.languages,
            countries: args.countries,
        }
    }
}
