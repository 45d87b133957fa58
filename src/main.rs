//! # Awful News API CLI
//!
//! Command-line front end for the `awful_news_api` library. Each subcommand
//! maps onto one newsapi.org endpoint; results are printed as JSON or
//! Markdown.
//!
//! ## Usage
//!
//! ```sh
//! NEWSAPI_API_KEY=... awful_news_api top-headlines --country us
//! awful_news_api -c config.yaml -f markdown everything -q bitcoin --language en
//! awful_news_api sources --category technology
//! ```
//!
//! Logs go to stderr (filter with `RUST_LOG`) so stdout stays clean for
//! piping.

use awful_news_api::{
    ClientBuilder, ClientConfig, SearchParams, SourceFilterParams, TopHeadlinesParams,
};
use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod outputs;

use cli::{Cli, Command};
use outputs::{OutputFormat, json, markdown};

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(std::io::stderr)
        .init();

    let start_time = std::time::Instant::now();

    // Parse CLI
    let args = Cli::parse();
    debug!(?args.config, ?args.output, ?args.format, "Parsed CLI arguments");

    // ---- Load config ----
    let mut config = match args.config.as_deref() {
        Some(path) => ClientConfig::load(path).await?,
        None => ClientConfig::default(),
    };
    args.apply_overrides(&mut config);

    let client = match ClientBuilder::from_config(&config) {
        Ok(builder) => builder.build()?,
        Err(e) => {
            error!(error = %e, "Cannot build client");
            return Err(e.into());
        }
    };
    info!(base_url = %client.base_url(), "Client ready");

    // ---- Dispatch ----
    let rendered = match args.command {
        Command::Everything(cmd) => {
            let params = SearchParams::from(cmd);
            let page = client.everything(&params).await.inspect_err(|e| {
                error!(error = %e, "everything request failed");
            })?;
            info!(
                total = page.total_results,
                returned = page.articles.len(),
                "Fetched articles"
            );
            match args.format {
                OutputFormat::Json => json::to_json(&page)?,
                OutputFormat::Markdown => markdown::articles_to_markdown(&page),
            }
        }
        Command::TopHeadlines(cmd) => {
            let params = TopHeadlinesParams::from(cmd);
            let page = client.top_headlines(&params).await.inspect_err(|e| {
                error!(error = %e, "top-headlines request failed");
            })?;
            info!(
                total = page.total_results,
                returned = page.articles.len(),
                "Fetched headlines"
            );
            match args.format {
                OutputFormat::Json => json::to_json(&page)?,
                OutputFormat::Markdown => markdown::articles_to_markdown(&page),
            }
        }
        Command::Sources(cmd) => {
            let params = SourceFilterParams::from(cmd);
            let sources = client.sources(&params).await.inspect_err(|e| {
                error!(error = %e, "sources request failed");
            })?;
            info!(returned = sources.len(), "Fetched sources");
            match args.format {
                OutputFormat::Json => json::to_json(&sources)?,
                OutputFormat::Markdown => markdown::sources_to_markdown(&sources),
            }
        }
    };

    json::write_output(&rendered, args.output.as_deref()).await?;

    let elapsed = start_time.elapsed();
    info!(?elapsed, millis = elapsed.as_millis() as u64, "Execution complete");

    Ok(())
}
