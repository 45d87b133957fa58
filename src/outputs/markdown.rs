//! Markdown rendering of articles and sources.
//!
//! Articles are listed as level-two headings linking to the original story,
//! followed by a byline and the description. Sources become a table.

use awful_news_api::{ArticlePage, Source};
use std::fmt::Write;

/// Render one page of articles.
pub fn articles_to_markdown(page: &ArticlePage) -> String {
    let mut md = String::new();
    let _ = writeln!(
        md,
        "# {} articles ({} total)\n",
        page.articles.len(),
        page.total_results
    );

    for article in &page.articles {
        let title = article.title.as_deref().unwrap_or("Untitled");
        match article.url.as_deref() {
            Some(url) => {
                let _ = writeln!(md, "## [{}]({})\n", escape(title), url);
            }
            None => {
                let _ = writeln!(md, "## {}\n", escape(title));
            }
        }

        let mut byline = vec![article.source.name.clone()];
        if let Some(author) = article.author.as_deref().filter(|a| !a.is_empty()) {
            byline.push(author.to_string());
        }
        if let Some(published_at) = article.published_at {
            byline.push(published_at.format("%Y-%m-%d %H:%M UTC").to_string());
        }
        let _ = writeln!(md, "*{}*\n", byline.join(" · "));

        if let Some(description) = article.description.as_deref().filter(|d| !d.is_empty()) {
            let _ = writeln!(md, "{}\n", description.trim());
        }
    }

    md
}

/// Render a source listing as a table.
pub fn sources_to_markdown(sources: &[Source]) -> String {
    let mut md = String::new();
    let _ = writeln!(md, "# {} sources\n", sources.len());
    let _ = writeln!(md, "| ID | Name | Category | Language | Country |");
    let _ = writeln!(md, "|----|------|----------|----------|---------|");

    for source in sources {
        let name = match source.url.as_deref() {
            Some(url) => format!("[{}]({})", escape(&source.identity.name), url),
            None => escape(&source.identity.name),
        };
        let _ = writeln!(
            md,
            "| {} | {} | {} | {} | {} |",
            source.identity.id.as_deref().unwrap_or(""),
            name,
            source.category.as_ref().map(|c| c.as_str()).unwrap_or(""),
            source.language.as_ref().map(|l| l.as_str()).unwrap_or(""),
            source.country.as_ref().map(|c| c.as_str()).unwrap_or(""),
        );
    }

    md
}

fn escape(text: &str) -> String {
    text.replace('|', "\\|")
        .replace('[', "\\[")
        .replace(']', "\\]")
}

#[cfg(test)]
mod tests {
    use super::*;
    use awful_news_api::{Article, Category, Country, Language, SourceIdentity};
    use chrono::{TimeZone, Utc};

    fn article() -> Article {
        Article {
            source: SourceIdentity {
                id: Some("bbc-news".to_string()),
                name: "BBC News".to_string(),
            },
            author: Some("Jane Doe".to_string()),
            title: Some("Rust [1.0] ships".to_string()),
            description: Some("  A systems language.  ".to_string()),
            url: Some("https://bbc.co.uk/a".to_string()),
            url_to_image: None,
            published_at: Some(Utc.with_ymd_and_hms(2015, 5, 15, 12, 0, 0).unwrap()),
            content: None,
        }
    }

    #[test]
    fn test_articles_to_markdown() {
        let page = ArticlePage {
            total_results: 42,
            articles: vec![article()],
        };
        let md = articles_to_markdown(&page);

        assert!(md.starts_with("# 1 articles (42 total)"));
        assert!(md.contains("## [Rust \\[1.0\\] ships](https://bbc.co.uk/a)"));
        assert!(md.contains("*BBC News · Jane Doe · 2015-05-15 12:00 UTC*"));
        assert!(md.contains("\nA systems language.\n"));
    }

    #[test]
    fn test_article_without_url_or_title() {
        let mut a = article();
        a.url = None;
        a.title = None;
        a.author = None;
        a.published_at = None;
        let md = articles_to_markdown(&ArticlePage {
            total_results: 1,
            articles: vec![a],
        });
        assert!(md.contains("## Untitled\n"));
        assert!(md.contains("*BBC News*"));
    }

    #[test]
    fn test_sources_to_markdown() {
        let sources = vec![Source {
            identity: SourceIdentity {
                id: Some("abc-news".to_string()),
                name: "ABC | News".to_string(),
            },
            description: None,
            url: Some("https://abcnews.go.com".to_string()),
            category: Some(Category::GENERAL),
            language: Some(Language::ENGLISH),
            country: Some(Country::UNITED_STATES),
        }];
        let md = sources_to_markdown(&sources);

        assert!(md.starts_with("# 1 sources"));
        assert!(md.contains(
            "| abc-news | [ABC \\| News](https://abcnews.go.com) | general | en | us |"
        ));
    }
}
