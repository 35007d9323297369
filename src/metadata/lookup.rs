//! External company-tag lookup.
//!
//! Scrapes a search-results page for the first matching problem link, then
//! the linked problem page for tag anchors mentioning "Company". The markup
//! is not under our control; any change degrades silently to "no
//! information". Failure and absence are the same thing to the caller.

use crate::config::Config;
use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use std::time::Duration;
use tracing::{debug, warn};

static FIRST_RESULT: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.head > a").expect("static selector should parse"));
static TAG_ANCHORS: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a[rel='tag']").expect("static selector should parse"));

/// Capability seam for company-tag discovery, so the scrape can be stubbed
/// in tests without network access.
pub trait CompanyTagSource {
    /// Best-effort company tags for a problem title. `None` means "no
    /// information" — callers must not distinguish failure from absence.
    fn company_tags(&self, title: &str) -> Option<Vec<String>>;
}

/// Scraper against the GeeksforGeeks site layout
pub struct GfgCompanyTags {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl GfgCompanyTags {
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.lookup_timeout_secs))
            .build()
            .context("Failed to build lookup HTTP client")?;
        Ok(Self {
            http,
            base_url: config.lookup_base_url.trim_end_matches('/').to_string(),
        })
    }

    // Two requests, no retries: search page for the first result link, then
    // the problem page for its tags. Any failure aborts the whole lookup.
    fn try_lookup(&self, title: &str) -> Result<Vec<String>> {
        let query = title
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("+");
        let search_url = format!("{}/?s={}", self.base_url, query);
        debug!(url = %search_url, "searching for problem page");

        let search_html = self
            .http
            .get(&search_url)
            .send()
            .context("search request failed")?
            .error_for_status()?
            .text()?;

        let problem_url = {
            let document = Html::parse_document(&search_html);
            document
                .select(&FIRST_RESULT)
                .next()
                .and_then(|a| a.value().attr("href"))
                .map(str::to_string)
                .context("no matching problem found in search results")?
        };
        debug!(url = %problem_url, "fetching problem page");

        let page_html = self
            .http
            .get(&problem_url)
            .send()
            .context("problem page request failed")?
            .error_for_status()?
            .text()?;

        let document = Html::parse_document(&page_html);
        let tags = document
            .select(&TAG_ANCHORS)
            .filter(|a| {
                let text: String = a.text().collect();
                text.contains("Company")
                    || a.value().attr("href").is_some_and(|h| h.contains("Company"))
            })
            .map(|a| a.text().collect::<String>().trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();
        Ok(tags)
    }
}

impl CompanyTagSource for GfgCompanyTags {
    fn company_tags(&self, title: &str) -> Option<Vec<String>> {
        match self.try_lookup(title) {
            Ok(tags) if !tags.is_empty() => Some(tags),
            Ok(_) => {
                debug!("no company tags on problem page for '{}'", title);
                None
            }
            Err(e) => {
                warn!("company tag lookup failed: {:#}", e);
                None
            }
        }
    }
}
