//! Live fragment producer backed by the public flight-search results page.
//!
//! Best effort by design: the page is rendered for humans and its markup
//! shifts, so the fetcher harvests every element whose text mentions a
//! currency marker and leaves field recognition to the extractors.

use std::collections::HashSet;
use std::time::Duration;

use rand::seq::IndexedRandom;
use reqwest::Client;
use scraper::{Html, Selector};
use tracing::{debug, info};

use crate::model::{SearchQuery, SourceError};
use crate::source::traits::{FragmentResult, FragmentSource};

const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/119.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:121.0) Gecko/20100101 Firefox/121.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.1 Safari/605.1.15",
];

const CURRENCY_MARKERS: &[&str] = &["₹", "$", "€", "£", "INR", "USD", "AED", "SGD"];

// generous bounds; the pipeline applies its own fragment-length gate
const MAX_FRAGMENTS: usize = 200;
const MAX_FRAGMENT_CHARS: usize = 1200;

pub struct GoogleFlightsFetcher {
    client: Client,
}

impl GoogleFlightsFetcher {
    pub fn new(timeout: Duration) -> Result<Self, SourceError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SourceError::Http(e.to_string()))?;
        Ok(Self { client })
    }

    fn build_url(&self, query: &SearchQuery) -> String {
        format!(
            "https://www.google.com/travel/flights?q=Flights%20to%20{}%20from%20{}%20on%20{}&hl=en",
            query.destination, query.origin, query.date
        )
    }
}

#[async_trait::async_trait]
impl FragmentSource for GoogleFlightsFetcher {
    async fn fragments(&self, query: &SearchQuery) -> Result<Vec<FragmentResult>, SourceError> {
        let url = self.build_url(query);
        let user_agent = USER_AGENTS
            .choose(&mut rand::rng())
            .copied()
            .unwrap_or(USER_AGENTS[0]);
        info!(%url, "fetching results page");

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::USER_AGENT, user_agent)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SourceError::Timeout
                } else {
                    SourceError::Http(e.to_string())
                }
            })?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::InvalidResponse(status.as_u16()));
        }
        let html = response
            .text()
            .await
            .map_err(|e| SourceError::Http(e.to_string()))?;

        let fragments = harvest_fragments(&html);
        info!(count = fragments.len(), "harvested candidate fragments");
        Ok(fragments)
    }
}

/// Collects the text of every price-bearing element, whitespace-collapsed
/// and de-duplicated (nested containers repeat their children's text).
fn harvest_fragments(html: &str) -> Vec<FragmentResult> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("li, div, span").unwrap();

    let mut seen = HashSet::new();
    let mut fragments = Vec::new();
    for element in document.select(&selector) {
        if fragments.len() >= MAX_FRAGMENTS {
            debug!("fragment harvest cap reached");
            break;
        }
        let raw = element.text().collect::<Vec<_>>().join(" ");
        let text = raw.split_whitespace().collect::<Vec<_>>().join(" ");
        if text.chars().count() > MAX_FRAGMENT_CHARS {
            continue;
        }
        if !CURRENCY_MARKERS.iter().any(|m| text.contains(m)) {
            continue;
        }
        if seen.insert(text.clone()) {
            fragments.push(Ok(text));
        }
    }
    fragments
}
