//! Signal collection: the two fixed Google RSS feeds for Sri Lanka.
//! Feeds are best-effort input; any fetch or parse fault degrades to an empty
//! list so the report still goes out on a quiet or broken feed day.

use anyhow::{Context, Result};
use quick_xml::de::from_str;
use serde::{Deserialize, Serialize};

/// One feed entry as it is handed to the prompt. `published` stays the feed's
/// free-form text and is never parsed or normalized.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeedItem {
    pub title: String,
    pub link: String,
    pub published: String,
}

/// A fixed feed endpoint plus its item cap.
#[derive(Debug, Clone, Copy)]
pub struct FeedSpec {
    pub name: &'static str,
    pub url: &'static str,
    pub max_items: usize,
}

pub const GOOGLE_TRENDS_DAILY_LK: FeedSpec = FeedSpec {
    name: "google_trends_lk_daily",
    url: "https://trends.google.com/trends/trendingsearches/daily/rss?geo=LK",
    max_items: 40,
};

pub const GOOGLE_NEWS_LK: FeedSpec = FeedSpec {
    name: "google_news_lk",
    url: "https://news.google.com/rss?hl=en-LK&gl=LK&ceid=LK:en",
    max_items: 30,
};

#[derive(Debug, Deserialize)]
struct Rss {
    channel: Channel,
}
#[derive(Debug, Deserialize)]
struct Channel {
    #[serde(rename = "item", default)]
    item: Vec<Item>,
}
#[derive(Debug, Deserialize)]
struct Item {
    title: Option<String>,
    link: Option<String>,
    #[serde(rename = "pubDate")]
    pub_date: Option<String>,
}

/// Deserialize an RSS document into at most `max_items` items. Missing item
/// fields become empty strings rather than dropping the item.
pub fn parse_feed_items(xml: &str, max_items: usize) -> Result<Vec<FeedItem>> {
    let xml_clean = scrub_html_entities_for_xml(xml);
    let rss: Rss = from_str(&xml_clean).context("parsing feed xml")?;

    let out = rss
        .channel
        .item
        .into_iter()
        .take(max_items)
        .map(|it| FeedItem {
            title: it.title.unwrap_or_default(),
            link: it.link.unwrap_or_default(),
            published: it.pub_date.unwrap_or_default(),
        })
        .collect();
    Ok(out)
}

pub struct FeedCollector {
    http: reqwest::Client,
}

impl FeedCollector {
    pub fn new(http: reqwest::Client) -> Self {
        Self { http }
    }

    /// Fetch and parse one feed. Never fails: a fault yields an empty list
    /// and a warning, and the rest of the run proceeds without this feed.
    pub async fn collect(&self, spec: &FeedSpec) -> Vec<FeedItem> {
        match self.fetch(spec).await {
            Ok(items) => {
                tracing::info!(feed = spec.name, items = items.len(), "feed collected");
                items
            }
            Err(e) => {
                tracing::warn!(error = ?e, feed = spec.name, "feed error, continuing without it");
                Vec::new()
            }
        }
    }

    async fn fetch(&self, spec: &FeedSpec) -> Result<Vec<FeedItem>> {
        let body = self
            .http
            .get(spec.url)
            .send()
            .await
            .context("feed http get()")?
            .error_for_status()
            .context("feed http status")?
            .text()
            .await
            .context("feed http .text()")?;
        parse_feed_items(&body, spec.max_items)
    }
}

// Google feeds occasionally carry named HTML entities that are not valid XML
// entities and would fail deserialization.
fn scrub_html_entities_for_xml(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&ndash;", "-")
        .replace("&mdash;", "-")
        .replace("&ldquo;", "\"")
        .replace("&rdquo;", "\"")
        .replace("&lsquo;", "'")
        .replace("&rsquo;", "'")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrub_replaces_named_entities() {
        let s = "A&nbsp;B &ndash; C &ldquo;D&rdquo;";
        assert_eq!(scrub_html_entities_for_xml(s), "A B - C \"D\"");
    }

    #[test]
    fn scrub_keeps_xml_entities_untouched() {
        let s = "Fish &amp; Chips &lt;now&gt;";
        assert_eq!(scrub_html_entities_for_xml(s), s);
    }
}
