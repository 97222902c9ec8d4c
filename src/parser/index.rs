use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use reqwest::Url;
use scraper::{Html, Selector};
use tracing::warn;

use super::{non_empty, selector, text_of};

static FOUND: LazyLock<Selector> = LazyLock::new(|| selector("p#did-search-found"));
static FOUND_SPAN: LazyLock<Selector> = LazyLock::new(|| selector("span"));
static ITEM: LazyLock<Selector> = LazyLock::new(|| selector("div.did-search-item"));
static ITEM_TEXT: LazyLock<Selector> = LazyLock::new(|| selector("div.did-text"));
static GUEST_LINK: LazyLock<Selector> = LazyLock::new(|| selector("h4 a"));
static BROADCAST_DATE: LazyLock<Selector> = LazyLock::new(|| selector("p.did-date"));
static KNOWN_FOR: LazyLock<Selector> = LazyLock::new(|| selector("p.did-castaways-known-for"));

static LEADING_COUNT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*([\d,]+)").unwrap());

/// One castaway as listed on an index page.
#[derive(Debug, Clone)]
pub struct ListingEntry {
    pub name: String,
    pub url: Url,
    /// Only the older index layout carries the broadcast date inline.
    pub date: Option<NaiveDate>,
    pub occupation: Option<String>,
}

pub struct IndexPage {
    /// Listing items found, including the ones that had to be skipped.
    pub items: usize,
    pub entries: Vec<ListingEntry>,
    /// Items logged and dropped because a field could not be read.
    pub skipped: usize,
}

/// Total number of episodes announced by the search summary ("42 castaways found").
pub fn episode_count(html: &str) -> Option<usize> {
    let doc = Html::parse_document(html);
    let found = doc.select(&FOUND).next()?;

    if let Some(total) = found
        .value()
        .attr("data-total")
        .and_then(|t| t.trim().parse().ok())
    {
        return Some(total);
    }

    let text = found
        .select(&FOUND_SPAN)
        .next()
        .map(text_of)
        .unwrap_or_else(|| text_of(found));
    let caps = LEADING_COUNT_RE.captures(&text)?;
    caps[1].replace(',', "").parse().ok()
}

pub fn parse(html: &str, site: &Url) -> IndexPage {
    let doc = Html::parse_document(html);
    let mut items = 0;
    let mut entries = Vec::new();

    for item in doc.select(&ITEM) {
        items += 1;

        let Some(text) = item.select(&ITEM_TEXT).next() else {
            warn!("Unable to process item - no text div");
            continue;
        };
        let Some(link) = text.select(&GUEST_LINK).next() else {
            warn!("Unable to find guest name");
            continue;
        };
        let Some(name) = non_empty(text_of(link)) else {
            warn!("Guest link has no name");
            continue;
        };
        let Some(url) = link.value().attr("href").and_then(|h| site.join(h).ok()) else {
            warn!("No usable detail link for guest {:?}", name);
            continue;
        };

        let date = match text.select(&BROADCAST_DATE).next() {
            None => None,
            Some(el) => {
                let raw = text_of(el);
                match parse_listing_date(&raw) {
                    Some(d) => Some(d),
                    None => {
                        warn!("Unable to parse broadcast date {:?} for guest {:?}", raw, name);
                        continue;
                    }
                }
            }
        };

        let occupation = text.select(&KNOWN_FOR).next().map(text_of);

        entries.push(ListingEntry {
            name,
            url,
            date,
            occupation,
        });
    }

    let skipped = items - entries.len();
    IndexPage {
        items,
        entries,
        skipped,
    }
}

/// "Broadcast | 20 Dec 1980" → 1980-12-20
fn parse_listing_date(text: &str) -> Option<NaiveDate> {
    let raw = text.split('|').nth(1).unwrap_or(text).trim();
    NaiveDate::parse_from_str(raw, "%d %b %Y").ok()
}
