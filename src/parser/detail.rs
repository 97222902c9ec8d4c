use std::sync::LazyLock;

use chrono::NaiveDate;
use scraper::{Html, Selector};

use super::{selector, text_of};

static HEADING: LazyLock<Selector> = LazyLock::new(|| selector("div.island div h1"));
static EVENT_TIME: LazyLock<Selector> =
    LazyLock::new(|| selector(".broadcast-event__time[content]"));
static TIME: LazyLock<Selector> = LazyLock::new(|| selector("time[datetime]"));

pub struct DetailPage {
    /// Castaway name as shown in the page heading.
    pub castaway: String,
    pub broadcast_date: Option<NaiveDate>,
}

/// `None` when the page lacks the castaway heading, i.e. the layout is not one we know.
pub fn parse(html: &str) -> Option<DetailPage> {
    let doc = Html::parse_document(html);
    let heading = doc.select(&HEADING).next()?;

    let broadcast_date = doc
        .select(&EVENT_TIME)
        .filter_map(|el| el.value().attr("content"))
        .chain(doc.select(&TIME).filter_map(|el| el.value().attr("datetime")))
        .find_map(parse_iso_date);

    Some(DetailPage {
        castaway: text_of(heading),
        broadcast_date,
    })
}

fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    let day = raw.trim().get(..10)?;
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}
