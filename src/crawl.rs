use std::collections::HashSet;
use std::fmt;

use anyhow::{bail, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Url;
use tracing::{debug, info, warn};

use crate::db::RecordSink;
use crate::fetch::Fetch;
use crate::parser::index::ListingEntry;
use crate::parser::{detail, index, segments};
use crate::record::{Fact, Show, Template};

pub const SITE: &str = "https://www.bbc.co.uk";
pub const INDEX_URL: &str =
    "https://www.bbc.co.uk/radio4/features/desert-island-discs/find-a-castaway";
pub const INDEX_PAGE_SIZE: usize = 20;

/// How processing of one castaway ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuestOutcome {
    Completed,
    AlreadyDone,
    FetchFailed,
    LayoutMismatch,
}

impl fmt::Display for GuestOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GuestOutcome::Completed => "completed",
            GuestOutcome::AlreadyDone => "already processed",
            GuestOutcome::FetchFailed => "skipped (fetch failed)",
            GuestOutcome::LayoutMismatch => "skipped (unrecognised page layout)",
        };
        f.write_str(s)
    }
}

/// Summary counts for one or more index pages.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Tally {
    pub pages: usize,
    pub pages_failed: usize,
    pub listed: usize,
    pub skipped_items: usize,
    pub completed: usize,
    pub already_done: usize,
    pub fetch_failed: usize,
    pub layout_mismatch: usize,
}

impl Tally {
    fn record(&mut self, outcome: GuestOutcome) {
        match outcome {
            GuestOutcome::Completed => self.completed += 1,
            GuestOutcome::AlreadyDone => self.already_done += 1,
            GuestOutcome::FetchFailed => self.fetch_failed += 1,
            GuestOutcome::LayoutMismatch => self.layout_mismatch += 1,
        }
    }

    fn merge(&mut self, other: &Tally) {
        self.pages += other.pages;
        self.pages_failed += other.pages_failed;
        self.listed += other.listed;
        self.skipped_items += other.skipped_items;
        self.completed += other.completed;
        self.already_done += other.already_done;
        self.fetch_failed += other.fetch_failed;
        self.layout_mismatch += other.layout_mismatch;
    }

    pub fn print(&self) {
        println!(
            "Processed {} new entries ({} listed on {} pages, {} already done).",
            self.completed, self.listed, self.pages, self.already_done
        );
        println!(
            "Skipped: {} fetch failures, {} unrecognised pages, {} malformed listings, {} index pages.",
            self.fetch_failed, self.layout_mismatch, self.skipped_items, self.pages_failed
        );
    }
}

/// Walks the castaway index and writes one row per extracted fact to `sink`.
pub struct Crawler<F, S> {
    fetcher: F,
    sink: S,
    completed: HashSet<Show>,
    site: Url,
}

impl<F: Fetch, S: RecordSink> Crawler<F, S> {
    pub fn new(fetcher: F, sink: S, completed: HashSet<Show>) -> Result<Self> {
        Ok(Self {
            fetcher,
            sink,
            completed,
            site: Url::parse(SITE)?,
        })
    }

    pub fn site(&self) -> &Url {
        &self.site
    }

    /// Full scrape: every index page in ascending order.
    pub async fn run(&mut self) -> Result<Tally> {
        let first = self
            .fetcher
            .fetch(INDEX_URL)
            .await
            .context("Failed to fetch the first index page")?;

        let episodes = match index::episode_count(&first) {
            Some(n) if n > 0 => n,
            _ => bail!("No episodes found on {}; has the site format changed?", INDEX_URL),
        };
        let last_page = episodes.div_ceil(INDEX_PAGE_SIZE);
        info!("{} total episodes, {} index pages", episodes, last_page);

        let pb = ProgressBar::new(last_page as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40} {pos}/{len} pages ({eta})")?
                .progress_chars("=> "),
        );

        let mut total = self.process_index_page(&first).await?;
        pb.inc(1);

        for page_num in 2..=last_page {
            let url = index_page_url(page_num);
            info!("Fetching index page {}", page_num);
            match self.fetcher.fetch(&url).await {
                Ok(html) => total.merge(&self.process_index_page(&html).await?),
                Err(e) => {
                    warn!("Unable to fetch index page {}: {}", page_num, e);
                    total.pages_failed += 1;
                }
            }
            pb.inc(1);
        }

        pb.finish_and_clear();
        info!("Processed {} new entries", total.completed);
        Ok(total)
    }

    /// Fetch and process a single index page (1-based).
    pub async fn process_index(&mut self, page_num: usize) -> Result<Tally> {
        let url = index_page_url(page_num);
        let html = self
            .fetcher
            .fetch(&url)
            .await
            .with_context(|| format!("Failed to fetch index page {}", page_num))?;
        self.process_index_page(&html).await
    }

    pub async fn process_index_page(&mut self, html: &str) -> Result<Tally> {
        let page = index::parse(html, &self.site);
        info!("Index page has {} items", page.items);

        let mut tally = Tally {
            pages: 1,
            listed: page.items,
            skipped_items: page.skipped,
            ..Default::default()
        };
        for entry in &page.entries {
            let outcome = self.process_guest(entry).await?;
            tally.record(outcome);
        }

        info!("Processed {} of {} shows", tally.completed, page.items);
        Ok(tally)
    }

    /// Process one castaway. Only store errors are returned as `Err`.
    pub async fn process_guest(&mut self, entry: &ListingEntry) -> Result<GuestOutcome> {
        if let Some(date) = entry.date {
            if self.is_done(date, &entry.name) {
                debug!("Skipping {} {}", date, entry.name);
                return Ok(GuestOutcome::AlreadyDone);
            }
        }

        let html = match self.fetcher.fetch(entry.url.as_str()).await {
            Ok(html) => html,
            Err(e) => {
                warn!("Unable to fetch URL {}: {}", entry.url, e);
                return Ok(GuestOutcome::FetchFailed);
            }
        };

        let Some(page) = detail::parse(&html) else {
            warn!("Skipping, no castaway heading; page format has changed? {}", entry.url);
            return Ok(GuestOutcome::LayoutMismatch);
        };

        let Some(date) = entry.date.or(page.broadcast_date) else {
            warn!("Unable to find broadcast date for guest {:?} on {}", entry.name, entry.url);
            return Ok(GuestOutcome::LayoutMismatch);
        };
        if entry.date.is_none() && self.is_done(date, &entry.name) {
            debug!("Skipping {} {}", date, entry.name);
            return Ok(GuestOutcome::AlreadyDone);
        }

        let show = Show {
            date,
            guest: entry.name.clone(),
        };
        let template = Template::new(show.clone());

        let occupation = entry.occupation.clone().unwrap_or_default();
        self.sink.append(&template.with_fact(Fact::Occupation(occupation)))?;

        if page.castaway != entry.name {
            warn!(
                "Mismatched names between index ({}) and detail page ({})",
                entry.name, page.castaway
            );
            self.sink
                .append(&template.with_fact(Fact::AlternateName(page.castaway.clone())))?;
        }

        let outcome = self.process_segments(&template, &entry.url).await?;
        if outcome == GuestOutcome::Completed {
            self.completed.insert(show);
        }
        Ok(outcome)
    }

    /// Music, book and luxury choices, then the `url` completion marker.
    async fn process_segments(&mut self, template: &Template, url: &Url) -> Result<GuestOutcome> {
        let seg_url = segments_url(url);
        let html = match self.fetcher.fetch(seg_url.as_str()).await {
            Ok(html) => html,
            Err(e) => {
                warn!("Failed to fetch /segments for {}: {}", url, e);
                return Ok(GuestOutcome::FetchFailed);
            }
        };

        let list = segments::parse(&html);
        let (expected, found) = list.count_check();
        if expected != found {
            warn!("Unexpected number of segments on {}: {} (expected {})", seg_url, found, expected);
        }

        for track in list.music {
            if track.performer.is_none() && track.composer.is_none() {
                warn!("Artist missing for selection {:?} on {}", track.title, seg_url);
            }
            self.sink.append(&template.with_fact(Fact::Music(track)))?;
        }

        for fact in segments::classify_speech(&list.speech, seg_url.as_str()) {
            self.sink.append(&template.with_fact(fact))?;
        }

        // Written last: its presence marks the show as complete.
        self.sink.append(&template.with_fact(Fact::Url(url.to_string())))?;
        Ok(GuestOutcome::Completed)
    }

    fn is_done(&self, date: chrono::NaiveDate, guest: &str) -> bool {
        self.completed.contains(&Show {
            date,
            guest: guest.to_string(),
        })
    }
}

fn index_page_url(page_num: usize) -> String {
    if page_num <= 1 {
        INDEX_URL.to_string()
    } else {
        format!("{}/page/{}", INDEX_URL, page_num)
    }
}

/// Selections are only rendered without JavaScript on the `/segments` sub-page.
fn segments_url(url: &Url) -> Url {
    let mut seg = url.clone();
    seg.set_fragment(None);
    seg.set_query(None);
    let path = format!("{}/segments", seg.path().trim_end_matches('/'));
    seg.set_path(&path);
    seg
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use anyhow::anyhow;
    use chrono::NaiveDate;

    use super::*;
    use crate::record::{Kind, Principal, Record};

    const CASTAWAY: &str = "https://www.bbc.co.uk/radio4/features/desert-island-discs/castaway";

    fn fixture(name: &str) -> String {
        std::fs::read_to_string(format!("tests/fixtures/{}.html", name)).unwrap()
    }

    /// Serves fixtures by URL; anything else is a 404.
    #[derive(Default)]
    struct FakeSite {
        pages: HashMap<String, String>,
        requests: RefCell<Vec<String>>,
    }

    impl FakeSite {
        fn serve(mut self, url: &str, fixture_name: &str) -> Self {
            self.pages.insert(url.to_string(), fixture(fixture_name));
            self
        }

        fn serve_html(mut self, url: &str, html: &str) -> Self {
            self.pages.insert(url.to_string(), html.to_string());
            self
        }
    }

    impl Fetch for FakeSite {
        async fn fetch(&self, url: &str) -> Result<String> {
            self.requests.borrow_mut().push(url.to_string());
            self.pages
                .get(url)
                .cloned()
                .ok_or_else(|| anyhow!("HTTP status client error (404 Not Found) for url ({})", url))
        }
    }

    fn askey_site() -> FakeSite {
        FakeSite::default()
            .serve(&format!("{}/663e79cf#p009mvl6", CASTAWAY), "detail_askey")
            .serve(&format!("{}/663e79cf/segments", CASTAWAY), "segments")
    }

    fn crawler(site: FakeSite, completed: HashSet<Show>) -> Crawler<FakeSite, Vec<Record>> {
        Crawler::new(site, Vec::new(), completed).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn askey_entry() -> ListingEntry {
        ListingEntry {
            name: "Arthur Askey".into(),
            url: Url::parse(&format!("{}/663e79cf#p009mvl6", CASTAWAY)).unwrap(),
            date: Some(date(1980, 12, 20)),
            occupation: Some("Comedian, Music hall".into()),
        }
    }

    fn kinds(records: &[Record]) -> Vec<Kind> {
        records.iter().map(Record::kind).collect()
    }

    fn count(records: &[Record], kind: Kind) -> usize {
        records.iter().filter(|r| r.kind() == kind).count()
    }

    #[tokio::test]
    async fn full_guest_writes_twelve_records() {
        let mut c = crawler(askey_site(), HashSet::new());
        let outcome = c.process_guest(&askey_entry()).await.unwrap();
        assert_eq!(outcome, GuestOutcome::Completed);

        let records = &c.sink;
        assert_eq!(records.len(), 12);
        assert_eq!(count(records, Kind::Occupation), 1);
        assert_eq!(count(records, Kind::AlternateName), 0);
        assert_eq!(count(records, Kind::Record), 7);
        assert_eq!(count(records, Kind::RecordKeep), 1);
        assert_eq!(count(records, Kind::Book), 1);
        assert_eq!(count(records, Kind::Luxury), 1);
        assert_eq!(count(records, Kind::Url), 1);

        assert_eq!(records[0].fact, Fact::Occupation("Comedian, Music hall".into()));
        assert!(records.iter().all(|r| r.show.guest == "Arthur Askey"));
        assert!(records.iter().all(|r| r.show.date == date(1980, 12, 20)));
    }

    #[tokio::test]
    async fn url_marker_written_last() {
        let mut c = crawler(askey_site(), HashSet::new());
        c.process_guest(&askey_entry()).await.unwrap();

        let last = c.sink.last().unwrap();
        assert_eq!(
            last.fact,
            Fact::Url(format!("{}/663e79cf#p009mvl6", CASTAWAY))
        );
        assert_eq!(kinds(&c.sink).iter().filter(|k| **k == Kind::Url).count(), 1);
    }

    #[tokio::test]
    async fn segments_url_drops_fragment() {
        let mut c = crawler(askey_site(), HashSet::new());
        c.process_guest(&askey_entry()).await.unwrap();
        let requests = c.fetcher.requests.borrow();
        assert_eq!(requests[1], format!("{}/663e79cf/segments", CASTAWAY));
    }

    #[tokio::test]
    async fn completed_show_is_skipped() {
        let done = HashSet::from([Show {
            date: date(1980, 12, 20),
            guest: "Arthur Askey".into(),
        }]);
        let mut c = crawler(askey_site(), done);
        let outcome = c.process_guest(&askey_entry()).await.unwrap();
        assert_eq!(outcome, GuestOutcome::AlreadyDone);
        assert!(c.sink.is_empty());
        assert!(c.fetcher.requests.borrow().is_empty());
    }

    #[tokio::test]
    async fn second_run_over_same_guest_appends_nothing() {
        let mut c = crawler(askey_site(), HashSet::new());
        assert_eq!(c.process_guest(&askey_entry()).await.unwrap(), GuestOutcome::Completed);
        let written = c.sink.len();
        assert_eq!(c.process_guest(&askey_entry()).await.unwrap(), GuestOutcome::AlreadyDone);
        assert_eq!(c.sink.len(), written);
    }

    #[tokio::test]
    async fn same_guest_different_date_is_new_show() {
        let done = HashSet::from([Show {
            date: date(1942, 4, 2),
            guest: "Arthur Askey".into(),
        }]);
        let mut c = crawler(askey_site(), done);
        assert_eq!(c.process_guest(&askey_entry()).await.unwrap(), GuestOutcome::Completed);
    }

    #[tokio::test]
    async fn name_mismatch_records_alternate_name() {
        let site = FakeSite::default()
            .serve(&format!("{}/1a2b3c4d", CASTAWAY), "detail_smith")
            .serve(&format!("{}/1a2b3c4d/segments", CASTAWAY), "segments");
        let mut c = crawler(site, HashSet::new());
        let entry = ListingEntry {
            name: "Jon Smith".into(),
            url: Url::parse(&format!("{}/1a2b3c4d", CASTAWAY)).unwrap(),
            date: Some(date(1995, 1, 5)),
            occupation: Some("Novelist".into()),
        };
        assert_eq!(c.process_guest(&entry).await.unwrap(), GuestOutcome::Completed);

        let alt: Vec<_> = c.sink.iter().filter(|r| r.kind() == Kind::AlternateName).collect();
        assert_eq!(alt.len(), 1);
        assert_eq!(alt[0].fact, Fact::AlternateName("John Smith".into()));
        assert_eq!(alt[0].show.guest, "Jon Smith");
        assert_eq!(c.sink.len(), 13);
        assert_eq!(c.sink.last().unwrap().kind(), Kind::Url);
    }

    #[tokio::test]
    async fn classical_record_emitted_with_composer() {
        let mut c = crawler(askey_site(), HashSet::new());
        c.process_guest(&askey_entry()).await.unwrap();
        let bach = c
            .sink
            .iter()
            .find_map(|r| match &r.fact {
                Fact::Music(t) if t.principal == Principal::Composer => Some(t),
                _ => None,
            })
            .unwrap();
        assert_eq!(bach.composer.as_deref(), Some("Johann Sebastian Bach"));
        assert_eq!(bach.performer.as_deref(), Some("Glenn Gould"));
    }

    #[tokio::test]
    async fn segments_fetch_failure_writes_no_marker() {
        let site = FakeSite::default().serve(&format!("{}/663e79cf#p009mvl6", CASTAWAY), "detail_askey");
        let mut c = crawler(site, HashSet::new());
        let outcome = c.process_guest(&askey_entry()).await.unwrap();
        assert_eq!(outcome, GuestOutcome::FetchFailed);
        assert_eq!(kinds(&c.sink), vec![Kind::Occupation]);
        assert!(c.completed.is_empty());
    }

    #[tokio::test]
    async fn short_segment_list_still_completes() {
        let mut html = String::from("<ul>");
        for n in 1..=7 {
            html.push_str(&format!(
                r#"<li class="segments-list__item segments-list__item--music"><div class="segment__track">
                <h3><span class="artist"><span property="name">Artist {n}</span></span></h3>
                <p><span property="name">Song {n}</span></p></div></li>"#
            ));
        }
        html.push_str(
            r#"<li class="segments-list__item segments-list__item--speech">
            <h4>Book Choice</h4><p>Bleak House</p></li></ul>"#,
        );
        let site = FakeSite::default()
            .serve(&format!("{}/663e79cf#p009mvl6", CASTAWAY), "detail_askey")
            .serve_html(&format!("{}/663e79cf/segments", CASTAWAY), &html);
        let mut c = crawler(site, HashSet::new());

        let outcome = c.process_guest(&askey_entry()).await.unwrap();
        assert_eq!(outcome, GuestOutcome::Completed);
        assert_eq!(count(&c.sink, Kind::Record) + count(&c.sink, Kind::RecordKeep), 7);
        assert_eq!(count(&c.sink, Kind::Book), 1);
        assert_eq!(count(&c.sink, Kind::Luxury), 0);
        assert_eq!(c.sink.last().map(Record::kind), Some(Kind::Url));
    }

    #[tokio::test]
    async fn detail_fetch_failure_writes_nothing() {
        let mut c = crawler(FakeSite::default(), HashSet::new());
        let outcome = c.process_guest(&askey_entry()).await.unwrap();
        assert_eq!(outcome, GuestOutcome::FetchFailed);
        assert!(c.sink.is_empty());
    }

    #[tokio::test]
    async fn unknown_layout_writes_nothing() {
        let site = FakeSite::default()
            .serve(&format!("{}/663e79cf#p009mvl6", CASTAWAY), "detail_unknown")
            .serve(&format!("{}/663e79cf/segments", CASTAWAY), "segments");
        let mut c = crawler(site, HashSet::new());
        let outcome = c.process_guest(&askey_entry()).await.unwrap();
        assert_eq!(outcome, GuestOutcome::LayoutMismatch);
        assert!(c.sink.is_empty());
    }

    #[tokio::test]
    async fn failed_guest_does_not_stop_the_page() {
        // Askey's segments page is missing; Smith is complete.
        let site = FakeSite::default()
            .serve(&format!("{}/663e79cf#p009mvl6", CASTAWAY), "detail_askey")
            .serve(&format!("{}/1a2b3c4d", CASTAWAY), "detail_smith")
            .serve(&format!("{}/1a2b3c4d/segments", CASTAWAY), "segments_old");
        let mut c = crawler(site, HashSet::new());
        let tally = c.process_index_page(&fixture("index")).await.unwrap();

        assert_eq!(tally.listed, 4);
        assert_eq!(tally.skipped_items, 2);
        assert_eq!(tally.fetch_failed, 1);
        assert_eq!(tally.completed, 1);

        let askey: Vec<_> = c.sink.iter().filter(|r| r.show.guest == "Arthur Askey").collect();
        assert_eq!(askey.len(), 1);
        assert_eq!(askey[0].kind(), Kind::Occupation);

        let smith: Vec<_> = c.sink.iter().filter(|r| r.show.guest == "Jon Smith").collect();
        assert_eq!(smith.last().unwrap().kind(), Kind::Url);
        assert_eq!(smith.iter().filter(|r| r.kind() == Kind::Book).count(), 1);
    }

    #[tokio::test]
    async fn newer_layout_takes_date_from_detail_page() {
        let site = FakeSite::default()
            .serve("https://www.bbc.co.uk/programmes/b07b9wq8", "detail_new")
            .serve("https://www.bbc.co.uk/programmes/b07b9wq8/segments", "segments");
        let mut c = crawler(site, HashSet::new());
        let tally = c.process_index_page(&fixture("index_new")).await.unwrap();
        assert_eq!(tally.completed, 1);

        assert_eq!(c.sink.len(), 12);
        assert!(c.sink.iter().all(|r| r.show.date == date(2016, 5, 15)));
        assert_eq!(c.sink[0].fact, Fact::Occupation(String::new()));
    }

    #[tokio::test]
    async fn newer_layout_skip_checked_after_detail() {
        let done = HashSet::from([Show {
            date: date(2016, 5, 15),
            guest: "Mary Beard".into(),
        }]);
        let site = FakeSite::default()
            .serve("https://www.bbc.co.uk/programmes/b07b9wq8", "detail_new")
            .serve("https://www.bbc.co.uk/programmes/b07b9wq8/segments", "segments");
        let mut c = crawler(site, done);
        let tally = c.process_index_page(&fixture("index_new")).await.unwrap();
        assert_eq!(tally.already_done, 1);
        assert!(c.sink.is_empty());
    }

    #[tokio::test]
    async fn newer_layout_without_date_is_layout_mismatch() {
        let site = FakeSite::default()
            .serve("https://www.bbc.co.uk/programmes/b07b9wq8", "detail_askey")
            .serve("https://www.bbc.co.uk/programmes/b07b9wq8/segments", "segments");
        let mut c = crawler(site, HashSet::new());
        let tally = c.process_index_page(&fixture("index_new")).await.unwrap();
        assert_eq!(tally.layout_mismatch, 1);
        assert!(c.sink.is_empty());
    }

    #[tokio::test]
    async fn run_aborts_without_episode_count() {
        let site = FakeSite::default().serve_html(INDEX_URL, "<html><body>Maintenance</body></html>");
        let mut c = crawler(site, HashSet::new());
        assert!(c.run().await.is_err());
        assert!(c.sink.is_empty());
    }

    #[tokio::test]
    async fn run_aborts_on_zero_episodes() {
        let site = FakeSite::default().serve_html(
            INDEX_URL,
            r#"<p id="did-search-found" data-total="0"><span>0 castaways found</span></p>"#,
        );
        let mut c = crawler(site, HashSet::new());
        assert!(c.run().await.is_err());
    }

    #[tokio::test]
    async fn run_walks_every_index_page() {
        let first = fixture("index").replace(r#"data-total="2""#, r#"data-total="41""#);
        let site = FakeSite::default()
            .serve_html(INDEX_URL, &first)
            .serve(&format!("{}/page/2", INDEX_URL), "index_new")
            .serve(&format!("{}/663e79cf#p009mvl6", CASTAWAY), "detail_askey")
            .serve(&format!("{}/663e79cf/segments", CASTAWAY), "segments")
            .serve(&format!("{}/1a2b3c4d", CASTAWAY), "detail_smith")
            .serve(&format!("{}/1a2b3c4d/segments", CASTAWAY), "segments_old")
            .serve("https://www.bbc.co.uk/programmes/b07b9wq8", "detail_new")
            .serve("https://www.bbc.co.uk/programmes/b07b9wq8/segments", "segments");
        let mut c = crawler(site, HashSet::new());

        // 41 episodes → 3 pages; page 3 is not served.
        let tally = c.run().await.unwrap();
        assert_eq!(tally.pages, 2);
        assert_eq!(tally.pages_failed, 1);
        assert_eq!(tally.completed, 3);
        assert_eq!(count(&c.sink, Kind::Url), 3);
        assert!(c
            .fetcher
            .requests
            .borrow()
            .contains(&format!("{}/page/3", INDEX_URL)));
    }

    #[test]
    fn index_urls() {
        assert_eq!(index_page_url(1), INDEX_URL);
        assert_eq!(index_page_url(7), format!("{}/page/7", INDEX_URL));
    }

    #[test]
    fn segments_urls() {
        let u = Url::parse("https://www.bbc.co.uk/programmes/b07b9wq8/").unwrap();
        assert_eq!(
            segments_url(&u).as_str(),
            "https://www.bbc.co.uk/programmes/b07b9wq8/segments"
        );
    }
}
