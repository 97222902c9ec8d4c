use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use tracing::warn;

use super::{has_class, non_empty, selector, text_of};
use crate::record::{Fact, Principal, Track};

static ENTRY: LazyLock<Selector> = LazyLock::new(|| selector("li.segments-list__item"));
static GROUP: LazyLock<Selector> = LazyLock::new(|| selector("li.segments-list__item--group"));
static MUSIC: LazyLock<Selector> = LazyLock::new(|| selector("li.segments-list__item--music"));
static SPEECH: LazyLock<Selector> = LazyLock::new(|| selector("li.segments-list__item--speech"));
static TRACK: LazyLock<Selector> = LazyLock::new(|| selector("div.segment__track"));
static ARTIST: LazyLock<Selector> = LazyLock::new(|| selector("span.artist"));
static NAME: LazyLock<Selector> = LazyLock::new(|| selector(r#"span[property="name"]"#));
static CONTRIBUTOR: LazyLock<Selector> =
    LazyLock::new(|| selector(r#"span[property="contributor"]"#));
static ARTIST_LINK: LazyLock<Selector> = LazyLock::new(|| selector("h3 a"));
static KEEP_MARKER: LazyLock<Selector> = LazyLock::new(|| selector(".track_keep"));
static GROUP_TITLE: LazyLock<Selector> = LazyLock::new(|| selector("h2"));
static LABEL: LazyLock<Selector> = LazyLock::new(|| selector("h3, h4"));
static PARAGRAPH: LazyLock<Selector> = LazyLock::new(|| selector("p"));

pub const MUSIC_CHOICES: usize = 8;
/// Eight discs, a book, a luxury and the favourite's group container.
pub const GROUPED_ENTRIES: usize = 11;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechSegment {
    /// Heading such as "Book Choice"; the older layout has none.
    pub label: Option<String>,
    pub text: Option<String>,
}

#[derive(Debug)]
pub struct SegmentList {
    pub entries: usize,
    /// Newer layout: the favourite disc sits inside a group entry.
    pub grouped: bool,
    pub music: Vec<Track>,
    pub speech: Vec<SpeechSegment>,
}

impl SegmentList {
    /// (expected, found) entry counts for this page's layout.
    pub fn count_check(&self) -> (usize, usize) {
        if self.grouped {
            (GROUPED_ENTRIES, self.entries)
        } else {
            (MUSIC_CHOICES, self.music.len())
        }
    }
}

pub fn parse(html: &str) -> SegmentList {
    let doc = Html::parse_document(html);
    let mut music: Vec<Track> = doc.select(&MUSIC).map(parse_track).collect();
    keep_first_favourite(&mut music);
    SegmentList {
        entries: doc.select(&ENTRY).count(),
        grouped: doc.select(&GROUP).next().is_some(),
        music,
        speech: doc.select(&SPEECH).map(parse_speech).collect(),
    }
}

/// A show has at most one favourite disc.
fn keep_first_favourite(music: &mut [Track]) {
    let mut seen = false;
    let mut cleared = 0;
    for track in music.iter_mut().filter(|t| t.keep) {
        if seen {
            track.keep = false;
            cleared += 1;
        }
        seen = true;
    }
    if cleared > 0 {
        warn!("{} extra favourite discs marked; keeping the first", cleared);
    }
}

fn parse_track(li: ElementRef) -> Track {
    let scope = li.select(&TRACK).next().unwrap_or(li);

    let mut performer = scope.select(&ARTIST).next().map(text_of).and_then(non_empty);
    let title = scope
        .select(&NAME)
        .find(|name| !is_credit(*name, scope))
        .map(text_of)
        .and_then(non_empty);
    let mb_id = scope
        .select(&ARTIST_LINK)
        .next()
        .and_then(|a| a.value().attr("href"))
        .and_then(last_path_segment);

    // Classical convention: the primary credit is the composer and the
    // performer appears as a "Performer:" contributor.
    let contributors: Vec<ElementRef> = scope.select(&CONTRIBUTOR).collect();
    let mut composer = None;
    let mut principal = Principal::Artist;
    if !contributors.is_empty() {
        principal = Principal::Composer;
        composer = performer.take();
        performer = contributors
            .iter()
            .find(|c| text_of(**c).contains("Performer:"))
            .and_then(|c| c.select(&NAME).next())
            .map(text_of)
            .and_then(non_empty);
    }

    Track {
        title,
        performer,
        composer,
        principal,
        mb_id,
        keep: is_favourite(li) || scope.select(&KEEP_MARKER).next().is_some(),
    }
}

/// Whether `name` belongs to the artist or a contributor credit rather than the track title.
fn is_credit(name: ElementRef, scope: ElementRef) -> bool {
    name.ancestors()
        .take_while(|node| node.id() != scope.id())
        .filter_map(ElementRef::wrap)
        .any(|el| has_class(el, "artist") || el.value().attr("property") == Some("contributor"))
}

/// Best effort: a disc nested in a group entry titled "favourite", or the only
/// disc in an untitled group.
fn is_favourite(li: ElementRef) -> bool {
    let group = li
        .ancestors()
        .filter_map(ElementRef::wrap)
        .find(|el| has_class(*el, "segments-list__item--group"));
    let Some(group) = group else {
        return false;
    };
    match group.select(&GROUP_TITLE).next() {
        Some(title) => {
            let title = text_of(title).to_lowercase();
            title.contains("favourite") || title.contains("favorite")
        }
        None => group.select(&MUSIC).take(2).count() == 1,
    }
}

fn last_path_segment(href: &str) -> Option<String> {
    href.split(['#', '?'])
        .next()?
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .map(str::to_string)
        .and_then(non_empty)
}

fn parse_speech(li: ElementRef) -> SpeechSegment {
    SpeechSegment {
        label: li.select(&LABEL).next().map(text_of).and_then(non_empty),
        text: li.select(&PARAGRAPH).next().map(text_of).and_then(non_empty),
    }
}

/// Map speech segments to book and luxury facts.
///
/// Labelled segments are classified by label prefix. When no segment carries a
/// label the older positional order (book, then luxury) is assumed.
pub fn classify_speech(segments: &[SpeechSegment], page: &str) -> Vec<Fact> {
    let mut facts = Vec::new();

    if segments.iter().any(|s| s.label.is_some()) {
        for segment in segments {
            let Some(label) = &segment.label else {
                warn!("Dropping unlabelled segment {:?} on {}", segment.text, page);
                continue;
            };
            let lower = label.to_lowercase();
            if lower.starts_with("book") {
                facts.push(Fact::Book(segment.text.clone()));
            } else if lower.starts_with("lux") {
                facts.push(Fact::Luxury(segment.text.clone()));
            } else {
                warn!("Unrecognised segment type {:?} on {}", label, page);
            }
        }
    } else if !segments.is_empty() {
        warn!("Unlabelled segments on {}; assuming book then luxury item", page);
        let mut positional = segments.iter();
        if let Some(book) = positional.next() {
            facts.push(Fact::Book(book.text.clone()));
        }
        if let Some(luxury) = positional.next() {
            facts.push(Fact::Luxury(luxury.text.clone()));
        }
        let extra = positional.count();
        if extra > 0 {
            warn!("Dropping {} extra unlabelled segments on {}", extra, page);
        }
    }

    if !facts.iter().any(|f| matches!(f, Fact::Book(_))) {
        warn!("Book missing for: {}", page);
    }
    if !facts.iter().any(|f| matches!(f, Fact::Luxury(_))) {
        warn!("Luxury item missing for: {}", page);
    }
    facts
}
