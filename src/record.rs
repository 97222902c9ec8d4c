use chrono::{DateTime, NaiveDate, Utc};

/// One castaway appearance. A show is complete once its `url` row exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Show {
    pub date: NaiveDate,
    pub guest: String,
}

/// Value of the `type` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Occupation,
    AlternateName,
    Record,
    RecordKeep,
    Book,
    Luxury,
    Url,
}

impl Kind {
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Occupation => "occupation",
            Kind::AlternateName => "alternate_name",
            Kind::Record => "record",
            Kind::RecordKeep => "record_keep",
            Kind::Book => "book",
            Kind::Luxury => "luxury",
            Kind::Url => "url",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Principal {
    Artist,
    Composer,
}

impl Principal {
    pub fn as_str(self) -> &'static str {
        match self {
            Principal::Artist => "artist",
            Principal::Composer => "composer",
        }
    }
}

/// A music choice as read from a segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub title: Option<String>,
    pub performer: Option<String>,
    pub composer: Option<String>,
    pub principal: Principal,
    /// MusicBrainz artist id taken from the artist link.
    pub mb_id: Option<String>,
    /// The castaway's favourite, the one disc they would keep.
    pub keep: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fact {
    Occupation(String),
    AlternateName(String),
    Music(Track),
    Book(Option<String>),
    Luxury(Option<String>),
    Url(String),
}

impl Fact {
    pub fn kind(&self) -> Kind {
        match self {
            Fact::Occupation(_) => Kind::Occupation,
            Fact::AlternateName(_) => Kind::AlternateName,
            Fact::Music(t) if t.keep => Kind::RecordKeep,
            Fact::Music(_) => Kind::Record,
            Fact::Book(_) => Kind::Book,
            Fact::Luxury(_) => Kind::Luxury,
            Fact::Url(_) => Kind::Url,
        }
    }

    /// Text stored in the `title` column.
    pub fn title(&self) -> Option<&str> {
        match self {
            Fact::Occupation(t) | Fact::AlternateName(t) | Fact::Url(t) => Some(t.as_str()),
            Fact::Music(track) => track.title.as_deref(),
            Fact::Book(t) | Fact::Luxury(t) => t.as_deref(),
        }
    }
}

/// Fields shared by every row written for one show.
#[derive(Debug, Clone)]
pub struct Template {
    pub date_scraped: DateTime<Utc>,
    pub show: Show,
}

impl Template {
    pub fn new(show: Show) -> Self {
        Self {
            date_scraped: Utc::now(),
            show,
        }
    }

    pub fn with_fact(&self, fact: Fact) -> Record {
        Record {
            date_scraped: self.date_scraped,
            show: self.show.clone(),
            fact,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub date_scraped: DateTime<Utc>,
    pub show: Show,
    pub fact: Fact,
}

impl Record {
    pub fn kind(&self) -> Kind {
        self.fact.kind()
    }
}
