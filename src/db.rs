use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use rusqlite::Connection;
use serde::Serialize;
use tracing::warn;

use crate::record::{Fact, Record, Show};

pub const DB_PATH: &str = "data/did.sqlite";

pub fn connect(path: &Path) -> Result<Connection> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
    }
    let conn = Connection::open(path)
        .with_context(|| format!("Failed to open database {}", path.display()))?;
    conn.execute_batch("PRAGMA journal_mode=WAL;")?;
    Ok(conn)
}

pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        -- One row per fact; rows are appended, never updated.
        CREATE TABLE IF NOT EXISTS data (
            id           INTEGER PRIMARY KEY,
            date_scraped TEXT NOT NULL,
            date         TEXT NOT NULL,
            guest        TEXT NOT NULL,
            type         TEXT NOT NULL CHECK(type IN (
                             'occupation','alternate_name','record','record_keep',
                             'book','luxury','url')),
            title        TEXT,
            performer    TEXT,
            composer     TEXT,
            principal    TEXT CHECK(principal IN ('artist','composer')),
            mb_id        TEXT
        );
        CREATE INDEX IF NOT EXISTS idx_data_show ON data(date, guest);
        CREATE INDEX IF NOT EXISTS idx_data_type ON data(type);
        ",
    )?;
    Ok(())
}

// ── Skip-set ──

fn has_data_table(conn: &Connection) -> Result<bool> {
    let exists: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'data')",
        [],
        |r| r.get(0),
    )?;
    Ok(exists)
}

/// Shows that already have their `url` marker. Empty on a fresh database.
pub fn load_completed(conn: &Connection) -> Result<HashSet<Show>> {
    let mut done = HashSet::new();
    if !has_data_table(conn)? {
        return Ok(done);
    }

    let mut stmt = conn.prepare("SELECT date, guest FROM data WHERE type = 'url'")?;
    let rows = stmt
        .query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?)))?
        .collect::<Result<Vec<_>, _>>()?;

    for (date, guest) in rows {
        match NaiveDate::parse_from_str(&date, "%Y-%m-%d") {
            Ok(date) => {
                done.insert(Show { date, guest });
            }
            Err(e) => warn!("Ignoring url row for {} with bad date {:?}: {}", guest, date, e),
        }
    }
    Ok(done)
}

// ── Appending ──

/// Destination for extracted records.
pub trait RecordSink {
    fn append(&mut self, record: &Record) -> Result<()>;
}

impl RecordSink for Connection {
    fn append(&mut self, record: &Record) -> Result<()> {
        append_record(self, record)
    }
}

impl RecordSink for Vec<Record> {
    fn append(&mut self, record: &Record) -> Result<()> {
        self.push(record.clone());
        Ok(())
    }
}

/// Flat form of a [`Record`], as stored in the `data` table.
#[derive(Debug, Serialize)]
pub struct RecordRow {
    pub date_scraped: String,
    pub date: String,
    pub guest: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub composer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub principal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mb_id: Option<String>,
}

impl From<&Record> for RecordRow {
    fn from(r: &Record) -> Self {
        let mut row = RecordRow {
            date_scraped: r.date_scraped.to_rfc3339(),
            date: r.show.date.format("%Y-%m-%d").to_string(),
            guest: r.show.guest.clone(),
            kind: r.kind().as_str().to_string(),
            title: r.fact.title().map(str::to_string),
            performer: None,
            composer: None,
            principal: None,
            mb_id: None,
        };
        if let Fact::Music(track) = &r.fact {
            row.performer = track.performer.clone();
            row.composer = track.composer.clone();
            row.principal = Some(track.principal.as_str().to_string());
            row.mb_id = track.mb_id.clone();
        }
        row
    }
}

pub fn append_record(conn: &Connection, record: &Record) -> Result<()> {
    let r = RecordRow::from(record);
    conn.execute(
        "INSERT INTO data
         (date_scraped, date, guest, type, title, performer, composer, principal, mb_id)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        rusqlite::params![
            r.date_scraped, r.date, r.guest, r.kind, r.title,
            r.performer, r.composer, r.principal, r.mb_id,
        ],
    )?;
    Ok(())
}

// ── Export ──

fn map_row(row: &rusqlite::Row) -> rusqlite::Result<RecordRow> {
    Ok(RecordRow {
        date_scraped: row.get(0)?,
        date: row.get(1)?,
        guest: row.get(2)?,
        kind: row.get(3)?,
        title: row.get(4)?,
        performer: row.get(5)?,
        composer: row.get(6)?,
        principal: row.get(7)?,
        mb_id: row.get(8)?,
    })
}

pub fn fetch_records(conn: &Connection, guest: Option<&str>) -> Result<Vec<RecordRow>> {
    let sql = format!(
        "SELECT date_scraped, date, guest, type, title, performer, composer, principal, mb_id
         FROM data{}
         ORDER BY id",
        if guest.is_some() { " WHERE guest = ?1" } else { "" }
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = match guest {
        Some(g) => stmt.query_map([g], map_row)?.collect::<Result<Vec<_>, _>>()?,
        None => stmt.query_map([], map_row)?.collect::<Result<Vec<_>, _>>()?,
    };
    Ok(rows)
}

// ── Stats ──

pub struct Stats {
    pub rows: usize,
    pub shows: usize,
    pub completed: usize,
    pub by_type: Vec<(String, usize)>,
}

pub fn get_stats(conn: &Connection) -> Result<Stats> {
    let rows: usize = conn.query_row("SELECT COUNT(*) FROM data", [], |r| r.get(0))?;
    let shows: usize = conn.query_row(
        "SELECT COUNT(*) FROM (SELECT DISTINCT date, guest FROM data)",
        [],
        |r| r.get(0),
    )?;
    let completed: usize = conn.query_row(
        "SELECT COUNT(*) FROM (SELECT DISTINCT date, guest FROM data WHERE type = 'url')",
        [],
        |r| r.get(0),
    )?;
    let mut stmt = conn.prepare("SELECT type, COUNT(*) FROM data GROUP BY type ORDER BY type")?;
    let by_type = stmt
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Stats {
        rows,
        shows,
        completed,
        by_type,
    })
}
