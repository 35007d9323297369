//! SQLite-backed problem log.
//!
//! The handle is passed explicitly to whatever needs it; there is no
//! process-global connection. Dates are stored as `dd/mm/YYYY` text to keep
//! the database trivially inspectable.

use crate::error::{DsaLogError, Result};
use crate::metadata::ProblemMetadata;
use chrono::NaiveDate;
use rusqlite::{Connection, Row, params};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Wire format for dates, both in the database and on the CLI.
pub const DATE_FMT: &str = "%d/%m/%Y";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl FromStr for Difficulty {
    type Err = DsaLogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(DsaLogError::Validation {
                message: format!("invalid difficulty '{}', expected Easy, Medium or Hard", other),
            }),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        };
        f.write_str(s)
    }
}

/// A problem to be logged, before it has a row id
#[derive(Debug, Clone)]
pub struct NewEntry {
    pub title: String,
    pub difficulty: Difficulty,
    pub platform: String,
    pub date: NaiveDate,
    pub tags: String,
    pub metadata: ProblemMetadata,
}

/// A logged problem as stored
#[derive(Debug, Clone)]
pub struct ProblemLog {
    pub id: i64,
    pub title: String,
    pub difficulty: Difficulty,
    pub platform: String,
    pub date: NaiveDate,
    pub tags: String,
    pub metadata: ProblemMetadata,
}

/// Explicitly passed storage handle owning the SQLite connection
pub struct LogStore {
    conn: Connection,
}

impl LogStore {
    /// Open (creating if needed) the log database at `path`.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| DsaLogError::Storage {
                message: format!("failed to create {}: {}", parent.display(), e),
            })?;
        }
        let conn = Connection::open(path)?;
        Self::init_schema(&conn)?;
        Ok(Self { conn })
    }

    /// In-memory store for tests.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::init_schema(&conn)?;
        Ok(Self { conn })
    }

    fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS logs (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT UNIQUE NOT NULL,
                difficulty TEXT NOT NULL,
                platform TEXT NOT NULL,
                date TEXT NOT NULL,
                tags TEXT NOT NULL DEFAULT '',
                ai_topic TEXT NOT NULL,
                ai_logic TEXT NOT NULL,
                ai_time_complex TEXT NOT NULL,
                ai_space_complex TEXT NOT NULL,
                company_tags TEXT NOT NULL
            );",
        )
    }

    /// Case-insensitive duplicate check on the title.
    pub fn contains_title(&self, title: &str) -> Result<bool> {
        let mut stmt = self
            .conn
            .prepare("SELECT 1 FROM logs WHERE LOWER(title) = LOWER(?1)")?;
        Ok(stmt.exists(params![title])?)
    }

    pub fn insert(&self, entry: &NewEntry) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO logs (title, difficulty, platform, date, tags,
                ai_topic, ai_logic, ai_time_complex, ai_space_complex, company_tags)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            params![
                entry.title,
                entry.difficulty.to_string(),
                entry.platform,
                entry.date.format(DATE_FMT).to_string(),
                entry.tags,
                entry.metadata.topic,
                entry.metadata.logic,
                entry.metadata.time_complexity,
                entry.metadata.space_complexity,
                entry.metadata.company_tags,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn all(&self) -> Result<Vec<ProblemLog>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, title, difficulty, platform, date, tags,
                    ai_topic, ai_logic, ai_time_complex, ai_space_complex, company_tags
             FROM logs ORDER BY id",
        )?;
        let rows = stmt.query_map([], row_to_log)?;
        let mut entries = Vec::new();
        for row in rows {
            entries.push(row?);
        }
        Ok(entries)
    }

    pub fn get(&self, id: i64) -> Result<Option<ProblemLog>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, title, difficulty, platform, date, tags,
                    ai_topic, ai_logic, ai_time_complex, ai_space_complex, company_tags
             FROM logs WHERE id = ?1",
        )?;
        let mut rows = stmt.query_map(params![id], row_to_log)?;
        match rows.next() {
            Some(row) => Ok(Some(row?)),
            None => Ok(None),
        }
    }

    /// Update the user-entered fields of an entry. Enrichment metadata is
    /// left untouched.
    pub fn update(&self, log: &ProblemLog) -> Result<()> {
        let changed = self.conn.execute(
            "UPDATE logs SET title = ?1, difficulty = ?2, platform = ?3, date = ?4, tags = ?5
             WHERE id = ?6",
            params![
                log.title,
                log.difficulty.to_string(),
                log.platform,
                log.date.format(DATE_FMT).to_string(),
                log.tags,
                log.id,
            ],
        )?;
        if changed == 0 {
            return Err(DsaLogError::Storage {
                message: format!("no entry with id {}", log.id),
            });
        }
        Ok(())
    }

    /// Delete an entry; returns whether a row was removed.
    pub fn delete(&self, id: i64) -> Result<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM logs WHERE id = ?1", params![id])?;
        Ok(changed > 0)
    }

    /// Keyword search: case-insensitive match against title, difficulty,
    /// platform, topic or logic, or membership in the comma-separated tags
    /// or company tags.
    pub fn search(&self, keyword: &str) -> Result<Vec<ProblemLog>> {
        let keyword = keyword.trim().to_lowercase();
        let matches = |entry: &ProblemLog| -> bool {
            let in_list = |list: &str| {
                list.split(',')
                    .map(|t| t.trim().to_lowercase())
                    .any(|t| t == keyword)
            };
            entry.title.to_lowercase() == keyword
                || entry.difficulty.to_string().to_lowercase() == keyword
                || entry.platform.to_lowercase() == keyword
                || entry.metadata.topic.to_lowercase() == keyword
                || entry.metadata.logic.to_lowercase() == keyword
                || in_list(&entry.tags)
                || in_list(&entry.metadata.company_tags)
        };
        Ok(self.all()?.into_iter().filter(|e| matches(e)).collect())
    }
}

fn row_to_log(row: &Row<'_>) -> rusqlite::Result<ProblemLog> {
    let difficulty: String = row.get(2)?;
    let date: String = row.get(4)?;
    Ok(ProblemLog {
        id: row.get(0)?,
        title: row.get(1)?,
        difficulty: Difficulty::from_str(&difficulty).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(2, rusqlite::types::Type::Text, Box::new(e))
        })?,
        platform: row.get(3)?,
        date: NaiveDate::parse_from_str(&date, DATE_FMT).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(4, rusqlite::types::Type::Text, Box::new(e))
        })?,
        tags: row.get(5)?,
        metadata: ProblemMetadata {
            topic: row.get(6)?,
            logic: row.get(7)?,
            time_complexity: row.get(8)?,
            space_complexity: row.get(9)?,
            company_tags: row.get(10)?,
        },
    })
}
