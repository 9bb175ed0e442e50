//! The portable relational mirror of the primary store.
//!
//! The snapshot is a plain SQLite database with exactly three tables. Its
//! schema (camelCase column names included) is the interchange format for
//! backup files, so it must stay byte-compatible with artifacts produced
//! by earlier installations. The store lives fully in memory; the backup
//! layer persists its byte image via [`SnapshotStore::to_bytes`].
//!
//! All writes go through [`SnapshotStore::replace_all`], a full-replace of
//! every table in one transaction. Reads for a rebuild go through
//! [`SnapshotStore::read_all`], which validates each row before anything
//! reaches the primary store.

use crate::libs::calendar::{Month, Year};
use crate::libs::day::{Day, DayCode};
use crate::{libs::messages::Message, msg_error_anyhow};
use anyhow::Result;
use parking_lot::Mutex;
use rusqlite::{params, Connection, MAIN_DB};
use std::io::Write;
use std::sync::Arc;

/// Schema for the years table. `year` is unique across all rows.
const SCHEMA_YEARS: &str = "CREATE TABLE IF NOT EXISTS years (
    id INTEGER PRIMARY KEY,
    year INTEGER UNIQUE
)";

/// Schema for the months table, one row per calendar month of a year.
const SCHEMA_MONTHS: &str = "CREATE TABLE IF NOT EXISTS months (
    id INTEGER PRIMARY KEY,
    yearId INTEGER,
    year INTEGER,
    month INTEGER,
    FOREIGN KEY(yearId) REFERENCES years(id)
)";

/// Schema for the days table.
///
/// Column order matters: backup files written by older installations are
/// inserted positionally, so new columns may only ever be appended.
const SCHEMA_DAYS: &str = "CREATE TABLE IF NOT EXISTS days (
    id INTEGER PRIMARY KEY,
    monthId INTEGER,
    yearId INTEGER,
    year INTEGER,
    month INTEGER,
    day INTEGER,
    date TEXT,
    dayOfWeek INTEGER,
    isWeekend BOOLEAN,
    isoWeek INTEGER,
    von TEXT,
    bis TEXT,
    von2 TEXT,
    bis2 TEXT,
    pause TEXT,
    code TEXT,
    comment TEXT,
    sollStunden REAL,
    istStunden REAL,
    FOREIGN KEY(monthId) REFERENCES months(id)
)";

const INSERT_YEAR: &str = "INSERT INTO years (id, year) VALUES (?, ?)";
const INSERT_MONTH: &str = "INSERT INTO months (id, yearId, year, month) VALUES (?, ?, ?, ?)";
const INSERT_DAY: &str = "INSERT INTO days VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)";

/// Clearing happens child-to-parent so the foreign keys stay consistent.
const DELETE_ALL_DAYS: &str = "DELETE FROM days";
const DELETE_ALL_MONTHS: &str = "DELETE FROM months";
const DELETE_ALL_YEARS: &str = "DELETE FROM years";

const SELECT_YEARS: &str = "SELECT id, year FROM years";
const SELECT_MONTHS: &str = "SELECT id, yearId, year, month FROM months";
const SELECT_DAYS: &str = "SELECT id, monthId, yearId, year, month, day, date, dayOfWeek, isWeekend, isoWeek, \
    von, bis, von2, bis2, pause, code, comment, sollStunden, istStunden FROM days";

const COUNT_YEARS: &str = "SELECT COUNT(*) FROM years";

/// Checks that a restored file carries exactly the expected tables.
const SELECT_SCHEMA_TABLES: &str = "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name IN ('years', 'months', 'days')";

/// In-memory SQLite mirror of the primary store. Clones share the same
/// underlying connection.
#[derive(Clone)]
pub struct SnapshotStore {
    conn: Arc<Mutex<Connection>>,
}

impl SnapshotStore {
    /// Opens a fresh, empty snapshot with the schema created.
    pub fn new() -> Result<SnapshotStore> {
        let conn = Connection::open_in_memory()?;
        conn.execute(SCHEMA_YEARS, [])?;
        conn.execute(SCHEMA_MONTHS, [])?;
        conn.execute(SCHEMA_DAYS, [])?;

        Ok(SnapshotStore {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Loads a snapshot from a serialized byte image.
    ///
    /// The bytes must be a complete SQLite database carrying the three
    /// expected tables. Anything else, from truncated files to databases
    /// with a foreign schema, results in an error and no usable store.
    pub fn from_bytes(bytes: &[u8]) -> Result<SnapshotStore> {
        let mut scratch = tempfile::NamedTempFile::new()?;
        scratch.write_all(bytes)?;
        scratch.flush()?;

        let mut conn = Connection::open_in_memory()?;
        conn.restore(MAIN_DB, scratch.path(), None::<fn(rusqlite::backup::Progress)>)?;

        let store = SnapshotStore {
            conn: Arc::new(Mutex::new(conn)),
        };
        store.validate_schema()?;
        Ok(store)
    }

    /// Verifies the three tables exist before any query touches them.
    fn validate_schema(&self) -> Result<()> {
        let conn = self.conn.lock();
        let tables: i64 = conn.query_row(SELECT_SCHEMA_TABLES, [], |row| row.get(0))?;
        if tables != 3 {
            return Err(msg_error_anyhow!(Message::SnapshotSchemaMismatch));
        }
        Ok(())
    }

    /// Replaces the entire snapshot contents with the given records.
    ///
    /// Full-replace in one transaction: the three tables are cleared in
    /// child-to-parent order and the fresh rows bulk-inserted. No diffing,
    /// the last full state always wins.
    pub fn replace_all(&self, years: &[Year], months: &[Month], days: &[Day]) -> Result<()> {
        let mut conn = self.conn.lock();
        let tx = conn.transaction()?;

        tx.execute(DELETE_ALL_DAYS, [])?;
        tx.execute(DELETE_ALL_MONTHS, [])?;
        tx.execute(DELETE_ALL_YEARS, [])?;

        for year in years {
            tx.execute(INSERT_YEAR, params![year.id, year.year])?;
        }

        for month in months {
            tx.execute(INSERT_MONTH, params![month.id, month.year_id, month.year, month.month])?;
        }

        for day in days {
            tx.execute(
                INSERT_DAY,
                params![
                    day.id,
                    day.month_id,
                    day.year_id,
                    day.year,
                    day.month,
                    day.day,
                    day.date,
                    day.day_of_week,
                    day.is_weekend,
                    day.iso_week,
                    day.von,
                    day.bis,
                    day.von2,
                    day.bis2,
                    day.pause,
                    day.code.as_str(),
                    day.comment,
                    day.soll_stunden,
                    day.ist_stunden,
                ],
            )?;
        }

        tx.commit()?;
        Ok(())
    }

    /// Reads and validates every row of the snapshot.
    ///
    /// Rows that do not match the expected shape (unknown absence code,
    /// month outside 1-12, malformed date) abort the read. Callers rely on
    /// this: a rebuild only ever sees fully validated records.
    pub fn read_all(&self) -> Result<(Vec<Year>, Vec<Month>, Vec<Day>)> {
        let conn = self.conn.lock();

        let mut stmt = conn.prepare(SELECT_YEARS)?;
        let year_iter = stmt.query_map([], |row| {
            Ok(Year {
                id: row.get(0)?,
                year: row.get(1)?,
            })
        })?;
        let mut years = Vec::new();
        for year in year_iter {
            years.push(year?);
        }

        let mut stmt = conn.prepare(SELECT_MONTHS)?;
        let month_iter = stmt.query_map([], |row| {
            Ok(Month {
                id: row.get(0)?,
                year_id: row.get(1)?,
                year: row.get(2)?,
                month: row.get(3)?,
            })
        })?;
        let mut months = Vec::new();
        for month in month_iter {
            let month = month?;
            if !(1..=12).contains(&month.month) {
                return Err(msg_error_anyhow!(Message::SnapshotInvalidRow(format!(
                    "month record {} has month {}",
                    month.id, month.month
                ))));
            }
            months.push(month);
        }

        let mut stmt = conn.prepare(SELECT_DAYS)?;
        let day_iter = stmt.query_map([], |row| {
            // The code column is validated outside the closure where a
            // domain error can be raised.
            Ok((
                Day {
                    id: row.get(0)?,
                    month_id: row.get(1)?,
                    year_id: row.get(2)?,
                    year: row.get(3)?,
                    month: row.get(4)?,
                    day: row.get(5)?,
                    date: row.get(6)?,
                    day_of_week: row.get(7)?,
                    is_weekend: row.get(8)?,
                    iso_week: row.get(9)?,
                    von: row.get(10)?,
                    bis: row.get(11)?,
                    von2: row.get(12)?,
                    bis2: row.get(13)?,
                    pause: row.get(14)?,
                    code: DayCode::None,
                    comment: row.get(16)?,
                    soll_stunden: row.get(17)?,
                    ist_stunden: row.get(18)?,
                },
                row.get::<_, String>(15)?,
            ))
        })?;
        let mut days = Vec::new();
        for day in day_iter {
            let (mut day, code) = day?;
            match DayCode::parse(&code) {
                Some(parsed) => day.code = parsed,
                None => {
                    return Err(msg_error_anyhow!(Message::SnapshotInvalidRow(format!(
                        "day record {} has unknown code '{}'",
                        day.id, code
                    ))))
                }
            }
            days.push(day);
        }

        Ok((years, months, days))
    }

    /// Whether the snapshot holds at least one year row.
    ///
    /// Errors count as "no data" so a broken snapshot degrades to the
    /// mirror direction instead of failing startup.
    pub fn has_data(&self) -> bool {
        let conn = self.conn.lock();
        conn.query_row(COUNT_YEARS, [], |row| row.get::<_, i64>(0))
            .map(|count| count > 0)
            .unwrap_or(false)
    }

    /// Serializes the snapshot into a portable SQLite byte image.
    ///
    /// Runs the online backup into a scratch file and reads it back. The
    /// resulting bytes are a complete standalone database file.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let scratch = tempfile::NamedTempFile::new()?;
        {
            let conn = self.conn.lock();
            conn.backup(MAIN_DB, scratch.path(), None)?;
        }
        let bytes = std::fs::read(scratch.path())?;
        Ok(bytes)
    }
}
