//! The authoritative record store for years, months and days.
//!
//! All interactive reads and writes go through this store. It is an indexed
//! in-memory structure; durability is provided by the snapshot mirror and
//! the backup slots, which also rebuild it wholesale on startup.
//!
//! ## Structure
//!
//! Three id-keyed tables with auto-incrementing ids, denormalized with
//! redundant `year_id`/`year`/`month` copies on child records so range
//! lookups never need joins. A year is created together with its 12 months
//! and every calendar day as one unit, and deleted in child-to-parent
//! order so no record is ever orphaned.
//!
//! ## Thread Safety
//!
//! The tables sit behind an `Arc<Mutex<>>` so clones of the store share
//! state between the command layer and the background sync task. Every
//! operation takes the lock once and works on a consistent view.

use crate::libs::calendar::{first_of_month, Month, Year};
use crate::libs::day::{Day, DayCode, DayPatch};
use crate::libs::hours::calculate_work_hours;
use chrono::{Datelike, NaiveDate};
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;

/// Errors surfaced to callers of the primary store.
///
/// Only validation failures are represented here. Sync and backup problems
/// never travel through this type; they are logged by the sync layer.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("year {0} already exists")]
    DuplicateYear(i32),
    #[error("year {0} is outside the supported calendar range")]
    YearOutOfRange(i32),
    #[error("no day record with id {0}")]
    DayNotFound(i64),
}

/// The three record tables plus their id counters.
///
/// `BTreeMap` keeps iteration in id order, which is insertion order and
/// therefore chronological within a year.
#[derive(Debug)]
struct Tables {
    years: BTreeMap<i64, Year>,
    months: BTreeMap<i64, Month>,
    days: BTreeMap<i64, Day>,
    next_year_id: i64,
    next_month_id: i64,
    next_day_id: i64,
}

impl Default for Tables {
    fn default() -> Self {
        Tables {
            years: BTreeMap::new(),
            months: BTreeMap::new(),
            days: BTreeMap::new(),
            next_year_id: 1,
            next_month_id: 1,
            next_day_id: 1,
        }
    }
}

/// Shared handle to the authoritative store.
///
/// Cloning is cheap and every clone sees the same tables. The store is
/// constructed explicitly and handed to the components that need it; there
/// is no process-wide instance.
#[derive(Debug, Clone, Default)]
pub struct PrimaryStore {
    tables: Arc<Mutex<Tables>>,
}

impl PrimaryStore {
    /// Creates an empty store. Rows arrive either through
    /// [`PrimaryStore::create_year`] or a rebuild from a snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a year with its 12 months and every calendar day, as one
    /// unit.
    ///
    /// Fails with [`StoreError::DuplicateYear`] when the year number is
    /// already present. The full record set is built before the tables are
    /// touched, so a failure leaves nothing partial behind.
    pub fn create_year(&self, year: i32) -> Result<Year, StoreError> {
        let mut tables = self.tables.lock();

        if tables.years.values().any(|y| y.year == year) {
            return Err(StoreError::DuplicateYear(year));
        }

        let year_id = tables.next_year_id;
        let year_record = Year { id: year_id, year };
        let mut months = Vec::with_capacity(12);
        let mut days = Vec::new();
        let mut month_id = tables.next_month_id;
        let mut day_id = tables.next_day_id;

        for month_no in 1..=12 {
            let first = first_of_month(year, month_no).ok_or(StoreError::YearOutOfRange(year))?;
            months.push(Month {
                id: month_id,
                year_id,
                year,
                month: month_no,
            });
            for date in first.iter_days().take_while(|d| d.month() == month_no) {
                days.push(Day::new(day_id, month_id, year_id, date));
                day_id += 1;
            }
            month_id += 1;
        }

        tables.years.insert(year_id, year_record.clone());
        for month in months {
            tables.months.insert(month.id, month);
        }
        for day in days {
            tables.days.insert(day.id, day);
        }
        tables.next_year_id = year_id + 1;
        tables.next_month_id = month_id;
        tables.next_day_id = day_id;

        Ok(year_record)
    }

    /// Removes a year and everything under it, days first, then months,
    /// then the year record itself. Unknown ids are a no-op.
    pub fn delete_year(&self, year_id: i64) {
        let mut tables = self.tables.lock();
        tables.days.retain(|_, d| d.year_id != year_id);
        tables.months.retain(|_, m| m.year_id != year_id);
        tables.years.remove(&year_id);
    }

    pub fn get_year(&self, year_id: i64) -> Option<Year> {
        self.tables.lock().years.get(&year_id).cloned()
    }

    pub fn get_year_by_number(&self, year: i32) -> Option<Year> {
        self.tables.lock().years.values().find(|y| y.year == year).cloned()
    }

    /// All years, newest first.
    pub fn years(&self) -> Vec<Year> {
        let tables = self.tables.lock();
        let mut years: Vec<Year> = tables.years.values().cloned().collect();
        years.sort_by_key(|y| std::cmp::Reverse(y.year));
        years
    }

    pub fn get_month(&self, month_id: i64) -> Option<Month> {
        self.tables.lock().months.get(&month_id).cloned()
    }

    /// Months of one year in calendar order.
    pub fn months_for_year(&self, year_id: i64) -> Vec<Month> {
        let tables = self.tables.lock();
        let mut months: Vec<Month> = tables.months.values().filter(|m| m.year_id == year_id).cloned().collect();
        months.sort_by_key(|m| m.month);
        months
    }

    pub fn get_day(&self, day_id: i64) -> Option<Day> {
        self.tables.lock().days.get(&day_id).cloned()
    }

    pub fn get_day_by_date(&self, date: NaiveDate) -> Option<Day> {
        self.tables.lock().days.values().find(|d| d.date == date).cloned()
    }

    /// Days of one month sorted by day number.
    pub fn days_for_month(&self, month_id: i64) -> Vec<Day> {
        let tables = self.tables.lock();
        let mut days: Vec<Day> = tables.days.values().filter(|d| d.month_id == month_id).cloned().collect();
        days.sort_by_key(|d| d.day);
        days
    }

    /// Every day of one year in date order.
    pub fn days_for_year(&self, year_id: i64) -> Vec<Day> {
        let tables = self.tables.lock();
        let mut days: Vec<Day> = tables.days.values().filter(|d| d.year_id == year_id).cloned().collect();
        days.sort_by_key(|d| d.date);
        days
    }

    /// Applies a partial update to a day with last-write-wins semantics.
    ///
    /// When the patch touches a time field, the break or the code, the
    /// hour fields are recomputed on the merged record before it is
    /// stored: a set absence code forces `ist = soll = 8`, otherwise
    /// `ist_stunden` is recalculated from the time fields and
    /// `soll_stunden` stays as it was. A comment-only patch passes
    /// through without recomputation.
    pub fn update_day(&self, day_id: i64, patch: &DayPatch) -> Result<Day, StoreError> {
        let mut tables = self.tables.lock();
        let day = tables.days.get_mut(&day_id).ok_or(StoreError::DayNotFound(day_id))?;

        let recompute = patch.touches_time_fields();
        patch.apply_to(day);

        if recompute {
            if day.code.is_set() {
                // An absence code accounts for a full 8-hour day
                day.ist_stunden = 8.0;
                day.soll_stunden = 8.0;
            } else {
                day.ist_stunden = calculate_work_hours(&day.von, &day.bis, &day.von2, &day.bis2, &day.pause);
            }
        }

        Ok(day.clone())
    }

    /// Marks a day with an absence code, resetting the override fields
    /// atomically. See [`Day::apply_code`] for the exact field set.
    pub fn set_day_code(&self, day_id: i64, code: DayCode) -> Result<Day, StoreError> {
        let mut tables = self.tables.lock();
        let day = tables.days.get_mut(&day_id).ok_or(StoreError::DayNotFound(day_id))?;
        day.apply_code(code);
        Ok(day.clone())
    }

    /// Clears a day back to its weekend-aware creation defaults.
    pub fn clear_day_code(&self, day_id: i64) -> Result<Day, StoreError> {
        let mut tables = self.tables.lock();
        let day = tables.days.get_mut(&day_id).ok_or(StoreError::DayNotFound(day_id))?;
        day.reset_to_defaults();
        Ok(day.clone())
    }

    /// Point-in-time copy of all three tables in id order, taken under a
    /// single lock acquisition. This is what the mirror writes out.
    pub fn export_all(&self) -> (Vec<Year>, Vec<Month>, Vec<Day>) {
        let tables = self.tables.lock();
        (
            tables.years.values().cloned().collect(),
            tables.months.values().cloned().collect(),
            tables.days.values().cloned().collect(),
        )
    }

    /// Replaces the full contents of the store, preserving the incoming
    /// ids. Used by the rebuild direction of the sync engine. The id
    /// counters continue after the highest id seen so later inserts never
    /// collide.
    pub fn replace_all(&self, years: Vec<Year>, months: Vec<Month>, days: Vec<Day>) {
        let mut tables = self.tables.lock();
        tables.years.clear();
        tables.months.clear();
        tables.days.clear();
        for year in years {
            tables.years.insert(year.id, year);
        }
        for month in months {
            tables.months.insert(month.id, month);
        }
        for day in days {
            tables.days.insert(day.id, day);
        }
        tables.next_year_id = tables.years.keys().next_back().map_or(1, |id| id + 1);
        tables.next_month_id = tables.months.keys().next_back().map_or(1, |id| id + 1);
        tables.next_day_id = tables.days.keys().next_back().map_or(1, |id| id + 1);
    }
}
