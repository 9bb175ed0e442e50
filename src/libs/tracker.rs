//! The central facade over stores, sync and backup.
//!
//! A [`Tracker`] is constructed explicitly per process via
//! [`Tracker::init`] and handed to whoever needs it; there is no shared
//! global handle. Initialization wires the whole persistence chain:
//!
//! 1. create the primary store,
//! 2. resolve the backup slots (missing storage degrades with a warning),
//! 3. restore the snapshot from stored bytes, or open a fresh one when
//!    nothing usable is stored,
//! 4. run the startup synchronization, rebuilding the primary store when
//!    the snapshot has data and mirroring into it otherwise.
//!
//! Interactive day edits return a [`SyncTask`] alongside the updated
//! record so callers can observe the background mirror without being
//! blocked by it. Year creation and deletion await their mirror; its
//! failures are logged, never surfaced, so the visible edit always wins.

use crate::db::primary::{PrimaryStore, StoreError};
use crate::db::snapshot::SnapshotStore;
use crate::libs::backup::{self, BackupPersistence};
use crate::libs::calendar::{Month, Year};
use crate::libs::day::{Day, DayCode, DayPatch};
use crate::libs::stats::{calculate_stats, Stats};
use crate::libs::sync::{SyncEngine, SyncTask};
use crate::{libs::messages::Message, msg_error_anyhow, msg_warning};
use anyhow::Result;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

pub struct Tracker {
    primary: PrimaryStore,
    engine: SyncEngine,
}

impl Tracker {
    /// Builds the full persistence chain and runs the startup sync.
    ///
    /// Never fails on a broken snapshot or backup; those degrade to
    /// primary-store-only operation with a warning.
    pub async fn init() -> Result<Tracker> {
        let primary = PrimaryStore::new();

        let backup = match BackupPersistence::new() {
            Ok(backup) => Some(backup),
            Err(err) => {
                msg_warning!(Message::BackupUnavailable(err.to_string()));
                None
            }
        };

        let snapshot = Self::open_snapshot(backup.as_ref());

        let engine = SyncEngine::new(primary.clone(), snapshot, backup);
        if let Err(err) = engine.startup().await {
            msg_warning!(Message::SyncFailed(err.to_string()));
        }

        Ok(Tracker { primary, engine })
    }

    /// Restores the snapshot from the backup slots, falling back to a
    /// fresh empty snapshot when the stored bytes are unusable.
    fn open_snapshot(backup: Option<&BackupPersistence>) -> Option<SnapshotStore> {
        if let Some(bytes) = backup.and_then(|slots| slots.load()) {
            match SnapshotStore::from_bytes(&bytes) {
                Ok(snapshot) => return Some(snapshot),
                Err(err) => msg_warning!(Message::SnapshotRestoreFailed(err.to_string())),
            }
        }

        match SnapshotStore::new() {
            Ok(snapshot) => Some(snapshot),
            Err(err) => {
                msg_warning!(Message::SnapshotUnavailable(err.to_string()));
                None
            }
        }
    }

    pub fn snapshot_available(&self) -> bool {
        self.engine.snapshot_available()
    }

    /// Looks up a year record by its year number.
    pub fn get_year(&self, year: i32) -> Option<Year> {
        self.primary.get_year_by_number(year)
    }

    /// Creates a year with its months and days, then mirrors.
    pub async fn create_year(&self, year: i32) -> Result<Year, StoreError> {
        let created = self.primary.create_year(year)?;
        if let Err(err) = self.engine.mirror().await {
            msg_warning!(Message::MirrorFailed(err.to_string()));
        }
        Ok(created)
    }

    /// Deletes a year by its year number, cascading months and days.
    /// Returns the removed record, or `None` when the year does not
    /// exist.
    pub async fn delete_year(&self, year: i32) -> Option<Year> {
        let year_record = self.primary.get_year_by_number(year)?;
        self.primary.delete_year(year_record.id);
        if let Err(err) = self.engine.mirror().await {
            msg_warning!(Message::MirrorFailed(err.to_string()));
        }
        Some(year_record)
    }

    /// All years, newest first, each with its aggregate statistics.
    pub fn years_with_stats(&self) -> Vec<(Year, Stats)> {
        self.primary
            .years()
            .into_iter()
            .map(|year| {
                let stats = calculate_stats(&self.primary.days_for_year(year.id));
                (year, stats)
            })
            .collect()
    }

    /// One year's months in calendar order, each with its statistics.
    pub fn months_with_stats(&self, year: i32) -> Option<(Year, Vec<(Month, Stats)>)> {
        let year_record = self.primary.get_year_by_number(year)?;
        let months = self
            .primary
            .months_for_year(year_record.id)
            .into_iter()
            .map(|month| {
                let stats = calculate_stats(&self.primary.days_for_month(month.id));
                (month, stats)
            })
            .collect();
        Some((year_record, months))
    }

    /// The month record and its days, sorted by day number.
    pub fn month_days(&self, year: i32, month: u32) -> Option<(Month, Vec<Day>)> {
        let year_record = self.primary.get_year_by_number(year)?;
        let month_record = self
            .primary
            .months_for_year(year_record.id)
            .into_iter()
            .find(|m| m.month == month)?;
        let days = self.primary.days_for_month(month_record.id);
        Some((month_record, days))
    }

    pub fn month_stats(&self, year: i32, month: u32) -> Option<Stats> {
        self.month_days(year, month).map(|(_, days)| calculate_stats(&days))
    }

    pub fn year_stats(&self, year: i32) -> Option<Stats> {
        let year_record = self.primary.get_year_by_number(year)?;
        Some(calculate_stats(&self.primary.days_for_year(year_record.id)))
    }

    pub fn day_by_date(&self, date: NaiveDate) -> Option<Day> {
        self.primary.get_day_by_date(date)
    }

    /// Applies a partial update and starts the background mirror.
    pub fn update_day(&self, day_id: i64, patch: &DayPatch) -> Result<(Day, SyncTask), StoreError> {
        let day = self.primary.update_day(day_id, patch)?;
        Ok((day, self.engine.spawn_mirror()))
    }

    /// Marks a day with an absence code and starts the background mirror.
    pub fn set_day_code(&self, day_id: i64, code: DayCode) -> Result<(Day, SyncTask), StoreError> {
        let day = self.primary.set_day_code(day_id, code)?;
        Ok((day, self.engine.spawn_mirror()))
    }

    /// Resets a day to its defaults and starts the background mirror.
    pub fn clear_day_code(&self, day_id: i64) -> Result<(Day, SyncTask), StoreError> {
        let day = self.primary.clear_day_code(day_id)?;
        Ok((day, self.engine.spawn_mirror()))
    }

    /// Explicitly requested mirror; errors surface to the caller.
    pub async fn sync_now(&self) -> Result<()> {
        self.engine.mirror().await
    }

    /// Mirrors the current state and writes the dated export artifact.
    pub async fn export(&self, output_dir: &Path) -> Result<PathBuf> {
        if let Err(err) = self.engine.mirror().await {
            msg_warning!(Message::MirrorFailed(err.to_string()));
        }
        let bytes = self
            .engine
            .snapshot_bytes()?
            .ok_or_else(|| msg_error_anyhow!(Message::SnapshotUnavailable("not initialized".to_string())))?;
        backup::write_export_file(&bytes, output_dir)
    }

    /// Replaces all data from an exported snapshot file's bytes.
    ///
    /// The incoming bytes are opened and fully validated as their own
    /// snapshot before anything is replaced; a malformed file errors out
    /// with the primary store and existing backups untouched. After the
    /// rebuild the new state is mirrored and saved to the backup slots.
    pub async fn import(&self, bytes: &[u8]) -> Result<()> {
        // Without the snapshot engine the imported data could not be
        // persisted past this process, so refuse up front.
        if !self.engine.snapshot_available() {
            return Err(msg_error_anyhow!(Message::SnapshotUnavailable(
                "not initialized".to_string()
            )));
        }
        let incoming = SnapshotStore::from_bytes(bytes)?;
        let (years, months, days) = incoming.read_all()?;
        self.primary.replace_all(years, months, days);

        if let Err(err) = self.engine.mirror().await {
            msg_warning!(Message::MirrorFailed(err.to_string()));
        }
        Ok(())
    }
}
