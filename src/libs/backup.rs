//! Durable storage of the snapshot byte image across two redundant slots.
//!
//! The same bytes are written to two places in the application data
//! directory on every save:
//!
//! - a base64 text file (`timecal_sqlite_backup`), the primary slot
//! - a small SQLite database (`timecal_sqlite.db`) holding the raw bytes
//!   in a single-row key/value table, the secondary slot
//!
//! On load the text slot is tried first and the database slot is the
//! fallback. A slot that is missing is normal on first run; a slot that is
//! present but unreadable is reported and skipped. Export reuses the same
//! bytes to produce a dated standalone snapshot file.

use crate::libs::data_storage::DataStorage;
use crate::{libs::messages::Message, msg_bail_anyhow, msg_debug, msg_warning};
use anyhow::Result;
use base64::prelude::*;
use chrono::Local;
use rusqlite::{params, Connection};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the primary base64 text slot.
pub const FILE_SLOT_NAME: &str = "timecal_sqlite_backup";

/// File name of the secondary SQLite slot database.
pub const DB_SLOT_NAME: &str = "timecal_sqlite.db";

/// Key addressing the byte image inside the secondary slot table.
const SLOT_KEY: &str = "backup";

const SCHEMA_SLOT: &str = "CREATE TABLE IF NOT EXISTS sqlitedb (
    key TEXT PRIMARY KEY,
    data BLOB
)";

const UPSERT_SLOT: &str = "INSERT OR REPLACE INTO sqlitedb (key, data) VALUES (?1, ?2)";

const SELECT_SLOT: &str = "SELECT data FROM sqlitedb WHERE key = ?1";

/// Redundant two-slot persistence for snapshot bytes.
#[derive(Debug, Clone)]
pub struct BackupPersistence {
    file_slot: PathBuf,
    db_slot: PathBuf,
}

impl BackupPersistence {
    /// Resolves both slot paths inside the application data directory,
    /// creating the directory when missing.
    pub fn new() -> Result<BackupPersistence> {
        let storage = DataStorage::new();
        Ok(BackupPersistence {
            file_slot: storage.get_path(FILE_SLOT_NAME)?,
            db_slot: storage.get_path(DB_SLOT_NAME)?,
        })
    }

    /// Writes the byte image to both slots.
    ///
    /// A single failing slot is reported as a warning and tolerated; the
    /// save only errors when neither slot could be written.
    pub fn save(&self, bytes: &[u8]) -> Result<()> {
        let file_result = self.write_file_slot(bytes);
        if let Err(err) = &file_result {
            msg_warning!(Message::BackupFileSlotFailed(err.to_string()));
        }

        let db_result = self.write_db_slot(bytes);
        if let Err(err) = &db_result {
            msg_warning!(Message::BackupDbSlotFailed(err.to_string()));
        }

        if file_result.is_err() && db_result.is_err() {
            msg_bail_anyhow!(Message::BackupSaveFailed);
        }
        Ok(())
    }

    /// Loads the byte image, text slot first, database slot as fallback.
    ///
    /// Returns `None` when no slot holds usable bytes. The bytes are not
    /// validated here; the snapshot layer rejects anything that is not a
    /// proper database image.
    pub fn load(&self) -> Option<Vec<u8>> {
        match fs::read_to_string(&self.file_slot) {
            Ok(encoded) => match BASE64_STANDARD.decode(encoded.trim()) {
                Ok(bytes) => {
                    msg_debug!(format!("Backup restored from text slot ({} bytes)", bytes.len()));
                    return Some(bytes);
                }
                Err(err) => msg_warning!(Message::BackupFileSlotCorrupt(err.to_string())),
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => msg_warning!(Message::BackupFileSlotCorrupt(err.to_string())),
        }

        match self.read_db_slot() {
            Ok(bytes) => {
                msg_debug!(format!("Backup restored from database slot ({} bytes)", bytes.len()));
                Some(bytes)
            }
            Err(err) => {
                msg_debug!(format!("Database backup slot unavailable: {}", err));
                None
            }
        }
    }

    fn write_file_slot(&self, bytes: &[u8]) -> Result<()> {
        fs::write(&self.file_slot, BASE64_STANDARD.encode(bytes))?;
        Ok(())
    }

    fn write_db_slot(&self, bytes: &[u8]) -> Result<()> {
        let conn = Connection::open(&self.db_slot)?;
        conn.execute(SCHEMA_SLOT, [])?;
        conn.execute(UPSERT_SLOT, params![SLOT_KEY, bytes])?;
        Ok(())
    }

    fn read_db_slot(&self) -> Result<Vec<u8>> {
        let conn = Connection::open_with_flags(&self.db_slot, rusqlite::OpenFlags::SQLITE_OPEN_READ_ONLY)?;
        let bytes = conn.query_row(SELECT_SLOT, params![SLOT_KEY], |row| row.get(0))?;
        Ok(bytes)
    }
}

/// Writes a dated export artifact (`timecal_backup_<date>.sqlite`) into
/// `output_dir` and returns its full path.
///
/// Does not touch the backup slots; exporting works even when the data
/// directory is unavailable.
pub fn write_export_file(bytes: &[u8], output_dir: &Path) -> Result<PathBuf> {
    let file_name = format!("timecal_backup_{}.sqlite", Local::now().format("%Y-%m-%d"));
    let path = output_dir.join(file_name);
    fs::create_dir_all(output_dir)?;
    fs::write(&path, bytes)?;
    Ok(path)
}
