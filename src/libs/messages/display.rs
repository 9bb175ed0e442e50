//! Display implementation for timecal application messages.
//!
//! Provides the `Display` trait implementation for the `Message` enum,
//! converting structured message data into human-readable text for terminal
//! output. All user-facing text lives here, in one place, so wording stays
//! consistent and parameters remain type-checked at compile time.
//!
//! Domain vocabulary (absence labels such as "Urlaub", field names such as
//! soll/ist) is kept in its original German form; the surrounding sentences
//! follow the application's English CLI voice.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === YEAR MESSAGES ===
            Message::YearCreated(year) => format!("Year {} created with 12 months and all calendar days.", year),
            Message::YearDeleted(year) => format!("Year {} and all its months and days have been deleted.", year),
            Message::YearAlreadyExists(year) => format!("Year {} already exists.", year),
            Message::YearNotFound(year) => format!("Year {} not found.", year),
            Message::NoYearsFound => "No years found. Create one with 'timecal year add <year>'.".to_string(),
            Message::YearsHeader => "Years:".to_string(),
            Message::ConfirmDeleteYear(year) => format!("Delete year {} with all its months and days?", year),

            // === DAY MESSAGES ===
            Message::DayUpdated(date) => format!("Day {} updated.", date),
            Message::DayCodeSet(date, label) => format!("Day {} marked as '{}'.", date, label),
            Message::DayCodeCleared(date) => format!("Absence code cleared for {}.", date),
            Message::DayNotFound(date) => format!("No day record found for {}. Create its year first.", date),
            Message::NoChangesProvided => "No changes provided.".to_string(),
            Message::InvalidDate(value) => format!("Invalid date '{}'. Expected YYYY-MM-DD.", value),
            Message::InvalidMonth(month) => format!("Invalid month {}. Expected a value between 1 and 12.", month),
            Message::InvalidDayCode(value) => format!("Invalid absence code '{}'. Expected one of: K, KK, U, FT.", value),

            // === VIEW HEADERS ===
            Message::MonthHeader(month_year) => format!("Working days for {}", month_year),
            Message::StatsHeader(scope) => format!("Statistics for {}", scope),
            Message::WeeklyHoursHeader => "Hours per ISO week:".to_string(),

            // === SYNC MESSAGES ===
            Message::SyncCompleted => "Calendar mirrored into the SQLite backup.".to_string(),
            Message::SyncFailed(error) => format!("Sync failed: {}", error),
            Message::MirrorFailed(error) => format!("Background SQLite mirror failed: {}", error),
            Message::SnapshotSchemaMismatch => "Snapshot file does not contain the years/months/days tables.".to_string(),
            Message::SnapshotInvalidRow(detail) => format!("Snapshot contains an invalid row: {}", detail),
            Message::SnapshotRestoreFailed(error) => format!("Failed to restore snapshot from backup, starting fresh: {}", error),
            Message::SnapshotUnavailable(error) => format!("Snapshot engine unavailable: {}", error),

            // === BACKUP MESSAGES ===
            Message::BackupFileSlotFailed(error) => format!("Failed to write base64 backup slot: {}", error),
            Message::BackupDbSlotFailed(error) => format!("Failed to write SQLite backup slot: {}", error),
            Message::BackupFileSlotCorrupt(error) => format!("Base64 backup slot is unreadable, trying SQLite slot: {}", error),
            Message::BackupSaveFailed => "Failed to write the backup to either redundant slot.".to_string(),
            Message::BackupUnavailable(error) => format!("Backup storage unavailable: {}", error),

            // === EXPORT/IMPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Backup exported to {}", path),
            Message::ImportCompleted => "Backup imported and calendar rebuilt.".to_string(),
            Message::ImportFailed(error) => format!("Import failed, existing data left unchanged: {}", error),
            Message::ImportFileNotFound(path) => format!("Import file not found: {}", path),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleExport => "Export settings".to_string(),

            // === PROMPTS ===
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptExportDir => "Enter the default export directory".to_string(),

            // === GENERAL MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
        };

        write!(f, "{}", text)
    }
}
