#[derive(Debug, Clone)]
pub enum Message {
    // === YEAR MESSAGES ===
    YearCreated(i32),
    YearDeleted(i32),
    YearAlreadyExists(i32),
    YearNotFound(i32),
    NoYearsFound,
    YearsHeader,
    ConfirmDeleteYear(i32),

    // === DAY MESSAGES ===
    DayUpdated(String),           // date
    DayCodeSet(String, String),   // date, label
    DayCodeCleared(String),       // date
    DayNotFound(String),          // date
    NoChangesProvided,
    InvalidDate(String),
    InvalidMonth(u32),
    InvalidDayCode(String),

    // === VIEW HEADERS ===
    MonthHeader(String),     // "March 2025"
    StatsHeader(String),     // scope description
    WeeklyHoursHeader,

    // === SYNC MESSAGES ===
    SyncCompleted,
    SyncFailed(String),            // error
    MirrorFailed(String),          // error
    SnapshotSchemaMismatch,
    SnapshotInvalidRow(String),    // detail
    SnapshotRestoreFailed(String), // error
    SnapshotUnavailable(String),   // error

    // === BACKUP MESSAGES ===
    BackupFileSlotFailed(String),  // error
    BackupDbSlotFailed(String),    // error
    BackupFileSlotCorrupt(String), // error
    BackupSaveFailed,
    BackupUnavailable(String),     // error

    // === EXPORT/IMPORT MESSAGES ===
    ExportCompleted(String),    // path
    ImportCompleted,
    ImportFailed(String),       // error
    ImportFileNotFound(String), // path

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleExport,

    // === PROMPTS ===
    PromptSelectModules,
    PromptExportDir,

    // === GENERAL MESSAGES ===
    OperationCancelled,
}
