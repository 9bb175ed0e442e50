//! Record stores for the time tracking data.
//!
//! Two representations of the same year/month/day hierarchy:
//!
//! - **Primary**: the authoritative indexed store all interactive reads
//!   and writes run against
//! - **Snapshot**: a portable SQLite mirror used for backup, export and
//!   import, kept consistent by the sync engine
//!
//! ## Usage
//!
//! ```rust
//! use timecal::db::primary::PrimaryStore;
//!
//! let store = PrimaryStore::new();
//! let year = store.create_year(2025)?;
//! assert_eq!(store.months_for_year(year.id).len(), 12);
//! # Ok::<(), timecal::db::primary::StoreError>(())
//! ```

/// The authoritative indexed record store.
///
/// Holds the live year/month/day tables with cascade deletion and the
/// hour-recomputation rules applied on every day mutation.
pub mod primary;

/// The portable SQLite snapshot mirror.
///
/// Full-replace writes, validated reads and byte-image serialization for
/// the backup and export paths.
pub mod snapshot;
