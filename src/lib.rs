//! # TimeCal - Working-Day Calendar and Hour Tracking
//!
//! A command-line utility for tracking personal work time in a year/month
//! calendar, computing worked hours and attendance statistics, and keeping
//! everything mirrored into redundant SQLite backups.
//!
//! ## Features
//!
//! - **Calendar Store**: Years with their 12 months and every calendar day,
//!   created and deleted as a unit
//! - **Hour Tracking**: Two work blocks and a break per day, with worked
//!   hours recomputed on every edit
//! - **Absence Codes**: Sick, child-sick, vacation and holiday markers that
//!   override the worked-time accounting
//! - **Statistics**: Workday and absence counters, target/actual hours and
//!   per-ISO-week totals for months and years
//! - **SQLite Mirror**: The full calendar synchronized into a portable
//!   SQLite snapshot after every change
//! - **Redundant Backups**: Snapshot bytes stored in two fallback slots,
//!   plus dated export files for moving data between machines
//!
//! ## Usage
//!
//! ```rust,no_run
//! use timecal::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
