//! Core library modules for the timecal application.
//!
//! Serves as the main entry point for all timecal library components,
//! providing a centralized access point to the application's core
//! functionality.
//!
//! ## Features
//!
//! - **Core Infrastructure**: Configuration, data storage, messaging
//! - **Calendar Model**: Year, month and day records with their creation
//!   defaults and absence-code rules
//! - **Derived Metrics**: Worked-hours calculation and aggregate statistics
//! - **Synchronization**: Mirror/rebuild between the primary store and its
//!   SQLite snapshot, plus redundant backup slots
//! - **User Interface**: Console tables and hour formatting
//!
//! ## Usage
//!
//! ```rust,no_run
//! use timecal::libs::tracker::Tracker;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let tracker = Tracker::init().await?;
//! let year = tracker.create_year(2025).await?;
//! # Ok(())
//! # }
//! ```

pub mod backup;
pub mod calendar;
pub mod config;
pub mod data_storage;
pub mod day;
pub mod formatter;
pub mod hours;
pub mod messages;
pub mod stats;
pub mod sync;
pub mod tracker;
pub mod view;
