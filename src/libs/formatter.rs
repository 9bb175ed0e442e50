//! Hour and calendar-name formatting for console display.
//!
//! Hour values display with two decimals and a comma as the decimal
//! separator ("7,50"), the convention of the domain's German vocabulary.
//! Signed variants carry an explicit `+` so surpluses and deficits read
//! apart at a glance. Month names and weekday abbreviations are the German
//! ones used throughout the day tables.
//!
//! ## Examples
//!
//! ```rust
//! use timecal::libs::formatter::{format_hours, format_signed_hours, month_name};
//!
//! assert_eq!(format_hours(7.5), "7,50");
//! assert_eq!(format_signed_hours(2.0), "+2,00");
//! assert_eq!(month_name(3), "März");
//! ```

/// German month names indexed by month number minus one.
const MONTH_NAMES: [&str; 12] = [
    "Januar",
    "Februar",
    "März",
    "April",
    "Mai",
    "Juni",
    "Juli",
    "August",
    "September",
    "Oktober",
    "November",
    "Dezember",
];

/// Weekday abbreviations indexed by the 0 = Sunday convention.
const DAY_NAMES: [&str; 7] = ["So", "Mo", "Di", "Mi", "Do", "Fr", "Sa"];

/// Formats an hour value with two decimals and a comma separator.
///
/// Non-finite values render as "0,00" so a display never shows NaN.
pub fn format_hours(hours: f64) -> String {
    if !hours.is_finite() {
        return "0,00".to_string();
    }
    format!("{:.2}", hours).replace('.', ",")
}

/// Formats an hour difference with an explicit sign for surpluses.
///
/// Positive values gain a `+` prefix; zero and negative values render as
/// [`format_hours`] does.
pub fn format_signed_hours(hours: f64) -> String {
    if hours > 0.0 {
        format!("+{}", format_hours(hours))
    } else {
        format_hours(hours)
    }
}

/// German name of a calendar month (1-12). Out-of-range input yields an
/// empty string rather than a panic.
pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES.get(month.wrapping_sub(1) as usize).copied().unwrap_or("")
}

/// Two-letter German weekday abbreviation for a 0 = Sunday index.
pub fn weekday_abbrev(day_of_week: u32) -> &'static str {
    DAY_NAMES.get(day_of_week as usize).copied().unwrap_or("")
}
