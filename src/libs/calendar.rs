//! Year and month records of the calendar hierarchy.

use chrono::{Datelike, Months, NaiveDate};

#[derive(Debug, Clone, PartialEq)]
pub struct Year {
    pub id: i64,
    pub year: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Month {
    pub id: i64,
    pub year_id: i64,
    pub year: i32,
    pub month: u32,
}

/// Number of calendar days in a month (1-12), leap years included.
///
/// Returns 0 for a month/year combination chrono cannot represent.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    first_of_month(year, month)
        .and_then(|first| first.checked_add_months(Months::new(1)))
        .and_then(|next| next.pred_opt())
        .map_or(0, |last| last.day())
}

/// First calendar day of a month, if the combination is valid.
pub fn first_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
}
