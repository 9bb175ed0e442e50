//! Day records, absence codes, and the partial-update shape.
//!
//! The German field vocabulary (von/bis/pause, Soll/Ist) is kept as-is
//! because it is the domain's wire format in the snapshot schema.

use chrono::{Datelike, NaiveDate};
use std::fmt;

/// Absence marker on a day. [`DayCode::None`] means a regular working day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DayCode {
    #[default]
    None,
    Krank,
    KindKrank,
    Urlaub,
    Feiertag,
}

impl DayCode {
    /// All settable codes, in display order.
    pub const ALL: [DayCode; 4] = [DayCode::Krank, DayCode::KindKrank, DayCode::Urlaub, DayCode::Feiertag];

    /// Wire form as stored in the snapshot: `""`, `"K"`, `"KK"`, `"U"`, `"FT"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            DayCode::None => "",
            DayCode::Krank => "K",
            DayCode::KindKrank => "KK",
            DayCode::Urlaub => "U",
            DayCode::Feiertag => "FT",
        }
    }

    /// Default comment text applied when the code is set on a day.
    pub fn label(&self) -> &'static str {
        match self {
            DayCode::None => "",
            DayCode::Krank => "Krank",
            DayCode::KindKrank => "Kind krank",
            DayCode::Urlaub => "Urlaub",
            DayCode::Feiertag => "Feiertag",
        }
    }

    /// Parses the wire form. Unknown strings are rejected rather than
    /// mapped to [`DayCode::None`].
    pub fn parse(value: &str) -> Option<DayCode> {
        match value {
            "" => Some(DayCode::None),
            "K" => Some(DayCode::Krank),
            "KK" => Some(DayCode::KindKrank),
            "U" => Some(DayCode::Urlaub),
            "FT" => Some(DayCode::Feiertag),
            _ => None,
        }
    }

    pub fn is_set(&self) -> bool {
        !matches!(self, DayCode::None)
    }
}

impl fmt::Display for DayCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Day {
    pub id: i64,
    pub month_id: i64,
    pub year_id: i64,
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub date: NaiveDate,
    /// Weekday index with 0 = Sunday, 6 = Saturday.
    pub day_of_week: u32,
    pub is_weekend: bool,
    pub iso_week: u32,
    pub von: String,
    pub bis: String,
    pub von2: String,
    pub bis2: String,
    pub pause: String,
    pub code: DayCode,
    pub comment: String,
    pub soll_stunden: f64,
    pub ist_stunden: f64,
}

impl Day {
    /// Creates a day with weekend-aware defaults for its date. Weekdays
    /// start with a `00:30` break and 8 target hours, weekends with none.
    pub fn new(id: i64, month_id: i64, year_id: i64, date: NaiveDate) -> Self {
        let day_of_week = date.weekday().num_days_from_sunday();
        let is_weekend = day_of_week == 0 || day_of_week == 6;
        Day {
            id,
            month_id,
            year_id,
            year: date.year(),
            month: date.month(),
            day: date.day(),
            date,
            day_of_week,
            is_weekend,
            iso_week: date.iso_week().week(),
            von: String::new(),
            bis: String::new(),
            von2: String::new(),
            bis2: String::new(),
            pause: if is_weekend { String::new() } else { "00:30".to_string() },
            code: DayCode::None,
            comment: String::new(),
            soll_stunden: if is_weekend { 0.0 } else { 8.0 },
            ist_stunden: 0.0,
        }
    }

    /// Applies the absence override: fixed 08:00-16:00 block, zero break,
    /// 8/8 hours and the code's label as comment, regardless of weekend.
    pub fn apply_code(&mut self, code: DayCode) {
        self.code = code;
        self.comment = code.label().to_string();
        self.von = "08:00".to_string();
        self.bis = "16:00".to_string();
        self.von2 = String::new();
        self.bis2 = String::new();
        self.pause = "00:00".to_string();
        self.ist_stunden = 8.0;
        self.soll_stunden = 8.0;
    }

    /// Restores the weekend-aware creation defaults, dropping any code,
    /// comment and logged times. Exact inverse of [`Day::apply_code`].
    pub fn reset_to_defaults(&mut self) {
        self.code = DayCode::None;
        self.comment = String::new();
        self.von = String::new();
        self.bis = String::new();
        self.von2 = String::new();
        self.bis2 = String::new();
        self.pause = if self.is_weekend { String::new() } else { "00:30".to_string() };
        self.ist_stunden = 0.0;
        self.soll_stunden = if self.is_weekend { 0.0 } else { 8.0 };
    }
}

/// Field-level partial update for a day. `None` leaves a field untouched;
/// setting `code` to `Some(DayCode::None)` blanks the code.
#[derive(Debug, Clone, Default)]
pub struct DayPatch {
    pub von: Option<String>,
    pub bis: Option<String>,
    pub von2: Option<String>,
    pub bis2: Option<String>,
    pub pause: Option<String>,
    pub code: Option<DayCode>,
    pub comment: Option<String>,
}

impl DayPatch {
    /// True when the patch touches a field that feeds the worked-hours
    /// recalculation.
    pub fn touches_time_fields(&self) -> bool {
        self.von.is_some()
            || self.bis.is_some()
            || self.von2.is_some()
            || self.bis2.is_some()
            || self.pause.is_some()
            || self.code.is_some()
    }

    pub fn is_empty(&self) -> bool {
        !self.touches_time_fields() && self.comment.is_none()
    }

    /// Copies every set field onto the day.
    pub fn apply_to(&self, day: &mut Day) {
        if let Some(von) = &self.von {
            day.von = von.clone();
        }
        if let Some(bis) = &self.bis {
            day.bis = bis.clone();
        }
        if let Some(von2) = &self.von2 {
            day.von2 = von2.clone();
        }
        if let Some(bis2) = &self.bis2 {
            day.bis2 = bis2.clone();
        }
        if let Some(pause) = &self.pause {
            day.pause = pause.clone();
        }
        if let Some(code) = self.code {
            day.code = code;
        }
        if let Some(comment) = &self.comment {
            day.comment = comment.clone();
        }
    }
}
