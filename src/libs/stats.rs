//! Aggregate statistics over day collections.

use crate::libs::day::{Day, DayCode};
use std::collections::BTreeMap;

/// Summary counters derived from a set of days. Never persisted, always
/// recomputed as a full pass after a mutation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stats {
    pub arbeitstage: u32,
    pub krank: u32,
    pub kindkrank: u32,
    pub urlaub: u32,
    pub feiertag: u32,
    pub soll_stunden: f64,
    pub ist_stunden: f64,
    pub differenz: f64,
    pub durchschnitt: f64,
}

/// Computes summary counters in a single order-independent pass.
///
/// Weekend days never count toward `arbeitstage`, even when they carry a
/// code; the code counters increment for every day regardless of weekend.
/// `durchschnitt` is ist hours per workday, 0 when there are no workdays.
pub fn calculate_stats(days: &[Day]) -> Stats {
    let mut stats = Stats::default();

    for day in days {
        if !day.is_weekend {
            stats.arbeitstage += 1;
        }

        match day.code {
            DayCode::Krank => stats.krank += 1,
            DayCode::KindKrank => stats.kindkrank += 1,
            DayCode::Urlaub => stats.urlaub += 1,
            DayCode::Feiertag => stats.feiertag += 1,
            DayCode::None => {}
        }

        stats.soll_stunden += day.soll_stunden;
        stats.ist_stunden += day.ist_stunden;
    }

    stats.differenz = stats.ist_stunden - stats.soll_stunden;
    stats.durchschnitt = if stats.arbeitstage > 0 {
        stats.ist_stunden / stats.arbeitstage as f64
    } else {
        0.0
    };

    stats
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyHours {
    pub iso_week: u32,
    pub ist_stunden: f64,
}

/// Ist-hour totals grouped by ISO week, ordered by week number.
pub fn weekly_hours(days: &[Day]) -> Vec<WeeklyHours> {
    let mut weeks: BTreeMap<u32, f64> = BTreeMap::new();
    for day in days {
        *weeks.entry(day.iso_week).or_insert(0.0) += day.ist_stunden;
    }
    weeks
        .into_iter()
        .map(|(iso_week, ist_stunden)| WeeklyHours { iso_week, ist_stunden })
        .collect()
}
