use super::calendar::{Month, Year};
use super::day::Day;
use super::formatter::{format_hours, format_signed_hours, month_name, weekday_abbrev};
use super::stats::{weekly_hours, Stats, WeeklyHours};
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Year list with per-year statistics, in the order given (newest
    /// first from the store).
    pub fn years(years: &[(Year, Stats)]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["JAHR", "ARBEITSTAGE", "KRANK", "URLAUB", "SOLL", "IST", "DIFFERENZ"]);
        for (year, stats) in years {
            table.add_row(row![
                year.year,
                stats.arbeitstage,
                stats.krank,
                stats.urlaub,
                format_hours(stats.soll_stunden),
                format_hours(stats.ist_stunden),
                format_signed_hours(stats.differenz)
            ]);
        }
        table.printstd();

        Ok(())
    }

    /// Month overview of one year with per-month statistics.
    pub fn months(months: &[(Month, Stats)]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["MONAT", "SOLL", "IST", "DIFFERENZ", "K/U/FT"]);
        for (month, stats) in months {
            table.add_row(row![
                month_name(month.month),
                format!("{}h", format_hours(stats.soll_stunden)),
                format!("{}h", format_hours(stats.ist_stunden)),
                format!("{}h", format_signed_hours(stats.differenz)),
                format!("{}/{}/{}", stats.krank, stats.urlaub, stats.feiertag)
            ]);
        }
        table.printstd();

        Ok(())
    }

    /// Day table of one month with a summary row closing each ISO week.
    pub fn month_days(days: &[Day]) -> Result<()> {
        let weeks = weekly_hours(days);
        let week_total = |week: u32| {
            weeks
                .iter()
                .find(|w| w.iso_week == week)
                .map_or(0.0, |w| w.ist_stunden)
        };

        let mut table = Table::new();
        table.add_row(row![
            "TAG", "VON", "BIS", "VON 2", "BIS 2", "PAUSE", "GESAMT", "DIFFERENZ", "CODE", "KOMMENTAR", "KW"
        ]);

        let mut last_week: Option<u32> = None;
        for day in days {
            if let Some(week) = last_week {
                if week != day.iso_week {
                    table.add_row(Self::week_row(week, week_total(week)));
                }
            }

            let diff = day.ist_stunden - day.soll_stunden;
            table.add_row(row![
                format!("{} {:02}.", weekday_abbrev(day.day_of_week), day.day),
                day.von,
                day.bis,
                day.von2,
                day.bis2,
                day.pause,
                format!("{}h", format_hours(day.ist_stunden)),
                format_signed_hours(diff),
                day.code.as_str(),
                day.comment,
                day.iso_week
            ]);
            last_week = Some(day.iso_week);
        }
        if let Some(week) = last_week {
            table.add_row(Self::week_row(week, week_total(week)));
        }
        table.printstd();

        Ok(())
    }

    fn week_row(week: u32, total: f64) -> prettytable::Row {
        row![
            format!("Woche {}:", week),
            "",
            "",
            "",
            "",
            "",
            format!("{}h", format_hours(total)),
            "",
            "",
            "",
            week
        ]
    }

    /// Statistics block, one counter per row.
    pub fn stats(stats: &Stats) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["Arbeitstage", stats.arbeitstage]);
        table.add_row(row!["Krank (K)", stats.krank]);
        table.add_row(row!["Kind krank (KK)", stats.kindkrank]);
        table.add_row(row!["Urlaub (U)", stats.urlaub]);
        table.add_row(row!["Feiertag (FT)", stats.feiertag]);
        table.add_row(row!["Soll-Stunden", format_hours(stats.soll_stunden)]);
        table.add_row(row!["Ist-Stunden", format_hours(stats.ist_stunden)]);
        table.add_row(row!["Differenz", format_signed_hours(stats.differenz)]);
        table.add_row(row!["Ø pro Tag", format_hours(stats.durchschnitt)]);
        table.printstd();

        Ok(())
    }

    /// Ist-hour totals per ISO week.
    pub fn weekly(weeks: &[WeeklyHours]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["KW", "IST"]);
        for week in weeks {
            table.add_row(row![week.iso_week, format!("{}h", format_hours(week.ist_stunden))]);
        }
        table.printstd();

        Ok(())
    }
}
