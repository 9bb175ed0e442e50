use crate::{
    libs::{
        formatter::month_name,
        messages::Message,
        stats::{calculate_stats, weekly_hours},
        tracker::Tracker,
        view::View,
    },
    msg_error, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct StatsArgs {
    /// Year number, e.g. 2025
    year: i32,
    /// Optional month number from 1 to 12; omitted means the whole year
    month: Option<u32>,
}

pub async fn cmd(args: StatsArgs) -> Result<()> {
    let tracker = Tracker::init().await?;
    match args.month {
        Some(month) => handle_month(&tracker, args.year, month),
        None => handle_year(&tracker, args.year),
    }
}

fn handle_month(tracker: &Tracker, year: i32, month: u32) -> Result<()> {
    if !(1..=12).contains(&month) {
        msg_error!(Message::InvalidMonth(month));
        return Ok(());
    }
    let Some((month_record, days)) = tracker.month_days(year, month) else {
        msg_error!(Message::YearNotFound(year));
        return Ok(());
    };

    let scope = format!("{} {}", month_name(month_record.month), month_record.year);
    msg_print!(Message::StatsHeader(scope), true);
    View::stats(&calculate_stats(&days))?;

    msg_print!(Message::WeeklyHoursHeader, true);
    View::weekly(&weekly_hours(&days))?;
    Ok(())
}

fn handle_year(tracker: &Tracker, year: i32) -> Result<()> {
    let Some((year_record, months)) = tracker.months_with_stats(year) else {
        msg_error!(Message::YearNotFound(year));
        return Ok(());
    };

    msg_print!(Message::StatsHeader(year_record.year.to_string()), true);
    let stats = tracker.year_stats(year).unwrap_or_default();
    View::stats(&stats)?;
    View::months(&months)?;
    Ok(())
}
