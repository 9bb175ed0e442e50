use crate::{
    libs::{formatter::month_name, messages::Message, stats::calculate_stats, tracker::Tracker, view::View},
    msg_error, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct MonthArgs {
    /// Year number, e.g. 2025
    year: i32,
    /// Month number from 1 to 12
    month: u32,
}

pub async fn cmd(args: MonthArgs) -> Result<()> {
    if !(1..=12).contains(&args.month) {
        msg_error!(Message::InvalidMonth(args.month));
        return Ok(());
    }

    let tracker = Tracker::init().await?;
    let Some((month, days)) = tracker.month_days(args.year, args.month) else {
        msg_error!(Message::YearNotFound(args.year));
        return Ok(());
    };

    msg_print!(Message::MonthHeader(format!("{} {}", month_name(month.month), month.year)), true);
    View::month_days(&days)?;

    let stats = calculate_stats(&days);
    View::stats(&stats)?;
    Ok(())
}
