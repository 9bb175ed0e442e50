use crate::{
    libs::{
        day::{Day, DayCode, DayPatch},
        messages::Message,
        tracker::Tracker,
    },
    msg_error, msg_success,
};
use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct DayArgs {
    #[command(subcommand)]
    command: DayCommand,
}

#[derive(Debug, Subcommand)]
enum DayCommand {
    /// Change time fields or the comment of a day
    Update {
        /// Calendar date in YYYY-MM-DD format
        date: String,
        /// Start of the first work block, "HH:MM" or "" to clear
        #[arg(long)]
        von: Option<String>,
        /// End of the first work block
        #[arg(long)]
        bis: Option<String>,
        /// Start of the second work block
        #[arg(long)]
        von2: Option<String>,
        /// End of the second work block
        #[arg(long)]
        bis2: Option<String>,
        /// Break duration, "HH:MM"
        #[arg(long)]
        pause: Option<String>,
        /// Free-text comment
        #[arg(long)]
        comment: Option<String>,
    },
    /// Mark a day with an absence code (K, KK, U or FT)
    Code {
        /// Calendar date in YYYY-MM-DD format
        date: String,
        /// Absence code to apply
        code: String,
    },
    /// Clear the absence code and logged times of a day
    Clear {
        /// Calendar date in YYYY-MM-DD format
        date: String,
    },
}

pub async fn cmd(args: DayArgs) -> Result<()> {
    let tracker = Tracker::init().await?;
    match args.command {
        DayCommand::Update {
            date,
            von,
            bis,
            von2,
            bis2,
            pause,
            comment,
        } => {
            let patch = DayPatch {
                von,
                bis,
                von2,
                bis2,
                pause,
                code: None,
                comment,
            };
            handle_update(&tracker, &date, patch).await
        }
        DayCommand::Code { date, code } => handle_code(&tracker, &date, &code).await,
        DayCommand::Clear { date } => handle_clear(&tracker, &date).await,
    }
}

async fn handle_update(tracker: &Tracker, date: &str, patch: DayPatch) -> Result<()> {
    if patch.is_empty() {
        msg_error!(Message::NoChangesProvided);
        return Ok(());
    }
    let Some(day) = find_day(tracker, date) else {
        return Ok(());
    };

    let (day, sync) = tracker.update_day(day.id, &patch)?;
    msg_success!(Message::DayUpdated(day.date.to_string()));

    // Let the background mirror land before the process exits; its
    // failures are logged by the task itself.
    let _ = sync.wait().await;
    Ok(())
}

async fn handle_code(tracker: &Tracker, date: &str, code: &str) -> Result<()> {
    let code = match DayCode::parse(code) {
        Some(code) if code.is_set() => code,
        _ => {
            msg_error!(Message::InvalidDayCode(code.to_string()));
            return Ok(());
        }
    };
    let Some(day) = find_day(tracker, date) else {
        return Ok(());
    };

    let (day, sync) = tracker.set_day_code(day.id, code)?;
    msg_success!(Message::DayCodeSet(day.date.to_string(), code.label().to_string()));

    let _ = sync.wait().await;
    Ok(())
}

async fn handle_clear(tracker: &Tracker, date: &str) -> Result<()> {
    let Some(day) = find_day(tracker, date) else {
        return Ok(());
    };

    let (day, sync) = tracker.clear_day_code(day.id)?;
    msg_success!(Message::DayCodeCleared(day.date.to_string()));

    let _ = sync.wait().await;
    Ok(())
}

/// Resolves a date argument to its day record, reporting parse failures
/// and missing records to the user.
fn find_day(tracker: &Tracker, date: &str) -> Option<Day> {
    let parsed = match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => parsed,
        Err(_) => {
            msg_error!(Message::InvalidDate(date.to_string()));
            return None;
        }
    };
    match tracker.day_by_date(parsed) {
        Some(day) => Some(day),
        None => {
            msg_error!(Message::DayNotFound(date.to_string()));
            None
        }
    }
}
