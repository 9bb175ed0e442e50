use crate::{
    db::primary::StoreError,
    libs::{messages::Message, tracker::Tracker, view::View},
    msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct YearArgs {
    #[command(subcommand)]
    command: YearCommand,
}

#[derive(Debug, Subcommand)]
enum YearCommand {
    /// Create a year with its 12 months and all calendar days
    Add {
        /// Year number, e.g. 2025
        year: i32,
    },
    /// Delete a year together with all its months and days
    Del {
        /// Year number to delete
        year: i32,
    },
    /// List all years with their statistics
    List,
}

pub async fn cmd(args: YearArgs) -> Result<()> {
    let tracker = Tracker::init().await?;
    match args.command {
        YearCommand::Add { year } => handle_add(&tracker, year).await,
        YearCommand::Del { year } => handle_del(&tracker, year).await,
        YearCommand::List => handle_list(&tracker),
    }
}

async fn handle_add(tracker: &Tracker, year: i32) -> Result<()> {
    match tracker.create_year(year).await {
        Ok(created) => {
            msg_success!(Message::YearCreated(created.year));
            Ok(())
        }
        Err(StoreError::DuplicateYear(year)) => {
            msg_error!(Message::YearAlreadyExists(year));
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

async fn handle_del(tracker: &Tracker, year: i32) -> Result<()> {
    if tracker.get_year(year).is_none() {
        msg_error!(Message::YearNotFound(year));
        return Ok(());
    }

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmDeleteYear(year).to_string())
        .default(false)
        .interact()?;

    if !confirmed {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    if let Some(deleted) = tracker.delete_year(year).await {
        msg_success!(Message::YearDeleted(deleted.year));
    }
    Ok(())
}

fn handle_list(tracker: &Tracker) -> Result<()> {
    let years = tracker.years_with_stats();

    if years.is_empty() {
        msg_info!(Message::NoYearsFound);
        return Ok(());
    }

    msg_print!(Message::YearsHeader, true);
    View::years(&years)?;
    Ok(())
}
