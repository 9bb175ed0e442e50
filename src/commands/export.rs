//! Backup export command.
//!
//! Writes the current calendar as a standalone SQLite file named
//! `timecal_backup_<date>.sqlite`. The file is the same byte image that the
//! redundant backup slots hold, so it can be moved to another machine and
//! restored there with the import command.

use crate::{
    libs::{config::Config, messages::Message, tracker::Tracker},
    msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Command-line arguments for the export command.
#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Directory that receives the backup file
    ///
    /// Defaults to the export directory from the configuration, or the
    /// current directory when none is configured.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub async fn cmd(args: ExportArgs) -> Result<()> {
    let output_dir = match args.output {
        Some(dir) => dir,
        None => PathBuf::from(Config::read()?.export.unwrap_or_default().output_dir),
    };

    let tracker = Tracker::init().await?;
    let path = tracker.export(&output_dir).await?;

    msg_success!(Message::ExportCompleted(path.display().to_string()));
    Ok(())
}
