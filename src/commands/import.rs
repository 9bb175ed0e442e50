//! Backup import command.
//!
//! Replaces the whole calendar with the contents of an exported backup
//! file. The file is validated as a complete snapshot before anything is
//! touched; a malformed file leaves the current data exactly as it was.

use crate::{
    libs::{messages::Message, tracker::Tracker},
    msg_error, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Command-line arguments for the import command.
#[derive(Debug, Args)]
pub struct ImportArgs {
    /// Path to a timecal backup file
    file: PathBuf,
}

pub async fn cmd(args: ImportArgs) -> Result<()> {
    if !args.file.exists() {
        msg_error!(Message::ImportFileNotFound(args.file.display().to_string()));
        return Ok(());
    }
    let bytes = fs::read(&args.file)?;

    let tracker = Tracker::init().await?;
    match tracker.import(&bytes).await {
        Ok(()) => msg_success!(Message::ImportCompleted),
        Err(err) => msg_error!(Message::ImportFailed(err.to_string())),
    }
    Ok(())
}
