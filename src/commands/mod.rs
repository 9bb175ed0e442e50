pub mod day;
pub mod export;
pub mod import;
pub mod init;
pub mod month;
pub mod stats;
pub mod sync;
pub mod year;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Manage the years of the working calendar")]
    Year(year::YearArgs),
    #[command(about = "Display the day table of a month")]
    Month(month::MonthArgs),
    #[command(about = "Edit a single day")]
    Day(day::DayArgs),
    #[command(about = "Display statistics for a year or a month")]
    Stats(stats::StatsArgs),
    #[command(about = "Mirror the calendar into the SQLite backup")]
    Sync,
    #[command(about = "Export the SQLite backup as a dated file")]
    Export(export::ExportArgs),
    #[command(about = "Import a SQLite backup file and rebuild the calendar")]
    Import(import::ImportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Year(args) => year::cmd(args).await,
            Commands::Month(args) => month::cmd(args).await,
            Commands::Day(args) => day::cmd(args).await,
            Commands::Stats(args) => stats::cmd(args).await,
            Commands::Sync => sync::cmd().await,
            Commands::Export(args) => export::cmd(args).await,
            Commands::Import(args) => import::cmd(args).await,
        }
    }
}
