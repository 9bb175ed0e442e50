//! Configuration management for the timecal application.
//!
//! Settings live in a JSON file in the platform data directory and are
//! edited either by hand or through the interactive setup wizard. Every
//! section is optional; a missing file or section falls back to defaults
//! so the application runs without any setup.
//!
//! ## File Location
//!
//! - **Windows**: `%LOCALAPPDATA%\lacodda\timecal\config.json`
//! - **macOS**: `~/Library/Application Support/lacodda/timecal/config.json`
//! - **Linux**: `~/.local/share/lacodda/timecal/config.json`
//!
//! ## Usage
//!
//! ```rust,no_run
//! use timecal::libs::config::Config;
//!
//! let config = Config::read()?;
//! if let Some(export) = &config.export {
//!     println!("Exports go to {}", export.output_dir);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name inside the application data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Settings for backup export.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExportConfig {
    /// Directory that receives exported snapshot files when the export
    /// command is run without an explicit output path.
    pub output_dir: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        ExportConfig {
            output_dir: ".".to_string(),
        }
    }
}

/// Root configuration object.
///
/// Unconfigured sections are omitted from the JSON file entirely.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export: Option<ExportConfig>,
}

impl Config {
    /// Loads the configuration, returning defaults when no file exists.
    ///
    /// A file that exists but cannot be parsed is an error; silently
    /// replacing a broken config would drop user settings.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Runs the interactive setup wizard.
    ///
    /// Presents the configurable modules, prompts for each selected one
    /// with current values as defaults, and returns the updated
    /// configuration for saving.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = ["Export"];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules)
            .interact()?;

        for &selection in &selected {
            if modules[selection] == "Export" {
                let default = config.export.clone().unwrap_or_default();
                msg_print!(Message::ConfigModuleExport);
                config.export = Some(ExportConfig {
                    output_dir: Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptExportDir.to_string())
                        .default(default.output_dir)
                        .interact_text()?,
                });
            }
        }

        Ok(config)
    }
}
