#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use timecal::libs::config::{Config, ExportConfig};

    /// Test context to ensure a clean environment for each config test.
    /// It sets up a temporary directory to act as the user's home/appdata
    /// directory.
    struct ConfigTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_missing_file_reads_as_default_then_round_trips(_ctx: &mut ConfigTestContext) {
        // No config file yet: read() falls back to the default
        let config = Config::read().unwrap();
        assert!(config.export.is_none());

        let config = Config {
            export: Some(ExportConfig {
                output_dir: "/tmp/exports".to_string(),
            }),
        };
        config.save().unwrap();

        let read_back = Config::read().unwrap();
        assert_eq!(read_back.export.unwrap().output_dir, "/tmp/exports");
    }

    #[test]
    fn test_export_defaults_to_current_directory() {
        assert_eq!(ExportConfig::default().output_dir, ".");
    }
}
