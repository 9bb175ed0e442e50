#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use tempfile::TempDir;
    use test_context::{test_context, AsyncTestContext};
    use timecal::db::primary::StoreError;
    use timecal::libs::day::{DayCode, DayPatch};
    use timecal::libs::tracker::Tracker;

    /// Redirects the application data directory into a temporary home so
    /// every run starts from empty backup slots.
    struct TrackerTestContext {
        temp_dir: TempDir,
    }

    impl AsyncTestContext for TrackerTestContext {
        async fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            TrackerTestContext { temp_dir }
        }
    }

    #[test_context(TrackerTestContext)]
    #[tokio::test]
    async fn test_full_tracker_lifecycle(ctx: &mut TrackerTestContext) {
        // A fresh tracker starts with nothing
        let tracker = Tracker::init().await.unwrap();
        assert!(tracker.snapshot_available());
        assert!(tracker.years_with_stats().is_empty());

        // Create a year, duplicates are rejected
        tracker.create_year(2025).await.unwrap();
        assert!(matches!(tracker.create_year(2025).await, Err(StoreError::DuplicateYear(2025))));

        // Log a regular workday (2025-03-03 is a Monday)
        let workday = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
        let day = tracker.day_by_date(workday).unwrap();
        let patch = DayPatch {
            von: Some("08:00".to_string()),
            bis: Some("16:00".to_string()),
            ..DayPatch::default()
        };
        let (updated, sync) = tracker.update_day(day.id, &patch).unwrap();
        assert_eq!(updated.ist_stunden, 7.5);
        sync.wait().await.unwrap();

        // Mark the next day as a holiday
        let holiday = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap();
        let day = tracker.day_by_date(holiday).unwrap();
        let (marked, sync) = tracker.set_day_code(day.id, DayCode::Feiertag).unwrap();
        assert_eq!(marked.ist_stunden, 8.0);
        assert_eq!(marked.comment, "Feiertag");
        sync.wait().await.unwrap();

        let stats = tracker.month_stats(2025, 3).unwrap();
        assert_eq!(stats.arbeitstage, 21);
        assert_eq!(stats.feiertag, 1);
        assert_eq!(stats.ist_stunden, 15.5);

        // A second process finds everything again through the backup slots
        drop(tracker);
        let tracker = Tracker::init().await.unwrap();
        let day = tracker.day_by_date(workday).unwrap();
        assert_eq!(day.ist_stunden, 7.5);
        assert_eq!(day.von, "08:00");
        let stats = tracker.month_stats(2025, 3).unwrap();
        assert_eq!(stats.feiertag, 1);

        // Export the current state to a dated file
        let export_path = tracker.export(ctx.temp_dir.path()).await.unwrap();
        assert!(export_path.exists());
        assert!(export_path
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with("timecal_backup_"));

        // Wipe the year, then import the exported file to bring it back
        let deleted = tracker.delete_year(2025).await.unwrap();
        assert_eq!(deleted.year, 2025);
        assert!(tracker.years_with_stats().is_empty());
        assert!(tracker.day_by_date(workday).is_none());

        let bytes = std::fs::read(&export_path).unwrap();
        tracker.import(&bytes).await.unwrap();
        let day = tracker.day_by_date(workday).unwrap();
        assert_eq!(day.ist_stunden, 7.5);
        let stats = tracker.month_stats(2025, 3).unwrap();
        assert_eq!(stats.feiertag, 1);

        // A malformed file never replaces existing data
        assert!(tracker.import(b"not a backup file").await.is_err());
        assert!(tracker.day_by_date(workday).is_some());
    }
}
