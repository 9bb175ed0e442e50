#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use timecal::db::primary::PrimaryStore;
    use timecal::db::snapshot::SnapshotStore;
    use timecal::libs::day::DayCode;
    use timecal::libs::sync::{SyncDirection, SyncEngine};

    /// Engine over the given stores with no backup slots attached.
    fn engine_with(primary: PrimaryStore, snapshot: SnapshotStore) -> SyncEngine {
        SyncEngine::new(primary, Some(snapshot), None)
    }

    #[tokio::test]
    async fn test_mirror_copies_primary_into_snapshot() {
        let primary = PrimaryStore::new();
        primary.create_year(2025).unwrap();
        let snapshot = SnapshotStore::new().unwrap();
        let engine = engine_with(primary.clone(), snapshot.clone());

        engine.mirror().await.unwrap();

        let (years, months, days) = snapshot.read_all().unwrap();
        let (expected_years, expected_months, expected_days) = primary.export_all();
        assert_eq!(years, expected_years);
        assert_eq!(months, expected_months);
        assert_eq!(days, expected_days);
    }

    #[tokio::test]
    async fn test_rebuild_restores_primary_with_ids() {
        let source = PrimaryStore::new();
        source.create_year(2025).unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
        let day = source.get_day_by_date(date).unwrap();
        source.set_day_code(day.id, DayCode::Urlaub).unwrap();

        let snapshot = SnapshotStore::new().unwrap();
        engine_with(source.clone(), snapshot.clone()).mirror().await.unwrap();

        let restored = PrimaryStore::new();
        engine_with(restored.clone(), snapshot).rebuild().await.unwrap();

        assert_eq!(restored.export_all(), source.export_all());
        let restored_day = restored.get_day(day.id).unwrap();
        assert_eq!(restored_day.code, DayCode::Urlaub);
        assert_eq!(restored_day.comment, "Urlaub");
    }

    #[tokio::test]
    async fn test_startup_mirrors_into_empty_snapshot() {
        let primary = PrimaryStore::new();
        primary.create_year(2025).unwrap();
        let snapshot = SnapshotStore::new().unwrap();
        let engine = engine_with(primary, snapshot.clone());

        let direction = engine.startup().await.unwrap();
        assert_eq!(direction, Some(SyncDirection::Mirror));
        assert!(snapshot.has_data());
    }

    #[tokio::test]
    async fn test_startup_rebuilds_from_populated_snapshot() {
        let source = PrimaryStore::new();
        source.create_year(2024).unwrap();
        let snapshot = SnapshotStore::new().unwrap();
        engine_with(source, snapshot.clone()).mirror().await.unwrap();

        // Local state in the fresh primary loses to the stored snapshot
        let primary = PrimaryStore::new();
        primary.create_year(2030).unwrap();
        let engine = engine_with(primary.clone(), snapshot);

        let direction = engine.startup().await.unwrap();
        assert_eq!(direction, Some(SyncDirection::Rebuild));
        assert!(primary.get_year_by_number(2030).is_none());
        assert!(primary.get_year_by_number(2024).is_some());
    }

    #[tokio::test]
    async fn test_spawned_mirror_is_observable() {
        let primary = PrimaryStore::new();
        primary.create_year(2025).unwrap();
        let snapshot = SnapshotStore::new().unwrap();
        let engine = engine_with(primary, snapshot.clone());

        let task = engine.spawn_mirror();
        task.wait().await.unwrap();
        assert!(snapshot.has_data());
    }

    #[tokio::test]
    async fn test_degraded_engine_skips_sync() {
        let primary = PrimaryStore::new();
        primary.create_year(2025).unwrap();
        let engine = SyncEngine::new(primary.clone(), None, None);

        assert!(!engine.snapshot_available());
        assert_eq!(engine.startup().await.unwrap(), None);
        engine.mirror().await.unwrap();
        engine.rebuild().await.unwrap();
        assert!(engine.snapshot_bytes().unwrap().is_none());

        // The interactive data is untouched
        assert!(primary.get_year_by_number(2025).is_some());
    }
}
