#[cfg(test)]
mod tests {
    use chrono::{Datelike, NaiveDate};
    use timecal::db::primary::{PrimaryStore, StoreError};
    use timecal::libs::calendar::days_in_month;
    use timecal::libs::day::{DayCode, DayPatch};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_create_year_builds_full_calendar() {
        let store = PrimaryStore::new();
        let year = store.create_year(2025).unwrap();
        assert_eq!(year.year, 2025);

        let months = store.months_for_year(year.id);
        assert_eq!(months.len(), 12);
        for month in &months {
            let days = store.days_for_month(month.id);
            assert_eq!(days.len() as u32, days_in_month(2025, month.month));
            assert_eq!(days.first().unwrap().day, 1);
        }
        assert_eq!(store.days_for_year(year.id).len(), 365);
    }

    #[test]
    fn test_leap_year_february() {
        let store = PrimaryStore::new();
        let year = store.create_year(2024).unwrap();

        let months = store.months_for_year(year.id);
        let february = months.iter().find(|m| m.month == 2).unwrap();
        assert_eq!(store.days_for_month(february.id).len(), 29);
        assert_eq!(store.days_for_year(year.id).len(), 366);
    }

    #[test]
    fn test_duplicate_year_is_rejected() {
        let store = PrimaryStore::new();
        store.create_year(2025).unwrap();

        let result = store.create_year(2025);
        assert!(matches!(result, Err(StoreError::DuplicateYear(2025))));

        // Nothing partial was left behind
        assert_eq!(store.years().len(), 1);
    }

    #[test]
    fn test_weekend_aware_defaults() {
        let store = PrimaryStore::new();
        store.create_year(2025).unwrap();

        // 2025-03-03 is a Monday, 2025-03-08 a Saturday
        let weekday = store.get_day_by_date(date(2025, 3, 3)).unwrap();
        assert!(!weekday.is_weekend);
        assert_eq!(weekday.pause, "00:30");
        assert_eq!(weekday.soll_stunden, 8.0);
        assert_eq!(weekday.ist_stunden, 0.0);
        assert_eq!(weekday.code, DayCode::None);

        let saturday = store.get_day_by_date(date(2025, 3, 8)).unwrap();
        assert!(saturday.is_weekend);
        assert_eq!(saturday.pause, "");
        assert_eq!(saturday.soll_stunden, 0.0);
    }

    #[test]
    fn test_day_fields_derive_from_date() {
        let store = PrimaryStore::new();
        let year = store.create_year(2025).unwrap();

        for day in store.days_for_year(year.id) {
            let weekday = day.date.weekday().num_days_from_sunday();
            assert_eq!(day.day_of_week, weekday);
            assert_eq!(day.is_weekend, weekday == 0 || weekday == 6);
            assert_eq!(day.iso_week, day.date.iso_week().week());
            assert_eq!(day.year, 2025);
            assert_eq!(day.month, day.date.month());
            assert_eq!(day.day, day.date.day());
        }
    }

    #[test]
    fn test_update_day_recomputes_worked_hours() {
        let store = PrimaryStore::new();
        store.create_year(2025).unwrap();
        let day = store.get_day_by_date(date(2025, 3, 3)).unwrap();

        let patch = DayPatch {
            von: Some("08:00".to_string()),
            bis: Some("16:00".to_string()),
            ..DayPatch::default()
        };
        let updated = store.update_day(day.id, &patch).unwrap();

        // The default weekday break of 00:30 is part of the merged record
        assert_eq!(updated.ist_stunden, 7.5);
        assert_eq!(updated.soll_stunden, 8.0);
        assert_eq!(updated.von, "08:00");
        assert_eq!(updated.bis, "16:00");
    }

    #[test]
    fn test_comment_only_update_skips_recomputation() {
        let store = PrimaryStore::new();
        store.create_year(2025).unwrap();
        let day = store.get_day_by_date(date(2025, 3, 3)).unwrap();

        store
            .update_day(
                day.id,
                &DayPatch {
                    von: Some("08:00".to_string()),
                    bis: Some("12:00".to_string()),
                    pause: Some("".to_string()),
                    ..DayPatch::default()
                },
            )
            .unwrap();

        let commented = store
            .update_day(
                day.id,
                &DayPatch {
                    comment: Some("Home office".to_string()),
                    ..DayPatch::default()
                },
            )
            .unwrap();
        assert_eq!(commented.comment, "Home office");
        assert_eq!(commented.ist_stunden, 4.0);
    }

    #[test]
    fn test_update_keeps_code_override() {
        let store = PrimaryStore::new();
        store.create_year(2025).unwrap();
        let day = store.get_day_by_date(date(2025, 3, 3)).unwrap();
        store.set_day_code(day.id, DayCode::Urlaub).unwrap();

        // Editing times on a coded day keeps the 8/8 override
        let updated = store
            .update_day(
                day.id,
                &DayPatch {
                    von: Some("06:00".to_string()),
                    ..DayPatch::default()
                },
            )
            .unwrap();
        assert_eq!(updated.ist_stunden, 8.0);
        assert_eq!(updated.soll_stunden, 8.0);
        assert_eq!(updated.code, DayCode::Urlaub);
    }

    #[test]
    fn test_update_missing_day() {
        let store = PrimaryStore::new();
        let result = store.update_day(9999, &DayPatch::default());
        assert!(matches!(result, Err(StoreError::DayNotFound(9999))));
    }

    #[test]
    fn test_code_override_and_clear_on_weekday() {
        let store = PrimaryStore::new();
        store.create_year(2025).unwrap();
        let day = store.get_day_by_date(date(2025, 3, 3)).unwrap();

        let marked = store.set_day_code(day.id, DayCode::Krank).unwrap();
        assert_eq!(marked.code, DayCode::Krank);
        assert_eq!(marked.comment, "Krank");
        assert_eq!(marked.von, "08:00");
        assert_eq!(marked.bis, "16:00");
        assert_eq!(marked.pause, "00:00");
        assert_eq!(marked.ist_stunden, 8.0);
        assert_eq!(marked.soll_stunden, 8.0);

        let cleared = store.clear_day_code(day.id).unwrap();
        assert_eq!(cleared.code, DayCode::None);
        assert_eq!(cleared.comment, "");
        assert_eq!(cleared.von, "");
        assert_eq!(cleared.pause, "00:30");
        assert_eq!(cleared.ist_stunden, 0.0);
        assert_eq!(cleared.soll_stunden, 8.0);
    }

    #[test]
    fn test_code_override_and_clear_on_weekend() {
        let store = PrimaryStore::new();
        store.create_year(2025).unwrap();
        let day = store.get_day_by_date(date(2025, 3, 8)).unwrap();

        // The override applies even on a Saturday
        let marked = store.set_day_code(day.id, DayCode::Feiertag).unwrap();
        assert_eq!(marked.ist_stunden, 8.0);
        assert_eq!(marked.soll_stunden, 8.0);

        // Clearing restores the weekend defaults, not the weekday ones
        let cleared = store.clear_day_code(day.id).unwrap();
        assert_eq!(cleared.pause, "");
        assert_eq!(cleared.soll_stunden, 0.0);
        assert_eq!(cleared.ist_stunden, 0.0);
    }

    #[test]
    fn test_delete_year_cascades() {
        let store = PrimaryStore::new();
        let kept = store.create_year(2024).unwrap();
        let deleted = store.create_year(2025).unwrap();

        store.delete_year(deleted.id);

        assert!(store.get_year(deleted.id).is_none());
        assert!(store.months_for_year(deleted.id).is_empty());
        assert!(store.days_for_year(deleted.id).is_empty());
        assert!(store.get_day_by_date(date(2025, 3, 3)).is_none());

        // The other year is untouched
        let years = store.years();
        assert_eq!(years.len(), 1);
        assert_eq!(years[0].year, 2024);
        assert_eq!(store.months_for_year(kept.id).len(), 12);
    }

    #[test]
    fn test_years_are_listed_newest_first() {
        let store = PrimaryStore::new();
        store.create_year(2024).unwrap();
        store.create_year(2026).unwrap();
        store.create_year(2025).unwrap();

        let years: Vec<i32> = store.years().into_iter().map(|y| y.year).collect();
        assert_eq!(years, vec![2026, 2025, 2024]);
    }

    #[test]
    fn test_replace_all_preserves_ids_and_advances_counters() {
        let source = PrimaryStore::new();
        let original = source.create_year(2025).unwrap();
        let (years, months, days) = source.export_all();

        let restored = PrimaryStore::new();
        restored.replace_all(years, months, days);

        let year = restored.get_year_by_number(2025).unwrap();
        assert_eq!(year.id, original.id);
        assert_eq!(restored.export_all(), source.export_all());

        // Fresh inserts continue after the highest restored id
        let next = restored.create_year(2026).unwrap();
        assert_eq!(next.id, original.id + 1);
        let first_new_day = restored.get_day_by_date(date(2026, 1, 1)).unwrap();
        assert_eq!(first_new_day.id, 366);
    }

    #[test]
    fn test_day_lookup_by_date_and_id() {
        let store = PrimaryStore::new();
        store.create_year(2025).unwrap();

        let day = store.get_day_by_date(date(2025, 7, 15)).unwrap();
        assert_eq!(day.year, 2025);
        assert_eq!(day.month, 7);
        assert_eq!(day.day, 15);
        assert_eq!(store.get_day(day.id).unwrap(), day);

        assert!(store.get_day_by_date(date(2030, 1, 1)).is_none());
    }
}
