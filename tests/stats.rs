#[cfg(test)]
mod tests {
    use chrono::{Datelike, NaiveDate};
    use timecal::libs::day::{Day, DayCode};
    use timecal::libs::stats::{calculate_stats, weekly_hours, Stats, WeeklyHours};

    /// Builds `count` consecutive non-weekend days starting 2025-01-01,
    /// with sequential ids and untouched creation defaults.
    fn weekday_fixture(count: usize) -> Vec<Day> {
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        start
            .iter_days()
            .filter(|d| {
                let day_of_week = d.weekday().num_days_from_sunday();
                day_of_week != 0 && day_of_week != 6
            })
            .take(count)
            .enumerate()
            .map(|(i, date)| Day::new(i as i64 + 1, 1, 1, date))
            .collect()
    }

    #[test]
    fn test_month_fixture() {
        // 22 workdays: 2 sick, 1 vacation, 16 logging 10h, 3 logging 8h
        let mut days = weekday_fixture(22);
        days[0].apply_code(DayCode::Krank);
        days[1].apply_code(DayCode::Krank);
        days[2].apply_code(DayCode::Urlaub);
        for day in days.iter_mut().skip(3).take(16) {
            day.ist_stunden = 10.0;
        }
        for day in days.iter_mut().skip(19) {
            day.ist_stunden = 8.0;
        }

        let stats = calculate_stats(&days);
        assert_eq!(stats.arbeitstage, 22);
        assert_eq!(stats.krank, 2);
        assert_eq!(stats.kindkrank, 0);
        assert_eq!(stats.urlaub, 1);
        assert_eq!(stats.feiertag, 0);
        assert_eq!(stats.soll_stunden, 176.0);
        assert_eq!(stats.ist_stunden, 208.0);
        assert_eq!(stats.differenz, 32.0);
        assert_eq!(stats.durchschnitt, 208.0 / 22.0);
    }

    #[test]
    fn test_weekend_days_never_count_as_workdays() {
        // 2025-03-08 is a Saturday; the code still counts, the day does not
        let saturday = NaiveDate::from_ymd_opt(2025, 3, 8).unwrap();
        let mut day = Day::new(1, 1, 1, saturday);
        day.apply_code(DayCode::Krank);

        let stats = calculate_stats(&[day]);
        assert_eq!(stats.arbeitstage, 0);
        assert_eq!(stats.krank, 1);
        assert_eq!(stats.soll_stunden, 8.0);
        assert_eq!(stats.ist_stunden, 8.0);
        assert_eq!(stats.durchschnitt, 0.0);
    }

    #[test]
    fn test_empty_day_set() {
        assert_eq!(calculate_stats(&[]), Stats::default());
    }

    #[test]
    fn test_order_independence() {
        let mut days = weekday_fixture(5);
        days[0].apply_code(DayCode::Feiertag);
        days[3].ist_stunden = 6.0;

        let forward = calculate_stats(&days);
        days.reverse();
        assert_eq!(calculate_stats(&days), forward);
    }

    #[test]
    fn test_weekly_hours_grouping() {
        // Two days share an ISO week, the third falls into the next one
        let mut monday = Day::new(1, 1, 1, NaiveDate::from_ymd_opt(2025, 3, 3).unwrap());
        let mut tuesday = Day::new(2, 1, 1, NaiveDate::from_ymd_opt(2025, 3, 4).unwrap());
        let mut next_monday = Day::new(3, 1, 1, NaiveDate::from_ymd_opt(2025, 3, 10).unwrap());
        monday.ist_stunden = 8.0;
        tuesday.ist_stunden = 7.5;
        next_monday.ist_stunden = 4.0;
        assert_eq!(monday.iso_week, tuesday.iso_week);

        let weeks = weekly_hours(&[monday.clone(), next_monday.clone(), tuesday.clone()]);
        assert_eq!(
            weeks,
            vec![
                WeeklyHours {
                    iso_week: monday.iso_week,
                    ist_stunden: 15.5,
                },
                WeeklyHours {
                    iso_week: next_monday.iso_week,
                    ist_stunden: 4.0,
                },
            ]
        );
    }
}
