#[cfg(test)]
mod tests {
    use timecal::libs::formatter::{format_hours, format_signed_hours, month_name, weekday_abbrev};

    #[test]
    fn test_format_hours_uses_comma_separator() {
        assert_eq!(format_hours(7.5), "7,50");
        assert_eq!(format_hours(8.0), "8,00");
        assert_eq!(format_hours(0.0), "0,00");
        assert_eq!(format_hours(208.0 / 22.0), "9,45");
    }

    #[test]
    fn test_format_hours_never_shows_nan() {
        assert_eq!(format_hours(f64::NAN), "0,00");
        assert_eq!(format_hours(f64::INFINITY), "0,00");
    }

    #[test]
    fn test_format_signed_hours() {
        assert_eq!(format_signed_hours(32.0), "+32,00");
        assert_eq!(format_signed_hours(0.25), "+0,25");
        assert_eq!(format_signed_hours(-8.0), "-8,00");
        assert_eq!(format_signed_hours(0.0), "0,00");
    }

    #[test]
    fn test_month_names() {
        assert_eq!(month_name(1), "Januar");
        assert_eq!(month_name(3), "März");
        assert_eq!(month_name(12), "Dezember");

        assert_eq!(month_name(0), "");
        assert_eq!(month_name(13), "");
    }

    #[test]
    fn test_weekday_abbreviations() {
        assert_eq!(weekday_abbrev(0), "So");
        assert_eq!(weekday_abbrev(1), "Mo");
        assert_eq!(weekday_abbrev(6), "Sa");

        assert_eq!(weekday_abbrev(7), "");
    }
}
