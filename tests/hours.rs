#[cfg(test)]
mod tests {
    use timecal::libs::hours::calculate_work_hours;

    #[test]
    fn test_single_block_with_break() {
        assert_eq!(calculate_work_hours("08:00", "16:00", "", "", "00:30"), 7.5);
        assert_eq!(calculate_work_hours("08:00", "16:00", "", "", "01:00"), 7.0);
        assert_eq!(calculate_work_hours("09:00", "17:30", "", "", "00:30"), 8.0);
    }

    #[test]
    fn test_two_blocks() {
        // Morning and afternoon blocks without a logged break
        assert_eq!(calculate_work_hours("08:00", "12:00", "13:00", "17:00", ""), 8.0);

        assert_eq!(calculate_work_hours("08:00", "12:00", "13:00", "17:00", "00:15"), 7.75);
    }

    #[test]
    fn test_empty_fields_contribute_nothing() {
        assert_eq!(calculate_work_hours("", "", "", "", ""), 0.0);

        // A break without any block clamps to zero
        assert_eq!(calculate_work_hours("", "", "", "", "00:30"), 0.0);

        // Half-filled blocks are ignored
        assert_eq!(calculate_work_hours("08:00", "", "", "", ""), 0.0);
        assert_eq!(calculate_work_hours("", "16:00", "", "", ""), 0.0);
        assert_eq!(calculate_work_hours("08:00", "16:00", "13:00", "", ""), 8.0);
    }

    #[test]
    fn test_malformed_fields_are_treated_as_absent() {
        assert_eq!(calculate_work_hours("8am", "16:00", "", "", ""), 0.0);
        assert_eq!(calculate_work_hours("08:00", "sixteen", "", "", ""), 0.0);

        // A break that does not parse subtracts nothing
        assert_eq!(calculate_work_hours("08:00", "16:00", "", "", "half an hour"), 8.0);
    }

    #[test]
    fn test_result_is_never_negative() {
        // Inverted range
        assert_eq!(calculate_work_hours("16:00", "08:00", "", "", ""), 0.0);

        // Break longer than the worked block
        assert_eq!(calculate_work_hours("08:00", "08:30", "", "", "01:00"), 0.0);
    }

    #[test]
    fn test_minute_precision() {
        assert_eq!(calculate_work_hours("08:00", "16:45", "", "", "00:30"), 8.25);
        assert_eq!(calculate_work_hours("08:12", "16:12", "", "", ""), 8.0);
    }
}
