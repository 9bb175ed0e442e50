#[cfg(test)]
mod tests {
    use timecal::libs::messages::Message;

    #[test]
    fn test_messages_render_their_parameters() {
        assert_eq!(
            Message::YearCreated(2025).to_string(),
            "Year 2025 created with 12 months and all calendar days."
        );
        assert_eq!(
            Message::DayCodeSet("2025-03-04".to_string(), "Urlaub".to_string()).to_string(),
            "Day 2025-03-04 marked as 'Urlaub'."
        );
        assert_eq!(
            Message::ImportFailed("truncated file".to_string()).to_string(),
            "Import failed, existing data left unchanged: truncated file"
        );
        assert_eq!(
            Message::InvalidDayCode("X".to_string()).to_string(),
            "Invalid absence code 'X'. Expected one of: K, KK, U, FT."
        );
    }
}
