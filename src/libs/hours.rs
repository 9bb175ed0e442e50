//! Worked-hours calculation from raw time-of-day fields.
//!
//! A day carries up to two work blocks (`von`-`bis` and `von2`-`bis2`) plus
//! a break (`pause`), all as "HH:MM" strings that may be empty. The
//! calculation is deliberately lenient: it never fails, a half-filled block
//! contributes nothing, and the result is clamped at zero.
//!
//! ## Formula
//!
//! ```text
//! minutes = (bis - von)      if both ends of block 1 are set
//!         + (bis2 - von2)    if both ends of block 2 are set
//!         - pause            if set
//! hours   = max(0, minutes / 60)
//! ```

/// Parses an "HH:MM" string into total minutes.
///
/// Returns `None` for empty or malformed input so the caller treats the
/// field as absent.
fn parse_minutes(value: &str) -> Option<i64> {
    let (hours, minutes) = value.split_once(':')?;
    let hours: i64 = hours.parse().ok()?;
    let minutes: i64 = minutes.parse().ok()?;
    Some(hours * 60 + minutes)
}

/// Calculates worked hours for a day from its raw time fields.
///
/// Each block contributes its end-minus-start minutes only when both ends
/// are present; the break is subtracted when present. Inverted ranges can
/// push the total negative, which clamps to zero.
///
/// # Examples
///
/// ```rust
/// use timecal::libs::hours::calculate_work_hours;
///
/// let hours = calculate_work_hours("08:00", "16:00", "", "", "00:30");
/// assert_eq!(hours, 7.5);
/// ```
pub fn calculate_work_hours(von: &str, bis: &str, von2: &str, bis2: &str, pause: &str) -> f64 {
    let mut total_minutes: i64 = 0;

    // First block
    if let (Some(start), Some(end)) = (parse_minutes(von), parse_minutes(bis)) {
        total_minutes += end - start;
    }

    // Second block
    if let (Some(start), Some(end)) = (parse_minutes(von2), parse_minutes(bis2)) {
        total_minutes += end - start;
    }

    // Subtract the break
    if let Some(break_minutes) = parse_minutes(pause) {
        total_minutes -= break_minutes;
    }

    (total_minutes as f64 / 60.0).max(0.0)
}
