//! The built-in day table.

use model::DayRecord;

/// The six-entry sequence the page ships with: one day per month, so every
/// "Update Day" crosses a month boundary and recolors the header. Length
/// matches the header palette, keeping the index lookup in range.
pub fn week() -> Vec<DayRecord> {
    vec![
        DayRecord::new("January", 1, "Monday"),
        DayRecord::new("February", 2, "Tuesday"),
        DayRecord::new("March", 3, "Wednesday"),
        DayRecord::new("April", 4, "Thursday"),
        DayRecord::new("May", 5, "Friday"),
        DayRecord::new("June", 6, "Saturday"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::PALETTE;

    #[test]
    fn test_week_matches_palette_length() {
        assert_eq!(week().len(), PALETTE.len());
    }

    #[test]
    fn test_week_months_are_distinct() {
        let days = week();
        for (i, a) in days.iter().enumerate() {
            for b in &days[i + 1..] {
                assert_ne!(a.month, b.month);
            }
        }
    }

    #[test]
    fn test_week_days_count_up_from_one() {
        for (i, day) in week().iter().enumerate() {
            assert_eq!(day.day as usize, i + 1);
        }
    }
}
