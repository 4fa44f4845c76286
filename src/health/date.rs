//! Day stamps for date-scoped health values.

use chrono::NaiveDate;

/// Stamp format stored next to date-scoped values.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// `YYYY-MM-DD` stamp for `day`.
pub fn day_key(day: NaiveDate) -> String {
    day.format(DATE_FORMAT).to_string()
}

/// Whether a stored stamp refers to `today`. A missing stamp is stale.
///
/// Every date-scoped field goes through this one comparison.
pub fn is_current(stored: Option<&str>, today: NaiveDate) -> bool {
    stored
        .and_then(|s| NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok())
        .is_some_and(|day| day == today)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_day_key() {
        assert_eq!(day_key(day(2024, 3, 7)), "2024-03-07");
    }

    #[test]
    fn test_is_current() {
        let today = day(2024, 3, 7);
        assert!(is_current(Some("2024-03-07"), today));
        assert!(is_current(Some(" 2024-03-07\n"), today));
        assert!(!is_current(Some("2024-03-06"), today));
        assert!(!is_current(Some("garbage"), today));
        assert!(!is_current(None, today));
    }
}
