//! Calendar-date arithmetic for the month grid.
//!
//! All month arithmetic in calpad goes through [`normalize_year_month`], so
//! out-of-range month values (0, 13, ...) fold into the correct adjacent
//! year in one explicit place instead of relying on implicit constructor
//! overflow. Month navigation depends on this: moving from January means
//! asking for month 0, moving from December means asking for month 13.

use chrono::{Datelike, NaiveDate};

/// Fold an arbitrary 1-based month value into `(year, 1..=12)`.
///
/// Month 0 is December of the previous year, month 13 is January of the
/// next; any integer works.
pub fn normalize_year_month(year: i32, month: i32) -> (i32, u32) {
    let months = month - 1;
    (year + months.div_euclid(12), months.rem_euclid(12) as u32 + 1)
}

/// First day of a (possibly unnormalized) month.
pub fn first_of_month(year: i32, month: i32) -> NaiveDate {
    let (year, month) = normalize_year_month(year, month);
    NaiveDate::from_ymd_opt(year, month, 1).unwrap()
}

/// Number of days in the given month, computed as the distance from its
/// first day to the first day of the following month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let first = first_of_month(year, month as i32);
    let next = first_of_month(year, month as i32 + 1);
    next.signed_duration_since(first).num_days() as u32
}

/// Weekday index of day 1 of the given month, 0 = Sunday.
pub fn first_weekday(year: i32, month: u32) -> u32 {
    first_of_month(year, month as i32)
        .weekday()
        .num_days_from_sunday()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_in_range_is_identity() {
        assert_eq!(normalize_year_month(2024, 1), (2024, 1));
        assert_eq!(normalize_year_month(2024, 6), (2024, 6));
        assert_eq!(normalize_year_month(2024, 12), (2024, 12));
    }

    #[test]
    fn test_normalize_underflow_into_previous_year() {
        assert_eq!(normalize_year_month(2024, 0), (2023, 12));
        assert_eq!(normalize_year_month(2024, -1), (2023, 11));
        assert_eq!(normalize_year_month(2024, -11), (2023, 1));
        assert_eq!(normalize_year_month(2024, -12), (2022, 12));
    }

    #[test]
    fn test_normalize_overflow_into_next_year() {
        assert_eq!(normalize_year_month(2024, 13), (2025, 1));
        assert_eq!(normalize_year_month(2024, 24), (2025, 12));
        assert_eq!(normalize_year_month(2024, 25), (2026, 1));
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 1), 31);
        assert_eq!(days_in_month(2024, 2), 29); // leap year
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 4), 30);
        assert_eq!(days_in_month(2024, 12), 31);
    }

    #[test]
    fn test_first_weekday() {
        // 2024-03-01 was a Friday, 2023-10-01 a Sunday
        assert_eq!(first_weekday(2024, 3), 5);
        assert_eq!(first_weekday(2023, 10), 0);
    }

    #[test]
    fn test_first_of_month_normalizes() {
        assert_eq!(
            first_of_month(2024, 0),
            NaiveDate::from_ymd_opt(2023, 12, 1).unwrap()
        );
        assert_eq!(
            first_of_month(2024, 13),
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
        );
    }
}
