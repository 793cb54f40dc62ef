use chrono::{Datelike, NaiveDate};

pub fn month_start(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date)
}

pub fn month_end(date: NaiveDate) -> NaiveDate {
    let next_month = if date.month() == 12 {
        NaiveDate::from_ymd_opt(date.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(date.year(), date.month() + 1, 1)
    };
    match next_month {
        Some(d) => d - chrono::Duration::days(1),
        None => date,
    }
}

/// Inclusive count of days from `date` to the end of its month.
/// Variable month lengths and leap years fall out of the calendar
/// arithmetic, not a fixed 30/31 constant.
pub fn days_remaining_in_month(date: NaiveDate) -> i64 {
    (month_end(date) - date).num_days() + 1
}

/// First day of the month `months` away from `date`'s month.
/// Negative values go backwards; year boundaries are handled.
pub fn shift_months(date: NaiveDate, months: i32) -> NaiveDate {
    let total_months = date.year() * 12 + date.month() as i32 - 1 + months;
    let new_year = total_months.div_euclid(12);
    let new_month = (total_months.rem_euclid(12) + 1) as u32;
    NaiveDate::from_ymd_opt(new_year, new_month, 1).unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_month_end_variable_lengths() {
        assert_eq!(month_end(d(2026, 1, 15)), d(2026, 1, 31));
        assert_eq!(month_end(d(2026, 4, 1)), d(2026, 4, 30));
        assert_eq!(month_end(d(2026, 12, 31)), d(2026, 12, 31));
    }

    #[test]
    fn test_month_end_leap_year() {
        assert_eq!(month_end(d(2024, 2, 10)), d(2024, 2, 29));
        assert_eq!(month_end(d(2026, 2, 10)), d(2026, 2, 28));
    }

    #[test]
    fn test_days_remaining_inclusive() {
        assert_eq!(days_remaining_in_month(d(2026, 1, 31)), 1);
        assert_eq!(days_remaining_in_month(d(2026, 1, 1)), 31);
        assert_eq!(days_remaining_in_month(d(2024, 2, 28)), 2);
    }

    #[test]
    fn test_shift_months_across_year_boundary() {
        assert_eq!(shift_months(d(2026, 1, 20), -5), d(2025, 8, 1));
        assert_eq!(shift_months(d(2025, 11, 3), 3), d(2026, 2, 1));
        assert_eq!(shift_months(d(2026, 6, 1), 0), d(2026, 6, 1));
    }
}
