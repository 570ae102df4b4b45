//! Date-of-birth rule.
//!
//! The month/day/year components must name a real calendar date that is not
//! in the future and not more than 120 years before the reference date.

use chrono::{Months, NaiveDate};

use intake_ingest::DateParts;
use intake_model::{FieldName, ValidationOutcome};

use crate::ValidationContext;
use crate::rules::REQUIRED;

pub const MAX_AGE_YEARS: u32 = 120;

pub const INVALID_DATE: &str = "not a valid calendar date";
pub const IN_FUTURE: &str = "cannot be in the future";
pub const TOO_OLD: &str = "cannot be more than 120 years ago";

/// Earliest accepted birth date: the reference date with the year moved back
/// 120 years (Feb 29 clamps to Feb 28).
pub fn earliest_birth_date(today: NaiveDate) -> NaiveDate {
    today
        .checked_sub_months(Months::new(MAX_AGE_YEARS * 12))
        .unwrap_or(NaiveDate::MIN)
}

/// Parse and bound-check the components.
pub fn check_date_of_birth(parts: &DateParts, today: NaiveDate) -> Result<NaiveDate, String> {
    let month = parts.month.trim();
    let day = parts.day.trim();
    let year = parts.year.trim();
    if month.is_empty() || day.is_empty() || year.is_empty() {
        return Err(REQUIRED.to_string());
    }

    let date = calendar_date(month, day, year).ok_or_else(|| INVALID_DATE.to_string())?;
    if date > today {
        return Err(IN_FUTURE.to_string());
    }
    if date < earliest_birth_date(today) {
        return Err(TOO_OLD.to_string());
    }
    Ok(date)
}

pub fn validate_date_of_birth(parts: &DateParts, ctx: &ValidationContext) -> ValidationOutcome {
    ValidationOutcome::from_check(
        FieldName::DateOfBirth,
        check_date_of_birth(parts, ctx.today()).map(|_| ()),
    )
}

/// Build the date only when the components name it exactly; no rollover of
/// out-of-range days or months.
fn calendar_date(month: &str, day: &str, year: &str) -> Option<NaiveDate> {
    let all_digits = |text: &str| text.chars().all(|ch| ch.is_ascii_digit());
    if !all_digits(month) || !all_digits(day) || !all_digits(year) {
        return None;
    }
    let month: u32 = month.parse().ok()?;
    let day: u32 = day.parse().ok()?;
    let year: i32 = year.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    fn check(month: &str, day: &str, year: &str) -> Result<NaiveDate, String> {
        check_date_of_birth(&DateParts::new(month, day, year), today())
    }

    #[test]
    fn accepts_ordinary_dates() {
        assert_eq!(
            check("04", "09", "1996"),
            Ok(NaiveDate::from_ymd_opt(1996, 4, 9).unwrap())
        );
        assert!(check("10", "16", "2026").is_ok());
    }

    #[test]
    fn any_blank_component_is_required() {
        assert_eq!(check("", "1", "2000"), Err(REQUIRED.to_string()));
        assert_eq!(check("1", " ", "2000"), Err(REQUIRED.to_string()));
        assert_eq!(check("1", "1", ""), Err(REQUIRED.to_string()));
    }

    #[test]
    fn rejects_dates_that_would_roll_over() {
        assert_eq!(check("02", "30", "2000"), Err(INVALID_DATE.to_string()));
        assert_eq!(check("04", "31", "2000"), Err(INVALID_DATE.to_string()));
        assert_eq!(check("13", "01", "2000"), Err(INVALID_DATE.to_string()));
        assert_eq!(check("02", "29", "2001"), Err(INVALID_DATE.to_string()));
        assert!(check("02", "29", "2000").is_ok());
    }

    #[test]
    fn rejects_non_numeric_components() {
        assert_eq!(check("Jan", "01", "2000"), Err(INVALID_DATE.to_string()));
        assert_eq!(check("+1", "01", "2000"), Err(INVALID_DATE.to_string()));
        assert_eq!(check("1", "1.5", "2000"), Err(INVALID_DATE.to_string()));
    }

    #[test]
    fn future_and_age_bounds() {
        assert_eq!(check("10", "17", "2026"), Err(IN_FUTURE.to_string()));
        assert!(check("10", "16", "1906").is_ok());
        assert_eq!(check("10", "15", "1906"), Err(TOO_OLD.to_string()));
    }

    #[test]
    fn leap_day_reference_date_clamps() {
        let leap = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(
            earliest_birth_date(leap),
            NaiveDate::from_ymd_opt(1904, 2, 29).unwrap()
        );
        // 1900 is not a leap year.
        let leap = NaiveDate::from_ymd_opt(2020, 2, 29).unwrap();
        assert_eq!(
            earliest_birth_date(leap),
            NaiveDate::from_ymd_opt(1900, 2, 28).unwrap()
        );
    }
}
