// Date utility functions
// Arithmetic shared by the grid builder and the navigation state machine

use chrono::{Datelike, Duration, NaiveDate};

use crate::models::calendar_date::{is_supported_year, CalendarDate};

/// The 1st of the month containing `date`.
pub fn first_of_month(date: CalendarDate) -> CalendarDate {
    let naive = date.as_naive();
    CalendarDate::from_naive(naive - Duration::days(i64::from(naive.day0())))
}

/// Calculate the start of the week containing the given date.
///
/// # Arguments
/// * `date` - The date to find the week start for
/// * `first_day_of_week` - 0 = Sunday, 1 = Monday, etc. Taken modulo 7.
pub fn week_start(date: CalendarDate, first_day_of_week: u8) -> CalendarDate {
    let weekday = i64::from(date.weekday().num_days_from_sunday());
    let offset = (weekday - i64::from(first_day_of_week)).rem_euclid(7);
    add_days(date, -offset)
}

/// Move `date` by `days` (may be negative).
pub fn add_days(date: CalendarDate, days: i64) -> CalendarDate {
    CalendarDate::from_naive(date.as_naive() + Duration::days(days))
}

/// Number of days in a month (`month` is one-based).
///
/// `None` for a month outside 1..=12 or a year chrono cannot represent.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    if !(1..=12).contains(&month) {
        return None;
    }
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
}

/// Shift a date by whole months, clamping the day to the end of the
/// resulting month (Jan 31 + 1 month = Feb 28/29).
///
/// Returns `None` when the result falls outside the supported year range.
pub fn shift_months(date: CalendarDate, delta_months: i32) -> Option<CalendarDate> {
    let total_months = i64::from(date.year()) * 12 + i64::from(date.month0()) + i64::from(delta_months);
    let new_year = i32::try_from(total_months.div_euclid(12)).ok()?;
    if !is_supported_year(new_year) {
        return None;
    }
    let new_month = total_months.rem_euclid(12) as u32 + 1;
    clamp_day(new_year, new_month, date.day())
}

/// Shift a date by whole years with the same clamping as [`shift_months`]
/// (Feb 29 + 1 year = Feb 28).
pub fn shift_years(date: CalendarDate, delta_years: i32) -> Option<CalendarDate> {
    shift_months(date, delta_years.checked_mul(12)?)
}

fn clamp_day(year: i32, month: u32, desired_day: u32) -> Option<CalendarDate> {
    let day = desired_day.min(days_in_month(year, month)?);
    NaiveDate::from_ymd_opt(year, month, day).map(CalendarDate::from_naive)
}
