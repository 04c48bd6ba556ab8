// Test fixtures - reusable test data
// Provides consistent dates and pickers across all test files

#![allow(dead_code)]

use rust_date_picker::{CalendarDate, DatePicker, FixedClock, PickerSettings};

/// Sample dates for testing
pub mod dates {
    use super::*;

    pub fn ymd(year: i32, month: u32, day: u32) -> CalendarDate {
        CalendarDate::from_ymd(year, month, day).unwrap()
    }

    /// Feb 15, 2024 (leap year, Feb 1 is a Thursday)
    pub fn mid_leap_february() -> CalendarDate {
        ymd(2024, 2, 15)
    }

    /// Jan 31, 2024 (month-end clamping source)
    pub fn end_of_january_2024() -> CalendarDate {
        ymd(2024, 1, 31)
    }

    /// Dec 31, 2025 (New Year's Eve)
    pub fn new_years_eve_2025() -> CalendarDate {
        ymd(2025, 12, 31)
    }

    /// Feb 29, 2024 (leap day)
    pub fn leap_day_2024() -> CalendarDate {
        ymd(2024, 2, 29)
    }
}

/// Sample pickers for testing
pub mod pickers {
    use super::*;

    /// Picker frozen on `today` with default settings
    pub fn frozen_on(today: CalendarDate) -> DatePicker {
        DatePicker::with_clock(PickerSettings::default(), Box::new(FixedClock(today))).unwrap()
    }

    /// Picker frozen on `today`, weeks starting on `first_day_of_week`
    pub fn frozen_with_week_start(today: CalendarDate, first_day_of_week: u8) -> DatePicker {
        let settings = PickerSettings {
            first_day_of_week,
            ..PickerSettings::default()
        };
        DatePicker::with_clock(settings, Box::new(FixedClock(today))).unwrap()
    }
}
