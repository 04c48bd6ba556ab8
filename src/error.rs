// Error types for the date picker core
// Only input-contract violations are errors; everything else is total.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Invalid month index: {0} (must be 0-11)")]
    InvalidMonth(u32),
    #[error("Year {0} is outside the supported range 1-9999")]
    YearOutOfRange(i32),
    #[error("Invalid first day of week: {0} (must be 0-6, 0 = Sunday)")]
    InvalidFirstDayOfWeek(u8),
}
