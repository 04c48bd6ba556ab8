// Settings module
// Picker configuration, persisted as TOML by the settings service

use serde::{Deserialize, Serialize};

use crate::error::CalendarError;
use crate::models::calendar_date::CalendarDate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerSettings {
    /// 0 = Sunday, 1 = Monday, ... 6 = Saturday
    pub first_day_of_week: u8,
    /// Selection shown when the picker is first mounted
    pub initial_date: Option<CalendarDate>,
}

impl Default for PickerSettings {
    fn default() -> Self {
        Self {
            first_day_of_week: 0, // Sunday
            initial_date: None,
        }
    }
}

impl PickerSettings {
    pub fn validate(&self) -> Result<(), CalendarError> {
        if self.first_day_of_week > 6 {
            return Err(CalendarError::InvalidFirstDayOfWeek(self.first_day_of_week));
        }
        Ok(())
    }
}
