//! Date picker instance.
//!
//! Holds one [`NavigationState`] and exposes the host contract: each
//! interaction runs one transition and returns the new state together with
//! the grid to display.

use chrono::Local;

use crate::error::CalendarError;
use crate::models::calendar_date::{CalendarDate, MonthIndex};
use crate::models::settings::PickerSettings;
use crate::models::view::ViewMode;
use crate::services::grid::{build_grid, Grid};
use crate::services::labels;
use crate::services::navigation::{transition, NavigationEvent, NavigationState};

/// Source of "today".
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    fn today(&self) -> CalendarDate;
}

/// Today's date in the local timezone.
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> CalendarDate {
        CalendarDate::from_naive(Local::now().date_naive())
    }
}

/// A clock frozen on one date, for tests and reproducible demos.
pub struct FixedClock(pub CalendarDate);

impl Clock for FixedClock {
    fn today(&self) -> CalendarDate {
        self.0
    }
}

type SelectCallback = Box<dyn FnMut(CalendarDate)>;

pub struct DatePicker {
    state: NavigationState,
    settings: PickerSettings,
    clock: Box<dyn Clock>,
    on_select: Option<SelectCallback>,
}

impl DatePicker {
    /// Picker using the system clock.
    pub fn new(settings: PickerSettings) -> Result<Self, CalendarError> {
        Self::with_clock(settings, Box::new(SystemClock))
    }

    /// Picker viewing `clock.today()`, with `settings.initial_date` selected.
    pub fn with_clock(settings: PickerSettings, clock: Box<dyn Clock>) -> Result<Self, CalendarError> {
        settings.validate()?;
        let state = NavigationState::new(clock.today(), settings.initial_date);
        log::debug!(
            "Picker mounted on {} with selection {:?}",
            state.reference_date,
            state.selected_date
        );
        Ok(Self {
            state,
            settings,
            clock,
            on_select: None,
        })
    }

    /// Register the callback invoked once per picked day.
    pub fn on_select(mut self, callback: impl FnMut(CalendarDate) + 'static) -> Self {
        self.on_select = Some(Box::new(callback));
        self
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn settings(&self) -> &PickerSettings {
        &self.settings
    }

    pub fn today(&self) -> CalendarDate {
        self.clock.today()
    }

    /// Grid for the current state.
    pub fn grid(&self) -> Grid {
        build_grid(
            self.state.reference_date,
            self.state.view_mode,
            self.state.selected_date,
            self.clock.today(),
            self.settings.first_day_of_week,
        )
    }

    pub fn header_label(&self) -> String {
        labels::header_label(&self.state)
    }

    pub fn weekday_labels(&self) -> [&'static str; 7] {
        labels::weekday_labels(self.settings.first_day_of_week)
    }

    pub fn prev(&mut self) -> Result<(NavigationState, Grid), CalendarError> {
        self.handle(NavigationEvent::Prev)
    }

    pub fn next(&mut self) -> Result<(NavigationState, Grid), CalendarError> {
        self.handle(NavigationEvent::Next)
    }

    pub fn header_click(&mut self) -> Result<(NavigationState, Grid), CalendarError> {
        self.handle(NavigationEvent::HeaderClick)
    }

    pub fn pick_day(&mut self, date: CalendarDate) -> Result<(NavigationState, Grid), CalendarError> {
        self.handle(NavigationEvent::PickDay(date))
    }

    /// Pick a zero-based month; fails for `month0 > 11`.
    pub fn pick_month(&mut self, month0: u32) -> Result<(NavigationState, Grid), CalendarError> {
        let month = MonthIndex::new(month0)?;
        self.handle(NavigationEvent::PickMonth(month))
    }

    pub fn pick_year(&mut self, year: i32) -> Result<(NavigationState, Grid), CalendarError> {
        self.handle(NavigationEvent::PickYear(year))
    }

    /// Show today's month in the day view. The selection is kept.
    pub fn go_to_today(&mut self) -> (NavigationState, Grid) {
        self.state = NavigationState {
            reference_date: self.clock.today(),
            view_mode: ViewMode::Day,
            ..self.state
        };
        (self.state, self.grid())
    }

    /// Apply one event, notify the selection callback for picked days, and
    /// return the new state with its grid.
    pub fn handle(&mut self, event: NavigationEvent) -> Result<(NavigationState, Grid), CalendarError> {
        self.state = transition(&self.state, event)?;

        if let NavigationEvent::PickDay(date) = event {
            log::info!("Date selected: {}", date);
            if let Some(callback) = self.on_select.as_mut() {
                callback(date);
            }
        }

        Ok((self.state, self.grid()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::from_ymd(y, m, d).unwrap()
    }

    fn picker_on(today: CalendarDate) -> DatePicker {
        DatePicker::with_clock(PickerSettings::default(), Box::new(FixedClock(today))).unwrap()
    }

    #[test]
    fn test_mount_views_today() {
        let mut clock = MockClock::new();
        clock.expect_today().return_const(date(2024, 2, 15));

        let picker = DatePicker::with_clock(PickerSettings::default(), Box::new(clock)).unwrap();
        assert_eq!(picker.state().reference_date, date(2024, 2, 15));
        assert_eq!(picker.state().view_mode, ViewMode::Day);
        assert_eq!(picker.state().selected_date, None);
        assert_eq!(picker.header_label(), "February 2024");
    }

    #[test]
    fn test_mount_uses_initial_selection() {
        let settings = PickerSettings {
            first_day_of_week: 1,
            initial_date: Some(date(2023, 12, 25)),
        };
        let picker = DatePicker::with_clock(settings, Box::new(FixedClock(date(2024, 2, 15)))).unwrap();
        assert_eq!(picker.state().selected_date, Some(date(2023, 12, 25)));
        assert_eq!(picker.weekday_labels()[0], "Mo");
    }

    #[test]
    fn test_mount_rejects_invalid_settings() {
        let settings = PickerSettings {
            first_day_of_week: 8,
            initial_date: None,
        };
        let result = DatePicker::with_clock(settings, Box::new(FixedClock(date(2024, 2, 15))));
        assert!(matches!(result, Err(CalendarError::InvalidFirstDayOfWeek(8))));
    }

    #[test]
    fn test_pick_day_calls_back_once() {
        let picked = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&picked);
        let mut picker = picker_on(date(2024, 2, 15)).on_select(move |d| sink.borrow_mut().push(d));

        let (state, grid) = picker.pick_day(date(2024, 2, 20)).unwrap();
        assert_eq!(state.selected_date, Some(date(2024, 2, 20)));
        assert_eq!(*picked.borrow(), vec![date(2024, 2, 20)]);

        let Grid::Day(days) = grid else {
            panic!("expected day grid");
        };
        assert_eq!(days.cells().iter().filter(|c| c.is_selected).count(), 1);

        picker.next().unwrap();
        picker.header_click().unwrap();
        assert_eq!(picked.borrow().len(), 1);
    }

    #[test]
    fn test_pick_month_validates_input() {
        let mut picker = picker_on(date(2024, 2, 15));
        picker.header_click().unwrap();
        let before = *picker.state();

        assert_eq!(picker.pick_month(12).unwrap_err(), CalendarError::InvalidMonth(12));
        assert_eq!(*picker.state(), before);

        let (state, grid) = picker.pick_month(5).unwrap();
        assert_eq!(state.reference_date, date(2024, 6, 1));
        assert_eq!(grid.view_mode(), ViewMode::Day);
    }

    #[test]
    fn test_pick_year_failure_keeps_state() {
        let mut picker = picker_on(date(2024, 2, 15));
        picker.header_click().unwrap();
        picker.header_click().unwrap();
        let before = *picker.state();

        assert!(picker.pick_year(-3).is_err());
        assert_eq!(*picker.state(), before);
    }

    #[test]
    fn test_pick_day_on_unsupported_edge_cell_is_rejected() {
        let picked = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&picked);
        let mut picker = picker_on(date(1, 1, 15)).on_select(move |d| sink.borrow_mut().push(d));
        let before = *picker.state();

        // Jan 1, 0001 is a Monday, so the Sunday-start grid opens on Dec 31, 0000
        let Grid::Day(days) = picker.grid() else {
            panic!("expected day grid");
        };
        let leading = days.cells()[0].date;
        assert_eq!(leading.year(), 0);

        assert_eq!(picker.pick_day(leading).unwrap_err(), CalendarError::YearOutOfRange(0));
        assert_eq!(*picker.state(), before);
        assert!(picked.borrow().is_empty());

        let (state, _) = picker.pick_day(date(1, 1, 1)).unwrap();
        let json = serde_json::to_string(&state).unwrap();
        let restored: NavigationState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, state);
        assert_eq!(*picked.borrow(), vec![date(1, 1, 1)]);
    }

    #[test]
    fn test_go_to_today_keeps_selection() {
        let mut picker = picker_on(date(2024, 2, 15));
        picker.pick_day(date(2024, 2, 3)).unwrap();
        picker.header_click().unwrap();
        picker.next().unwrap();

        let (state, grid) = picker.go_to_today();
        assert_eq!(state.reference_date, date(2024, 2, 15));
        assert_eq!(state.view_mode, ViewMode::Day);
        assert_eq!(state.selected_date, Some(date(2024, 2, 3)));
        assert_eq!(grid.len(), 42);
    }
}
