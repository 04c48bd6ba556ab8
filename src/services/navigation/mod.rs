//! Navigation state machine.
//!
//! Owns nothing: [`transition`] takes the current [`NavigationState`] and one
//! [`NavigationEvent`] and returns the next state. The host keeps the state
//! (one slot per picker instance).

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::CalendarError;
use crate::models::calendar_date::{is_supported_year, CalendarDate, MonthIndex};
use crate::models::view::ViewMode;
use crate::utils::date::{shift_months, shift_years};

/// Years moved by one Prev/Next step in the year view.
pub const YEAR_PAGE: i32 = 12;

/// What the picker is showing and what the user has chosen.
///
/// `reference_date` anchors the visible month/year/year-range and is
/// independent of `selected_date`, which may lie outside the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationState {
    pub reference_date: CalendarDate,
    pub view_mode: ViewMode,
    pub selected_date: Option<CalendarDate>,
}

impl NavigationState {
    /// State at mount time: viewing today's month in the day view.
    pub fn new(today: CalendarDate, selected_date: Option<CalendarDate>) -> Self {
        Self {
            reference_date: today,
            view_mode: ViewMode::Day,
            selected_date,
        }
    }
}

/// A discrete user interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationEvent {
    Prev,
    Next,
    /// Click on the header label: drill one level deeper
    HeaderClick,
    PickDay(CalendarDate),
    PickMonth(MonthIndex),
    PickYear(i32),
}

/// Apply `event` to `state`.
///
/// Prev/Next/HeaderClick never fail. A Prev/Next step that would leave the
/// supported year range leaves the reference date unchanged. `PickYear`
/// and `PickDay` fail for years outside the supported range, so a
/// display-only edge cell of the day grid (year 0 or 10000) cannot become
/// the selection.
///
/// Only `PickDay` changes `selected_date`.
pub fn transition(
    state: &NavigationState,
    event: NavigationEvent,
) -> Result<NavigationState, CalendarError> {
    let next = match event {
        NavigationEvent::Prev => NavigationState {
            reference_date: step(state, -1),
            ..*state
        },
        NavigationEvent::Next => NavigationState {
            reference_date: step(state, 1),
            ..*state
        },
        NavigationEvent::HeaderClick => NavigationState {
            view_mode: state.view_mode.drill_down().unwrap_or(state.view_mode),
            ..*state
        },
        NavigationEvent::PickDay(date) => {
            if !is_supported_year(date.year()) {
                return Err(CalendarError::YearOutOfRange(date.year()));
            }
            NavigationState {
                selected_date: Some(date),
                ..*state
            }
        }
        NavigationEvent::PickMonth(month) => NavigationState {
            reference_date: CalendarDate::from_ymd0(state.reference_date.year(), month.get(), 1)?,
            view_mode: ViewMode::Day,
            ..*state
        },
        NavigationEvent::PickYear(year) => {
            if !is_supported_year(year) {
                return Err(CalendarError::YearOutOfRange(year));
            }
            NavigationState {
                reference_date: CalendarDate::from_ymd0(year, state.reference_date.month0(), 1)?,
                view_mode: ViewMode::Month,
                ..*state
            }
        }
    };

    debug!(
        "{:?} in {:?} view: reference {} -> {}, view {:?}",
        event, state.view_mode, state.reference_date, next.reference_date, next.view_mode
    );
    Ok(next)
}

/// Move the reference date one page in `direction` (-1 or 1) for the
/// current view: a month, a year, or twelve years.
fn step(state: &NavigationState, direction: i32) -> CalendarDate {
    let reference = state.reference_date;
    let shifted = match state.view_mode {
        ViewMode::Day => shift_months(reference, direction),
        ViewMode::Month => shift_years(reference, direction),
        ViewMode::Year => shift_years(reference, direction * YEAR_PAGE),
    };
    shifted.unwrap_or_else(|| {
        warn!(
            "Navigation from {} in {:?} view leaves the supported range; ignoring",
            reference, state.view_mode
        );
        reference
    })
}
