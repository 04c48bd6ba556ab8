// Property-based tests for grid building and navigation
// Checks layout invariants and round-trips over random reference dates

use proptest::prelude::*;
use rust_date_picker::services::grid::{build_day_grid, build_month_grid, build_year_grid};
use rust_date_picker::{
    build_grid, transition, CalendarDate, NavigationEvent, NavigationState, ViewMode,
};

fn any_date() -> impl Strategy<Value = CalendarDate> {
    (1900..2200i32, 1..=12u32, 1..=31u32).prop_map(|(year, month, day)| {
        let max_day = match month {
            2 if (year % 4 == 0 && year % 100 != 0) || year % 400 == 0 => 29,
            2 => 28,
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        };
        CalendarDate::from_ymd(year, month, day.min(max_day)).unwrap()
    })
}

fn any_mode() -> impl Strategy<Value = ViewMode> {
    prop_oneof![Just(ViewMode::Day), Just(ViewMode::Month), Just(ViewMode::Year)]
}

proptest! {
    /// Property: the day grid has 42 consecutive days starting on the
    /// configured week start on/before the 1st of the month
    #[test]
    fn prop_day_grid_shape(reference in any_date(), first_day_of_week in 0..7u8) {
        let grid = build_day_grid(reference, None, reference, first_day_of_week);
        let cells = grid.cells();
        prop_assert_eq!(cells.len(), 42);

        let first = cells[0].date;
        prop_assert_eq!(
            first.weekday().num_days_from_sunday(),
            u32::from(first_day_of_week)
        );
        let first_of_month = CalendarDate::from_ymd(reference.year(), reference.month(), 1).unwrap();
        prop_assert!(first <= first_of_month);
        prop_assert!((first_of_month.as_naive() - first.as_naive()).num_days() < 7);

        for pair in cells.windows(2) {
            prop_assert_eq!((pair[1].date.as_naive() - pair[0].date.as_naive()).num_days(), 1);
        }
        for cell in cells {
            prop_assert_eq!(cell.is_outside_current_month, !cell.date.is_same_month(&reference));
        }
    }

    /// Property: the month grid lists January..December of the reference year
    #[test]
    fn prop_month_grid_shape(reference in any_date(), selected in any_date()) {
        let grid = build_month_grid(reference, Some(selected));
        let months: Vec<u32> = grid.cells().iter().map(|c| c.month.get()).collect();
        prop_assert_eq!(months, (0..12).collect::<Vec<_>>());
        prop_assert!(grid.cells().iter().all(|c| c.year == reference.year()));

        let highlighted = grid.cells().iter().filter(|c| c.is_selected).count();
        let expected = usize::from(selected.year() == reference.year());
        prop_assert_eq!(highlighted, expected);
    }

    /// Property: the year grid spans Y-4..=Y+7 with only the ends flagged
    #[test]
    fn prop_year_grid_shape(reference in any_date()) {
        let grid = build_year_grid(reference);
        let y = reference.year();
        let years: Vec<i32> = grid.cells().iter().map(|c| c.year).collect();
        prop_assert_eq!(years, (y - 4..=y + 7).collect::<Vec<_>>());

        for (idx, cell) in grid.cells().iter().enumerate() {
            prop_assert_eq!(cell.is_edge_of_range, idx == 0 || idx == 11);
            prop_assert_eq!(cell.is_selected, cell.year == y);
        }
    }

    /// Property: identical inputs give identical grids
    #[test]
    fn prop_build_grid_is_pure(
        reference in any_date(),
        mode in any_mode(),
        selected in proptest::option::of(any_date()),
        today in any_date(),
    ) {
        let first = build_grid(reference, mode, selected, today, 0);
        let second = build_grid(reference, mode, selected, today, 0);
        prop_assert_eq!(first.view_mode(), mode);
        prop_assert_eq!(first, second);
    }

    /// Property: Prev then Next returns to the same month (Day), year (Month)
    /// or year range (Year); the day may be clamped
    #[test]
    fn prop_prev_next_round_trip(reference in any_date(), mode in any_mode()) {
        let start = NavigationState { reference_date: reference, view_mode: mode, selected_date: None };
        let back = transition(&start, NavigationEvent::Prev).unwrap();
        let forth = transition(&back, NavigationEvent::Next).unwrap();

        prop_assert_eq!(forth.view_mode, mode);
        prop_assert_eq!(forth.reference_date.year(), reference.year());
        prop_assert_eq!(forth.reference_date.month0(), reference.month0());
        prop_assert!(forth.reference_date.day() <= reference.day());
        if reference.day() <= 28 {
            prop_assert_eq!(forth.reference_date, reference);
        }
    }

    /// Property: only PickDay changes the selection
    #[test]
    fn prop_selection_only_changes_on_pick_day(
        reference in any_date(),
        mode in any_mode(),
        selected in proptest::option::of(any_date()),
        month in 0..12u32,
        year in 1900..2200i32,
    ) {
        let start = NavigationState { reference_date: reference, view_mode: mode, selected_date: selected };
        let events = [
            NavigationEvent::Prev,
            NavigationEvent::Next,
            NavigationEvent::HeaderClick,
            NavigationEvent::PickMonth(month.try_into().unwrap()),
            NavigationEvent::PickYear(year),
        ];
        for event in events {
            let next = transition(&start, event).unwrap();
            prop_assert_eq!(next.selected_date, selected);
        }
    }
}
