//! Date picker widget.
//!
//! Renders a [`DatePicker`]'s header and grid with stock egui widgets and
//! feeds clicks back into it.

use crate::models::calendar_date::is_supported_year;
use crate::services::grid::{CellDescriptor, Grid};
use crate::services::labels::cell_label;
use crate::services::picker::DatePicker;

const TODAY_COLOR: egui::Color32 = egui::Color32::from_rgb(50, 150, 50);

/// What the user clicked this frame.
enum PickerAction {
    Prev,
    Next,
    Header,
    Today,
    Cell(CellDescriptor),
}

/// Render the picker and apply at most one interaction.
pub fn show_date_picker(ui: &mut egui::Ui, picker: &mut DatePicker) {
    let mut action = None;

    render_header(ui, picker, &mut action);
    ui.separator();
    render_grid(ui, picker, &mut action);
    ui.separator();

    ui.horizontal(|ui| {
        if ui.button("Today").clicked() {
            action = Some(PickerAction::Today);
        }
    });

    if let Some(action) = action {
        apply(picker, action);
    }
}

/// Previous/next arrows around the clickable header label.
fn render_header(ui: &mut egui::Ui, picker: &DatePicker, action: &mut Option<PickerAction>) {
    let header = picker.header_label();
    ui.horizontal(|ui| {
        if ui.small_button("◀").on_hover_text("Previous").clicked() {
            *action = Some(PickerAction::Prev);
        }

        if ui
            .selectable_label(false, egui::RichText::new(header).strong())
            .on_hover_text("Zoom out")
            .clicked()
        {
            *action = Some(PickerAction::Header);
        }

        if ui.small_button("▶").on_hover_text("Next").clicked() {
            *action = Some(PickerAction::Next);
        }
    });
}

/// Weekday row (day view only) and the cell rows.
fn render_grid(ui: &mut egui::Ui, picker: &DatePicker, action: &mut Option<PickerAction>) {
    let grid = picker.grid();
    let weekday_labels = picker.weekday_labels();
    let min_col_width = match grid {
        Grid::Day(_) => 24.0,
        Grid::Month(_) | Grid::Year(_) => 48.0,
    };

    egui::Grid::new("date_picker_grid")
        .num_columns(grid.view_mode().row_width())
        .spacing([4.0, 2.0])
        .min_col_width(min_col_width)
        .show(ui, |ui| {
            if let Grid::Day(_) = grid {
                for name in weekday_labels {
                    ui.label(egui::RichText::new(name).small().strong());
                }
                ui.end_row();
            }

            for row in grid.rows() {
                for cell in row {
                    let label = egui::SelectableLabel::new(is_selected(&cell), cell_text(&cell));
                    if ui.add_enabled(is_pickable(&cell), label).clicked() {
                        *action = Some(PickerAction::Cell(cell));
                    }
                }
                ui.end_row();
            }
        });
}

fn is_selected(cell: &CellDescriptor) -> bool {
    match cell {
        CellDescriptor::Day(day) => day.is_selected,
        CellDescriptor::Month(month) => month.is_selected,
        CellDescriptor::Year(year) => year.is_selected,
    }
}

/// Edge cells outside years 1..=9999 are shown but cannot be clicked.
fn is_pickable(cell: &CellDescriptor) -> bool {
    match cell {
        CellDescriptor::Day(day) => is_supported_year(day.date.year()),
        CellDescriptor::Month(month) => is_supported_year(month.year),
        CellDescriptor::Year(year) => is_supported_year(year.year),
    }
}

fn cell_text(cell: &CellDescriptor) -> egui::RichText {
    let text = egui::RichText::new(cell_label(cell));
    match cell {
        CellDescriptor::Day(day) if day.is_today => text.strong().color(TODAY_COLOR),
        CellDescriptor::Day(day) if day.is_outside_current_month => text.weak(),
        CellDescriptor::Year(year) if year.is_edge_of_range => text.weak(),
        _ => text,
    }
}

fn apply(picker: &mut DatePicker, action: PickerAction) {
    let result = match action {
        PickerAction::Prev => picker.prev(),
        PickerAction::Next => picker.next(),
        PickerAction::Header => picker.header_click(),
        PickerAction::Today => Ok(picker.go_to_today()),
        PickerAction::Cell(CellDescriptor::Day(day)) => picker.pick_day(day.date),
        PickerAction::Cell(CellDescriptor::Month(month)) => picker.pick_month(month.month.get()),
        PickerAction::Cell(CellDescriptor::Year(year)) => picker.pick_year(year.year),
    };

    if let Err(e) = result {
        log::error!("Date picker interaction failed: {}", e);
    }
}
