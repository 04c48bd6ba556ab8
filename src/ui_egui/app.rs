use std::cell::RefCell;
use std::rc::Rc;

use crate::error::CalendarError;
use crate::models::calendar_date::CalendarDate;
use crate::models::settings::PickerSettings;
use crate::services::picker::DatePicker;

use super::date_picker::show_date_picker;

/// Demo host: one picker plus a readout of the last selected date.
pub struct PickerApp {
    picker: DatePicker,
    last_selected: Rc<RefCell<Option<CalendarDate>>>,
}

impl PickerApp {
    pub fn new(settings: PickerSettings) -> Result<Self, CalendarError> {
        let last_selected = Rc::new(RefCell::new(settings.initial_date));
        let sink = Rc::clone(&last_selected);
        let picker = DatePicker::new(settings)?.on_select(move |date| {
            *sink.borrow_mut() = Some(date);
        });

        Ok(Self {
            picker,
            last_selected,
        })
    }
}

impl eframe::App for PickerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.set_max_width(260.0);
            show_date_picker(ui, &mut self.picker);

            let readout = match *self.last_selected.borrow() {
                Some(date) => format!("Selected: {}", date.as_naive().format("%A, %B %-d, %Y")),
                None => "No date selected".to_string(),
            };
            ui.label(readout);
        });
    }
}
