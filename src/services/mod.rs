// Services: grid building, navigation, labels, picker instance, settings

pub mod grid;
pub mod labels;
pub mod navigation;
pub mod picker;
pub mod settings;
