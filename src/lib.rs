// Event Chips Library
// Rendering and hit-testing of event chips on a week-view grid

pub mod models;
pub mod services;
pub mod ui_egui;
pub mod utils;
