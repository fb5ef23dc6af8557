// egui rendering layer: chip painting, text fitting, resolved styles and
// the demo week view

pub mod app;
pub mod chip;
pub mod fonts;
pub mod theme;

pub use app::ChipDemoApp;
pub use chip::EventChip;
pub use theme::ChipStyle;
