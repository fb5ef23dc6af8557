//! Event preprocessing for the week grid.
//! Multi-day events are split into one segment per visible day before
//! chips are built for them.

pub mod splitter;

pub use splitter::EventSplitter;
