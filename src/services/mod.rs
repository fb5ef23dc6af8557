// Service module exports

pub mod chips;
pub mod event;
pub mod settings;
