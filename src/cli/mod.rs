//! Command handlers and terminal rendering

pub mod convert;
pub mod rates;
pub mod setup;
pub mod ui;
