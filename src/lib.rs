//! Interactive country-name autocomplete for the terminal.
//!
//! Typing in the search field schedules a debounced lookup against a
//! REST Countries style API; the matching names drop down below the field
//! with the typed text emphasized.

pub mod app;
pub mod config;
pub mod debouncer;
pub mod error;
pub mod logging;
pub mod lookup;
pub mod search_input;
pub mod suggestion;
pub mod widgets;

#[cfg(test)]
mod test_utils;
