pub mod lookahead;
pub mod menu;
pub mod simulate;

use std::path::Path;

use hb_core::{CalendarTable, HibernationConfig, WorldDate};

/// Parse a start date such as "spring 1" or "fall 9 2".
fn parse_date(text: &str) -> Result<WorldDate, String> {
    text.parse()
        .map_err(|e| format!("invalid start date '{text}': {e}"))
}

/// Load a calendar file, or the built-in calendar when none is given.
fn load_calendar(path: Option<&Path>) -> Result<CalendarTable, String> {
    match path {
        Some(path) => CalendarTable::load(path).map_err(|e| e.to_string()),
        None => Ok(CalendarTable::standard()),
    }
}

/// Load a hibernation config file, or the default presets when none is given.
fn load_config(path: Option<&Path>) -> Result<HibernationConfig, String> {
    match path {
        Some(path) => HibernationConfig::load(path).map_err(|e| e.to_string()),
        None => Ok(HibernationConfig::default()),
    }
}
