use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use hb_core::{CalendarSource, WorldDate, lookahead};

pub fn run(start: &str, calendar: Option<&Path>) -> Result<(), String> {
    let today = super::parse_date(start)?;
    let calendar = super::load_calendar(calendar)?;

    println!("  {} from {today}", "Lookahead".bold());
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Target", "Date", "Nights", "Details"]);

    let birthday = lookahead::next_birthday(&calendar, &today);
    table.add_row(row(
        "Next birthday",
        &today,
        birthday,
        birthday
            .map(|date| calendar.birthdays_on(&date).join(", "))
            .unwrap_or_else(|| "none within a year".to_string()),
    ));

    let festival = lookahead::next_festival(&calendar, &today);
    table.add_row(row(
        "Next festival",
        &today,
        festival,
        festival
            .and_then(|date| calendar.festival_on(&date))
            .unwrap_or_else(|| "none within two years".to_string()),
    ));

    let season = lookahead::next_season_start(&today);
    table.add_row(row(
        "Next season",
        &today,
        Some(season),
        season.season.to_string(),
    ));

    table.add_row(row(
        "Event limit",
        &today,
        Some(lookahead::next_event_limit(&today)),
        "latest wake-up when waiting for an event".to_string(),
    ));

    println!("{table}");
    Ok(())
}

fn row(label: &str, today: &WorldDate, target: Option<WorldDate>, details: String) -> Vec<String> {
    match target {
        Some(date) => vec![
            label.to_string(),
            date.to_string(),
            today.days_until(&date).to_string(),
            details,
        ],
        None => vec![
            label.to_string(),
            "--".to_string(),
            "--".to_string(),
            details,
        ],
    }
}
