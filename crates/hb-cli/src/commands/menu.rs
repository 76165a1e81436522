use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use hb_controller::menu::{self, SLEEP_HIBERNATE_FOR, SLEEP_HIBERNATE_UNTIL};
use hb_controller::{
    ControllerConfig, DialogueResponse, HibernationController, HookEvent, Host, QuestionKind,
    UntilChoice,
};
use hb_core::HibernateLength;

use crate::host::{SimOptions, SimulatedHost};

pub fn run(start: &str, calendar: Option<&Path>, config: Option<&Path>) -> Result<(), String> {
    let today = super::parse_date(start)?;
    let calendar = super::load_calendar(calendar)?;
    let config = super::load_config(config)?;

    let mut host = SimulatedHost::new(today, calendar, &SimOptions::default());
    let mut controller =
        HibernationController::new(ControllerConfig::default().with_hibernation(config));
    host.install_hooks(&mut controller);
    controller.handle(&mut host, HookEvent::SessionLoaded);
    controller.handle(&mut host, HookEvent::TouchSleepEntered);

    println!("  {} on {today}", "Sleep Menu".bold().underline());
    let responses = controller.sleep_responses(
        &host,
        vec![
            DialogueResponse::new("Yes", "Go to sleep for the night?  Yes"),
            DialogueResponse::new("No", "No"),
        ],
    );
    for response in &responses {
        println!("  - {}", response.label);
    }
    println!();

    if !controller.on_dialogue_answer(&mut host, SLEEP_HIBERNATE_FOR)
        || !controller.on_dialogue_answer(&mut host, SLEEP_HIBERNATE_UNTIL)
    {
        return Err("hibernation questions are unavailable".into());
    }
    controller.handle(&mut host, HookEvent::TouchSleepExited);

    for question in host.questions() {
        println!("  {}", question.prompt.bold().underline());
        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["Option", "Key", "Nights", "Wakes on"]);
        for option in &question.options {
            let (nights, wakes) = match question.kind {
                QuestionKind::HibernateFor => length_target(&host, &option.key),
                QuestionKind::HibernateUntil => until_target(&host, &option.key),
            };
            table.add_row(vec![option.label.clone(), option.key.clone(), nights, wakes]);
        }
        println!("{table}");
        println!();
    }
    Ok(())
}

fn length_target(host: &SimulatedHost, key: &str) -> (String, String) {
    let today = host.current_date();
    match HibernateLength::parse_or_none(key).map(|length| length.night_count()) {
        Some(nights) => match nights.finite() {
            Some(n) => (n.to_string(), today.add_days(n).to_string()),
            None => (nights.to_string(), "when woken".to_string()),
        },
        None => ("--".to_string(), "--".to_string()),
    }
}

fn until_target(host: &SimulatedHost, key: &str) -> (String, String) {
    let today = host.current_date();
    match UntilChoice::from_key(key).and_then(|choice| menu::resolve_until(host, choice)) {
        Some((date, trigger)) => {
            let nights = today.days_until(&date).to_string();
            if trigger.is_set() {
                (format!("up to {nights}"), format!("{date} at the latest"))
            } else {
                (nights, date.to_string())
            }
        }
        None => ("--".to_string(), "--".to_string()),
    }
}
