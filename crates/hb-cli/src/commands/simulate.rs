use std::path::PathBuf;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use hb_controller::menu::SLEEP_HIBERNATE_UNTIL;
use hb_controller::{
    ControllerConfig, ControllerEventKind, HibernationController, HibernationRequest, HookEvent,
    HookPoint, Phase, QuestionKind, UntilChoice, WakeTrigger,
};
use hb_core::{HibernateLength, Nights, WorldDate};

use crate::UntilTarget;
use crate::host::{MAX_FRAMES_PER_DAY, NightReport, SimOptions, SimulatedHost};

/// How the player picked the hibernation length.
#[derive(Debug, Clone, Copy)]
pub enum Selection {
    Nights(Nights),
    Length(HibernateLength),
    Until(UntilTarget),
}

impl Selection {
    pub fn from_args(
        nights: Option<u32>,
        length: Option<&str>,
        forever: bool,
        until: Option<UntilTarget>,
    ) -> Result<Self, String> {
        let mut picked = Vec::new();
        if let Some(n) = nights {
            picked.push(Selection::Nights(Nights::Finite(n)));
        }
        if let Some(text) = length {
            let length = text
                .parse::<HibernateLength>()
                .map_err(|e| e.to_string())?;
            picked.push(Selection::Length(length));
        }
        if forever {
            picked.push(Selection::Nights(Nights::Infinite));
        }
        if let Some(target) = until {
            picked.push(Selection::Until(target));
        }
        match picked.as_slice() {
            [selection] => Ok(*selection),
            [] => Err("choose one of --nights, --length, --forever or --until".into()),
            _ => Err("--nights, --length, --forever and --until are mutually exclusive".into()),
        }
    }
}

pub struct SimulateArgs {
    pub selection: Selection,
    pub start: String,
    pub calendar: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub seed: u64,
    pub block_chance: f64,
    pub event_on: Vec<u32>,
    pub wake_on: Option<u32>,
    pub escape_on: Option<u32>,
    pub disable_hook: Vec<String>,
    pub max_days: u32,
    pub verbose: bool,
}

pub fn run(args: &SimulateArgs) -> Result<(), String> {
    if !(0.0..=1.0).contains(&args.block_chance) {
        return Err(format!(
            "--block-chance must be between 0 and 1, got {}",
            args.block_chance
        ));
    }
    let start = super::parse_date(&args.start)?;
    let calendar = super::load_calendar(args.calendar.as_deref())?;
    let config = super::load_config(args.config.as_deref())?;
    let disabled_hooks = args
        .disable_hook
        .iter()
        .map(|name| parse_hook_point(name))
        .collect::<Result<Vec<_>, _>>()?;

    let options = SimOptions {
        seed: args.seed,
        block_chance: args.block_chance,
        event_days: args.event_on.clone(),
        escape_day: args.escape_on,
        disabled_hooks,
    };
    let mut host = SimulatedHost::new(start, calendar, &options);
    let mut controller = HibernationController::new(
        ControllerConfig::default()
            .with_hibernation(config)
            .with_max_events(10_000),
    );
    host.install_hooks(&mut controller);
    controller.handle(&mut host, HookEvent::SessionLoaded);

    // The player walks onto the bed and picks an option.
    controller.handle(&mut host, HookEvent::TouchSleepEntered);
    let trigger = args.wake_on.map_or(WakeTrigger::None, |day| {
        WakeTrigger::FixedNight(start.total_days().saturating_add(day))
    });
    match args.selection {
        Selection::Nights(nights) => controller
            .request_hibernation(&mut host, HibernationRequest::new(nights).with_trigger(trigger))
            .map_err(|e| format!("host refused to start hibernating: {e}"))?,
        Selection::Length(length) => controller
            .request_hibernation(
                &mut host,
                HibernationRequest::new(length.night_count()).with_trigger(trigger),
            )
            .map_err(|e| format!("host refused to start hibernating: {e}"))?,
        Selection::Until(target) => {
            if args.wake_on.is_some() {
                return Err("--wake-on cannot be combined with --until".into());
            }
            if !controller.on_dialogue_answer(&mut host, SLEEP_HIBERNATE_UNTIL) {
                return Err("the Hibernate Until question is unavailable".into());
            }
            controller.on_question_answered(
                &mut host,
                QuestionKind::HibernateUntil,
                until_choice(target).key(),
            );
        }
    }
    controller.handle(&mut host, HookEvent::TouchSleepExited);

    if controller.phase() == Phase::Idle {
        return Err(match args.selection {
            Selection::Until(target) => format!("no upcoming {target:?} found to hibernate until"),
            _ => "nothing to hibernate for: the length is zero".into(),
        });
    }
    let requested = controller.nights_remaining();

    let mut reports = Vec::new();
    while host.advance_requested() && reports.len() < args.max_days as usize {
        let report = host.run_night(&mut controller);
        log::debug!(
            "{}: {} nights left after {} frames",
            report.date,
            report.nights_left,
            report.frames
        );
        reports.push(report);
    }

    print_summary(&controller, &reports, start, requested, args);
    if args.verbose {
        print_event_log(&controller);
    }
    print_days(&reports);
    Ok(())
}

fn until_choice(target: UntilTarget) -> UntilChoice {
    match target {
        UntilTarget::Birthday => UntilChoice::Birthday,
        UntilTarget::Festival => UntilChoice::Festival,
        UntilTarget::Season => UntilChoice::NextSeason,
        UntilTarget::Event => UntilChoice::NextEvent,
    }
}

fn parse_hook_point(name: &str) -> Result<HookPoint, String> {
    HookPoint::ALL
        .into_iter()
        .find(|point| point.to_string() == name)
        .ok_or_else(|| {
            let known: Vec<String> = HookPoint::ALL.iter().map(ToString::to_string).collect();
            format!("unknown hook '{name}' (expected one of: {})", known.join(", "))
        })
}

fn print_summary(
    controller: &HibernationController,
    reports: &[NightReport],
    start: WorldDate,
    requested: Nights,
    args: &SimulateArgs,
) {
    let end = reports.last().map_or(start, |r| r.date);
    let count = |pred: fn(&ControllerEventKind) -> bool| {
        controller
            .events()
            .events()
            .iter()
            .filter(|e| pred(&e.kind))
            .count()
    };

    println!(
        "  {} {start} -> {end} {}",
        "Hibernation".bold(),
        format!("(requested {requested} nights, seed={})", args.seed).dimmed()
    );
    println!(
        "  {} nights skipped, {} windows blocked, {} fades skipped",
        reports.len(),
        count(|k| matches!(k, ControllerEventKind::PostponementBlocked { .. })),
        count(|k| matches!(k, ControllerEventKind::PostponementResolved { instant: true })),
    );

    let disabled: Vec<String> = controller
        .hooks()
        .disabled()
        .map(|point| point.to_string())
        .collect();
    if !disabled.is_empty() {
        println!("  {} {}", "Disabled hooks:".yellow(), disabled.join(", "));
    }

    let outcome = if controller.phase() != Phase::Idle {
        format!("still hibernating after {} days", reports.len())
            .yellow()
            .bold()
    } else if count(|k| matches!(k, ControllerEventKind::Truncated { .. })) > 0 {
        "woken by the player".cyan().bold()
    } else if count(|k| matches!(k, ControllerEventKind::EarlyWake)) > 0 {
        "woke early".cyan().bold()
    } else {
        "finished".green().bold()
    };
    println!("  Outcome: {outcome}");
    println!();
}

fn print_event_log(controller: &HibernationController) {
    println!("  {}", "Event Log".bold().underline());
    println!();
    for event in controller.events().events() {
        let day_label = format!("[{:>20}]", WorldDate::from_total_days(event.day)).dimmed();
        let desc = colorize_event(&event.kind, &event.description);
        println!("  {day_label} {desc}");
    }
    if controller.events().is_empty() {
        println!("  {}", "(no events)".dimmed());
    }
    println!();
}

fn print_days(reports: &[NightReport]) {
    println!("  {}", "Days".bold().underline());
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "Day",
        "Date",
        "Nights left",
        "Frames",
        "Blocked by",
        "Save menu",
        "Fade",
        "Overlay",
    ]);

    for (index, report) in reports.iter().enumerate() {
        let mut date = report.date.to_string();
        if report.event_skipped {
            date.push_str(" (event)");
        }
        let frames = if report.frames >= MAX_FRAMES_PER_DAY {
            format!("{} (gave up)", report.frames).red().to_string()
        } else {
            report.frames.to_string()
        };
        table.add_row(vec![
            (index + 1).to_string(),
            date,
            report.nights_left.to_string(),
            frames,
            report
                .blocked_by
                .map(|(reason, frames)| format!("{reason:?} ({frames} frames)"))
                .unwrap_or_else(|| "--".to_string()),
            if report.save_menu_shown { "shown" } else { "skipped" }.to_string(),
            if report.fade_skipped { "instant" } else { "faded" }.to_string(),
            report.status.clone().unwrap_or_else(|| "--".to_string()),
        ]);
    }

    println!("{table}");
    println!();
}

fn colorize_event(kind: &ControllerEventKind, description: &str) -> colored::ColoredString {
    match kind {
        ControllerEventKind::HibernationStarted { .. } => description.green().bold(),
        ControllerEventKind::HibernationFinished => description.green(),
        ControllerEventKind::NightPassed { .. } => description.normal(),
        ControllerEventKind::PostponementOpened
        | ControllerEventKind::PostponementResolved { .. } => description.dimmed(),
        ControllerEventKind::PostponementBlocked { .. } => description.yellow(),
        ControllerEventKind::EarlyWake
        | ControllerEventKind::Truncated { .. }
        | ControllerEventKind::EventInterrupted => description.cyan(),
        ControllerEventKind::EndOfNightMenuSuppressed => description.blue(),
        ControllerEventKind::HostCallFailed { .. } => description.red(),
    }
}
