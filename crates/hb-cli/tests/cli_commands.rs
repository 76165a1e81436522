//! Integration tests for the hb CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn hibernate() -> Command {
    Command::cargo_bin("hibernate").unwrap()
}

/// A temp directory with a small calendar and a config.
fn data_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("calendar.json"),
        r#"{
    "birthdays": [
        { "name": "Odile", "season": "summer", "day": 2 }
    ],
    "festivals": [
        { "name": "Lantern Night", "season": "spring", "day": 6 }
    ]
}
"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("config.json"),
        r#"{ "lengthOptions": ["2 nights", "10 nights", "bogus", "forever"] }"#,
    )
    .unwrap();
    dir
}

// ---------------------------------------------------------------------------
// simulate
// ---------------------------------------------------------------------------

#[test]
fn simulate_fixed_nights() {
    hibernate()
        .args(["simulate", "--nights", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Spring 4, Year 1"))
        .stdout(predicate::str::contains("3 nights skipped"))
        .stdout(predicate::str::contains("finished"));
}

#[test]
fn simulate_length_preset() {
    hibernate()
        .args(["simulate", "--length", "1 week", "--start", "fall 25"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Winter 4, Year 1"))
        .stdout(predicate::str::contains("7 nights skipped"));
}

#[test]
fn simulate_until_festival_uses_calendar_file() {
    let dir = data_dir();
    hibernate()
        .args(["simulate", "--until", "festival", "--calendar"])
        .arg(dir.path().join("calendar.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Spring 6, Year 1"))
        .stdout(predicate::str::contains("5 nights skipped"));
}

#[test]
fn simulate_until_event_wakes_after_skipped_event() {
    hibernate()
        .args(["simulate", "--until", "event", "--event-on", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Spring 6, Year 1 (event)"))
        .stdout(predicate::str::contains("woke early"));
}

#[test]
fn simulate_wake_on_day() {
    hibernate()
        .args(["simulate", "--nights", "20", "--wake-on", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("4 nights skipped"))
        .stdout(predicate::str::contains("woke early"));
}

#[test]
fn simulate_forever_until_escape() {
    hibernate()
        .args(["simulate", "--forever", "--escape-on", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Spring 6, Year 1"))
        .stdout(predicate::str::contains("woken by the player"));
}

#[test]
fn simulate_forever_stops_at_max_days() {
    hibernate()
        .args(["simulate", "--forever", "--max-days", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("still hibernating after 10 days"));
}

#[test]
fn simulate_with_blocking_days_still_finishes() {
    hibernate()
        .args([
            "simulate",
            "--nights",
            "14",
            "--block-chance",
            "0.5",
            "--seed",
            "7",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("14 nights skipped"))
        .stdout(predicate::str::contains("finished"));
}

#[test]
fn simulate_verbose_shows_event_log() {
    hibernate()
        .args(["simulate", "--nights", "2", "--verbose"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Event Log"))
        .stdout(predicate::str::contains("hibernating for 2 nights"))
        .stdout(predicate::str::contains("hibernation finished"));
}

#[test]
fn simulate_disabled_hook_is_reported() {
    hibernate()
        .args(["simulate", "--nights", "3", "--disable-hook", "end-of-night"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Disabled hooks:"))
        .stdout(predicate::str::contains("end-of-night"));
}

#[test]
fn simulate_requires_a_length() {
    hibernate()
        .args(["simulate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("choose one of"));
}

#[test]
fn simulate_rejects_two_lengths() {
    hibernate()
        .args(["simulate", "--nights", "3", "--forever"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("mutually exclusive"));
}

#[test]
fn simulate_zero_nights_fails() {
    hibernate()
        .args(["simulate", "--nights", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nothing to hibernate"));
}

#[test]
fn simulate_bad_start_date() {
    hibernate()
        .args(["simulate", "--nights", "3", "--start", "spring 40"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid start date"));
}

#[test]
fn simulate_rejects_year_past_the_calendar() {
    hibernate()
        .args(["simulate", "--nights", "3", "--start", "spring 1 40000000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("last supported year"));
}

#[test]
fn simulate_far_day_numbers_run_to_completion() {
    hibernate()
        .args([
            "simulate",
            "--nights",
            "2",
            "--wake-on",
            "4294967295",
            "--escape-on",
            "4294967295",
            "--event-on",
            "4294967295",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 nights skipped"))
        .stdout(predicate::str::contains("finished"));
}

#[test]
fn simulate_bad_block_chance() {
    hibernate()
        .args(["simulate", "--nights", "3", "--block-chance", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--block-chance"));
}

#[test]
fn simulate_unknown_hook() {
    hibernate()
        .args(["simulate", "--nights", "3", "--disable-hook", "teleport"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown hook 'teleport'"));
}

#[test]
fn simulate_until_birthday_with_empty_calendar_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.json");
    fs::write(&path, "{}").unwrap();
    hibernate()
        .args(["simulate", "--until", "birthday", "--calendar"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no upcoming Birthday"));
}

// ---------------------------------------------------------------------------
// lookahead
// ---------------------------------------------------------------------------

#[test]
fn lookahead_builtin_calendar() {
    hibernate()
        .args(["lookahead", "--start", "spring 1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Spring 10, Year 1"))
        .stdout(predicate::str::contains("Marlow, Tamsin"))
        .stdout(predicate::str::contains("Egg Festival"))
        .stdout(predicate::str::contains("Summer 1, Year 1"))
        .stdout(predicate::str::contains("Spring 1, Year 2"));
}

#[test]
fn lookahead_custom_calendar() {
    let dir = data_dir();
    hibernate()
        .args(["lookahead", "--start", "summer 3", "--calendar"])
        .arg(dir.path().join("calendar.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Odile"))
        .stdout(predicate::str::contains("Summer 2, Year 2"))
        .stdout(predicate::str::contains("Lantern Night"));
}

#[test]
fn lookahead_from_last_supported_year() {
    hibernate()
        .args(["lookahead", "--start", "winter 28 38347922"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Spring 1, Year 38347923"));
}

#[test]
fn lookahead_rejects_year_past_the_calendar() {
    hibernate()
        .args(["lookahead", "--start", "spring 1 40000000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("last supported year"));
}

#[test]
fn lookahead_missing_calendar_file() {
    hibernate()
        .args(["lookahead", "--calendar", "/nonexistent/calendar.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

// ---------------------------------------------------------------------------
// menu
// ---------------------------------------------------------------------------

#[test]
fn menu_default_presets() {
    hibernate()
        .args(["menu"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hibernate for..."))
        .stdout(predicate::str::contains("Hibernate until..."))
        .stdout(predicate::str::contains("2 weeks"))
        .stdout(predicate::str::contains("Start of Summer"))
        .stdout(predicate::str::contains("Next event"));
}

#[test]
fn menu_config_skips_invalid_presets() {
    let dir = data_dir();
    hibernate()
        .args(["menu", "--config"])
        .arg(dir.path().join("config.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("10 nights"))
        .stdout(predicate::str::contains("bogus").not());
}
