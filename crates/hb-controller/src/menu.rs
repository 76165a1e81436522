//! The sleep-dialogue additions and the two hibernation questions.

use hb_core::{HibernateLength, WorldDate, lookahead};

use crate::host::Host;
use crate::text::Text;
use crate::trigger::WakeTrigger;

/// Dialogue answer that opens the "Hibernate For" question.
pub const SLEEP_HIBERNATE_FOR: &str = "Sleep_HibernateFor";
/// Dialogue answer that opens the "Hibernate Until" question.
pub const SLEEP_HIBERNATE_UNTIL: &str = "Sleep_HibernateUntil";
/// Answer key of every question's cancel option.
pub const CANCEL: &str = "Cancel";

/// A response in a host dialogue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogueResponse {
    /// Answer key reported back by the host.
    pub key: String,
    /// Text shown to the player.
    pub label: String,
}

impl DialogueResponse {
    /// Build a response.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// Which hibernation question is being asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    /// Pick a duration preset.
    HibernateFor,
    /// Pick a target date or event.
    HibernateUntil,
}

/// A question dialogue for the host to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// Which question this is.
    pub kind: QuestionKind,
    /// Prompt text.
    pub prompt: String,
    /// Options in display order. The last one is always cancel.
    pub options: Vec<DialogueResponse>,
}

/// Options of the "Hibernate Until" question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UntilChoice {
    /// The next day with a villager birthday.
    Birthday,
    /// The next festival day.
    Festival,
    /// Day 1 of the next season.
    NextSeason,
    /// Until a scripted event is interrupted, for at most a year.
    NextEvent,
    /// Do nothing.
    Cancel,
}

impl UntilChoice {
    /// Answer key for this choice.
    pub fn key(self) -> &'static str {
        match self {
            UntilChoice::Birthday => "Birthday",
            UntilChoice::Festival => "Festival",
            UntilChoice::NextSeason => "NextSeason",
            UntilChoice::NextEvent => "NextEvent",
            UntilChoice::Cancel => CANCEL,
        }
    }

    /// Choice for an answer key.
    pub fn from_key(key: &str) -> Option<Self> {
        [
            UntilChoice::Birthday,
            UntilChoice::Festival,
            UntilChoice::NextSeason,
            UntilChoice::NextEvent,
            UntilChoice::Cancel,
        ]
        .into_iter()
        .find(|choice| choice.key() == key)
    }
}

/// Insert the two hibernation responses between the host's yes and no.
///
/// Leaves the list alone unless it is exactly a yes/no pair.
pub fn inject_sleep_responses<H: Host + ?Sized>(
    host: &H,
    responses: Vec<DialogueResponse>,
) -> Vec<DialogueResponse> {
    let [yes, no]: [DialogueResponse; 2] = match responses.try_into() {
        Ok(pair) => pair,
        Err(unchanged) => return unchanged,
    };
    vec![
        yes,
        DialogueResponse::new("HibernateFor", host.localize(&Text::HibernateFor)),
        DialogueResponse::new("HibernateUntil", host.localize(&Text::HibernateUntil)),
        no,
    ]
}

fn cancel_option<H: Host + ?Sized>(host: &H) -> DialogueResponse {
    DialogueResponse::new(CANCEL, host.localize(&Text::Cancel))
}

/// The "Hibernate For" question: one option per preset, then cancel.
pub fn hibernate_for_question<H: Host + ?Sized>(
    host: &H,
    lengths: &[HibernateLength],
) -> Question {
    let mut options: Vec<DialogueResponse> = lengths
        .iter()
        .map(|length| {
            DialogueResponse::new(length.to_string(), host.localize(&Text::Length(*length)))
        })
        .collect();
    options.push(cancel_option(host));
    Question {
        kind: QuestionKind::HibernateFor,
        prompt: host.localize(&Text::HibernateFor),
        options,
    }
}

/// The "Hibernate Until" question. Birthday and festival options are left out
/// when nothing is found within their horizon.
pub fn hibernate_until_question<H: Host + ?Sized>(host: &H) -> Question {
    let today = host.current_date();
    let mut options = Vec::with_capacity(5);

    if let Some(date) = lookahead::next_birthday(host, &today) {
        let names = host
            .birthdays_on(&date)
            .iter()
            .map(|name| host.display_name(name))
            .collect();
        options.push(DialogueResponse::new(
            UntilChoice::Birthday.key(),
            host.localize(&Text::NextBirthday(names)),
        ));
    }
    if let Some(name) =
        lookahead::next_festival(host, &today).and_then(|date| host.festival_on(&date))
    {
        options.push(DialogueResponse::new(
            UntilChoice::Festival.key(),
            host.localize(&Text::NextFestival(name)),
        ));
    }
    options.push(DialogueResponse::new(
        UntilChoice::NextSeason.key(),
        host.localize(&Text::NextSeason(today.season.next())),
    ));
    options.push(DialogueResponse::new(
        UntilChoice::NextEvent.key(),
        host.localize(&Text::NextEvent),
    ));
    options.push(cancel_option(host));

    Question {
        kind: QuestionKind::HibernateUntil,
        prompt: host.localize(&Text::HibernateUntil),
        options,
    }
}

/// Target date and trigger for a "Hibernate Until" choice, recomputed from
/// today's date. `None` for cancel or when nothing is found.
pub fn resolve_until<H: Host + ?Sized>(
    host: &H,
    choice: UntilChoice,
) -> Option<(WorldDate, WakeTrigger)> {
    let today = host.current_date();
    match choice {
        UntilChoice::Birthday => {
            lookahead::next_birthday(host, &today).map(|date| (date, WakeTrigger::None))
        }
        UntilChoice::Festival => {
            lookahead::next_festival(host, &today).map(|date| (date, WakeTrigger::None))
        }
        UntilChoice::NextSeason => Some((lookahead::next_season_start(&today), WakeTrigger::None)),
        UntilChoice::NextEvent => Some((
            lookahead::next_event_limit(&today),
            WakeTrigger::EventLatch,
        )),
        UntilChoice::Cancel => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedHost;
    use hb_core::{CalendarTable, Season};

    fn host_on(season: Season, day: u32, calendar: CalendarTable) -> ScriptedHost {
        ScriptedHost::new(WorldDate::new(1, season, day).unwrap(), calendar)
    }

    #[test]
    fn injects_between_yes_and_no() {
        let host = host_on(Season::Spring, 1, CalendarTable::new());
        let responses = inject_sleep_responses(
            &host,
            vec![DialogueResponse::new("Yes", "Yes"), DialogueResponse::new("No", "No")],
        );
        let keys: Vec<&str> = responses.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["Yes", "HibernateFor", "HibernateUntil", "No"]);
    }

    #[test]
    fn leaves_other_response_lists_alone() {
        let host = host_on(Season::Spring, 1, CalendarTable::new());
        let single = vec![DialogueResponse::new("Ok", "Ok")];
        assert_eq!(inject_sleep_responses(&host, single.clone()), single);
    }

    #[test]
    fn for_question_lists_presets_then_cancel() {
        let host = host_on(Season::Spring, 1, CalendarTable::new());
        let lengths = vec![
            HibernateLength::nights(3).unwrap(),
            HibernateLength::forever(),
        ];
        let question = hibernate_for_question(&host, &lengths);
        let keys: Vec<&str> = question.options.iter().map(|o| o.key.as_str()).collect();
        assert_eq!(keys, vec!["3 nights", "forever", "Cancel"]);
        assert_eq!(question.kind, QuestionKind::HibernateFor);
    }

    #[test]
    fn until_question_omits_missing_lookups() {
        let host = host_on(Season::Spring, 1, CalendarTable::new());
        let question = hibernate_until_question(&host);
        let keys: Vec<&str> = question.options.iter().map(|o| o.key.as_str()).collect();
        assert_eq!(keys, vec!["NextSeason", "NextEvent", "Cancel"]);
        assert_eq!(question.options[0].label, "Start of Summer");
    }

    #[test]
    fn until_question_names_villagers_and_festival() {
        let host = host_on(Season::Spring, 1, CalendarTable::standard());
        let question = hibernate_until_question(&host);
        assert_eq!(question.options.len(), 5);
        assert_eq!(question.options[0].label, "Marlow, Tamsin's birthday");
        assert_eq!(question.options[1].label, "Egg Festival");
    }

    #[test]
    fn next_event_uses_the_latch_and_a_year_limit() {
        let host = host_on(Season::Fall, 5, CalendarTable::new());
        let (date, trigger) = resolve_until(&host, UntilChoice::NextEvent).unwrap();
        assert_eq!(date, WorldDate::new(2, Season::Fall, 5).unwrap());
        assert_eq!(trigger, WakeTrigger::EventLatch);
        assert!(resolve_until(&host, UntilChoice::Cancel).is_none());
        assert!(resolve_until(&host, UntilChoice::Birthday).is_none());
    }

    #[test]
    fn choice_keys_round_trip() {
        for key in ["Birthday", "Festival", "NextSeason", "NextEvent", "Cancel"] {
            assert_eq!(UntilChoice::from_key(key).unwrap().key(), key);
        }
        assert!(UntilChoice::from_key("Tomorrow").is_none());
    }
}
