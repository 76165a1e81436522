use hb_core::{HibernateLength, Season, WorldDate};

/// Every player-facing string the controller produces. Hosts translate these
/// through [`crate::Host::localize`]; [`Text::english`] is the fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Text {
    /// The date line at the top of the overlay.
    DateLine(WorldDate),
    /// Status when the last night is over.
    WakingUp,
    /// Status for an endless hibernation.
    Forever,
    /// Status with an exact count.
    NightsLeft(u32),
    /// Status with an upper bound (an early-wake trigger is set).
    NightsLeftUpTo(u32),
    /// Hint shown under the status line.
    EscapeToWake,
    /// "Hibernate For" response and question prompt.
    HibernateFor,
    /// "Hibernate Until" response and question prompt.
    HibernateUntil,
    /// Cancel option.
    Cancel,
    /// A duration preset.
    Length(HibernateLength),
    /// Next-birthday option, with the display names of the villagers.
    NextBirthday(Vec<String>),
    /// Next-festival option, with the festival name.
    NextFestival(String),
    /// Next-season option, with the season.
    NextSeason(Season),
    /// Next-event option.
    NextEvent,
}

impl Text {
    /// English rendering.
    pub fn english(&self) -> String {
        match self {
            Text::DateLine(date) => date.to_string(),
            Text::WakingUp => "Waking up...".to_string(),
            Text::Forever => "Hibernating forever".to_string(),
            Text::NightsLeft(1) => "1 night left".to_string(),
            Text::NightsLeft(n) => format!("{n} nights left"),
            Text::NightsLeftUpTo(n) => format!("Up to {n} nights left"),
            Text::EscapeToWake => "Press Escape to wake up".to_string(),
            Text::HibernateFor => "Hibernate for...".to_string(),
            Text::HibernateUntil => "Hibernate until...".to_string(),
            Text::Cancel => "Cancel".to_string(),
            Text::Length(length) => length.to_string(),
            Text::NextBirthday(names) => format!("{}'s birthday", names.join(", ")),
            Text::NextFestival(name) => name.clone(),
            Text::NextSeason(season) => format!("Start of {season}"),
            Text::NextEvent => "Next event".to_string(),
        }
    }
}
