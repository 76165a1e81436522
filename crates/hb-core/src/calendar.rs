use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::date::{Season, WorldDate};
use crate::error::{HbError, HbResult};

/// Read-only access to the calendar data the host owns: villager birthdays
/// and festival days. Birthdays and festivals repeat every year, so only the
/// season and day of a date are significant.
pub trait CalendarSource {
    /// Names of every villager whose birthday falls on `date`.
    fn birthdays_on(&self, date: &WorldDate) -> Vec<String>;

    /// The festival held on `date`, if any.
    fn festival_on(&self, date: &WorldDate) -> Option<String>;

    /// `true` when `date` is a festival day.
    fn is_festival_day(&self, date: &WorldDate) -> bool {
        self.festival_on(date).is_some()
    }
}

/// A villager birthday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Birthday {
    /// Villager name.
    pub name: String,
    /// Birth season.
    pub season: Season,
    /// Birth day of the season.
    pub day: u32,
}

/// A yearly festival.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Festival {
    /// Festival display name.
    pub name: String,
    /// Season the festival is held in.
    pub season: Season,
    /// Day of the season.
    pub day: u32,
}

/// In-memory calendar data, loadable from JSON.
///
/// ```json
/// {
///   "birthdays": [{ "name": "Marlow", "season": "spring", "day": 10 }],
///   "festivals": [{ "name": "Egg Festival", "season": "spring", "day": 13 }]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarTable {
    /// Known villager birthdays.
    #[serde(default)]
    pub birthdays: Vec<Birthday>,
    /// Known festivals.
    #[serde(default)]
    pub festivals: Vec<Festival>,
}

impl CalendarTable {
    /// An empty calendar.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in calendar used when no data file is given.
    pub fn standard() -> Self {
        let festival = |name: &str, season, day| Festival {
            name: name.to_string(),
            season,
            day,
        };
        let birthday = |name: &str, season, day| Birthday {
            name: name.to_string(),
            season,
            day,
        };
        Self {
            birthdays: vec![
                birthday("Marlow", Season::Spring, 10),
                birthday("Tamsin", Season::Spring, 10),
                birthday("Fen", Season::Summer, 4),
                birthday("Ilse", Season::Fall, 21),
                birthday("Corin", Season::Winter, 14),
            ],
            festivals: vec![
                festival("Egg Festival", Season::Spring, 13),
                festival("Flower Dance", Season::Spring, 24),
                festival("Luau", Season::Summer, 11),
                festival("Dance of the Moonlight Jellies", Season::Summer, 28),
                festival("Valley Fair", Season::Fall, 16),
                festival("Spirit's Eve", Season::Fall, 27),
                festival("Festival of Ice", Season::Winter, 8),
                festival("Feast of the Winter Star", Season::Winter, 25),
            ],
        }
    }

    /// Add a birthday.
    pub fn with_birthday(mut self, name: impl Into<String>, season: Season, day: u32) -> Self {
        self.birthdays.push(Birthday {
            name: name.into(),
            season,
            day,
        });
        self
    }

    /// Add a festival.
    pub fn with_festival(mut self, name: impl Into<String>, season: Season, day: u32) -> Self {
        self.festivals.push(Festival {
            name: name.into(),
            season,
            day,
        });
        self
    }

    /// Parse a calendar from a JSON string.
    pub fn from_json(json: &str) -> HbResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a calendar from a JSON file.
    pub fn load(path: &Path) -> HbResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| HbError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let table = Self::from_json(&json)?;
        log::debug!(
            "loaded calendar from {}: {} birthdays, {} festivals",
            path.display(),
            table.birthdays.len(),
            table.festivals.len()
        );
        Ok(table)
    }
}

impl CalendarSource for CalendarTable {
    fn birthdays_on(&self, date: &WorldDate) -> Vec<String> {
        self.birthdays
            .iter()
            .filter(|b| b.season == date.season && b.day == date.day)
            .map(|b| b.name.clone())
            .collect()
    }

    fn festival_on(&self, date: &WorldDate) -> Option<String> {
        self.festivals
            .iter()
            .find(|f| f.season == date.season && f.day == date.day)
            .map(|f| f.name.clone())
    }
}
