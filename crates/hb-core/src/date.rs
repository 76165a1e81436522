use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{HbError, HbResult};

/// Number of days in every season.
pub const DAYS_PER_SEASON: u32 = 28;
/// Number of seasons in a year.
pub const SEASONS_PER_YEAR: u32 = 4;
/// Number of days in a year (4 seasons of 28 days).
pub const DAYS_PER_YEAR: u32 = DAYS_PER_SEASON * SEASONS_PER_YEAR;
/// Latest year whose every day still fits a `u32` day count.
pub const MAX_YEAR: u32 = u32::MAX / DAYS_PER_YEAR;

// ---------------------------------------------------------------------------
// Season
// ---------------------------------------------------------------------------

/// One of the four seasons of the in-game year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    /// First season of the year.
    Spring,
    /// Second season of the year.
    Summer,
    /// Third season of the year.
    Fall,
    /// Fourth season of the year.
    Winter,
}

impl Season {
    /// All seasons in calendar order.
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Fall, Season::Winter];

    /// Zero-based position in the year.
    pub fn index(self) -> u32 {
        match self {
            Season::Spring => 0,
            Season::Summer => 1,
            Season::Fall => 2,
            Season::Winter => 3,
        }
    }

    /// Season for a zero-based index, wrapping every four.
    pub fn from_index(index: u32) -> Self {
        Self::ALL[(index % SEASONS_PER_YEAR) as usize]
    }

    /// The season that follows this one.
    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Capitalized display name.
    pub fn name(self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
            Season::Winter => "Winter",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Season {
    type Err = HbError;

    fn from_str(s: &str) -> HbResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "spring" => Ok(Season::Spring),
            "summer" => Ok(Season::Summer),
            "fall" | "autumn" => Ok(Season::Fall),
            "winter" => Ok(Season::Winter),
            other => Err(HbError::InvalidDate(format!("unknown season \"{other}\""))),
        }
    }
}

// ---------------------------------------------------------------------------
// WorldDate
// ---------------------------------------------------------------------------

/// A date on the in-game calendar. Years start at 1, days run 1..=28.
///
/// Dates are totally ordered by [`WorldDate::total_days`], which counts days
/// elapsed since Spring 1 of year 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorldDate {
    /// Year, starting at 1.
    pub year: u32,
    /// Season within the year.
    pub season: Season,
    /// Day of the season, 1..=28.
    pub day: u32,
}

impl WorldDate {
    /// Build a date, validating the year and day ranges.
    pub fn new(year: u32, season: Season, day: u32) -> HbResult<Self> {
        if year == 0 {
            return Err(HbError::InvalidDate("year must be at least 1".into()));
        }
        if year > MAX_YEAR {
            return Err(HbError::InvalidDate(format!(
                "year {year} is past the last supported year {MAX_YEAR}"
            )));
        }
        if day == 0 || day > DAYS_PER_SEASON {
            return Err(HbError::InvalidDate(format!(
                "day {day} is outside 1..={DAYS_PER_SEASON}"
            )));
        }
        Ok(Self { year, season, day })
    }

    /// Spring 1 of year 1.
    pub fn first() -> Self {
        Self {
            year: 1,
            season: Season::Spring,
            day: 1,
        }
    }

    /// Rebuild a date from a day count since Spring 1 of year 1.
    pub fn from_total_days(total: u32) -> Self {
        let year = total / DAYS_PER_YEAR + 1;
        let in_year = total % DAYS_PER_YEAR;
        Self {
            year,
            season: Season::from_index(in_year / DAYS_PER_SEASON),
            day: in_year % DAYS_PER_SEASON + 1,
        }
    }

    /// Days elapsed since Spring 1 of year 1. Saturates at `u32::MAX` for
    /// hand-built dates past [`MAX_YEAR`].
    pub fn total_days(&self) -> u32 {
        self.year
            .saturating_sub(1)
            .saturating_mul(DAYS_PER_YEAR)
            .saturating_add(self.season.index() * DAYS_PER_SEASON)
            .saturating_add(self.day.saturating_sub(1))
    }

    /// The date `days` days after this one, stopping at the last
    /// representable day.
    pub fn add_days(&self, days: u32) -> Self {
        Self::from_total_days(self.total_days().saturating_add(days))
    }

    /// The following day.
    pub fn next_day(&self) -> Self {
        self.add_days(1)
    }

    /// Day 1 of the following season, rolling the year forward after winter.
    pub fn first_of_next_season(&self) -> Self {
        let left_in_season = DAYS_PER_SEASON.saturating_sub(self.day);
        self.add_days(left_in_season + 1)
    }

    /// Whole days from `self` until `other`. Negative when `other` is earlier.
    pub fn days_until(&self, other: &WorldDate) -> i64 {
        i64::from(other.total_days()) - i64::from(self.total_days())
    }
}

impl PartialOrd for WorldDate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for WorldDate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.total_days().cmp(&other.total_days())
    }
}

impl fmt::Display for WorldDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}, Year {}", self.season, self.day, self.year)
    }
}

/// Parses `"<season> <day> <year>"`, e.g. `"summer 12 2"`. The year defaults to 1.
impl FromStr for WorldDate {
    type Err = HbError;

    fn from_str(s: &str) -> HbResult<Self> {
        let parts: Vec<&str> = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|p| !p.is_empty())
            .collect();
        let (season, day, year) = match parts.as_slice() {
            [season, day] => (*season, *day, "1"),
            [season, day, year] => (*season, *day, *year),
            _ => {
                return Err(HbError::InvalidDate(format!(
                    "expected \"<season> <day> [year]\", got \"{s}\""
                )));
            }
        };
        let season: Season = season.parse()?;
        let day = day
            .parse::<u32>()
            .map_err(|_| HbError::InvalidDate(format!("invalid day \"{day}\"")))?;
        let year = year
            .parse::<u32>()
            .map_err(|_| HbError::InvalidDate(format!("invalid year \"{year}\"")))?;
        Self::new(year, season, day)
    }
}
