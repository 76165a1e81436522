//! Hibernation lengths as they appear in the configuration and the
//! "Hibernate For" menu: a count with a unit, or `forever`.

use std::fmt;
use std::str::FromStr;

use crate::date::{DAYS_PER_SEASON, DAYS_PER_YEAR};
use crate::error::{HbError, HbResult};
use crate::nights::Nights;

/// Unit of a [`HibernateLength`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthUnit {
    /// Single nights.
    Nights,
    /// Weeks of 7 nights.
    Weeks,
    /// Seasons of 28 nights.
    Seasons,
    /// Years of 112 nights.
    Years,
    /// No end; the count is ignored.
    Forever,
}

impl LengthUnit {
    /// Nights covered by one unit. `None` for [`LengthUnit::Forever`].
    pub fn nights_per_unit(self) -> Option<u32> {
        match self {
            LengthUnit::Nights => Some(1),
            LengthUnit::Weeks => Some(7),
            LengthUnit::Seasons => Some(DAYS_PER_SEASON),
            LengthUnit::Years => Some(DAYS_PER_YEAR),
            LengthUnit::Forever => None,
        }
    }

    fn label(self, plural: bool) -> &'static str {
        match (self, plural) {
            (LengthUnit::Nights, false) => "night",
            (LengthUnit::Nights, true) => "nights",
            (LengthUnit::Weeks, false) => "week",
            (LengthUnit::Weeks, true) => "weeks",
            (LengthUnit::Seasons, false) => "season",
            (LengthUnit::Seasons, true) => "seasons",
            (LengthUnit::Years, false) => "year",
            (LengthUnit::Years, true) => "years",
            (LengthUnit::Forever, _) => "forever",
        }
    }
}

/// A hibernation duration preset, e.g. `3 nights`, `1 season`, or `forever`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HibernateLength {
    /// Number of units. Always at least 1 for finite units.
    pub value: u32,
    /// The unit the value is counted in.
    pub unit: LengthUnit,
}

impl HibernateLength {
    /// A length of `value` units. Fails for a zero count of a finite unit.
    pub fn new(value: u32, unit: LengthUnit) -> HbResult<Self> {
        if value == 0 && unit != LengthUnit::Forever {
            return Err(HbError::InvalidLength(format!("0 {}", unit.label(true))));
        }
        Ok(Self { value, unit })
    }

    /// The `forever` length.
    pub fn forever() -> Self {
        Self {
            value: 1,
            unit: LengthUnit::Forever,
        }
    }

    /// A length of `n` single nights.
    pub fn nights(n: u32) -> HbResult<Self> {
        Self::new(n, LengthUnit::Nights)
    }

    /// The number of nights this length skips.
    pub fn night_count(&self) -> Nights {
        match self.unit.nights_per_unit() {
            Some(per_unit) => Nights::Finite(self.value.saturating_mul(per_unit)),
            None => Nights::Infinite,
        }
    }

    /// Parse a length, returning `None` instead of an error.
    pub fn parse_or_none(s: &str) -> Option<Self> {
        s.parse().ok()
    }
}

impl fmt::Display for HibernateLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unit == LengthUnit::Forever {
            return f.write_str("forever");
        }
        write!(f, "{} {}", self.value, self.unit.label(self.value != 1))
    }
}

/// Accepts `"<n> <unit>"` (singular or plural, `day` as a synonym for `night`),
/// a compact form such as `"3n"` / `"2w"` / `"1s"` / `"1y"`, and `forever` / `infinite`.
impl FromStr for HibernateLength {
    type Err = HbError;

    fn from_str(s: &str) -> HbResult<Self> {
        let text = s.trim().to_ascii_lowercase();
        if matches!(text.as_str(), "forever" | "infinite" | "inf") {
            return Ok(Self::forever());
        }

        let split = text
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(text.len());
        let (digits, unit) = text.split_at(split);
        let value: u32 = digits
            .parse()
            .map_err(|_| HbError::InvalidLength(s.to_string()))?;
        let unit = match unit.trim() {
            "n" | "night" | "nights" | "d" | "day" | "days" => LengthUnit::Nights,
            "w" | "week" | "weeks" => LengthUnit::Weeks,
            "s" | "season" | "seasons" => LengthUnit::Seasons,
            "y" | "year" | "years" => LengthUnit::Years,
            _ => return Err(HbError::InvalidLength(s.to_string())),
        };
        Self::new(value, unit).map_err(|_| HbError::InvalidLength(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_and_compact_forms() {
        let week: HibernateLength = "2 weeks".parse().unwrap();
        assert_eq!(week.night_count(), Nights::Finite(14));
        let season: HibernateLength = "1s".parse().unwrap();
        assert_eq!(season.night_count(), Nights::Finite(28));
        let year: HibernateLength = "1 Year".parse().unwrap();
        assert_eq!(year.night_count(), Nights::Finite(112));
        let days: HibernateLength = "5 days".parse().unwrap();
        assert_eq!(days.unit, LengthUnit::Nights);
    }

    #[test]
    fn forever_is_infinite() {
        let forever: HibernateLength = "forever".parse().unwrap();
        assert_eq!(forever.night_count(), Nights::Infinite);
        assert_eq!(forever.to_string(), "forever");
    }

    #[test]
    fn rejects_zero_and_garbage() {
        assert!("0 nights".parse::<HibernateLength>().is_err());
        assert!("nights".parse::<HibernateLength>().is_err());
        assert!("3 fortnights".parse::<HibernateLength>().is_err());
        assert!(HibernateLength::parse_or_none("").is_none());
    }

    #[test]
    fn display_is_canonical_and_reparses() {
        for text in ["1 night", "3 nights", "1 week", "2 seasons", "1 year", "forever"] {
            let length: HibernateLength = text.parse().unwrap();
            assert_eq!(length.to_string(), text);
        }
    }
}
