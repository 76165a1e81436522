//! Forward searches over the calendar.
//!
//! Every search starts on the day after the given date and gives up after a
//! horizon, so a calendar without any matching day yields `None` instead of
//! scanning forever.

use crate::calendar::CalendarSource;
use crate::date::{DAYS_PER_SEASON, WorldDate};

/// Seasons scanned when looking for the next birthday (one year).
pub const BIRTHDAY_HORIZON_SEASONS: u32 = 4;
/// Seasons scanned when looking for the next festival (two years).
pub const FESTIVAL_HORIZON_SEASONS: u32 = 8;
/// Seasons a "next event" hibernation may last before giving up (one year).
pub const EVENT_HORIZON_SEASONS: u32 = 4;

/// Days covered by `seasons` consecutive seasons.
pub fn horizon_days(seasons: u32) -> u32 {
    seasons * DAYS_PER_SEASON
}

/// First date after `from`, within `horizon` days, for which `predicate` holds.
pub fn find_next<P>(from: &WorldDate, horizon: u32, mut predicate: P) -> Option<WorldDate>
where
    P: FnMut(&WorldDate) -> bool,
{
    (1..=horizon)
        .map(|offset| from.add_days(offset))
        .find(|date| predicate(date))
}

/// Next date with at least one villager birthday, within a year.
pub fn next_birthday<C>(calendar: &C, from: &WorldDate) -> Option<WorldDate>
where
    C: CalendarSource + ?Sized,
{
    find_next(from, horizon_days(BIRTHDAY_HORIZON_SEASONS), |date| {
        !calendar.birthdays_on(date).is_empty()
    })
}

/// Next festival day, within two years.
pub fn next_festival<C>(calendar: &C, from: &WorldDate) -> Option<WorldDate>
where
    C: CalendarSource + ?Sized,
{
    find_next(from, horizon_days(FESTIVAL_HORIZON_SEASONS), |date| {
        calendar.is_festival_day(date)
    })
}

/// Day 1 of the season after `from`.
pub fn next_season_start(from: &WorldDate) -> WorldDate {
    from.first_of_next_season()
}

/// The latest date a "next event" hibernation may run to.
pub fn next_event_limit(from: &WorldDate) -> WorldDate {
    from.add_days(horizon_days(EVENT_HORIZON_SEASONS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::CalendarTable;
    use crate::date::Season;

    fn date(year: u32, season: Season, day: u32) -> WorldDate {
        WorldDate::new(year, season, day).unwrap()
    }

    #[test]
    fn finds_birthday_later_in_season() {
        let calendar = CalendarTable::new().with_birthday("Marlow", Season::Summer, 10);
        let found = next_birthday(&calendar, &date(1, Season::Summer, 3));
        assert_eq!(found, Some(date(1, Season::Summer, 10)));
    }

    #[test]
    fn skips_todays_birthday() {
        let calendar = CalendarTable::new().with_birthday("Marlow", Season::Summer, 10);
        let found = next_birthday(&calendar, &date(1, Season::Summer, 10));
        assert_eq!(found, Some(date(2, Season::Summer, 10)));
    }

    #[test]
    fn no_birthday_within_horizon_is_none() {
        let calendar = CalendarTable::new();
        assert_eq!(next_birthday(&calendar, &date(1, Season::Spring, 1)), None);
    }

    #[test]
    fn festival_wraps_into_next_year() {
        let calendar = CalendarTable::new().with_festival("Egg Festival", Season::Spring, 13);
        let found = next_festival(&calendar, &date(1, Season::Fall, 2));
        assert_eq!(found, Some(date(2, Season::Spring, 13)));
    }

    #[test]
    fn find_next_respects_horizon() {
        let from = date(1, Season::Spring, 1);
        let target = from.add_days(5);
        assert_eq!(find_next(&from, 4, |d| *d == target), None);
        assert_eq!(find_next(&from, 5, |d| *d == target), Some(target));
    }

    #[test]
    fn find_next_never_matches_the_start_date() {
        let from = date(1, Season::Spring, 1);
        assert_eq!(find_next(&from, 3, |_| true), Some(from.next_day()));
    }

    #[test]
    fn event_limit_is_one_year_out() {
        let from = date(2, Season::Winter, 20);
        assert_eq!(next_event_limit(&from), date(3, Season::Winter, 20));
        assert_eq!(next_season_start(&from), date(3, Season::Spring, 1));
    }
}
