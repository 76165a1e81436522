//! Core types for Hibernation: the in-game calendar, night counts, and lookahead.
//!
//! This crate knows nothing about the host game or the controller that drives
//! hibernation. It defines the values the controller works with and the pure
//! calendar searches used to build the "Hibernate Until" menu.

/// Calendar data lookups (birthdays and festivals) and an in-memory table.
pub mod calendar;
/// Configuration of the duration presets offered to the player.
pub mod config;
/// In-game dates: seasons, days, and day arithmetic.
pub mod date;
/// Error types used throughout the crate.
pub mod error;
/// Hibernation lengths (preset durations with units).
pub mod length;
/// Forward searches over the calendar bounded by a horizon.
pub mod lookahead;
/// Remaining-night counts with an infinite sentinel.
pub mod nights;

/// Re-export calendar types.
pub use calendar::{CalendarSource, CalendarTable};
/// Re-export configuration types.
pub use config::HibernationConfig;
/// Re-export date types.
pub use date::{DAYS_PER_SEASON, DAYS_PER_YEAR, MAX_YEAR, Season, WorldDate};
/// Re-export error types.
pub use error::{HbError, HbResult};
/// Re-export length types.
pub use length::{HibernateLength, LengthUnit};
/// Re-export the remaining-night counter.
pub use nights::Nights;
