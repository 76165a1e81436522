use hb_core::Nights;

use crate::gate::BlockReason;

/// What the controller did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControllerEventKind {
    /// A hibernation request was accepted.
    HibernationStarted {
        /// Requested nights.
        nights: Nights,
    },
    /// A day started and the counter was decremented.
    NightPassed {
        /// Nights left after the decrement.
        remaining: Nights,
    },
    /// The host began its day advance; waiting for it to settle.
    PostponementOpened,
    /// The first frame of a postponement window that found the gate closed.
    PostponementBlocked {
        /// The first blocking condition found.
        reason: BlockReason,
    },
    /// The host settled and the next day was requested.
    PostponementResolved {
        /// Whether the fade was skipped.
        instant: bool,
    },
    /// The early-wake trigger fired.
    EarlyWake,
    /// The player cut the hibernation short.
    Truncated {
        /// Nights left before truncation.
        from: Nights,
    },
    /// The end-of-night menu was dismissed automatically.
    EndOfNightMenuSuppressed,
    /// A scripted event was set up but did not start; the latch is set.
    EventInterrupted,
    /// The counter reached zero.
    HibernationFinished,
    /// A host call failed and the tick was skipped.
    HostCallFailed {
        /// Rendered host error.
        error: String,
    },
}

/// A record of something the controller did.
#[derive(Debug, Clone)]
pub struct ControllerEvent {
    /// Day count (see [`hb_core::WorldDate::total_days`]) when it happened.
    pub day: u32,
    /// The specific kind of event.
    pub kind: ControllerEventKind,
    /// A human-readable description.
    pub description: String,
}

impl ControllerEvent {
    /// Create an event for the given day.
    pub fn new(day: u32, kind: ControllerEventKind, description: impl Into<String>) -> Self {
        Self {
            day,
            kind,
            description: description.into(),
        }
    }
}

/// Accumulates controller events for the current session.
#[derive(Debug, Default)]
pub struct EventLog {
    events: Vec<ControllerEvent>,
    max_events: usize,
}

impl EventLog {
    /// Create a log with the given capacity (0 = unlimited).
    pub fn new(max_events: usize) -> Self {
        Self {
            events: Vec::new(),
            max_events,
        }
    }

    /// Append an event, dropping the oldest when over capacity.
    pub fn push(&mut self, event: ControllerEvent) {
        log::debug!("day {}: {}", event.day, event.description);
        self.events.push(event);
        if self.max_events > 0 && self.events.len() > self.max_events {
            let drain_count = self.events.len() - self.max_events;
            self.events.drain(..drain_count);
        }
    }

    /// All recorded events, oldest first.
    pub fn events(&self) -> &[ControllerEvent] {
        &self.events
    }

    /// Number of recorded events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// `true` when nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Remove all events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}
