use hb_core::{Nights, WorldDate};

/// Condition that cuts a hibernation short after the current night.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WakeTrigger {
    /// Sleep for the full requested length.
    #[default]
    None,
    /// Wake once the day with this day count (see [`WorldDate::total_days`]) has arrived.
    FixedNight(u32),
    /// Wake after a night on which a scripted event was set up but did not
    /// start. Consumes the interrupt latch.
    EventLatch,
}

impl WakeTrigger {
    /// `true` unless this is [`WakeTrigger::None`].
    pub fn is_set(&self) -> bool {
        !matches!(self, WakeTrigger::None)
    }

    /// Evaluate at the end of a night. `today` is the day being started;
    /// `latch` is the interrupt latch, cleared when an [`WakeTrigger::EventLatch`]
    /// consumes it.
    pub fn evaluate(&self, today: &WorldDate, latch: &mut bool) -> bool {
        match self {
            WakeTrigger::None => false,
            WakeTrigger::FixedNight(day) => today.total_days() >= *day,
            WakeTrigger::EventLatch => std::mem::take(latch),
        }
    }
}

/// A player's accepted request to skip nights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HibernationRequest {
    /// Nights to skip.
    pub nights: Nights,
    /// Optional early-wake condition.
    pub trigger: WakeTrigger,
}

impl HibernationRequest {
    /// A request without an early-wake trigger.
    pub fn new(nights: Nights) -> Self {
        Self {
            nights,
            trigger: WakeTrigger::None,
        }
    }

    /// Attach an early-wake trigger.
    pub fn with_trigger(mut self, trigger: WakeTrigger) -> Self {
        self.trigger = trigger;
        self
    }

    /// A request that ends on `target`, or `None` when `target` is not after `today`.
    pub fn until(today: &WorldDate, target: &WorldDate) -> Option<Self> {
        let days = today.days_until(target);
        if days <= 0 {
            return None;
        }
        let nights = u32::try_from(days).ok()?;
        Some(Self::new(Nights::Finite(nights)))
    }
}
