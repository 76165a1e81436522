use hb_core::Nights;

use crate::overlay::OverlayAnimator;
use crate::trigger::{HibernationRequest, WakeTrigger};

/// Coarse state of the controller, derived from [`ControllerState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Not hibernating.
    Idle,
    /// Hibernating; the host is advancing days on its own.
    Advancing,
    /// Hibernating; waiting for host interaction to settle before the next day.
    Postponed,
}

/// Result of applying a day start to the counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayOutcome {
    /// Not hibernating; nothing changed.
    Idle,
    /// The counter was decremented and nights remain.
    Continuing(Nights),
    /// The counter reached zero on this day.
    Finished,
}

/// All mutable hibernation state for one game session.
///
/// Created when a save is loaded and dropped when it is unloaded.
#[derive(Debug, Clone, PartialEq)]
pub struct ControllerState {
    pub(crate) nights_remaining: Nights,
    pub(crate) wake_trigger: WakeTrigger,
    pub(crate) postponing: bool,
    pub(crate) instant_postponed_hibernation: bool,
    pub(crate) any_interrupting_event_triggered: bool,
    pub(crate) touch_sleep_active: bool,
    pub(crate) window_blocked: bool,
    pub(crate) overlay: OverlayAnimator,
}

impl Default for ControllerState {
    fn default() -> Self {
        Self {
            nights_remaining: Nights::ZERO,
            wake_trigger: WakeTrigger::None,
            postponing: false,
            instant_postponed_hibernation: true,
            any_interrupting_event_triggered: false,
            touch_sleep_active: false,
            window_blocked: false,
            overlay: OverlayAnimator::new(),
        }
    }
}

impl ControllerState {
    /// Fresh session state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Nights still to skip.
    pub fn nights_remaining(&self) -> Nights {
        self.nights_remaining
    }

    /// The active early-wake trigger.
    pub fn wake_trigger(&self) -> WakeTrigger {
        self.wake_trigger
    }

    /// `true` inside a postponement window.
    pub fn is_postponing(&self) -> bool {
        self.postponing
    }

    /// `true` while no blocking dialogue or message has been seen in the
    /// current postponement window.
    pub fn instant_postponed_hibernation(&self) -> bool {
        self.instant_postponed_hibernation
    }

    /// The one-shot interrupt latch.
    pub fn any_interrupting_event_triggered(&self) -> bool {
        self.any_interrupting_event_triggered
    }

    /// `true` while the sleep-tile dialogue flow is active.
    pub fn touch_sleep_active(&self) -> bool {
        self.touch_sleep_active
    }

    /// Overlay opacity.
    pub fn overlay_alpha(&self) -> f32 {
        self.overlay.alpha()
    }

    /// The current coarse phase.
    pub fn phase(&self) -> Phase {
        if self.nights_remaining.is_zero() {
            Phase::Idle
        } else if self.postponing {
            Phase::Postponed
        } else {
            Phase::Advancing
        }
    }

    /// Take over a new request. The interrupt latch is left untouched.
    pub(crate) fn apply_request(&mut self, request: HibernationRequest) {
        self.nights_remaining = request.nights;
        self.wake_trigger = request.trigger;
        self.instant_postponed_hibernation = false;
    }

    /// The single decrement point: one night per day start.
    pub(crate) fn start_day(&mut self) -> DayOutcome {
        let before = self.nights_remaining;
        self.nights_remaining = before.decremented();
        if self.nights_remaining.is_zero() {
            self.wake_trigger = WakeTrigger::None;
            self.postponing = false;
            if before.is_zero() {
                DayOutcome::Idle
            } else {
                DayOutcome::Finished
            }
        } else {
            DayOutcome::Continuing(self.nights_remaining)
        }
    }

    /// Clamp to two nights. Returns `true` if anything changed.
    pub(crate) fn truncate(&mut self) -> bool {
        if !self.nights_remaining.exceeds(2) {
            return false;
        }
        self.nights_remaining = self.nights_remaining.clamped_to(2);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn hibernating(nights: Nights) -> ControllerState {
        let mut state = ControllerState::new();
        state.apply_request(HibernationRequest::new(nights));
        state
    }

    #[test]
    fn session_defaults() {
        let state = ControllerState::new();
        assert_eq!(state.phase(), Phase::Idle);
        assert!(state.instant_postponed_hibernation());
        assert_eq!(state.overlay_alpha(), 0.0);
    }

    #[test]
    fn request_leaves_latch_alone() {
        let mut state = ControllerState::new();
        state.any_interrupting_event_triggered = true;
        state.apply_request(
            HibernationRequest::new(Nights::Finite(3)).with_trigger(WakeTrigger::EventLatch),
        );
        assert!(state.any_interrupting_event_triggered());
        assert!(!state.instant_postponed_hibernation());
        assert_eq!(state.phase(), Phase::Advancing);
    }

    #[test]
    fn reaching_zero_clears_trigger_and_window() {
        let mut state = ControllerState::new();
        state.apply_request(
            HibernationRequest::new(Nights::Finite(1)).with_trigger(WakeTrigger::EventLatch),
        );
        state.postponing = true;
        assert_eq!(state.phase(), Phase::Postponed);
        assert_eq!(state.start_day(), DayOutcome::Finished);
        assert_eq!(state.wake_trigger(), WakeTrigger::None);
        assert_eq!(state.phase(), Phase::Idle);
        assert_eq!(state.start_day(), DayOutcome::Idle);
    }

    #[test]
    fn truncation_clamps_to_two() {
        let mut state = hibernating(Nights::Finite(10));
        assert!(state.truncate());
        assert_eq!(state.nights_remaining(), Nights::Finite(2));
        assert!(!state.truncate());
        assert_eq!(state.nights_remaining(), Nights::Finite(2));

        let mut forever = hibernating(Nights::Infinite);
        assert!(forever.truncate());
        assert_eq!(forever.nights_remaining(), Nights::Finite(2));
    }

    proptest! {
        #[test]
        fn finite_request_ends_after_exactly_n_days(n in 1u32..400) {
            let mut state = hibernating(Nights::Finite(n));
            for day in 1..n {
                prop_assert_eq!(state.start_day(), DayOutcome::Continuing(Nights::Finite(n - day)));
            }
            prop_assert_eq!(state.start_day(), DayOutcome::Finished);
            prop_assert_eq!(state.nights_remaining(), Nights::ZERO);
            prop_assert_eq!(state.start_day(), DayOutcome::Idle);
            prop_assert_eq!(state.nights_remaining(), Nights::ZERO);
        }

        #[test]
        fn infinite_request_never_decrements(days in 0usize..300) {
            let mut state = hibernating(Nights::Infinite);
            for _ in 0..days {
                state.start_day();
            }
            prop_assert_eq!(state.nights_remaining(), Nights::Infinite);
        }

        #[test]
        fn truncation_never_raises(n in 0u32..1000) {
            let mut state = hibernating(Nights::Finite(n));
            state.truncate();
            prop_assert_eq!(state.nights_remaining(), Nights::Finite(n.min(2)));
        }
    }
}
