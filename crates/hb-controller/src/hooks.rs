//! The inbound half of the hook interface: the events a host delivers and
//! the registry of hook points the host managed to install.

use std::collections::HashSet;
use std::fmt;

use crate::error::HostResult;

/// Host interception points that have to be installed at startup.
///
/// Events delivered through the host's own event bus (session load, day
/// start, frame update) need no installation and have no hook point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookPoint {
    /// Runs after the host has faded out and begun its day-advance sequence.
    DayAdvanceSequence,
    /// Runs after the host has drawn a frame.
    FrameDraw,
    /// Runs after the host has queued its end-of-night menus.
    EndOfNight,
    /// Reports the outcome of the nightly scripted-event setup.
    ScriptedEventSetup,
    /// Brackets touch actions on map tiles (the sleep tile).
    TouchAction,
    /// Builds the yes/no responses of the sleep question.
    SleepResponses,
    /// Routes dialogue answers.
    DialogueAnswer,
}

impl HookPoint {
    /// Every hook point, in installation order.
    pub const ALL: [HookPoint; 7] = [
        HookPoint::DayAdvanceSequence,
        HookPoint::FrameDraw,
        HookPoint::EndOfNight,
        HookPoint::ScriptedEventSetup,
        HookPoint::TouchAction,
        HookPoint::SleepResponses,
        HookPoint::DialogueAnswer,
    ];
}

impl fmt::Display for HookPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HookPoint::DayAdvanceSequence => "day-advance-sequence",
            HookPoint::FrameDraw => "frame-draw",
            HookPoint::EndOfNight => "end-of-night",
            HookPoint::ScriptedEventSetup => "scripted-event-setup",
            HookPoint::TouchAction => "touch-action",
            HookPoint::SleepResponses => "sleep-responses",
            HookPoint::DialogueAnswer => "dialogue-answer",
        };
        f.write_str(name)
    }
}

/// Tracks which hook points are usable.
///
/// Every point is enabled until the host reports that installing it failed;
/// after that the behavior behind it stays off for the rest of the process.
#[derive(Debug, Clone, Default)]
pub struct HookRegistry {
    disabled: HashSet<HookPoint>,
}

impl HookRegistry {
    /// A registry with every hook point enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the result of installing `point`. Failures are logged and
    /// disable the point.
    pub fn install(&mut self, point: HookPoint, result: HostResult<()>) {
        match result {
            Ok(()) => {
                log::debug!("installed hook {point}");
                self.disabled.remove(&point);
            }
            Err(e) => {
                log::error!("failed to install hook {point}: {e}; its behavior is disabled");
                self.disabled.insert(point);
            }
        }
    }

    /// `true` unless installing `point` failed.
    pub fn is_enabled(&self, point: HookPoint) -> bool {
        !self.disabled.contains(&point)
    }

    /// Hook points whose installation failed.
    pub fn disabled(&self) -> impl Iterator<Item = HookPoint> + '_ {
        self.disabled.iter().copied()
    }
}

/// An event delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookEvent {
    /// A save was loaded; a fresh session begins.
    SessionLoaded,
    /// The session ended (returned to title).
    SessionUnloaded,
    /// A new day has started.
    DayStarted,
    /// A frame is being updated.
    FrameUpdate,
    /// A frame has been drawn.
    FrameDraw,
    /// The host faded to black and began its own day advance.
    DayAdvanceSequenceBegan,
    /// The host queued its end-of-night menus.
    EndOfNight,
    /// The nightly scripted-event setup finished.
    ScriptedEventSetup {
        /// Whether an event actually started.
        did_start: bool,
    },
    /// The player stepped onto the sleep tile.
    TouchSleepEntered,
    /// The touch action on the sleep tile finished.
    TouchSleepExited,
}

impl HookEvent {
    /// The hook point this event depends on, if it needs one.
    pub fn hook_point(&self) -> Option<HookPoint> {
        match self {
            HookEvent::SessionLoaded
            | HookEvent::SessionUnloaded
            | HookEvent::DayStarted
            | HookEvent::FrameUpdate => None,
            HookEvent::FrameDraw => Some(HookPoint::FrameDraw),
            HookEvent::DayAdvanceSequenceBegan => Some(HookPoint::DayAdvanceSequence),
            HookEvent::EndOfNight => Some(HookPoint::EndOfNight),
            HookEvent::ScriptedEventSetup { .. } => Some(HookPoint::ScriptedEventSetup),
            HookEvent::TouchSleepEntered | HookEvent::TouchSleepExited => {
                Some(HookPoint::TouchAction)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HostError;

    #[test]
    fn failed_install_disables_point() {
        let mut hooks = HookRegistry::new();
        hooks.install(HookPoint::FrameDraw, Ok(()));
        hooks.install(
            HookPoint::EndOfNight,
            Err(HostError::HookUnavailable(HookPoint::EndOfNight)),
        );
        assert!(hooks.is_enabled(HookPoint::FrameDraw));
        assert!(!hooks.is_enabled(HookPoint::EndOfNight));
        assert_eq!(hooks.disabled().collect::<Vec<_>>(), vec![HookPoint::EndOfNight]);
    }

    #[test]
    fn bus_events_need_no_hook() {
        assert_eq!(HookEvent::DayStarted.hook_point(), None);
        assert_eq!(
            HookEvent::ScriptedEventSetup { did_start: false }.hook_point(),
            Some(HookPoint::ScriptedEventSetup)
        );
    }
}
