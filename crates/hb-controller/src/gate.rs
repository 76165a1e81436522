use crate::host::HostState;

/// Why the gate is closed. Reported in the order the checks run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockReason {
    /// A modal menu is open.
    ActiveMenu,
    /// End-of-night menus are queued.
    EndOfNightMenus,
    /// A dialogue box is up.
    Dialogue,
    /// A scripted event is running.
    ScriptedEvent,
    /// A farm-level scripted event is set.
    FarmEvent,
    /// A post-pause message is pending.
    PendingMessage,
}

/// Outcome of a gate evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateStatus {
    /// Safe to request another day.
    Clear,
    /// Some host interaction is still open.
    Blocked(BlockReason),
}

/// Decides whether it is safe to advance another day.
///
/// Stateless: evaluate it against a fresh [`HostState`] every frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostponementGate;

impl PostponementGate {
    /// Evaluate the gate against the host's current state.
    pub fn evaluate(state: &HostState) -> GateStatus {
        let reason = if state.active_menu.is_some() {
            BlockReason::ActiveMenu
        } else if state.end_of_night_menus != 0 {
            BlockReason::EndOfNightMenus
        } else if state.dialogue_up {
            BlockReason::Dialogue
        } else if state.event_up {
            BlockReason::ScriptedEvent
        } else if state.farm_event_pending {
            BlockReason::FarmEvent
        } else if !state.message_after_pause.is_empty() {
            BlockReason::PendingMessage
        } else {
            return GateStatus::Clear;
        };
        GateStatus::Blocked(reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::ActiveMenu;

    #[test]
    fn clear_when_nothing_is_open() {
        assert_eq!(
            PostponementGate::evaluate(&HostState::default()),
            GateStatus::Clear
        );
    }

    #[test]
    fn each_condition_blocks() {
        let cases: Vec<(HostState, BlockReason)> = vec![
            (
                HostState {
                    active_menu: Some(ActiveMenu::Other),
                    ..HostState::default()
                },
                BlockReason::ActiveMenu,
            ),
            (
                HostState {
                    end_of_night_menus: 2,
                    ..HostState::default()
                },
                BlockReason::EndOfNightMenus,
            ),
            (
                HostState {
                    dialogue_up: true,
                    ..HostState::default()
                },
                BlockReason::Dialogue,
            ),
            (
                HostState {
                    event_up: true,
                    ..HostState::default()
                },
                BlockReason::ScriptedEvent,
            ),
            (
                HostState {
                    farm_event_pending: true,
                    ..HostState::default()
                },
                BlockReason::FarmEvent,
            ),
            (
                HostState {
                    message_after_pause: "It's raining".into(),
                    ..HostState::default()
                },
                BlockReason::PendingMessage,
            ),
        ];
        for (state, reason) in cases {
            assert_eq!(
                PostponementGate::evaluate(&state),
                GateStatus::Blocked(reason)
            );
        }
    }

    #[test]
    fn player_freedom_is_not_part_of_the_gate() {
        let state = HostState {
            player_free: false,
            ..HostState::default()
        };
        assert_eq!(PostponementGate::evaluate(&state), GateStatus::Clear);
    }

    #[test]
    fn repeated_evaluation_is_stable() {
        let state = HostState {
            dialogue_up: true,
            ..HostState::default()
        };
        assert_eq!(
            PostponementGate::evaluate(&state),
            PostponementGate::evaluate(&state)
        );
    }
}
