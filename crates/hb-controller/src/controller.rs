use hb_core::{HibernateLength, Nights, WorldDate};

use crate::config::ControllerConfig;
use crate::error::HostResult;
use crate::event::{ControllerEvent, ControllerEventKind, EventLog};
use crate::gate::{GateStatus, PostponementGate};
use crate::hooks::{HookEvent, HookPoint, HookRegistry};
use crate::host::Host;
use crate::menu::{self, DialogueResponse, QuestionKind, UntilChoice};
use crate::overlay::{self, OverlayFrame};
use crate::state::{ControllerState, DayOutcome, Phase};
use crate::trigger::{HibernationRequest, WakeTrigger};

/// The hibernation state machine.
///
/// Reacts to host events one at a time and decides, tick by tick, whether to
/// ask the host for another day. The host guarantees events arrive in order
/// and never re-entrantly, so no synchronization is needed.
///
/// Outside a loaded session (before [`HibernationController::on_session_loaded`]
/// or after [`HibernationController::on_session_unloaded`]) every handler is a
/// no-op.
#[derive(Debug)]
pub struct HibernationController {
    lengths: Vec<HibernateLength>,
    hooks: HookRegistry,
    session: Option<ControllerState>,
    events: EventLog,
}

impl HibernationController {
    /// Create a controller. Length presets are parsed once here.
    pub fn new(config: ControllerConfig) -> Self {
        Self {
            lengths: config.hibernation.parsed_length_options(),
            hooks: HookRegistry::new(),
            session: None,
            events: EventLog::new(config.max_events),
        }
    }

    /// Hook points and their installation status.
    pub fn hooks(&self) -> &HookRegistry {
        &self.hooks
    }

    /// Mutable access to the hook registry, for recording installation results.
    pub fn hooks_mut(&mut self) -> &mut HookRegistry {
        &mut self.hooks
    }

    /// Session state, if a session is loaded.
    pub fn state(&self) -> Option<&ControllerState> {
        self.session.as_ref()
    }

    /// Current phase. [`Phase::Idle`] outside a session.
    pub fn phase(&self) -> Phase {
        self.session.as_ref().map_or(Phase::Idle, ControllerState::phase)
    }

    /// Nights remaining. Zero outside a session.
    pub fn nights_remaining(&self) -> Nights {
        self.session
            .as_ref()
            .map_or(Nights::ZERO, ControllerState::nights_remaining)
    }

    /// Events recorded in this session.
    pub fn events(&self) -> &EventLog {
        &self.events
    }

    /// The parsed duration presets.
    pub fn length_options(&self) -> &[HibernateLength] {
        &self.lengths
    }

    // -----------------------------------------------------------------------
    // Inbound hooks
    // -----------------------------------------------------------------------

    /// Dispatch a host event. Events behind a hook point that failed to
    /// install are ignored.
    pub fn handle<H: Host + ?Sized>(&mut self, host: &mut H, event: HookEvent) {
        if event
            .hook_point()
            .is_some_and(|point| !self.hooks.is_enabled(point))
        {
            return;
        }
        match event {
            HookEvent::SessionLoaded => self.on_session_loaded(),
            HookEvent::SessionUnloaded => self.on_session_unloaded(),
            HookEvent::DayStarted => self.on_day_started(&*host),
            HookEvent::FrameUpdate => self.on_frame_update(host),
            HookEvent::FrameDraw => self.on_frame_draw(host),
            HookEvent::DayAdvanceSequenceBegan => self.on_day_advance_sequence_began(&*host),
            HookEvent::EndOfNight => self.on_end_of_night(host),
            HookEvent::ScriptedEventSetup { did_start } => {
                self.on_scripted_event_setup_result(&*host, did_start)
            }
            HookEvent::TouchSleepEntered => self.on_touch_sleep_entered(),
            HookEvent::TouchSleepExited => self.on_touch_sleep_exited(),
        }
    }

    /// A save was loaded: start from a fresh state.
    pub fn on_session_loaded(&mut self) {
        self.session = Some(ControllerState::new());
        self.events.clear();
        log::debug!("hibernation state reset for new session");
    }

    /// The session ended: drop all state.
    pub fn on_session_unloaded(&mut self) {
        self.session = None;
        self.events.clear();
    }

    /// A new day started. This is the only place the counter is decremented.
    pub fn on_day_started<H: Host + ?Sized>(&mut self, host: &H) {
        let Some(state) = self.session.as_mut() else {
            return;
        };
        let day = host.current_date().total_days();
        match state.start_day() {
            DayOutcome::Idle => {}
            DayOutcome::Continuing(remaining) => self.events.push(ControllerEvent::new(
                day,
                ControllerEventKind::NightPassed { remaining },
                format!("night passed, {remaining} remaining"),
            )),
            DayOutcome::Finished => {
                self.events.push(ControllerEvent::new(
                    day,
                    ControllerEventKind::NightPassed {
                        remaining: Nights::ZERO,
                    },
                    "night passed, 0 remaining",
                ));
                self.events.push(ControllerEvent::new(
                    day,
                    ControllerEventKind::HibernationFinished,
                    "hibernation finished",
                ));
                log::info!("hibernation finished on {}", host.current_date());
            }
        }
    }

    /// Per-frame update: inside a postponement window, wait for the host to
    /// settle and then request the next day.
    pub fn on_frame_update<H: Host + ?Sized>(&mut self, host: &mut H) {
        let Some(state) = self.session.as_mut() else {
            return;
        };
        if state.nights_remaining.is_zero() || !state.postponing {
            return;
        }

        let host_state = host.state();
        if host_state.dialogue_up || !host_state.message_after_pause.is_empty() {
            state.instant_postponed_hibernation = false;
        }
        if !host_state.player_free {
            return;
        }
        let day = host.current_date().total_days();
        if let GateStatus::Blocked(reason) = PostponementGate::evaluate(&host_state) {
            if !state.window_blocked {
                state.window_blocked = true;
                self.events.push(ControllerEvent::new(
                    day,
                    ControllerEventKind::PostponementBlocked { reason },
                    format!("waiting on {reason:?}"),
                ));
            }
            return;
        }

        if let Err(e) = host.request_day_advance() {
            log::warn!("could not continue hibernation this frame: {e}");
            self.events.push(ControllerEvent::new(
                day,
                ControllerEventKind::HostCallFailed {
                    error: e.to_string(),
                },
                format!("skipped tick: {e}"),
            ));
            return;
        }
        state.postponing = false;
        let instant = state.instant_postponed_hibernation;
        let snapped = if instant {
            host.force_visual_snap_to_faded()
        } else {
            Ok(())
        };
        if let Err(e) = snapped {
            log::warn!("could not skip the fade: {e}");
        }
        state.instant_postponed_hibernation = true;
        self.events.push(ControllerEvent::new(
            day,
            ControllerEventKind::PostponementResolved { instant },
            if instant {
                "continuing hibernation without fade"
            } else {
                "continuing hibernation"
            },
        ));
    }

    /// Per-frame draw: animate the overlay and hand its draw calls to the host.
    /// Holding the wake key while the overlay shows truncates the hibernation.
    pub fn on_frame_draw<H: Host + ?Sized>(&mut self, host: &mut H) {
        let Some(state) = self.session.as_mut() else {
            return;
        };
        let host_state = host.state();
        let alpha = state
            .overlay
            .update(overlay::should_display(state.nights_remaining, &host_state));
        if alpha <= 0.0 {
            return;
        }

        let today = host.current_date();
        if host.is_wake_key_down() {
            let before = state.nights_remaining;
            if state.truncate() {
                self.events.push(ControllerEvent::new(
                    today.total_days(),
                    ControllerEventKind::Truncated { from: before },
                    format!("woken early with {before} nights left"),
                ));
            }
        }

        let frame = OverlayFrame {
            nights: state.nights_remaining,
            has_trigger: state.wake_trigger.is_set(),
            date: today,
            alpha,
        };
        let commands = frame.layout(&*host);
        if let Err(e) = host.draw(&commands) {
            log::warn!("overlay draw skipped: {e}");
        }
    }

    /// The host faded out and began its own day advance.
    pub fn on_day_advance_sequence_began<H: Host + ?Sized>(&mut self, host: &H) {
        let Some(state) = self.session.as_mut() else {
            return;
        };
        state.postponing = true;
        state.window_blocked = false;
        if !state.nights_remaining.is_zero() {
            self.events.push(ControllerEvent::new(
                host.current_date().total_days(),
                ControllerEventKind::PostponementOpened,
                "day advance began",
            ));
        }
    }

    /// End of night: consult the early-wake trigger once, then dismiss the
    /// save menu if more nights follow.
    pub fn on_end_of_night<H: Host + ?Sized>(&mut self, host: &mut H) {
        let Some(state) = self.session.as_mut() else {
            return;
        };
        let today = host.current_date();
        let trigger = state.wake_trigger;
        if trigger.evaluate(&today, &mut state.any_interrupting_event_triggered) {
            state.nights_remaining = Nights::Finite(1);
            self.events.push(ControllerEvent::new(
                today.total_days(),
                ControllerEventKind::EarlyWake,
                format!("early wake ({trigger:?})"),
            ));
        }
        if state.nights_remaining.exceeds(1) {
            match host.suppress_end_of_night_menu() {
                Ok(()) => self.events.push(ControllerEvent::new(
                    today.total_days(),
                    ControllerEventKind::EndOfNightMenuSuppressed,
                    "end-of-night menu dismissed",
                )),
                Err(e) => log::warn!("end-of-night menu left for the player: {e}"),
            }
        }
    }

    /// The nightly scripted-event setup finished. An event that was set up
    /// but did not start while hibernating sets the interrupt latch.
    pub fn on_scripted_event_setup_result<H: Host + ?Sized>(&mut self, host: &H, did_start: bool) {
        let Some(state) = self.session.as_mut() else {
            return;
        };
        if state.nights_remaining.is_zero() || did_start {
            return;
        }
        state.any_interrupting_event_triggered = true;
        self.events.push(ControllerEvent::new(
            host.current_date().total_days(),
            ControllerEventKind::EventInterrupted,
            "scripted event suppressed",
        ));
    }

    /// The player stepped onto the sleep tile.
    pub fn on_touch_sleep_entered(&mut self) {
        if let Some(state) = self.session.as_mut() {
            state.touch_sleep_active = true;
        }
    }

    /// The sleep-tile touch action finished.
    pub fn on_touch_sleep_exited(&mut self) {
        if let Some(state) = self.session.as_mut() {
            state.touch_sleep_active = false;
        }
    }

    /// Responses for the host's sleep question. Hibernation options are added
    /// only during the sleep-tile flow of a single-player session.
    pub fn sleep_responses<H: Host + ?Sized>(
        &self,
        host: &H,
        responses: Vec<DialogueResponse>,
    ) -> Vec<DialogueResponse> {
        let active = self
            .session
            .as_ref()
            .is_some_and(ControllerState::touch_sleep_active);
        if !active || !host.is_single_player() || !self.hooks.is_enabled(HookPoint::SleepResponses)
        {
            return responses;
        }
        menu::inject_sleep_responses(host, responses)
    }

    /// Route a dialogue answer (`"<question>_<answer>"`). Returns `true` when
    /// the answer opened one of the hibernation questions.
    pub fn on_dialogue_answer<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        question_and_answer: &str,
    ) -> bool {
        if self.session.is_none() || !self.hooks.is_enabled(HookPoint::DialogueAnswer) {
            return false;
        }
        let question = match question_and_answer {
            menu::SLEEP_HIBERNATE_FOR => menu::hibernate_for_question(&*host, &self.lengths),
            menu::SLEEP_HIBERNATE_UNTIL => menu::hibernate_until_question(&*host),
            _ => return false,
        };
        match host.show_question(question) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("could not show hibernation question: {e}");
                false
            }
        }
    }

    /// The player answered one of the hibernation questions.
    pub fn on_question_answered<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        kind: QuestionKind,
        answer: &str,
    ) {
        if answer == menu::CANCEL {
            return;
        }
        let result = match kind {
            QuestionKind::HibernateFor => match HibernateLength::parse_or_none(answer) {
                Some(length) => {
                    self.request_hibernation(host, HibernationRequest::new(length.night_count()))
                }
                None => {
                    log::warn!("unknown hibernation length answer \"{answer}\"");
                    Ok(())
                }
            },
            QuestionKind::HibernateUntil => {
                match UntilChoice::from_key(answer).and_then(|c| menu::resolve_until(&*host, c)) {
                    Some((target, trigger)) => {
                        self.request_hibernation_until(host, &target, trigger)
                    }
                    None => Ok(()),
                }
            }
        };
        if let Err(e) = result {
            log::warn!("hibernation not started: {e}");
        }
    }

    // -----------------------------------------------------------------------
    // Requests
    // -----------------------------------------------------------------------

    /// Start hibernating and ask the host for the first day. Valid from any
    /// phase. If the host refuses, the previous state is kept.
    pub fn request_hibernation<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        request: HibernationRequest,
    ) -> HostResult<()> {
        let Some(state) = self.session.as_mut() else {
            log::warn!("hibernation requested without a loaded session");
            return Ok(());
        };
        if request.nights.is_zero() {
            return Ok(());
        }

        let previous = state.clone();
        state.apply_request(request);
        if let Err(e) = host.request_day_advance() {
            *state = previous;
            return Err(e);
        }

        let today = host.current_date();
        log::info!(
            "hibernating for {} nights from {today} (trigger: {:?})",
            request.nights,
            request.trigger
        );
        self.events.push(ControllerEvent::new(
            today.total_days(),
            ControllerEventKind::HibernationStarted {
                nights: request.nights,
            },
            format!("hibernating for {} nights", request.nights),
        ));
        Ok(())
    }

    /// Hibernate until `target`. A target on or before today is ignored.
    pub fn request_hibernation_until<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        target: &WorldDate,
        trigger: WakeTrigger,
    ) -> HostResult<()> {
        match HibernationRequest::until(&host.current_date(), target) {
            Some(request) => self.request_hibernation(host, request.with_trigger(trigger)),
            None => {
                log::debug!("ignoring hibernation until {target}: not in the future");
                Ok(())
            }
        }
    }

    /// Wake up early: with more than two nights left, keep only two.
    /// Returns `true` if the count changed.
    pub fn truncate<H: Host + ?Sized>(&mut self, host: &H) -> bool {
        let Some(state) = self.session.as_mut() else {
            return false;
        };
        let before = state.nights_remaining;
        if !state.truncate() {
            return false;
        }
        self.events.push(ControllerEvent::new(
            host.current_date().total_days(),
            ControllerEventKind::Truncated { from: before },
            format!("woken early with {before} nights left"),
        ));
        true
    }
}
