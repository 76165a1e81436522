//! A deterministic stand-in for the host game.
//!
//! Delivers events in the order the real game does: the day-advance sequence
//! begins, the date moves, the nightly scripted-event setup reports back, the
//! end-of-night menus are queued, the new day starts, and then frames run
//! until the controller asks for another day.

use std::collections::HashSet;

use hb_controller::{
    ActiveMenu, BlockReason, DrawCommand, HibernationController, HookEvent, HookPoint, Host,
    HostError, HostResult, HostState, Phase, Question, Vec2,
};
use hb_core::{CalendarSource, CalendarTable, Nights, WorldDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Frames after which a day that never settles is abandoned.
pub const MAX_FRAMES_PER_DAY: usize = 600;
const SAVE_MENU_FRAMES: usize = 30;
const FADE_IN_STEP: f32 = 0.05;
const BLOCKERS: [BlockReason; 3] = [
    BlockReason::Dialogue,
    BlockReason::PendingMessage,
    BlockReason::ScriptedEvent,
];

/// Knobs for a simulated run. Day numbers count from the start date (day 1 is
/// the first day after it).
#[derive(Debug, Clone, Default)]
pub struct SimOptions {
    pub seed: u64,
    pub block_chance: f64,
    pub event_days: Vec<u32>,
    pub escape_day: Option<u32>,
    pub disabled_hooks: Vec<HookPoint>,
}

/// What happened during one night and the following day.
#[derive(Debug, Clone)]
pub struct NightReport {
    pub date: WorldDate,
    pub nights_left: Nights,
    pub frames: usize,
    pub blocked_by: Option<(BlockReason, usize)>,
    pub save_menu_shown: bool,
    pub fade_skipped: bool,
    pub event_skipped: bool,
    pub status: Option<String>,
}

pub struct SimulatedHost {
    date: WorldDate,
    calendar: CalendarTable,
    state: HostState,
    rng: StdRng,
    block_chance: f64,
    event_days: HashSet<u32>,
    escape_day: Option<u32>,
    disabled_hooks: Vec<HookPoint>,
    advance_requested: bool,
    wake_key_down: bool,
    snaps: usize,
    last_status: Option<String>,
    questions: Vec<Question>,
}

impl SimulatedHost {
    pub fn new(start: WorldDate, calendar: CalendarTable, options: &SimOptions) -> Self {
        let base = start.total_days();
        Self {
            date: start,
            calendar,
            state: HostState::default(),
            rng: StdRng::seed_from_u64(options.seed),
            block_chance: options.block_chance,
            event_days: options
                .event_days
                .iter()
                .map(|day| base.saturating_add(*day))
                .collect(),
            escape_day: options.escape_day.map(|day| base.saturating_add(day)),
            disabled_hooks: options.disabled_hooks.clone(),
            advance_requested: false,
            wake_key_down: false,
            snaps: 0,
            last_status: None,
            questions: Vec::new(),
        }
    }

    /// Report every hook point's installation result to the controller.
    pub fn install_hooks(&self, controller: &mut HibernationController) {
        for point in HookPoint::ALL {
            let result = if self.disabled_hooks.contains(&point) {
                Err(HostError::HookUnavailable(point))
            } else {
                Ok(())
            };
            controller.hooks_mut().install(point, result);
        }
    }

    /// `true` once the controller has asked for another day.
    pub fn advance_requested(&self) -> bool {
        self.advance_requested
    }

    /// Questions shown so far, oldest first.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Play out one night and the day after it.
    pub fn run_night(&mut self, controller: &mut HibernationController) -> NightReport {
        self.advance_requested = false;
        self.state.fade_to_black = 1.0;

        controller.handle(self, HookEvent::DayAdvanceSequenceBegan);
        self.date = self.date.next_day();
        let event_skipped = self.event_days.contains(&self.date.total_days());
        controller.handle(
            self,
            HookEvent::ScriptedEventSetup {
                did_start: !event_skipped,
            },
        );

        self.state.end_of_night_menus = 1;
        controller.handle(self, HookEvent::EndOfNight);
        let save_menu_shown = self.state.end_of_night_menus > 0;
        if save_menu_shown {
            self.state.end_of_night_menus = 0;
            self.state.active_menu = Some(ActiveMenu::SaveGame);
            self.state.player_free = false;
            for _ in 0..SAVE_MENU_FRAMES {
                self.frame(controller);
            }
            self.state.active_menu = None;
            self.state.player_free = true;
        }

        controller.handle(self, HookEvent::DayStarted);

        let blocked_by = if self.rng.random_bool(self.block_chance) {
            let reason = BLOCKERS[self.rng.random_range(0..BLOCKERS.len())];
            Some((reason, self.rng.random_range(5..40)))
        } else {
            None
        };
        self.wake_key_down = self.escape_day == Some(self.date.total_days());

        let snaps_before = self.snaps;
        let mut frames = 0;
        while frames < MAX_FRAMES_PER_DAY && !self.advance_requested {
            let blocking = blocked_by.is_some_and(|(_, len)| frames < len);
            self.set_blocker(blocked_by.map(|(reason, _)| reason), blocking);
            self.frame(controller);
            frames += 1;
            if controller.phase() == Phase::Idle {
                break;
            }
        }
        self.set_blocker(blocked_by.map(|(reason, _)| reason), false);
        self.wake_key_down = false;
        if frames >= MAX_FRAMES_PER_DAY {
            log::warn!("{} never settled after {frames} frames", self.date);
        }

        NightReport {
            date: self.date,
            nights_left: controller.nights_remaining(),
            frames,
            blocked_by,
            save_menu_shown,
            fade_skipped: self.snaps > snaps_before,
            event_skipped,
            status: self.last_status.take(),
        }
    }

    fn frame(&mut self, controller: &mut HibernationController) {
        controller.handle(self, HookEvent::FrameUpdate);
        controller.handle(self, HookEvent::FrameDraw);
        if !self.advance_requested {
            self.state.fade_to_black = (self.state.fade_to_black - FADE_IN_STEP).max(0.0);
        }
    }

    fn set_blocker(&mut self, reason: Option<BlockReason>, on: bool) {
        match reason {
            Some(BlockReason::Dialogue) => self.state.dialogue_up = on,
            Some(BlockReason::PendingMessage) => {
                self.state.message_after_pause = if on {
                    "You found a letter in the mailbox.".to_string()
                } else {
                    String::new()
                };
            }
            Some(BlockReason::ScriptedEvent) => self.state.event_up = on,
            _ => {}
        }
    }
}

impl CalendarSource for SimulatedHost {
    fn birthdays_on(&self, date: &WorldDate) -> Vec<String> {
        self.calendar.birthdays_on(date)
    }

    fn festival_on(&self, date: &WorldDate) -> Option<String> {
        self.calendar.festival_on(date)
    }
}

impl Host for SimulatedHost {
    fn current_date(&self) -> WorldDate {
        self.date
    }

    fn state(&self) -> HostState {
        self.state.clone()
    }

    fn request_day_advance(&mut self) -> HostResult<()> {
        self.advance_requested = true;
        Ok(())
    }

    fn force_visual_snap_to_faded(&mut self) -> HostResult<()> {
        self.state.fade_to_black = 1.0;
        self.snaps += 1;
        Ok(())
    }

    fn suppress_end_of_night_menu(&mut self) -> HostResult<()> {
        if self.state.active_menu == Some(ActiveMenu::SaveGame) {
            self.state.active_menu = None;
        } else if self.state.end_of_night_menus > 0 {
            self.state.end_of_night_menus -= 1;
        } else {
            return Err(HostError::call_failed(
                "suppress_end_of_night_menu",
                "no end-of-night menu pending",
            ));
        }
        Ok(())
    }

    fn show_question(&mut self, question: Question) -> HostResult<()> {
        self.questions.push(question);
        Ok(())
    }

    fn draw(&mut self, commands: &[DrawCommand]) -> HostResult<()> {
        // second text line is the status
        self.last_status = commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .nth(1);
        Ok(())
    }

    fn viewport(&self) -> Vec2 {
        Vec2::new(1280.0, 720.0)
    }

    fn is_wake_key_down(&self) -> bool {
        self.wake_key_down
    }
}
