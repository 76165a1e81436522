//! A host double that records every outbound call.

use hb_core::{CalendarSource, CalendarTable, WorldDate};

use crate::error::{HostError, HostResult};
use crate::host::{DrawCommand, Host, HostState, Vec2};
use crate::menu::Question;

/// Host whose state is set directly by the test and whose outbound calls are
/// counted instead of acted on.
#[derive(Debug, Clone)]
pub struct ScriptedHost {
    /// Today's date.
    pub date: WorldDate,
    /// Birthday and festival data.
    pub calendar: CalendarTable,
    /// Interactive state returned by [`Host::state`].
    pub state: HostState,
    /// Screen size.
    pub viewport: Vec2,
    /// Whether the wake key is held.
    pub wake_key_down: bool,
    /// Whether the session is single-player.
    pub single_player: bool,
    /// Make [`Host::request_day_advance`] fail.
    pub fail_day_advance: bool,
    /// Make [`Host::draw`] fail.
    pub fail_draw: bool,
    /// Successful day-advance requests.
    pub day_advance_requests: usize,
    /// Successful visual snaps.
    pub snaps: usize,
    /// End-of-night menu suppressions.
    pub suppressed_menus: usize,
    /// Questions shown, oldest first.
    pub questions: Vec<Question>,
    /// Draw calls per drawn frame.
    pub frames: Vec<Vec<DrawCommand>>,
}

impl ScriptedHost {
    /// A host on `date` with the given calendar and a clear state.
    pub fn new(date: WorldDate, calendar: CalendarTable) -> Self {
        Self {
            date,
            calendar,
            state: HostState::default(),
            viewport: Vec2::new(1280.0, 720.0),
            wake_key_down: false,
            single_player: true,
            fail_day_advance: false,
            fail_draw: false,
            day_advance_requests: 0,
            snaps: 0,
            suppressed_menus: 0,
            questions: Vec::new(),
            frames: Vec::new(),
        }
    }

    /// Move to the next day.
    pub fn advance_date(&mut self) {
        self.date = self.date.next_day();
    }
}

impl CalendarSource for ScriptedHost {
    fn birthdays_on(&self, date: &WorldDate) -> Vec<String> {
        self.calendar.birthdays_on(date)
    }

    fn festival_on(&self, date: &WorldDate) -> Option<String> {
        self.calendar.festival_on(date)
    }
}

impl Host for ScriptedHost {
    fn current_date(&self) -> WorldDate {
        self.date
    }

    fn state(&self) -> HostState {
        self.state.clone()
    }

    fn request_day_advance(&mut self) -> HostResult<()> {
        if self.fail_day_advance {
            return Err(HostError::call_failed("request_day_advance", "scripted failure"));
        }
        self.day_advance_requests += 1;
        Ok(())
    }

    fn force_visual_snap_to_faded(&mut self) -> HostResult<()> {
        self.snaps += 1;
        self.state.fade_to_black = 1.0;
        Ok(())
    }

    fn suppress_end_of_night_menu(&mut self) -> HostResult<()> {
        self.suppressed_menus += 1;
        Ok(())
    }

    fn show_question(&mut self, question: Question) -> HostResult<()> {
        self.questions.push(question);
        Ok(())
    }

    fn draw(&mut self, commands: &[DrawCommand]) -> HostResult<()> {
        if self.fail_draw {
            return Err(HostError::call_failed("draw", "scripted failure"));
        }
        self.frames.push(commands.to_vec());
        Ok(())
    }

    fn viewport(&self) -> Vec2 {
        self.viewport
    }

    fn is_wake_key_down(&self) -> bool {
        self.wake_key_down
    }

    fn is_single_player(&self) -> bool {
        self.single_player
    }
}
