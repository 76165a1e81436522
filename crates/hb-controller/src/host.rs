//! The outbound half of the hook interface: everything the controller asks of
//! the host game.

use hb_core::{CalendarSource, WorldDate};

use crate::error::HostResult;
use crate::menu::Question;
use crate::text::Text;

/// Approximate glyph width used by [`Host::measure_text`]'s default.
pub const DEFAULT_GLYPH_WIDTH: f32 = 16.0;
/// Approximate line height used by [`Host::measure_text`]'s default.
pub const DEFAULT_LINE_HEIGHT: f32 = 40.0;

/// Kind of menu the host currently has open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveMenu {
    /// The end-of-night save menu.
    SaveGame,
    /// Any other modal menu.
    Other,
}

/// Snapshot of the host's interactive state, read fresh every frame.
#[derive(Debug, Clone, PartialEq)]
pub struct HostState {
    /// The modal menu currently open, if any.
    pub active_menu: Option<ActiveMenu>,
    /// Number of end-of-night menus still queued.
    pub end_of_night_menus: usize,
    /// A dialogue box is on screen.
    pub dialogue_up: bool,
    /// A scripted event is running.
    pub event_up: bool,
    /// A farm-level scripted event object is set.
    pub farm_event_pending: bool,
    /// Message queued to show after the current pause. Empty when none.
    pub message_after_pause: String,
    /// The player can act (no cutscene, no freeze, no menu).
    pub player_free: bool,
    /// Current fade-to-black amount, 0 (none) to 1 (fully black).
    pub fade_to_black: f32,
}

impl Default for HostState {
    fn default() -> Self {
        Self {
            active_menu: None,
            end_of_night_menus: 0,
            dialogue_up: false,
            event_up: false,
            farm_event_pending: false,
            message_after_pause: String::new(),
            player_free: true,
            fade_to_black: 0.0,
        }
    }
}

/// A 2D point or size in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    /// Horizontal component.
    pub x: f32,
    /// Vertical component.
    pub y: f32,
}

impl Vec2 {
    /// Build a vector.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A source rectangle within a sprite sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    /// Left edge.
    pub x: u32,
    /// Top edge.
    pub y: u32,
    /// Width.
    pub width: u32,
    /// Height.
    pub height: u32,
}

impl Rect {
    /// Build a rectangle.
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Sprite sheets the overlay draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteSheet {
    /// The bear character sheet.
    Bear,
    /// The shared emote sheet holding the sleep icon.
    Emotes,
}

/// One draw call issued by the overlay.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Full-screen black rectangle.
    Dim {
        /// Opacity.
        alpha: f32,
    },
    /// A sprite from one of the sheets.
    Sprite {
        /// Sheet to draw from.
        sheet: SpriteSheet,
        /// Source rectangle within the sheet.
        source: Rect,
        /// Screen position of the origin.
        position: Vec2,
        /// Origin within the source rectangle, in unscaled pixels.
        origin: Vec2,
        /// Uniform scale.
        scale: f32,
        /// Opacity.
        alpha: f32,
    },
    /// A line of text in the dialogue font.
    Text {
        /// The text to draw.
        text: String,
        /// Top-left screen position.
        position: Vec2,
        /// Uniform scale.
        scale: f32,
        /// Opacity.
        alpha: f32,
    },
}

/// The host game as seen by the controller.
///
/// Calendar lookups come from the [`CalendarSource`] supertrait. Calls that
/// change host state return [`HostResult`]; the controller treats a failure as
/// a skipped tick and tries again on the next decision point.
pub trait Host: CalendarSource {
    /// Today's date.
    fn current_date(&self) -> WorldDate;

    /// Current interactive state. Never cached by the controller.
    fn state(&self) -> HostState;

    /// Start the host's sleep / day-advance sequence.
    fn request_day_advance(&mut self) -> HostResult<()>;

    /// Jump straight to a fully faded screen, skipping the fade animation.
    fn force_visual_snap_to_faded(&mut self) -> HostResult<()>;

    /// Close the pending save / end-of-night menu without player input.
    fn suppress_end_of_night_menu(&mut self) -> HostResult<()>;

    /// Show a question dialogue. The answer comes back through
    /// [`crate::HibernationController::on_question_answered`].
    fn show_question(&mut self, question: Question) -> HostResult<()>;

    /// Submit the overlay's draw calls for this frame.
    fn draw(&mut self, commands: &[DrawCommand]) -> HostResult<()>;

    /// Screen size in pixels.
    fn viewport(&self) -> Vec2;

    /// Size of `text` in the dialogue font at scale 1.
    fn measure_text(&self, text: &str) -> Vec2 {
        Vec2::new(
            text.chars().count() as f32 * DEFAULT_GLYPH_WIDTH,
            DEFAULT_LINE_HEIGHT,
        )
    }

    /// Resolve a player-facing string.
    fn localize(&self, text: &Text) -> String {
        text.english()
    }

    /// Display name for a villager's internal name.
    fn display_name(&self, name: &str) -> String {
        name.to_string()
    }

    /// `true` while the player holds the wake-up key.
    fn is_wake_key_down(&self) -> bool {
        false
    }

    /// `true` when this is a single-player session.
    fn is_single_player(&self) -> bool {
        true
    }
}
