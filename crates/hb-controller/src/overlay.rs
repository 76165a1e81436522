//! The hibernation overlay: a smoothed opacity plus the layout of the bear,
//! the sleep icon, and the status text.

use hb_core::{Nights, WorldDate};

use crate::host::{ActiveMenu, DrawCommand, Host, HostState, Rect, SpriteSheet, Vec2};
use crate::text::Text;

/// Fraction of the remaining distance covered per frame.
pub const SMOOTHING: f32 = 0.1;
/// Above this the alpha snaps to 1.
pub const SNAP_HIGH: f32 = 0.98;
/// Below this the alpha snaps to 0.
pub const SNAP_LOW: f32 = 0.02;

const BEAR_SCALE: f32 = 4.0;
const SLEEP_ICON_SCALE: f32 = 4.0;
const BEAR_TO_TEXT_SPACING: f32 = 48.0;
const LINE_SPACING: f32 = 4.0;

const BEAR_AWAKE: Rect = Rect::new(0, 0, 32, 32);
const BEAR_SLEEPING: [Rect; 2] = [Rect::new(0, 128, 32, 32), Rect::new(32, 128, 32, 32)];
const SLEEP_ICON: [Rect; 4] = [
    Rect::new(0, 96, 16, 16),
    Rect::new(16, 96, 16, 16),
    Rect::new(32, 96, 16, 16),
    Rect::new(48, 96, 16, 16),
];

/// Owns the overlay opacity and eases it toward 0 or 1 once per frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OverlayAnimator {
    alpha: f32,
}

impl OverlayAnimator {
    /// A hidden overlay.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current opacity in `[0, 1]`.
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Step toward the target and return the new opacity.
    pub fn update(&mut self, visible: bool) -> f32 {
        let target = if visible { 1.0 } else { 0.0 };
        self.alpha += (target - self.alpha) * SMOOTHING;
        if self.alpha > SNAP_HIGH {
            self.alpha = 1.0;
        } else if self.alpha < SNAP_LOW {
            self.alpha = 0.0;
        }
        self.alpha
    }
}

/// Whether the overlay should be fading in this frame.
///
/// Visible while hibernating and either the save menu is up, or no menu is
/// open, nothing is queued, and the screen is at least partly faded.
pub fn should_display(nights: Nights, host: &HostState) -> bool {
    if nights.is_zero() {
        return false;
    }
    host.active_menu == Some(ActiveMenu::SaveGame)
        || (host.end_of_night_menus == 0 && host.active_menu.is_none() && host.fade_to_black > 0.0)
}

/// Date-keyed frame of a `cycle_len`-frame animation.
pub fn frame_index(total_days: u32, cycle_len: usize) -> usize {
    total_days as usize % cycle_len
}

/// The status line for the given state.
pub fn status_text(nights: Nights, has_trigger: bool) -> Text {
    match nights {
        Nights::Finite(n) if n <= 1 => Text::WakingUp,
        Nights::Infinite => Text::Forever,
        Nights::Finite(n) if has_trigger => Text::NightsLeftUpTo(n),
        Nights::Finite(n) => Text::NightsLeft(n),
    }
}

struct Line {
    text: String,
    size: Vec2,
    scale: f32,
}

/// Everything the overlay needs to lay out one frame.
#[derive(Debug, Clone, Copy)]
pub struct OverlayFrame {
    /// Nights remaining.
    pub nights: Nights,
    /// Whether an early-wake trigger is set.
    pub has_trigger: bool,
    /// Today's date.
    pub date: WorldDate,
    /// Overlay opacity.
    pub alpha: f32,
}

impl OverlayFrame {
    /// Build the draw calls for this frame, vertically centered as a block.
    pub fn layout<H: Host + ?Sized>(&self, host: &H) -> Vec<DrawCommand> {
        let sleeping = self.nights.exceeds(1);
        let mut lines = Vec::with_capacity(4);
        let mut add_line = |text: String, scale: f32| {
            let size = host.measure_text(&text);
            lines.push(Line { text, size, scale });
        };
        add_line(host.localize(&Text::DateLine(self.date)), 1.5);
        add_line(
            host.localize(&status_text(self.nights, self.has_trigger)),
            1.0,
        );
        if sleeping {
            add_line(" ".to_string(), 0.5);
            add_line(host.localize(&Text::EscapeToWake), 0.75);
        }

        let text_height = lines.iter().map(|l| l.size.y * l.scale).sum::<f32>()
            + LINE_SPACING * lines.len().saturating_sub(1) as f32;

        let viewport = host.viewport();
        let bear_width = BEAR_AWAKE.width as f32 * BEAR_SCALE;
        let bear_height = BEAR_AWAKE.height as f32 * BEAR_SCALE;
        let total_days = self.date.total_days();

        let mut commands = Vec::with_capacity(lines.len() + 3);
        if sleeping {
            commands.push(DrawCommand::Dim { alpha: self.alpha });
        }

        let mut y = viewport.y * 0.5 - (text_height + BEAR_TO_TEXT_SPACING + bear_height) * 0.5;
        let bear_source = if sleeping {
            BEAR_SLEEPING[frame_index(total_days, BEAR_SLEEPING.len())]
        } else {
            BEAR_AWAKE
        };
        commands.push(DrawCommand::Sprite {
            sheet: SpriteSheet::Bear,
            source: bear_source,
            position: Vec2::new(viewport.x * 0.5 - bear_width * 0.5, y),
            origin: Vec2::default(),
            scale: BEAR_SCALE,
            alpha: self.alpha,
        });
        if sleeping {
            let icon = SLEEP_ICON[frame_index(total_days, SLEEP_ICON.len())];
            commands.push(DrawCommand::Sprite {
                sheet: SpriteSheet::Emotes,
                source: icon,
                position: Vec2::new(viewport.x * 0.5, y + bear_height * 0.2),
                origin: Vec2::new(icon.width as f32 * 0.5, icon.height as f32),
                scale: SLEEP_ICON_SCALE,
                alpha: self.alpha,
            });
        }
        y += bear_height + BEAR_TO_TEXT_SPACING;

        for line in lines {
            commands.push(DrawCommand::Text {
                position: Vec2::new(viewport.x * 0.5 - line.size.x * 0.5 * line.scale, y),
                text: line.text,
                scale: line.scale,
                alpha: self.alpha,
            });
            y += line.size.y * line.scale + LINE_SPACING;
        }
        commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_step_from_zero_is_one_tenth() {
        let mut overlay = OverlayAnimator::new();
        assert_eq!(overlay.update(true), 0.1);
    }

    #[test]
    fn converges_and_snaps_to_one() {
        let mut overlay = OverlayAnimator::new();
        let mut steps = 0;
        while overlay.alpha() < 1.0 {
            let before = overlay.alpha();
            let after = overlay.update(true);
            assert!(after > before);
            steps += 1;
            assert!(steps < 100, "alpha never reached 1");
        }
        assert_eq!(overlay.alpha(), 1.0);
    }

    #[test]
    fn fades_out_and_snaps_to_zero() {
        let mut overlay = OverlayAnimator { alpha: 1.0 };
        let mut steps = 0;
        while overlay.alpha() > 0.0 {
            overlay.update(false);
            steps += 1;
            assert!(steps < 100, "alpha never reached 0");
        }
        assert_eq!(overlay.alpha(), 0.0);
    }

    #[test]
    fn small_alpha_snaps_immediately() {
        let mut overlay = OverlayAnimator { alpha: 0.015 };
        assert_eq!(overlay.update(false), 0.0);
    }

    #[test]
    fn visibility_rules() {
        let faded = HostState {
            fade_to_black: 0.5,
            ..HostState::default()
        };
        assert!(should_display(Nights::Finite(3), &faded));
        assert!(!should_display(Nights::ZERO, &faded));
        assert!(!should_display(Nights::Finite(3), &HostState::default()));

        let queued = HostState {
            end_of_night_menus: 1,
            ..faded.clone()
        };
        assert!(!should_display(Nights::Finite(3), &queued));

        let saving = HostState {
            active_menu: Some(ActiveMenu::SaveGame),
            end_of_night_menus: 1,
            ..HostState::default()
        };
        assert!(should_display(Nights::Infinite, &saving));

        let other_menu = HostState {
            active_menu: Some(ActiveMenu::Other),
            ..faded
        };
        assert!(!should_display(Nights::Finite(3), &other_menu));
    }

    #[test]
    fn frame_is_keyed_by_date() {
        assert_eq!(frame_index(0, 4), 0);
        assert_eq!(frame_index(6, 4), 2);
        assert_eq!(frame_index(7, 2), 1);
    }

    #[test]
    fn status_line_variants() {
        assert_eq!(status_text(Nights::Finite(1), false), Text::WakingUp);
        assert_eq!(status_text(Nights::ZERO, true), Text::WakingUp);
        assert_eq!(status_text(Nights::Infinite, true), Text::Forever);
        assert_eq!(status_text(Nights::Finite(5), false), Text::NightsLeft(5));
        assert_eq!(status_text(Nights::Finite(5), true), Text::NightsLeftUpTo(5));
    }
}
