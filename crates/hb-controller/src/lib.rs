//! The hibernation controller for Hibernation.
//!
//! Drives a host game through a run of skipped days. The host reports events
//! (day started, frame update, end of night, ...) and the controller answers
//! with outbound calls on the [`Host`] trait: advance the day, skip the fade,
//! dismiss the save menu, draw the overlay. All state lives in a
//! [`HibernationController`] and is reset per session.

/// Controller configuration.
pub mod config;
/// The hibernation state machine and its event handlers.
pub mod controller;
/// Error types for host calls.
pub mod error;
/// Controller event types and the event log.
pub mod event;
/// The gate deciding when a postponed day may continue.
pub mod gate;
/// Hook points and the host events they deliver.
pub mod hooks;
/// The host interface and its value types.
pub mod host;
/// The sleep-dialogue additions and hibernation questions.
pub mod menu;
/// Overlay opacity and layout.
pub mod overlay;
/// Per-session controller state.
pub mod state;
/// A recording host for tests.
#[cfg(any(test, feature = "testing-support"))]
pub mod testing;
/// Player-facing text.
pub mod text;
/// Early-wake triggers and hibernation requests.
pub mod trigger;

/// Re-export of [`config::ControllerConfig`].
pub use config::ControllerConfig;
/// Re-export of [`controller::HibernationController`].
pub use controller::HibernationController;
/// Re-exports of [`error::HostError`] and [`error::HostResult`].
pub use error::{HostError, HostResult};
/// Re-exports of the event log types.
pub use event::{ControllerEvent, ControllerEventKind, EventLog};
/// Re-exports of the postponement gate types.
pub use gate::{BlockReason, GateStatus, PostponementGate};
/// Re-exports of the hook types.
pub use hooks::{HookEvent, HookPoint, HookRegistry};
/// Re-exports of the host interface types.
pub use host::{ActiveMenu, DrawCommand, Host, HostState, Rect, SpriteSheet, Vec2};
/// Re-exports of the dialogue types.
pub use menu::{DialogueResponse, Question, QuestionKind, UntilChoice};
/// Re-export of [`overlay::OverlayAnimator`].
pub use overlay::OverlayAnimator;
/// Re-exports of [`state::ControllerState`] and [`state::Phase`].
pub use state::{ControllerState, Phase};
/// Re-export of [`text::Text`].
pub use text::Text;
/// Re-exports of [`trigger::HibernationRequest`] and [`trigger::WakeTrigger`].
pub use trigger::{HibernationRequest, WakeTrigger};
