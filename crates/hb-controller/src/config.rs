use hb_core::HibernationConfig;

/// Configuration for a controller instance.
#[derive(Debug, Clone, Default)]
pub struct ControllerConfig {
    /// Player-facing presets.
    pub hibernation: HibernationConfig,
    /// Maximum event log size (oldest events dropped when exceeded). 0 = unlimited.
    pub max_events: usize,
}

impl ControllerConfig {
    /// Set the player-facing presets.
    pub fn with_hibernation(mut self, hibernation: HibernationConfig) -> Self {
        self.hibernation = hibernation;
        self
    }

    /// Set the maximum event log size (0 = unlimited).
    pub fn with_max_events(mut self, max: usize) -> Self {
        self.max_events = max;
        self
    }
}
