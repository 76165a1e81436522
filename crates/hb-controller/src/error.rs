use crate::hooks::HookPoint;

/// Alias for `Result<T, HostError>`.
pub type HostResult<T> = Result<T, HostError>;

/// Failures reported by the host when the controller calls into it, or when a
/// hook point could not be installed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    /// An outbound call was rejected by the host.
    #[error("host call {call} failed: {reason}")]
    CallFailed {
        /// Name of the outbound call.
        call: &'static str,
        /// Host-provided reason.
        reason: String,
    },

    /// The host could not locate or install the given hook point.
    #[error("hook point {0} is unavailable")]
    HookUnavailable(HookPoint),
}

impl HostError {
    /// Shorthand for [`HostError::CallFailed`].
    pub fn call_failed(call: &'static str, reason: impl Into<String>) -> Self {
        Self::CallFailed {
            call,
            reason: reason.into(),
        }
    }
}
