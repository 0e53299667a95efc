//! Session lifecycle states.

use std::fmt;

/// Lifecycle state of a location session.
///
/// States advance strictly forward; `Closed` is terminal. Failures during
/// configuration jump directly to `Closed` without passing through `Active`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    /// No session negotiated yet.
    Idle,
    /// Session created, accuracy being configured; not yet streaming.
    Configuring,
    /// Streaming updates; the countdown timer is armed.
    Active,
    /// Stop requested; waiting for the provider stop to complete.
    Stopping,
    /// Terminal. A new session requires a new controller.
    Closed,
}

impl SessionState {
    /// Whether the state machine accepts a transition to `next`.
    pub fn can_transition_to(self, next: SessionState) -> bool {
        matches!(
            (self, next),
            (SessionState::Idle, SessionState::Configuring)
                | (SessionState::Configuring, SessionState::Active)
                // Configuration failures close the session without starting.
                | (SessionState::Configuring, SessionState::Closed)
                | (SessionState::Active, SessionState::Stopping)
                | (SessionState::Stopping, SessionState::Closed)
        )
    }

    /// Whether this state is terminal.
    pub fn is_terminal(self) -> bool {
        self == SessionState::Closed
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
