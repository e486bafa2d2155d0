//! Status line derivation.
//!
//! The status is never stored; it is recomputed from the state on every draw.

use super::state::TimerState;

/// Which hint the status line shows, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Editing a draft duration
    Configuring,
    /// Counting down
    Running,
    /// Nothing configured yet
    NeedsConfiguration,
    /// Reached zero after a real duration
    Expired,
    /// Stopped part-way through
    Paused,
    /// Stopped at the full configured duration
    Ready,
}

impl Status {
    /// Derive the status from the current state
    pub fn of(state: &TimerState) -> Self {
        if state.mode.is_configuring() {
            return Status::Configuring;
        }
        let countdown = &state.countdown;
        if countdown.is_running() {
            return Status::Running;
        }
        if countdown.remaining() == 0 {
            return if countdown.initial() == 0 {
                Status::NeedsConfiguration
            } else {
                Status::Expired
            };
        }
        if countdown.remaining() < countdown.initial() {
            Status::Paused
        } else if countdown.initial() == 0 {
            Status::NeedsConfiguration
        } else {
            Status::Ready
        }
    }

    /// Text shown on the status line
    pub fn message(self) -> &'static str {
        match self {
            Status::Configuring => {
                "Enter the new time. Use ↑↓ and digits. ←→ to switch segment. 'F'/Enter to save, Esc to cancel."
            }
            Status::Running => {
                "Running... Press 'I' to pause | 'R' to reset | 'M' to hide | 'X' to close."
            }
            Status::NeedsConfiguration => "Press 'F' to set a time, then 'I' to start.",
            Status::Expired => "Time's up! Press 'F' to reconfigure | 'I' or 'R' to restart.",
            Status::Paused => "Paused. Press 'I' to resume | 'F' to configure | 'R' to reset.",
            Status::Ready => {
                "Press 'I' to start | 'F' to configure | 'R' to reset | 'M' to hide | 'X' to close."
            }
        }
    }
}
