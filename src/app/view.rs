//! Read-only projection of the state for rendering.

use super::state::TimerState;
use super::status::Status;
use crate::timer::{format_mm_ss, Segment};

/// What the clock area shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClockView {
    /// Remaining time as `MM:SS`
    Countdown {
        text: String,
        /// Stopped at zero after a real duration
        expired: bool,
    },
    /// Draft duration, one string per segment
    Draft {
        minutes: String,
        seconds: String,
        focused: Segment,
    },
}

/// Everything the renderer needs, derived from one state snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerView {
    pub clock: ClockView,
    pub is_hidden: bool,
    pub status: Status,
    pub mode_name: &'static str,
}

impl TimerView {
    pub fn project(state: &TimerState) -> Self {
        let clock = match state.mode.draft() {
            Some(draft) => ClockView::Draft {
                minutes: format!("{:02}", draft.minutes()),
                seconds: format!("{:02}", draft.seconds()),
                focused: draft.focused(),
            },
            None => ClockView::Countdown {
                text: format_mm_ss(state.countdown.remaining()),
                expired: state.countdown.is_expired(),
            },
        };
        Self {
            clock,
            is_hidden: state.is_hidden,
            status: Status::of(state),
            mode_name: state.mode.display_name(),
        }
    }

    /// Status text, or `None` while hidden
    pub fn status_line(&self) -> Option<&'static str> {
        (!self.is_hidden).then(|| self.status.message())
    }
}
