//! State snapshot consumed by the reducer and the renderer.

use crate::input::Mode;
use crate::timer::{Countdown, Segment};

/// Everything the keyboard state machine reads and writes.
///
/// Small and `Copy`, so the reducer can take it by value and hand back the
/// next snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimerState {
    /// Configured and remaining duration plus the run flag
    pub countdown: Countdown,
    /// Normal or configuring (with its draft)
    pub mode: Mode,
    /// Title and status text hidden; digits stay visible
    pub is_hidden: bool,
}

impl TimerState {
    /// Stopped countdown with `initial` seconds configured
    pub fn with_duration(initial: u32) -> Self {
        Self {
            countdown: Countdown::new(initial),
            ..Self::default()
        }
    }

    pub fn is_running(&self) -> bool {
        self.countdown.is_running()
    }

    /// Focused draft segment while configuring
    pub fn focused_segment(&self) -> Option<Segment> {
        self.mode.draft().map(|draft| draft.focused())
    }
}

/// Message fed to the reducer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    /// A normalized key press
    Key(crate::input::Key),
    /// One second elapsed on the tick resource
    Tick,
    /// Pointer focus on a draft segment
    FocusSegment(Segment),
}

/// Side effect requested from the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Close the hosting window
    CloseWindow,
}

/// Outcome of one reducer step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Next state snapshot
    pub state: TimerState,
    /// Host effect to run, if any
    pub effect: Option<Effect>,
    /// The host must not run its own default action for this key
    pub default_prevented: bool,
}

impl Transition {
    pub(crate) fn to(state: TimerState) -> Self {
        Self {
            state,
            effect: None,
            default_prevented: false,
        }
    }
}
