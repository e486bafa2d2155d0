//! Application state and the adapter between the state machine and the host.

pub mod reducer;
mod state;
pub mod status;
pub mod view;

#[cfg(test)]
mod test_properties;

use std::time::Instant;

use ratatui::layout::{Position, Rect};
use tracing::debug;

use crate::config::Config;
use crate::host::{TerminalWindow, WindowHost};
use crate::timer::{Segment, Ticker};

pub use reducer::reduce;
pub use state::{Effect, Msg, TimerState, Transition};
pub use status::Status;
pub use view::{ClockView, TimerView};

/// Screen areas of the draft segments from the last draw, for mouse focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentAreas {
    pub minutes: Rect,
    pub seconds: Rect,
}

impl SegmentAreas {
    /// Segment under the given screen cell
    pub fn hit(&self, col: u16, row: u16) -> Option<Segment> {
        let position = Position::new(col, row);
        if self.minutes.contains(position) {
            Some(Segment::Minutes)
        } else if self.seconds.contains(position) {
            Some(Segment::Seconds)
        } else {
            None
        }
    }
}

/// Owns the timer state and applies reducer transitions.
///
/// After every transition the tick resource is re-synced, so it is held
/// exactly while the countdown is running with time left.
pub struct App<H: WindowHost = TerminalWindow> {
    state: TimerState,
    ticker: Ticker,
    host: H,
    /// Loaded configuration (title, footer, help bar)
    pub config: Config,
    /// Keybinding overlay shown (host default action for `?`)
    pub show_help: bool,
    /// Cached from the last draw while configuring
    pub segment_areas: Option<SegmentAreas>,
}

impl App<TerminalWindow> {
    /// App hosted by the terminal, starting from the configured duration
    pub fn new(config: Config) -> Self {
        Self::with_host(config, TerminalWindow::new())
    }
}

impl<H: WindowHost> App<H> {
    pub fn with_host(config: Config, host: H) -> Self {
        Self {
            state: TimerState::with_duration(config.timer.default_duration_secs),
            ticker: Ticker::default(),
            host,
            config,
            show_help: false,
            segment_areas: None,
        }
    }

    pub fn state(&self) -> &TimerState {
        &self.state
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    /// Render projection of the current state
    pub fn view(&self) -> TimerView {
        TimerView::project(&self.state)
    }

    /// Run one message through the reducer and apply its effect.
    ///
    /// Returns whether the host default action for the key was prevented.
    pub fn dispatch(&mut self, msg: Msg, now: Instant) -> bool {
        let transition = reduce(self.state, msg);
        if transition.state.mode.is_configuring() != self.state.mode.is_configuring() {
            self.segment_areas = None;
        }
        self.state = transition.state;
        if let Some(effect) = transition.effect {
            self.apply_effect(effect);
        }
        self.ticker.sync(self.state.countdown.is_ticking(), now);
        transition.default_prevented
    }

    /// Deliver a tick if one is due
    pub fn advance(&mut self, now: Instant) {
        if self.ticker.take_due(now) {
            self.dispatch(Msg::Tick, now);
        }
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
        debug!(visible = self.show_help, "help overlay toggled");
    }

    fn apply_effect(&mut self, effect: Effect) {
        match effect {
            Effect::CloseWindow => self.host.close_window(),
        }
    }
}
