//! The hosting window seam.
//!
//! The state machine only ever asks its host to close. The terminal host
//! answers by flagging the event loop to exit.

use tracing::info;

/// Window-management collaborator
pub trait WindowHost {
    /// Close the current window. Fire-and-forget: nothing is returned.
    fn close_window(&mut self);
}

/// Host backed by the full-screen terminal session
#[derive(Debug, Default)]
pub struct TerminalWindow {
    closed: bool,
}

impl TerminalWindow {
    pub fn new() -> Self {
        Self::default()
    }

    /// True once a close was requested; the event loop exits on its next turn
    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl WindowHost for TerminalWindow {
    fn close_window(&mut self) {
        if !self.closed {
            info!("window close requested");
        }
        self.closed = true;
    }
}
