//! Input modes and presentation-free key identities.
//!
//! The interface has two modes:
//! - **Normal**: keys start, pause, reset, hide text or close the window
//! - **Configuring**: keys edit a draft duration
//!
//! Keys arrive here already normalized by the terminal handlers, so the state
//! machine never sees crossterm types.

use crate::timer::ConfigDraft;

/// Normalized key identity handed to the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A character key, lower-cased
    Char(char),
    Up,
    Down,
    Left,
    Right,
    Enter,
    Escape,
    /// Anything the state machine has no binding for
    Other,
}

impl Key {
    /// Build a character key, lower-casing it
    pub fn char(c: char) -> Self {
        Key::Char(c.to_lowercase().next().unwrap_or(c))
    }

    /// Decimal value of a digit key
    pub fn digit(self) -> Option<u32> {
        match self {
            Key::Char(c) => c.to_digit(10),
            _ => None,
        }
    }
}

/// Which set of bindings is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Keys control the countdown
    #[default]
    Normal,
    /// Keys edit a draft duration; the draft only exists in this mode
    Configuring(ConfigDraft),
}

impl Mode {
    /// Badge text shown at the start of the help bar
    pub fn display_name(&self) -> &'static str {
        match self {
            Mode::Normal => "NORMAL",
            Mode::Configuring(_) => "CONFIG",
        }
    }

    pub fn is_configuring(&self) -> bool {
        matches!(self, Mode::Configuring(_))
    }

    /// The draft being edited, when configuring
    pub fn draft(&self) -> Option<&ConfigDraft> {
        match self {
            Mode::Normal => None,
            Mode::Configuring(draft) => Some(draft),
        }
    }
}
