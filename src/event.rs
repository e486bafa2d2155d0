pub use crossterm::event::{Event as CrosstermEvent, KeyEvent, MouseEvent};

/// Terminal events the event loop reacts to
#[derive(Debug, Clone)]
pub enum Event {
    /// Keyboard input
    Key(KeyEvent),
    /// Mouse input
    Mouse(MouseEvent),
    /// Terminal resize; the next draw picks up the new size
    Resize(u16, u16),
    /// Focus changes, paste and the like
    Ignored,
}

impl From<CrosstermEvent> for Event {
    fn from(event: CrosstermEvent) -> Self {
        match event {
            CrosstermEvent::Key(key) => Event::Key(key),
            CrosstermEvent::Mouse(mouse) => Event::Mouse(mouse),
            CrosstermEvent::Resize(w, h) => Event::Resize(w, h),
            _ => Event::Ignored,
        }
    }
}
