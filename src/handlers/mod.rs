//! Translate terminal input into state machine messages.

pub mod keyboard;
pub mod mouse;

pub use keyboard::handle_key_event;
pub use mouse::handle_mouse_event;
