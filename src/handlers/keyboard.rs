use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{App, Msg};
use crate::host::WindowHost;
use crate::input::Key;

/// Normalize a crossterm key into the state machine's key identity
pub fn to_key(key: &KeyEvent) -> Key {
    match key.code {
        KeyCode::Char(c) => Key::char(c),
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Escape,
        _ => Key::Other,
    }
}

/// Route one key press.
///
/// Order:
/// 1. Ctrl+C closes the window in every mode, before the state machine sees it
/// 2. The state machine handles the key
/// 3. Unless the state machine prevented it, the host default action runs
pub fn handle_key_event<H: WindowHost>(app: &mut App<H>, key: KeyEvent, now: Instant) {
    // Release/repeat events are reported on some platforms; act on presses only
    if key.kind != KeyEventKind::Press {
        return;
    }

    if let (KeyCode::Char('c'), KeyModifiers::CONTROL) = (key.code, key.modifiers) {
        app.host_mut().close_window();
        return;
    }

    let prevented = app.dispatch(Msg::Key(to_key(&key)), now);
    if !prevented {
        default_action(app, key);
    }
}

/// Host-level bindings the state machine leaves alone
fn default_action<H: WindowHost>(app: &mut App<H>, key: KeyEvent) {
    match key.code {
        KeyCode::Char('?') => app.toggle_help(),
        KeyCode::Esc if app.show_help => app.toggle_help(),
        _ => {}
    }
}
