use std::time::Instant;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::app::{App, Msg};
use crate::host::WindowHost;

/// Left-click on a draft segment focuses it. Everything else is ignored;
/// the keyboard remains the primary way to configure.
pub fn handle_mouse_event<H: WindowHost>(app: &mut App<H>, mouse: MouseEvent, now: Instant) {
    if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
        return;
    }
    let Some(areas) = app.segment_areas else {
        return;
    };
    if let Some(segment) = areas.hit(mouse.column, mouse.row) {
        app.dispatch(Msg::FocusSegment(segment), now);
    }
}
