use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Areas of the full-screen timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub title: Rect,
    pub clock: Rect,
    pub status: Rect,
    pub footer: Rect,
    /// Present when the key hint bar is enabled
    pub help_bar: Option<Rect>,
}

/// Split the screen: title on top, clock in the middle, status, footer and
/// optional help bar at the bottom
pub fn create_screen_layout(area: Rect, show_help_bar: bool) -> ScreenLayout {
    let help_height = u16::from(show_help_bar);
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(help_height),
        ])
        .split(area);

    ScreenLayout {
        title: vertical[1],
        clock: vertical[2],
        status: vertical[3],
        footer: vertical[4],
        help_bar: show_help_bar.then_some(vertical[5]),
    }
}
