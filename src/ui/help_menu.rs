//! Help menu overlay showing all keybindings.
//!
//! Toggled by `?` in normal mode. Lists the bindings for both modes in a
//! centered popup.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// A single keybinding entry for display
struct HelpEntry {
    key: &'static str,
    label: &'static str,
}

const NORMAL_ENTRIES: &[HelpEntry] = &[
    HelpEntry { key: "i", label: "start / pause" },
    HelpEntry { key: "r", label: "reset" },
    HelpEntry { key: "f", label: "set time" },
    HelpEntry { key: "m", label: "hide text" },
    HelpEntry { key: "x", label: "close" },
    HelpEntry { key: "?", label: "this help" },
];

const CONFIG_ENTRIES: &[HelpEntry] = &[
    HelpEntry { key: "↑/↓", label: "adjust" },
    HelpEntry { key: "←/→", label: "segment" },
    HelpEntry { key: "0-9", label: "type" },
    HelpEntry { key: "f/Enter", label: "save" },
    HelpEntry { key: "Esc", label: "cancel" },
];

/// Width of the key column
const KEY_WIDTH: usize = 9;

/// Widget that renders the help menu overlay
#[derive(Default)]
pub struct HelpMenuWidget;

impl HelpMenuWidget {
    /// Create a new help menu widget
    pub fn new() -> Self {
        Self
    }

    /// Calculate the area for the help popup, centered on the screen
    pub fn calculate_area(screen: Rect) -> Rect {
        // Two section headers, one blank separator, plus borders
        let height = (NORMAL_ENTRIES.len() + CONFIG_ENTRIES.len() + 3 + 2) as u16;
        let width = 36u16;
        let height = height.min(screen.height);
        let width = width.min(screen.width);

        Rect {
            x: screen.x + (screen.width - width) / 2,
            y: screen.y + (screen.height - height) / 2,
            width,
            height,
        }
    }

    fn section(title: &'static str, entries: &[HelpEntry]) -> Vec<Line<'static>> {
        let mut lines = vec![Line::from(Span::styled(
            title,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))];
        lines.extend(entries.iter().map(|entry| {
            Line::from(vec![
                Span::styled(
                    format!(" {:<width$}", entry.key, width = KEY_WIDTH),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(entry.label, Style::default().fg(Color::White)),
            ])
        }));
        lines
    }

    /// Build the help text, normal bindings first
    fn build_lines() -> Vec<Line<'static>> {
        let mut lines = Self::section("Timer", NORMAL_ENTRIES);
        lines.push(Line::default());
        lines.extend(Self::section("Setting the time", CONFIG_ENTRIES));
        lines
    }
}

impl Widget for HelpMenuWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Clear the area first (overlay effect)
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(Span::styled(
                " ? | Keybindings ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ))
            .style(Style::default().bg(Color::Black));

        Paragraph::new(Self::build_lines())
            .block(block)
            .style(Style::default().bg(Color::Black))
            .render(area, buf);
    }
}
